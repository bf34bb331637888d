mod calendar_link;
pub use calendar_link::*;

mod json_ld;
pub use json_ld::*;

mod page_metadata;
pub use page_metadata::*;
