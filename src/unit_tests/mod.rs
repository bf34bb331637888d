pub use env::*;

pub use fixtures::*;

mod calendar_link;
mod localized_text;
