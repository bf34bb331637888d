mod localized_text;
pub use localized_text::*;
