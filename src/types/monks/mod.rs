mod monk;
pub use monk::*;
