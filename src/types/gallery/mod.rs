mod gallery_item;
pub use gallery_item::*;
