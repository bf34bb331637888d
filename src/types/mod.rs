pub mod content;
pub mod events;
pub mod gallery;
pub mod i18n;
pub mod monks;
pub mod site;
