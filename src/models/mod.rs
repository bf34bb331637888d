pub mod common;
pub mod ctx;

pub mod event_alert;
pub mod event_details;
pub mod event_list;
pub mod gallery;
pub mod monk_details;
