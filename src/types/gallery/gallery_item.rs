use crate::types::i18n::LocalizedText;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GalleryCategory {
    Ceremony,
    Festival,
    Education,
    Daily,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct GalleryItem {
    pub id: u64,
    pub src: String,
    pub category: GalleryCategory,
    pub caption: LocalizedText,
}

#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
pub struct GallerySlide {
    pub src: String,
    pub title: String,
}

impl GalleryItem {
    pub fn slide(&self, locale: &str) -> GallerySlide {
        GallerySlide {
            src: self.src.to_owned(),
            title: self.caption.get(locale).to_owned(),
        }
    }
}
