use crate::types::i18n::LocalizedText;
use serde::{Deserialize, Serialize};

pub type MonkId = String;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Monk {
    pub id: MonkId,
    pub name: LocalizedText,
    /// Ecclesiastical title or role, e.g. the abbot.
    pub title: LocalizedText,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography: Option<LocalizedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<LocalizedText>,
}
