use crate::runtime::EnvError;
use crate::types::events::{Event, EventId};
use crate::types::gallery::GalleryItem;
use crate::types::monks::Monk;
use serde::{Deserialize, Serialize};

/// The static datasets the site is built from. Loaded once and never mutated.
#[derive(Default, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct SiteContent {
    pub events: Vec<Event>,
    pub gallery: Vec<GalleryItem>,
    pub monks: Vec<Monk>,
}

impl SiteContent {
    /// Parses the three JSON arrays (`events.json`, `gallery.json`, `monks.json`).
    pub fn from_json(events: &str, gallery: &str, monks: &str) -> Result<Self, EnvError> {
        Ok(SiteContent {
            events: serde_json::from_str(events)?,
            gallery: serde_json::from_str(gallery)?,
            monks: serde_json::from_str(monks)?,
        })
    }
    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }
    pub fn monk(&self, id: &str) -> Option<&Monk> {
        self.monks.iter().find(|monk| monk.id == id)
    }
}
