use crate::constants::EVENT_DEFAULT_ORDER;
use crate::types::events::{schedule_rows, LocalizedEvent, ScheduleItem};
use crate::types::i18n::LocalizedText;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type EventId = u64;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: LocalizedText,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Free-form display time, e.g. `"09:00 - 17:00"`.
    pub time: String,
    pub location: LocalizedText,
    pub image: String,
    pub description: LocalizedText,
    #[serde(default)]
    pub schedule: Vec<ScheduleItem>,
    pub map_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl Event {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.unwrap_or_default()
    }
    /// `order: 0` counts as unset, same as a missing order.
    #[inline]
    pub fn display_order(&self) -> u32 {
        self.order
            .filter(|order| *order != 0)
            .unwrap_or(EVENT_DEFAULT_ORDER)
    }
    /// An event happening today still counts as upcoming.
    #[inline]
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.date >= today
    }
    pub fn localize(&self, locale: &str) -> LocalizedEvent {
        LocalizedEvent {
            id: self.id,
            title: self.title.get(locale).to_owned(),
            date: self.date,
            time: self.time.to_owned(),
            location: self.location.get(locale).to_owned(),
            image: self.image.to_owned(),
            description: self.description.get(locale).to_owned(),
            schedule: schedule_rows(&self.schedule, locale),
            map_url: self.map_url.to_owned(),
        }
    }
}
