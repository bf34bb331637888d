use crate::types::events::{EventId, ScheduleRow};
use chrono::NaiveDate;
use serde::Serialize;

/// An [`Event`](crate::types::events::Event) with every text already resolved
/// for a single locale.
#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedEvent {
    pub id: EventId,
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub image: String,
    pub description: String,
    pub schedule: Vec<ScheduleRow>,
    pub map_url: String,
}
