use crate::types::i18n::LocalizedText;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct ScheduleItem {
    pub time: String,
    pub activity: LocalizedText,
    /// Label of the day this item belongs to, e.g. "Day 1" or "12 Feb".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<LocalizedText>,
}

#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRow {
    /// Present on the first row of every new day.
    pub day_header: Option<String>,
    pub time: String,
    pub activity: String,
}

/// Localizes a schedule, starting a new day group whenever an item's day label
/// differs from the label of the item right before it.
pub fn schedule_rows(schedule: &[ScheduleItem], locale: &str) -> Vec<ScheduleRow> {
    schedule
        .iter()
        .scan(None::<&str>, |previous_day, item| {
            let day = item
                .day
                .as_ref()
                .map(|day| day.get(locale))
                .filter(|day| !day.is_empty());
            let day_header = day
                .filter(|day| Some(*day) != *previous_day)
                .map(ToOwned::to_owned);
            *previous_day = day;
            Some(ScheduleRow {
                day_header,
                time: item.time.to_owned(),
                activity: item.activity.get(locale).to_owned(),
            })
        })
        .collect()
}
