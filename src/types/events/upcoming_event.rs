use crate::types::events::Event;
use chrono::NaiveDate;

/// The nearest event dated `today` or later.
///
/// Events sharing the earliest date are resolved by their order in `events`.
pub fn select_upcoming_event(events: &[Event], today: NaiveDate) -> Option<&Event> {
    events
        .iter()
        .filter(|event| event.is_upcoming(today))
        .min_by_key(|event| event.date)
}
