use crate::constants::{
    CALENDAR_LOCALE, EVENT_CALENDAR_END_TIME, EVENT_CALENDAR_START_TIME, GOOGLE_CALENDAR_URL,
    URI_COMPONENT_ENCODE_SET,
};
use crate::types::events::Event;
use percent_encoding::utf8_percent_encode;

/// "Add to Google Calendar" template link for a whole-day event, always in
/// English since the calendar belongs to the visitor and not to the site.
///
/// Components are encoded like `encodeURIComponent`, `'` included as is.
pub fn google_calendar_link(event: &Event) -> String {
    let date = event.date.format("%Y%m%d");
    format!(
        "{}?action=TEMPLATE&text={}&details={}&location={}&dates={}T{}/{}T{}",
        GOOGLE_CALENDAR_URL,
        utf8_percent_encode(event.title.get(CALENDAR_LOCALE), URI_COMPONENT_ENCODE_SET),
        utf8_percent_encode(event.description.get(CALENDAR_LOCALE), URI_COMPONENT_ENCODE_SET),
        utf8_percent_encode(event.location.get(CALENDAR_LOCALE), URI_COMPONENT_ENCODE_SET),
        date,
        EVENT_CALENDAR_START_TIME,
        date,
        EVENT_CALENDAR_END_TIME,
    )
}
