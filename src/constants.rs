use lazy_static::lazy_static;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use std::time::Duration;
use url::Url;

pub const SITE_NAME: &str = "Wat Serm Rangsi";
pub const SITE_LOCALITY: &str = "Bangkok";
pub const SITE_COUNTRY: &str = "TH";
pub const DEFAULT_LOCALE: &str = "th";
/// Locale used when a text record has no entry for the requested one.
pub const FALLBACK_LOCALE: &str = "en";
/// Locale of the text sent to third party calendars.
pub const CALENDAR_LOCALE: &str = "en";
pub const EVENT_ALERT_DISMISSED_STORAGE_KEY_PREFIX: &str = "event-alert-dismissed-";
pub const EVENT_ALERT_DISMISSAL_TTL_HOURS: i64 = 24;
pub const EVENT_ALERT_DELAY: Duration = Duration::from_millis(2000);
pub const EVENT_DEFAULT_ORDER: u32 = 999;
pub const RELATED_EVENTS_COUNT: usize = 3;
pub const EVENT_CALENDAR_START_TIME: &str = "090000";
pub const EVENT_CALENDAR_END_TIME: &str = "170000";
pub const EVENT_NOT_FOUND_TITLE: &str = "Event Not Found";
pub const MONK_NOT_FOUND_TITLE: &str = "Monk Not Found";
pub const OPEN_GRAPH_ARTICLE_TYPE: &str = "article";
pub const GOOGLE_CALENDAR_URL: &str = "https://calendar.google.com/calendar/render";
pub const SCHEMA_ORG_CONTEXT: &str = "https://schema.org";
pub const URI_COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

lazy_static! {
    pub static ref SCHEMA_ORG_EVENT_SCHEDULED: Url =
        Url::parse("https://schema.org/EventScheduled")
            .expect("SCHEMA_ORG_EVENT_SCHEDULED parse failed");
    pub static ref SCHEMA_ORG_OFFLINE_ATTENDANCE: Url =
        Url::parse("https://schema.org/OfflineEventAttendanceMode")
            .expect("SCHEMA_ORG_OFFLINE_ATTENDANCE parse failed");
}
