use crate::constants::{EVENT_ALERT_DISMISSAL_TTL_HOURS, EVENT_ALERT_DISMISSED_STORAGE_KEY_PREFIX};
use crate::types::events::EventId;
use chrono::serde::ts_milliseconds;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// When the user last closed the alert of a given event.
///
/// Stored under [`DismissalRecord::storage_key`] as a bare millisecond
/// timestamp. Records are never deleted, they just stop counting once older
/// than [`EVENT_ALERT_DISMISSAL_TTL_HOURS`].
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(transparent)]
pub struct DismissalRecord {
    #[serde(with = "ts_milliseconds")]
    pub dismissed_at: DateTime<Utc>,
}

impl DismissalRecord {
    pub fn new(dismissed_at: DateTime<Utc>) -> Self {
        Self { dismissed_at }
    }
    pub fn storage_key(id: EventId) -> String {
        format!("{EVENT_ALERT_DISMISSED_STORAGE_KEY_PREFIX}{id}")
    }
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.dismissed_at)
            < Duration::hours(EVENT_ALERT_DISMISSAL_TTL_HOURS)
    }
}

/// Whether an alert may be shown given its (possibly missing) dismissal record.
pub fn should_present(record: Option<&DismissalRecord>, now: DateTime<Utc>) -> bool {
    !record.map_or(false, |record| record.is_active(now))
}
