use crate::runtime::EnvError;
use crate::types::events::{DismissalRecord, EventId};

//
// Those messages are meant to be dispatched and handled only inside wat-core crate
//
#[derive(Debug)]
pub enum Internal {
    /// Result for reading the dismissal record of the upcoming event.
    EventAlertDismissalResult(EventId, Result<Option<DismissalRecord>, EnvError>),
    /// Dispatched once the event alert delay has passed. Carries the delay
    /// generation it was started with.
    EventAlertDelayElapsed(EventId, u64),
    /// Result for writing the dismissal record.
    EventAlertDismissalPushResult(EventId, Result<(), EnvError>),
}
