use serde::Serialize;

use crate::types::events::EventId;

/// Event messages
///
/// Those messages are meant to be dispatched by the `wat-core` crate and
/// handled by the users of the `wat-core` crate and by the `wat-core`
/// crate itself.
#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(tag = "event", content = "args")]
pub enum Event {
    LocaleChanged {
        locale: String,
    },
    EventAlertOpened {
        id: EventId,
    },
    EventAlertDismissed {
        id: EventId,
    },
}
