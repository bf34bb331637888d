use serde::Deserialize;

use crate::models::{
    event_details::Selected as EventDetailsSelected, gallery::Selected as GallerySelected,
    monk_details::Selected as MonkDetailsSelected,
};

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum ActionCtx {
    /// Locale code coming from the routing layer, e.g. `"th"`.
    SetLocale(String),
}

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum ActionEventAlert {
    /// The user closed the upcoming event alert.
    ///
    /// A dismissal record is written for the presented event which keeps the
    /// alert hidden for [`EVENT_ALERT_DISMISSAL_TTL_HOURS`].
    ///
    /// [`EVENT_ALERT_DISMISSAL_TTL_HOURS`]: crate::constants::EVENT_ALERT_DISMISSAL_TTL_HOURS
    Dismiss,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "model", content = "args")]
pub enum ActionLoad {
    EventAlert,
    EventList,
    EventDetails(EventDetailsSelected),
    Gallery(GallerySelected),
    MonkDetails(MonkDetailsSelected),
}

/// Action messages
///
/// Those messages are meant to be dispatched only by the users of the
/// `wat-core` crate and handled by the `wat-core` crate.
#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum Action {
    Ctx(ActionCtx),
    EventAlert(ActionEventAlert),
    Load(ActionLoad),
    Unload,
}
