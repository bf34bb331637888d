use crate::runtime::msg::{Action, Event, Internal};

/// Every message flowing through [`Runtime`](crate::runtime::Runtime).
#[derive(Debug)]
pub enum Msg {
    Action(Action),
    Internal(Internal),
    Event(Event),
}
