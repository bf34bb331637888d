use itertools::Itertools;
use serde::Serialize;

use crate::models::common::eq_update;
use crate::models::ctx::Ctx;
use crate::runtime::msg::{Action, ActionLoad, Msg};
use crate::runtime::{Effects, Env, UpdateWithCtx};
use crate::types::events::{Event, LocalizedEvent};

/// Events listed on the home page and the events page.
#[derive(Default, Clone, PartialEq, Serialize, Debug)]
pub struct EventList {
    pub events: Vec<Event>,
}

impl EventList {
    pub fn localized(&self, locale: &str) -> Vec<LocalizedEvent> {
        self.events
            .iter()
            .map(|event| event.localize(locale))
            .collect()
    }
}

impl<E: Env + 'static> UpdateWithCtx<E> for EventList {
    fn update(&mut self, msg: &Msg, ctx: &Ctx) -> Effects {
        match msg {
            Msg::Action(Action::Load(ActionLoad::EventList)) => {
                eq_update(&mut self.events, listed_events(&ctx.content.events))
            }
            Msg::Action(Action::Unload) => eq_update(&mut self.events, vec![]),
            _ => Effects::none().unchanged(),
        }
    }
}

/// Active events by ascending display order; equal orders keep dataset order.
pub fn listed_events(events: &[Event]) -> Vec<Event> {
    events
        .iter()
        .filter(|event| event.is_active())
        .sorted_by_key(|event| event.display_order())
        .cloned()
        .collect()
}
