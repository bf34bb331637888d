use serde::{Deserialize, Serialize};

use crate::constants::RELATED_EVENTS_COUNT;
use crate::models::common::{eq_update, Loadable};
use crate::models::ctx::{Ctx, CtxError, OtherError};
use crate::runtime::msg::{Action, ActionLoad, Msg};
use crate::runtime::{Effects, Env, UpdateWithCtx};
use crate::types::content::SiteContent;
use crate::types::events::{Event, EventId, LocalizedEvent};
use crate::types::site::{google_calendar_link, EventJsonLd, PageMetadata};

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Selected {
    pub event_id: EventId,
}

#[derive(Default, Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    pub selected: Option<Selected>,
    pub event: Option<Loadable<Event, CtxError>>,
    pub related_events: Vec<Event>,
}

impl EventDetails {
    fn ready_event(&self) -> Option<&Event> {
        self.event.as_ref().and_then(Loadable::ready)
    }
    pub fn localized(&self, locale: &str) -> Option<LocalizedEvent> {
        self.ready_event().map(|event| event.localize(locale))
    }
    /// Page metadata, including the "not found" title for unknown events.
    pub fn metadata(&self, locale: &str) -> Option<PageMetadata> {
        self.selected
            .as_ref()
            .map(|_| PageMetadata::for_event(self.ready_event(), locale))
    }
    pub fn calendar_link(&self) -> Option<String> {
        self.ready_event().map(google_calendar_link)
    }
    pub fn json_ld(&self, locale: &str) -> Option<EventJsonLd> {
        self.ready_event()
            .map(|event| EventJsonLd::new(event, locale))
    }
}

impl<E: Env + 'static> UpdateWithCtx<E> for EventDetails {
    fn update(&mut self, msg: &Msg, ctx: &Ctx) -> Effects {
        match msg {
            Msg::Action(Action::Load(ActionLoad::EventDetails(selected))) => {
                let selected_effects = eq_update(&mut self.selected, Some(selected.to_owned()));
                let event_effects =
                    event_update(&mut self.event, &self.selected, &ctx.content);
                let related_events_effects = related_events_update(
                    &mut self.related_events,
                    &self.event,
                    &ctx.content,
                );
                selected_effects
                    .join(event_effects)
                    .join(related_events_effects)
            }
            Msg::Action(Action::Unload) => {
                let selected_effects = eq_update(&mut self.selected, None);
                let event_effects = eq_update(&mut self.event, None);
                let related_events_effects = eq_update(&mut self.related_events, vec![]);
                selected_effects
                    .join(event_effects)
                    .join(related_events_effects)
            }
            _ => Effects::none().unchanged(),
        }
    }
}

fn event_update(
    event: &mut Option<Loadable<Event, CtxError>>,
    selected: &Option<Selected>,
    content: &SiteContent,
) -> Effects {
    let next_event = selected.as_ref().map(|selected| {
        Loadable::from(
            content
                .event(selected.event_id)
                .cloned()
                .ok_or_else(|| CtxError::from(OtherError::EventNotFound)),
        )
    });
    eq_update(event, next_event)
}

fn related_events_update(
    related_events: &mut Vec<Event>,
    event: &Option<Loadable<Event, CtxError>>,
    content: &SiteContent,
) -> Effects {
    let next_related_events = match event {
        Some(Loadable::Ready(event)) => content
            .events
            .iter()
            .filter(|related_event| related_event.id != event.id)
            .take(RELATED_EVENTS_COUNT)
            .cloned()
            .collect(),
        _ => vec![],
    };
    eq_update(related_events, next_related_events)
}
