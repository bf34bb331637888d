use boolinator::Boolinator;
use derivative::Derivative;
use futures::FutureExt;
use serde::Serialize;

use crate::constants::EVENT_ALERT_DELAY;
use crate::models::common::eq_update;
use crate::models::ctx::Ctx;
use crate::runtime::msg::{Action, ActionEventAlert, ActionLoad, Event, Internal, Msg};
use crate::runtime::{Effect, EffectFuture, Effects, Env, EnvFutureExt, UpdateWithCtx};
use crate::types::events::{
    self, select_upcoming_event, should_present, DismissalRecord, EventId, LocalizedEvent,
};

#[derive(Derivative, Clone, Copy, PartialEq, Eq, Serialize, Debug)]
#[derivative(Default)]
pub enum AlertStatus {
    /// Nothing to show: no upcoming event, or it was dismissed recently.
    #[derivative(Default)]
    Hidden,
    /// Waiting for the dismissal record of the upcoming event.
    Checking,
    /// The alert will open once the display delay passes.
    Scheduled,
    Open,
    /// Closed by the user during this visit.
    Dismissed,
}

/// The "upcoming event" alert of the home page.
#[derive(Default, Clone, PartialEq, Serialize, Debug)]
pub struct EventAlert {
    pub event: Option<events::Event>,
    pub status: AlertStatus,
    /// Bumped every time a display delay starts, so that delays started
    /// before an `Unload` can never open the alert.
    #[serde(skip)]
    pub delay_generation: u64,
}

impl EventAlert {
    pub fn is_open(&self) -> bool {
        self.status == AlertStatus::Open
    }
    /// The event to render, only while the alert is open.
    pub fn localized(&self, locale: &str) -> Option<LocalizedEvent> {
        self.is_open()
            .as_option()
            .and_then(|_| self.event.as_ref())
            .map(|event| event.localize(locale))
    }
}

impl<E: Env + 'static> UpdateWithCtx<E> for EventAlert {
    fn update(&mut self, msg: &Msg, ctx: &Ctx) -> Effects {
        match msg {
            Msg::Action(Action::Load(ActionLoad::EventAlert)) => {
                let today = E::now().date_naive();
                match select_upcoming_event(&ctx.content.events, today) {
                    Some(event) => {
                        let event_effects = eq_update(&mut self.event, Some(event.to_owned()));
                        let status_effects = eq_update(&mut self.status, AlertStatus::Checking);
                        Effects::one(get_dismissal_record::<E>(event.id))
                            .unchanged()
                            .join(event_effects)
                            .join(status_effects)
                    }
                    None => {
                        let event_effects = eq_update(&mut self.event, None);
                        let status_effects = eq_update(&mut self.status, AlertStatus::Hidden);
                        event_effects.join(status_effects)
                    }
                }
            }
            Msg::Action(Action::Unload) => {
                let event_effects = eq_update(&mut self.event, None);
                let status_effects = eq_update(&mut self.status, AlertStatus::Hidden);
                event_effects.join(status_effects)
            }
            Msg::Action(Action::EventAlert(ActionEventAlert::Dismiss)) => {
                match (&self.event, self.status) {
                    (Some(event), AlertStatus::Scheduled | AlertStatus::Open) => {
                        let record = DismissalRecord::new(E::now());
                        let push_effects = Effects::one(push_dismissal_record_to_storage::<E>(
                            event.id, &record,
                        ))
                        .unchanged();
                        let status_effects = eq_update(&mut self.status, AlertStatus::Dismissed);
                        push_effects.join(status_effects)
                    }
                    _ => Effects::none().unchanged(),
                }
            }
            Msg::Internal(Internal::EventAlertDismissalResult(id, result)) => {
                match (&self.event, self.status) {
                    (Some(event), AlertStatus::Checking) if event.id == *id => {
                        let record = match result {
                            Ok(record) => record.to_owned(),
                            Err(_error) => {
                                #[cfg(debug_assertions)]
                                E::log(format!(
                                    "Dismissal record of event {id} is unreadable: {_error}"
                                ));
                                None
                            }
                        };
                        if should_present(record.as_ref(), E::now()) {
                            self.delay_generation = self.delay_generation.wrapping_add(1);
                            Effects::one(delay_event_alert::<E>(*id, self.delay_generation))
                                .unchanged()
                                .join(eq_update(&mut self.status, AlertStatus::Scheduled))
                        } else {
                            let event_effects = eq_update(&mut self.event, None);
                            let status_effects = eq_update(&mut self.status, AlertStatus::Hidden);
                            event_effects.join(status_effects)
                        }
                    }
                    _ => Effects::none().unchanged(),
                }
            }
            Msg::Internal(Internal::EventAlertDelayElapsed(id, generation)) => {
                match (&self.event, self.status) {
                    (Some(event), AlertStatus::Scheduled)
                        if event.id == *id && *generation == self.delay_generation =>
                    {
                        Effects::msg(Msg::Event(Event::EventAlertOpened { id: *id }))
                            .unchanged()
                            .join(eq_update(&mut self.status, AlertStatus::Open))
                    }
                    _ => Effects::none().unchanged(),
                }
            }
            Msg::Internal(Internal::EventAlertDismissalPushResult(id, result)) => match result {
                Ok(_) => Effects::msg(Msg::Event(Event::EventAlertDismissed { id: *id })).unchanged(),
                Err(_error) => {
                    #[cfg(debug_assertions)]
                    E::log(format!(
                        "Dismissal record of event {id} was not stored: {_error}"
                    ));
                    Effects::none().unchanged()
                }
            },
            _ => Effects::none().unchanged(),
        }
    }
}

fn get_dismissal_record<E: Env + 'static>(id: EventId) -> Effect {
    EffectFuture::Concurrent(
        E::get_storage::<DismissalRecord>(&DismissalRecord::storage_key(id))
            .map(move |result| Msg::Internal(Internal::EventAlertDismissalResult(id, result)))
            .boxed_env(),
    )
    .into()
}

fn delay_event_alert<E: Env + 'static>(id: EventId, generation: u64) -> Effect {
    EffectFuture::Concurrent(
        E::delay(EVENT_ALERT_DELAY)
            .map(move |_| Msg::Internal(Internal::EventAlertDelayElapsed(id, generation)))
            .boxed_env(),
    )
    .into()
}

fn push_dismissal_record_to_storage<E: Env + 'static>(
    id: EventId,
    record: &DismissalRecord,
) -> Effect {
    EffectFuture::Sequential(
        E::set_storage(&DismissalRecord::storage_key(id), Some(record))
            .map(move |result| Msg::Internal(Internal::EventAlertDismissalPushResult(id, result)))
            .boxed_env(),
    )
    .into()
}
