use crate::constants::DEFAULT_LOCALE;
use crate::models::common::eq_update;
use crate::runtime::msg::{Action, ActionCtx, Event, Msg};
use crate::runtime::{Effects, Env, Update};
use crate::types::content::SiteContent;
use derivative::Derivative;
use serde::Serialize;

/// State shared by every model: the active locale and the site datasets.
#[derive(Derivative, Serialize, Clone, PartialEq, Debug)]
#[derivative(Default)]
pub struct Ctx {
    #[derivative(Default(value = "DEFAULT_LOCALE.to_owned()"))]
    pub locale: String,
    #[serde(skip)]
    pub content: SiteContent,
}

impl Ctx {
    pub fn new(locale: &str, content: SiteContent) -> Self {
        Self {
            locale: locale.to_owned(),
            content,
        }
    }
}

impl<E: Env + 'static> Update<E> for Ctx {
    fn update(&mut self, msg: &Msg) -> Effects {
        match msg {
            Msg::Action(Action::Ctx(ActionCtx::SetLocale(locale))) => {
                let locale_effects = eq_update(&mut self.locale, locale.to_owned());
                if locale_effects.has_changed {
                    Effects::msg(Msg::Event(Event::LocaleChanged {
                        locale: locale.to_owned(),
                    }))
                    .unchanged()
                    .join(locale_effects)
                } else {
                    locale_effects
                }
            }
            _ => Effects::none().unchanged(),
        }
    }
}
