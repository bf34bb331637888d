use serde::{Deserialize, Serialize};

use crate::models::common::{eq_update, Loadable};
use crate::models::ctx::{Ctx, CtxError, OtherError};
use crate::runtime::msg::{Action, ActionLoad, Msg};
use crate::runtime::{Effects, Env, UpdateWithCtx};
use crate::types::monks::{Monk, MonkId};
use crate::types::site::PageMetadata;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Selected {
    pub monk_id: MonkId,
}

#[derive(Default, Clone, PartialEq, Serialize, Debug)]
pub struct MonkDetails {
    pub selected: Option<Selected>,
    pub monk: Option<Loadable<Monk, CtxError>>,
}

impl MonkDetails {
    pub fn metadata(&self, locale: &str) -> Option<PageMetadata> {
        self.selected.as_ref().map(|_| {
            PageMetadata::for_monk(self.monk.as_ref().and_then(Loadable::ready), locale)
        })
    }
}

impl<E: Env + 'static> UpdateWithCtx<E> for MonkDetails {
    fn update(&mut self, msg: &Msg, ctx: &Ctx) -> Effects {
        match msg {
            Msg::Action(Action::Load(ActionLoad::MonkDetails(selected))) => {
                let selected_effects = eq_update(&mut self.selected, Some(selected.to_owned()));
                let next_monk = Loadable::from(
                    ctx.content
                        .monk(&selected.monk_id)
                        .cloned()
                        .ok_or_else(|| CtxError::from(OtherError::MonkNotFound)),
                );
                let monk_effects = eq_update(&mut self.monk, Some(next_monk));
                selected_effects.join(monk_effects)
            }
            Msg::Action(Action::Unload) => {
                let selected_effects = eq_update(&mut self.selected, None);
                let monk_effects = eq_update(&mut self.monk, None);
                selected_effects.join(monk_effects)
            }
            _ => Effects::none().unchanged(),
        }
    }
}
