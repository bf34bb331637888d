use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::models::common::eq_update;
use crate::models::ctx::Ctx;
use crate::runtime::msg::{Action, ActionLoad, Msg};
use crate::runtime::{Effects, Env, UpdateWithCtx};
use crate::types::gallery::{GalleryCategory, GalleryItem, GallerySlide};

#[derive(Default, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Selected {
    /// `None` shows every category.
    pub category: Option<GalleryCategory>,
}

#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
pub struct SelectableCategory {
    pub category: Option<GalleryCategory>,
    pub selected: bool,
}

#[derive(Default, Clone, PartialEq, Serialize, Debug)]
pub struct Gallery {
    pub selected: Option<Selected>,
    pub selectable: Vec<SelectableCategory>,
    pub items: Vec<GalleryItem>,
}

impl Gallery {
    pub fn slides(&self, locale: &str) -> Vec<GallerySlide> {
        self.items.iter().map(|item| item.slide(locale)).collect()
    }
}

impl<E: Env + 'static> UpdateWithCtx<E> for Gallery {
    fn update(&mut self, msg: &Msg, ctx: &Ctx) -> Effects {
        match msg {
            Msg::Action(Action::Load(ActionLoad::Gallery(selected))) => {
                let selected_effects = eq_update(&mut self.selected, Some(selected.to_owned()));
                let selectable_effects = eq_update(
                    &mut self.selectable,
                    selectable_categories(selected.category),
                );
                let items_effects = eq_update(
                    &mut self.items,
                    filtered_items(&ctx.content.gallery, selected.category),
                );
                selected_effects
                    .join(selectable_effects)
                    .join(items_effects)
            }
            Msg::Action(Action::Unload) => {
                let selected_effects = eq_update(&mut self.selected, None);
                let selectable_effects = eq_update(&mut self.selectable, vec![]);
                let items_effects = eq_update(&mut self.items, vec![]);
                selected_effects
                    .join(selectable_effects)
                    .join(items_effects)
            }
            _ => Effects::none().unchanged(),
        }
    }
}

fn selectable_categories(selected: Option<GalleryCategory>) -> Vec<SelectableCategory> {
    std::iter::once(None)
        .chain(GalleryCategory::iter().map(Some))
        .map(|category| SelectableCategory {
            category,
            selected: category == selected,
        })
        .collect()
}

fn filtered_items(items: &[GalleryItem], category: Option<GalleryCategory>) -> Vec<GalleryItem> {
    items
        .iter()
        .filter(|item| category.map_or(true, |category| item.category == category))
        .cloned()
        .collect()
}
