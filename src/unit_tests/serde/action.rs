use crate::models::gallery;
use crate::runtime::msg::{Action, ActionCtx, ActionEventAlert, ActionLoad};
use crate::types::gallery::GalleryCategory;
use serde_json::json;

#[test]
fn deserialize_action_load() {
    assert!(matches!(
        serde_json::from_value::<Action>(json!({
            "action": "Load",
            "args": { "model": "EventDetails", "args": { "eventId": 2 } }
        }))
        .unwrap(),
        Action::Load(ActionLoad::EventDetails(selected)) if selected.event_id == 2
    ));
    assert!(matches!(
        serde_json::from_value::<Action>(json!({
            "action": "Load",
            "args": { "model": "Gallery", "args": { "category": "festival" } }
        }))
        .unwrap(),
        Action::Load(ActionLoad::Gallery(gallery::Selected {
            category: Some(GalleryCategory::Festival)
        }))
    ));
    assert!(matches!(
        serde_json::from_value::<Action>(json!({
            "action": "Load",
            "args": { "model": "EventAlert" }
        }))
        .unwrap(),
        Action::Load(ActionLoad::EventAlert)
    ));
}

#[test]
fn deserialize_action_ctx_and_alert() {
    assert!(matches!(
        serde_json::from_value::<Action>(json!({
            "action": "Ctx",
            "args": { "action": "SetLocale", "args": "de" }
        }))
        .unwrap(),
        Action::Ctx(ActionCtx::SetLocale(locale)) if locale == "de"
    ));
    assert!(matches!(
        serde_json::from_value::<Action>(json!({
            "action": "EventAlert",
            "args": { "action": "Dismiss" }
        }))
        .unwrap(),
        Action::EventAlert(ActionEventAlert::Dismiss)
    ));
    assert!(matches!(
        serde_json::from_value::<Action>(json!({ "action": "Unload" })).unwrap(),
        Action::Unload
    ));
}
