use crate::models::common::Loadable;
use crate::models::ctx::{Ctx, CtxError, OtherError};
use crate::models::event_details::{EventDetails, Selected};
use crate::runtime::msg::{Action, ActionLoad, Msg};
use crate::runtime::UpdateWithCtx;
use crate::unit_tests::{event, site_content, text, TestEnv};
use serde_json::json;

fn ctx() -> Ctx {
    Ctx::new(
        "en",
        site_content(vec![
            event(1, "2024-01-01"),
            event(2, "2024-06-15"),
            event(3, "2024-06-20"),
            event(4, "2024-07-01"),
            event(5, "2024-08-01"),
        ]),
    )
}

fn load(event_details: &mut EventDetails, event_id: u64, ctx: &Ctx) {
    UpdateWithCtx::<TestEnv>::update(
        event_details,
        &Msg::Action(Action::Load(ActionLoad::EventDetails(Selected { event_id }))),
        ctx,
    );
}

#[test]
fn event_details_found() {
    let ctx = ctx();
    let mut event_details = EventDetails::default();
    load(&mut event_details, 2, &ctx);
    assert_eq!(
        event_details.event,
        Some(Loadable::Ready(event(2, "2024-06-15")))
    );
    assert_eq!(
        event_details
            .related_events
            .iter()
            .map(|event| event.id)
            .collect::<Vec<_>>(),
        vec![1, 3, 4],
        "First three other events are related"
    );
    assert_eq!(
        event_details.localized("th").map(|event| event.title),
        Some("งาน 2".to_owned())
    );
    assert!(event_details.calendar_link().is_some());
}

#[test]
fn event_details_not_found() {
    let ctx = ctx();
    let mut event_details = EventDetails::default();
    load(&mut event_details, 42, &ctx);
    assert_eq!(
        event_details.event,
        Some(Loadable::Err(CtxError::Other(OtherError::EventNotFound)))
    );
    assert!(event_details.related_events.is_empty());
    assert_eq!(event_details.calendar_link(), None);
    assert_eq!(event_details.json_ld("en"), None);
    let metadata = event_details.metadata("en").expect("metadata");
    assert_eq!(metadata.title, "Event Not Found");
    assert_eq!(metadata.open_graph, None);
}

#[test]
fn event_details_metadata() {
    let ctx = ctx();
    let mut event_details = EventDetails::default();
    assert_eq!(event_details.metadata("en"), None, "Nothing selected");
    load(&mut event_details, 3, &ctx);
    assert_eq!(
        serde_json::to_value(event_details.metadata("th")).unwrap(),
        json!({
            "title": "งาน 3 - Wat Serm Rangsi",
            "description": "รายละเอียดงาน 3",
            "openGraph": {
                "title": "งาน 3",
                "description": "รายละเอียดงาน 3",
                "images": ["/images/events/3.jpg"],
                "type": "article"
            }
        })
    );
}

#[test]
fn event_details_json_ld() {
    let mut ctx = ctx();
    ctx.content.events[1].location = text("Ordination Hall", "อุโบสถ");
    let mut event_details = EventDetails::default();
    load(&mut event_details, 2, &ctx);
    assert_eq!(
        serde_json::to_value(event_details.json_ld("en")).unwrap(),
        json!({
            "@context": "https://schema.org",
            "@type": "Event",
            "name": "Event 2",
            "startDate": "2024-06-15",
            "endDate": "2024-06-15",
            "eventStatus": "https://schema.org/EventScheduled",
            "eventAttendanceMode": "https://schema.org/OfflineEventAttendanceMode",
            "location": {
                "@type": "Place",
                "name": "Ordination Hall",
                "address": {
                    "@type": "PostalAddress",
                    "streetAddress": "Wat Serm Rangsi",
                    "addressLocality": "Bangkok",
                    "addressCountry": "TH"
                }
            },
            "image": ["/images/events/2.jpg"],
            "description": "About event 2"
        })
    );
}

#[test]
fn event_details_unload() {
    let ctx = ctx();
    let mut event_details = EventDetails::default();
    load(&mut event_details, 2, &ctx);
    let effects = UpdateWithCtx::<TestEnv>::update(
        &mut event_details,
        &Msg::Action(Action::Unload),
        &ctx,
    );
    assert!(effects.has_changed);
    assert_eq!(event_details, EventDetails::default());
}
