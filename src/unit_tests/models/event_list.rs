use crate::models::ctx::Ctx;
use crate::models::event_list::{listed_events, EventList};
use crate::runtime::msg::{Action, ActionLoad, Msg};
use crate::runtime::UpdateWithCtx;
use crate::types::events::Event;
use crate::unit_tests::{event, site_content, TestEnv};

fn ordered_event(id: u64, order: Option<u32>, active: Option<bool>) -> Event {
    Event {
        order,
        active,
        ..event(id, "2024-06-15")
    }
}

fn ids(events: &[Event]) -> Vec<u64> {
    events.iter().map(|event| event.id).collect()
}

#[test]
fn listed_events_sorted_by_order() {
    let events = vec![
        ordered_event(1, Some(2), Some(true)),
        ordered_event(2, None, Some(true)),
        ordered_event(3, Some(1), Some(true)),
        ordered_event(4, Some(0), Some(false)),
        ordered_event(5, None, Some(true)),
        ordered_event(6, Some(1), None),
    ];
    assert_eq!(ids(&listed_events(&events)), vec![3, 1, 2, 5]);
}

#[test]
fn listed_events_equal_order_keeps_dataset_order() {
    let events = vec![
        ordered_event(9, Some(5), Some(true)),
        ordered_event(4, Some(5), Some(true)),
        ordered_event(7, Some(998), Some(true)),
        ordered_event(8, Some(999), Some(true)),
        ordered_event(6, None, Some(true)),
    ];
    assert_eq!(ids(&listed_events(&events)), vec![9, 4, 7, 8, 6]);
}

#[test]
fn listed_events_zero_order_counts_as_unset() {
    let events = vec![
        ordered_event(1, Some(0), Some(true)),
        ordered_event(2, Some(998), Some(true)),
        ordered_event(3, None, Some(true)),
        ordered_event(4, Some(1), Some(true)),
    ];
    assert_eq!(ids(&listed_events(&events)), vec![4, 2, 1, 3]);
}

#[test]
fn event_list_load_and_unload() {
    let ctx = Ctx::new(
        "th",
        site_content(vec![
            ordered_event(1, Some(2), Some(true)),
            ordered_event(2, Some(1), Some(true)),
            ordered_event(3, Some(3), Some(false)),
        ]),
    );
    let mut event_list = EventList::default();
    let effects = UpdateWithCtx::<TestEnv>::update(
        &mut event_list,
        &Msg::Action(Action::Load(ActionLoad::EventList)),
        &ctx,
    );
    assert!(effects.has_changed, "Event list loaded");
    assert_eq!(ids(&event_list.events), vec![2, 1]);
    assert_eq!(
        event_list
            .localized("th")
            .into_iter()
            .map(|event| event.title)
            .collect::<Vec<_>>(),
        vec!["งาน 2".to_owned(), "งาน 1".to_owned()]
    );
    let effects = UpdateWithCtx::<TestEnv>::update(
        &mut event_list,
        &Msg::Action(Action::Load(ActionLoad::EventList)),
        &ctx,
    );
    assert!(!effects.has_changed, "Reloading changes nothing");
    let effects = UpdateWithCtx::<TestEnv>::update(
        &mut event_list,
        &Msg::Action(Action::Unload),
        &ctx,
    );
    assert!(effects.has_changed, "Event list unloaded");
    assert!(event_list.events.is_empty());
}
