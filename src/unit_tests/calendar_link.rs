use crate::types::i18n::LocalizedText;
use crate::types::site::google_calendar_link;
use crate::unit_tests::{event, text};
use url::Url;

#[test]
fn google_calendar_link_encodes_english_text() {
    let mut event = event(2, "2024-02-24");
    event.title = text("Makha Bucha Day", "วันมาฆบูชา");
    event.description = text("Candle procession & chanting", "เวียนเทียน");
    event.location = LocalizedText::new([("th", "อุโบสถ"), ("en", "Ordination Hall")]);
    assert_eq!(
        google_calendar_link(&event),
        "https://calendar.google.com/calendar/render?action=TEMPLATE\
         &text=Makha%20Bucha%20Day\
         &details=Candle%20procession%20%26%20chanting\
         &location=Ordination%20Hall\
         &dates=20240224T090000/20240224T170000"
    );
}

#[test]
fn google_calendar_link_keeps_uri_component_marks() {
    let mut event = event(6, "2024-05-12");
    event.title = text("Mother's Day (Thai)", "วันแม่");
    event.description = text("Merit-making: 100% welcome!", "ทำบุญ");
    let link = google_calendar_link(&event);
    assert!(
        link.contains("&text=Mother's%20Day%20(Thai)&"),
        "Apostrophe and parentheses stay unescaped"
    );
    assert!(link.contains("&details=Merit-making%3A%20100%25%20welcome!&"));
}

#[test]
fn google_calendar_link_without_english_title() {
    let mut event = event(5, "2024-12-31");
    event.title = LocalizedText::new([("th", "สวดมนต์ข้ามปี")]);
    let link = Url::parse(&google_calendar_link(&event)).unwrap();
    let text = link
        .query_pairs()
        .find(|(key, _)| key == "text")
        .map(|(_, value)| value.into_owned());
    assert_eq!(text, Some("".to_owned()));
    assert_eq!(
        link.query_pairs()
            .find(|(key, _)| key == "dates")
            .map(|(_, value)| value.into_owned()),
        Some("20241231T090000/20241231T170000".to_owned())
    );
}
