use crate::types::i18n::LocalizedText;

#[test]
fn resolve_requested_locale() {
    let text = LocalizedText::new([("th", "สวัสดี"), ("en", "Hello")]);
    assert_eq!(text.resolve("th", "en"), "สวัสดี");
    assert_eq!(text.resolve("en", "th"), "Hello");
}

#[test]
fn resolve_missing_locale_falls_back_to_default() {
    let text = LocalizedText::new([("th", "สวัสดี"), ("en", "Hello")]);
    assert_eq!(text.resolve("de", "en"), "Hello");
    assert_eq!(text.resolve("de", "th"), "สวัสดี");
}

#[test]
fn resolve_missing_both_locales() {
    let text = LocalizedText::new([("th", "สวัสดี")]);
    assert_eq!(text.resolve("de", "en"), "");
    assert_eq!(LocalizedText::default().resolve("th", "en"), "");
}

#[test]
fn get_uses_english_fallback() {
    let text = LocalizedText::new([("th", "สวัสดี"), ("en", "Hello"), ("de", "Hallo")]);
    assert_eq!(text.get("de"), "Hallo");
    assert_eq!(text.get("fr"), "Hello");
    assert_eq!(text.locales().collect::<Vec<_>>(), vec!["de", "en", "th"]);
}
