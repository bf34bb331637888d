use crate::constants::FALLBACK_LOCALE;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A piece of content translated into several locales, keyed by locale code.
///
/// Serialized as a plain object, e.g. `{"th": "สวัสดี", "en": "Hello"}`.
#[derive(Default, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        LocalizedText(
            entries
                .into_iter()
                .map(|(locale, text)| (locale.into(), text.into()))
                .collect(),
        )
    }
    /// Text for `locale`, or for `default_locale` when the record has no such
    /// entry. A record missing both yields an empty string.
    pub fn resolve(&self, locale: &str, default_locale: &str) -> &str {
        self.0
            .get(locale)
            .or_else(|| self.0.get(default_locale))
            .map(String::as_str)
            .unwrap_or_default()
    }
    /// Same as [`LocalizedText::resolve`] with the site-wide [`FALLBACK_LOCALE`].
    pub fn get(&self, locale: &str) -> &str {
        self.resolve(locale, FALLBACK_LOCALE)
    }
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}
