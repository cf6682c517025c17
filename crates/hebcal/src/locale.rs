//! Translation of event titles.

use std::collections::HashMap;

/// Looks up translated strings by untranslated key.
pub trait Locale {
    /// Translation of `key` into `locale`, if known.
    fn lookup(&self, key: &str, locale: &str) -> Option<&str>;
}

/// Translation of `key`, or the key itself when `locales` has none.
pub fn translate<'a>(locales: &'a dyn Locale, key: &'a str, locale: &str) -> &'a str {
    locales.lookup(key, locale).unwrap_or(key)
}

/// A locale without translations; every title renders as its key.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslation;

impl Locale for NoTranslation {
    fn lookup(&self, _key: &str, _locale: &str) -> Option<&str> {
        None
    }
}

/// In-memory translation tables keyed by locale id.
///
/// ```ignore
/// let locales = Translations::new()
///     .with("es", "Candle lighting", "Iluminación de velas")
///     .with("es", "Parashat", "Parashá");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Translations {
    tables: HashMap<String, HashMap<String, String>>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one translation.
    pub fn with(
        mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.insert(locale, key, text);
        self
    }

    /// Adds one translation in place, replacing an earlier one for the
    /// same key.
    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.tables
            .entry(locale.into())
            .or_default()
            .insert(key.into(), text.into());
    }

    /// Locale ids with at least one translation, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl Locale for Translations {
    fn lookup(&self, key: &str, locale: &str) -> Option<&str> {
        self.tables
            .get(locale)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_key() {
        assert_eq!(translate(&NoTranslation, "Pesach I", "he"), "Pesach I");
        let t = Translations::new().with("es", "Rosh Chodesh Nisan", "Rosh Jodesh Nisan");
        assert_eq!(translate(&t, "Purim", "es"), "Purim");
        assert_eq!(translate(&t, "Rosh Chodesh Nisan", "de"), "Rosh Chodesh Nisan");
    }

    #[test]
    fn finds_translation() {
        let t = Translations::new()
            .with("es", "Candle lighting", "Iluminación de velas")
            .with("he", "Candle lighting", "הדלקת נרות");
        assert_eq!(translate(&t, "Candle lighting", "es"), "Iluminación de velas");
        assert_eq!(translate(&t, "Candle lighting", "he"), "הדלקת נרות");
        assert_eq!(t.locales(), vec!["es", "he"]);
    }

    #[test]
    fn insert_replaces() {
        let mut t = Translations::new();
        t.insert("es", "Purim", "Purim");
        t.insert("es", "Purim", "Purím");
        assert_eq!(t.lookup("Purim", "es"), Some("Purím"));
    }
}
