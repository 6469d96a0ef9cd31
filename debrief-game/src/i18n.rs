//! String tables and the localization seam used by the statistics screen.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const ENGLISH_STRINGS: &str = include_str!("../assets/strings_en.json");

/// Anything that can turn a string key into display text.
pub trait Localizer {
    /// Text for `key`, or `None` when no table knows it.
    fn lookup(&self, key: &str) -> Option<String>;

    /// Translate a key, falling back to the key itself.
    fn tr(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_else(|| key.to_string())
    }

    /// Translate a key and substitute `{name}` / `{{name}}` placeholders.
    fn tr_args(&self, key: &str, args: &BTreeMap<&str, String>) -> String {
        let mut text = self.tr(key);
        for (name, value) in args {
            text = text.replace(&format!("{{{{{name}}}}}"), value);
            text = text.replace(&format!("{{{name}}}"), value);
        }
        text
    }
}

/// Flat key/value string table with an optional fallback language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StringTable {
    #[serde(default)]
    pub lang: String,
    #[serde(default)]
    strings: BTreeMap<String, String>,
    #[serde(skip)]
    fallback: BTreeMap<String, String>,
}

impl StringTable {
    /// Bundled English table.
    #[must_use]
    pub fn english() -> Self {
        let strings: BTreeMap<String, String> =
            serde_json::from_str(ENGLISH_STRINGS).unwrap_or_default();
        Self {
            lang: "en".to_string(),
            strings,
            fallback: BTreeMap::new(),
        }
    }

    /// Parse a flat JSON object of `key: text` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is not an object of strings.
    pub fn from_json(lang: &str, json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            lang: lang.to_string(),
            strings: serde_json::from_str(json)?,
            fallback: BTreeMap::new(),
        })
    }

    /// Use `base` for any key this table does not define.
    #[must_use]
    pub fn with_fallback(mut self, base: &Self) -> Self {
        let mut fallback = base.fallback.clone();
        fallback.extend(base.strings.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.fallback = fallback;
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.strings.insert(key.into(), text.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Localizer for StringTable {
    fn lookup(&self, key: &str) -> Option<String> {
        self.strings
            .get(key)
            .or_else(|| self.fallback.get(key))
            .cloned()
    }
}

/// Localizer that echoes keys back, handy for asserting on raw keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyEcho;

impl Localizer for KeyEcho {
    fn lookup(&self, _key: &str) -> Option<String> {
        None
    }
}
