//! Static translation tables and the lookup used by every page.
//!
//! Keys are dotted paths (`navbar.home`). A key that is missing in the
//! requested language falls back to Italian, and a key missing there too is
//! returned verbatim.

mod tables;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::AppError;

/// Languages with a static table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    It,
    En,
    Fr,
    De,
    Es,
}

impl Language {
    pub const ALL: [Self; 5] = [Self::It, Self::En, Self::Fr, Self::De, Self::Es];
    /// Base and fallback language.
    pub const BASE: Self = Self::It;

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::It => "it",
            Self::En => "en",
            Self::Fr => "fr",
            Self::De => "de",
            Self::Es => "es",
        }
    }

    /// Name of the language in the language itself, for the language menu.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::It => "Italiano",
            Self::En => "English",
            Self::Fr => "Français",
            Self::De => "Deutsch",
            Self::Es => "Español",
        }
    }

    /// Accepts region tagged codes like `en-US` or `de_AT`.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let primary = input
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Self::ALL.into_iter().find(|lang| lang.code() == primary)
    }

    const fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::It => tables::IT,
            Self::En => tables::EN,
            Self::Fr => tables::FR,
            Self::De => tables::DE,
            Self::Es => tables::ES,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| AppError::InvalidLanguage(s.to_owned()))
    }
}

pub struct Translations {
    strings: HashMap<Language, HashMap<&'static str, &'static str>>,
    trees: HashMap<Language, Value>,
}

impl Translations {
    /// Tables compiled into the binary.
    #[must_use]
    pub fn bundled() -> Self {
        let strings: HashMap<_, _> = Language::ALL
            .into_iter()
            .map(|lang| (lang, lang.table().iter().copied().collect::<HashMap<_, _>>()))
            .collect();
        let trees = Language::ALL
            .into_iter()
            .map(|lang| (lang, build_tree(lang)))
            .collect();
        Self { strings, trees }
    }

    fn lookup(&self, lang: Language, key: &str) -> Option<&'static str> {
        self.strings
            .get(&lang)
            .and_then(|table| table.get(key))
            .or_else(|| {
                self.strings
                    .get(&Language::BASE)
                    .and_then(|table| table.get(key))
            })
            .copied()
    }

    /// Looks up `key` and substitutes `{{name}}` placeholders with `params`.
    #[must_use]
    pub fn translate(&self, lang: Language, key: &str, params: &[(&str, &str)]) -> String {
        let Some(template) = self.lookup(lang, key) else {
            return key.to_owned();
        };
        params
            .iter()
            .fold(template.to_owned(), |text, (name, value)| {
                text.replace(&format!("{{{{{name}}}}}"), value)
            })
    }

    /// All strings of `lang` merged over the base language, nested by key
    /// segment. Templates read them as `{{t.navbar.home}}`.
    #[must_use]
    pub fn tree(&self, lang: Language) -> &Value {
        static EMPTY: Value = Value::Null;
        self.trees.get(&lang).unwrap_or(&EMPTY)
    }
}

fn build_tree(lang: Language) -> Value {
    let mut root = Map::new();
    let layers = if lang == Language::BASE {
        vec![Language::BASE]
    } else {
        vec![Language::BASE, lang]
    };
    for layer in layers {
        for (key, value) in layer.table() {
            insert_dotted(&mut root, key, value);
        }
    }
    Value::Object(root)
}

fn insert_dotted(root: &mut Map<String, Value>, key: &str, value: &str) {
    let mut segments = key.split('.').peekable();
    let mut current = root;
    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            current.insert(segment.to_owned(), Value::String(value.to_owned()));
            return;
        }
        let entry = current
            .entry(segment.to_owned())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        let Value::Object(next) = entry else {
            return;
        };
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_language_codes() {
        assert_eq!(Language::parse("de"), Some(Language::De));
        assert_eq!(Language::parse("en-US"), Some(Language::En));
        assert_eq!(Language::parse("ES_mx"), Some(Language::Es));
        assert_eq!(Language::parse("nl"), None);
        assert_eq!(Language::parse(""), None);
        assert!("xx".parse::<Language>().is_err());
    }

    #[test]
    fn translate_in_requested_language() {
        let translations = Translations::bundled();
        assert_eq!(
            translations.translate(Language::De, "navbar.rooms", &[]),
            "Zimmer"
        );
        assert_eq!(
            translations.translate(Language::It, "hero.bookNow", &[]),
            "Prenota Ora"
        );
    }

    #[test]
    fn missing_key_falls_back_to_italian() {
        let translations = Translations::bundled();
        // the english table never had this one
        assert_eq!(
            translations.translate(Language::En, "common.discover_price", &[]),
            "Scoprilo Ora"
        );
        assert_eq!(
            translations.translate(Language::Fr, "contacts.title", &[]),
            translations.translate(Language::It, "contacts.title", &[])
        );
    }

    #[test]
    fn unknown_key_is_returned_verbatim() {
        let translations = Translations::bundled();
        assert_eq!(
            translations.translate(Language::En, "nope.missing", &[]),
            "nope.missing"
        );
    }

    #[test]
    fn interpolation() {
        let translations = Translations::bundled();
        assert_eq!(
            translations.translate(Language::En, "rooms.count_other", &[("count", "7")]),
            "7 apartments available."
        );
        assert_eq!(
            translations.translate(Language::It, "rooms.count_one", &[("count", "1")]),
            "1 camera disponibile."
        );
    }

    #[test]
    fn tree_is_merged_over_base() {
        let translations = Translations::bundled();
        let tree = translations.tree(Language::De);
        assert_eq!(tree["navbar"]["home"], "Startseite");
        assert_eq!(tree["contacts"]["title"], "Contattaci");
        assert_eq!(tree["common"]["discover_price"], "Scoprilo Ora");
    }

    #[test]
    fn every_language_translates_the_navbar() {
        let translations = Translations::bundled();
        for lang in Language::ALL {
            for key in ["navbar.home", "navbar.rooms", "navbar.contacts", "navbar.book"] {
                assert!(
                    lang.table().iter().any(|(k, _)| *k == key),
                    "{lang} lacks {key}"
                );
                assert_ne!(translations.translate(lang, key, &[]), key);
            }
        }
    }

    #[test]
    fn english_covers_every_italian_key() {
        let english: Vec<_> = Language::En.table().iter().map(|(k, _)| *k).collect();
        let missing: Vec<_> = Language::It
            .table()
            .iter()
            .map(|(k, _)| *k)
            .filter(|k| !english.contains(k) && *k != "common.discover_price")
            .collect();
        assert!(missing.is_empty(), "missing english keys: {missing:?}");
    }
}
