use serde::{Deserialize, Serialize};

use crate::i18n::strings::{UiStrings, ENGLISH, FRENCH};

/// The two languages the site is published in. French is the house language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Fr, Language::En];

    /// Two-letter code used in URL prefixes and `<html lang>`.
    pub fn code(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }

    /// Exact, case-insensitive match on a two-letter code. Anything else is `None`.
    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }

    pub fn other(self) -> Language {
        match self {
            Language::Fr => Language::En,
            Language::En => Language::Fr,
        }
    }

    /// Root path of the localized site, e.g. `/fr/`.
    pub fn root_path(self) -> String {
        format!("/{}/", self.code())
    }

    pub fn strings(self) -> &'static UiStrings {
        match self {
            Language::Fr => &FRENCH,
            Language::En => &ENGLISH,
        }
    }
}
