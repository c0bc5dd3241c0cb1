use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::tables;

/// Transliteration locales supported by [`slugify`].
///
/// Each locale contributes a table of non-ASCII characters and their
/// ASCII replacements. Locales are consulted in chain order, so where
/// two tables disagree (Ukrainian and Russian both define `г`), the
/// earlier locale wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English ligatures (`æ`, `œ`)
    En,
    /// Greek
    El,
    /// Russian
    Ru,
    /// Ukrainian
    Uk,
    /// Czech
    Cs,
    /// Polish
    Pl,
    /// Latvian
    Lv,
    /// Serbian
    Sr,
    /// Turkish
    Tr,
}

/// Locales consulted when no explicit chain is given, in priority order.
///
/// An explicit chain does not replace this list; it is searched first,
/// with the remaining defaults appended after it.
pub const DEFAULT_CHAIN: [Locale; 9] = [
    Locale::En,
    Locale::El,
    Locale::Ru,
    Locale::Uk,
    Locale::Cs,
    Locale::Pl,
    Locale::Lv,
    Locale::Sr,
    Locale::Tr,
];

impl Locale {
    /// Two-letter ISO 639-1 code for this locale.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::El => "el",
            Locale::Ru => "ru",
            Locale::Uk => "uk",
            Locale::Cs => "cs",
            Locale::Pl => "pl",
            Locale::Lv => "lv",
            Locale::Sr => "sr",
            Locale::Tr => "tr",
        }
    }

    fn table(&self) -> &'static [(char, &'static str)] {
        match self {
            Locale::En => tables::EN,
            Locale::El => tables::EL,
            Locale::Ru => tables::RU,
            Locale::Uk => tables::UK,
            Locale::Cs => tables::CS,
            Locale::Pl => tables::PL,
            Locale::Lv => tables::LV,
            Locale::Sr => tables::SR,
            Locale::Tr => tables::TR,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when parsing an unrecognized locale code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(String);

impl UnknownLocale {
    /// The code that failed to parse.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown locale code `{}`", self.0)
    }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "el" => Ok(Locale::El),
            "ru" => Ok(Locale::Ru),
            "uk" => Ok(Locale::Uk),
            "cs" => Ok(Locale::Cs),
            "pl" => Ok(Locale::Pl),
            "lv" => Ok(Locale::Lv),
            "sr" => Ok(Locale::Sr),
            "tr" => Ok(Locale::Tr),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

/// Reduce arbitrary text to a lowercase ASCII slug.
///
/// The transformation, in order:
/// 1. lowercase the input (trimmed of surrounding whitespace)
/// 2. collapse each run of internal whitespace to a single `spacer`
/// 3. transliterate non-ASCII characters through the locale chain
/// 4. strip anything that is still not `[0-9a-z_-]` or the spacer
///
/// `locales` is an explicit priority prefix: those tables are searched
/// first, then the rest of [`DEFAULT_CHAIN`] in its usual order. Passing
/// an empty slice uses the default chain as is.
///
/// # Examples
///
/// ```
/// use actioneer::slug::{slugify, Locale};
///
/// assert_eq!(slugify("Save Draft!", &[], '_'), "save_draft");
/// // Default chain puts Russian before Ukrainian, so `г` becomes `g`.
/// assert_eq!(slugify("говорити", &[], '_'), "govoriti");
/// // An explicit Ukrainian prefix wins the conflict instead.
/// assert_eq!(slugify("говорити", &[Locale::Uk], '_'), "hovoryty");
/// ```
#[must_use]
pub fn slugify(input: &str, locales: &[Locale], spacer: char) -> String {
    let chain = build_chain(locales);
    let mut out = String::with_capacity(input.len());
    let mut pending_spacer = false;
    for ch in input.trim().chars().flat_map(char::to_lowercase) {
        if ch.is_whitespace() {
            pending_spacer = true;
            continue;
        }
        if pending_spacer {
            out.push(spacer);
            pending_spacer = false;
        }
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' || ch == spacer {
            out.push(ch);
        } else if let Some(rep) = transliterate(ch, &chain) {
            out.push_str(rep);
        }
        // Anything else is stripped.
    }
    out
}

/// Explicit locales first, then the remaining defaults in chain order.
fn build_chain(explicit: &[Locale]) -> Vec<Locale> {
    let mut chain = Vec::with_capacity(DEFAULT_CHAIN.len() + explicit.len());
    for locale in explicit {
        if !chain.contains(locale) {
            chain.push(*locale);
        }
    }
    for locale in DEFAULT_CHAIN {
        if !chain.contains(&locale) {
            chain.push(locale);
        }
    }
    chain
}

fn transliterate(ch: char, chain: &[Locale]) -> Option<&'static str> {
    chain.iter().find_map(|locale| {
        locale
            .table()
            .iter()
            .find(|(key, _)| *key == ch)
            .map(|(_, rep)| *rep)
    })
}
