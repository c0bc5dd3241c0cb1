//! # Slug Module
//!
//! Locale-aware transliteration of arbitrary text into lowercase ASCII
//! slugs. This is what the dispatcher's strict sanitization mode runs
//! requested action names through before matching them against the
//! action table.
//!
//! ## Overview
//!
//! [`slugify`] lowercases its input, collapses whitespace to a spacer
//! character, transliterates non-ASCII characters via per-locale tables,
//! and strips whatever remains outside `[0-9a-z_-]`.
//!
//! Tables are consulted as a chain. The default chain covers English
//! ligatures, Greek, Russian, Ukrainian, Czech, Polish, Latvian, Serbian
//! and Turkish; callers can promote locales to the front of the chain
//! when two tables disagree about a character (for Cyrillic text the
//! Russian and Ukrainian tables conflict on `г`, `и` and `е`).
//!
//! ## Example
//!
//! ```
//! use actioneer::slug::{slugify, Locale};
//!
//! assert_eq!(slugify("Żółć time", &[], '_'), "zolc_time");
//! assert_eq!(slugify("πράξη", &[], '-'), "praxi");
//! assert_eq!(slugify("ґанок", &[Locale::Uk], '_'), "ganok");
//! ```

mod core;
mod tables;

pub use core::{slugify, Locale, UnknownLocale, DEFAULT_CHAIN};
