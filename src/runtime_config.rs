//! # Runtime Configuration Module
//!
//! Environment variable-based configuration for dispatch behavior.
//!
//! ## Environment Variables
//!
//! ### `ACTR_SANITIZE`
//!
//! Selects how requested action names are treated before table lookup:
//! - `strict` — slugify and enforce the canonical pattern (default)
//! - `basic` — use the raw name verbatim
//!
//! Unrecognized values log a warning and keep `strict`.
//!
//! ### `ACTR_LOCALES`
//!
//! Comma-separated transliteration locales promoted to the front of the
//! slug chain, e.g. `uk,el`. Unknown codes log a warning and are
//! skipped; the order of the surviving codes is preserved. Only
//! consulted in strict mode.
//!
//! ## Usage
//!
//! ```rust
//! use actioneer::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! println!("Sanitize mode: {:?}", config.sanitize);
//! ```
//!
//! ## Example Configuration
//!
//! ```bash
//! # Accept raw action names (trusted internal service)
//! export ACTR_SANITIZE=basic
//!
//! # Prefer Ukrainian transliteration over Russian
//! export ACTR_LOCALES=uk
//!
//! # Start your service
//! cargo run
//! ```

use std::env;

use tracing::warn;

use crate::action::SanitizeMode;
use crate::slug::Locale;

/// Runtime configuration loaded from environment variables.
///
/// Load this at startup with [`RuntimeConfig::from_env()`], or build it
/// explicitly and hand it to
/// [`ActionDispatcher::with_config`](crate::dispatcher::ActionDispatcher::with_config)
/// when the process environment is not the source of truth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Action-name treatment before lookup (default: strict).
    pub sanitize: SanitizeMode,
    /// Locales promoted to the front of the transliteration chain
    /// (default: none, meaning the built-in chain order).
    pub locales: Vec<Locale>,
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let sanitize = match env::var("ACTR_SANITIZE") {
            Ok(val) => match val.to_ascii_lowercase().as_str() {
                "strict" => SanitizeMode::Strict,
                "basic" => SanitizeMode::Basic,
                other => {
                    warn!(value = other, "Unknown ACTR_SANITIZE value, using strict");
                    SanitizeMode::Strict
                }
            },
            Err(_) => SanitizeMode::Strict,
        };
        let locales = match env::var("ACTR_LOCALES") {
            Ok(val) => val
                .split(',')
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .filter_map(|code| match code.parse::<Locale>() {
                    Ok(locale) => Some(locale),
                    Err(_) => {
                        warn!(code, "Unknown locale code in ACTR_LOCALES, skipping");
                        None
                    }
                })
                .collect(),
            Err(_) => Vec::new(),
        };
        RuntimeConfig { sanitize, locales }
    }
}
