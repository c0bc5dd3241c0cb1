use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::controller::MethodSet;
use crate::slug::{slugify, Locale};

/// Name of the fallback slot every action table may implement.
///
/// Requests that carry no `action` parameter, or whose parameter
/// collapses or fails sanitization, resolve to this name.
pub const DEFAULT_ACTION: &str = "default";

/// Request parameter consulted for the action name.
pub const ACTION_PARAM: &str = "action";

/// Spacer written by strict sanitization in place of whitespace runs.
pub const ACTION_SPACER: char = '_';

/// Canonical action-name shape: a lowercase letter followed by ASCII
/// word characters or hyphens. Anchored on both ends so a valid prefix
/// cannot smuggle a bad suffix through.
static ACTION_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z][0-9A-Za-z_-]*$").expect("action name regex should be valid")
});

/// Whether `name` matches the canonical action-name pattern.
///
/// This is the same check the table builder applies at registration
/// time and strict sanitization applies to incoming slugs: names cannot
/// be empty and cannot begin with a digit, an underscore or an
/// uppercase letter.
#[must_use]
pub fn is_valid_action_name(name: &str) -> bool {
    ACTION_NAME_RE.is_match(name)
}

/// How requested action names are treated before table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SanitizeMode {
    /// Slugify the requested name and require it to match the canonical
    /// pattern; anything else resolves to [`DEFAULT_ACTION`].
    Strict,
    /// Use the requested name verbatim for lookup. A miss still falls
    /// back, but no normalization is applied.
    Basic,
}

impl Default for SanitizeMode {
    fn default() -> Self {
        SanitizeMode::Strict
    }
}

/// Resolve the raw `action` parameter to the name used for table lookup.
///
/// Collapse rules run on the raw value, before any sanitization:
/// a missing or empty parameter, a name starting with `_`, or a name
/// equal to one of the controller's allowed HTTP methods all resolve to
/// [`DEFAULT_ACTION`]. In [`SanitizeMode::Strict`] the survivor is then
/// slugified and must match the canonical pattern.
pub(crate) fn resolve_action_name(
    raw: Option<&str>,
    allowed: &MethodSet,
    mode: SanitizeMode,
    locales: &[Locale],
) -> String {
    let raw = match raw {
        Some(r) if !r.is_empty() => r,
        _ => {
            debug!("No action parameter, resolving to default");
            return DEFAULT_ACTION.to_string();
        }
    };
    if raw.starts_with('_') {
        debug!(raw_action = raw, "Underscore-prefixed action collapsed to default");
        return DEFAULT_ACTION.to_string();
    }
    if allowed.contains_name(raw) {
        debug!(raw_action = raw, "Verb-named action collapsed to default");
        return DEFAULT_ACTION.to_string();
    }
    match mode {
        SanitizeMode::Basic => raw.to_string(),
        SanitizeMode::Strict => {
            let slug = slugify(raw, locales, ACTION_SPACER);
            if is_valid_action_name(&slug) {
                slug
            } else {
                debug!(
                    raw_action = raw,
                    slug = slug.as_str(),
                    "Action failed sanitization, resolving to default"
                );
                DEFAULT_ACTION.to_string()
            }
        }
    }
}
