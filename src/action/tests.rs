use http::Method;

use super::{is_valid_action_name, resolve_action_name, SanitizeMode, DEFAULT_ACTION};
use crate::controller::MethodSet;
use crate::slug::Locale;

fn get_post() -> MethodSet {
    MethodSet::of(&[Method::GET, Method::POST])
}

fn resolve(raw: Option<&str>, mode: SanitizeMode) -> String {
    resolve_action_name(raw, &get_post(), mode, &[])
}

#[test]
fn test_valid_names_match_canonical_pattern() {
    assert!(is_valid_action_name("archive"));
    assert!(is_valid_action_name("save-draft"));
    assert!(is_valid_action_name("v2_export"));
    assert!(is_valid_action_name("getUser"));
}

#[test]
fn test_invalid_names_rejected_by_pattern() {
    assert!(!is_valid_action_name(""));
    assert!(!is_valid_action_name("_private"));
    assert!(!is_valid_action_name("2fast"));
    assert!(!is_valid_action_name("Archive"));
    assert!(!is_valid_action_name("save draft"));
    assert!(!is_valid_action_name("drop;table"));
    assert!(!is_valid_action_name("é"));
}

#[test]
fn test_missing_or_empty_resolves_to_default() {
    assert_eq!(resolve(None, SanitizeMode::Strict), DEFAULT_ACTION);
    assert_eq!(resolve(Some(""), SanitizeMode::Strict), DEFAULT_ACTION);
    assert_eq!(resolve(None, SanitizeMode::Basic), DEFAULT_ACTION);
    assert_eq!(resolve(Some(""), SanitizeMode::Basic), DEFAULT_ACTION);
}

#[test]
fn test_underscore_prefix_collapses_in_both_modes() {
    assert_eq!(resolve(Some("_handle"), SanitizeMode::Strict), DEFAULT_ACTION);
    assert_eq!(resolve(Some("_handle"), SanitizeMode::Basic), DEFAULT_ACTION);
}

#[test]
fn test_allowed_method_name_collapses() {
    assert_eq!(resolve(Some("GET"), SanitizeMode::Strict), DEFAULT_ACTION);
    assert_eq!(resolve(Some("POST"), SanitizeMode::Basic), DEFAULT_ACTION);
}

#[test]
fn test_method_name_collapse_is_case_sensitive_and_set_scoped() {
    // Lowercase `get` is not the method name, so it survives collapse and
    // sanitizes to itself.
    assert_eq!(resolve(Some("get"), SanitizeMode::Strict), "get");
    // DELETE is outside the allowed set, so it survives collapse too and
    // slugifies to `delete`.
    assert_eq!(resolve(Some("DELETE"), SanitizeMode::Strict), "delete");
    let wide = MethodSet::of(&[Method::GET, Method::POST, Method::DELETE]);
    assert_eq!(
        resolve_action_name(Some("DELETE"), &wide, SanitizeMode::Strict, &[]),
        DEFAULT_ACTION
    );
}

#[test]
fn test_strict_mode_slugifies() {
    assert_eq!(resolve(Some("Save Draft"), SanitizeMode::Strict), "save_draft");
    assert_eq!(resolve(Some("archive!"), SanitizeMode::Strict), "archive");
}

#[test]
fn test_strict_mode_rejects_unsalvageable_names() {
    // Slug comes out empty or starts with a non-letter.
    assert_eq!(resolve(Some("!!!"), SanitizeMode::Strict), DEFAULT_ACTION);
    assert_eq!(resolve(Some("2fast"), SanitizeMode::Strict), DEFAULT_ACTION);
    assert_eq!(resolve(Some("-edit"), SanitizeMode::Strict), DEFAULT_ACTION);
}

#[test]
fn test_strict_mode_transliterates_via_locale_chain() {
    assert_eq!(
        resolve_action_name(Some("сохранить"), &get_post(), SanitizeMode::Strict, &[]),
        "sohranit"
    );
    assert_eq!(
        resolve_action_name(
            Some("говорити"),
            &get_post(),
            SanitizeMode::Strict,
            &[Locale::Uk]
        ),
        "hovoryty"
    );
}

#[test]
fn test_basic_mode_uses_raw_name_verbatim() {
    assert_eq!(resolve(Some("Save Draft"), SanitizeMode::Basic), "Save Draft");
    assert_eq!(resolve(Some("getUser"), SanitizeMode::Basic), "getUser");
}

#[test]
fn test_default_name_passes_through_unchanged() {
    assert_eq!(resolve(Some("default"), SanitizeMode::Strict), "default");
    assert_eq!(resolve(Some("default"), SanitizeMode::Basic), "default");
}
