//! Tests for the action dispatcher
//!
//! # Test Coverage
//!
//! Validates the dispatcher's core contract end to end:
//! - Action lookup and handler invocation
//! - Collapse rules (underscore prefix, verb names, missing parameter)
//! - Strict sanitization including locale-chain transliteration
//! - Verb admission (405 with the allowed set) and per-action filters
//! - The `unhandled` → `default` fallback chain and its terminal error
//! - URL parameter defaults and per-request controller state
//!
//! # Test Strategy
//!
//! Each test drives the public API only: a fixture controller declares a
//! table, the dispatcher is built with explicit configuration, and
//! assertions inspect the response body (which names the handler that
//! ran) or the returned error.

use actioneer::controller::{
    Action, ActionConfigError, ActionTable, AjaxPolicy, Controller, MethodSet,
};
use actioneer::dispatcher::{ActionDispatcher, ActionResponse, DispatchError};
use actioneer::request::{ActionRequest, RequestParts};
use actioneer::runtime_config::RuntimeConfig;
use actioneer::slug::Locale;
use actioneer::SanitizeMode;
use http::Method;
use serde_json::json;

use tracing_util::TestTracing;

/// Fixture controller with one of everything: plain actions, a
/// verb-restricted action, both AJAX policies, a url param and a
/// default slot.
struct Blog {
    hits: u32,
}

impl Blog {
    fn index(&mut self, _req: &ActionRequest) -> ActionResponse {
        ActionResponse::ok(json!("index"))
    }

    fn archive(&mut self, req: &ActionRequest) -> ActionResponse {
        self.hits += 1;
        ActionResponse::ok(json!({
            "handler": "archive",
            "page": req.url_param("page"),
            "hits": self.hits,
        }))
    }

    fn save_draft(&mut self, _req: &ActionRequest) -> ActionResponse {
        ActionResponse::ok(json!("save_draft"))
    }

    fn hovoryty(&mut self, _req: &ActionRequest) -> ActionResponse {
        ActionResponse::ok(json!("hovoryty"))
    }

    fn purge(&mut self, _req: &ActionRequest) -> ActionResponse {
        ActionResponse::ok(json!("purge"))
    }

    fn peek(&mut self, _req: &ActionRequest) -> ActionResponse {
        ActionResponse::ok(json!("peek"))
    }

    fn export(&mut self, _req: &ActionRequest) -> ActionResponse {
        ActionResponse::ok(json!("export"))
    }
}

impl Controller for Blog {
    fn actions() -> Result<ActionTable<Self>, ActionConfigError> {
        ActionTable::builder()
            .allow_methods(&[Method::GET, Method::POST, Method::DELETE])
            .url_param("page", "1")
            .handle("archive", Blog::archive)
            .handle("save_draft", Blog::save_draft)
            .handle("hovoryty", Blog::hovoryty)
            .action(Action::new("purge", Blog::purge).accepts(&[Method::DELETE]))
            .action(Action::new("peek", Blog::peek).ajax(AjaxPolicy::Required))
            .action(Action::new("export", Blog::export).ajax(AjaxPolicy::Forbidden))
            .default_action(Blog::index)
            .build()
    }

    fn create(_req: &ActionRequest) -> Self {
        Blog { hits: 0 }
    }
}

/// Controller with no default slot: fallback has nowhere to land.
struct Bare;

impl Bare {
    fn only(&mut self, _req: &ActionRequest) -> ActionResponse {
        ActionResponse::ok(json!("only"))
    }
}

impl Controller for Bare {
    fn actions() -> Result<ActionTable<Self>, ActionConfigError> {
        ActionTable::builder().handle("only", Bare::only).build()
    }

    fn create(_req: &ActionRequest) -> Self {
        Bare
    }
}

/// Controller with an `unhandled` interceptor in front of `default`.
struct Guarded;

impl Guarded {
    fn known(&mut self, _req: &ActionRequest) -> ActionResponse {
        ActionResponse::ok(json!("known"))
    }

    fn trap(&mut self, req: &ActionRequest) -> ActionResponse {
        ActionResponse::ok(json!({ "handler": "unhandled", "raw": req.raw_action() }))
    }

    fn fallback(&mut self, _req: &ActionRequest) -> ActionResponse {
        ActionResponse::ok(json!("default"))
    }
}

impl Controller for Guarded {
    fn actions() -> Result<ActionTable<Self>, ActionConfigError> {
        ActionTable::builder()
            .handle("known", Guarded::known)
            .unhandled_action(Guarded::trap)
            .default_action(Guarded::fallback)
            .build()
    }

    fn create(_req: &ActionRequest) -> Self {
        Guarded
    }
}

fn dispatcher<C: Controller>() -> ActionDispatcher<C> {
    ActionDispatcher::with_config(RuntimeConfig::default()).unwrap()
}

fn get(action: &str) -> RequestParts {
    RequestParts::new(Method::GET).param("action", action)
}

#[test]
fn test_action_param_selects_handler() {
    let _tracing = TestTracing::init();
    let d = dispatcher::<Blog>();
    let response = d.dispatch(get("archive")).unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.body["handler"], json!("archive"));
}

#[test]
fn test_missing_action_invokes_default() {
    let d = dispatcher::<Blog>();
    let response = d.dispatch(RequestParts::new(Method::GET)).unwrap();
    assert_eq!(response.body, json!("index"));
}

#[test]
fn test_empty_action_invokes_default() {
    let d = dispatcher::<Blog>();
    let response = d.dispatch(get("")).unwrap();
    assert_eq!(response.body, json!("index"));
}

#[test]
fn test_underscore_prefixed_action_falls_back() {
    let _tracing = TestTracing::init();
    let d = dispatcher::<Blog>();
    let response = d.dispatch(get("_archive")).unwrap();
    assert_eq!(response.body, json!("index"));
}

#[test]
fn test_verb_named_action_falls_back() {
    let d = dispatcher::<Blog>();
    for verb in ["GET", "POST", "DELETE"] {
        let response = d.dispatch(get(verb)).unwrap();
        assert_eq!(response.body, json!("index"), "action `{verb}`");
    }
    // PUT is not in the allowed set, so as an action name it survives
    // collapse, misses the table and still lands on default.
    let response = d.dispatch(get("PUT")).unwrap();
    assert_eq!(response.body, json!("index"));
}

#[test]
fn test_unknown_action_falls_back_to_default() {
    let d = dispatcher::<Blog>();
    let response = d.dispatch(get("no_such_action")).unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.body, json!("index"));
}

#[test]
fn test_direct_default_request_hits_default() {
    let d = dispatcher::<Blog>();
    let response = d.dispatch(get("default")).unwrap();
    assert_eq!(response.body, json!("index"));
}

#[test]
fn test_strict_mode_sanitizes_to_registered_name() {
    let d = dispatcher::<Blog>();
    // Whitespace collapses to the spacer, case folds, punctuation strips.
    let response = d.dispatch(get("Save Draft")).unwrap();
    assert_eq!(response.body, json!("save_draft"));
    let response = d.dispatch(get("ARCHIVE!")).unwrap();
    assert_eq!(response.body["handler"], json!("archive"));
}

#[test]
fn test_strict_mode_rejects_malformed_slug() {
    let d = dispatcher::<Blog>();
    let response = d.dispatch(get("!!!")).unwrap();
    assert_eq!(response.body, json!("index"));
    let response = d.dispatch(get("9lives")).unwrap();
    assert_eq!(response.body, json!("index"));
}

#[test]
fn test_config_locales_steer_transliteration() {
    let config = RuntimeConfig {
        sanitize: SanitizeMode::Strict,
        locales: vec![Locale::Uk],
    };
    let d = ActionDispatcher::<Blog>::with_config(config).unwrap();
    let response = d.dispatch(get("говорити")).unwrap();
    assert_eq!(response.body, json!("hovoryty"));
}

#[test]
fn test_request_locales_override_config() {
    // Default chain prefers Russian, so without the override the slug
    // would be `govoriti` and miss the table.
    let d = dispatcher::<Blog>();
    let response = d.dispatch(get("говорити")).unwrap();
    assert_eq!(response.body, json!("index"));

    let response = d
        .dispatch(get("говорити").locales(&[Locale::Uk]))
        .unwrap();
    assert_eq!(response.body, json!("hovoryty"));
}

#[test]
fn test_basic_mode_skips_sanitization() {
    let config = RuntimeConfig {
        sanitize: SanitizeMode::Basic,
        locales: Vec::new(),
    };
    let d = ActionDispatcher::<Blog>::with_config(config).unwrap();
    // The raw name is used verbatim, so the spaced form misses the table.
    let response = d.dispatch(get("Save Draft")).unwrap();
    assert_eq!(response.body, json!("index"));
    // Exact names still hit.
    let response = d.dispatch(get("save_draft")).unwrap();
    assert_eq!(response.body, json!("save_draft"));
    // Collapse rules still apply before the verbatim lookup.
    let response = d.dispatch(get("_archive")).unwrap();
    assert_eq!(response.body, json!("index"));
}

#[test]
fn test_disallowed_method_is_rejected_with_allow_set() {
    let _tracing = TestTracing::init();
    let d = dispatcher::<Blog>();
    let err = d
        .dispatch(RequestParts::new(Method::PUT).param("action", "archive"))
        .unwrap_err();
    assert_eq!(
        err,
        DispatchError::MethodNotAllowed {
            allow: MethodSet::of(&[Method::GET, Method::POST, Method::DELETE]),
        }
    );
    assert_eq!(err.status(), 405);
}

#[test]
fn test_method_admission_runs_before_action_lookup() {
    let d = dispatcher::<Blog>();
    // Even an unknown action gets the 405, not the silent fallback.
    let err = d
        .dispatch(RequestParts::new(Method::PATCH).param("action", "nope"))
        .unwrap_err();
    assert!(matches!(err, DispatchError::MethodNotAllowed { .. }));
}

#[test]
fn test_accepts_filter_enforces_membership() {
    let d = dispatcher::<Blog>();
    // purge accepts only DELETE; a GET falls back silently.
    let response = d.dispatch(get("purge")).unwrap();
    assert_eq!(response.body, json!("index"));
    // The accepted verb goes through.
    let response = d
        .dispatch(RequestParts::new(Method::DELETE).param("action", "purge"))
        .unwrap();
    assert_eq!(response.body, json!("purge"));
}

#[test]
fn test_ajax_required_action() {
    let d = dispatcher::<Blog>();
    let response = d.dispatch(get("peek")).unwrap();
    assert_eq!(response.body, json!("index"));
    let response = d.dispatch(get("peek").ajax()).unwrap();
    assert_eq!(response.body, json!("peek"));
}

#[test]
fn test_ajax_forbidden_action() {
    let d = dispatcher::<Blog>();
    let response = d.dispatch(get("export").ajax()).unwrap();
    assert_eq!(response.body, json!("index"));
    let response = d.dispatch(get("export")).unwrap();
    assert_eq!(response.body, json!("export"));
}

#[test]
fn test_any_nonempty_ajax_header_counts() {
    let d = dispatcher::<Blog>();
    let response = d
        .dispatch(get("peek").ajax_header("fetch-wrapper"))
        .unwrap();
    assert_eq!(response.body, json!("peek"));
    // An empty header value does not mark the request as AJAX.
    let response = d.dispatch(get("peek").ajax_header("")).unwrap();
    assert_eq!(response.body, json!("index"));
}

#[test]
fn test_url_param_default_and_override() {
    let d = dispatcher::<Blog>();
    let response = d.dispatch(get("archive")).unwrap();
    assert_eq!(response.body["page"], json!("1"));
    let response = d.dispatch(get("archive").param("page", "7")).unwrap();
    assert_eq!(response.body["page"], json!("7"));
}

#[test]
fn test_controller_instance_is_per_request() {
    let d = dispatcher::<Blog>();
    let first = d.dispatch(get("archive")).unwrap();
    let second = d.dispatch(get("archive")).unwrap();
    assert_eq!(first.body["hits"], json!(1));
    assert_eq!(second.body["hits"], json!(1));
}

#[test]
fn test_missing_default_is_not_implemented() {
    let _tracing = TestTracing::init();
    let d = dispatcher::<Bare>();
    let err = d.dispatch(get("missing")).unwrap_err();
    match &err {
        DispatchError::NotImplemented { controller } => {
            assert!(controller.contains("Bare"));
        }
        other => panic!("expected NotImplemented, got {other:?}"),
    }
    assert_eq!(err.status(), 500);
    // A direct request for `default` hits the same wall.
    let err = d.dispatch(get("default")).unwrap_err();
    assert!(matches!(err, DispatchError::NotImplemented { .. }));
    // Registered actions keep working without a default slot.
    let response = d.dispatch(get("only")).unwrap();
    assert_eq!(response.body, json!("only"));
}

#[test]
fn test_unhandled_intercepts_fallback() {
    let d = dispatcher::<Guarded>();
    let response = d.dispatch(get("mystery")).unwrap();
    assert_eq!(response.body["handler"], json!("unhandled"));
    assert_eq!(response.body["raw"], json!("mystery"));
}

#[test]
fn test_unhandled_does_not_intercept_direct_default() {
    let d = dispatcher::<Guarded>();
    let response = d.dispatch(get("default")).unwrap();
    assert_eq!(response.body, json!("default"));
    let response = d.dispatch(RequestParts::new(Method::GET)).unwrap();
    assert_eq!(response.body, json!("default"));
}

#[test]
fn test_resolve_exposes_request_context() {
    let d = dispatcher::<Blog>();
    let req = d.resolve(
        RequestParts::new(Method::POST)
            .query_string("action=Save Draft&page=4&extra=x")
            .ajax(),
    );
    assert_eq!(req.action(), "save_draft");
    assert_eq!(req.raw_action(), Some("Save Draft"));
    assert_eq!(req.method(), &Method::POST);
    assert!(req.is_ajax());
    assert_eq!(req.url_param("page"), Some("4"));
    assert_eq!(req.param("extra"), Some("x"));
    // Undeclared names never appear among url params.
    assert_eq!(req.url_param("extra"), None);
}

#[test]
fn test_args_reach_the_handler() {
    struct Echo;
    impl Echo {
        fn show(&mut self, req: &ActionRequest) -> ActionResponse {
            ActionResponse::ok(json!({ "args": req.args() }))
        }
    }
    impl Controller for Echo {
        fn actions() -> Result<ActionTable<Self>, ActionConfigError> {
            ActionTable::builder().default_action(Echo::show).build()
        }
        fn create(_req: &ActionRequest) -> Self {
            Echo
        }
    }

    let d = dispatcher::<Echo>();
    let response = d
        .dispatch(RequestParts::new(Method::GET).arg("2024").arg("05"))
        .unwrap();
    assert_eq!(response.body["args"], json!(["2024", "05"]));
}

#[test]
fn test_dispatcher_clone_shares_table() {
    let d = dispatcher::<Blog>();
    let clone = d.clone();
    assert_eq!(d.table().action_names(), clone.table().action_names());
    let response = clone.dispatch(get("archive")).unwrap();
    assert_eq!(response.body["handler"], json!("archive"));
}

#[test]
fn test_table_accessors_report_registration() {
    let d = dispatcher::<Blog>();
    let table = d.table();
    assert_eq!(table.len(), 6);
    assert!(table.has_action("purge"));
    assert!(table.has_default());
    assert!(!table.has_unhandled());
    assert_eq!(
        table.action_names(),
        ["archive", "export", "hovoryty", "peek", "purge", "save_draft"]
    );
}

#[test]
fn test_invalid_table_surfaces_config_error() {
    struct Broken;
    impl Controller for Broken {
        fn actions() -> Result<ActionTable<Self>, ActionConfigError> {
            ActionTable::builder()
                .handle("default", |_c: &mut Broken, _req: &ActionRequest| {
                    ActionResponse::ok(json!(null))
                })
                .build()
        }
        fn create(_req: &ActionRequest) -> Self {
            Broken
        }
    }

    let err = ActionDispatcher::<Broken>::with_config(RuntimeConfig::default()).unwrap_err();
    assert_eq!(
        err,
        ActionConfigError::ReservedActionName {
            name: "default".to_string()
        }
    );
}
