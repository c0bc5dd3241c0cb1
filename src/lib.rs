//! # Actioneer
//!
//! **Actioneer** resolves an `action` request parameter to a controller
//! method and dispatches it through per-action admission filters. It is
//! the dispatch layer for the "one URL, many actions" style of handler,
//! where a form posts `action=archive` or `action=save_draft` to the
//! same endpoint and the controller fans out internally.
//!
//! ## Overview
//!
//! A controller declares its dispatch surface once, as an explicit
//! table of action descriptors: handlers, per-action verb and AJAX
//! filters, URL-parameter defaults and the two special slots
//! (`default` and `unhandled`). The dispatcher validates that table at
//! construction and then, per request, resolves the `action` parameter
//! through collapse and sanitization rules, applies the filters, and
//! invokes the selected handler. Misses never leak routing details to
//! the client: they fall back to the `default` slot and the reason is
//! recorded in the logs instead.
//!
//! ## Architecture
//!
//! The library is organized into focused modules:
//!
//! - **[`action`]** - Action-name resolution: collapse rules, strict/basic
//!   sanitization, the canonical name pattern
//! - **[`slug`]** - Locale-aware transliteration backing strict sanitization
//! - **[`request`]** - Request assembly ([`RequestParts`]) and the frozen
//!   per-request context ([`ActionRequest`])
//! - **[`controller`]** - The [`Controller`] trait, action descriptors and
//!   the validating table builder
//! - **[`dispatcher`]** - The dispatch loop, admission filters, fallback
//!   chain and terminal errors
//! - **[`typed`]** - Typed parameter extraction over `FromStr` and serde
//! - **[`runtime_config`]** - Environment-driven configuration
//!
//! ### Dispatch Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Host as Host HTTP layer
//!     participant Dispatcher as ActionDispatcher
//!     participant Resolver as action::resolve
//!     participant Table as ActionTable
//!     participant Handler as Controller handler
//!
//!     Host->>Dispatcher: dispatch(RequestParts)
//!     Dispatcher->>Resolver: raw `action` parameter
//!     Resolver->>Resolver: collapse (_prefix, verb name, empty)
//!     Resolver->>Resolver: slugify + canonical pattern (strict mode)
//!     Resolver-->>Dispatcher: resolved name
//!
//!     Dispatcher->>Table: verb admission
//!     alt method outside allowed set
//!         Dispatcher-->>Host: Err(MethodNotAllowed { allow })
//!     end
//!
//!     Dispatcher->>Table: lookup resolved name
//!     alt hit
//!         Dispatcher->>Table: ajax / accepts filters
//!         alt filters pass
//!             Dispatcher->>Handler: invoke(&mut controller, &req)
//!             Handler-->>Host: ActionResponse
//!         else filter mismatch
//!             Dispatcher->>Handler: unhandled → default (warn logged)
//!         end
//!     else miss
//!         Dispatcher->>Handler: unhandled → default (warn logged)
//!     end
//!
//!     alt no default slot
//!         Dispatcher-->>Host: Err(NotImplemented)
//!     end
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use actioneer::controller::{ActionConfigError, ActionTable, Controller};
//! use actioneer::dispatcher::{ActionDispatcher, ActionResponse};
//! use actioneer::request::{ActionRequest, RequestParts};
//! use actioneer::runtime_config::RuntimeConfig;
//! use http::Method;
//! use serde_json::json;
//!
//! struct Blog;
//!
//! impl Blog {
//!     fn archive(&mut self, req: &ActionRequest) -> ActionResponse {
//!         ActionResponse::ok(json!({ "page": req.url_param("page") }))
//!     }
//!
//!     fn index(&mut self, _req: &ActionRequest) -> ActionResponse {
//!         ActionResponse::ok(json!("index"))
//!     }
//! }
//!
//! impl Controller for Blog {
//!     fn actions() -> Result<ActionTable<Self>, ActionConfigError> {
//!         ActionTable::builder()
//!             .url_param("page", "1")
//!             .handle("archive", Blog::archive)
//!             .default_action(Blog::index)
//!             .build()
//!     }
//!
//!     fn create(_req: &ActionRequest) -> Self {
//!         Blog
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dispatcher = ActionDispatcher::<Blog>::with_config(RuntimeConfig::default())?;
//!
//!     // ?action=archive selects the archive handler; the declared url
//!     // parameter keeps its default.
//!     let response =
//!         dispatcher.dispatch(RequestParts::new(Method::GET).query_string("action=archive"))?;
//!     assert_eq!(response.status, 200);
//!     assert_eq!(response.body, json!({ "page": "1" }));
//!
//!     // No action parameter resolves to the default slot.
//!     let response = dispatcher.dispatch(RequestParts::new(Method::GET))?;
//!     assert_eq!(response.body, json!("index"));
//!     Ok(())
//! }
//! ```
//!
//! ## Resolution Rules
//!
//! The `action` parameter goes through two stages before lookup:
//!
//! 1. **Collapse** — missing/empty values, names starting with `_` and
//!    names equal to an allowed HTTP method all resolve to `default`.
//!    These run on the raw value, so sanitization can never un-collapse
//!    a protected name.
//! 2. **Sanitize** — in strict mode (the default) the name is slugified
//!    (lowercased, whitespace collapsed to `_`, transliterated through
//!    the locale chain, stripped to `[0-9A-Za-z_-]`) and must match the
//!    anchored pattern `^[a-z][0-9A-Za-z_-]*$`. Basic mode skips this
//!    stage for hosts that trust their inputs.
//!
//! ## Error Model
//!
//! Exactly two dispatch outcomes are errors, both in [`DispatchError`]:
//!
//! - `MethodNotAllowed { allow }` — the verb is outside the allowed
//!   set; the carried set is the `Allow` header material (HTTP 405)
//! - `NotImplemented { controller }` — the request reached a `default`
//!   slot the controller never implemented (HTTP 500)
//!
//! Everything else — unknown actions, AJAX mismatches, `accepts`
//! mismatches — resolves silently through `unhandled` and `default`,
//! with a warn-level log record carrying the resolved name, the raw
//! parameter and the reason.
//!
//! ## Configuration
//!
//! Behavior is tunable per process via environment variables (see
//! [`runtime_config`]):
//!
//! - `ACTR_SANITIZE` — `strict` (default) or `basic`
//! - `ACTR_LOCALES` — comma-separated locale codes promoted to the
//!   front of the transliteration chain, e.g. `uk,el`
//!
//! Hosts that configure in code instead use
//! [`ActionDispatcher::with_config`].

pub mod action;
pub mod controller;
pub mod dispatcher;
pub mod request;
pub mod runtime_config;
pub mod slug;
pub mod typed;

pub use action::{is_valid_action_name, SanitizeMode, DEFAULT_ACTION};
pub use controller::{
    Action, ActionConfigError, ActionTable, ActionTableBuilder, AjaxPolicy, Controller, MethodSet,
};
pub use dispatcher::{ActionDispatcher, ActionResponse, DispatchError, FallbackReason};
pub use request::{ActionRequest, RequestParts};
pub use runtime_config::RuntimeConfig;
pub use slug::{slugify, Locale};
