use std::any;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use smallvec::SmallVec;
use tracing::{debug, error, info, warn};

use super::error::DispatchError;
use crate::action::DEFAULT_ACTION;
use crate::controller::{ActionConfigError, ActionTable, Controller};
use crate::request::{ActionRequest, RequestParts};
use crate::runtime_config::RuntimeConfig;

/// Responses rarely carry more than a handful of headers.
pub const MAX_INLINE_HEADERS: usize = 16;

/// Stack-allocated header storage.
///
/// Header names use `Arc<str>` because the same names repeat across
/// responses and cloning an `Arc` is an atomic increment; values are
/// per-response data and stay `String`.
pub type HeaderVec = SmallVec<[(Arc<str>, String); MAX_INLINE_HEADERS]>;

/// What an action handler returns.
///
/// A status code, response headers and a JSON body. The host owns the
/// serialization onto its HTTP layer; handlers only decide content.
#[derive(Debug, Clone)]
pub struct ActionResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderVec,
    /// JSON body.
    pub body: Value,
}

impl ActionResponse {
    /// Create a response with the given status, headers and body.
    #[must_use]
    pub fn new(status: u16, headers: HeaderVec, body: Value) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Create a JSON response with the content-type header set.
    #[must_use]
    pub fn json(status: u16, body: Value) -> Self {
        let mut headers = HeaderVec::new();
        headers.push((Arc::from("content-type"), "application/json".to_string()));
        Self {
            status,
            headers,
            body,
        }
    }

    /// Create a `200 OK` JSON response.
    #[must_use]
    pub fn ok(body: Value) -> Self {
        Self::json(200, body)
    }

    /// Create a plain-text response. The body is carried as a JSON
    /// string; the content-type header tells the host how to render it.
    #[must_use]
    pub fn text(status: u16, body: &str) -> Self {
        let mut headers = HeaderVec::new();
        headers.push((Arc::from("content-type"), "text/plain".to_string()));
        Self {
            status,
            headers,
            body: Value::String(body.to_string()),
        }
    }

    /// Create an error response with a `{"error": ...}` body.
    #[must_use]
    pub fn error(status: u16, message: &str) -> Self {
        Self::json(status, serde_json::json!({ "error": message }))
    }

    /// Get a header by name (case-insensitive).
    #[inline]
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Add or replace a header (case-insensitive on the name).
    pub fn set_header(&mut self, name: &str, value: String) {
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.headers.push((Arc::from(name), value));
    }
}

/// Why a request fell back to the `default` slot.
///
/// Fallback is silent toward the client; this reason only appears in
/// the dispatcher's log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The resolved name matched no entry in the table.
    UnknownAction,
    /// The entry's AJAX policy rejected the request.
    AjaxMismatch,
    /// The entry's `accepts` set rejected the request method.
    VerbNotAccepted,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            FallbackReason::UnknownAction => "unknown action",
            FallbackReason::AjaxMismatch => "ajax policy mismatch",
            FallbackReason::VerbNotAccepted => "verb not accepted",
        };
        f.write_str(reason)
    }
}

/// Dispatches requests against a controller's action table.
///
/// The table is built and validated once, at construction, and shared
/// by every dispatch; a fresh controller value is created per request.
/// Cloning the dispatcher shares the table.
///
/// Dispatch order for each request:
///
/// 1. resolve the action name and freeze the [`ActionRequest`]
/// 2. create the controller value
/// 3. verb admission against the allowed set (405 on failure)
/// 4. a resolved name of `default` invokes the `default` slot directly
/// 5. table lookup, then the entry's AJAX and `accepts` filters; any
///    miss falls back through `unhandled` to `default`
/// 6. a missing `default` slot is the only other terminal error
pub struct ActionDispatcher<C: Controller> {
    table: Arc<ActionTable<C>>,
    config: RuntimeConfig,
}

impl<C: Controller> ActionDispatcher<C> {
    /// Build a dispatcher with configuration read from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ActionConfigError`] if the controller's table fails
    /// validation.
    pub fn new() -> Result<Self, ActionConfigError> {
        Self::with_config(RuntimeConfig::from_env())
    }

    /// Build a dispatcher with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ActionConfigError`] if the controller's table fails
    /// validation.
    pub fn with_config(config: RuntimeConfig) -> Result<Self, ActionConfigError> {
        let table = C::actions()?;
        info!(
            controller = any::type_name::<C>(),
            actions = table.len(),
            has_default = table.has_default(),
            has_unhandled = table.has_unhandled(),
            "Registered action table"
        );
        Ok(Self {
            table: Arc::new(table),
            config,
        })
    }

    /// The controller's validated table.
    #[must_use]
    #[inline]
    pub fn table(&self) -> &ActionTable<C> {
        &self.table
    }

    /// The active runtime configuration.
    #[must_use]
    #[inline]
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Freeze raw request parts into a resolved [`ActionRequest`]
    /// without dispatching it. Useful for hosts that log or inspect the
    /// resolution before handing off.
    #[must_use]
    pub fn resolve(&self, parts: RequestParts) -> ActionRequest {
        ActionRequest::resolve(parts, &self.table, &self.config)
    }

    /// Resolve and dispatch a request.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::MethodNotAllowed`] when the verb is
    /// outside the allowed set, and [`DispatchError::NotImplemented`]
    /// when the request reaches a `default` slot the controller never
    /// implemented. Everything else resolves to a handler response.
    pub fn dispatch(&self, parts: RequestParts) -> Result<ActionResponse, DispatchError> {
        let req = self.resolve(parts);
        let mut controller = C::create(&req);

        if !self.table.allowed().contains(req.method()) {
            warn!(
                method = %req.method(),
                allow = %self.table.allowed(),
                controller = any::type_name::<C>(),
                "Rejecting method outside allowed set"
            );
            return Err(DispatchError::MethodNotAllowed {
                allow: self.table.allowed().clone(),
            });
        }

        if req.action() == DEFAULT_ACTION {
            return self.invoke_default(&mut controller, &req);
        }

        let entry = match self.table.entry(req.action()) {
            Some(entry) => entry,
            None => return self.fall_back(&mut controller, &req, FallbackReason::UnknownAction),
        };

        if entry.ajax.conflicts_with(req.is_ajax()) {
            return self.fall_back(&mut controller, &req, FallbackReason::AjaxMismatch);
        }

        if let Some(accepts) = entry.accepts.as_ref() {
            if !accepts.contains(req.method()) {
                return self.fall_back(&mut controller, &req, FallbackReason::VerbNotAccepted);
            }
        }

        debug!(action = req.action(), "Invoking action handler");
        let response = (entry.handler)(&mut controller, &req);
        info!(
            action = req.action(),
            status = response.status,
            "Action handled"
        );
        Ok(response)
    }

    /// Route a miss through `unhandled`, then `default`.
    fn fall_back(
        &self,
        controller: &mut C,
        req: &ActionRequest,
        reason: FallbackReason,
    ) -> Result<ActionResponse, DispatchError> {
        warn!(
            action = req.action(),
            raw_action = req.raw_action().unwrap_or_default(),
            reason = %reason,
            controller = any::type_name::<C>(),
            "Falling back to default action"
        );
        match self.table.unhandled_handler() {
            Some(handler) => Ok(handler(controller, req)),
            None => self.invoke_default(controller, req),
        }
    }

    fn invoke_default(
        &self,
        controller: &mut C,
        req: &ActionRequest,
    ) -> Result<ActionResponse, DispatchError> {
        match self.table.default_handler() {
            Some(handler) => {
                debug!(action = DEFAULT_ACTION, "Invoking default action");
                Ok(handler(controller, req))
            }
            None => {
                error!(
                    controller = any::type_name::<C>(),
                    "No default action implemented"
                );
                Err(DispatchError::NotImplemented {
                    controller: any::type_name::<C>().to_string(),
                })
            }
        }
    }
}

impl<C: Controller> Clone for ActionDispatcher<C> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
            config: self.config.clone(),
        }
    }
}

impl<C: Controller> fmt::Debug for ActionDispatcher<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionDispatcher")
            .field("controller", &any::type_name::<C>())
            .field("table", &self.table)
            .field("config", &self.config)
            .finish()
    }
}
