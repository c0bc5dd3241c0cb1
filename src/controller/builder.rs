use std::collections::HashMap;

use http::Method;

use super::core::{Action, ActionEntry, ActionTable, HandlerFn, MethodSet};
use super::error::ActionConfigError;
use crate::action::{is_valid_action_name, DEFAULT_ACTION};
use crate::dispatcher::ActionResponse;
use crate::request::{ActionRequest, ParamMap};

/// Fluent builder for [`ActionTable`].
///
/// Collects the controller's declarations and validates the whole set in
/// [`build`](Self::build), so a misdeclared table fails loudly at
/// construction instead of silently misrouting requests later.
///
/// # Example
///
/// ```rust,ignore
/// ActionTable::builder()
///     .allow_methods(&[Method::GET, Method::POST, Method::DELETE])
///     .url_param("page", "1")
///     .handle("archive", Blog::archive)
///     .action(Action::new("purge", Blog::purge).accepts(&[Method::DELETE]))
///     .default_action(Blog::index)
///     .build()
/// ```
pub struct ActionTableBuilder<C> {
    allowed: Option<MethodSet>,
    url_params: ParamMap,
    actions: Vec<Action<C>>,
    default: Option<HandlerFn<C>>,
    unhandled: Option<HandlerFn<C>>,
}

impl<C> ActionTableBuilder<C> {
    /// Start with no declarations.
    #[must_use]
    pub fn new() -> Self {
        Self {
            allowed: None,
            url_params: ParamMap::new(),
            actions: Vec::new(),
            default: None,
            unhandled: None,
        }
    }

    /// Replace the controller's allowed method set. Without this call
    /// the table admits `GET` and `POST`.
    #[must_use]
    pub fn allow_methods(mut self, methods: &[Method]) -> Self {
        self.allowed = Some(MethodSet::of(methods));
        self
    }

    /// Declare a URL parameter and its default value. Declaring the same
    /// name again overwrites the default.
    #[must_use]
    pub fn url_param(mut self, name: impl Into<String>, default: impl Into<String>) -> Self {
        self.url_params.insert(name.into(), default.into());
        self
    }

    /// Register a fully-configured action descriptor.
    #[must_use]
    pub fn action(mut self, action: Action<C>) -> Self {
        self.actions.push(action);
        self
    }

    /// Register an unrestricted action. Shorthand for
    /// `action(Action::new(name, handler))`.
    #[must_use]
    pub fn handle<F>(self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut C, &ActionRequest) -> ActionResponse + Send + Sync + 'static,
    {
        self.action(Action::new(name, handler))
    }

    /// Implement the `default` slot: the handler for requests whose
    /// action name resolves to `default`, directly or by fallback.
    #[must_use]
    pub fn default_action<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut C, &ActionRequest) -> ActionResponse + Send + Sync + 'static,
    {
        self.default = Some(Box::new(handler));
        self
    }

    /// Implement the `unhandled` slot: intercepts fallbacks (unknown
    /// names and filter mismatches) before they reach the `default`
    /// slot. Direct requests for `default` do not pass through here.
    #[must_use]
    pub fn unhandled_action<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut C, &ActionRequest) -> ActionResponse + Send + Sync + 'static,
    {
        self.unhandled = Some(Box::new(handler));
        self
    }

    /// Validate the declarations and produce the table.
    ///
    /// # Errors
    ///
    /// Returns [`ActionConfigError`] if the allowed set is explicitly
    /// empty, an action name is reserved, malformed or duplicated.
    pub fn build(self) -> Result<ActionTable<C>, ActionConfigError> {
        let allowed = self.allowed.unwrap_or_else(MethodSet::default_allowed);
        if allowed.is_empty() {
            return Err(ActionConfigError::EmptyMethodSet);
        }
        let mut entries: HashMap<String, ActionEntry<C>> =
            HashMap::with_capacity(self.actions.len());
        for action in self.actions {
            let Action {
                name,
                handler,
                accepts,
                ajax,
            } = action;
            if name == DEFAULT_ACTION || allowed.contains_name(&name) {
                return Err(ActionConfigError::ReservedActionName { name });
            }
            if !is_valid_action_name(&name) {
                return Err(ActionConfigError::InvalidActionName { name });
            }
            if entries.contains_key(&name) {
                return Err(ActionConfigError::DuplicateAction { name });
            }
            entries.insert(
                name,
                ActionEntry {
                    handler,
                    accepts,
                    ajax,
                },
            );
        }
        Ok(ActionTable {
            allowed,
            url_params: self.url_params,
            entries,
            default: self.default,
            unhandled: self.unhandled,
        })
    }
}

impl<C> Default for ActionTableBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
