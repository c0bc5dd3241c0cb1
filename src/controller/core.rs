use std::collections::HashMap;
use std::fmt;

use http::Method;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::builder::ActionTableBuilder;
use super::error::ActionConfigError;
use crate::dispatcher::ActionResponse;
use crate::request::{ActionRequest, ParamMap};

/// Controllers rarely admit more than a few verbs, so the set stays
/// inline.
pub const MAX_INLINE_METHODS: usize = 4;

/// Boxed handler stored in an action table.
///
/// Plain `&mut self` controller methods coerce to this shape, so
/// `Action::new("archive", Blog::archive)` works without a closure.
pub type HandlerFn<C> = Box<dyn Fn(&mut C, &ActionRequest) -> ActionResponse + Send + Sync>;

/// An insertion-ordered, duplicate-free set of HTTP methods.
///
/// Used both as a controller's verb admission list and as a per-action
/// `accepts` restriction. Equality is order-sensitive, matching the
/// order the set will render in an `Allow` header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MethodSet {
    methods: SmallVec<[Method; MAX_INLINE_METHODS]>,
}

impl MethodSet {
    /// An empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a slice, dropping duplicates and keeping the
    /// first occurrence's position.
    #[must_use]
    pub fn of(methods: &[Method]) -> Self {
        let mut set = Self::new();
        for method in methods {
            set.insert(method.clone());
        }
        set
    }

    /// The conventional admission set for form-driven controllers.
    #[must_use]
    pub fn default_allowed() -> Self {
        Self::of(&[Method::GET, Method::POST])
    }

    /// Insert a method; returns `false` if it was already present.
    pub fn insert(&mut self, method: Method) -> bool {
        if self.contains(&method) {
            return false;
        }
        self.methods.push(method);
        true
    }

    /// Whether the set contains `method`.
    #[must_use]
    pub fn contains(&self, method: &Method) -> bool {
        self.methods.contains(method)
    }

    /// Whether the set contains a method whose canonical name equals
    /// `name` exactly. Method names are uppercase, so this comparison is
    /// case-sensitive on purpose.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.methods.iter().any(|m| m.as_str() == name)
    }

    /// Iterate the methods in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Method> {
        self.methods.iter()
    }

    /// Number of methods in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl fmt::Display for MethodSet {
    /// Renders as an `Allow` header value: `GET, POST`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, method) in self.methods.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(method.as_str())?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a MethodSet {
    type Item = &'a Method;
    type IntoIter = std::slice::Iter<'a, Method>;

    fn into_iter(self) -> Self::IntoIter {
        self.methods.iter()
    }
}

impl FromIterator<Method> for MethodSet {
    fn from_iter<I: IntoIterator<Item = Method>>(iter: I) -> Self {
        let mut set = Self::new();
        for method in iter {
            set.insert(method);
        }
        set
    }
}

impl From<&[Method]> for MethodSet {
    fn from(methods: &[Method]) -> Self {
        Self::of(methods)
    }
}

/// Per-action AJAX admission policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AjaxPolicy {
    /// Only AJAX requests reach the handler.
    Required,
    /// Only non-AJAX requests reach the handler.
    Forbidden,
    /// The AJAX marker is ignored.
    Unrestricted,
}

impl Default for AjaxPolicy {
    fn default() -> Self {
        AjaxPolicy::Unrestricted
    }
}

impl AjaxPolicy {
    /// Whether a request with the given AJAX marker violates this policy.
    #[must_use]
    pub fn conflicts_with(&self, is_ajax: bool) -> bool {
        match self {
            AjaxPolicy::Required => !is_ajax,
            AjaxPolicy::Forbidden => is_ajax,
            AjaxPolicy::Unrestricted => false,
        }
    }
}

/// A named action descriptor: the handler plus its admission filters.
///
/// Descriptors are declared explicitly and consumed by
/// [`ActionTableBuilder::action`](super::ActionTableBuilder::action);
/// nothing is discovered by inspecting the controller type.
///
/// # Example
///
/// ```rust,ignore
/// Action::new("preview", Blog::preview)
///     .accepts(&[Method::POST])
///     .ajax(AjaxPolicy::Required)
/// ```
pub struct Action<C> {
    pub(super) name: String,
    pub(super) handler: HandlerFn<C>,
    pub(super) accepts: Option<MethodSet>,
    pub(super) ajax: AjaxPolicy,
}

impl<C> Action<C> {
    /// Declare an action under `name` with the given handler.
    pub fn new<F>(name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut C, &ActionRequest) -> ActionResponse + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            handler: Box::new(handler),
            accepts: None,
            ajax: AjaxPolicy::Unrestricted,
        }
    }

    /// Restrict the action to the given methods, on top of the
    /// controller-wide admission set. An empty slice clears the
    /// restriction.
    #[must_use]
    pub fn accepts(mut self, methods: &[Method]) -> Self {
        self.accepts = if methods.is_empty() {
            None
        } else {
            Some(MethodSet::of(methods))
        };
        self
    }

    /// Set the action's AJAX policy.
    #[must_use]
    pub fn ajax(mut self, policy: AjaxPolicy) -> Self {
        self.ajax = policy;
        self
    }

    /// Restrict the action to AJAX requests. Shorthand for
    /// `ajax(AjaxPolicy::Required)`.
    #[must_use]
    pub fn ajax_only(self) -> Self {
        self.ajax(AjaxPolicy::Required)
    }

    /// Exclude AJAX requests from the action. Shorthand for
    /// `ajax(AjaxPolicy::Forbidden)`.
    #[must_use]
    pub fn no_ajax(self) -> Self {
        self.ajax(AjaxPolicy::Forbidden)
    }

    /// The declared action name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<C> fmt::Debug for Action<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("name", &self.name)
            .field("accepts", &self.accepts)
            .field("ajax", &self.ajax)
            .finish_non_exhaustive()
    }
}

/// Validated descriptor record stored in the table.
pub(crate) struct ActionEntry<C> {
    pub(crate) handler: HandlerFn<C>,
    pub(crate) accepts: Option<MethodSet>,
    pub(crate) ajax: AjaxPolicy,
}

/// A controller's complete, validated dispatch surface.
///
/// The table is the single source of truth for what a controller
/// exposes: its allowed methods, its URL-parameter defaults, its named
/// actions with their filters, and the optional `default` and
/// `unhandled` slots. Tables are immutable once built; all validation
/// happens in [`ActionTableBuilder::build`](super::ActionTableBuilder::build).
pub struct ActionTable<C> {
    pub(super) allowed: MethodSet,
    pub(super) url_params: ParamMap,
    pub(super) entries: HashMap<String, ActionEntry<C>>,
    pub(super) default: Option<HandlerFn<C>>,
    pub(super) unhandled: Option<HandlerFn<C>>,
}

impl<C> ActionTable<C> {
    /// Start declaring a table.
    #[must_use]
    pub fn builder() -> ActionTableBuilder<C> {
        ActionTableBuilder::new()
    }

    /// Methods the controller admits at all.
    #[must_use]
    #[inline]
    pub fn allowed(&self) -> &MethodSet {
        &self.allowed
    }

    /// Declared URL parameters and their default values.
    #[must_use]
    #[inline]
    pub fn url_param_defaults(&self) -> &ParamMap {
        &self.url_params
    }

    /// Number of named actions (the `default` and `unhandled` slots are
    /// not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no named actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a named action exists.
    #[must_use]
    pub fn has_action(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered action names, sorted for stable output.
    #[must_use]
    pub fn action_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Whether the `default` slot is implemented.
    #[must_use]
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Whether the `unhandled` slot is implemented.
    #[must_use]
    pub fn has_unhandled(&self) -> bool {
        self.unhandled.is_some()
    }

    pub(crate) fn entry(&self, name: &str) -> Option<&ActionEntry<C>> {
        self.entries.get(name)
    }

    pub(crate) fn default_handler(&self) -> Option<&HandlerFn<C>> {
        self.default.as_ref()
    }

    pub(crate) fn unhandled_handler(&self) -> Option<&HandlerFn<C>> {
        self.unhandled.as_ref()
    }
}

impl<C> fmt::Debug for ActionTable<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionTable")
            .field("allowed", &self.allowed)
            .field("url_params", &self.url_params)
            .field("actions", &self.action_names())
            .field("default", &self.default.is_some())
            .field("unhandled", &self.unhandled.is_some())
            .finish()
    }
}

/// A type that exposes actions to the dispatcher.
///
/// `actions` declares the controller's dispatch surface once; the
/// dispatcher builds and validates the table at construction time and
/// reuses it for every request. `create` produces the per-request
/// controller value that handlers receive as `&mut self`.
///
/// # Example
///
/// ```
/// use actioneer::controller::{ActionConfigError, ActionTable, Controller};
/// use actioneer::dispatcher::ActionResponse;
/// use actioneer::request::ActionRequest;
/// use serde_json::json;
///
/// struct Counter {
///     hits: u32,
/// }
///
/// impl Counter {
///     fn bump(&mut self, _req: &ActionRequest) -> ActionResponse {
///         self.hits += 1;
///         ActionResponse::ok(json!({ "hits": self.hits }))
///     }
/// }
///
/// impl Controller for Counter {
///     fn actions() -> Result<ActionTable<Self>, ActionConfigError> {
///         ActionTable::builder()
///             .handle("bump", Counter::bump)
///             .default_action(|_c: &mut Counter, _req| ActionResponse::ok(json!("idle")))
///             .build()
///     }
///
///     fn create(_req: &ActionRequest) -> Self {
///         Counter { hits: 0 }
///     }
/// }
///
/// # fn main() -> Result<(), ActionConfigError> {
/// let table = Counter::actions()?;
/// assert!(table.has_action("bump"));
/// assert!(table.has_default());
/// # Ok(())
/// # }
/// ```
pub trait Controller: Sized {
    /// Declare the controller's action table.
    fn actions() -> Result<ActionTable<Self>, ActionConfigError>;

    /// Construct the per-request controller value.
    fn create(req: &ActionRequest) -> Self;
}
