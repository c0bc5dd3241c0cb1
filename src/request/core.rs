use std::collections::HashMap;

use http::Method;
use smallvec::SmallVec;
use tracing::debug;

use crate::action::{resolve_action_name, ACTION_PARAM};
use crate::controller::ActionTable;
use crate::runtime_config::RuntimeConfig;
use crate::slug::Locale;

/// Most dispatch paths carry at most a handful of positional arguments,
/// so they stay inline.
pub const MAX_INLINE_ARGS: usize = 4;

/// Positional arguments captured by the host's URL pattern, in order.
pub type ArgVec = SmallVec<[String; MAX_INLINE_ARGS]>;

/// Request parameters keyed by name. Later inserts win on collision.
pub type ParamMap = HashMap<String, String>;

/// Header whose presence marks a request as AJAX.
///
/// Hosts pass the header *value* to [`RequestParts::ajax_header`]; any
/// non-empty value counts, not just the conventional `XMLHttpRequest`.
pub const AJAX_HEADER: &str = "x-requested-with";

/// Parse the query string of a request path into a parameter map.
///
/// Everything after the first `?` is decoded as
/// `application/x-www-form-urlencoded`; a path without a query string
/// yields an empty map. Repeated keys keep the last value.
#[must_use]
pub fn parse_query_params(path: &str) -> ParamMap {
    match path.find('?') {
        Some(idx) => decode_pairs(&path[idx + 1..]),
        None => ParamMap::new(),
    }
}

/// Parse an `application/x-www-form-urlencoded` request body.
#[must_use]
pub fn parse_form_body(body: &str) -> ParamMap {
    decode_pairs(body)
}

fn decode_pairs(raw: &str) -> ParamMap {
    url::form_urlencoded::parse(raw.as_bytes())
        .into_owned()
        .collect()
}

/// Raw per-request input assembled by the host before dispatch.
///
/// This is the only mutable stage of a request's life: the host collects
/// the method, merged parameters, AJAX marker and positional arguments
/// here, then hands the whole thing to the dispatcher, which freezes it
/// into an [`ActionRequest`].
///
/// Parameter-merging convention: apply query-string parameters first and
/// the form body second, so on a name collision the body value wins.
///
/// # Example
///
/// ```
/// use actioneer::request::RequestParts;
/// use http::Method;
///
/// let parts = RequestParts::new(Method::POST)
///     .query_string("action=archive&page=2")
///     .form_body("page=3")
///     .ajax();
/// assert_eq!(parts.params.get("page").map(String::as_str), Some("3"));
/// ```
#[derive(Debug, Clone)]
pub struct RequestParts {
    /// HTTP method of the request.
    pub method: Method,
    /// Merged request parameters (query string and form body).
    pub params: ParamMap,
    /// Value of the `X-Requested-With` header, if the request carried one.
    pub ajax_header: Option<String>,
    /// Positional arguments captured from the URL pattern.
    pub args: ArgVec,
    /// Per-request transliteration chain override.
    pub locales: Option<Vec<Locale>>,
}

impl RequestParts {
    /// Start assembling a request with the given method.
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self {
            method,
            params: ParamMap::new(),
            ajax_header: None,
            args: ArgVec::new(),
            locales: None,
        }
    }

    /// Set a single parameter, overwriting any previous value.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Merge a raw query string (with or without the leading `?`).
    #[must_use]
    pub fn query_string(mut self, query: &str) -> Self {
        self.params
            .extend(decode_pairs(query.trim_start_matches('?')));
        self
    }

    /// Merge an `application/x-www-form-urlencoded` body.
    #[must_use]
    pub fn form_body(mut self, body: &str) -> Self {
        self.params.extend(parse_form_body(body));
        self
    }

    /// Record the value of the `X-Requested-With` header.
    #[must_use]
    pub fn ajax_header(mut self, value: impl Into<String>) -> Self {
        self.ajax_header = Some(value.into());
        self
    }

    /// Mark the request as AJAX with the conventional header value.
    #[must_use]
    pub fn ajax(self) -> Self {
        self.ajax_header("XMLHttpRequest")
    }

    /// Append a positional argument.
    #[must_use]
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Override the transliteration chain for this request only.
    #[must_use]
    pub fn locales(mut self, locales: &[Locale]) -> Self {
        self.locales = Some(locales.to_vec());
        self
    }
}

/// Immutable request context handed to action handlers.
///
/// Built by the dispatcher from [`RequestParts`] plus the controller's
/// action table: the action name is resolved, URL-parameter defaults are
/// filled in, and the AJAX marker is reduced to a flag. Handlers cannot
/// mutate any of it.
#[derive(Debug, Clone)]
pub struct ActionRequest {
    method: Method,
    params: ParamMap,
    url_params: ParamMap,
    args: ArgVec,
    is_ajax: bool,
    action: String,
    raw_action: Option<String>,
}

impl ActionRequest {
    /// Freeze raw request parts into a resolved context.
    pub(crate) fn resolve<C>(
        parts: RequestParts,
        table: &ActionTable<C>,
        config: &RuntimeConfig,
    ) -> Self {
        let RequestParts {
            method,
            params,
            ajax_header,
            args,
            locales,
        } = parts;
        let explicit = locales.as_deref().unwrap_or(&config.locales);
        let raw_action = params.get(ACTION_PARAM).cloned();
        let action = resolve_action_name(
            raw_action.as_deref(),
            table.allowed(),
            config.sanitize,
            explicit,
        );
        let mut url_params = table.url_param_defaults().clone();
        for (name, value) in url_params.iter_mut() {
            if let Some(supplied) = params.get(name) {
                value.clone_from(supplied);
            }
        }
        let is_ajax = ajax_header.as_deref().map_or(false, |v| !v.is_empty());
        debug!(
            action = action.as_str(),
            method = %method,
            is_ajax,
            "Resolved request context"
        );
        Self {
            method,
            params,
            url_params,
            args,
            is_ajax,
            action,
            raw_action,
        }
    }

    /// HTTP method of the request.
    #[must_use]
    #[inline]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// All merged request parameters.
    #[must_use]
    #[inline]
    pub fn params(&self) -> &ParamMap {
        &self.params
    }

    /// A single request parameter, if present.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// URL parameters: the table's declared defaults overlaid with
    /// whatever the request supplied. Only declared names appear here.
    #[must_use]
    #[inline]
    pub fn url_params(&self) -> &ParamMap {
        &self.url_params
    }

    /// A single URL parameter, if declared by the table.
    #[must_use]
    pub fn url_param(&self, name: &str) -> Option<&str> {
        self.url_params.get(name).map(String::as_str)
    }

    /// Positional arguments captured from the URL pattern.
    #[must_use]
    #[inline]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// A single positional argument by index.
    #[must_use]
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// Whether the request carried a non-empty `X-Requested-With` header.
    #[must_use]
    #[inline]
    pub fn is_ajax(&self) -> bool {
        self.is_ajax
    }

    /// The resolved action name used for table lookup.
    #[must_use]
    #[inline]
    pub fn action(&self) -> &str {
        &self.action
    }

    /// The raw `action` parameter as the request sent it, if any.
    #[must_use]
    pub fn raw_action(&self) -> Option<&str> {
        self.raw_action.as_deref()
    }
}
