use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::request::{ActionRequest, ParamMap};

/// A type that can be extracted from a resolved request.
///
/// Blanket-implemented for every `DeserializeOwned` type by
/// deserializing the merged request parameters, so most consumers only
/// derive `Deserialize`:
///
/// ```
/// use actioneer::typed::FromRequest;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Paging {
///     page: u32,
/// }
/// # fn take<T: FromRequest>() {}
/// # take::<Paging>();
/// ```
pub trait FromRequest: Sized {
    /// Extract `Self` from the request.
    ///
    /// # Errors
    ///
    /// Returns an error describing the missing or malformed parameter.
    fn from_request(req: &ActionRequest) -> Result<Self>;
}

impl<T: DeserializeOwned> FromRequest for T {
    fn from_request(req: &ActionRequest) -> Result<T> {
        req.params_as()
    }
}

impl ActionRequest {
    /// Parse a single request parameter into `T` via [`FromStr`].
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is absent or fails to parse.
    pub fn param_as<T>(&self, name: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        parse_value(self.param(name), name, "request parameter")
    }

    /// Parse a single URL parameter into `T` via [`FromStr`].
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter was never declared or fails to
    /// parse.
    pub fn url_param_as<T>(&self, name: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        parse_value(self.url_param(name), name, "url parameter")
    }

    /// Deserialize the merged request parameters into `T`.
    ///
    /// Values are all strings on the wire; boolean-looking and
    /// numeric-looking values are coerced to JSON booleans and numbers
    /// before deserialization, so `u32` and `bool` fields work as
    /// expected. A field that must keep a numeric-looking string
    /// verbatim (an identifier with leading zeros, say) should be read
    /// with [`param`](ActionRequest::param) instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters do not fit `T`.
    pub fn params_as<T: DeserializeOwned>(&self) -> Result<T> {
        typed_from_map(self.params()).context("failed to deserialize request parameters")
    }

    /// Deserialize the resolved URL parameters into `T`. Same coercion
    /// rules as [`params_as`](ActionRequest::params_as).
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters do not fit `T`.
    pub fn url_params_as<T: DeserializeOwned>(&self) -> Result<T> {
        typed_from_map(self.url_params()).context("failed to deserialize url parameters")
    }
}

fn parse_value<T>(raw: Option<&str>, name: &str, kind: &str) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = raw.ok_or_else(|| anyhow!("missing {kind} `{name}`"))?;
    raw.parse::<T>()
        .map_err(|e| anyhow!("invalid value `{raw}` for {kind} `{name}`: {e}"))
}

fn typed_from_map<T: DeserializeOwned>(params: &ParamMap) -> Result<T> {
    let mut object = Map::with_capacity(params.len());
    for (name, value) in params {
        object.insert(name.clone(), coerce_primitive(value));
    }
    serde_json::from_value(Value::Object(object)).map_err(Into::into)
}

/// Best-effort JSON typing for a wire value: booleans and numbers are
/// recognized, everything else stays a string.
fn coerce_primitive(raw: &str) -> Value {
    match raw {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    if let Ok(int) = raw.parse::<i64>() {
        return Value::Number(int.into());
    }
    if let Ok(float) = raw.parse::<f64>() {
        if let Some(number) = serde_json::Number::from_f64(float) {
            return Value::Number(number);
        }
    }
    Value::String(raw.to_string())
}
