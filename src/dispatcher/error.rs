use std::error::Error;
use std::fmt;

use crate::controller::MethodSet;

/// Terminal dispatch failures.
///
/// Everything else about a bad request resolves internally (fallback to
/// the `default` slot); only these two outcomes surface to the host,
/// which owns the mapping onto its HTTP error pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The request method is outside the controller's allowed set. The
    /// carried set is what belongs in the response's `Allow` header.
    MethodNotAllowed {
        /// Methods the controller admits.
        allow: MethodSet,
    },
    /// The request resolved to the `default` slot but the controller
    /// does not implement one.
    NotImplemented {
        /// Type name of the controller.
        controller: String,
    },
}

impl DispatchError {
    /// Conventional HTTP status for this failure.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            DispatchError::MethodNotAllowed { .. } => 405,
            DispatchError::NotImplemented { .. } => 500,
        }
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::MethodNotAllowed { allow } => {
                write!(f, "method not allowed (allow: {allow})")
            }
            DispatchError::NotImplemented { controller } => {
                write!(f, "controller `{controller}` does not implement a default action")
            }
        }
    }
}

impl Error for DispatchError {}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;

    #[test]
    fn test_statuses_match_http_conventions() {
        let err = DispatchError::MethodNotAllowed {
            allow: MethodSet::default_allowed(),
        };
        assert_eq!(err.status(), 405);
        let err = DispatchError::NotImplemented {
            controller: "Blog".to_string(),
        };
        assert_eq!(err.status(), 500);
    }

    #[test]
    fn test_method_not_allowed_displays_allow_set() {
        let err = DispatchError::MethodNotAllowed {
            allow: MethodSet::of(&[Method::GET, Method::POST]),
        };
        assert_eq!(err.to_string(), "method not allowed (allow: GET, POST)");
    }
}
