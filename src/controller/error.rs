use std::error::Error;
use std::fmt;

/// Errors detected while building an action table.
///
/// All of these are programming mistakes in the controller's
/// registration code, so they surface at construction time rather than
/// during dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionConfigError {
    /// `allow_methods` was called with an empty list. A controller that
    /// admits no verb can never dispatch anything.
    EmptyMethodSet,
    /// The action name collides with the default slot or with one of the
    /// allowed method names, both of which collapse before lookup.
    ReservedActionName {
        /// The rejected name.
        name: String,
    },
    /// The action name does not match the canonical pattern
    /// (`^[a-z][0-9A-Za-z_-]*$`).
    InvalidActionName {
        /// The rejected name.
        name: String,
    },
    /// Two actions were registered under the same name.
    DuplicateAction {
        /// The repeated name.
        name: String,
    },
}

impl fmt::Display for ActionConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionConfigError::EmptyMethodSet => {
                write!(f, "action table error: allowed method set cannot be empty")
            }
            ActionConfigError::ReservedActionName { name } => {
                write!(
                    f,
                    "action table error: `{name}` is reserved; the default slot and \
                     allowed method names collapse before lookup, so the action could \
                     never be dispatched"
                )
            }
            ActionConfigError::InvalidActionName { name } => {
                write!(
                    f,
                    "action table error: `{name}` is not a valid action name \
                     (expected ^[a-z][0-9A-Za-z_-]*$)"
                )
            }
            ActionConfigError::DuplicateAction { name } => {
                write!(f, "action table error: duplicate action `{name}`")
            }
        }
    }
}

impl Error for ActionConfigError {}
