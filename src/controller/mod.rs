//! # Controller Module
//!
//! The declaration side of action dispatch: controllers describe their
//! dispatch surface as an explicit, validated table of action
//! descriptors.
//!
//! ## Overview
//!
//! A controller implements [`Controller`], whose `actions` method
//! declares everything the dispatcher needs up front:
//!
//! - the **allowed method set** — verbs admitted at all (`GET` and
//!   `POST` unless overridden)
//! - **URL parameters** with default values, overlaid per request
//! - named **actions**, each an [`Action`] descriptor carrying its
//!   handler plus optional `accepts` and AJAX filters
//! - the **`default`** slot, reached by name or by fallback
//! - the **`unhandled`** slot, intercepting fallbacks before `default`
//!
//! Nothing is discovered by reflection or naming convention: if an
//! action is not in the table, it does not exist. The builder rejects
//! reserved, malformed and duplicate names when the table is built, so
//! registration mistakes surface at startup rather than as silent
//! fallbacks in production.
//!
//! ## Example
//!
//! ```rust,ignore
//! impl Controller for Blog {
//!     fn actions() -> Result<ActionTable<Self>, ActionConfigError> {
//!         ActionTable::builder()
//!             .url_param("page", "1")
//!             .handle("archive", Blog::archive)
//!             .action(Action::new("preview", Blog::preview).ajax(AjaxPolicy::Required))
//!             .default_action(Blog::index)
//!             .build()
//!     }
//!
//!     fn create(_req: &ActionRequest) -> Self {
//!         Blog::default()
//!     }
//! }
//! ```

mod builder;
mod core;
mod error;

pub use builder::ActionTableBuilder;
pub use core::{
    Action, ActionTable, AjaxPolicy, Controller, HandlerFn, MethodSet, MAX_INLINE_METHODS,
};
pub use error::ActionConfigError;
