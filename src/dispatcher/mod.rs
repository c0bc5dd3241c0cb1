//! # Dispatcher Module
//!
//! The dispatcher resolves an `action` request parameter against a
//! controller's table and invokes the selected handler, applying the
//! table's admission filters along the way.
//!
//! ## Overview
//!
//! [`ActionDispatcher`] is the runtime half of the crate. It:
//! - builds and validates the controller's action table once, at
//!   construction
//! - freezes each request into an immutable [`ActionRequest`](crate::request::ActionRequest)
//! - enforces verb admission, returning `405` material (the allowed
//!   set) when the method is outside the controller's list
//! - applies per-action AJAX and `accepts` filters
//! - falls back to the `unhandled`/`default` slots on any miss,
//!   logging the reason at warn level while staying silent toward the
//!   client
//!
//! ## Request Flow
//!
//! ```text
//! RequestParts
//!     └─ resolve ──► ActionRequest (action name, url params, ajax flag)
//!         └─ verb admission ──► Err(MethodNotAllowed) on miss
//!             └─ table lookup ─┬─ hit ──► ajax / accepts filters ──► handler
//!                              └─ miss ──► unhandled ──► default ──► Err(NotImplemented)
//! ```
//!
//! ## Error Handling
//!
//! Only two outcomes surface as errors, both in [`DispatchError`]: a
//! disallowed verb and a missing `default` slot. Unknown actions and
//! filter mismatches are not client-visible errors; they resolve
//! through the fallback chain and the reason lands in the logs.
//!
//! ## Example
//!
//! ```rust,ignore
//! use actioneer::dispatcher::ActionDispatcher;
//! use actioneer::request::RequestParts;
//! use http::Method;
//!
//! let dispatcher = ActionDispatcher::<Blog>::new()?;
//! let response = dispatcher.dispatch(
//!     RequestParts::new(Method::GET).query_string("action=archive&year=2024"),
//! )?;
//! assert_eq!(response.status, 200);
//! ```

mod core;
mod error;

pub use core::{
    ActionDispatcher, ActionResponse, FallbackReason, HeaderVec, MAX_INLINE_HEADERS,
};
pub use error::DispatchError;
