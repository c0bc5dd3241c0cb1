//! # Typed Module
//!
//! Type-safe parameter extraction on top of [`ActionRequest`](crate::request::ActionRequest).
//! Handlers keep working with string parameters if they want to; this
//! module adds the conversions for handlers that would rather not.
//!
//! ## Overview
//!
//! Two levels of extraction are available:
//!
//! - **Single values** — [`ActionRequest::param_as`] and
//!   [`ActionRequest::url_param_as`] parse one parameter through
//!   `FromStr`, with an error naming the parameter when it is missing
//!   or malformed.
//! - **Whole structs** — [`ActionRequest::params_as`] and
//!   [`ActionRequest::url_params_as`] deserialize the parameter maps
//!   into any `Deserialize` type, coercing boolean-looking and
//!   numeric-looking wire values so plain `u32`/`bool` fields work.
//!
//! All of it returns `anyhow::Result`, leaving the handler free to map
//! extraction failures onto whatever response it considers appropriate.
//!
//! ## Usage
//!
//! ```rust,ignore
//! #[derive(Deserialize)]
//! struct ArchiveQuery {
//!     year: u16,
//!     page: u32,
//! }
//!
//! fn archive(&mut self, req: &ActionRequest) -> ActionResponse {
//!     match req.params_as::<ArchiveQuery>() {
//!         Ok(query) => self.render_archive(query),
//!         Err(e) => ActionResponse::error(400, &e.to_string()),
//!     }
//! }
//! ```

mod core;

pub use core::FromRequest;
