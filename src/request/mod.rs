//! # Request Module
//!
//! Request-side types for action dispatch: the raw parts a host collects
//! from its HTTP layer, the parsing helpers for query strings and form
//! bodies, and the frozen [`ActionRequest`] context that handlers
//! receive.
//!
//! ## Overview
//!
//! The module draws a hard line between the mutable and immutable halves
//! of a request's life:
//!
//! - [`RequestParts`] is the assembly stage. The host owns it, merges
//!   parameters into it (query first, body second, so the body wins
//!   collisions) and marks AJAX by recording the `X-Requested-With`
//!   header value.
//! - [`ActionRequest`] is the dispatch stage. The dispatcher resolves
//!   the action name, overlays URL-parameter defaults and collapses the
//!   AJAX header to a flag; handlers get read-only accessors and nothing
//!   else.
//!
//! Parsing helpers decode `application/x-www-form-urlencoded` data with
//! the `url` crate, so percent-escapes and `+`-as-space behave the way
//! browsers send them.

mod core;

pub use core::{
    parse_form_body, parse_query_params, ActionRequest, ArgVec, ParamMap, RequestParts,
    AJAX_HEADER, MAX_INLINE_ARGS,
};
