//! # Action Module
//!
//! Action-name resolution: the rules that turn a raw `action` request
//! parameter into the name looked up in a controller's action table.
//!
//! ## Overview
//!
//! Resolution happens in two stages:
//!
//! 1. **Collapse** — a missing or empty parameter, a name with a `_`
//!    prefix, or a name that spells one of the controller's allowed HTTP
//!    methods all resolve straight to [`DEFAULT_ACTION`]. These checks
//!    run on the raw value so nothing can be sanitized *into* a
//!    collapse.
//! 2. **Sanitize** — in [`SanitizeMode::Strict`] (the default) the
//!    survivor is slugified through the [`slug`](crate::slug) chain and
//!    must match the anchored canonical pattern, or it also resolves to
//!    the default. [`SanitizeMode::Basic`] skips this stage and uses the
//!    raw name verbatim.
//!
//! Resolution never fails: every input produces a usable action name,
//! and the dispatcher decides what a miss means.

mod core;
#[cfg(test)]
mod tests;

pub use core::{
    is_valid_action_name, SanitizeMode, ACTION_PARAM, ACTION_SPACER, DEFAULT_ACTION,
};

pub(crate) use core::resolve_action_name;
