//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and shared post widgets while reading and
//! writing shared state from Leptos context providers.

pub mod comment_list;
pub mod flash;
pub mod navbar;
pub mod post_card;
