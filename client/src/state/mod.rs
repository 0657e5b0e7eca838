//! Shared reactive state provided through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! Each module is a plain struct wrapped in an `RwSignal` by `app::App` and
//! read with `expect_context` by pages and components. Keeping the structs
//! plain keeps them testable without a reactive runtime.

pub mod auth;
pub mod feed;
pub mod ui;
