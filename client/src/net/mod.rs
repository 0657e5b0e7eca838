//! Networking modules for the JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls against the server and `types` defines the
//! shared wire schema.

pub mod api;
pub mod types;
