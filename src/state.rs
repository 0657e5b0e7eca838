//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The blog has no live in-memory world to coordinate; every request reads
//! and writes Postgres directly, so the state is just the shared pool.

use sqlx::PgPool;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — `PgPool` is internally reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
