//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Shared resources handed to every handler through Axum's state extraction.
///
/// `DatabaseConnection` wraps a pool, so clones share the same connections.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for the SQLite store.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
