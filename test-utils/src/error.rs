use thiserror::Error;

/// Errors raised while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the database, creating tables or initializing the
    /// session store failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// The operation needs an on-disk database but the context lives in memory.
    #[error("test context has no database file")]
    InMemory,
}
