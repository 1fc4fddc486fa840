use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection, DbErr,
};
use std::{path::PathBuf, sync::Arc};
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{error::TestError, factory::helpers::next_id};

/// Pool size for on-disk databases, enough for several concurrent transactions.
const ON_DISK_CONNECTIONS: u32 = 8;

/// Test context containing database connection and session.
///
/// Provides a SQLite database connection and session for isolated testing. The
/// database lives in memory unless the context was created with `on_disk()`. Both
/// are created lazily on first access and live as long as the context.
pub struct TestContext {
    /// Connection to the SQLite instance, set on first `database()` call.
    pub db: Option<DatabaseConnection>,

    /// Session backed by the same database, set on first `session()` call.
    pub session: Option<Session>,

    /// Backing file of an on-disk database, removed on drop.
    file: Option<PathBuf>,
}

impl TestContext {
    /// Creates a new empty test context backed by an in-memory database.
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
            file: None,
        }
    }

    /// Creates a new empty test context backed by a fresh file in the temp directory.
    ///
    /// An in-memory SQLite database is limited to one pooled connection, so tests
    /// that need transactions to really run side by side use this instead.
    pub fn on_disk() -> Self {
        let file = std::env::temp_dir().join(format!(
            "rentaldesk-test-{}-{}.sqlite3",
            std::process::id(),
            next_id()
        ));

        Self {
            db: None,
            session: None,
            file: Some(file),
        }
    }

    /// Opens a separate single-connection pool on the same on-disk database.
    ///
    /// # Arguments
    /// - `busy_timeout` - How long statements on this connection wait for a lock
    ///
    /// # Returns
    /// - `Ok(DatabaseConnection)` - The new connection
    /// - `Err(TestError::InMemory)` - The context is not on disk
    /// - `Err(TestError::Database)` - Failed to connect
    pub async fn open_connection(
        &self,
        busy_timeout: std::time::Duration,
    ) -> Result<DatabaseConnection, TestError> {
        let file = self.file.as_ref().ok_or(TestError::InMemory)?;

        let mut options = ConnectOptions::new(file_url(file));
        options
            .max_connections(1)
            .map_sqlx_sqlite_opts(move |opts| opts.busy_timeout(busy_timeout));

        Ok(Database::connect(options).await?)
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = match &self.file {
                    Some(file) => {
                        let mut options = ConnectOptions::new(file_url(file));
                        options.max_connections(ON_DISK_CONNECTIONS);
                        Database::connect(options).await?
                    }
                    None => Database::connect("sqlite::memory:").await?,
                };

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Typically called by `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `stmts` - CREATE TABLE statements to execute in order
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Gets or creates the test session instance.
    ///
    /// On first call the database is initialized if needed, the session store table is
    /// migrated and a fresh session is created. Subsequent calls return the same session.
    ///
    /// # Returns
    /// - `Ok(&Session)` - Reference to the session instance
    /// - `Err(TestError::Database)` - Failed to initialize database or session table
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        match self.session {
            Some(ref session) => Ok(session),
            None => {
                let db = self.database().await?;

                let pool = db.get_sqlite_connection_pool();
                let session_store = SqliteStore::new(pool.clone());

                session_store
                    .migrate()
                    .await
                    .map_err(|e| DbErr::Custom(e.to_string()))?;

                let session = Session::new(
                    None,
                    Arc::new(session_store),
                    Some(Expiry::OnInactivity(Duration::days(7))),
                );

                let session_ref = self.session.insert(session);

                Ok(&*session_ref)
            }
        }
    }

    /// Gets or creates both database and session references.
    ///
    /// Avoids borrow checker issues when calling `database()` and `session()` separately.
    ///
    /// # Returns
    /// - `Ok((&DatabaseConnection, &Session))` - References to both database and session
    /// - `Err(TestError::Database)` - Failed to initialize database or session
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.database().await?;
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(DbErr::Custom("test context failed to initialize".to_string()).into()),
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let Some(file) = &self.file else {
            return;
        };

        for suffix in ["", "-journal", "-wal", "-shm"] {
            let mut path = file.clone().into_os_string();
            path.push(suffix);
            let _ = std::fs::remove_file(path);
        }
    }
}

fn file_url(file: &std::path::Path) -> String {
    format!("sqlite://{}?mode=rwc", file.display())
}
