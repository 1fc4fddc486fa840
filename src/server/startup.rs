use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::AppError,
    service::{seed::SeedService, user::UserService},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by a table in the application database.
///
/// Sessions expire after 7 days of inactivity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(config.session_secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session_layer)
}

/// Creates the configured admin account if the database has no admin yet.
pub async fn ensure_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let user_service = UserService::new(db);

    let Some(credentials) = &config.admin else {
        if !user_service.admin_exists().await? {
            tracing::warn!(
                "No admin account exists; set ADMIN_USERNAME and ADMIN_PASSWORD to create one"
            );
        }
        return Ok(());
    };

    match user_service
        .ensure_admin(
            &credentials.username,
            &credentials.email,
            &credentials.password,
        )
        .await?
    {
        Some(admin) => tracing::info!("Created admin account '{}'", admin.username),
        None => tracing::debug!("Admin account already exists"),
    }

    Ok(())
}

/// Inserts sample data when `SEED_SAMPLE_DATA` is enabled.
pub async fn seed_sample_data(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    if !config.seed_sample_data {
        return Ok(());
    }

    if SeedService::new(db).seed_sample_data().await? {
        tracing::info!("Seeded sample locations, cars and rentals");
    }

    Ok(())
}
