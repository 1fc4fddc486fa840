//! Username/password authentication.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{login_history::LoginHistoryRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::User,
    util::password::verify_password,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies credentials and records the login.
    ///
    /// Unknown usernames, wrong passwords and inactive accounts all fail with the
    /// same error so callers cannot tell which usernames exist.
    ///
    /// # Arguments
    /// - `username` - Submitted username, if any
    /// - `password` - Submitted password, if any
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials valid; a login history entry was written
    /// - `Err(AuthError::MissingCredentials)` - Username or password missing or empty
    /// - `Err(AuthError::InvalidCredentials)` - Credentials rejected
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn login(
        &self,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<User, AppError> {
        let (Some(username), Some(password)) = (username, password) else {
            return Err(AuthError::MissingCredentials.into());
        };
        if username.trim().is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials.into());
        }

        let Some(entity) = UserRepository::new(self.db)
            .find_by_username(username.trim())
            .await?
        else {
            tracing::warn!("Rejected login for unknown user '{}'", username.trim());
            return Err(AuthError::InvalidCredentials.into());
        };

        let user = User::from_entity(entity)?;

        if !user.is_active || !verify_password(&password, &user.password_hash)? {
            tracing::warn!("Rejected login for user {} ({})", user.username, user.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        LoginHistoryRepository::new(self.db)
            .create(user.id, Utc::now())
            .await?;

        tracing::info!("User {} ({}) logged in", user.username, user.id);

        Ok(user)
    }
}
