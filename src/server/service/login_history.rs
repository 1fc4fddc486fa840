use sea_orm::DatabaseConnection;

use crate::server::{
    data::login_history::LoginHistoryRepository, error::AppError,
    model::login_history::LoginEntry,
};

pub struct LoginHistoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LoginHistoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets login history, newest first, for one user or for everyone.
    pub async fn get_all(&self, user_id: Option<i32>) -> Result<Vec<LoginEntry>, AppError> {
        let entries = LoginHistoryRepository::new(self.db).get_all(user_id).await?;

        Ok(entries
            .into_iter()
            .map(|(entry, user)| LoginEntry::from_entity(entry, user))
            .collect())
    }
}
