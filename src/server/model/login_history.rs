use chrono::{DateTime, Utc};

use crate::model::login_history::LoginHistoryDto;

/// A successful login by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginEntry {
    pub id: i32,
    pub user_id: i32,
    pub username: String,
    pub timestamp: DateTime<Utc>,
}

impl LoginEntry {
    /// Converts a login history row joined with its user.
    ///
    /// The username is empty if the user row was not loaded.
    pub fn from_entity(
        entity: entity::login_history::Model,
        user: Option<entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            username: user.map(|u| u.username).unwrap_or_default(),
            timestamp: entity.timestamp,
        }
    }

    pub fn into_dto(self) -> LoginHistoryDto {
        LoginHistoryDto {
            id: self.id,
            user: self.user_id,
            username: self.username,
            timestamp: self.timestamp,
        }
    }
}
