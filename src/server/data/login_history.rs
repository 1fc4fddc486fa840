use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

/// A login history row joined with its user row.
pub type LoginWithUser = (entity::login_history::Model, Option<entity::user::Model>);

pub struct LoginHistoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LoginHistoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a successful login for `user_id` at `timestamp`.
    pub async fn create(
        &self,
        user_id: i32,
        timestamp: DateTime<Utc>,
    ) -> Result<entity::login_history::Model, DbErr> {
        entity::login_history::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            timestamp: ActiveValue::Set(timestamp),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets login history entries, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Restrict to one user's logins, or `None` for everyone
    ///
    /// # Returns
    /// - `Ok(Vec<(entry, user)>)` - Entries joined with their users
    /// - `Err(DbErr)` - Database error
    pub async fn get_all(&self, user_id: Option<i32>) -> Result<Vec<LoginWithUser>, DbErr> {
        let mut query = entity::prelude::LoginHistory::find();

        if let Some(user_id) = user_id {
            query = query.filter(entity::login_history::Column::UserId.eq(user_id));
        }

        query
            .order_by_desc(entity::login_history::Column::Timestamp)
            .order_by_desc(entity::login_history::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await
    }
}
