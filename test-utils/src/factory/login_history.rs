//! Login history factory for creating test login events.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Records a login event for `user_id` at `timestamp`.
///
/// # Returns
/// - `Ok(entity::login_history::Model)` - Created login history entry
/// - `Err(DbErr)` - Database error during insert
pub async fn create_login(
    db: &DatabaseConnection,
    user_id: i32,
    timestamp: DateTime<Utc>,
) -> Result<entity::login_history::Model, DbErr> {
    entity::login_history::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        timestamp: ActiveValue::Set(timestamp),
        ..Default::default()
    }
    .insert(db)
    .await
}
