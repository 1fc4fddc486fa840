use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::{
    model::user::Role,
    server::model::user::{CreateUserParams, UpdateUserParams},
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user account.
    ///
    /// # Arguments
    /// - `params` - Account fields; the plaintext password is ignored
    /// - `password_hash` - Argon2 hash of the password
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violations on username or email
    pub async fn create(
        &self,
        params: &CreateUserParams,
        password_hash: String,
    ) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(params.username.clone()),
            email: ActiveValue::Set(params.email.clone()),
            password_hash: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Gets users keyed by ID.
    ///
    /// # Arguments
    /// - `ids` - User IDs to load; unknown IDs are skipped
    pub async fn get_by_ids(
        &self,
        ids: &[i32],
    ) -> Result<HashMap<i32, entity::user::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(|u| (u.id, u)).collect())
    }

    /// Finds a user by exact username.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that username
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Gets all users with pagination, ordered alphabetically by username.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users to return per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and total user count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::user::Model>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Username)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let users = paginator.fetch_page(page).await?;

        Ok((users, total))
    }

    /// Updates the provided fields of a user.
    ///
    /// # Arguments
    /// - `params` - Fields to change; `None` leaves the column untouched
    /// - `password_hash` - New password hash, if the password changes
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated user
    /// - `Ok(None)` - User does not exist
    /// - `Err(DbErr)` - Database error, including unique violations
    pub async fn update(
        &self,
        params: &UpdateUserParams,
        password_hash: Option<String>,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = user.into();

        if let Some(username) = &params.username {
            active.username = ActiveValue::Set(username.clone());
        }
        if let Some(email) = &params.email {
            active.email = ActiveValue::Set(email.clone());
        }
        if let Some(role) = params.role {
            active.role = ActiveValue::Set(role.as_str().to_string());
        }
        if let Some(is_active) = params.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }
        if let Some(hash) = password_hash {
            active.password_hash = ActiveValue::Set(hash);
        }

        active.update(self.db).await.map(Some)
    }

    /// Deletes a user. Rentals and login history cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - User did not exist
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks if any admin users exist in the database.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin user exists
    /// - `Ok(false)` - No admin users exist (first-time setup scenario)
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }
}
