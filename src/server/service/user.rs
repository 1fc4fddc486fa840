//! User service for business logic.
//!
//! This module provides the `UserService` for managing user accounts. It validates
//! input, hashes passwords and maps unique constraint violations to conflicts while
//! working with domain models rather than DTOs.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        error::AppError,
        model::user::{CreateUserParams, PaginatedUsers, UpdateUserParams, User},
        service::{check_page, require_non_empty, total_pages},
        util::password::hash_password,
    },
};

const DUPLICATE_USER: &str = "A user with that username or email already exists";

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Retrieves all users with pagination.
    ///
    /// Returns a paginated collection of users ordered alphabetically by username.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users per page
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - Users for the page plus pagination metadata
    /// - `Err(AppError::BadRequest)` - Page offset out of range
    /// - `Err(AppError)` - Database error or unknown stored role
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedUsers, AppError> {
        let per_page = check_page(page, per_page)?;
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        let users = users
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Creates a user account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Username, email or password is empty
    /// - `Err(AppError::Conflict)` - Username or email already taken
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        require_non_empty(&params.username, "Username")?;
        require_non_empty(&params.email, "Email")?;
        require_non_empty(&params.password, "Password")?;

        let password_hash = hash_password(&params.password)?;

        let user = UserRepository::new(self.db)
            .create(&params, password_hash)
            .await
            .map_err(|e| AppError::from_unique_violation(e, DUPLICATE_USER))?;

        User::from_entity(user)
    }

    /// Updates a user account.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::BadRequest)` - A provided field is empty
    /// - `Err(AppError::NotFound)` - User does not exist
    /// - `Err(AppError::Conflict)` - New username or email already taken
    pub async fn update(&self, params: UpdateUserParams) -> Result<User, AppError> {
        if let Some(username) = &params.username {
            require_non_empty(username, "Username")?;
        }
        if let Some(email) = &params.email {
            require_non_empty(email, "Email")?;
        }
        let password_hash = match &params.password {
            Some(password) => {
                require_non_empty(password, "Password")?;
                Some(hash_password(password)?)
            }
            None => None,
        };

        let user = UserRepository::new(self.db)
            .update(&params, password_hash)
            .await
            .map_err(|e| AppError::from_unique_violation(e, DUPLICATE_USER))?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        User::from_entity(user)
    }

    /// Deletes a user together with their rentals and login history.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }

    pub async fn admin_exists(&self) -> Result<bool, AppError> {
        Ok(UserRepository::new(self.db).admin_exists().await?)
    }

    /// Creates the bootstrap administrator if no admin account exists yet.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - A new admin was created
    /// - `Ok(None)` - An admin already exists; nothing changed
    /// - `Err(AppError)` - Validation, conflict or database error
    pub async fn ensure_admin(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, AppError> {
        if UserRepository::new(self.db).admin_exists().await? {
            return Ok(None);
        }

        let admin = self
            .create(CreateUserParams {
                username: username.to_string(),
                email: email.to_string(),
                password: password.to_string(),
                role: Role::Admin,
            })
            .await?;

        Ok(Some(admin))
    }
}
