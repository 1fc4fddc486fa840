//! Domain models for user accounts.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{CreateUserDto, PaginatedUsersDto, Role, UpdateUserDto, UserDto},
    server::{error::AppError, util::parse::parse_role},
};

/// User account with its role and activation state.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// Argon2 PHC string, never sent to clients.
    pub password_hash: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user
    /// - `Err(AppError::InternalErr(_))` - Stored role is not recognised
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            role: parse_role(&entity.role)?,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
            is_active: entity.is_active,
            created_at: entity.created_at,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            role: self.role,
            is_active: self.is_active,
        }
    }
}

/// A page of users ordered by username.
#[derive(Debug, Clone)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for creating a user account. The password is plaintext and is
/// hashed by the service before it reaches the repository.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            username: dto.username.trim().to_string(),
            email: dto.email.trim().to_string(),
            password: dto.password,
            role: dto.role,
        }
    }
}

/// Parameters for updating a user account.
///
/// All fields are optional - only provided fields will be updated.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub id: i32,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
}

impl UpdateUserParams {
    pub fn from_dto(id: i32, dto: UpdateUserDto) -> Self {
        Self {
            id,
            username: dto.username.map(|u| u.trim().to_string()),
            email: dto.email.map(|e| e.trim().to_string()),
            password: dto.password,
            role: dto.role,
            is_active: dto.is_active,
        }
    }
}
