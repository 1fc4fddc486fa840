use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        model::user::{CreateUserParams, UpdateUserParams},
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod delete;
mod get_all_paginated;
mod update;
