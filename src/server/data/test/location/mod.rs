use crate::server::{
    data::location::LocationRepository,
    model::location::{CreateLocationParams, UpdateLocationParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod crud;
