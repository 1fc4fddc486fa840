use crate::server::data::dashboard::DashboardRepository;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::day, rental::RentalFactory},
};

mod recent;
mod rental_counts;
