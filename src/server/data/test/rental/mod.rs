use crate::{
    model::rental::RentalStatus,
    server::{
        data::rental::RentalRepository,
        model::{
            ordering::SortKey,
            rental::{RentalFilter, RentalScope, RentalSortField},
        },
    },
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::day, rental::RentalFactory},
};

mod find_conflict;
mod get_all;
mod search;
