use crate::{
    model::car::CarStatus,
    server::{
        data::car::CarRepository,
        model::{
            car::{CarFilter, CarSortField, CreateCarParams},
            ordering::SortKey,
        },
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod claim;
mod create;
mod get_filtered;

fn filter(search: Option<&str>, status: Option<CarStatus>) -> CarFilter {
    CarFilter {
        search: search.map(str::to_string),
        status,
        page: 0,
        per_page: 25,
        ..Default::default()
    }
}
