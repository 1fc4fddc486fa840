use crate::server::data::login_history::LoginHistoryRepository;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::day},
};

mod get_all;
