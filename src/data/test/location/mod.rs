use crate::data::location::LocationRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod all;
mod delete;
mod find_by_short;
