use crate::data::server::ServerRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_for_node;
mod find_by_uuid;
mod set_suspended;
