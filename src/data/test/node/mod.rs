use crate::data::node::NodeRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_for_location;
