use crate::data::backup::BackupRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_uuid;
mod soft_delete;
