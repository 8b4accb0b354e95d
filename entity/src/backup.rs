use sea_orm::entity::prelude::*;

/// An archived snapshot of a server's files.
///
/// Backups are soft-deleted: `deleted_at` is set instead of removing the
/// row, so deleted backups stay queryable by id for audit. A backup with
/// `is_locked` and `is_successful` both true cannot be deleted; a locked
/// backup that never completed successfully can.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "backup")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub server_id: i32,
    #[sea_orm(unique)]
    pub uuid: Uuid,
    pub name: String,

    /// Which storage backend holds the archive.
    pub disk: BackupDisk,

    pub is_successful: bool,
    pub is_locked: bool,
    pub bytes: i64,
    pub completed_at: Option<DateTimeUtc>,

    /// Soft-delete marker; `None` means the backup is live.
    pub deleted_at: Option<DateTimeUtc>,

    pub created_at: DateTimeUtc,
}

/// Storage adapter tag deciding how the archived artifact is removed.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum BackupDisk {
    /// Stored on the node's filesystem, managed by the daemon.
    #[sea_orm(string_value = "wings")]
    Wings,
    /// Stored in an S3-compatible object store.
    #[sea_orm(string_value = "s3")]
    S3,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::server::Entity",
        from = "Column::ServerId",
        to = "super::server::Column::Id"
    )]
    Server,
}

impl Related<super::server::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Server.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
