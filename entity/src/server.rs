use sea_orm::entity::prelude::*;

/// A hosted game server supervised by the daemon on its node.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "server")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub uuid: Uuid,
    pub name: String,
    pub owner_id: i32,
    pub node_id: i32,

    /// Whether the server is administratively suspended.
    ///
    /// Kept separate from `status` so a suspend/unsuspend cycle can never
    /// erase an install or restore marker.
    pub suspended: bool,

    /// Install/restore lifecycle marker. `None` means the server is in its
    /// normal running state.
    pub status: Option<ServerStatus>,

    pub created_at: DateTimeUtc,
}

/// Install/restore lifecycle states. Suspension is intentionally not part
/// of this enum; see [`Model::suspended`].
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ServerStatus {
    #[sea_orm(string_value = "installing")]
    Installing,
    #[sea_orm(string_value = "install_failed")]
    InstallFailed,
    #[sea_orm(string_value = "restoring_backup")]
    RestoringBackup,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::node::Entity",
        from = "Column::NodeId",
        to = "super::node::Column::Id"
    )]
    Node,
    #[sea_orm(has_many = "super::backup::Entity")]
    Backup,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::node::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Node.def()
    }
}

impl Related<super::backup::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Backup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
