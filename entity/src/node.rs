use sea_orm::entity::prelude::*;

/// A machine running the daemon that supervises server processes.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "node")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub uuid: Uuid,
    pub location_id: i32,
    pub name: String,

    /// Hostname the daemon is reachable at.
    pub fqdn: String,

    /// URL scheme for daemon requests, `"http"` or `"https"`.
    pub scheme: String,

    /// Port the daemon API listens on.
    pub daemon_listen: i32,

    /// Bearer token authenticating panel requests to the daemon.
    pub daemon_token: String,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::LocationId",
        to = "super::location::Column::Id"
    )]
    Location,
    #[sea_orm(has_many = "super::server::Entity")]
    Server,
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::server::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Server.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
