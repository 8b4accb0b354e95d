use sea_orm::entity::prelude::*;

/// A physical or logical region grouping one or more nodes.
///
/// Locations are hard-deleted; deletion is refused while any node still
/// references the location.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "location")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Short identifying code operators use to reference the location.
    #[sea_orm(unique)]
    pub short: String,

    /// Optional human-readable description.
    pub long: Option<String>,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::node::Entity")]
    Node,
}

impl Related<super::node::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Node.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
