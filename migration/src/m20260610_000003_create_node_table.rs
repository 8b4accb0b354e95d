use sea_orm_migration::{prelude::*, schema::*};

use super::m20260610_000002_create_location_table::Location;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Node::Table)
                    .if_not_exists()
                    .col(pk_auto(Node::Id))
                    .col(uuid_uniq(Node::Uuid))
                    .col(integer(Node::LocationId))
                    .col(string(Node::Name))
                    .col(string(Node::Fqdn))
                    .col(string(Node::Scheme))
                    .col(integer(Node::DaemonListen))
                    .col(string(Node::DaemonToken))
                    .col(
                        timestamp(Node::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_node_location_id")
                            .from(Node::Table, Node::LocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Node::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Node {
    Table,
    Id,
    Uuid,
    LocationId,
    Name,
    Fqdn,
    Scheme,
    DaemonListen,
    DaemonToken,
    CreatedAt,
}
