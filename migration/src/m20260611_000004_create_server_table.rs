use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260610_000001_create_user_table::User, m20260610_000003_create_node_table::Node,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Server::Table)
                    .if_not_exists()
                    .col(pk_auto(Server::Id))
                    .col(uuid_uniq(Server::Uuid))
                    .col(string(Server::Name))
                    .col(integer(Server::OwnerId))
                    .col(integer(Server::NodeId))
                    .col(boolean(Server::Suspended).default(false))
                    .col(string_null(Server::Status))
                    .col(
                        timestamp(Server::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_server_owner_id")
                            .from(Server::Table, Server::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_server_node_id")
                            .from(Server::Table, Server::NodeId)
                            .to(Node::Table, Node::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Server::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Server {
    Table,
    Id,
    Uuid,
    Name,
    OwnerId,
    NodeId,
    Suspended,
    Status,
    CreatedAt,
}
