use sea_orm_migration::{prelude::*, schema::*};

use super::m20260611_000004_create_server_table::Server;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Backup::Table)
                    .if_not_exists()
                    .col(pk_auto(Backup::Id))
                    .col(integer(Backup::ServerId))
                    .col(uuid_uniq(Backup::Uuid))
                    .col(string(Backup::Name))
                    .col(string(Backup::Disk))
                    .col(boolean(Backup::IsSuccessful).default(false))
                    .col(boolean(Backup::IsLocked).default(false))
                    .col(big_integer(Backup::Bytes).default(0))
                    .col(timestamp_null(Backup::CompletedAt))
                    .col(timestamp_null(Backup::DeletedAt))
                    .col(
                        timestamp(Backup::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_backup_server_id")
                            .from(Backup::Table, Backup::ServerId)
                            .to(Server::Table, Server::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Backup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Backup {
    Table,
    Id,
    ServerId,
    Uuid,
    Name,
    Disk,
    IsSuccessful,
    IsLocked,
    Bytes,
    CompletedAt,
    DeletedAt,
    CreatedAt,
}
