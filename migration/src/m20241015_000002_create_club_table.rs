use sea_orm_migration::{prelude::*, schema::*};

use super::m20241015_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Club::Table)
                    .if_not_exists()
                    .col(pk_auto(Club::Id))
                    .col(string(Club::Name))
                    .col(text(Club::Description))
                    .col(integer(Club::CreatedBy))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_club_created_by")
                            .from(Club::Table, Club::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_club_created_by")
                    .table(Club::Table)
                    .col(Club::CreatedBy)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Club::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Club {
    Table,
    Id,
    Name,
    Description,
    CreatedBy,
}
