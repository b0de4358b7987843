use sea_orm_migration::{prelude::*, schema::*};

use super::m20241015_000002_create_club_table::Club;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClubNotification::Table)
                    .if_not_exists()
                    .col(pk_auto(ClubNotification::Id))
                    .col(integer(ClubNotification::ClubId))
                    .col(text(ClubNotification::Message))
                    .col(
                        timestamp(ClubNotification::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_club_notification_club_id")
                            .from(ClubNotification::Table, ClubNotification::ClubId)
                            .to(Club::Table, Club::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_club_notification_created_at")
                    .table(ClubNotification::Table)
                    .col(ClubNotification::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClubNotification::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClubNotification {
    Table,
    Id,
    ClubId,
    Message,
    CreatedAt,
}
