use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20241015_000001_create_user_table::User, m20241015_000002_create_club_table::Club,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClubSubscription::Table)
                    .if_not_exists()
                    .col(integer(ClubSubscription::UserId))
                    .col(integer(ClubSubscription::ClubId))
                    .col(
                        timestamp(ClubSubscription::JoinedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_club_subscription")
                            .col(ClubSubscription::UserId)
                            .col(ClubSubscription::ClubId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_club_subscription_user_id")
                            .from(ClubSubscription::Table, ClubSubscription::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_club_subscription_club_id")
                            .from(ClubSubscription::Table, ClubSubscription::ClubId)
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
                    .name("idx_club_subscription_club_id")
                    .table(ClubSubscription::Table)
                    .col(ClubSubscription::ClubId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClubSubscription::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClubSubscription {
    Table,
    UserId,
    ClubId,
    JoinedAt,
}
