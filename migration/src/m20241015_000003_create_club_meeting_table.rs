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
                    .table(ClubMeeting::Table)
                    .if_not_exists()
                    .col(pk_auto(ClubMeeting::Id))
                    .col(integer(ClubMeeting::ClubId))
                    .col(string(ClubMeeting::EventName))
                    .col(timestamp(ClubMeeting::MeetingTime))
                    .col(
                        timestamp(ClubMeeting::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_club_meeting_club_id")
                            .from(ClubMeeting::Table, ClubMeeting::ClubId)
                            .to(Club::Table, Club::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Serves both the per-club calendar read and the earliest-meeting lookup
        manager
            .create_index(
                Index::create()
                    .name("idx_club_meeting_club_time")
                    .table(ClubMeeting::Table)
                    .col(ClubMeeting::ClubId)
                    .col(ClubMeeting::MeetingTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClubMeeting::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClubMeeting {
    Table,
    Id,
    ClubId,
    EventName,
    MeetingTime,
    CreatedAt,
}
