use crate::server::data::subscription::SubscriptionRepository;
use chrono::{Duration, TimeZone, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod count_by_club;
mod unsubscribe;

async fn subscription_rows(
    db: &sea_orm::DatabaseConnection,
    user_id: i32,
    club_id: i32,
) -> Result<u64, DbErr> {
    entity::prelude::ClubSubscription::find()
        .filter(entity::club_subscription::Column::UserId.eq(user_id))
        .filter(entity::club_subscription::Column::ClubId.eq(club_id))
        .count(db)
        .await
}
