//! Subscription data repository.
//!
//! The `(user_id, club_id)` primary key keeps at most one row per pair; subscribing
//! twice is a no-op rather than an error.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::model::subscription::{Subscriber, SubscriptionCount};

pub struct SubscriptionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SubscriptionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Subscribes a user to a club.
    ///
    /// Inserts the pair with the current time as `joined_at`. An existing pair is left
    /// untouched, keeping its original `joined_at`.
    ///
    /// # Returns
    /// - `Ok(true)` - A new subscription row was inserted
    /// - `Ok(false)` - The user was already subscribed
    /// - `Err(DbErr)` - Database error, including a foreign key violation when the user
    ///   or club does not exist
    pub async fn subscribe(&self, user_id: i32, club_id: i32) -> Result<bool, DbErr> {
        let inserted = entity::prelude::ClubSubscription::insert(
            entity::club_subscription::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                club_id: ActiveValue::Set(club_id),
                joined_at: ActiveValue::Set(Utc::now()),
            },
        )
        .on_conflict(
            OnConflict::columns([
                entity::club_subscription::Column::UserId,
                entity::club_subscription::Column::ClubId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    /// Removes a user's subscription to a club.
    ///
    /// # Returns
    /// - `Ok(true)` - A subscription row was deleted
    /// - `Ok(false)` - The user was not subscribed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn unsubscribe(&self, user_id: i32, club_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ClubSubscription::delete_many()
            .filter(entity::club_subscription::Column::UserId.eq(user_id))
            .filter(entity::club_subscription::Column::ClubId.eq(club_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the ids of the clubs a user is subscribed to, ascending.
    pub async fn get_club_ids_by_user(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        let subscriptions = entity::prelude::ClubSubscription::find()
            .filter(entity::club_subscription::Column::UserId.eq(user_id))
            .order_by_asc(entity::club_subscription::Column::ClubId)
            .all(self.db)
            .await?;

        Ok(subscriptions.into_iter().map(|s| s.club_id).collect())
    }

    /// Counts subscribers per club in a single grouped query.
    ///
    /// Clubs without subscribers have no row; callers default them to zero.
    pub async fn count_by_club(&self) -> Result<Vec<SubscriptionCount>, DbErr> {
        entity::prelude::ClubSubscription::find()
            .select_only()
            .column(entity::club_subscription::Column::ClubId)
            .column_as(
                entity::club_subscription::Column::UserId.count(),
                "subscription_count",
            )
            .group_by(entity::club_subscription::Column::ClubId)
            .order_by_asc(entity::club_subscription::Column::ClubId)
            .into_model::<SubscriptionCount>()
            .all(self.db)
            .await
    }

    /// Gets the users subscribed to a club, earliest joiner first.
    ///
    /// Ties on `joined_at` are ordered by user id.
    pub async fn get_subscribers(&self, club_id: i32) -> Result<Vec<Subscriber>, DbErr> {
        let rows = entity::prelude::ClubSubscription::find()
            .filter(entity::club_subscription::Column::ClubId.eq(club_id))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::club_subscription::Column::JoinedAt)
            .order_by_asc(entity::club_subscription::Column::UserId)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, user)| user.map(Subscriber::from_entity))
            .collect())
    }
}
