//! Club subscription factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test subscriptions.
pub struct ClubSubscriptionFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    club_id: i32,
    joined_at: DateTime<Utc>,
}

impl<'a> ClubSubscriptionFactory<'a> {
    /// Creates a new factory joining `user_id` to `club_id` now.
    pub fn new(db: &'a DatabaseConnection, user_id: i32, club_id: i32) -> Self {
        Self {
            db,
            user_id,
            club_id,
            joined_at: Utc::now(),
        }
    }

    /// Sets the join timestamp.
    pub fn joined_at(mut self, joined_at: DateTime<Utc>) -> Self {
        self.joined_at = joined_at;
        self
    }

    /// Builds and inserts the subscription entity into the database.
    pub async fn build(self) -> Result<entity::club_subscription::Model, DbErr> {
        entity::club_subscription::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            club_id: ActiveValue::Set(self.club_id),
            joined_at: ActiveValue::Set(self.joined_at),
        }
        .insert(self.db)
        .await
    }
}

/// Subscribes `user_id` to `club_id`.
pub async fn create_subscription(
    db: &DatabaseConnection,
    user_id: i32,
    club_id: i32,
) -> Result<entity::club_subscription::Model, DbErr> {
    ClubSubscriptionFactory::new(db, user_id, club_id)
        .build()
        .await
}
