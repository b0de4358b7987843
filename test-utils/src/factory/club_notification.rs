//! Club notification factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test notifications.
pub struct ClubNotificationFactory<'a> {
    db: &'a DatabaseConnection,
    club_id: i32,
    message: String,
    created_at: DateTime<Utc>,
}

impl<'a> ClubNotificationFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - message: `"Notification {id}"` where id is auto-incremented
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, club_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            club_id,
            message: format!("Notification {}", id),
            created_at: Utc::now(),
        }
    }

    /// Sets the message body.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the notification entity into the database.
    pub async fn build(self) -> Result<entity::club_notification::Model, DbErr> {
        entity::club_notification::ActiveModel {
            club_id: ActiveValue::Set(self.club_id),
            message: ActiveValue::Set(self.message),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a notification with default values for `club_id`.
pub async fn create_notification(
    db: &DatabaseConnection,
    club_id: i32,
) -> Result<entity::club_notification::Model, DbErr> {
    ClubNotificationFactory::new(db, club_id).build().await
}
