use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::notification::{
    ClubNotification, CreateNotificationParams, Notification,
};

/// Repository for the append-only notification log.
pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a notification for a club stamped with the current time.
    pub async fn create(&self, params: CreateNotificationParams) -> Result<Notification, DbErr> {
        let entity = entity::club_notification::ActiveModel {
            club_id: ActiveValue::Set(params.club_id),
            message: ActiveValue::Set(params.message),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    /// Gets every notification joined with its club name, newest first.
    ///
    /// Notifications created at the same instant are ordered by descending id.
    pub async fn get_all(&self) -> Result<Vec<ClubNotification>, DbErr> {
        let rows = entity::prelude::ClubNotification::find()
            .find_also_related(entity::prelude::Club)
            .order_by_desc(entity::club_notification::Column::CreatedAt)
            .order_by_desc(entity::club_notification::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(notification, club)| {
                club.map(|club| ClubNotification {
                    notification: Notification::from_entity(notification),
                    club_name: club.name,
                })
            })
            .collect())
    }
}
