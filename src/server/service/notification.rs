use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::notification::{ClubNotification, CreateNotificationParams, Notification},
    service::{ownership, transaction},
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a broadcast message for a club owned by the caller.
    ///
    /// # Returns
    /// - `Ok(Notification)` - The stored notification
    /// - `Err(AppError::NotFound)` - Club does not exist
    /// - `Err(AuthError::NotClubOwner)` - Caller did not create the club
    pub async fn send(
        &self,
        params: CreateNotificationParams,
        caller_id: i32,
    ) -> Result<Notification, AppError> {
        let txn = transaction::begin(self.db).await?;
        let result = Self::send_owned(&txn, params, caller_id).await;
        let notification = transaction::finish(txn, result).await?;

        tracing::info!(
            club_id = notification.club_id,
            notification_id = notification.id,
            "Sent club notification"
        );

        Ok(notification)
    }

    async fn send_owned<C: ConnectionTrait>(
        txn: &C,
        params: CreateNotificationParams,
        caller_id: i32,
    ) -> Result<Notification, AppError> {
        ownership::require_club_owner(txn, params.club_id, caller_id).await?;

        Ok(NotificationRepository::new(txn).create(params).await?)
    }

    /// Gets every notification with its club name, newest first.
    pub async fn get_all(&self) -> Result<Vec<ClubNotification>, AppError> {
        Ok(NotificationRepository::new(self.db).get_all().await?)
    }
}
