//! Notification domain models and parameters.
//!
//! Notifications are append-only broadcast messages. Readers pull them; nothing is
//! pushed to subscribers.

use chrono::{DateTime, Utc};

use crate::model::notification::{NotificationDto, SendNotificationDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub club_id: i32,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::club_notification::Model) -> Self {
        Self {
            id: entity.id,
            club_id: entity.club_id,
            message: entity.message,
            created_at: entity.created_at,
        }
    }
}

/// Notification joined with the name of its club.
#[derive(Debug, Clone, PartialEq)]
pub struct ClubNotification {
    pub notification: Notification,
    pub club_name: String,
}

impl ClubNotification {
    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.notification.id,
            club_id: self.notification.club_id,
            club_name: self.club_name,
            message: self.notification.message,
            created_at: self.notification.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateNotificationParams {
    pub club_id: i32,
    pub message: String,
}

impl CreateNotificationParams {
    pub fn from_dto(dto: SendNotificationDto) -> Self {
        Self {
            club_id: dto.club_id,
            message: dto.message,
        }
    }
}
