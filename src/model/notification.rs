use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SendNotificationDto {
    pub club_id: i32,
    pub message: String,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub id: i32,
    pub club_id: i32,
    pub club_name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
