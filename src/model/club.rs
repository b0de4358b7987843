use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateClubDto {
    pub name: String,
    pub description: String,
    pub event_name: String,
    pub meeting_time: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreatedClubDto {
    pub message: String,
    pub club_id: i32,
    pub meeting_id: i32,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ClubDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub created_by: i32,
}

/// Club view joined with its creator, used by the club details page.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ClubDetailsDto {
    pub club_name: String,
    pub description: String,
    /// Username of the creating user.
    pub created_by: String,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ClubSummaryDto {
    pub id: i32,
    pub name: String,
}
