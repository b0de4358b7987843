use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleMeetingDto {
    pub club_id: i32,
    pub event_name: String,
    pub meeting_time: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledMeetingDto {
    pub message: String,
    pub meeting_id: i32,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleMeetingDto {
    pub club_id: i32,
    pub meeting_time: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ClubIdsDto {
    #[serde(default)]
    pub club_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MeetingDto {
    pub id: i32,
    pub event_name: String,
    pub meeting_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Meeting joined with the name of its club, used by the calendar view.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ClubMeetingDto {
    pub id: i32,
    pub club_id: i32,
    pub club_name: String,
    pub event_name: String,
    pub meeting_time: DateTime<Utc>,
}
