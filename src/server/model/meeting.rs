//! Meeting domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::meeting::{ClubMeetingDto, MeetingDto, RescheduleMeetingDto, ScheduleMeetingDto};

/// A scheduled occurrence belonging to exactly one club.
#[derive(Debug, Clone, PartialEq)]
pub struct Meeting {
    pub id: i32,
    pub club_id: i32,
    pub event_name: String,
    pub meeting_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Meeting {
    pub fn from_entity(entity: entity::club_meeting::Model) -> Self {
        Self {
            id: entity.id,
            club_id: entity.club_id,
            event_name: entity.event_name,
            meeting_time: entity.meeting_time,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> MeetingDto {
        MeetingDto {
            id: self.id,
            event_name: self.event_name,
            meeting_time: self.meeting_time,
            created_at: self.created_at,
        }
    }
}

/// Meeting joined with the name of its club.
#[derive(Debug, Clone, PartialEq)]
pub struct ClubMeeting {
    pub meeting: Meeting,
    pub club_name: String,
}

impl ClubMeeting {
    pub fn into_dto(self) -> ClubMeetingDto {
        ClubMeetingDto {
            id: self.meeting.id,
            club_id: self.meeting.club_id,
            club_name: self.club_name,
            event_name: self.meeting.event_name,
            meeting_time: self.meeting.meeting_time,
        }
    }
}

/// Parameters for inserting a meeting row.
#[derive(Debug, Clone)]
pub struct CreateMeetingParams {
    pub club_id: i32,
    pub event_name: String,
    pub meeting_time: DateTime<Utc>,
}

impl CreateMeetingParams {
    pub fn from_dto(dto: ScheduleMeetingDto) -> Self {
        Self {
            club_id: dto.club_id,
            event_name: dto.event_name,
            meeting_time: dto.meeting_time,
        }
    }
}

/// Parameters for moving a club's earliest meeting.
#[derive(Debug, Clone, Copy)]
pub struct RescheduleMeetingParams {
    pub club_id: i32,
    pub meeting_time: DateTime<Utc>,
}

impl RescheduleMeetingParams {
    pub fn from_dto(dto: RescheduleMeetingDto) -> Self {
        Self {
            club_id: dto.club_id,
            meeting_time: dto.meeting_time,
        }
    }
}
