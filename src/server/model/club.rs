//! Club domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::club::{ClubDetailsDto, ClubDto, ClubSummaryDto, CreateClubDto};

/// A named interest group owned by the user who created it.
#[derive(Debug, Clone, PartialEq)]
pub struct Club {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Owning user. Never changes after creation.
    pub created_by: i32,
}

impl Club {
    pub fn from_entity(entity: entity::club::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            created_by: entity.created_by,
        }
    }

    pub fn into_dto(self) -> ClubDto {
        ClubDto {
            id: self.id,
            name: self.name,
            description: self.description,
            created_by: self.created_by,
        }
    }

    /// Converts to the `{id, name}` view used by owner club pickers.
    pub fn into_summary_dto(self) -> ClubSummaryDto {
        ClubSummaryDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Club joined with the username of its creator.
#[derive(Debug, Clone, PartialEq)]
pub struct ClubDetails {
    pub club_name: String,
    pub description: String,
    pub creator_username: String,
}

impl ClubDetails {
    pub fn into_dto(self) -> ClubDetailsDto {
        ClubDetailsDto {
            club_name: self.club_name,
            description: self.description,
            created_by: self.creator_username,
        }
    }
}

/// Parameters for inserting a club row.
#[derive(Debug, Clone)]
pub struct CreateClubParams {
    pub name: String,
    pub description: String,
    pub created_by: i32,
}

/// Parameters for creating a club together with its first meeting.
#[derive(Debug, Clone)]
pub struct CreateClubWithMeetingParams {
    pub name: String,
    pub description: String,
    pub event_name: String,
    pub meeting_time: DateTime<Utc>,
    pub created_by: i32,
}

impl CreateClubWithMeetingParams {
    /// Builds parameters from the request body and the authenticated caller.
    pub fn from_dto(dto: CreateClubDto, created_by: i32) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            event_name: dto.event_name,
            meeting_time: dto.meeting_time,
            created_by,
        }
    }
}

/// Ids generated by a club creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedClub {
    pub club_id: i32,
    pub meeting_id: i32,
}
