//! Club meeting factory for creating test meeting entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test club meetings with customizable fields.
pub struct ClubMeetingFactory<'a> {
    db: &'a DatabaseConnection,
    club_id: i32,
    event_name: String,
    meeting_time: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl<'a> ClubMeetingFactory<'a> {
    /// Creates a new ClubMeetingFactory with default values.
    ///
    /// Defaults:
    /// - event_name: `"Meeting {id}"` where id is auto-incremented
    /// - meeting_time: 1 day from now
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, club_id: i32) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            club_id,
            event_name: format!("Meeting {}", id),
            meeting_time: now + Duration::days(1),
            created_at: now,
        }
    }

    /// Sets the event name.
    pub fn event_name(mut self, event_name: impl Into<String>) -> Self {
        self.event_name = event_name.into();
        self
    }

    /// Sets the scheduled meeting time.
    pub fn meeting_time(mut self, meeting_time: DateTime<Utc>) -> Self {
        self.meeting_time = meeting_time;
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the meeting entity into the database.
    pub async fn build(self) -> Result<entity::club_meeting::Model, DbErr> {
        entity::club_meeting::ActiveModel {
            club_id: ActiveValue::Set(self.club_id),
            event_name: ActiveValue::Set(self.event_name),
            meeting_time: ActiveValue::Set(self.meeting_time),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a meeting with default values for `club_id`.
pub async fn create_meeting(
    db: &DatabaseConnection,
    club_id: i32,
) -> Result<entity::club_meeting::Model, DbErr> {
    ClubMeetingFactory::new(db, club_id).build().await
}

/// Creates a meeting for `club_id` at a specific time.
pub async fn create_meeting_at(
    db: &DatabaseConnection,
    club_id: i32,
    meeting_time: DateTime<Utc>,
) -> Result<entity::club_meeting::Model, DbErr> {
    ClubMeetingFactory::new(db, club_id)
        .meeting_time(meeting_time)
        .build()
        .await
}
