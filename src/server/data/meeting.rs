//! Meeting data repository for database operations.
//!
//! Provides `MeetingRepository` for inserting meetings, listing them in calendar order
//! and moving a club's earliest meeting.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::meeting::{ClubMeeting, CreateMeetingParams, Meeting};

pub struct MeetingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MeetingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a meeting stamped with the current time as `created_at`.
    ///
    /// # Returns
    /// - `Ok(Meeting)` - The created meeting
    /// - `Err(DbErr)` - Database error, including a foreign key violation when the club
    ///   does not exist
    pub async fn create(&self, params: CreateMeetingParams) -> Result<Meeting, DbErr> {
        let entity = entity::club_meeting::ActiveModel {
            club_id: ActiveValue::Set(params.club_id),
            event_name: ActiveValue::Set(params.event_name),
            meeting_time: ActiveValue::Set(params.meeting_time),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Meeting::from_entity(entity))
    }

    /// Gets the meetings of one club, soonest first.
    ///
    /// Meetings sharing a time are returned in id order. An unknown club yields an
    /// empty list.
    pub async fn get_by_club(&self, club_id: i32) -> Result<Vec<Meeting>, DbErr> {
        let entities = entity::prelude::ClubMeeting::find()
            .filter(entity::club_meeting::Column::ClubId.eq(club_id))
            .order_by_asc(entity::club_meeting::Column::MeetingTime)
            .order_by_asc(entity::club_meeting::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Meeting::from_entity).collect())
    }

    /// Gets the meetings of several clubs joined with their club names, soonest first.
    ///
    /// Returns an empty list without querying when `club_ids` is empty.
    ///
    /// # Arguments
    /// - `club_ids` - Clubs to collect meetings for; unknown ids are ignored
    ///
    /// # Returns
    /// - `Ok(Vec<ClubMeeting>)` - Meetings ordered by time, then id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_clubs(&self, club_ids: &[i32]) -> Result<Vec<ClubMeeting>, DbErr> {
        if club_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::ClubMeeting::find()
            .filter(entity::club_meeting::Column::ClubId.is_in(club_ids.iter().copied()))
            .find_also_related(entity::prelude::Club)
            .order_by_asc(entity::club_meeting::Column::MeetingTime)
            .order_by_asc(entity::club_meeting::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(meeting, club)| {
                club.map(|club| ClubMeeting {
                    meeting: Meeting::from_entity(meeting),
                    club_name: club.name,
                })
            })
            .collect())
    }

    /// Finds the earliest meeting of a club.
    ///
    /// When several meetings share the earliest time the one with the lowest id wins.
    pub async fn find_earliest_by_club(&self, club_id: i32) -> Result<Option<Meeting>, DbErr> {
        let entity = entity::prelude::ClubMeeting::find()
            .filter(entity::club_meeting::Column::ClubId.eq(club_id))
            .order_by_asc(entity::club_meeting::Column::MeetingTime)
            .order_by_asc(entity::club_meeting::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Meeting::from_entity))
    }

    /// Moves an already loaded meeting to `meeting_time`.
    ///
    /// Only the time column is written; the rest of the row is returned as stored.
    ///
    /// # Returns
    /// - `Ok(Meeting)` - The updated meeting
    /// - `Err(DbErr::RecordNotUpdated)` - The meeting no longer exists
    /// - `Err(DbErr)` - Other database error
    pub async fn update_meeting_time(
        &self,
        meeting: Meeting,
        meeting_time: DateTime<Utc>,
    ) -> Result<Meeting, DbErr> {
        let entity = entity::club_meeting::ActiveModel {
            id: ActiveValue::Unchanged(meeting.id),
            meeting_time: ActiveValue::Set(meeting_time),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Meeting::from_entity(entity))
    }
}
