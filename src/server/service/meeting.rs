use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    config::ClubValidation,
    data::meeting::MeetingRepository,
    error::AppError,
    model::meeting::{ClubMeeting, CreateMeetingParams, Meeting, RescheduleMeetingParams},
    service::{ownership, transaction},
};

pub struct MeetingService<'a> {
    db: &'a DatabaseConnection,
    validation: &'a ClubValidation,
}

impl<'a> MeetingService<'a> {
    pub fn new(db: &'a DatabaseConnection, validation: &'a ClubValidation) -> Self {
        Self { db, validation }
    }

    /// Schedules an additional meeting for a club owned by the caller.
    ///
    /// The ownership check and the insert share one transaction.
    ///
    /// # Returns
    /// - `Ok(Meeting)` - The scheduled meeting
    /// - `Err(AppError::BadRequest)` - Event name rejected by the validation policy
    /// - `Err(AppError::NotFound)` - Club does not exist
    /// - `Err(AuthError::NotClubOwner)` - Caller did not create the club
    pub async fn schedule(
        &self,
        params: CreateMeetingParams,
        caller_id: i32,
    ) -> Result<Meeting, AppError> {
        self.validation.check_name("Event name", &params.event_name)?;

        let txn = transaction::begin(self.db).await?;
        let result = Self::schedule_owned(&txn, params, caller_id).await;
        let meeting = transaction::finish(txn, result).await?;

        tracing::info!(
            club_id = meeting.club_id,
            meeting_id = meeting.id,
            "Scheduled meeting"
        );

        Ok(meeting)
    }

    async fn schedule_owned<C: ConnectionTrait>(
        txn: &C,
        params: CreateMeetingParams,
        caller_id: i32,
    ) -> Result<Meeting, AppError> {
        ownership::require_club_owner(txn, params.club_id, caller_id).await?;

        Ok(MeetingRepository::new(txn).create(params).await?)
    }

    /// Gets the meetings of one club, soonest first.
    pub async fn get_by_club(&self, club_id: i32) -> Result<Vec<Meeting>, AppError> {
        Ok(MeetingRepository::new(self.db).get_by_club(club_id).await?)
    }

    /// Gets the meetings of several clubs with club names, soonest first.
    ///
    /// An empty id list returns an empty result.
    pub async fn get_by_clubs(&self, club_ids: &[i32]) -> Result<Vec<ClubMeeting>, AppError> {
        Ok(MeetingRepository::new(self.db).get_by_clubs(club_ids).await?)
    }

    /// Moves the earliest meeting of a club owned by the caller to a new time.
    ///
    /// The earliest meeting is the one with the smallest `meeting_time`; ties go to the
    /// lowest id. Only that single meeting is changed.
    ///
    /// # Returns
    /// - `Ok(Meeting)` - The updated meeting
    /// - `Err(AppError::NotFound)` - Club does not exist or has no meetings
    /// - `Err(AuthError::NotClubOwner)` - Caller did not create the club
    pub async fn reschedule_earliest(
        &self,
        params: RescheduleMeetingParams,
        caller_id: i32,
    ) -> Result<Meeting, AppError> {
        let txn = transaction::begin(self.db).await?;
        let result = Self::reschedule_owned(&txn, params, caller_id).await;
        let meeting = transaction::finish(txn, result).await?;

        tracing::info!(
            club_id = meeting.club_id,
            meeting_id = meeting.id,
            "Rescheduled earliest meeting"
        );

        Ok(meeting)
    }

    async fn reschedule_owned<C: ConnectionTrait>(
        txn: &C,
        params: RescheduleMeetingParams,
        caller_id: i32,
    ) -> Result<Meeting, AppError> {
        ownership::require_club_owner(txn, params.club_id, caller_id).await?;

        let repo = MeetingRepository::new(txn);

        let Some(earliest) = repo.find_earliest_by_club(params.club_id).await? else {
            return Err(AppError::NotFound(format!(
                "Club {} has no meetings",
                params.club_id
            )));
        };

        Ok(repo
            .update_meeting_time(earliest, params.meeting_time)
            .await?)
    }
}
