use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    config::ClubValidation,
    data::{club::ClubRepository, meeting::MeetingRepository},
    error::AppError,
    model::{
        club::{Club, ClubDetails, CreateClubParams, CreateClubWithMeetingParams, CreatedClub},
        meeting::CreateMeetingParams,
    },
    service::transaction,
};

pub struct ClubService<'a> {
    db: &'a DatabaseConnection,
    validation: &'a ClubValidation,
}

impl<'a> ClubService<'a> {
    pub fn new(db: &'a DatabaseConnection, validation: &'a ClubValidation) -> Self {
        Self { db, validation }
    }

    /// Creates a club owned by the caller together with its first meeting.
    ///
    /// Both inserts run in one transaction: if the meeting cannot be written the club
    /// row is rolled back and no club is left without a meeting.
    ///
    /// # Returns
    /// - `Ok(CreatedClub)` - Ids of the new club and meeting
    /// - `Err(AppError::BadRequest)` - Club or event name rejected by the validation policy
    /// - `Err(AppError::DbErr)` - Either insert failed; nothing was written
    pub async fn create_with_first_meeting(
        &self,
        params: CreateClubWithMeetingParams,
    ) -> Result<CreatedClub, AppError> {
        self.validation.check_name("Club name", &params.name)?;
        self.validation.check_name("Event name", &params.event_name)?;

        let txn = transaction::begin(self.db).await?;
        let result = Self::insert_club_with_meeting(&txn, params).await;
        let created = transaction::finish(txn, result).await?;

        tracing::info!(
            club_id = created.club_id,
            meeting_id = created.meeting_id,
            "Created club with first meeting"
        );

        Ok(created)
    }

    async fn insert_club_with_meeting<C: ConnectionTrait>(
        txn: &C,
        params: CreateClubWithMeetingParams,
    ) -> Result<CreatedClub, AppError> {
        let club = ClubRepository::new(txn)
            .create(CreateClubParams {
                name: params.name,
                description: params.description,
                created_by: params.created_by,
            })
            .await?;

        let meeting = MeetingRepository::new(txn)
            .create(CreateMeetingParams {
                club_id: club.id,
                event_name: params.event_name,
                meeting_time: params.meeting_time,
            })
            .await?;

        Ok(CreatedClub {
            club_id: club.id,
            meeting_id: meeting.id,
        })
    }

    /// Gets a club with its creator's username.
    ///
    /// # Returns
    /// - `Ok(ClubDetails)` - Club found
    /// - `Err(AppError::NotFound)` - No such club
    pub async fn get_details(&self, club_id: i32) -> Result<ClubDetails, AppError> {
        ClubRepository::new(self.db)
            .get_details(club_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Club {} not found", club_id)))
    }

    pub async fn get_all(&self) -> Result<Vec<Club>, AppError> {
        Ok(ClubRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_creator(&self, user_id: i32) -> Result<Vec<Club>, AppError> {
        Ok(ClubRepository::new(self.db).get_by_creator(user_id).await?)
    }
}
