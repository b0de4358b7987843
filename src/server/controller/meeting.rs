use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        meeting::{
            ClubIdsDto, ClubMeetingDto, MeetingDto, RescheduleMeetingDto, ScheduleMeetingDto,
            ScheduledMeetingDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::meeting::{CreateMeetingParams, RescheduleMeetingParams},
        service::meeting::MeetingService,
        state::AppState,
    },
};

/// Tag for grouping meeting endpoints in OpenAPI documentation
pub static MEETING_TAG: &str = "meeting";

/// Schedule an additional meeting.
///
/// # Access Control
/// - Caller must have created the club
///
/// # Returns
/// - `201 Created` - Meeting scheduled
/// - `400 Bad Request` - Event name rejected by the validation policy
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Caller does not own the club
/// - `404 Not Found` - Club does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/clubs/schedule-meeting",
    tag = MEETING_TAG,
    request_body = ScheduleMeetingDto,
    responses(
        (status = 201, description = "Meeting scheduled", body = ScheduledMeetingDto),
        (status = 400, description = "Invalid meeting data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not own the club", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn schedule_meeting(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ScheduleMeetingDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = MeetingService::new(&state.db, &state.club_validation);
    let meeting = service
        .schedule(CreateMeetingParams::from_dto(payload), caller.id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ScheduledMeetingDto {
            message: "Meeting scheduled successfully".to_string(),
            meeting_id: meeting.id,
        }),
    ))
}

/// Get the meetings of a club, soonest first.
///
/// An unknown club yields an empty list.
#[utoipa::path(
    get,
    path = "/api/clubs/meetings/{club_id}",
    tag = MEETING_TAG,
    params(
        ("club_id" = i32, Path, description = "Club ID")
    ),
    responses(
        (status = 200, description = "Meetings ordered by meeting time", body = Vec<MeetingDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_club_meetings(
    State(state): State<AppState>,
    Path(club_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MeetingService::new(&state.db, &state.club_validation);
    let meetings = service.get_by_club(club_id).await?;

    let meetings_dto: Vec<MeetingDto> = meetings.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(meetings_dto)))
}

/// Get the meetings of several clubs with their club names.
///
/// # Access Control
/// - Authenticated caller
#[utoipa::path(
    post,
    path = "/api/clubs/meetings",
    tag = MEETING_TAG,
    request_body = ClubIdsDto,
    responses(
        (status = 200, description = "Meetings ordered by meeting time", body = Vec<ClubMeetingDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_meetings_for_clubs(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ClubIdsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = MeetingService::new(&state.db, &state.club_validation);
    let meetings = service.get_by_clubs(&payload.club_ids).await?;

    let meetings_dto: Vec<ClubMeetingDto> =
        meetings.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(meetings_dto)))
}

/// Move the earliest meeting of a club to a new time.
///
/// # Access Control
/// - Caller must have created the club
///
/// # Returns
/// - `200 OK` - Meeting moved
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Caller does not own the club
/// - `404 Not Found` - Club does not exist or has no meetings
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/clubs/update-meeting",
    tag = MEETING_TAG,
    request_body = RescheduleMeetingDto,
    responses(
        (status = 200, description = "Meeting time updated", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not own the club", body = ErrorDto),
        (status = 404, description = "Club or meeting not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_meeting(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RescheduleMeetingDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = MeetingService::new(&state.db, &state.club_validation);
    service
        .reschedule_earliest(RescheduleMeetingParams::from_dto(payload), caller.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Meeting time updated successfully")),
    ))
}
