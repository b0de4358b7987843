use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        club::{ClubDetailsDto, ClubDto, ClubSummaryDto, CreateClubDto, CreatedClubDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard,
        model::club::CreateClubWithMeetingParams, service::club::ClubService, state::AppState,
    },
};

/// Tag for grouping club endpoints in OpenAPI documentation
pub static CLUB_TAG: &str = "club";

/// Create a club with its first meeting.
///
/// The caller becomes the club's owner. The club and the meeting are written in one
/// transaction; on failure neither exists.
///
/// # Access Control
/// - Authenticated caller
///
/// # Returns
/// - `201 Created` - Ids of the new club and meeting
/// - `400 Bad Request` - Name rejected by the validation policy
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/clubs",
    tag = CLUB_TAG,
    request_body = CreateClubDto,
    responses(
        (status = 201, description = "Club and first meeting created", body = CreatedClubDto),
        (status = 400, description = "Invalid club data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_club(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateClubDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ClubService::new(&state.db, &state.club_validation);
    let created = service
        .create_with_first_meeting(CreateClubWithMeetingParams::from_dto(payload, caller.id))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedClubDto {
            message: "Club created successfully with meeting scheduled".to_string(),
            club_id: created.club_id,
            meeting_id: created.meeting_id,
        }),
    ))
}

/// Get a club with its creator's username.
///
/// # Returns
/// - `200 OK` - Club details
/// - `404 Not Found` - No such club
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/clubs/details/{club_id}",
    tag = CLUB_TAG,
    params(
        ("club_id" = i32, Path, description = "Club ID")
    ),
    responses(
        (status = 200, description = "Club details", body = ClubDetailsDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_club_details(
    State(state): State<AppState>,
    Path(club_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClubService::new(&state.db, &state.club_validation);
    let details = service.get_details(club_id).await?;

    Ok((StatusCode::OK, Json(details.into_dto())))
}

/// Get the clubs created by a user.
///
/// # Access Control
/// - Authenticated caller
#[utoipa::path(
    get,
    path = "/api/clubs/created/{user_id}",
    tag = CLUB_TAG,
    params(
        ("user_id" = i32, Path, description = "Creator user ID")
    ),
    responses(
        (status = 200, description = "Clubs created by the user", body = Vec<ClubDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clubs_by_creator(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ClubService::new(&state.db, &state.club_validation);
    let clubs = service.get_by_creator(user_id).await?;

    let clubs_dto: Vec<ClubDto> = clubs.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(clubs_dto)))
}

/// Get `{id, name}` of the clubs created by a user.
#[utoipa::path(
    get,
    path = "/api/clubs/created/owner/{user_id}",
    tag = CLUB_TAG,
    params(
        ("user_id" = i32, Path, description = "Creator user ID")
    ),
    responses(
        (status = 200, description = "Club summaries", body = Vec<ClubSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owned_club_summaries(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClubService::new(&state.db, &state.club_validation);
    let clubs = service.get_by_creator(user_id).await?;

    let summaries: Vec<ClubSummaryDto> =
        clubs.into_iter().map(|c| c.into_summary_dto()).collect();

    Ok((StatusCode::OK, Json(summaries)))
}

/// Get every club.
#[utoipa::path(
    get,
    path = "/api/clubs/all",
    tag = CLUB_TAG,
    responses(
        (status = 200, description = "All clubs ordered by id", body = Vec<ClubDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_clubs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ClubService::new(&state.db, &state.club_validation);
    let clubs = service.get_all().await?;

    let clubs_dto: Vec<ClubDto> = clubs.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(clubs_dto)))
}
