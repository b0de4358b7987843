use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::UserDto,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, middleware::session::AuthSession,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Get the current caller.
///
/// Returns the profile of the user whose id is stored in the session.
///
/// # Returns
/// - `200 OK` - The caller's profile
/// - `401 Unauthorized` - No user in session or user no longer exists
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out.
///
/// Clears all session data. Succeeds whether or not a user was logged in.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cleared", body = MessageDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((StatusCode::OK, Json(MessageDto::new("Logged out"))))
}
