use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No caller identity is attached to the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No user ID in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response; the stale session should be discarded.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Caller is authenticated but is not the creator of the club they tried to act on.
    ///
    /// Expected, user-facing outcome of the ownership check. Never retried.
    /// Results in a 403 Forbidden response.
    #[error("User {user_id} is not the owner of club {club_id}")]
    NotClubOwner {
        /// Caller attempting the operation.
        user_id: i32,
        /// Club the operation targeted.
        club_id: i32,
    },
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized
/// - `NotClubOwner` → 403 Forbidden
///
/// Errors are logged at debug level; client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "You must be logged in to do that".to_string(),
                }),
            )
                .into_response(),
            Self::NotClubOwner { .. } => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You are not authorized to manage this club".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
