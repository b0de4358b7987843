use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        notification::{NotificationDto, SendNotificationDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard,
        model::notification::CreateNotificationParams,
        service::notification::NotificationService, state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// Broadcast a message to a club.
///
/// The message is stored and becomes visible in the notification feed; nothing is
/// pushed to subscribers.
///
/// # Access Control
/// - Caller must have created the club
#[utoipa::path(
    post,
    path = "/api/clubs/send-notification",
    tag = NOTIFICATION_TAG,
    request_body = SendNotificationDto,
    responses(
        (status = 200, description = "Notification sent", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not own the club", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_notification(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SendNotificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = NotificationService::new(&state.db);
    service
        .send(CreateNotificationParams::from_dto(payload), caller.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Notification sent successfully")),
    ))
}

/// Get every notification, newest first.
#[utoipa::path(
    get,
    path = "/api/clubs/notifications",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Notifications ordered newest first", body = Vec<NotificationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = NotificationService::new(&state.db);
    let notifications = service.get_all().await?;

    let notifications_dto: Vec<NotificationDto> =
        notifications.into_iter().map(|n| n.into_dto()).collect();

    Ok((StatusCode::OK, Json(notifications_dto)))
}
