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
        subscription::{SetSubscriptionDto, SubscriberDto, SubscriptionCountDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::subscription::SubscriptionService,
        state::AppState,
    },
};

/// Tag for grouping subscription endpoints in OpenAPI documentation
pub static SUBSCRIPTION_TAG: &str = "subscription";

/// Subscribe the caller to a club or unsubscribe them.
///
/// Repeating either request is harmless.
///
/// # Access Control
/// - Authenticated caller, acting on their own membership
///
/// # Returns
/// - `200 OK` - Membership in the requested state
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Subscribing to a club that does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/clubs/subscribe",
    tag = SUBSCRIPTION_TAG,
    request_body = SetSubscriptionDto,
    responses(
        (status = 200, description = "Subscription updated", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_subscription(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SetSubscriptionDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = SubscriptionService::new(&state.db);
    service
        .set_subscription(caller.id, payload.club_id, payload.is_subscribed)
        .await?;

    let message = if payload.is_subscribed {
        "Successfully subscribed to club"
    } else {
        "Successfully unsubscribed from club"
    };

    Ok((StatusCode::OK, Json(MessageDto::new(message))))
}

/// Get the ids of the clubs the caller is subscribed to.
#[utoipa::path(
    get,
    path = "/api/clubs/subscriptions",
    tag = SUBSCRIPTION_TAG,
    responses(
        (status = 200, description = "Subscribed club ids", body = Vec<i32>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subscriptions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = SubscriptionService::new(&state.db);
    let club_ids = service.get_club_ids(caller.id).await?;

    Ok((StatusCode::OK, Json(club_ids)))
}

/// Get subscriber counts per club.
///
/// Clubs without subscribers are omitted; treat a missing club as zero.
#[utoipa::path(
    get,
    path = "/api/clubs/subscription-count",
    tag = SUBSCRIPTION_TAG,
    responses(
        (status = 200, description = "Subscriber count per club", body = Vec<SubscriptionCountDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subscription_counts(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = SubscriptionService::new(&state.db);
    let counts = service.get_counts().await?;

    let counts_dto: Vec<SubscriptionCountDto> =
        counts.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(counts_dto)))
}

/// Get the subscribers of a club.
///
/// # Access Control
/// - `ClubOwner` - Only the club's creator can see who subscribed
#[utoipa::path(
    get,
    path = "/api/clubs/subscribers/{club_id}",
    tag = SUBSCRIPTION_TAG,
    params(
        ("club_id" = i32, Path, description = "Club ID")
    ),
    responses(
        (status = 200, description = "Subscribers ordered by join time", body = Vec<SubscriberDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not own the club", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subscribers(
    State(state): State<AppState>,
    session: Session,
    Path(club_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClubOwner(club_id)])
        .await?;

    let service = SubscriptionService::new(&state.db);
    let subscribers = service.get_subscribers(club_id).await?;

    let subscribers_dto: Vec<SubscriberDto> =
        subscribers.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(subscribers_dto)))
}
