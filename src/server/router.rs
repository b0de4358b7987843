use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        club::{self, CLUB_TAG},
        meeting::{self, MEETING_TAG},
        notification::{self, NOTIFICATION_TAG},
        subscription::{self, SUBSCRIPTION_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Club Hub API", description = "Clubs, meetings, subscriptions and notifications"),
    tags(
        (name = AUTH_TAG, description = "Caller session"),
        (name = CLUB_TAG, description = "Club lifecycle"),
        (name = MEETING_TAG, description = "Meeting scheduling"),
        (name = SUBSCRIPTION_TAG, description = "Club membership"),
        (name = NOTIFICATION_TAG, description = "Club broadcasts")
    )
)]
struct ApiDoc;

/// Builds every API route and the Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::get_user))
        .routes(routes!(auth::logout))
        .routes(routes!(club::create_club))
        .routes(routes!(club::get_club_details))
        .routes(routes!(club::get_clubs_by_creator))
        .routes(routes!(club::get_owned_club_summaries))
        .routes(routes!(club::get_all_clubs))
        .routes(routes!(subscription::set_subscription))
        .routes(routes!(subscription::get_subscriptions))
        .routes(routes!(subscription::get_subscription_counts))
        .routes(routes!(subscription::get_subscribers))
        .routes(routes!(meeting::schedule_meeting))
        .routes(routes!(meeting::get_club_meetings))
        .routes(routes!(meeting::get_meetings_for_clubs))
        .routes(routes!(meeting::update_meeting))
        .routes(routes!(notification::send_notification))
        .routes(routes!(notification::get_notifications))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
