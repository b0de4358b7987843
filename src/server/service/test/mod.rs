use crate::server::{
    config::ClubValidation,
    error::{auth::AuthError, AppError},
    model::{
        club::CreateClubWithMeetingParams,
        meeting::{CreateMeetingParams, RescheduleMeetingParams},
        notification::CreateNotificationParams,
    },
    service::{
        club::ClubService, meeting::MeetingService, notification::NotificationService,
        subscription::SubscriptionService,
    },
};
use chrono::{TimeZone, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
