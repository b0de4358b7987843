use crate::server::{
    data::notification::NotificationRepository,
    model::notification::CreateNotificationParams,
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
