use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SetSubscriptionDto {
    pub club_id: i32,
    pub is_subscribed: bool,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionCountDto {
    pub club_id: i32,
    pub subscription_count: u64,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberDto {
    pub id: i32,
    pub username: String,
}
