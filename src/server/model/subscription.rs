use sea_orm::FromQueryResult;

use crate::model::subscription::{SubscriberDto, SubscriptionCountDto};

/// Row of the per-club subscriber aggregate.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct SubscriptionCount {
    pub club_id: i32,
    pub subscription_count: i64,
}

impl SubscriptionCount {
    pub fn into_dto(self) -> SubscriptionCountDto {
        SubscriptionCountDto {
            club_id: self.club_id,
            subscription_count: self.subscription_count.max(0) as u64,
        }
    }
}

/// Identity of a user subscribed to a club.
#[derive(Debug, Clone, PartialEq)]
pub struct Subscriber {
    pub id: i32,
    pub username: String,
}

impl Subscriber {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
        }
    }

    pub fn into_dto(self) -> SubscriberDto {
        SubscriberDto {
            id: self.id,
            username: self.username,
        }
    }
}
