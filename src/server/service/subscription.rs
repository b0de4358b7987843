use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    data::{club::ClubRepository, subscription::SubscriptionRepository},
    error::AppError,
    model::subscription::{Subscriber, SubscriptionCount},
    service::transaction,
};

pub struct SubscriptionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriptionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Subscribes or unsubscribes a user.
    ///
    /// Both directions are idempotent: subscribing twice keeps one row, unsubscribing
    /// without a subscription is a no-op.
    ///
    /// # Arguments
    /// - `user_id` - The caller
    /// - `club_id` - Club to join or leave
    /// - `subscribed` - `true` to subscribe, `false` to unsubscribe
    ///
    /// # Returns
    /// - `Ok(true)` - Stored membership changed
    /// - `Ok(false)` - Already in the requested state
    /// - `Err(AppError::NotFound)` - Subscribing to a club that does not exist
    pub async fn set_subscription(
        &self,
        user_id: i32,
        club_id: i32,
        subscribed: bool,
    ) -> Result<bool, AppError> {
        let txn = transaction::begin(self.db).await?;
        let result = Self::apply_subscription(&txn, user_id, club_id, subscribed).await;
        let changed = transaction::finish(txn, result).await?;

        tracing::debug!(user_id, club_id, subscribed, changed, "Set subscription");

        Ok(changed)
    }

    async fn apply_subscription<C: ConnectionTrait>(
        txn: &C,
        user_id: i32,
        club_id: i32,
        subscribed: bool,
    ) -> Result<bool, AppError> {
        let repo = SubscriptionRepository::new(txn);

        if !subscribed {
            return Ok(repo.unsubscribe(user_id, club_id).await?);
        }

        if !ClubRepository::new(txn).exists(club_id).await? {
            return Err(AppError::NotFound(format!("Club {} not found", club_id)));
        }

        Ok(repo.subscribe(user_id, club_id).await?)
    }

    pub async fn get_club_ids(&self, user_id: i32) -> Result<Vec<i32>, AppError> {
        Ok(SubscriptionRepository::new(self.db)
            .get_club_ids_by_user(user_id)
            .await?)
    }

    /// Gets subscriber counts for every club with at least one subscriber.
    pub async fn get_counts(&self) -> Result<Vec<SubscriptionCount>, AppError> {
        Ok(SubscriptionRepository::new(self.db).count_by_club().await?)
    }

    pub async fn get_subscribers(&self, club_id: i32) -> Result<Vec<Subscriber>, AppError> {
        Ok(SubscriptionRepository::new(self.db)
            .get_subscribers(club_id)
            .await?)
    }
}
