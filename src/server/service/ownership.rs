use sea_orm::ConnectionTrait;

use crate::server::{
    data::club::ClubRepository,
    error::{auth::AuthError, AppError},
};

/// Requires `user_id` to be the creator of `club_id`.
///
/// Run this on the same transaction as the write it protects so the check and the
/// write see the same snapshot.
///
/// # Returns
/// - `Ok(())` - Caller owns the club
/// - `Err(AppError::NotFound)` - Club does not exist
/// - `Err(AuthError::NotClubOwner)` - Club exists but belongs to another user
/// - `Err(AppError::DbErr)` - Database error during lookup
pub async fn require_club_owner<C: ConnectionTrait>(
    db: &C,
    club_id: i32,
    user_id: i32,
) -> Result<(), AppError> {
    let repo = ClubRepository::new(db);

    if repo.is_owned_by(club_id, user_id).await? {
        tracing::debug!(user_id, club_id, "Club ownership confirmed");
        return Ok(());
    }

    if !repo.exists(club_id).await? {
        return Err(AppError::NotFound(format!("Club {} not found", club_id)));
    }

    tracing::warn!(user_id, club_id, "Club ownership check denied");

    Err(AuthError::NotClubOwner { user_id, club_id }.into())
}
