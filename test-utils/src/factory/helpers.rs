//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values across all factories.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an owner, a club owned by them and one meeting for that club.
///
/// All entities use default values. Use the individual factories when specific
/// values matter to the test.
///
/// # Returns
/// - `Ok((owner, club, meeting))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_club_with_meeting(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::club::Model,
        entity::club_meeting::Model,
    ),
    DbErr,
> {
    let owner = crate::factory::user::create_user(db).await?;
    let club = crate::factory::club::create_club(db, owner.id).await?;
    let meeting = crate::factory::club_meeting::create_meeting(db, club.id).await?;

    Ok((owner, club, meeting))
}

/// Creates an owner and a club owned by them.
///
/// # Returns
/// - `Ok((owner, club))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_club_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::club::Model), DbErr> {
    let owner = crate::factory::user::create_user(db).await?;
    let club = crate::factory::club::create_club(db, owner.id).await?;

    Ok((owner, club))
}
