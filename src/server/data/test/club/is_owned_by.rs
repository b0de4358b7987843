use super::*;

/// Tests the creator is recognised as owner.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_creator() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, club) = factory::helpers::create_club_with_owner(db).await?;

    let repo = ClubRepository::new(db);
    assert!(repo.is_owned_by(club.id, owner.id).await?);

    Ok(())
}

/// Tests another user is not recognised as owner.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_other_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, club) = factory::helpers::create_club_with_owner(db).await?;
    let other = factory::create_user(db).await?;

    let repo = ClubRepository::new(db);
    assert!(!repo.is_owned_by(club.id, other.id).await?);

    Ok(())
}

/// Tests ownership of a club that does not exist.
///
/// Expected: Ok(false) and `exists` reports the club as missing
#[tokio::test]
async fn returns_false_for_missing_club() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let repo = ClubRepository::new(db);
    assert!(!repo.is_owned_by(42, owner.id).await?);
    assert!(!repo.exists(42).await?);

    Ok(())
}
