use super::*;

/// Tests club details include the creator's username.
///
/// Expected: Ok(Some) with club name, description and creator username
#[tokio::test]
async fn returns_club_with_creator_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;
    let club = factory::club::ClubFactory::new(db, owner.id)
        .name("Chess Club")
        .description("Weekly games")
        .build()
        .await?;

    let details = ClubRepository::new(db).get_details(club.id).await?;

    assert!(details.is_some());
    let details = details.unwrap();
    assert_eq!(details.club_name, "Chess Club");
    assert_eq!(details.description, "Weekly games");
    assert_eq!(details.creator_username, "alice");

    Ok(())
}

/// Tests details of a missing club.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_club() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let details = ClubRepository::new(db).get_details(7).await?;

    assert!(details.is_none());

    Ok(())
}
