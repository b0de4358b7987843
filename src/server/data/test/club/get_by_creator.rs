use super::*;

/// Tests only clubs created by the given user are returned.
///
/// Expected: Ok with the creator's clubs in id order
#[tokio::test]
async fn returns_only_creators_clubs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let chess = factory::create_club(db, alice.id).await?;
    factory::create_club(db, bob.id).await?;
    let go = factory::create_club(db, alice.id).await?;

    let clubs = ClubRepository::new(db).get_by_creator(alice.id).await?;

    assert_eq!(clubs.len(), 2);
    assert_eq!(clubs[0].id, chess.id);
    assert_eq!(clubs[1].id, go.id);
    assert!(clubs.iter().all(|c| c.created_by == alice.id));

    Ok(())
}

/// Tests a user without clubs.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_user_without_clubs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _) = factory::helpers::create_club_with_owner(db).await?;
    let other = factory::create_user(db).await?;

    let clubs = ClubRepository::new(db).get_by_creator(other.id).await?;

    assert!(clubs.is_empty());

    Ok(())
}
