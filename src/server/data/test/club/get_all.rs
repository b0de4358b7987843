use super::*;

/// Tests every club is returned ordered by id.
///
/// Expected: Ok with clubs of all creators in id order
#[tokio::test]
async fn returns_all_clubs_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let first = factory::create_club(db, alice.id).await?;
    let second = factory::create_club(db, bob.id).await?;
    let third = factory::create_club(db, alice.id).await?;

    let clubs = ClubRepository::new(db).get_all().await?;

    let ids: Vec<i32> = clubs.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

/// Tests listing clubs when none exist.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_when_no_clubs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let clubs = ClubRepository::new(db).get_all().await?;

    assert!(clubs.is_empty());

    Ok(())
}
