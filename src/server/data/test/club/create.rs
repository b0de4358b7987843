use super::*;

/// Tests creating a club owned by an existing user.
///
/// Expected: Ok with generated id and `created_by` set to the owner
#[tokio::test]
async fn creates_club() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let repo = ClubRepository::new(db);
    let club = repo
        .create(CreateClubParams {
            name: "Chess Club".to_string(),
            description: "Weekly games".to_string(),
            created_by: owner.id,
        })
        .await?;

    assert!(club.id > 0);
    assert_eq!(club.name, "Chess Club");
    assert_eq!(club.description, "Weekly games");
    assert_eq!(club.created_by, owner.id);

    let stored = entity::prelude::Club::find_by_id(club.id)
        .one(db)
        .await?
        .map(Club::from_entity);
    assert_eq!(stored, Some(club));

    Ok(())
}

/// Tests that empty names are stored as given.
///
/// Name policy is enforced by the service layer, not the repository.
///
/// Expected: Ok with empty name
#[tokio::test]
async fn accepts_empty_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let club = ClubRepository::new(db)
        .create(CreateClubParams {
            name: String::new(),
            description: String::new(),
            created_by: owner.id,
        })
        .await?;

    assert_eq!(club.name, "");

    Ok(())
}

/// Tests creating a club for a creator that does not exist.
///
/// Expected: Err from the foreign key constraint and no club row
#[tokio::test]
async fn fails_for_unknown_creator() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ClubRepository::new(db)
        .create(CreateClubParams {
            name: "Orphan".to_string(),
            description: String::new(),
            created_by: 999,
        })
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Club::find().count(db).await?, 0);

    Ok(())
}
