use super::*;

/// Tests finding an existing user by id.
///
/// Expected: Ok(Some) with the stored username and email
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("alice")
        .email("alice@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(created.id).await?;

    assert!(user.is_some());
    let user = user.unwrap();
    assert_eq!(user.id, created.id);
    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");

    Ok(())
}

/// Tests looking up a user id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(999).await?;

    assert!(user.is_none());

    Ok(())
}
