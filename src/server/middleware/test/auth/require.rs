use super::*;

/// Tests a request without a session user is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_missing_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a deleted user is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase) carrying the stale id
#[tokio::test]
async fn rejects_user_missing_from_database() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(404).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(user_id))) => {
            assert_eq!(user_id, 404)
        }
        other => panic!("Expected UserNotInDatabase, got: {:?}", other.map(|u| u.id)),
    }

    Ok(())
}

/// Tests an empty permission list only requires authentication.
///
/// Expected: Ok(User) for the session user
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let caller = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(caller.id, user.id);
    assert_eq!(caller.username, "alice");

    Ok(())
}

/// Tests the club creator passes the ownership permission.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_club_owner() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (owner, club) = factory::helpers::create_club_with_owner(db).await?;
    AuthSession::new(session).set_user_id(owner.id).await?;

    let caller = AuthGuard::new(db, session)
        .require(&[Permission::ClubOwner(club.id)])
        .await?;

    assert_eq!(caller.id, owner.id);

    Ok(())
}

/// Tests a user who did not create the club is forbidden.
///
/// Expected: Err(AuthError::NotClubOwner)
#[tokio::test]
async fn denies_non_owner() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_, club) = factory::helpers::create_club_with_owner(db).await?;
    let other = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(other.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::ClubOwner(club.id)])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::NotClubOwner { user_id, club_id })) => {
            assert_eq!(user_id, other.id);
            assert_eq!(club_id, club.id);
        }
        other => panic!("Expected NotClubOwner, got: {:?}", other.map(|u| u.id)),
    }

    Ok(())
}

/// Tests the ownership permission on a club that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn reports_missing_club_as_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::ClubOwner(999)])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the session round trip used by login and logout.
///
/// Expected: user id readable after set, gone after clear
#[tokio::test]
async fn session_stores_and_clears_user_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (_, session) = test.db_and_session().await.unwrap();

    let auth_session = AuthSession::new(session);
    assert_eq!(auth_session.get_user_id().await?, None);

    auth_session.set_user_id(12).await?;
    assert_eq!(auth_session.get_user_id().await?, Some(12));

    auth_session.clear().await;
    assert_eq!(auth_session.get_user_id().await?, None);

    Ok(())
}
