use super::*;

/// Tests subscribe followed by unsubscribe leaves no row.
///
/// Expected: Ok(true) and zero rows for the pair
#[tokio::test]
async fn removes_subscription() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, club) = factory::helpers::create_club_with_owner(db).await?;
    let member = factory::create_user(db).await?;

    let repo = SubscriptionRepository::new(db);
    repo.subscribe(member.id, club.id).await?;
    let removed = repo.unsubscribe(member.id, club.id).await?;

    assert!(removed);
    assert_eq!(subscription_rows(db, member.id, club.id).await?, 0);

    Ok(())
}

/// Tests unsubscribing without a subscription.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_not_subscribed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, club) = factory::helpers::create_club_with_owner(db).await?;
    let member = factory::create_user(db).await?;

    let removed = SubscriptionRepository::new(db)
        .unsubscribe(member.id, club.id)
        .await?;

    assert!(!removed);

    Ok(())
}

/// Tests only the given pair is removed.
///
/// Expected: other members and other clubs keep their subscriptions
#[tokio::test]
async fn leaves_other_pairs_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, club) = factory::helpers::create_club_with_owner(db).await?;
    let other_club = factory::create_club(db, owner.id).await?;
    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;

    factory::create_subscription(db, alice.id, club.id).await?;
    factory::create_subscription(db, alice.id, other_club.id).await?;
    factory::create_subscription(db, bob.id, club.id).await?;

    SubscriptionRepository::new(db)
        .unsubscribe(alice.id, club.id)
        .await?;

    assert_eq!(subscription_rows(db, alice.id, club.id).await?, 0);
    assert_eq!(subscription_rows(db, alice.id, other_club.id).await?, 1);
    assert_eq!(subscription_rows(db, bob.id, club.id).await?, 1);

    Ok(())
}
