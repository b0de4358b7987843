use super::*;

/// Tests subscribers are counted per club and clubs without subscribers are omitted.
///
/// Expected: Ok with one row per subscribed club, ordered by club id
#[tokio::test]
async fn counts_subscribers_per_club() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let busy = factory::create_club(db, owner.id).await?;
    let empty = factory::create_club(db, owner.id).await?;
    let quiet = factory::create_club(db, owner.id).await?;
    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;

    factory::create_subscription(db, alice.id, busy.id).await?;
    factory::create_subscription(db, bob.id, busy.id).await?;
    factory::create_subscription(db, bob.id, quiet.id).await?;

    let counts = SubscriptionRepository::new(db).count_by_club().await?;

    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].club_id, busy.id);
    assert_eq!(counts[0].subscription_count, 2);
    assert_eq!(counts[1].club_id, quiet.id);
    assert_eq!(counts[1].subscription_count, 1);
    assert!(counts.iter().all(|c| c.club_id != empty.id));

    Ok(())
}

/// Tests counting with no subscriptions at all.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_without_subscriptions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_club_with_owner(db).await?;

    let counts = SubscriptionRepository::new(db).count_by_club().await?;

    assert!(counts.is_empty());

    Ok(())
}
