use super::*;

/// Tests notifications of all clubs are returned newest first with club names.
///
/// Expected: Ok with `created_at` non-increasing
#[tokio::test]
async fn returns_notifications_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let chess = factory::club::ClubFactory::new(db, owner.id)
        .name("Chess Club")
        .build()
        .await?;
    let go = factory::club::ClubFactory::new(db, owner.id)
        .name("Go Club")
        .build()
        .await?;
    let now = Utc::now();

    factory::club_notification::ClubNotificationFactory::new(db, chess.id)
        .message("oldest")
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    factory::club_notification::ClubNotificationFactory::new(db, go.id)
        .message("newest")
        .created_at(now)
        .build()
        .await?;
    factory::club_notification::ClubNotificationFactory::new(db, chess.id)
        .message("middle")
        .created_at(now - Duration::hours(1))
        .build()
        .await?;

    let notifications = NotificationRepository::new(db).get_all().await?;

    let messages: Vec<&str> = notifications
        .iter()
        .map(|n| n.notification.message.as_str())
        .collect();
    assert_eq!(messages, vec!["newest", "middle", "oldest"]);
    assert_eq!(notifications[0].club_name, "Go Club");
    assert_eq!(notifications[1].club_name, "Chess Club");

    Ok(())
}

/// Tests notifications sharing a timestamp are ordered by descending id.
///
/// Expected: the later insert comes first
#[tokio::test]
async fn breaks_ties_by_descending_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, club) = factory::helpers::create_club_with_owner(db).await?;
    let at = Utc::now();

    let first = factory::club_notification::ClubNotificationFactory::new(db, club.id)
        .created_at(at)
        .build()
        .await?;
    let second = factory::club_notification::ClubNotificationFactory::new(db, club.id)
        .created_at(at)
        .build()
        .await?;

    let notifications = NotificationRepository::new(db).get_all().await?;

    assert_eq!(notifications[0].notification.id, second.id);
    assert_eq!(notifications[1].notification.id, first.id);

    Ok(())
}
