use super::*;

/// Tests scheduling a meeting for an existing club.
///
/// Expected: Ok with the given event name and time and a server-assigned `created_at`
#[tokio::test]
async fn creates_meeting() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, club) = factory::helpers::create_club_with_owner(db).await?;
    let meeting_time = Utc.with_ymd_and_hms(2030, 1, 5, 18, 0, 0).unwrap();
    let before = Utc::now();

    let meeting = MeetingRepository::new(db)
        .create(CreateMeetingParams {
            club_id: club.id,
            event_name: "Weekly Match".to_string(),
            meeting_time,
        })
        .await?;

    assert!(meeting.id > 0);
    assert_eq!(meeting.club_id, club.id);
    assert_eq!(meeting.event_name, "Weekly Match");
    assert_eq!(meeting.meeting_time, meeting_time);
    assert!(meeting.created_at >= before);

    Ok(())
}

/// Tests several meetings at the same time are allowed for one club.
///
/// Expected: Ok for both inserts with distinct ids
#[tokio::test]
async fn allows_duplicate_times() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, club) = factory::helpers::create_club_with_owner(db).await?;
    let meeting_time = Utc.with_ymd_and_hms(2030, 1, 5, 18, 0, 0).unwrap();

    let repo = MeetingRepository::new(db);
    let first = repo
        .create(CreateMeetingParams {
            club_id: club.id,
            event_name: "A".to_string(),
            meeting_time,
        })
        .await?;
    let second = repo
        .create(CreateMeetingParams {
            club_id: club.id,
            event_name: "B".to_string(),
            meeting_time,
        })
        .await?;

    assert_ne!(first.id, second.id);
    assert_eq!(repo.get_by_club(club.id).await?.len(), 2);

    Ok(())
}

/// Tests scheduling a meeting for a club that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_club() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MeetingRepository::new(db)
        .create(CreateMeetingParams {
            club_id: 404,
            event_name: "Nowhere".to_string(),
            meeting_time: Utc::now(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
