use super::*;

/// Tests meetings of several clubs are joined with club names and ordered by time.
///
/// Expected: Ok with meetings of requested clubs only, soonest first
#[tokio::test]
async fn returns_meetings_for_requested_clubs() -> Result<(), DbErr> {
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
    let other = factory::create_club(db, owner.id).await?;

    let t1 = Utc.with_ymd_and_hms(2030, 1, 1, 10, 0, 0).unwrap();
    let t2 = Utc.with_ymd_and_hms(2030, 1, 2, 10, 0, 0).unwrap();
    let t3 = Utc.with_ymd_and_hms(2030, 1, 3, 10, 0, 0).unwrap();

    factory::club_meeting::create_meeting_at(db, go.id, t3).await?;
    factory::club_meeting::create_meeting_at(db, chess.id, t1).await?;
    factory::club_meeting::create_meeting_at(db, other.id, t2).await?;
    factory::club_meeting::create_meeting_at(db, go.id, t2).await?;

    let meetings = MeetingRepository::new(db)
        .get_by_clubs(&[chess.id, go.id])
        .await?;

    assert_eq!(meetings.len(), 3);
    assert_eq!(meetings[0].club_name, "Chess Club");
    assert_eq!(meetings[0].meeting.meeting_time, t1);
    assert_eq!(meetings[1].club_name, "Go Club");
    assert_eq!(meetings[1].meeting.meeting_time, t2);
    assert_eq!(meetings[2].club_name, "Go Club");
    assert_eq!(meetings[2].meeting.meeting_time, t3);
    assert!(meetings.iter().all(|m| m.meeting.club_id != other.id));

    Ok(())
}

/// Tests an empty id list does not fall through to an unrestricted query.
///
/// Expected: Ok with empty list even though meetings exist
#[tokio::test]
async fn returns_empty_for_empty_input() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_club_with_meeting(db).await?;

    let meetings = MeetingRepository::new(db).get_by_clubs(&[]).await?;

    assert!(meetings.is_empty());

    Ok(())
}

/// Tests unknown club ids are ignored.
///
/// Expected: Ok with only meetings of existing clubs
#[tokio::test]
async fn ignores_unknown_club_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, club, meeting) = factory::helpers::create_club_with_meeting(db).await?;

    let meetings = MeetingRepository::new(db)
        .get_by_clubs(&[club.id, 9999])
        .await?;

    assert_eq!(meetings.len(), 1);
    assert_eq!(meetings[0].meeting.id, meeting.id);

    Ok(())
}
