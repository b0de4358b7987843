use super::*;

/// Tests the earliest meeting is selected by time, not by insertion order.
///
/// Expected: Ok(Some) with the meeting at the minimal time
#[tokio::test]
async fn finds_meeting_with_earliest_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, club) = factory::helpers::create_club_with_owner(db).await?;
    let later = Utc.with_ymd_and_hms(2030, 6, 1, 9, 0, 0).unwrap();
    let sooner = Utc.with_ymd_and_hms(2030, 5, 1, 9, 0, 0).unwrap();

    factory::club_meeting::create_meeting_at(db, club.id, later).await?;
    let expected = factory::club_meeting::create_meeting_at(db, club.id, sooner).await?;

    let earliest = MeetingRepository::new(db)
        .find_earliest_by_club(club.id)
        .await?;

    assert_eq!(earliest.map(|m| m.id), Some(expected.id));

    Ok(())
}

/// Tests meetings tied on the earliest time resolve to the lowest id.
///
/// Expected: Ok(Some) with the first inserted of the tied meetings
#[tokio::test]
async fn breaks_ties_by_lowest_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, club) = factory::helpers::create_club_with_owner(db).await?;
    let time = Utc.with_ymd_and_hms(2030, 5, 1, 9, 0, 0).unwrap();

    let first = factory::club_meeting::create_meeting_at(db, club.id, time).await?;
    factory::club_meeting::create_meeting_at(db, club.id, time).await?;

    let earliest = MeetingRepository::new(db)
        .find_earliest_by_club(club.id)
        .await?;

    assert_eq!(earliest.map(|m| m.id), Some(first.id));

    Ok(())
}

/// Tests a club without meetings.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_meetings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, club) = factory::helpers::create_club_with_owner(db).await?;

    let earliest = MeetingRepository::new(db)
        .find_earliest_by_club(club.id)
        .await?;

    assert!(earliest.is_none());

    Ok(())
}
