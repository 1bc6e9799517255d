use super::*;

/// Tests membership for a recorded event.
///
/// Expected: Ok(true)
#[tokio::test]
async fn finds_recorded_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SeenEvent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seen_event::SeenEventFactory::new(db)
        .event_id("31337")
        .build()
        .await?;

    let repo = SeenEventRepository::new(db);
    assert!(repo.contains("31337").await?);

    Ok(())
}

/// Tests membership for an unrecorded event.
///
/// Expected: Ok(false)
#[tokio::test]
async fn misses_unrecorded_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SeenEvent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seen_event::SeenEventFactory::new(db)
        .event_id("31337")
        .build()
        .await?;

    let repo = SeenEventRepository::new(db);
    assert!(!repo.contains("42").await?);

    Ok(())
}
