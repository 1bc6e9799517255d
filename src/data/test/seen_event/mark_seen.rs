use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests recording a new event.
///
/// Expected: Ok with the event subsequently contained
#[tokio::test]
async fn records_new_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SeenEvent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeenEventRepository::new(db);
    repo.mark_seen("31337").await?;

    assert!(repo.contains("31337").await?);

    Ok(())
}

/// Tests recording the same event twice.
///
/// Verifies that a duplicate mark is a no-op rather than an error, so an
/// interrupted tick can re-process a player safely.
///
/// Expected: Ok with a single row
#[tokio::test]
async fn ignores_duplicate_mark() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SeenEvent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeenEventRepository::new(db);
    repo.mark_seen("31337").await?;
    repo.mark_seen("31337").await?;

    let count = entity::prelude::SeenEvent::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
