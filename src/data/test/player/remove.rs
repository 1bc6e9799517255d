use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests removing an existing binding.
///
/// Verifies that removing a registered owner deletes the row and reports
/// that a binding existed.
///
/// Expected: Ok(true) with the row gone
#[tokio::test]
async fn removes_existing_binding() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RegisteredPlayer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::registered_player::RegisteredPlayerFactory::new(db)
        .owner_id("123456789")
        .build()
        .await?;

    let repo = RegisteredPlayerRepository::new(db);
    let removed = repo.remove(123456789).await?;

    assert!(removed);
    let count = entity::prelude::RegisteredPlayer::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests removing an owner without a binding.
///
/// Verifies that removing an unregistered owner reports that nothing
/// existed, without error.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_binding() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RegisteredPlayer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegisteredPlayerRepository::new(db);
    let removed = repo.remove(987654321).await?;

    assert!(!removed);

    Ok(())
}

/// Tests that removal only touches the targeted owner.
///
/// Expected: Ok(true) with the other owner's binding intact
#[tokio::test]
async fn leaves_other_owners_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RegisteredPlayer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::registered_player::RegisteredPlayerFactory::new(db)
        .owner_id("111111111")
        .build()
        .await?;
    factory::registered_player::RegisteredPlayerFactory::new(db)
        .owner_id("222222222")
        .build()
        .await?;

    let repo = RegisteredPlayerRepository::new(db);
    assert!(repo.remove(111111111).await?);

    let remaining = entity::prelude::RegisteredPlayer::find_by_id("222222222")
        .one(db)
        .await?;
    assert!(remaining.is_some());

    Ok(())
}
