use super::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

/// Tests registering a new tracked player.
///
/// Verifies that the repository creates a binding with the owner's Discord
/// id, the Albion player id, and the player name.
///
/// Expected: Ok with binding created
#[tokio::test]
async fn creates_new_binding() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RegisteredPlayer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegisteredPlayerRepository::new(db);
    let registered = repo
        .upsert(UpsertRegisteredPlayerParam {
            owner_id: 123456789,
            player_id: "albion-42".to_string(),
            player_name: "Mortis".to_string(),
        })
        .await?;

    assert_eq!(registered.owner_id, 123456789);
    assert_eq!(registered.player_id, "albion-42");
    assert_eq!(registered.player_name, "Mortis");

    // Verify binding exists in database
    let db_binding = entity::prelude::RegisteredPlayer::find_by_id("123456789")
        .one(db)
        .await?;
    assert!(db_binding.is_some());

    Ok(())
}

/// Tests re-registering replaces the previous binding.
///
/// Verifies that upserting for an owner who already has a tracked player
/// replaces the player id and name rather than adding a second row.
///
/// Expected: Ok with one binding holding the new player
#[tokio::test]
async fn replaces_existing_binding() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RegisteredPlayer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::registered_player::RegisteredPlayerFactory::new(db)
        .owner_id("123456789")
        .player_id("albion-old")
        .player_name("OldName")
        .build()
        .await?;

    let repo = RegisteredPlayerRepository::new(db);
    let registered = repo
        .upsert(UpsertRegisteredPlayerParam {
            owner_id: 123456789,
            player_id: "albion-new".to_string(),
            player_name: "NewName".to_string(),
        })
        .await?;

    assert_eq!(registered.player_id, "albion-new");
    assert_eq!(registered.player_name, "NewName");

    // Verify only one binding exists for the owner
    let count = entity::prelude::RegisteredPlayer::find()
        .filter(entity::registered_player::Column::OwnerId.eq("123456789"))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that different owners keep independent bindings.
///
/// Verifies that two owners can track the same Albion player without
/// overwriting each other.
///
/// Expected: Ok with two bindings
#[tokio::test]
async fn keeps_bindings_per_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RegisteredPlayer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegisteredPlayerRepository::new(db);
    for owner_id in [111111111u64, 222222222] {
        repo.upsert(UpsertRegisteredPlayerParam {
            owner_id,
            player_id: "albion-42".to_string(),
            player_name: "Mortis".to_string(),
        })
        .await?;
    }

    let count = entity::prelude::RegisteredPlayer::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
