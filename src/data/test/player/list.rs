use super::*;

/// Tests listing with no registered players.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_bindings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RegisteredPlayer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegisteredPlayerRepository::new(db);
    let players = repo.list().await?;

    assert!(players.is_empty());

    Ok(())
}

/// Tests listing returns every binding in stable owner order.
///
/// Verifies that all bindings are returned and that iteration order is
/// deterministic across calls.
///
/// Expected: Ok with all bindings, ordered by owner id
#[tokio::test]
async fn returns_all_bindings_in_owner_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RegisteredPlayer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for owner_id in ["3", "1", "2"] {
        factory::registered_player::RegisteredPlayerFactory::new(db)
            .owner_id(owner_id)
            .player_name(format!("Player {}", owner_id))
            .build()
            .await?;
    }

    let repo = RegisteredPlayerRepository::new(db);
    let players = repo.list().await?;

    assert_eq!(players.len(), 3);
    let owners: Vec<u64> = players.iter().map(|p| p.owner_id).collect();
    assert_eq!(owners, vec![1, 2, 3]);

    Ok(())
}
