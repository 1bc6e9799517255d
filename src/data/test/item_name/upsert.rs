use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests caching a new item resolution.
///
/// Verifies that the entry is stored with its search term normalized to
/// lowercase.
///
/// Expected: Ok with entry retrievable by the original term
#[tokio::test]
async fn caches_new_resolution() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ItemName)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ItemNameRepository::new(db);
    let cached = repo
        .upsert(UpsertItemNameParam {
            item_id: "T4_BAG".to_string(),
            name: "Adept's Bag".to_string(),
            searched_as: "Bag".to_string(),
        })
        .await?;

    assert_eq!(cached.item_id, "T4_BAG");
    assert_eq!(cached.name, "Adept's Bag");

    let hit = repo.find_by_name("Bag").await?;
    assert!(hit.is_some());

    Ok(())
}

/// Tests refreshing an existing cache entry.
///
/// Verifies that caching the same item under a new search term updates the
/// row rather than duplicating it.
///
/// Expected: Ok with one row resolving the new term
#[tokio::test]
async fn refreshes_existing_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ItemName)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::item_name::ItemNameFactory::new(db)
        .item_id("T4_BAG")
        .name("Adept's Bag")
        .search_name("bag")
        .build()
        .await?;

    let repo = ItemNameRepository::new(db);
    repo.upsert(UpsertItemNameParam {
        item_id: "T4_BAG".to_string(),
        name: "Adept's Bag".to_string(),
        searched_as: "adept bag".to_string(),
    })
    .await?;

    let count = entity::prelude::ItemName::find().count(db).await?;
    assert_eq!(count, 1);

    assert!(repo.find_by_name("adept bag").await?.is_some());
    assert!(repo.find_by_name("bag").await?.is_none());

    Ok(())
}
