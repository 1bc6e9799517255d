use super::*;

/// Tests looking up a cached item by its search term.
///
/// Expected: Ok with the cached item
#[tokio::test]
async fn finds_cached_item() -> Result<(), DbErr> {
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
    let item = repo.find_by_name("bag").await?;

    let item = item.expect("cache hit");
    assert_eq!(item.item_id, "T4_BAG");
    assert_eq!(item.name, "Adept's Bag");

    Ok(())
}

/// Tests that lookup is case-insensitive.
///
/// Verifies that a term cached in lowercase resolves queries in any case.
///
/// Expected: Ok with the cached item
#[tokio::test]
async fn matches_regardless_of_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ItemName)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::item_name::ItemNameFactory::new(db)
        .item_id("T4_BAG")
        .search_name("bag")
        .build()
        .await?;

    let repo = ItemNameRepository::new(db);
    assert!(repo.find_by_name("BAG").await?.is_some());
    assert!(repo.find_by_name("Bag").await?.is_some());

    Ok(())
}

/// Tests looking up a term with no cached resolution.
///
/// Expected: Ok(None)
#[tokio::test]
async fn misses_unknown_term() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ItemName)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ItemNameRepository::new(db);
    assert!(repo.find_by_name("claymore").await?.is_none());

    Ok(())
}
