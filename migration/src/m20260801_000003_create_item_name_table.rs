use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ItemName::Table)
                    .if_not_exists()
                    .col(string(ItemName::ItemId).primary_key())
                    .col(string(ItemName::Name))
                    .col(string(ItemName::SearchName))
                    .col(timestamp_with_time_zone(ItemName::CachedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ItemName::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum ItemName {
    Table,
    ItemId,
    Name,
    SearchName,
    CachedAt,
}
