use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SeenEvent::Table)
                    .if_not_exists()
                    .col(string(SeenEvent::EventId).primary_key())
                    .col(timestamp_with_time_zone(SeenEvent::SeenAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SeenEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum SeenEvent {
    Table,
    EventId,
    SeenAt,
}
