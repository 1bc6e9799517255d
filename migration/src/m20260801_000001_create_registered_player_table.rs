use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RegisteredPlayer::Table)
                    .if_not_exists()
                    .col(string(RegisteredPlayer::OwnerId).primary_key())
                    .col(string(RegisteredPlayer::PlayerId))
                    .col(string(RegisteredPlayer::PlayerName))
                    .col(timestamp_with_time_zone(RegisteredPlayer::RegisteredAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RegisteredPlayer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum RegisteredPlayer {
    Table,
    OwnerId,
    PlayerId,
    PlayerName,
    RegisteredAt,
}
