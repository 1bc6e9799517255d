use crate::data::player::RegisteredPlayerRepository;
use crate::model::player::UpsertRegisteredPlayerParam;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod list;
mod remove;
mod upsert;
