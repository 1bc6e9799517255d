use crate::data::item_name::ItemNameRepository;
use crate::model::item::UpsertItemNameParam;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_name;
mod upsert;
