use crate::data::seen_event::SeenEventRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod contains;
mod mark_seen;
