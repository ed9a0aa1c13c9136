//! Programme service - characters, seasons, festivals and festival series

use std::sync::Arc;

use crate::assembly::{character, season};
use crate::db::GraphDb;
use crate::error::StoreError;
use crate::model::NodeLabel;
use crate::views::{CharacterView, FestivalSeriesView, FestivalView, NamedItem, SeasonView};

pub struct ProgrammeService {
    db: Arc<GraphDb>,
    list_limit: usize,
}

impl ProgrammeService {
    pub fn new(db: Arc<GraphDb>, list_limit: usize) -> Self {
        Self { db, list_limit }
    }

    pub fn show_character(&self, uuid: &str) -> Result<Option<CharacterView>, StoreError> {
        self.db.with_conn(|conn| character::detail(conn, uuid))
    }

    pub fn list_characters(&self) -> Result<Vec<NamedItem>, StoreError> {
        self.db.with_conn(|conn| character::list(conn, self.list_limit))
    }

    pub fn show_season(&self, uuid: &str) -> Result<Option<SeasonView>, StoreError> {
        self.db.with_conn(|conn| season::season_detail(conn, uuid))
    }

    pub fn show_festival(&self, uuid: &str) -> Result<Option<FestivalView>, StoreError> {
        self.db.with_conn(|conn| season::festival_detail(conn, uuid))
    }

    pub fn show_festival_series(&self, uuid: &str) -> Result<Option<FestivalSeriesView>, StoreError> {
        self.db.with_conn(|conn| season::festival_series_detail(conn, uuid))
    }

    /// List seasons, festivals or festival series
    pub fn list(&self, label: NodeLabel) -> Result<Vec<NamedItem>, StoreError> {
        self.db.with_conn(|conn| season::list(conn, label, self.list_limit))
    }
}
