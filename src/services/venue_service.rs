//! Venue service

use std::sync::Arc;

use tracing::info;

use crate::assembly::venue;
use crate::db::GraphDb;
use crate::error::StoreError;
use crate::views::{VenueListItem, VenueView};

pub struct VenueService {
    db: Arc<GraphDb>,
    list_limit: usize,
}

impl VenueService {
    pub fn new(db: Arc<GraphDb>, list_limit: usize) -> Self {
        Self { db, list_limit }
    }

    pub fn show(&self, uuid: &str) -> Result<Option<VenueView>, StoreError> {
        let view = self.db.with_conn(|conn| venue::detail(conn, uuid))?;
        info!(uuid, found = view.is_some(), "Resolved venue");
        Ok(view)
    }

    pub fn list(&self) -> Result<Vec<VenueListItem>, StoreError> {
        self.db.with_conn(|conn| venue::list(conn, self.list_limit))
    }
}
