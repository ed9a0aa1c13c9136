//! Production service - production pages and listings

use std::sync::Arc;

use tracing::info;

use crate::assembly::production;
use crate::db::GraphDb;
use crate::error::StoreError;
use crate::views::{ProductionItem, ProductionView};

/// Production service for read operations
pub struct ProductionService {
    db: Arc<GraphDb>,
    list_limit: usize,
}

impl ProductionService {
    /// Create a new production service
    pub fn new(db: Arc<GraphDb>, list_limit: usize) -> Self {
        Self { db, list_limit }
    }

    /// Get a production's detail shape
    pub fn show(&self, uuid: &str) -> Result<Option<ProductionView>, StoreError> {
        let view = self.db.with_conn(|conn| production::detail(conn, uuid))?;
        info!(uuid, found = view.is_some(), "Resolved production");
        Ok(view)
    }

    /// List productions, latest first
    pub fn list(&self) -> Result<Vec<ProductionItem>, StoreError> {
        let items = self.db.with_conn(|conn| production::list(conn, self.list_limit))?;
        info!(count = items.len(), "Listed productions");
        Ok(items)
    }
}
