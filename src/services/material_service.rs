//! Material service - material pages and listings

use std::sync::Arc;

use tracing::info;

use crate::assembly::material;
use crate::db::GraphDb;
use crate::error::StoreError;
use crate::views::{MaterialItem, MaterialView};

/// Material service for read operations
pub struct MaterialService {
    db: Arc<GraphDb>,
    list_limit: usize,
}

impl MaterialService {
    /// Create a new material service
    pub fn new(db: Arc<GraphDb>, list_limit: usize) -> Self {
        Self { db, list_limit }
    }

    /// Get a material's detail shape
    pub fn show(&self, uuid: &str) -> Result<Option<MaterialView>, StoreError> {
        let view = self.db.with_conn(|conn| material::detail(conn, uuid))?;
        info!(uuid, found = view.is_some(), "Resolved material");
        Ok(view)
    }

    /// List materials
    pub fn list(&self) -> Result<Vec<MaterialItem>, StoreError> {
        let items = self.db.with_conn(|conn| material::list(conn, self.list_limit))?;
        info!(count = items.len(), "Listed materials");
        Ok(items)
    }
}
