//! Award service - awards and their ceremonies

use std::sync::Arc;

use tracing::info;

use crate::assembly::award;
use crate::db::GraphDb;
use crate::error::StoreError;
use crate::views::{AwardCeremonyListItem, AwardCeremonyView, AwardView, NamedItem};

/// Award service for read operations
pub struct AwardService {
    db: Arc<GraphDb>,
    list_limit: usize,
}

impl AwardService {
    /// Create a new award service
    pub fn new(db: Arc<GraphDb>, list_limit: usize) -> Self {
        Self { db, list_limit }
    }

    // =========================================================================
    // Awards
    // =========================================================================

    /// Get an award with every ceremony's nominations
    pub fn show(&self, uuid: &str) -> Result<Option<AwardView>, StoreError> {
        let view = self.db.with_conn(|conn| award::detail(conn, uuid))?;
        info!(uuid, found = view.is_some(), "Resolved award");
        Ok(view)
    }

    pub fn list(&self) -> Result<Vec<NamedItem>, StoreError> {
        self.db.with_conn(|conn| award::list(conn, self.list_limit))
    }

    // =========================================================================
    // Ceremonies
    // =========================================================================

    /// Get a ceremony with its categories and nominations
    pub fn show_ceremony(&self, uuid: &str) -> Result<Option<AwardCeremonyView>, StoreError> {
        let view = self.db.with_conn(|conn| award::ceremony_detail(conn, uuid))?;
        info!(uuid, found = view.is_some(), "Resolved award ceremony");
        Ok(view)
    }

    pub fn list_ceremonies(&self) -> Result<Vec<AwardCeremonyListItem>, StoreError> {
        self.db.with_conn(|conn| award::ceremony_list(conn, self.list_limit))
    }
}
