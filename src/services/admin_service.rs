//! Admin service - provisioning, seeding and statistics

use std::sync::Arc;

use tracing::{info, warn};

use crate::db::import::import_graph;
use crate::db::schema::ProvisionReport;
use crate::db::{DbStats, GraphDb, GraphImport, ImportResult};
use crate::error::StoreError;

pub struct AdminService {
    db: Arc<GraphDb>,
}

impl AdminService {
    pub fn new(db: Arc<GraphDb>) -> Self {
        Self { db }
    }

    /// Create lookup indexes one at a time
    pub fn setup(&self) -> Result<ProvisionReport, StoreError> {
        let report = self.db.provision_indexes()?;
        if report.failed.is_empty() {
            info!(applied = report.applied.len(), "Provisioned indexes");
        } else {
            warn!(
                applied = report.applied.len(),
                failed = report.failed.len(),
                "Provisioned indexes with failures"
            );
        }
        Ok(report)
    }

    /// Bulk-load a graph fixture
    pub fn import(&self, import: GraphImport) -> Result<ImportResult, StoreError> {
        self.db.with_conn_mut(|conn| import_graph(conn, import))
    }

    pub fn stats(&self) -> Result<DbStats, StoreError> {
        self.db.stats()
    }
}
