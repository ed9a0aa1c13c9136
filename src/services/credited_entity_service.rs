//! Credited entity service - Person and Company pages
//!
//! One service serves both labels; the label picks which nodes are read and
//! the `model` tag written into the view.

use std::sync::Arc;

use tracing::info;

use crate::assembly::person;
use crate::db::GraphDb;
use crate::error::StoreError;
use crate::model::NodeLabel;
use crate::views::{CreditedEntityView, NamedItem};

/// Service for one credited entity label (Person or Company)
pub struct CreditedEntityService {
    db: Arc<GraphDb>,
    label: NodeLabel,
    list_limit: usize,
}

impl CreditedEntityService {
    /// Create a service for `label`
    pub fn new(db: Arc<GraphDb>, label: NodeLabel, list_limit: usize) -> Self {
        Self { db, label, list_limit }
    }

    pub fn label(&self) -> NodeLabel {
        self.label
    }

    /// Get the entity's detail shape
    pub fn show(&self, uuid: &str) -> Result<Option<CreditedEntityView>, StoreError> {
        let view = self.db.with_conn(|conn| person::detail(conn, uuid, self.label))?;
        info!(uuid, label = %self.label, found = view.is_some(), "Resolved credited entity");
        Ok(view)
    }

    /// List entities of this label
    pub fn list(&self) -> Result<Vec<NamedItem>, StoreError> {
        self.db.with_conn(|conn| person::list(conn, self.label, self.list_limit))
    }
}
