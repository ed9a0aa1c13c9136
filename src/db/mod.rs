//! SQLite-backed property graph
//!
//! ## Tables
//!
//! - `nodes` - typed nodes (label, uuid, name and per-label attributes)
//! - `edges` - directed typed edges; ordering attributes in `properties_json`
//!
//! The resolution engine only ever reads through [`crate::graph::GraphStore`];
//! the write helpers here exist for seeding and fixtures.

pub mod schema;
pub mod nodes;
pub mod edges;
pub mod import;

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;
use tracing::{debug, info};

use crate::error::StoreError;

/// SQLite database holding the catalogue graph
pub struct GraphDb {
    conn: Mutex<Connection>,
}

impl GraphDb {
    /// Open or create the graph database at `db_path`
    pub fn open(db_path: &Path) -> Result<Self, StoreError> {
        info!("Opening graph database at {:?}", db_path);

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)
            .map_err(|e| StoreError::Internal(format!("Failed to open SQLite: {}", e)))?;

        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL; PRAGMA foreign_keys=ON;")
            .map_err(|e| StoreError::Internal(format!("Failed to set PRAGMA: {}", e)))?;

        let db = Self {
            conn: Mutex::new(conn),
        };

        db.init_schema()?;

        Ok(db)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self, StoreError> {
        debug!("Opening in-memory graph database");

        let conn = Connection::open_in_memory()
            .map_err(|e| StoreError::Internal(format!("Failed to open in-memory SQLite: {}", e)))?;

        conn.execute_batch("PRAGMA foreign_keys=ON;")
            .map_err(|e| StoreError::Internal(format!("Failed to set PRAGMA: {}", e)))?;

        let db = Self {
            conn: Mutex::new(conn),
        };

        db.init_schema()?;

        Ok(db)
    }

    fn init_schema(&self) -> Result<(), StoreError> {
        self.with_conn(schema::init_schema)
    }

    /// Run `f` against the connection.
    ///
    /// A whole composed resolution runs inside one call, so a request sees a
    /// single consistent read of the store.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Connection) -> Result<T, StoreError>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StoreError::Internal(format!("Lock poisoned: {}", e)))?;
        f(&conn)
    }

    /// Execute a write operation with exclusive access
    pub fn with_conn_mut<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Connection) -> Result<T, StoreError>,
    {
        let mut conn = self
            .conn
            .lock()
            .map_err(|e| StoreError::Internal(format!("Lock poisoned: {}", e)))?;
        f(&mut conn)
    }

    /// Create lookup indexes (see [`schema::provision_indexes`])
    pub fn provision_indexes(&self) -> Result<schema::ProvisionReport, StoreError> {
        self.with_conn(|conn| Ok(schema::provision_indexes(conn)))
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<DbStats, StoreError> {
        self.with_conn(|conn| {
            let nodes_by_label = nodes::count_by_label(conn)?;
            let edges_by_type = edges::count_by_type(conn)?;

            Ok(DbStats {
                node_count: nodes_by_label.iter().map(|(_, n)| *n as u64).sum(),
                edge_count: edges_by_type.iter().map(|(_, n)| *n as u64).sum(),
                nodes_by_label,
                edges_by_type,
            })
        })
    }
}

/// Database statistics
#[derive(Debug, Clone, serde::Serialize)]
pub struct DbStats {
    pub node_count: u64,
    pub edge_count: u64,
    pub nodes_by_label: Vec<(String, i64)>,
    pub edges_by_type: Vec<(String, i64)>,
}

// Re-exports
pub use edges::{CreateEdgeInput, Direction, EdgeProps, EdgeRecord, Hop};
pub use import::{GraphImport, ImportResult};
pub use nodes::{CreateNodeInput, NodeRecord};
