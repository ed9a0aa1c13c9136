//! Database schema definitions and index provisioning

use rusqlite::Connection;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::StoreError;

/// Current schema version for migrations
pub const SCHEMA_VERSION: i32 = 1;

/// Initialize the database schema
pub fn init_schema(conn: &Connection) -> Result<(), StoreError> {
    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        info!("Creating new graph schema v{}", SCHEMA_VERSION);
        create_tables(conn)?;
        set_schema_version(conn, SCHEMA_VERSION)?;
    } else if current_version < SCHEMA_VERSION {
        info!("Migrating schema from v{} to v{}", current_version, SCHEMA_VERSION);
        migrate_schema(conn, current_version)?;
    } else {
        info!("Graph schema is up to date (v{})", current_version);
    }

    Ok(())
}

/// Get current schema version (0 if not initialized)
fn get_schema_version(conn: &Connection) -> Result<i32, StoreError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (version INTEGER NOT NULL)",
        [],
    )
    .map_err(|e| StoreError::Internal(format!("Failed to create schema_version table: {}", e)))?;

    match conn.query_row("SELECT version FROM schema_version LIMIT 1", [], |row| row.get(0)) {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        Err(e) => Err(StoreError::Internal(format!("Failed to read schema_version: {}", e))),
    }
}

fn set_schema_version(conn: &Connection, version: i32) -> Result<(), StoreError> {
    conn.execute("DELETE FROM schema_version", [])
        .map_err(|e| StoreError::Internal(format!("Failed to clear schema_version: {}", e)))?;
    conn.execute("INSERT INTO schema_version (version) VALUES (?)", [version])
        .map_err(|e| StoreError::Internal(format!("Failed to set schema_version: {}", e)))?;
    Ok(())
}

fn create_tables(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(GRAPH_SCHEMA)
        .map_err(|e| StoreError::Internal(format!("Failed to create graph tables: {}", e)))?;

    Ok(())
}

fn migrate_schema(conn: &Connection, from_version: i32) -> Result<(), StoreError> {
    info!(from_version, "No migration steps registered");
    set_schema_version(conn, SCHEMA_VERSION)?;
    Ok(())
}

/// Nodes and edges
const GRAPH_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS nodes (
    uuid TEXT PRIMARY KEY NOT NULL,
    label TEXT NOT NULL,
    name TEXT NOT NULL,
    differentiator TEXT,

    -- Production
    subtitle TEXT,
    start_date TEXT,
    press_date TEXT,
    end_date TEXT,

    -- Material
    format TEXT,
    year INTEGER
);

-- Ordering attributes live in properties_json (position, creditPosition, ...)
CREATE TABLE IF NOT EXISTS edges (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    edge_type TEXT NOT NULL,
    source_uuid TEXT NOT NULL,
    target_uuid TEXT NOT NULL,
    properties_json TEXT,

    FOREIGN KEY (source_uuid) REFERENCES nodes(uuid) ON DELETE CASCADE,
    FOREIGN KEY (target_uuid) REFERENCES nodes(uuid) ON DELETE CASCADE
);
"#;

/// Index statements, applied one at a time by `provision_indexes`.
pub const INDEX_STATEMENTS: &[(&str, &str)] = &[
    ("idx_nodes_label", "CREATE INDEX IF NOT EXISTS idx_nodes_label ON nodes(label)"),
    ("idx_nodes_label_name", "CREATE INDEX IF NOT EXISTS idx_nodes_label_name ON nodes(label, name)"),
    ("idx_edges_source", "CREATE INDEX IF NOT EXISTS idx_edges_source ON edges(source_uuid, edge_type)"),
    ("idx_edges_target", "CREATE INDEX IF NOT EXISTS idx_edges_target ON edges(target_uuid, edge_type)"),
    ("idx_edges_type", "CREATE INDEX IF NOT EXISTS idx_edges_type ON edges(edge_type)"),
];

/// Outcome of an index provisioning run
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProvisionReport {
    pub applied: Vec<String>,
    pub failed: Vec<String>,
}

/// Create the lookup indexes.
///
/// Statements run sequentially; a failing statement is logged and skipped so
/// the rest of the batch still applies. Every statement is idempotent.
pub fn provision_indexes(conn: &Connection) -> ProvisionReport {
    run_provisioning(conn, INDEX_STATEMENTS)
}

fn run_provisioning(conn: &Connection, statements: &[(&str, &str)]) -> ProvisionReport {
    let mut report = ProvisionReport::default();

    for (name, sql) in statements {
        match conn.execute_batch(sql) {
            Ok(()) => {
                info!(index = %name, "Index provisioned");
                report.applied.push(name.to_string());
            }
            Err(e) => {
                warn!(index = %name, error = %e, "Index provisioning failed, continuing");
                report.failed.push(name.to_string());
            }
        }
    }

    report
}
