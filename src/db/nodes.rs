//! Node rows

use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::model::NodeLabel;

/// Node row from database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub uuid: String,
    pub label: NodeLabel,
    pub name: String,
    pub differentiator: Option<String>,
    pub subtitle: Option<String>,
    pub format: Option<String>,
    pub year: Option<i64>,
    pub start_date: Option<String>,
    pub press_date: Option<String>,
    pub end_date: Option<String>,
}

/// Column list shared by every node query, optionally table-qualified.
pub(crate) fn node_columns(alias: &str) -> String {
    [
        "uuid",
        "label",
        "name",
        "differentiator",
        "subtitle",
        "format",
        "year",
        "start_date",
        "press_date",
        "end_date",
    ]
    .iter()
    .map(|column| format!("{}.{} AS n_{}", alias, column, column))
    .collect::<Vec<_>>()
    .join(", ")
}

impl NodeRecord {
    pub(crate) fn from_row(row: &Row) -> Result<Self, rusqlite::Error> {
        let label: String = row.get("n_label")?;
        let label = label.parse::<NodeLabel>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                1,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })?;

        Ok(Self {
            uuid: row.get("n_uuid")?,
            label,
            name: row.get("n_name")?,
            differentiator: row.get("n_differentiator")?,
            subtitle: row.get("n_subtitle")?,
            format: row.get("n_format")?,
            year: row.get("n_year")?,
            start_date: row.get("n_start_date")?,
            press_date: row.get("n_press_date")?,
            end_date: row.get("n_end_date")?,
        })
    }

    pub fn is(&self, label: NodeLabel) -> bool {
        self.label == label
    }
}

/// Input for creating a node
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNodeInput {
    #[serde(default)]
    pub uuid: Option<String>,
    pub label: NodeLabel,
    pub name: String,
    #[serde(default)]
    pub differentiator: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub year: Option<i64>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub press_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Get a node by uuid
pub fn get_node(conn: &Connection, uuid: &str) -> Result<Option<NodeRecord>, StoreError> {
    let sql = format!("SELECT {} FROM nodes n WHERE n.uuid = ?", node_columns("n"));

    conn.query_row(&sql, params![uuid], NodeRecord::from_row)
        .optional()
        .map_err(|e| StoreError::Internal(format!("Failed to get node: {}", e)))
}

/// List nodes carrying a label, in insertion order
pub fn list_nodes(conn: &Connection, label: NodeLabel) -> Result<Vec<NodeRecord>, StoreError> {
    let sql = format!(
        "SELECT {} FROM nodes n WHERE n.label = ? ORDER BY n.rowid",
        node_columns("n")
    );

    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| StoreError::Internal(format!("Failed to prepare statement: {}", e)))?;

    let rows = stmt
        .query_map(params![label.as_str()], NodeRecord::from_row)
        .map_err(|e| StoreError::Internal(format!("Failed to query nodes: {}", e)))?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row.map_err(|e| StoreError::Internal(format!("Failed to read row: {}", e)))?);
    }

    Ok(results)
}

/// Insert a node, returning its uuid
pub fn create_node(conn: &Connection, input: &CreateNodeInput) -> Result<String, StoreError> {
    let uuid = input
        .uuid
        .clone()
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    conn.execute(
        "INSERT INTO nodes (uuid, label, name, differentiator, subtitle, format, year,
                            start_date, press_date, end_date)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        params![
            uuid,
            input.label.as_str(),
            input.name,
            input.differentiator,
            input.subtitle,
            input.format,
            input.year,
            input.start_date,
            input.press_date,
            input.end_date,
        ],
    )
    .map_err(|e| StoreError::Internal(format!("Failed to create node: {}", e)))?;

    Ok(uuid)
}

/// Count nodes per label
pub fn count_by_label(conn: &Connection) -> Result<Vec<(String, i64)>, StoreError> {
    let mut stmt = conn
        .prepare("SELECT label, COUNT(*) FROM nodes GROUP BY label ORDER BY label")
        .map_err(|e| StoreError::Internal(format!("Failed to prepare statement: {}", e)))?;

    let rows = stmt
        .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))
        .map_err(|e| StoreError::Internal(format!("Failed to count nodes: {}", e)))?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row.map_err(|e| StoreError::Internal(format!("Failed to read row: {}", e)))?);
    }

    Ok(results)
}
