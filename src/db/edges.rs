//! Edge rows and single-hop traversal queries
//!
//! Edges carry their ordering attributes in `properties_json`; the traversal
//! queries join the far endpoint so one statement yields `(edge, node)` hops.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::nodes::{node_columns, NodeRecord};
use crate::error::StoreError;
use crate::model::EdgeType;

/// Ordering and credit attributes carried by an edge.
///
/// Every field is optional; which ones are meaningful depends on the edge type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    // Credit edges
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_position: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_position: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_position: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credited_company_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub credited_member_uuids: Vec<String>,

    // Nomination edges
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nomination_position: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_position: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_position: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_winner: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nominated_company_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nominated_member_uuids: Vec<String>,

    // Character depictions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_position: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_position: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<String>,
}

/// Edge row from database
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord {
    pub id: i64,
    pub edge_type: EdgeType,
    pub source_uuid: String,
    pub target_uuid: String,
    pub props: EdgeProps,
}

impl EdgeRecord {
    fn from_row(row: &Row) -> Result<Self, rusqlite::Error> {
        let edge_type: String = row.get("e_edge_type")?;
        let edge_type = edge_type.parse::<EdgeType>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
        })?;

        let props_json: Option<String> = row.get("e_properties_json")?;
        let props = match props_json {
            Some(json) => serde_json::from_str(&json).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
            })?,
            None => EdgeProps::default(),
        };

        Ok(Self {
            id: row.get("e_id")?,
            edge_type,
            source_uuid: row.get("e_source_uuid")?,
            target_uuid: row.get("e_target_uuid")?,
            props,
        })
    }
}

/// One traversal step: the edge followed and the node at its far end.
#[derive(Debug, Clone, PartialEq)]
pub struct Hop {
    pub edge: EdgeRecord,
    pub node: NodeRecord,
}

/// Input for creating an edge
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEdgeInput {
    pub edge_type: EdgeType,
    pub source: String,
    pub target: String,
    #[serde(flatten)]
    pub props: EdgeProps,
}

/// Direction of a single-hop traversal relative to the anchor node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Outgoing,
    Incoming,
}

/// Insert an edge, returning its id
pub fn create_edge(conn: &Connection, input: &CreateEdgeInput) -> Result<i64, StoreError> {
    let props_json = serde_json::to_string(&input.props)?;

    conn.execute(
        "INSERT INTO edges (edge_type, source_uuid, target_uuid, properties_json)
         VALUES (?, ?, ?, ?)",
        params![input.edge_type.as_str(), input.source, input.target, props_json],
    )
    .map_err(|e| StoreError::Internal(format!("Failed to create edge: {}", e)))?;

    Ok(conn.last_insert_rowid())
}

/// Follow every `edge_type` edge touching `uuid` in the given direction.
///
/// Rows come back in insertion order; callers impose their own sort keys.
pub fn traverse(
    conn: &Connection,
    uuid: &str,
    edge_type: EdgeType,
    direction: Direction,
) -> Result<Vec<Hop>, StoreError> {
    let (anchor, far) = match direction {
        Direction::Outgoing => ("source_uuid", "target_uuid"),
        Direction::Incoming => ("target_uuid", "source_uuid"),
    };

    let sql = format!(
        "SELECT e.id AS e_id, e.edge_type AS e_edge_type, e.source_uuid AS e_source_uuid,
                e.target_uuid AS e_target_uuid, e.properties_json AS e_properties_json, {}
         FROM edges e
         JOIN nodes n ON n.uuid = e.{}
         WHERE e.{} = ? AND e.edge_type = ?
         ORDER BY e.id",
        node_columns("n"),
        far,
        anchor
    );

    let mut stmt = conn
        .prepare_cached(&sql)
        .map_err(|e| StoreError::Internal(format!("Failed to prepare statement: {}", e)))?;

    let rows = stmt
        .query_map(params![uuid, edge_type.as_str()], |row| {
            Ok(Hop {
                edge: EdgeRecord::from_row(row)?,
                node: NodeRecord::from_row(row)?,
            })
        })
        .map_err(|e| StoreError::Internal(format!("Failed to traverse {}: {}", edge_type, e)))?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row.map_err(|e| StoreError::Internal(format!("Failed to read row: {}", e)))?);
    }

    Ok(results)
}

/// Count edges per type
pub fn count_by_type(conn: &Connection) -> Result<Vec<(String, i64)>, StoreError> {
    let mut stmt = conn
        .prepare("SELECT edge_type, COUNT(*) FROM edges GROUP BY edge_type ORDER BY edge_type")
        .map_err(|e| StoreError::Internal(format!("Failed to prepare statement: {}", e)))?;

    let rows = stmt
        .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))
        .map_err(|e| StoreError::Internal(format!("Failed to count edges: {}", e)))?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row.map_err(|e| StoreError::Internal(format!("Failed to read row: {}", e)))?);
    }

    Ok(results)
}
