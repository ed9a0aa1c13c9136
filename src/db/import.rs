//! Bulk graph import for seeding and fixtures

use chrono::NaiveDate;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::db::edges::{self, CreateEdgeInput};
use crate::db::nodes::{self, CreateNodeInput};
use crate::error::StoreError;

/// A batch of nodes and edges to load
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphImport {
    #[serde(default)]
    pub nodes: Vec<CreateNodeInput>,
    #[serde(default)]
    pub edges: Vec<CreateEdgeInput>,
}

/// Result of a bulk import
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportResult {
    pub nodes_created: usize,
    pub edges_created: usize,
    pub errors: Vec<String>,
}

/// Insert all nodes, then all edges, in one transaction.
///
/// Items that fail are reported in `errors` and skipped; the rest commit.
pub fn import_graph(conn: &mut Connection, import: GraphImport) -> Result<ImportResult, StoreError> {
    let tx = conn
        .transaction()
        .map_err(|e| StoreError::Internal(format!("Failed to start transaction: {}", e)))?;

    let mut result = ImportResult::default();

    for input in &import.nodes {
        let outcome = validate_node(input).and_then(|_| nodes::create_node(&tx, input));
        match outcome {
            Ok(_) => result.nodes_created += 1,
            Err(e) => result.errors.push(format!("node {}: {}", input.name, e)),
        }
    }

    for input in &import.edges {
        match edges::create_edge(&tx, input) {
            Ok(_) => result.edges_created += 1,
            Err(e) => result.errors.push(format!(
                "{} {}→{}: {}",
                input.edge_type, input.source, input.target, e
            )),
        }
    }

    tx.commit()
        .map_err(|e| StoreError::Internal(format!("Failed to commit transaction: {}", e)))?;

    if result.errors.is_empty() {
        info!(
            nodes = result.nodes_created,
            edges = result.edges_created,
            "Graph import complete"
        );
    } else {
        warn!(
            nodes = result.nodes_created,
            edges = result.edges_created,
            errors = result.errors.len(),
            "Graph import completed with errors"
        );
    }

    Ok(result)
}

fn validate_node(input: &CreateNodeInput) -> Result<(), StoreError> {
    if input.name.trim().is_empty() {
        return Err(StoreError::InvalidInput("name is required".into()));
    }

    for (field, value) in [
        ("startDate", &input.start_date),
        ("pressDate", &input.press_date),
        ("endDate", &input.end_date),
    ] {
        if let Some(date) = value {
            NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
                StoreError::InvalidInput(format!("{} '{}' is not a YYYY-MM-DD date: {}", field, date, e))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::GraphDb;
    use crate::model::NodeLabel;

    #[test]
    fn test_import_skips_invalid_items() {
        let db = GraphDb::open_in_memory().unwrap();
        let import: GraphImport = serde_json::from_value(serde_json::json!({
            "nodes": [
                { "uuid": "p1", "label": "Production", "name": "Hamlet", "startDate": "2019-02-01" },
                { "uuid": "p2", "label": "Production", "name": "Othello", "startDate": "1st May" },
                { "uuid": "v1", "label": "Venue", "name": "Almeida Theatre" }
            ],
            "edges": [
                { "edgeType": "PLAYS_AT", "source": "p1", "target": "v1" },
                { "edgeType": "PLAYS_AT", "source": "p2", "target": "v1" }
            ]
        }))
        .unwrap();

        let result = db.with_conn_mut(|conn| import_graph(conn, import)).unwrap();

        assert_eq!(result.nodes_created, 2);
        assert_eq!(result.edges_created, 1);
        assert_eq!(result.errors.len(), 2);

        let venues = db.with_conn(|conn| nodes::list_nodes(conn, NodeLabel::Venue)).unwrap();
        assert_eq!(venues.len(), 1);
    }

    #[test]
    fn test_import_generates_missing_uuid() {
        let db = GraphDb::open_in_memory().unwrap();
        let import: GraphImport = serde_json::from_value(serde_json::json!({
            "nodes": [{ "label": "Person", "name": "Hilary Mantel" }]
        }))
        .unwrap();

        db.with_conn_mut(|conn| import_graph(conn, import)).unwrap();

        let people = db.with_conn(|conn| nodes::list_nodes(conn, NodeLabel::Person)).unwrap();
        assert_eq!(people.len(), 1);
        assert_eq!(people[0].uuid.len(), 36);
    }
}
