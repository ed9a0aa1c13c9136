//! Shared fixture loading for integration tests

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::Value;
use theatrebase::db::import::import_graph;
use theatrebase::{Catalogue, GraphDb, GraphImport, NodeLabel, Services};

/// Load a `{nodes, edges}` fixture into a fresh in-memory database
pub fn load(fixture: Value) -> Arc<GraphDb> {
    let db = GraphDb::open_in_memory().unwrap();
    let import: GraphImport = serde_json::from_value(fixture).unwrap();
    let result = db.with_conn_mut(|conn| import_graph(conn, import)).unwrap();
    assert!(result.errors.is_empty(), "fixture failed to import: {:?}", result.errors);
    Arc::new(db)
}

pub fn catalogue(db: &Arc<GraphDb>) -> Catalogue {
    Catalogue::new(Services::new(db.clone(), 1000))
}

pub fn show(db: &Arc<GraphDb>, label: NodeLabel, uuid: &str) -> Value {
    catalogue(db).show(label, uuid).unwrap()
}

pub fn list(db: &Arc<GraphDb>, label: NodeLabel) -> Value {
    catalogue(db).list(label).unwrap()
}

/// `name` of every element of a JSON array
pub fn names(value: &Value) -> Vec<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap().to_string())
        .collect()
}

/// `uuid` of every element of a JSON array
pub fn uuids(value: &Value) -> Vec<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["uuid"].as_str().unwrap().to_string())
        .collect()
}
