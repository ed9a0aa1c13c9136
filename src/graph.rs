//! Graph store seam
//!
//! The resolvers only need three primitives from a property graph: node lookup,
//! label scans and single-hop typed traversal in either direction. Absence is
//! `Ok(None)` / an empty vec; store failures surface as `Err` and are never retried.

use rusqlite::Connection;

use crate::db::edges::{self, Direction, Hop};
use crate::db::nodes::{self, NodeRecord};
use crate::error::StoreError;
use crate::model::{EdgeType, NodeLabel};

/// Read-only traversal contract the resolution engine runs against.
pub trait GraphStore {
    /// Look up a single node
    fn node(&self, uuid: &str) -> Result<Option<NodeRecord>, StoreError>;

    /// All nodes carrying `label`
    fn nodes(&self, label: NodeLabel) -> Result<Vec<NodeRecord>, StoreError>;

    /// Follow `edge_type` edges out of `uuid`
    fn outgoing(&self, uuid: &str, edge_type: EdgeType) -> Result<Vec<Hop>, StoreError>;

    /// Follow `edge_type` edges into `uuid`
    fn incoming(&self, uuid: &str, edge_type: EdgeType) -> Result<Vec<Hop>, StoreError>;

    /// Look up a node, requiring a particular label
    fn node_labelled(&self, uuid: &str, label: NodeLabel) -> Result<Option<NodeRecord>, StoreError> {
        Ok(self.node(uuid)?.filter(|node| node.is(label)))
    }

    /// Outgoing hops whose far end carries `label`
    fn outgoing_to(
        &self,
        uuid: &str,
        edge_type: EdgeType,
        label: NodeLabel,
    ) -> Result<Vec<Hop>, StoreError> {
        Ok(self
            .outgoing(uuid, edge_type)?
            .into_iter()
            .filter(|hop| hop.node.is(label))
            .collect())
    }

    /// Incoming hops whose near end carries `label`
    fn incoming_from(
        &self,
        uuid: &str,
        edge_type: EdgeType,
        label: NodeLabel,
    ) -> Result<Vec<Hop>, StoreError> {
        Ok(self
            .incoming(uuid, edge_type)?
            .into_iter()
            .filter(|hop| hop.node.is(label))
            .collect())
    }
}

impl GraphStore for Connection {
    fn node(&self, uuid: &str) -> Result<Option<NodeRecord>, StoreError> {
        nodes::get_node(self, uuid)
    }

    fn nodes(&self, label: NodeLabel) -> Result<Vec<NodeRecord>, StoreError> {
        nodes::list_nodes(self, label)
    }

    fn outgoing(&self, uuid: &str, edge_type: EdgeType) -> Result<Vec<Hop>, StoreError> {
        edges::traverse(self, uuid, edge_type, Direction::Outgoing)
    }

    fn incoming(&self, uuid: &str, edge_type: EdgeType) -> Result<Vec<Hop>, StoreError> {
        edges::traverse(self, uuid, edge_type, Direction::Incoming)
    }
}
