//! Sur-entity chains and ordered sub-entities
//!
//! Containment is resolved to a fixed depth per lineage: each tier is one
//! explicit reverse lookup, and the first tier that finds nothing ends the chain.

use tracing::trace;

use crate::db::{Hop, NodeRecord};
use crate::error::StoreError;
use crate::graph::GraphStore;
use crate::model::Lineage;
use crate::resolve::ordering::sort_hops;
use crate::views::AncestorChain;

/// Resolve up to `tiers` containers above `uuid` (capped at the lineage maximum).
///
/// Returns `None` when the entity has no container. The deepest included level
/// carries `sur: None` whether the hierarchy ends there or was truncated.
pub fn resolve_ancestors<S: GraphStore + ?Sized>(
    store: &S,
    uuid: &str,
    lineage: Lineage,
    tiers: usize,
) -> Result<Option<AncestorChain>, StoreError> {
    let tiers = tiers.min(lineage.max_tiers());
    let mut levels: Vec<NodeRecord> = Vec::with_capacity(tiers);
    let mut current = uuid.to_string();

    for _ in 0..tiers {
        match immediate_container(store, &current, lineage)? {
            // A container pointing back at the entity is data corruption, not a tier
            Some(container) if container.uuid == uuid => break,
            Some(container) => {
                current = container.uuid.clone();
                levels.push(container);
            }
            None => break,
        }
    }

    trace!(uuid, ?lineage, resolved = levels.len(), "Resolved ancestor chain");

    Ok(levels.into_iter().rev().fold(None, |sur, node| {
        Some(AncestorChain {
            lineage,
            model: lineage.model(),
            uuid: node.uuid,
            name: node.name,
            sur: sur.map(Box::new),
        })
    }))
}

/// The entity's immediate container, if any.
pub fn immediate_container<S: GraphStore + ?Sized>(
    store: &S,
    uuid: &str,
    lineage: Lineage,
) -> Result<Option<NodeRecord>, StoreError> {
    Ok(store
        .incoming_from(uuid, lineage.edge_type(), lineage.label())?
        .into_iter()
        .next()
        .map(|hop| hop.node))
}

/// Immediate sub-entities ordered by containment `position`.
pub fn resolve_sub_entities<S: GraphStore + ?Sized>(
    store: &S,
    uuid: &str,
    lineage: Lineage,
) -> Result<Vec<NodeRecord>, StoreError> {
    let mut hops: Vec<Hop> = store.outgoing_to(uuid, lineage.edge_type(), lineage.label())?;
    sort_hops(&mut hops, |props| props.position);
    Ok(hops.into_iter().map(|hop| hop.node).collect())
}
