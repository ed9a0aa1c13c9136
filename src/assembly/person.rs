//! Person and Company shapes
//!
//! Both pages are built from the entity's perspective: the credits shown on
//! each production are only those the entity takes part in, and the other
//! entities in those credits appear as `coEntities`.

use std::collections::HashSet;

use tracing::debug;

use crate::db::NodeRecord;
use crate::error::StoreError;
use crate::graph::GraphStore;
use crate::model::{CreditKind, NodeLabel};
use crate::resolve::items::{production_item, sourcing_materials, subsequent_versions, written_materials};
use crate::resolve::ordering::{cmp_names, cmp_productions, dedupe_nodes};
use crate::resolve::{resolve_nominee_awards, resolve_perspective_credits, resolve_subsequent_version_awards};
use crate::views::{CreditedEntityView, CreditedProductionItem, NamedItem};

use super::material::material_items;
use super::Shape;

fn is_credited_entity(label: NodeLabel) -> bool {
    matches!(label, NodeLabel::Person | NodeLabel::Company)
}

/// Full page of a Person or Company.
pub fn detail<S: GraphStore + ?Sized>(
    store: &S,
    uuid: &str,
    label: NodeLabel,
) -> Result<Option<CreditedEntityView>, StoreError> {
    if !is_credited_entity(label) {
        return Err(StoreError::InvalidInput(format!(
            "{} is not a credited entity type",
            label
        )));
    }
    let Some(node) = store.node_labelled(uuid, label)? else {
        return Ok(None);
    };
    let shape = Shape::Detail;

    let written = written_materials(store, uuid)?;
    let written_uuids: HashSet<&str> = written.iter().map(|m| m.uuid.as_str()).collect();

    let later_versions: Vec<NodeRecord> = subsequent_versions(store, &written)?
        .into_iter()
        .filter(|m| !written_uuids.contains(m.uuid.as_str()))
        .collect();
    let sourcing: Vec<NodeRecord> = sourcing_materials(store, &written)?
        .into_iter()
        .filter(|m| !written_uuids.contains(m.uuid.as_str()))
        .collect();

    let view = CreditedEntityView {
        model: label.model(),
        uuid: node.uuid.clone(),
        name: node.name.clone(),
        differentiator: node.differentiator.clone(),
        materials: material_items(store, written.clone(), shape)?,
        subsequent_version_materials: material_items(store, later_versions, shape)?,
        sourcing_materials: material_items(store, sourcing, shape)?,
        producer_productions: credited_productions(store, &node, CreditKind::Producer, shape)?,
        creative_productions: credited_productions(store, &node, CreditKind::Creative, shape)?,
        crew_productions: credited_productions(store, &node, CreditKind::Crew, shape)?,
        awards: resolve_nominee_awards(store, &node)?,
        subsequent_version_material_awards: resolve_subsequent_version_awards(store, &node)?,
    };

    debug!(
        uuid,
        model = %view.model,
        materials = view.materials.len(),
        producer_productions = view.producer_productions.len(),
        "Assembled credited entity"
    );

    Ok(Some(view))
}

/// People or companies, alphabetical.
pub fn list<S: GraphStore + ?Sized>(
    store: &S,
    label: NodeLabel,
    limit: usize,
) -> Result<Vec<NamedItem>, StoreError> {
    if !is_credited_entity(label) {
        return Err(StoreError::InvalidInput(format!(
            "{} is not a credited entity type",
            label
        )));
    }
    let mut nodes = store.nodes(label)?;
    nodes.sort_by(cmp_names);
    nodes.truncate(limit);
    Ok(nodes.iter().map(NamedItem::from).collect())
}

/// Productions crediting `entity` under `kind`, each carrying only the
/// credits the entity takes part in.
fn credited_productions<S: GraphStore + ?Sized>(
    store: &S,
    entity: &NodeRecord,
    kind: CreditKind,
    shape: Shape,
) -> Result<Vec<CreditedProductionItem>, StoreError> {
    let productions: Vec<NodeRecord> = store
        .incoming_from(&entity.uuid, kind.edge_type(), NodeLabel::Production)?
        .into_iter()
        .map(|hop| hop.node)
        .collect();
    let mut productions = dedupe_nodes(productions);
    productions.sort_by(cmp_productions);

    productions
        .iter()
        .map(|production| -> Result<_, StoreError> {
            let credits = Some(resolve_perspective_credits(store, &production.uuid, kind, entity)?);
            let mut item = CreditedProductionItem {
                production: production_item(store, production, shape.ancestor_tiers())?,
                producer_credits: None,
                creative_credits: None,
                crew_credits: None,
            };
            match kind {
                CreditKind::Producer => item.producer_credits = credits,
                CreditKind::Creative => item.creative_credits = credits,
                CreditKind::Crew => item.crew_credits = credits,
                CreditKind::Writing => {}
            }
            Ok(item)
        })
        .collect()
}
