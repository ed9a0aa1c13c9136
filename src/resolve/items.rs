//! Referenced productions, venues and materials
//!
//! The small records every view embeds when it points at another production
//! or material.

use crate::db::NodeRecord;
use crate::error::StoreError;
use crate::graph::GraphStore;
use crate::model::{CreditKind, EdgeType, Lineage, Model, NodeLabel};
use crate::resolve::ancestors::resolve_ancestors;
use crate::resolve::credits::{resolve_credits, CreditDepth};
use crate::resolve::ordering::dedupe_nodes;
use crate::views::{EntityRef, MaterialItem, ProductionItem, VenueRef};

/// The venue a production plays at, with its sur-venue.
pub fn venue_ref<S: GraphStore + ?Sized>(
    store: &S,
    production_uuid: &str,
) -> Result<Option<VenueRef>, StoreError> {
    let venue = store
        .outgoing_to(production_uuid, EdgeType::PlaysAt, NodeLabel::Venue)?
        .into_iter()
        .next()
        .map(|hop| hop.node);

    match venue {
        Some(venue) => Ok(Some(VenueRef {
            model: Model::Venue,
            sur_venue: resolve_ancestors(store, &venue.uuid, Lineage::Venue, Lineage::Venue.max_tiers())?,
            uuid: venue.uuid,
            name: venue.name,
        })),
        None => Ok(None),
    }
}

/// A production with its venue and up to `tiers` sur-productions.
pub fn production_item<S: GraphStore + ?Sized>(
    store: &S,
    node: &NodeRecord,
    tiers: usize,
) -> Result<ProductionItem, StoreError> {
    Ok(ProductionItem {
        model: Model::Production,
        uuid: node.uuid.clone(),
        name: node.name.clone(),
        subtitle: node.subtitle.clone(),
        start_date: node.start_date.clone(),
        end_date: node.end_date.clone(),
        venue: venue_ref(store, &node.uuid)?,
        sur_production: resolve_ancestors(store, &node.uuid, Lineage::Production, tiers)?,
    })
}

/// A material with its sur-materials and writing credits.
pub fn material_item<S: GraphStore + ?Sized>(
    store: &S,
    node: &NodeRecord,
    depth: CreditDepth,
) -> Result<MaterialItem, StoreError> {
    Ok(MaterialItem {
        model: Model::Material,
        uuid: node.uuid.clone(),
        name: node.name.clone(),
        format: node.format.clone(),
        year: node.year,
        sur_material: resolve_ancestors(store, &node.uuid, Lineage::Material, depth.ancestor_tiers)?,
        writing_credits: resolve_credits(store, &node.uuid, CreditKind::Writing, depth)?,
    })
}

/// First node reached over `edge_type` carrying `label`, as an identity ref.
pub fn linked_ref<S: GraphStore + ?Sized>(
    store: &S,
    uuid: &str,
    edge_type: EdgeType,
    label: NodeLabel,
) -> Result<Option<EntityRef>, StoreError> {
    Ok(store
        .outgoing_to(uuid, edge_type, label)?
        .first()
        .map(|hop| EntityRef::from(&hop.node)))
}

/// Materials crediting `uuid` as a writing entity, directly or as a member.
pub fn written_materials<S: GraphStore + ?Sized>(
    store: &S,
    uuid: &str,
) -> Result<Vec<NodeRecord>, StoreError> {
    let materials = store
        .incoming_from(uuid, EdgeType::HasWritingEntity, NodeLabel::Material)?
        .into_iter()
        .map(|hop| hop.node)
        .collect();
    Ok(dedupe_nodes(materials))
}

/// Later versions of each of `originals`, first-seen order.
pub fn subsequent_versions<S: GraphStore + ?Sized>(
    store: &S,
    originals: &[NodeRecord],
) -> Result<Vec<NodeRecord>, StoreError> {
    let mut versions = Vec::new();
    for original in originals {
        versions.extend(
            store
                .incoming_from(&original.uuid, EdgeType::SubsequentVersionOf, NodeLabel::Material)?
                .into_iter()
                .map(|hop| hop.node),
        );
    }
    Ok(dedupe_nodes(versions))
}

/// Materials drawing on each of `sources`, through a source-material writing
/// credit or a `USES_SOURCE_MATERIAL` edge.
pub fn sourcing_materials<S: GraphStore + ?Sized>(
    store: &S,
    sources: &[NodeRecord],
) -> Result<Vec<NodeRecord>, StoreError> {
    let mut sourcing = Vec::new();
    for source in sources {
        for edge_type in [EdgeType::HasWritingEntity, EdgeType::UsesSourceMaterial] {
            sourcing.extend(
                store
                    .incoming_from(&source.uuid, edge_type, NodeLabel::Material)?
                    .into_iter()
                    .map(|hop| hop.node),
            );
        }
    }
    Ok(dedupe_nodes(sourcing))
}
