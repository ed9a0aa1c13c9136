//! Venue shapes

use crate::db::NodeRecord;
use crate::error::StoreError;
use crate::graph::GraphStore;
use crate::model::{EdgeType, Lineage, Model, NodeLabel};
use crate::resolve::ordering::{cmp_names, cmp_productions};
use crate::resolve::{resolve_ancestors, resolve_sub_entities};
use crate::views::{EntityRef, VenueListItem, VenueProductionItem, VenueView};

use super::Shape;

/// Full venue page: productions at the venue and at any of its sub-venues.
pub fn detail<S: GraphStore + ?Sized>(store: &S, uuid: &str) -> Result<Option<VenueView>, StoreError> {
    let Some(node) = store.node_labelled(uuid, NodeLabel::Venue)? else {
        return Ok(None);
    };
    let shape = Shape::Detail;

    let sub_venues = resolve_sub_entities(store, uuid, Lineage::Venue)?;

    let mut staged: Vec<(NodeRecord, Option<EntityRef>)> = productions_at(store, uuid)?
        .into_iter()
        .map(|production| (production, None))
        .collect();
    for sub_venue in &sub_venues {
        staged.extend(
            productions_at(store, &sub_venue.uuid)?
                .into_iter()
                .map(|production| (production, Some(EntityRef::from(sub_venue)))),
        );
    }
    staged.sort_by(|a, b| cmp_productions(&a.0, &b.0));

    let productions = staged
        .into_iter()
        .map(|(production, sub_venue)| -> Result<_, StoreError> {
            Ok(VenueProductionItem {
                model: Model::Production,
                sur_production: resolve_ancestors(
                    store,
                    &production.uuid,
                    Lineage::Production,
                    shape.ancestor_tiers(),
                )?,
                uuid: production.uuid,
                name: production.name,
                subtitle: production.subtitle,
                start_date: production.start_date,
                end_date: production.end_date,
                sub_venue,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(VenueView {
        model: Model::Venue,
        sur_venue: resolve_ancestors(store, uuid, Lineage::Venue, shape.ancestor_tiers())?,
        sub_venues: sub_venues.iter().map(EntityRef::from).collect(),
        uuid: node.uuid,
        name: node.name,
        differentiator: node.differentiator,
        productions,
    }))
}

/// Venues list, alphabetical, each with its sur-venue and sub-venues.
pub fn list<S: GraphStore + ?Sized>(store: &S, limit: usize) -> Result<Vec<VenueListItem>, StoreError> {
    let mut nodes = store.nodes(NodeLabel::Venue)?;
    nodes.sort_by(cmp_names);
    nodes.truncate(limit);

    nodes
        .into_iter()
        .map(|node| -> Result<_, StoreError> {
            Ok(VenueListItem {
                model: Model::Venue,
                sur_venue: resolve_ancestors(store, &node.uuid, Lineage::Venue, Shape::List.ancestor_tiers())?,
                sub_venues: resolve_sub_entities(store, &node.uuid, Lineage::Venue)?
                    .iter()
                    .map(EntityRef::from)
                    .collect(),
                uuid: node.uuid,
                name: node.name,
            })
        })
        .collect()
}

fn productions_at<S: GraphStore + ?Sized>(store: &S, venue_uuid: &str) -> Result<Vec<NodeRecord>, StoreError> {
    Ok(store
        .incoming_from(venue_uuid, EdgeType::PlaysAt, NodeLabel::Production)?
        .into_iter()
        .map(|hop| hop.node)
        .collect())
}
