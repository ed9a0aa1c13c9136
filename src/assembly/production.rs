//! Production shapes

use tracing::debug;

use crate::db::NodeRecord;
use crate::error::StoreError;
use crate::graph::GraphStore;
use crate::model::{CreditKind, EdgeType, Lineage, Model, NodeLabel};
use crate::resolve::items::{linked_ref, material_item, production_item, venue_ref};
use crate::resolve::ordering::cmp_productions;
use crate::resolve::{resolve_ancestors, resolve_credits, resolve_nominee_awards, resolve_sub_entities};
use crate::views::{FestivalRef, ProductionItem, ProductionView, SubProductionItem};

use super::Shape;

/// Sub-production levels shown under a production.
const SUB_PRODUCTION_LEVELS: usize = 2;

/// Full production page.
pub fn detail<S: GraphStore + ?Sized>(store: &S, uuid: &str) -> Result<Option<ProductionView>, StoreError> {
    let Some(node) = store.node_labelled(uuid, NodeLabel::Production)? else {
        return Ok(None);
    };
    let shape = Shape::Detail;
    let reference = shape.reference_credit_depth();

    let material = match store
        .outgoing_to(uuid, EdgeType::ProductionOf, NodeLabel::Material)?
        .into_iter()
        .next()
    {
        Some(hop) => Some(material_item(store, &hop.node, shape.subject_credit_depth())?),
        None => None,
    };

    let view = ProductionView {
        model: Model::Production,
        uuid: node.uuid.clone(),
        name: node.name.clone(),
        subtitle: node.subtitle.clone(),
        start_date: node.start_date.clone(),
        press_date: node.press_date.clone(),
        end_date: node.end_date.clone(),
        material,
        venue: venue_ref(store, uuid)?,
        season: linked_ref(store, uuid, EdgeType::PartOfSeason, NodeLabel::Season)?,
        festival: festival_ref(store, uuid)?,
        sur_production: resolve_ancestors(store, uuid, Lineage::Production, shape.ancestor_tiers())?,
        sub_productions: sub_productions(store, uuid, SUB_PRODUCTION_LEVELS)?.unwrap_or_default(),
        producer_credits: resolve_credits(store, uuid, CreditKind::Producer, reference)?,
        creative_credits: resolve_credits(store, uuid, CreditKind::Creative, reference)?,
        crew_credits: resolve_credits(store, uuid, CreditKind::Crew, reference)?,
        awards: resolve_nominee_awards(store, &node)?,
    };

    debug!(
        uuid,
        sub_productions = view.sub_productions.len(),
        producer_credits = view.producer_credits.len(),
        "Assembled production"
    );

    Ok(Some(view))
}

/// Productions list, latest first.
pub fn list<S: GraphStore + ?Sized>(store: &S, limit: usize) -> Result<Vec<ProductionItem>, StoreError> {
    let mut nodes = store.nodes(NodeLabel::Production)?;
    nodes.sort_by(cmp_productions);
    nodes.truncate(limit);

    production_items(store, &nodes, Shape::List)
}

/// Productions as embedded in other pages, in the order given.
pub(crate) fn production_items<S: GraphStore + ?Sized>(
    store: &S,
    nodes: &[NodeRecord],
    shape: Shape,
) -> Result<Vec<ProductionItem>, StoreError> {
    nodes
        .iter()
        .map(|node| production_item(store, node, shape.ancestor_tiers()))
        .collect()
}

fn festival_ref<S: GraphStore + ?Sized>(store: &S, uuid: &str) -> Result<Option<FestivalRef>, StoreError> {
    let Some(festival) = store
        .outgoing_to(uuid, EdgeType::PartOfFestival, NodeLabel::Festival)?
        .into_iter()
        .next()
        .map(|hop| hop.node)
    else {
        return Ok(None);
    };

    Ok(Some(FestivalRef {
        model: Model::Festival,
        festival_series: linked_ref(store, &festival.uuid, EdgeType::PartOfFestivalSeries, NodeLabel::FestivalSeries)?,
        uuid: festival.uuid,
        name: festival.name,
    }))
}

/// Sub-productions down to `levels`; the last level omits its own field.
fn sub_productions<S: GraphStore + ?Sized>(
    store: &S,
    uuid: &str,
    levels: usize,
) -> Result<Option<Vec<SubProductionItem>>, StoreError> {
    if levels == 0 {
        return Ok(None);
    }

    let items = resolve_sub_entities(store, uuid, Lineage::Production)?
        .into_iter()
        .map(|sub| -> Result<_, StoreError> {
            Ok(SubProductionItem {
                model: Model::Production,
                venue: venue_ref(store, &sub.uuid)?,
                sub_productions: sub_productions(store, &sub.uuid, levels - 1)?,
                uuid: sub.uuid,
                name: sub.name,
                subtitle: sub.subtitle,
                start_date: sub.start_date,
                end_date: sub.end_date,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(items))
}
