//! Season, festival and festival series shapes

use crate::db::NodeRecord;
use crate::error::StoreError;
use crate::graph::GraphStore;
use crate::model::{EdgeType, Model, NodeLabel};
use crate::resolve::items::linked_ref;
use crate::resolve::ordering::{cmp_names, cmp_productions};
use crate::views::{EntityRef, FestivalSeriesView, FestivalView, NamedItem, ProductionItem, SeasonView};

use super::production::production_items;
use super::Shape;

fn productions_in<S: GraphStore + ?Sized>(
    store: &S,
    uuid: &str,
    edge_type: EdgeType,
) -> Result<Vec<ProductionItem>, StoreError> {
    let mut nodes: Vec<NodeRecord> = store
        .incoming_from(uuid, edge_type, NodeLabel::Production)?
        .into_iter()
        .map(|hop| hop.node)
        .collect();
    nodes.sort_by(cmp_productions);
    production_items(store, &nodes, Shape::Detail)
}

pub fn season_detail<S: GraphStore + ?Sized>(store: &S, uuid: &str) -> Result<Option<SeasonView>, StoreError> {
    let Some(node) = store.node_labelled(uuid, NodeLabel::Season)? else {
        return Ok(None);
    };

    Ok(Some(SeasonView {
        model: Model::Season,
        productions: productions_in(store, uuid, EdgeType::PartOfSeason)?,
        uuid: node.uuid,
        name: node.name,
        differentiator: node.differentiator,
    }))
}

pub fn festival_detail<S: GraphStore + ?Sized>(store: &S, uuid: &str) -> Result<Option<FestivalView>, StoreError> {
    let Some(node) = store.node_labelled(uuid, NodeLabel::Festival)? else {
        return Ok(None);
    };

    Ok(Some(FestivalView {
        model: Model::Festival,
        festival_series: linked_ref(store, uuid, EdgeType::PartOfFestivalSeries, NodeLabel::FestivalSeries)?,
        productions: productions_in(store, uuid, EdgeType::PartOfFestival)?,
        uuid: node.uuid,
        name: node.name,
        differentiator: node.differentiator,
    }))
}

pub fn festival_series_detail<S: GraphStore + ?Sized>(
    store: &S,
    uuid: &str,
) -> Result<Option<FestivalSeriesView>, StoreError> {
    let Some(node) = store.node_labelled(uuid, NodeLabel::FestivalSeries)? else {
        return Ok(None);
    };

    let mut festivals: Vec<NodeRecord> = store
        .incoming_from(uuid, EdgeType::PartOfFestivalSeries, NodeLabel::Festival)?
        .into_iter()
        .map(|hop| hop.node)
        .collect();
    festivals.sort_by(cmp_names);

    Ok(Some(FestivalSeriesView {
        model: Model::FestivalSeries,
        uuid: node.uuid,
        name: node.name,
        differentiator: node.differentiator,
        festivals: festivals.iter().map(EntityRef::from).collect(),
    }))
}

/// Alphabetical list of seasons, festivals or festival series.
pub fn list<S: GraphStore + ?Sized>(
    store: &S,
    label: NodeLabel,
    limit: usize,
) -> Result<Vec<NamedItem>, StoreError> {
    if !matches!(label, NodeLabel::Season | NodeLabel::Festival | NodeLabel::FestivalSeries) {
        return Err(StoreError::InvalidInput(format!("{} is not a season or festival type", label)));
    }
    let mut nodes = store.nodes(label)?;
    nodes.sort_by(cmp_names);
    nodes.truncate(limit);
    Ok(nodes.iter().map(NamedItem::from).collect())
}
