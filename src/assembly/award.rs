//! Award and award ceremony shapes

use crate::error::StoreError;
use crate::graph::GraphStore;
use crate::model::{EdgeType, Model, NodeLabel};
use crate::resolve::items::linked_ref;
use crate::resolve::ordering::{cmp_names, cmp_names_desc};
use crate::resolve::{resolve_award_ceremonies, resolve_ceremony_categories};
use crate::views::{AwardCeremonyListItem, AwardCeremonyView, AwardView, NamedItem};

/// Award page: ceremonies (name descending), categories, nominations.
pub fn detail<S: GraphStore + ?Sized>(store: &S, uuid: &str) -> Result<Option<AwardView>, StoreError> {
    let Some(node) = store.node_labelled(uuid, NodeLabel::Award)? else {
        return Ok(None);
    };

    Ok(Some(AwardView {
        model: Model::Award,
        ceremonies: resolve_award_ceremonies(store, uuid)?,
        uuid: node.uuid,
        name: node.name,
        differentiator: node.differentiator,
    }))
}

/// Awards list, alphabetical.
pub fn list<S: GraphStore + ?Sized>(store: &S, limit: usize) -> Result<Vec<NamedItem>, StoreError> {
    let mut nodes = store.nodes(NodeLabel::Award)?;
    nodes.sort_by(cmp_names);
    nodes.truncate(limit);
    Ok(nodes.iter().map(NamedItem::from).collect())
}

/// Ceremony page: its award and categories with nominations.
pub fn ceremony_detail<S: GraphStore + ?Sized>(
    store: &S,
    uuid: &str,
) -> Result<Option<AwardCeremonyView>, StoreError> {
    let Some(node) = store.node_labelled(uuid, NodeLabel::AwardCeremony)? else {
        return Ok(None);
    };

    Ok(Some(AwardCeremonyView {
        model: Model::AwardCeremony,
        award: linked_ref(store, uuid, EdgeType::PresentedAt, NodeLabel::Award)?,
        categories: resolve_ceremony_categories(store, uuid)?,
        uuid: node.uuid,
        name: node.name,
    }))
}

/// Ceremonies list, name descending, each with its award.
pub fn ceremony_list<S: GraphStore + ?Sized>(
    store: &S,
    limit: usize,
) -> Result<Vec<AwardCeremonyListItem>, StoreError> {
    let mut nodes = store.nodes(NodeLabel::AwardCeremony)?;
    nodes.sort_by(cmp_names_desc);
    nodes.truncate(limit);

    nodes
        .into_iter()
        .map(|node| -> Result<_, StoreError> {
            Ok(AwardCeremonyListItem {
                model: Model::AwardCeremony,
                award: linked_ref(store, &node.uuid, EdgeType::PresentedAt, NodeLabel::Award)?,
                uuid: node.uuid,
                name: node.name,
            })
        })
        .collect()
}
