//! Character shapes

use crate::db::{Hop, NodeRecord};
use crate::error::StoreError;
use crate::graph::GraphStore;
use crate::model::{EdgeType, Model, NodeLabel};
use crate::resolve::items::material_item;
use crate::resolve::ordering::{cmp_materials, cmp_names};
use crate::views::{CharacterMaterialItem, CharacterView, DepictionView, NamedItem};

use super::Shape;

/// Character page: every material depicting the character, with how it does.
pub fn detail<S: GraphStore + ?Sized>(store: &S, uuid: &str) -> Result<Option<CharacterView>, StoreError> {
    let Some(node) = store.node_labelled(uuid, NodeLabel::Character)? else {
        return Ok(None);
    };
    let shape = Shape::Detail;

    let hops = store.incoming_from(uuid, EdgeType::HasCharacter, NodeLabel::Material)?;

    // One entry per material; a material may depict the character more than once
    let mut depicted: Vec<(NodeRecord, Vec<DepictionView>)> = Vec::new();
    for Hop { edge, node: material } in hops {
        let depiction = DepictionView {
            display_name: edge.props.display_name,
            qualifier: edge.props.qualifier,
            group: edge.props.group,
        };
        match depicted.iter_mut().find(|(m, _)| m.uuid == material.uuid) {
            Some((_, depictions)) => depictions.push(depiction),
            None => depicted.push((material, vec![depiction])),
        }
    }
    depicted.sort_by(|a, b| cmp_materials(&a.0, &b.0));

    let materials = depicted
        .into_iter()
        .map(|(material, depictions)| -> Result<_, StoreError> {
            Ok(CharacterMaterialItem {
                material: material_item(store, &material, shape.reference_credit_depth())?,
                depictions,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(CharacterView {
        model: Model::Character,
        uuid: node.uuid,
        name: node.name,
        differentiator: node.differentiator,
        materials,
    }))
}

/// Characters list, alphabetical.
pub fn list<S: GraphStore + ?Sized>(store: &S, limit: usize) -> Result<Vec<NamedItem>, StoreError> {
    let mut nodes = store.nodes(NodeLabel::Character)?;
    nodes.sort_by(cmp_names);
    nodes.truncate(limit);
    Ok(nodes.iter().map(NamedItem::from).collect())
}
