//! Material shapes

use tracing::debug;

use crate::db::NodeRecord;
use crate::error::StoreError;
use crate::graph::GraphStore;
use crate::model::{CreditKind, EdgeType, Lineage, Model, NodeLabel};
use crate::resolve::items::{material_item, production_item, sourcing_materials, subsequent_versions};
use crate::resolve::ordering::{cmp_materials, cmp_names, cmp_productions, group_by_position, non_blank, sort_hops};
use crate::resolve::{
    resolve_ancestors, resolve_credits, resolve_nominee_awards, resolve_sub_entities,
    resolve_subsequent_version_awards,
};
use crate::views::{CharacterGroupView, CharacterRef, MaterialItem, MaterialView, SubMaterialItem};

use super::Shape;

/// Full material page.
pub fn detail<S: GraphStore + ?Sized>(store: &S, uuid: &str) -> Result<Option<MaterialView>, StoreError> {
    let Some(node) = store.node_labelled(uuid, NodeLabel::Material)? else {
        return Ok(None);
    };
    let shape = Shape::Detail;
    let reference = shape.reference_credit_depth();

    let sub_materials = resolve_sub_entities(store, uuid, Lineage::Material)?
        .iter()
        .map(|sub| -> Result<_, StoreError> {
            Ok(SubMaterialItem {
                model: Model::Material,
                uuid: sub.uuid.clone(),
                name: sub.name.clone(),
                format: sub.format.clone(),
                year: sub.year,
                writing_credits: resolve_credits(store, &sub.uuid, CreditKind::Writing, reference)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let original_version_material = match store
        .outgoing_to(uuid, EdgeType::SubsequentVersionOf, NodeLabel::Material)?
        .into_iter()
        .next()
    {
        Some(hop) => Some(material_item(store, &hop.node, reference)?),
        None => None,
    };

    let subsequent_version_materials =
        material_items(store, subsequent_versions(store, std::slice::from_ref(&node))?, shape)?;
    let sourcing = material_items(store, sourcing_materials(store, std::slice::from_ref(&node))?, shape)?;

    let mut productions: Vec<NodeRecord> = store
        .incoming_from(uuid, EdgeType::ProductionOf, NodeLabel::Production)?
        .into_iter()
        .map(|hop| hop.node)
        .collect();
    productions.sort_by(cmp_productions);
    let productions = productions
        .iter()
        .map(|production| production_item(store, production, shape.ancestor_tiers()))
        .collect::<Result<Vec<_>, _>>()?;

    let view = MaterialView {
        model: Model::Material,
        uuid: node.uuid.clone(),
        name: node.name.clone(),
        differentiator: node.differentiator.clone(),
        format: node.format.clone(),
        year: node.year,
        sur_material: resolve_ancestors(store, uuid, Lineage::Material, shape.ancestor_tiers())?,
        sub_materials,
        original_version_material,
        writing_credits: resolve_credits(store, uuid, CreditKind::Writing, shape.subject_credit_depth())?,
        subsequent_version_materials,
        sourcing_materials: sourcing,
        character_groups: character_groups(store, uuid)?,
        productions,
        awards: resolve_nominee_awards(store, &node)?,
        subsequent_version_material_awards: resolve_subsequent_version_awards(store, &node)?,
    };

    debug!(
        uuid,
        writing_credits = view.writing_credits.len(),
        productions = view.productions.len(),
        "Assembled material"
    );

    Ok(Some(view))
}

/// Materials list, alphabetical.
pub fn list<S: GraphStore + ?Sized>(store: &S, limit: usize) -> Result<Vec<MaterialItem>, StoreError> {
    let mut nodes = store.nodes(NodeLabel::Material)?;
    nodes.sort_by(cmp_names);
    nodes.truncate(limit);

    nodes
        .iter()
        .map(|node| material_item(store, node, Shape::List.subject_credit_depth()))
        .collect()
}

/// Referenced materials, latest year first, with reference-depth credits.
pub(crate) fn material_items<S: GraphStore + ?Sized>(
    store: &S,
    mut nodes: Vec<NodeRecord>,
    shape: Shape,
) -> Result<Vec<MaterialItem>, StoreError> {
    nodes.sort_by(cmp_materials);
    nodes
        .iter()
        .map(|node| material_item(store, node, shape.reference_credit_depth()))
        .collect()
}

/// Characters grouped by `groupPosition`, each group ordered by `characterPosition`.
fn character_groups<S: GraphStore + ?Sized>(
    store: &S,
    uuid: &str,
) -> Result<Vec<CharacterGroupView>, StoreError> {
    let mut hops = store.outgoing_to(uuid, EdgeType::HasCharacter, NodeLabel::Character)?;
    sort_hops(&mut hops, |props| props.character_position);

    Ok(group_by_position(hops, |hop| hop.edge.props.group_position)
        .into_iter()
        .map(|(position, hops)| CharacterGroupView {
            model: Model::CharacterGroup,
            name: hops
                .iter()
                .find_map(|hop| non_blank(&hop.edge.props.group))
                .map(String::from),
            position,
            characters: hops
                .into_iter()
                .map(|hop| CharacterRef {
                    model: Model::Character,
                    name: non_blank(&hop.edge.props.display_name)
                        .map(String::from)
                        .unwrap_or(hop.node.name),
                    uuid: hop.node.uuid,
                    qualifier: hop.edge.props.qualifier,
                })
                .collect(),
        })
        .collect())
}
