//! Nomination resolution
//!
//! `HAS_NOMINEE` edges run from a category to each nominated Person, Company,
//! Production or Material. Edges sharing a `nominationPosition` form one
//! nomination. A Person edge carrying `nominatedCompanyUuid` is a member of
//! that company's nomination, not a nominee of its own.
//!
//! Three views are built from the same groups:
//! - the category view (award and ceremony pages)
//! - the nominee view (`awards` on a nominee's page)
//! - the subsequent-version view (`subsequentVersionMaterialAwards`), which
//!   leaves out any nomination the perspective entity already holds itself

use std::collections::HashSet;

use tracing::debug;

use crate::db::{EdgeProps, Hop, NodeRecord};
use crate::error::StoreError;
use crate::graph::GraphStore;
use crate::model::{EdgeType, Model, NodeLabel};
use crate::resolve::award_tree::{build_award_tree, category_placement, Placed};
use crate::resolve::credits::{credited_entity, members_of, CreditDepth};
use crate::resolve::items::{material_item, production_item, subsequent_versions, written_materials};
use crate::resolve::ordering::{group_by_position, non_blank, sort_hops};
use crate::views::{
    AwardBranch, CreditedEntity, EmployerCompany, EntityRef, MaterialItem, NominationView,
    PerspectiveNomination, ProductionItem,
};

/// Ancestor tiers on productions named in a nomination.
const NOMINATED_PRODUCTION_TIERS: usize = 2;

/// Nominated materials carry their credits but no nested ones.
const NOMINATED_MATERIAL_DEPTH: CreditDepth = CreditDepth::new(2, 0);

/// A nominated Person or Company, with members nominated through it.
#[derive(Debug, Clone)]
pub(crate) struct Nominee {
    pub node: NodeRecord,
    pub members: Vec<NodeRecord>,
}

/// One `nominationPosition` worth of nominee edges.
#[derive(Debug, Clone)]
pub(crate) struct NominationGroup {
    pub position: Option<i64>,
    pub is_winner: bool,
    pub custom_type: Option<String>,
    pub entities: Vec<Nominee>,
    pub productions: Vec<NodeRecord>,
    pub materials: Vec<NodeRecord>,
}

impl NominationGroup {
    pub fn nomination_type(&self) -> String {
        nomination_type(self.is_winner, self.custom_type.as_deref())
    }

    /// Whether `uuid` is nominated here as an entity, directly or as a member.
    pub fn nominates_entity(&self, uuid: &str) -> bool {
        self.entities.iter().any(|nominee| {
            nominee.node.uuid == uuid || nominee.members.iter().any(|member| member.uuid == uuid)
        })
    }

    /// Whether `node` appears among this nomination's nominees of its kind.
    pub fn nominates(&self, node: &NodeRecord) -> bool {
        match node.label {
            NodeLabel::Person | NodeLabel::Company => self.nominates_entity(&node.uuid),
            NodeLabel::Production => self.productions.iter().any(|p| p.uuid == node.uuid),
            NodeLabel::Material => self.materials.iter().any(|m| m.uuid == node.uuid),
            _ => false,
        }
    }

    /// The company `uuid` was nominated through, if any.
    fn employer_of(&self, uuid: &str) -> Option<&Nominee> {
        self.entities
            .iter()
            .find(|nominee| nominee.members.iter().any(|member| member.uuid == uuid))
    }
}

/// `customType`, else "Winner" or "Nomination".
pub fn nomination_type(is_winner: bool, custom_type: Option<&str>) -> String {
    match custom_type.map(str::trim).filter(|s| !s.is_empty()) {
        Some(custom) => custom.to_string(),
        None if is_winner => "Winner".to_string(),
        None => "Nomination".to_string(),
    }
}

fn is_member_edge(hop: &Hop) -> bool {
    hop.node.is(NodeLabel::Person) && hop.edge.props.nominated_company_uuid.is_some()
}

fn sorted_nodes<F>(mut hops: Vec<Hop>, position: F) -> Vec<NodeRecord>
where
    F: Fn(&EdgeProps) -> Option<i64>,
{
    sort_hops(&mut hops, position);
    let mut seen = HashSet::new();
    hops.into_iter()
        .map(|hop| hop.node)
        .filter(|node| seen.insert(node.uuid.clone()))
        .collect()
}

/// Gather the nominations of a category, ordered by `nominationPosition`.
///
/// Nominee entities are de-duplicated by uuid within a nomination.
pub(crate) fn collect_nominations<S: GraphStore + ?Sized>(
    store: &S,
    category_uuid: &str,
) -> Result<Vec<NominationGroup>, StoreError> {
    let hops = store.outgoing(category_uuid, EdgeType::HasNominee)?;

    let groups = group_by_position(hops, |hop| hop.edge.props.nomination_position)
        .into_iter()
        .map(|(position, hops)| {
            let is_winner = hops
                .iter()
                .find_map(|hop| hop.edge.props.is_winner)
                .unwrap_or(false);
            let custom_type = hops
                .iter()
                .find_map(|hop| non_blank(&hop.edge.props.custom_type))
                .map(String::from);

            let (member_hops, hops): (Vec<Hop>, Vec<Hop>) = hops.into_iter().partition(is_member_edge);

            let mut entity_hops = Vec::new();
            let mut production_hops = Vec::new();
            let mut material_hops = Vec::new();
            for hop in hops {
                match hop.node.label {
                    NodeLabel::Person | NodeLabel::Company => entity_hops.push(hop),
                    NodeLabel::Production => production_hops.push(hop),
                    NodeLabel::Material => material_hops.push(hop),
                    _ => {}
                }
            }

            sort_hops(&mut entity_hops, |props| props.entity_position);
            let mut seen = HashSet::new();
            let entities = entity_hops
                .into_iter()
                .filter(|hop| seen.insert(hop.node.uuid.clone()))
                .map(|hop| {
                    let members = if hop.node.is(NodeLabel::Company) {
                        members_of(
                            &hop.node.uuid,
                            &hop.edge.props.nominated_member_uuids,
                            &member_hops,
                            |props| props.nominated_company_uuid.as_ref(),
                        )
                    } else {
                        Vec::new()
                    };
                    Nominee { node: hop.node, members }
                })
                .collect();

            NominationGroup {
                position,
                is_winner,
                custom_type,
                entities,
                productions: sorted_nodes(production_hops, |props| props.production_position),
                materials: sorted_nodes(material_hops, |props| props.material_position),
            }
        })
        .collect();

    Ok(groups)
}

fn entity_views<'a>(nominees: impl IntoIterator<Item = &'a Nominee>) -> Vec<CreditedEntity> {
    nominees
        .into_iter()
        .filter_map(|nominee| credited_entity(&nominee.node, &nominee.members))
        .collect()
}

fn production_items<'a, S: GraphStore + ?Sized>(
    store: &S,
    productions: impl IntoIterator<Item = &'a NodeRecord>,
) -> Result<Vec<ProductionItem>, StoreError> {
    productions
        .into_iter()
        .map(|node| production_item(store, node, NOMINATED_PRODUCTION_TIERS))
        .collect()
}

fn material_items<'a, S: GraphStore + ?Sized>(
    store: &S,
    materials: impl IntoIterator<Item = &'a NodeRecord>,
) -> Result<Vec<MaterialItem>, StoreError> {
    materials
        .into_iter()
        .map(|node| material_item(store, node, NOMINATED_MATERIAL_DEPTH))
        .collect()
}

/// Resolve every nomination in a category.
pub fn resolve_nominations<S: GraphStore + ?Sized>(
    store: &S,
    category_uuid: &str,
) -> Result<Vec<NominationView>, StoreError> {
    let groups = collect_nominations(store, category_uuid)?;

    groups
        .iter()
        .map(|group| -> Result<NominationView, StoreError> {
            Ok(NominationView {
                model: Model::Nomination,
                is_winner: group.is_winner,
                nomination_type: group.nomination_type(),
                entities: entity_views(&group.entities),
                productions: production_items(store, &group.productions)?,
                materials: material_items(store, &group.materials)?,
            })
        })
        .collect()
}

fn blank_perspective(group: &NominationGroup) -> PerspectiveNomination {
    PerspectiveNomination {
        model: Model::Nomination,
        is_winner: group.is_winner,
        nomination_type: group.nomination_type(),
        recipient_subsequent_version_materials: None,
        employer_company: None,
        entities: None,
        co_entities: None,
        productions: None,
        co_productions: None,
        materials: None,
        co_materials: None,
    }
}

/// A nomination seen from one of its own nominees.
fn nominee_perspective<S: GraphStore + ?Sized>(
    store: &S,
    group: &NominationGroup,
    perspective: &NodeRecord,
) -> Result<PerspectiveNomination, StoreError> {
    let mut nomination = blank_perspective(group);
    let uuid = perspective.uuid.as_str();

    match perspective.label {
        NodeLabel::Production => {
            nomination.entities = Some(entity_views(&group.entities));
            nomination.co_productions = Some(production_items(
                store,
                group.productions.iter().filter(|p| p.uuid != uuid),
            )?);
            nomination.materials = Some(material_items(store, &group.materials)?);
        }
        NodeLabel::Material => {
            nomination.entities = Some(entity_views(&group.entities));
            nomination.productions = Some(production_items(store, &group.productions)?);
            nomination.co_materials = Some(material_items(
                store,
                group.materials.iter().filter(|m| m.uuid != uuid),
            )?);
        }
        _ => {
            let employer = group.employer_of(uuid);

            nomination.employer_company = employer.map(|company| EmployerCompany {
                model: Model::Company,
                uuid: company.node.uuid.clone(),
                name: company.node.name.clone(),
                co_members: company
                    .members
                    .iter()
                    .filter(|member| member.uuid != uuid)
                    .map(EntityRef::from)
                    .collect(),
            });
            nomination.co_entities = Some(
                group
                    .entities
                    .iter()
                    .filter(|nominee| {
                        nominee.node.uuid != uuid
                            && employer.map_or(true, |company| company.node.uuid != nominee.node.uuid)
                    })
                    .filter_map(|nominee| {
                        let members: Vec<NodeRecord> = nominee
                            .members
                            .iter()
                            .filter(|member| member.uuid != uuid)
                            .cloned()
                            .collect();
                        credited_entity(&nominee.node, &members)
                    })
                    .collect(),
            );
            nomination.productions = Some(production_items(store, &group.productions)?);
            nomination.materials = Some(material_items(store, &group.materials)?);
        }
    }

    Ok(nomination)
}

/// Distinct categories with a nominee edge into any of `uuids`, first-seen order.
fn nominating_categories<S: GraphStore + ?Sized>(
    store: &S,
    uuids: impl IntoIterator<Item = String>,
) -> Result<Vec<String>, StoreError> {
    let mut seen = HashSet::new();
    let mut categories = Vec::new();

    for uuid in uuids {
        for hop in store.incoming_from(&uuid, EdgeType::HasNominee, NodeLabel::AwardCeremonyCategory)? {
            if seen.insert(hop.node.uuid.clone()) {
                categories.push(hop.node.uuid);
            }
        }
    }

    Ok(categories)
}

/// Award tree of the nominations `perspective` holds.
pub fn resolve_nominee_awards<S: GraphStore + ?Sized>(
    store: &S,
    perspective: &NodeRecord,
) -> Result<Vec<AwardBranch<PerspectiveNomination>>, StoreError> {
    let mut placed = Vec::new();

    for category_uuid in nominating_categories(store, [perspective.uuid.clone()])? {
        let Some(placement) = category_placement(store, &category_uuid)? else {
            debug!(category = %category_uuid, "Category not presented at any ceremony, skipping");
            continue;
        };

        for group in collect_nominations(store, &category_uuid)? {
            if !group.nominates(perspective) {
                continue;
            }
            placed.push(Placed {
                placement: placement.clone(),
                nomination_position: group.position,
                nomination: nominee_perspective(store, &group, perspective)?,
            });
        }
    }

    Ok(build_award_tree(placed))
}

/// Award tree of nominations won by later versions of `perspective`'s work.
///
/// For a Material the originals are the material itself; for a Person or
/// Company they are the materials it wrote. A nomination in which a Person or
/// Company perspective is itself a nominee is left out: it already appears
/// under that entity's own `awards`.
pub fn resolve_subsequent_version_awards<S: GraphStore + ?Sized>(
    store: &S,
    perspective: &NodeRecord,
) -> Result<Vec<AwardBranch<PerspectiveNomination>>, StoreError> {
    let originals = match perspective.label {
        NodeLabel::Material => vec![perspective.clone()],
        NodeLabel::Person | NodeLabel::Company => written_materials(store, &perspective.uuid)?,
        _ => return Ok(Vec::new()),
    };

    let recipients = subsequent_versions(store, &originals)?;
    if recipients.is_empty() {
        return Ok(Vec::new());
    }
    let recipient_uuids: HashSet<&str> = recipients.iter().map(|m| m.uuid.as_str()).collect();
    let perspective_is_entity = matches!(perspective.label, NodeLabel::Person | NodeLabel::Company);

    let mut placed = Vec::new();
    let categories = nominating_categories(store, recipients.iter().map(|m| m.uuid.clone()))?;

    for category_uuid in categories {
        let Some(placement) = category_placement(store, &category_uuid)? else {
            continue;
        };

        for group in collect_nominations(store, &category_uuid)? {
            let (recipient_materials, other_materials): (Vec<&NodeRecord>, Vec<&NodeRecord>) = group
                .materials
                .iter()
                .partition(|m| recipient_uuids.contains(m.uuid.as_str()));

            if recipient_materials.is_empty() {
                continue;
            }
            if perspective_is_entity && group.nominates_entity(&perspective.uuid) {
                debug!(
                    uuid = %perspective.uuid,
                    category = %category_uuid,
                    "Skipping subsequent-version nomination already held by the entity"
                );
                continue;
            }

            let mut nomination = blank_perspective(&group);
            nomination.recipient_subsequent_version_materials =
                Some(material_items(store, recipient_materials)?);
            nomination.entities = Some(entity_views(&group.entities));
            nomination.productions = Some(production_items(store, &group.productions)?);
            nomination.materials = Some(material_items(store, other_materials)?);

            placed.push(Placed {
                placement: placement.clone(),
                nomination_position: group.position,
                nomination,
            });
        }
    }

    Ok(build_award_tree(placed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nomination_type_defaults() {
        assert_eq!(nomination_type(false, None), "Nomination");
        assert_eq!(nomination_type(true, None), "Winner");
    }

    #[test]
    fn test_custom_type_wins_over_winner_flag() {
        assert_eq!(nomination_type(true, Some("Joint Winner")), "Joint Winner");
        assert_eq!(nomination_type(false, Some("Shortlisted")), "Shortlisted");
        assert_eq!(nomination_type(true, Some("  ")), "Winner");
    }
}
