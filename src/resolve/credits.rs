//! Credit group resolution
//!
//! Credit edges run from the credited-on entity (Material or Production) to
//! each credited entity. Edges sharing a `creditPosition` form one group;
//! within it entities follow `entityPosition`. A Person edge carrying
//! `creditedCompanyUuid` is a member of that company in the same group, not a
//! top-level entity.

use tracing::trace;

use crate::db::{EdgeProps, Hop, NodeRecord};
use crate::error::StoreError;
use crate::graph::GraphStore;
use crate::model::{CreditKind, Lineage, Model, NodeLabel};
use crate::resolve::ancestors::resolve_ancestors;
use crate::resolve::merge::merge_nameless;
use crate::resolve::ordering::{group_by_position, non_blank, sort_hops};
use crate::views::{
    CompanyEntity, CreditGroup, CreditedEntity, CreditedMaterial, EmployerCompany, EntityRef,
    PerspectiveCredit,
};

/// How far credit resolution reaches into material entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditDepth {
    /// Ancestor tiers resolved on credited materials
    pub ancestor_tiers: usize,
    /// Levels of writing credits nested under credited materials
    pub nested_levels: usize,
}

impl CreditDepth {
    pub const fn new(ancestor_tiers: usize, nested_levels: usize) -> Self {
        Self { ancestor_tiers, nested_levels }
    }

    fn nested(self) -> Option<Self> {
        self.nested_levels
            .checked_sub(1)
            .map(|nested_levels| Self { nested_levels, ..self })
    }
}

/// A top-level credited entity and the members credited through it.
#[derive(Debug, Clone)]
pub(crate) struct RawEntry {
    pub hop: Hop,
    pub members: Vec<NodeRecord>,
}

/// One `creditPosition` worth of credit edges, before shaping.
#[derive(Debug, Clone)]
pub(crate) struct RawGroup {
    pub position: Option<i64>,
    pub label: Option<String>,
    pub credit_type: Option<String>,
    pub entries: Vec<RawEntry>,
}

impl RawGroup {
    /// Whether `uuid` is credited in this group, directly or as a member.
    pub fn credits(&self, uuid: &str) -> bool {
        self.entries.iter().any(|entry| {
            entry.hop.node.uuid == uuid || entry.members.iter().any(|member| member.uuid == uuid)
        })
    }
}

/// Members credited through `company`, ordered by `memberPosition`.
///
/// Candidates must name the company through `owner`; when the company edge
/// lists member uuids, only those are kept.
pub(crate) fn members_of<'a, F>(
    company_uuid: &str,
    listed: &[String],
    candidates: impl IntoIterator<Item = &'a Hop>,
    owner: F,
) -> Vec<NodeRecord>
where
    F: Fn(&EdgeProps) -> Option<&String>,
{
    let mut members: Vec<Hop> = candidates
        .into_iter()
        .filter(|hop| owner(&hop.edge.props).map(String::as_str) == Some(company_uuid))
        .filter(|hop| listed.is_empty() || listed.contains(&hop.node.uuid))
        .cloned()
        .collect();

    sort_hops(&mut members, |props| props.member_position);
    members.into_iter().map(|hop| hop.node).collect()
}

fn is_member_edge(hop: &Hop) -> bool {
    hop.node.is(NodeLabel::Person) && hop.edge.props.credited_company_uuid.is_some()
}

/// Gather the raw credit groups of `kind` on `uuid`, ordered by `creditPosition`.
pub(crate) fn collect_credit_groups<S: GraphStore + ?Sized>(
    store: &S,
    uuid: &str,
    kind: CreditKind,
) -> Result<Vec<RawGroup>, StoreError> {
    let mut hops = store.outgoing(uuid, kind.edge_type())?;
    sort_hops(&mut hops, |props| props.entity_position);

    let groups = group_by_position(hops, |hop| hop.edge.props.credit_position)
        .into_iter()
        .map(|(position, hops)| {
            let (member_hops, entity_hops): (Vec<Hop>, Vec<Hop>) =
                hops.into_iter().partition(is_member_edge);

            let label = entity_hops
                .iter()
                .chain(member_hops.iter())
                .find_map(|hop| non_blank(&hop.edge.props.credit))
                .map(String::from);

            let credit_type = entity_hops
                .iter()
                .find_map(|hop| non_blank(&hop.edge.props.credit_type))
                .map(String::from);

            let entries = entity_hops
                .into_iter()
                .map(|hop| {
                    let members = if hop.node.is(NodeLabel::Company) {
                        members_of(
                            &hop.node.uuid,
                            &hop.edge.props.credited_member_uuids,
                            &member_hops,
                            |props| props.credited_company_uuid.as_ref(),
                        )
                    } else {
                        Vec::new()
                    };
                    RawEntry { hop, members }
                })
                .collect();

            RawGroup { position, label, credit_type, entries }
        })
        .collect::<Vec<_>>();

    trace!(uuid, ?kind, groups = groups.len(), "Collected credit groups");
    Ok(groups)
}

fn person_ref(node: &NodeRecord) -> EntityRef {
    EntityRef {
        model: Model::Person,
        uuid: node.uuid.clone(),
        name: node.name.clone(),
    }
}

/// Shape a credited Person or Company (with its members).
pub(crate) fn credited_entity(node: &NodeRecord, members: &[NodeRecord]) -> Option<CreditedEntity> {
    match node.label {
        NodeLabel::Person => Some(CreditedEntity::Person(EntityRef::from(node))),
        NodeLabel::Company => Some(CreditedEntity::Company(CompanyEntity {
            model: Model::Company,
            uuid: node.uuid.clone(),
            name: node.name.clone(),
            members: members.iter().map(person_ref).collect(),
        })),
        _ => None,
    }
}

fn credited_material<S: GraphStore + ?Sized>(
    store: &S,
    node: &NodeRecord,
    depth: CreditDepth,
) -> Result<CreditedEntity, StoreError> {
    let sur_material = resolve_ancestors(store, &node.uuid, Lineage::Material, depth.ancestor_tiers)?;

    let writing_credits = match depth.nested() {
        Some(nested) => Some(resolve_credits(store, &node.uuid, CreditKind::Writing, nested)?),
        None => None,
    };

    Ok(CreditedEntity::Material(Box::new(CreditedMaterial {
        model: Model::Material,
        uuid: node.uuid.clone(),
        name: node.name.clone(),
        format: node.format.clone(),
        year: node.year,
        sur_material,
        writing_credits,
    })))
}

/// Resolve the merged credit groups of `kind` on `uuid`.
///
/// Material entities (source-material credits) carry their own ancestor chain
/// and, while `depth` allows, their own writing credits.
pub fn resolve_credits<S: GraphStore + ?Sized>(
    store: &S,
    uuid: &str,
    kind: CreditKind,
    depth: CreditDepth,
) -> Result<Vec<CreditGroup>, StoreError> {
    let raw = collect_credit_groups(store, uuid, kind)?;
    let mut groups = Vec::with_capacity(raw.len());

    for group in raw {
        let mut entities = Vec::with_capacity(group.entries.len());

        for entry in &group.entries {
            let node = &entry.hop.node;
            if node.is(NodeLabel::Material) {
                if node.uuid != uuid {
                    entities.push(credited_material(store, node, depth)?);
                }
            } else if let Some(entity) = credited_entity(node, &entry.members) {
                entities.push(entity);
            }
        }

        groups.push(CreditGroup {
            model: kind.model(),
            name: group.label,
            credit_type: group.credit_type,
            position: group.position,
            entities,
        });
    }

    Ok(merge_nameless(groups, kind.default_label()))
}

/// Resolve the credits of `kind` on `uuid` in which `perspective` takes part.
///
/// A person credited through a company gets that company as
/// `employerCompany` (with its other members as `coMembers`); a company gets
/// its own `creditedMembers`. `coEntities` never includes the perspective or
/// its employer.
pub fn resolve_perspective_credits<S: GraphStore + ?Sized>(
    store: &S,
    uuid: &str,
    kind: CreditKind,
    perspective: &NodeRecord,
) -> Result<Vec<PerspectiveCredit>, StoreError> {
    let raw = collect_credit_groups(store, uuid, kind)?;
    let mut credits = Vec::new();

    for group in raw.iter().filter(|group| group.credits(&perspective.uuid)) {
        for entry in &group.entries {
            let node = &entry.hop.node;

            if node.uuid == perspective.uuid {
                let credited_members = if node.is(NodeLabel::Company) {
                    entry.members.iter().map(person_ref).collect()
                } else {
                    Vec::new()
                };

                credits.push(PerspectiveCredit {
                    model: kind.model(),
                    name: group.label.clone(),
                    position: group.position,
                    employer_company: None,
                    credited_members,
                    co_entities: co_entities(group, &[perspective.uuid.as_str()]),
                });
            } else if entry.members.iter().any(|member| member.uuid == perspective.uuid) {
                credits.push(PerspectiveCredit {
                    model: kind.model(),
                    name: group.label.clone(),
                    position: group.position,
                    employer_company: Some(EmployerCompany {
                        model: Model::Company,
                        uuid: node.uuid.clone(),
                        name: node.name.clone(),
                        co_members: entry
                            .members
                            .iter()
                            .filter(|member| member.uuid != perspective.uuid)
                            .map(person_ref)
                            .collect(),
                    }),
                    credited_members: Vec::new(),
                    co_entities: co_entities(group, &[perspective.uuid.as_str(), node.uuid.as_str()]),
                });
            }
        }
    }

    Ok(merge_nameless(credits, kind.default_label()))
}

fn co_entities(group: &RawGroup, excluded: &[&str]) -> Vec<CreditedEntity> {
    group
        .entries
        .iter()
        .filter(|entry| !excluded.contains(&entry.hop.node.uuid.as_str()))
        .filter_map(|entry| {
            let members: Vec<NodeRecord> = entry
                .members
                .iter()
                .filter(|member| !excluded.contains(&member.uuid.as_str()))
                .cloned()
                .collect();
            credited_entity(&entry.hop.node, &members)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::EdgeRecord;
    use crate::model::EdgeType;

    fn hop(uuid: &str, label: NodeLabel, props: EdgeProps) -> Hop {
        Hop {
            edge: EdgeRecord {
                id: 0,
                edge_type: EdgeType::HasProducerEntity,
                source_uuid: "production".into(),
                target_uuid: uuid.into(),
                props,
            },
            node: NodeRecord {
                uuid: uuid.into(),
                label,
                name: uuid.to_uppercase(),
                differentiator: None,
                subtitle: None,
                format: None,
                year: None,
                start_date: None,
                press_date: None,
                end_date: None,
            },
        }
    }

    fn member(uuid: &str, company: &str, position: i64) -> Hop {
        hop(
            uuid,
            NodeLabel::Person,
            EdgeProps {
                credited_company_uuid: Some(company.into()),
                member_position: Some(position),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_members_ordered_by_member_position() {
        let candidates = vec![member("b", "co", 1), member("a", "co", 0), member("x", "other", 0)];

        let members = members_of("co", &[], &candidates, |props| props.credited_company_uuid.as_ref());
        let uuids: Vec<&str> = members.iter().map(|m| m.uuid.as_str()).collect();

        assert_eq!(uuids, vec!["a", "b"]);
    }

    #[test]
    fn test_members_filtered_by_listed_uuids() {
        let candidates = vec![member("a", "co", 0), member("b", "co", 1)];
        let listed = vec!["b".to_string()];

        let members = members_of("co", &listed, &candidates, |props| props.credited_company_uuid.as_ref());

        assert_eq!(members.len(), 1);
        assert_eq!(members[0].uuid, "b");
    }

    #[test]
    fn test_credit_depth_nesting_runs_out() {
        let depth = CreditDepth::new(2, 1);
        let nested = depth.nested().unwrap();
        assert_eq!(nested, CreditDepth::new(2, 0));
        assert!(nested.nested().is_none());
    }

    #[test]
    fn test_co_entities_exclude_perspective() {
        let group = RawGroup {
            position: Some(0),
            label: Some("produced by".into()),
            credit_type: None,
            entries: vec![
                RawEntry { hop: hop("p1", NodeLabel::Person, EdgeProps::default()), members: vec![] },
                RawEntry { hop: hop("p2", NodeLabel::Person, EdgeProps::default()), members: vec![] },
            ],
        };

        let co = co_entities(&group, &["p1"]);
        assert_eq!(co.len(), 1);
        assert_eq!(co[0].uuid(), "p2");
        assert!(group.credits("p1"));
        assert!(!group.credits("p3"));
    }

    #[test]
    fn test_co_entities_drop_perspective_from_company_members() {
        let group = RawGroup {
            position: Some(0),
            label: None,
            credit_type: None,
            entries: vec![
                RawEntry { hop: hop("p1", NodeLabel::Person, EdgeProps::default()), members: vec![] },
                RawEntry {
                    hop: hop("c1", NodeLabel::Company, EdgeProps::default()),
                    members: vec![member("p1", "c1", 0).node],
                },
                RawEntry {
                    hop: hop("c2", NodeLabel::Company, EdgeProps::default()),
                    members: vec![member("p1", "c2", 0).node, member("p2", "c2", 1).node],
                },
            ],
        };

        let co = co_entities(&group, &["p1"]);
        let companies: Vec<(&str, Vec<&str>)> = co
            .iter()
            .map(|entity| match entity {
                CreditedEntity::Company(company) => (
                    company.uuid.as_str(),
                    company.members.iter().map(|m| m.uuid.as_str()).collect(),
                ),
                other => panic!("unexpected entity {}", other.uuid()),
            })
            .collect();

        assert_eq!(companies, vec![("c1", vec![]), ("c2", vec!["p2"])]);
    }
}
