//! Award → ceremony → category → nomination trees
//!
//! The tree order is fixed: awards by name ascending, ceremonies by name
//! descending, categories by their `position` on the presenting edge,
//! nominations by `nominationPosition`.

use std::cmp::Ordering;

use crate::db::NodeRecord;
use crate::error::StoreError;
use crate::graph::GraphStore;
use crate::model::{EdgeType, Model, NodeLabel};
use crate::resolve::nominations::resolve_nominations;
use crate::resolve::ordering::{cmp_names, cmp_names_desc, position_key, sort_hops};
use crate::views::{AwardBranch, CategoryBranch, CeremonyBranch, NominationView};

/// Where a category sits: its ceremony, its position there, and the award.
#[derive(Debug, Clone)]
pub struct CategoryPlacement {
    pub category: NodeRecord,
    pub position: Option<i64>,
    pub ceremony: NodeRecord,
    pub award: NodeRecord,
}

/// A nomination tagged with the category it belongs to.
#[derive(Debug, Clone)]
pub struct Placed<T> {
    pub placement: CategoryPlacement,
    pub nomination_position: Option<i64>,
    pub nomination: T,
}

/// Locate a category's ceremony and award; `None` if either link is missing.
pub fn category_placement<S: GraphStore + ?Sized>(
    store: &S,
    category_uuid: &str,
) -> Result<Option<CategoryPlacement>, StoreError> {
    let Some(category) = store.node_labelled(category_uuid, NodeLabel::AwardCeremonyCategory)? else {
        return Ok(None);
    };

    let Some(presenting) = store
        .incoming_from(category_uuid, EdgeType::PresentsCategory, NodeLabel::AwardCeremony)?
        .into_iter()
        .next()
    else {
        return Ok(None);
    };

    let Some(award) = store
        .outgoing_to(&presenting.node.uuid, EdgeType::PresentedAt, NodeLabel::Award)?
        .into_iter()
        .next()
    else {
        return Ok(None);
    };

    Ok(Some(CategoryPlacement {
        category,
        position: presenting.edge.props.position,
        ceremony: presenting.node,
        award: award.node,
    }))
}

fn cmp_placed<T>(a: &Placed<T>, b: &Placed<T>) -> Ordering {
    let (pa, pb) = (&a.placement, &b.placement);

    cmp_names(&pa.award, &pb.award)
        .then_with(|| cmp_names_desc(&pa.ceremony, &pb.ceremony))
        .then_with(|| position_key(pa.position).cmp(&position_key(pb.position)))
        .then_with(|| pa.category.uuid.cmp(&pb.category.uuid))
        .then_with(|| position_key(a.nomination_position).cmp(&position_key(b.nomination_position)))
}

/// Fold placed nominations into a sorted award tree.
pub fn build_award_tree<T>(mut entries: Vec<Placed<T>>) -> Vec<AwardBranch<T>> {
    entries.sort_by(cmp_placed);

    let mut awards: Vec<AwardBranch<T>> = Vec::new();
    let mut last_category: Option<String> = None;

    for Placed { placement, nomination, .. } in entries {
        let CategoryPlacement { category, ceremony, award, .. } = placement;

        if awards.last().map(|branch| branch.uuid.as_str()) != Some(award.uuid.as_str()) {
            awards.push(AwardBranch {
                model: Model::Award,
                uuid: award.uuid,
                name: award.name,
                ceremonies: Vec::new(),
            });
            last_category = None;
        }
        let Some(award_branch) = awards.last_mut() else { continue };

        if award_branch.ceremonies.last().map(|branch| branch.uuid.as_str()) != Some(ceremony.uuid.as_str()) {
            award_branch.ceremonies.push(CeremonyBranch {
                model: Model::AwardCeremony,
                uuid: ceremony.uuid,
                name: ceremony.name,
                categories: Vec::new(),
            });
            last_category = None;
        }
        let Some(ceremony_branch) = award_branch.ceremonies.last_mut() else { continue };

        if last_category.as_deref() != Some(category.uuid.as_str()) {
            ceremony_branch.categories.push(CategoryBranch {
                model: Model::AwardCeremonyCategory,
                name: category.name,
                nominations: Vec::new(),
            });
            last_category = Some(category.uuid);
        }
        if let Some(category_branch) = ceremony_branch.categories.last_mut() {
            category_branch.nominations.push(nomination);
        }
    }

    awards
}

/// The categories presented at a ceremony, each with its nominations.
pub fn resolve_ceremony_categories<S: GraphStore + ?Sized>(
    store: &S,
    ceremony_uuid: &str,
) -> Result<Vec<CategoryBranch<NominationView>>, StoreError> {
    let mut hops = store.outgoing_to(ceremony_uuid, EdgeType::PresentsCategory, NodeLabel::AwardCeremonyCategory)?;
    sort_hops(&mut hops, |props| props.position);

    hops.into_iter()
        .map(|hop| -> Result<_, StoreError> {
            Ok(CategoryBranch {
                model: Model::AwardCeremonyCategory,
                nominations: resolve_nominations(store, &hop.node.uuid)?,
                name: hop.node.name,
            })
        })
        .collect()
}

/// Ceremonies of an award, newest-named first, with their categories.
pub fn resolve_award_ceremonies<S: GraphStore + ?Sized>(
    store: &S,
    award_uuid: &str,
) -> Result<Vec<CeremonyBranch<NominationView>>, StoreError> {
    let mut ceremonies: Vec<NodeRecord> = store
        .incoming_from(award_uuid, EdgeType::PresentedAt, NodeLabel::AwardCeremony)?
        .into_iter()
        .map(|hop| hop.node)
        .collect();
    ceremonies.sort_by(cmp_names_desc);

    ceremonies
        .into_iter()
        .map(|ceremony| -> Result<_, StoreError> {
            Ok(CeremonyBranch {
                model: Model::AwardCeremony,
                categories: resolve_ceremony_categories(store, &ceremony.uuid)?,
                uuid: ceremony.uuid,
                name: ceremony.name,
            })
        })
        .collect()
}
