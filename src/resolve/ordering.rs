//! Sort keys and position grouping
//!
//! Positions sort ascending with nulls last. Equal positions fall back to the
//! related node's uuid so output never depends on storage row order.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::db::{EdgeProps, Hop, NodeRecord};

/// Ascending, nulls last.
pub fn position_key(position: Option<i64>) -> (bool, i64) {
    (position.is_none(), position.unwrap_or_default())
}

/// Sort hops by an edge position, breaking ties on the far node's uuid.
pub fn sort_hops<F>(hops: &mut [Hop], position: F)
where
    F: Fn(&EdgeProps) -> Option<i64>,
{
    hops.sort_by(|a, b| {
        position_key(position(&a.edge.props))
            .cmp(&position_key(position(&b.edge.props)))
            .then_with(|| a.node.uuid.cmp(&b.node.uuid))
    });
}

/// Partition `items` into groups sharing a position, ordered by that position.
///
/// Items keep their relative order inside a group.
pub fn group_by_position<T, F>(items: Vec<T>, key: F) -> Vec<(Option<i64>, Vec<T>)>
where
    F: Fn(&T) -> Option<i64>,
{
    let mut groups: BTreeMap<(bool, i64), (Option<i64>, Vec<T>)> = BTreeMap::new();

    for item in items {
        let position = key(&item);
        groups
            .entry(position_key(position))
            .or_insert_with(|| (position, Vec::new()))
            .1
            .push(item);
    }

    groups.into_values().collect()
}

/// Productions: latest start date first (undated last), then name.
pub fn cmp_productions(a: &NodeRecord, b: &NodeRecord) -> Ordering {
    match (&a.start_date, &b.start_date) {
        (Some(a_date), Some(b_date)) => b_date.cmp(a_date),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.name.cmp(&b.name))
    .then_with(|| a.uuid.cmp(&b.uuid))
}

/// Materials: latest year first (undated last), then name.
pub fn cmp_materials(a: &NodeRecord, b: &NodeRecord) -> Ordering {
    match (a.year, b.year) {
        (Some(a_year), Some(b_year)) => b_year.cmp(&a_year),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.name.cmp(&b.name))
    .then_with(|| a.uuid.cmp(&b.uuid))
}

/// Alphabetical by name.
pub fn cmp_names(a: &NodeRecord, b: &NodeRecord) -> Ordering {
    a.name.cmp(&b.name).then_with(|| a.uuid.cmp(&b.uuid))
}

/// Reverse alphabetical by name (award ceremonies).
pub fn cmp_names_desc(a: &NodeRecord, b: &NodeRecord) -> Ordering {
    b.name.cmp(&a.name).then_with(|| a.uuid.cmp(&b.uuid))
}

/// Drop repeated nodes, keeping the first occurrence.
pub fn dedupe_nodes(nodes: Vec<NodeRecord>) -> Vec<NodeRecord> {
    let mut seen = std::collections::HashSet::new();
    nodes
        .into_iter()
        .filter(|node| seen.insert(node.uuid.clone()))
        .collect()
}

/// Treat blank labels as absent.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeLabel;

    fn node(uuid: &str, name: &str) -> NodeRecord {
        NodeRecord {
            uuid: uuid.into(),
            label: NodeLabel::Production,
            name: name.into(),
            differentiator: None,
            subtitle: None,
            format: None,
            year: None,
            start_date: None,
            press_date: None,
            end_date: None,
        }
    }

    #[test]
    fn test_position_key_nulls_last() {
        let mut positions = vec![Some(2), None, Some(0), Some(1)];
        positions.sort_by_key(|p| position_key(*p));
        assert_eq!(positions, vec![Some(0), Some(1), Some(2), None]);
    }

    #[test]
    fn test_group_by_position_keeps_item_order() {
        let items = vec![(Some(1), "c"), (Some(0), "a"), (None, "z"), (Some(1), "d"), (Some(0), "b")];
        let groups = group_by_position(items, |item| item.0);

        let flattened: Vec<(Option<i64>, Vec<&str>)> = groups
            .into_iter()
            .map(|(position, items)| (position, items.into_iter().map(|i| i.1).collect()))
            .collect();

        assert_eq!(
            flattened,
            vec![
                (Some(0), vec!["a", "b"]),
                (Some(1), vec!["c", "d"]),
                (None, vec!["z"]),
            ]
        );
    }

    #[test]
    fn test_group_by_position_empty() {
        let groups = group_by_position(Vec::<Option<i64>>::new(), |p| *p);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_cmp_productions_by_date_desc_then_name() {
        let mut undated = node("u1", "Aardvark");
        undated.start_date = None;
        let mut older = node("u2", "Hamlet");
        older.start_date = Some("2010-05-01".into());
        let mut newer_b = node("u3", "Othello");
        newer_b.start_date = Some("2019-01-01".into());
        let mut newer_a = node("u4", "King Lear");
        newer_a.start_date = Some("2019-01-01".into());

        let mut productions = vec![undated, older, newer_b, newer_a];
        productions.sort_by(cmp_productions);

        let names: Vec<&str> = productions.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["King Lear", "Othello", "Hamlet", "Aardvark"]);
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(&Some("  by ".into())), Some("by"));
        assert_eq!(non_blank(&Some("   ".into())), None);
        assert_eq!(non_blank(&None), None);
    }
}
