//! Nameless credit merging
//!
//! All credit groups without a label collapse into one group carrying the
//! credit kind's default label. The merged group sits where the first nameless
//! group was; named groups keep their relative order.
//!
//! Groups may name a bucket: nameless groups only merge with nameless groups
//! of the same bucket, each bucket keeping its own first-seen slot.

use crate::resolve::ordering::non_blank;
use crate::views::{CreditGroup, PerspectiveCredit};

/// A credit that can be relabelled and can absorb another credit's entities.
pub trait Mergeable: Sized {
    fn label(&self) -> Option<&str>;

    fn set_label(&mut self, label: String);

    /// Nameless groups only merge within the same bucket.
    fn bucket(&self) -> Option<&str> {
        None
    }

    /// Append `other`'s entities after this group's own.
    fn absorb(&mut self, other: Self);
}

/// Fold nameless groups into one, in first-seen order.
pub fn merge_nameless<G: Mergeable>(groups: Vec<G>, default_label: &str) -> Vec<G> {
    let mut merged: Vec<G> = Vec::with_capacity(groups.len());
    let mut nameless_slots: Vec<(Option<String>, usize)> = Vec::new();

    for mut group in groups {
        if group.label().is_some() {
            merged.push(group);
            continue;
        }

        let bucket = group.bucket().map(String::from);
        let slot = nameless_slots
            .iter()
            .find(|(key, _)| *key == bucket)
            .map(|&(_, slot)| slot);
        match slot {
            Some(slot) => merged[slot].absorb(group),
            None => {
                group.set_label(default_label.to_string());
                nameless_slots.push((bucket, merged.len()));
                merged.push(group);
            }
        }
    }

    merged
}

impl Mergeable for CreditGroup {
    fn label(&self) -> Option<&str> {
        non_blank(&self.name)
    }

    fn set_label(&mut self, label: String) {
        self.name = Some(label);
    }

    fn absorb(&mut self, other: Self) {
        if self.credit_type.is_none() {
            self.credit_type = other.credit_type;
        }
        self.entities.extend(other.entities);
    }
}

impl Mergeable for PerspectiveCredit {
    fn label(&self) -> Option<&str> {
        non_blank(&self.name)
    }

    fn set_label(&mut self, label: String) {
        self.name = Some(label);
    }

    /// Appearances through different companies (or directly) stay apart.
    fn bucket(&self) -> Option<&str> {
        self.employer_company.as_ref().map(|company| company.uuid.as_str())
    }

    fn absorb(&mut self, other: Self) {
        if let Some(company) = other.employer_company {
            if let Some(own) = self.employer_company.as_mut() {
                for member in company.co_members {
                    if !own.co_members.iter().any(|m| m.uuid == member.uuid) {
                        own.co_members.push(member);
                    }
                }
            }
        }
        self.credited_members.extend(other.credited_members);
        self.co_entities.extend(other.co_entities);
    }
}
