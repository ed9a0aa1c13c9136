//! Entity assembly
//!
//! One module per entity type. Each exposes `detail` (single-instance shape)
//! and `list` (collection shape); both run the same resolvers and differ only
//! in the depth a [`Shape`] hands them.

pub mod material;
pub mod production;
pub mod venue;
pub mod person;
pub mod character;
pub mod award;
pub mod season;

use crate::resolve::CreditDepth;

/// Which API shape is being assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    List,
    Detail,
}

impl Shape {
    /// Ancestor tiers resolved on the subject and on referenced productions and
    /// materials. Lineages cap this further (venues stop at one).
    pub fn ancestor_tiers(&self) -> usize {
        match self {
            Shape::List => 1,
            Shape::Detail => 2,
        }
    }

    /// Credit depth for the subject material's own writing credits, and for
    /// the material a production stages.
    pub fn subject_credit_depth(&self) -> CreditDepth {
        match self {
            Shape::List => CreditDepth::new(1, 0),
            Shape::Detail => CreditDepth::new(2, 1),
        }
    }

    /// Credit depth for every other referenced material.
    pub fn reference_credit_depth(&self) -> CreditDepth {
        match self {
            Shape::List => CreditDepth::new(1, 0),
            Shape::Detail => CreditDepth::new(2, 0),
        }
    }
}
