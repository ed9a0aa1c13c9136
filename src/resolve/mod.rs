//! Resolution engine
//!
//! Pure functions of `(entity uuid, GraphStore)`: each call reads fresh from
//! the store and holds no state between requests.

pub mod ordering;
pub mod ancestors;
pub mod merge;
pub mod credits;
pub mod items;
pub mod nominations;
pub mod award_tree;

pub use ancestors::{resolve_ancestors, resolve_sub_entities};
pub use award_tree::{build_award_tree, resolve_award_ceremonies, resolve_ceremony_categories};
pub use credits::{resolve_credits, resolve_perspective_credits, CreditDepth};
pub use merge::{merge_nameless, Mergeable};
pub use nominations::{resolve_nominations, resolve_nominee_awards, resolve_subsequent_version_awards};
