//! TheatreBase - credit-hierarchy and lineage resolution for a theatre catalogue
//!
//! Productions, the materials they stage, the people and companies credited
//! on them, and the awards they receive are held as a property graph with
//! typed, ordered edges. This crate reads that graph and assembles the nested
//! views a catalogue front end serves.
//!
//! ## Layers
//!
//! ```text
//! services/   per-entity services, Catalogue dispatch by model
//!     ↓
//! assembly/   list and detail shapes per entity type
//!     ↓
//! resolve/    ancestor chains, credit groups, nameless merging, nominations
//!     ↓
//! graph.rs    GraphStore trait (node lookup + single-hop typed traversal)
//!     ↓
//! db/         SQLite nodes/edges tables
//! ```
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.local/share/theatrebase/
//! ├── theatrebase.db         # Graph database (nodes, edges)
//! └── config.toml            # Configuration
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod db;
pub mod graph;
pub mod views;
pub mod resolve;
pub mod assembly;
pub mod services;

// Re-exports
pub use assembly::Shape;
pub use config::Config;
pub use db::{GraphDb, GraphImport, ImportResult};
pub use error::StoreError;
pub use graph::GraphStore;
pub use model::{CreditKind, EdgeType, Lineage, Model, NodeLabel};
pub use services::{Catalogue, Services};
