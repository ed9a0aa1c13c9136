//! Service layer for theatrebase
//!
//! Services sit between callers (the CLI, or an HTTP layer) and the
//! resolution engine. Each one runs a whole composed resolution inside a
//! single `GraphDb::with_conn` call.
//!
//! ## Architecture
//!
//! ```text
//! Callers (CLI / HTTP)
//!     ↓
//! Service Layer (services/*.rs)
//!     ↓
//! Entity Assembly (assembly/*.rs)
//!     ↓
//! Resolvers (resolve/*.rs) over GraphStore
//!     ↓
//! SQLite Database
//! ```

pub mod material_service;
pub mod production_service;
pub mod venue_service;
pub mod credited_entity_service;
pub mod award_service;
pub mod programme_service;
pub mod admin_service;
pub mod catalogue;

// Re-exports
pub use admin_service::AdminService;
pub use award_service::AwardService;
pub use catalogue::Catalogue;
pub use credited_entity_service::CreditedEntityService;
pub use material_service::MaterialService;
pub use production_service::ProductionService;
pub use programme_service::ProgrammeService;
pub use venue_service::VenueService;

use std::sync::Arc;

use crate::db::GraphDb;
use crate::model::NodeLabel;

/// Service container for dependency injection
///
/// Holds all services with a shared database.
pub struct Services {
    pub material: Arc<MaterialService>,
    pub production: Arc<ProductionService>,
    pub venue: Arc<VenueService>,
    pub person: Arc<CreditedEntityService>,
    pub company: Arc<CreditedEntityService>,
    pub award: Arc<AwardService>,
    pub programme: Arc<ProgrammeService>,
    pub admin: Arc<AdminService>,
}

impl Services {
    /// Create all services with shared database
    pub fn new(db: Arc<GraphDb>, list_limit: usize) -> Self {
        Self {
            material: Arc::new(MaterialService::new(db.clone(), list_limit)),
            production: Arc::new(ProductionService::new(db.clone(), list_limit)),
            venue: Arc::new(VenueService::new(db.clone(), list_limit)),
            person: Arc::new(CreditedEntityService::new(db.clone(), NodeLabel::Person, list_limit)),
            company: Arc::new(CreditedEntityService::new(db.clone(), NodeLabel::Company, list_limit)),
            award: Arc::new(AwardService::new(db.clone(), list_limit)),
            programme: Arc::new(ProgrammeService::new(db.clone(), list_limit)),
            admin: Arc::new(AdminService::new(db)),
        }
    }
}
