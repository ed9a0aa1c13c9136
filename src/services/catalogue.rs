//! Catalogue dispatch - show/list any model by name
//!
//! Maps a node label to the service that assembles it and serializes the
//! result, so callers that only know a model name (the CLI, a generic route)
//! need no per-entity code.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::StoreError;
use crate::model::NodeLabel;

use super::Services;

/// Model-agnostic front over [`Services`]
pub struct Catalogue {
    services: Services,
}

fn to_value<T: Serialize>(view: T) -> Result<Value, StoreError> {
    Ok(serde_json::to_value(view)?)
}

fn found<T: Serialize>(label: NodeLabel, uuid: &str, view: Option<T>) -> Result<Value, StoreError> {
    match view {
        Some(view) => to_value(view),
        None => Err(StoreError::NotFound(format!("{} {}", label, uuid))),
    }
}

impl Catalogue {
    pub fn new(services: Services) -> Self {
        Self { services }
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    /// Detail shape of `uuid`, which must carry `label`.
    ///
    /// Categories have no page of their own and are rejected.
    pub fn show(&self, label: NodeLabel, uuid: &str) -> Result<Value, StoreError> {
        debug!(%label, uuid, "Showing entity");
        let s = &self.services;

        match label {
            NodeLabel::Material => found(label, uuid, s.material.show(uuid)?),
            NodeLabel::Production => found(label, uuid, s.production.show(uuid)?),
            NodeLabel::Venue => found(label, uuid, s.venue.show(uuid)?),
            NodeLabel::Person => found(label, uuid, s.person.show(uuid)?),
            NodeLabel::Company => found(label, uuid, s.company.show(uuid)?),
            NodeLabel::Character => found(label, uuid, s.programme.show_character(uuid)?),
            NodeLabel::Award => found(label, uuid, s.award.show(uuid)?),
            NodeLabel::AwardCeremony => found(label, uuid, s.award.show_ceremony(uuid)?),
            NodeLabel::Season => found(label, uuid, s.programme.show_season(uuid)?),
            NodeLabel::Festival => found(label, uuid, s.programme.show_festival(uuid)?),
            NodeLabel::FestivalSeries => found(label, uuid, s.programme.show_festival_series(uuid)?),
            NodeLabel::AwardCeremonyCategory => Err(StoreError::InvalidInput(
                "award ceremony categories are shown through their ceremony".into(),
            )),
        }
    }

    /// List shape of every node carrying `label`.
    pub fn list(&self, label: NodeLabel) -> Result<Value, StoreError> {
        debug!(%label, "Listing entities");
        let s = &self.services;

        match label {
            NodeLabel::Material => to_value(s.material.list()?),
            NodeLabel::Production => to_value(s.production.list()?),
            NodeLabel::Venue => to_value(s.venue.list()?),
            NodeLabel::Person => to_value(s.person.list()?),
            NodeLabel::Company => to_value(s.company.list()?),
            NodeLabel::Character => to_value(s.programme.list_characters()?),
            NodeLabel::Award => to_value(s.award.list()?),
            NodeLabel::AwardCeremony => to_value(s.award.list_ceremonies()?),
            NodeLabel::Season | NodeLabel::Festival | NodeLabel::FestivalSeries => {
                to_value(s.programme.list(label)?)
            }
            NodeLabel::AwardCeremonyCategory => Err(StoreError::InvalidInput(
                "award ceremony categories are listed through their ceremony".into(),
            )),
        }
    }
}
