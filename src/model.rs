//! Node labels, edge types and the `model` discriminant carried by every view

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Discriminant written into every output record as `model`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Model {
    Person,
    Company,
    Material,
    Production,
    Venue,
    Character,
    CharacterGroup,
    Award,
    AwardCeremony,
    AwardCeremonyCategory,
    Nomination,
    WritingCredit,
    ProducerCredit,
    CreativeCredit,
    CrewCredit,
    Season,
    Festival,
    FestivalSeries,
}

impl Model {
    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Person => "PERSON",
            Model::Company => "COMPANY",
            Model::Material => "MATERIAL",
            Model::Production => "PRODUCTION",
            Model::Venue => "VENUE",
            Model::Character => "CHARACTER",
            Model::CharacterGroup => "CHARACTER_GROUP",
            Model::Award => "AWARD",
            Model::AwardCeremony => "AWARD_CEREMONY",
            Model::AwardCeremonyCategory => "AWARD_CEREMONY_CATEGORY",
            Model::Nomination => "NOMINATION",
            Model::WritingCredit => "WRITING_CREDIT",
            Model::ProducerCredit => "PRODUCER_CREDIT",
            Model::CreativeCredit => "CREATIVE_CREDIT",
            Model::CrewCredit => "CREW_CREDIT",
            Model::Season => "SEASON",
            Model::Festival => "FESTIVAL",
            Model::FestivalSeries => "FESTIVAL_SERIES",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Node label as stored in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeLabel {
    Production,
    Material,
    Venue,
    Person,
    Company,
    Character,
    Award,
    AwardCeremony,
    AwardCeremonyCategory,
    Season,
    Festival,
    FestivalSeries,
}

impl NodeLabel {
    pub const ALL: [NodeLabel; 12] = [
        NodeLabel::Production,
        NodeLabel::Material,
        NodeLabel::Venue,
        NodeLabel::Person,
        NodeLabel::Company,
        NodeLabel::Character,
        NodeLabel::Award,
        NodeLabel::AwardCeremony,
        NodeLabel::AwardCeremonyCategory,
        NodeLabel::Season,
        NodeLabel::Festival,
        NodeLabel::FestivalSeries,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeLabel::Production => "Production",
            NodeLabel::Material => "Material",
            NodeLabel::Venue => "Venue",
            NodeLabel::Person => "Person",
            NodeLabel::Company => "Company",
            NodeLabel::Character => "Character",
            NodeLabel::Award => "Award",
            NodeLabel::AwardCeremony => "AwardCeremony",
            NodeLabel::AwardCeremonyCategory => "AwardCeremonyCategory",
            NodeLabel::Season => "Season",
            NodeLabel::Festival => "Festival",
            NodeLabel::FestivalSeries => "FestivalSeries",
        }
    }

    pub fn model(&self) -> Model {
        match self {
            NodeLabel::Production => Model::Production,
            NodeLabel::Material => Model::Material,
            NodeLabel::Venue => Model::Venue,
            NodeLabel::Person => Model::Person,
            NodeLabel::Company => Model::Company,
            NodeLabel::Character => Model::Character,
            NodeLabel::Award => Model::Award,
            NodeLabel::AwardCeremony => Model::AwardCeremony,
            NodeLabel::AwardCeremonyCategory => Model::AwardCeremonyCategory,
            NodeLabel::Season => Model::Season,
            NodeLabel::Festival => Model::Festival,
            NodeLabel::FestivalSeries => Model::FestivalSeries,
        }
    }
}

impl FromStr for NodeLabel {
    type Err = StoreError;

    /// Accepts the stored label (`AwardCeremony`) or the model tag (`AWARD_CEREMONY`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeLabel::ALL
            .iter()
            .copied()
            .find(|label| label.as_str() == s || label.model().as_str() == s)
            .ok_or_else(|| StoreError::UnknownModel(s.to_string()))
    }
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directed edge types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeType {
    HasSubMaterial,
    HasSubProduction,
    HasSubVenue,
    SubsequentVersionOf,
    UsesSourceMaterial,
    HasWritingEntity,
    HasProducerEntity,
    HasCreativeEntity,
    HasCrewEntity,
    HasNominee,
    HasCharacter,
    PlaysAt,
    ProductionOf,
    PartOfSeason,
    PartOfFestival,
    PartOfFestivalSeries,
    PresentsCategory,
    PresentedAt,
}

impl EdgeType {
    pub const ALL: [EdgeType; 18] = [
        EdgeType::HasSubMaterial,
        EdgeType::HasSubProduction,
        EdgeType::HasSubVenue,
        EdgeType::SubsequentVersionOf,
        EdgeType::UsesSourceMaterial,
        EdgeType::HasWritingEntity,
        EdgeType::HasProducerEntity,
        EdgeType::HasCreativeEntity,
        EdgeType::HasCrewEntity,
        EdgeType::HasNominee,
        EdgeType::HasCharacter,
        EdgeType::PlaysAt,
        EdgeType::ProductionOf,
        EdgeType::PartOfSeason,
        EdgeType::PartOfFestival,
        EdgeType::PartOfFestivalSeries,
        EdgeType::PresentsCategory,
        EdgeType::PresentedAt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeType::HasSubMaterial => "HAS_SUB_MATERIAL",
            EdgeType::HasSubProduction => "HAS_SUB_PRODUCTION",
            EdgeType::HasSubVenue => "HAS_SUB_VENUE",
            EdgeType::SubsequentVersionOf => "SUBSEQUENT_VERSION_OF",
            EdgeType::UsesSourceMaterial => "USES_SOURCE_MATERIAL",
            EdgeType::HasWritingEntity => "HAS_WRITING_ENTITY",
            EdgeType::HasProducerEntity => "HAS_PRODUCER_ENTITY",
            EdgeType::HasCreativeEntity => "HAS_CREATIVE_ENTITY",
            EdgeType::HasCrewEntity => "HAS_CREW_ENTITY",
            EdgeType::HasNominee => "HAS_NOMINEE",
            EdgeType::HasCharacter => "HAS_CHARACTER",
            EdgeType::PlaysAt => "PLAYS_AT",
            EdgeType::ProductionOf => "PRODUCTION_OF",
            EdgeType::PartOfSeason => "PART_OF_SEASON",
            EdgeType::PartOfFestival => "PART_OF_FESTIVAL",
            EdgeType::PartOfFestivalSeries => "PART_OF_FESTIVAL_SERIES",
            EdgeType::PresentsCategory => "PRESENTS_CATEGORY",
            EdgeType::PresentedAt => "PRESENTED_AT",
        }
    }
}

impl FromStr for EdgeType {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EdgeType::ALL
            .iter()
            .copied()
            .find(|edge_type| edge_type.as_str() == s)
            .ok_or_else(|| StoreError::InvalidInput(format!("Unknown edge type: {}", s)))
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four credit edge families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreditKind {
    Writing,
    Producer,
    Creative,
    Crew,
}

impl CreditKind {
    pub fn edge_type(&self) -> EdgeType {
        match self {
            CreditKind::Writing => EdgeType::HasWritingEntity,
            CreditKind::Producer => EdgeType::HasProducerEntity,
            CreditKind::Creative => EdgeType::HasCreativeEntity,
            CreditKind::Crew => EdgeType::HasCrewEntity,
        }
    }

    pub fn model(&self) -> Model {
        match self {
            CreditKind::Writing => Model::WritingCredit,
            CreditKind::Producer => Model::ProducerCredit,
            CreditKind::Creative => Model::CreativeCredit,
            CreditKind::Crew => Model::CrewCredit,
        }
    }

    /// Label given to the merged group of nameless credits.
    pub fn default_label(&self) -> &'static str {
        match self {
            CreditKind::Writing => "by",
            CreditKind::Producer => "produced by",
            CreditKind::Creative => "creative by",
            CreditKind::Crew => "crew by",
        }
    }
}

/// A containment hierarchy and how deep its ancestors are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lineage {
    Material,
    Production,
    Venue,
}

impl Lineage {
    pub fn edge_type(&self) -> EdgeType {
        match self {
            Lineage::Material => EdgeType::HasSubMaterial,
            Lineage::Production => EdgeType::HasSubProduction,
            Lineage::Venue => EdgeType::HasSubVenue,
        }
    }

    pub fn label(&self) -> NodeLabel {
        match self {
            Lineage::Material => NodeLabel::Material,
            Lineage::Production => NodeLabel::Production,
            Lineage::Venue => NodeLabel::Venue,
        }
    }

    pub fn model(&self) -> Model {
        match self {
            Lineage::Material => Model::Material,
            Lineage::Production => Model::Production,
            Lineage::Venue => Model::Venue,
        }
    }

    /// Maximum number of ancestor tiers ever resolved.
    pub fn max_tiers(&self) -> usize {
        match self {
            Lineage::Material | Lineage::Production => 2,
            Lineage::Venue => 1,
        }
    }

    /// Output key of the ancestor field (`surMaterial`, ...).
    pub fn sur_key(&self) -> &'static str {
        match self {
            Lineage::Material => "surMaterial",
            Lineage::Production => "surProduction",
            Lineage::Venue => "surVenue",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_serializes_screaming_snake() {
        let json = serde_json::to_string(&Model::AwardCeremonyCategory).unwrap();
        assert_eq!(json, "\"AWARD_CEREMONY_CATEGORY\"");
        assert_eq!(Model::WritingCredit.as_str(), "WRITING_CREDIT");
    }

    #[test]
    fn test_node_label_parses_label_or_model() {
        assert_eq!("AwardCeremony".parse::<NodeLabel>().unwrap(), NodeLabel::AwardCeremony);
        assert_eq!("AWARD_CEREMONY".parse::<NodeLabel>().unwrap(), NodeLabel::AwardCeremony);
        assert!("Playwright".parse::<NodeLabel>().is_err());
    }

    #[test]
    fn test_edge_type_round_trips_through_str() {
        for edge_type in EdgeType::ALL {
            assert_eq!(edge_type.as_str().parse::<EdgeType>().unwrap(), edge_type);
        }
    }

    #[test]
    fn test_lineage_tiers() {
        assert_eq!(Lineage::Material.max_tiers(), 2);
        assert_eq!(Lineage::Production.max_tiers(), 2);
        assert_eq!(Lineage::Venue.max_tiers(), 1);
    }
}
