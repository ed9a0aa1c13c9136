//! View types returned by the resolution engine
//!
//! Every record carries a `model` discriminant and serializes camelCase; this
//! tagging is the contract consumed by the HTTP layer.
//!
//! Conventions:
//! - A singular relation that resolves to nothing is `null`.
//! - A collection that resolves to nothing is `[]`.
//! - Fields that a shape does not resolve at all (e.g. nested writing credits
//!   beyond the nesting depth) are omitted rather than emitted as `null`.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::db::NodeRecord;
use crate::model::{Lineage, Model};

// ============================================================================
// Identity
// ============================================================================

/// `{model, uuid, name}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRef {
    pub model: Model,
    pub uuid: String,
    pub name: String,
}

impl From<&NodeRecord> for EntityRef {
    fn from(node: &NodeRecord) -> Self {
        Self {
            model: node.label.model(),
            uuid: node.uuid.clone(),
            name: node.name.clone(),
        }
    }
}

/// Identity plus disambiguator, used by flat list shapes
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedItem {
    pub model: Model,
    pub uuid: String,
    pub name: String,
    pub differentiator: Option<String>,
}

impl From<&NodeRecord> for NamedItem {
    fn from(node: &NodeRecord) -> Self {
        Self {
            model: node.label.model(),
            uuid: node.uuid.clone(),
            name: node.name.clone(),
            differentiator: node.differentiator.clone(),
        }
    }
}

// ============================================================================
// Ancestor chains
// ============================================================================

/// One level of a sur-entity chain.
///
/// Serializes as `{model, uuid, name, surX}` where `surX` is the lineage's
/// ancestor key; the deepest resolved level always carries `surX: null`.
#[derive(Debug, Clone, PartialEq)]
pub struct AncestorChain {
    pub lineage: Lineage,
    pub model: Model,
    pub uuid: String,
    pub name: String,
    pub sur: Option<Box<AncestorChain>>,
}

impl AncestorChain {
    /// Number of levels in the chain, counting this one
    pub fn depth(&self) -> usize {
        1 + self.sur.as_ref().map_or(0, |sur| sur.depth())
    }
}

impl Serialize for AncestorChain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("model", &self.model)?;
        map.serialize_entry("uuid", &self.uuid)?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry(self.lineage.sur_key(), &self.sur)?;
        map.end()
    }
}

// ============================================================================
// Credits
// ============================================================================

/// A Company credited entity with its credited members
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyEntity {
    pub model: Model,
    pub uuid: String,
    pub name: String,
    pub members: Vec<EntityRef>,
}

/// A Material credited as a writing entity (source material)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditedMaterial {
    pub model: Model,
    pub uuid: String,
    pub name: String,
    pub format: Option<String>,
    pub year: Option<i64>,
    pub sur_material: Option<AncestorChain>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub writing_credits: Option<Vec<CreditGroup>>,
}

/// Entity appearing in a credit or nomination group.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CreditedEntity {
    Person(EntityRef),
    Company(CompanyEntity),
    Material(Box<CreditedMaterial>),
}

impl CreditedEntity {
    pub fn uuid(&self) -> &str {
        match self {
            CreditedEntity::Person(person) => &person.uuid,
            CreditedEntity::Company(company) => &company.uuid,
            CreditedEntity::Material(material) => &material.uuid,
        }
    }

    pub fn model(&self) -> Model {
        match self {
            CreditedEntity::Person(person) => person.model,
            CreditedEntity::Company(company) => company.model,
            CreditedEntity::Material(material) => material.model,
        }
    }
}

/// A named (or, before merging, nameless) credit on an entity
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditGroup {
    pub model: Model,
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_type: Option<String>,
    #[serde(skip)]
    pub position: Option<i64>,
    pub entities: Vec<CreditedEntity>,
}

/// The company a person was credited through, with the other credited members
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerCompany {
    pub model: Model,
    pub uuid: String,
    pub name: String,
    pub co_members: Vec<EntityRef>,
}

/// A credit seen from one of its credited entities
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerspectiveCredit {
    pub model: Model,
    pub name: Option<String>,
    #[serde(skip)]
    pub position: Option<i64>,
    pub employer_company: Option<EmployerCompany>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub credited_members: Vec<EntityRef>,
    pub co_entities: Vec<CreditedEntity>,
}

// ============================================================================
// Shared items
// ============================================================================

/// `{model, uuid, name, surVenue}`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueRef {
    pub model: Model,
    pub uuid: String,
    pub name: String,
    pub sur_venue: Option<AncestorChain>,
}

/// A material referenced from another entity
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialItem {
    pub model: Model,
    pub uuid: String,
    pub name: String,
    pub format: Option<String>,
    pub year: Option<i64>,
    pub sur_material: Option<AncestorChain>,
    pub writing_credits: Vec<CreditGroup>,
}

/// A production referenced from another entity
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionItem {
    pub model: Model,
    pub uuid: String,
    pub name: String,
    pub subtitle: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub venue: Option<VenueRef>,
    pub sur_production: Option<AncestorChain>,
}

/// A production carrying the perspective entity's credits on it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditedProductionItem {
    #[serde(flatten)]
    pub production: ProductionItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producer_credits: Option<Vec<PerspectiveCredit>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creative_credits: Option<Vec<PerspectiveCredit>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crew_credits: Option<Vec<PerspectiveCredit>>,
}

// ============================================================================
// Nominations and award trees
// ============================================================================

/// A nomination as listed under its category
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NominationView {
    pub model: Model,
    pub is_winner: bool,
    #[serde(rename = "type")]
    pub nomination_type: String,
    pub entities: Vec<CreditedEntity>,
    pub productions: Vec<ProductionItem>,
    pub materials: Vec<MaterialItem>,
}

/// A nomination as listed on the page of one of its nominees (or of a work
/// one of its nominees derives from).
///
/// Which collections are present depends on the perspective: the perspective
/// kind's own collection becomes its `co*` variant.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerspectiveNomination {
    pub model: Model,
    pub is_winner: bool,
    #[serde(rename = "type")]
    pub nomination_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_subsequent_version_materials: Option<Vec<MaterialItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employer_company: Option<EmployerCompany>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<CreditedEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub co_entities: Option<Vec<CreditedEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub productions: Option<Vec<ProductionItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub co_productions: Option<Vec<ProductionItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub materials: Option<Vec<MaterialItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub co_materials: Option<Vec<MaterialItem>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBranch<T> {
    pub model: Model,
    pub name: String,
    pub nominations: Vec<T>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CeremonyBranch<T> {
    pub model: Model,
    pub uuid: String,
    pub name: String,
    pub categories: Vec<CategoryBranch<T>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardBranch<T> {
    pub model: Model,
    pub uuid: String,
    pub name: String,
    pub ceremonies: Vec<CeremonyBranch<T>>,
}

// ============================================================================
// Material
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubMaterialItem {
    pub model: Model,
    pub uuid: String,
    pub name: String,
    pub format: Option<String>,
    pub year: Option<i64>,
    pub writing_credits: Vec<CreditGroup>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRef {
    pub model: Model,
    pub uuid: String,
    pub name: String,
    pub qualifier: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterGroupView {
    pub model: Model,
    pub name: Option<String>,
    #[serde(skip)]
    pub position: Option<i64>,
    pub characters: Vec<CharacterRef>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialView {
    pub model: Model,
    pub uuid: String,
    pub name: String,
    pub differentiator: Option<String>,
    pub format: Option<String>,
    pub year: Option<i64>,
    pub sur_material: Option<AncestorChain>,
    pub sub_materials: Vec<SubMaterialItem>,
    pub original_version_material: Option<MaterialItem>,
    pub writing_credits: Vec<CreditGroup>,
    pub subsequent_version_materials: Vec<MaterialItem>,
    pub sourcing_materials: Vec<MaterialItem>,
    pub character_groups: Vec<CharacterGroupView>,
    pub productions: Vec<ProductionItem>,
    pub awards: Vec<AwardBranch<PerspectiveNomination>>,
    pub subsequent_version_material_awards: Vec<AwardBranch<PerspectiveNomination>>,
}

// ============================================================================
// Production
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FestivalRef {
    pub model: Model,
    pub uuid: String,
    pub name: String,
    pub festival_series: Option<EntityRef>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubProductionItem {
    pub model: Model,
    pub uuid: String,
    pub name: String,
    pub subtitle: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub venue: Option<VenueRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_productions: Option<Vec<SubProductionItem>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionView {
    pub model: Model,
    pub uuid: String,
    pub name: String,
    pub subtitle: Option<String>,
    pub start_date: Option<String>,
    pub press_date: Option<String>,
    pub end_date: Option<String>,
    pub material: Option<MaterialItem>,
    pub venue: Option<VenueRef>,
    pub season: Option<EntityRef>,
    pub festival: Option<FestivalRef>,
    pub sur_production: Option<AncestorChain>,
    pub sub_productions: Vec<SubProductionItem>,
    pub producer_credits: Vec<CreditGroup>,
    pub creative_credits: Vec<CreditGroup>,
    pub crew_credits: Vec<CreditGroup>,
    pub awards: Vec<AwardBranch<PerspectiveNomination>>,
}

// ============================================================================
// Venue
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueProductionItem {
    pub model: Model,
    pub uuid: String,
    pub name: String,
    pub subtitle: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub sub_venue: Option<EntityRef>,
    pub sur_production: Option<AncestorChain>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueView {
    pub model: Model,
    pub uuid: String,
    pub name: String,
    pub differentiator: Option<String>,
    pub sur_venue: Option<AncestorChain>,
    pub sub_venues: Vec<EntityRef>,
    pub productions: Vec<VenueProductionItem>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueListItem {
    pub model: Model,
    pub uuid: String,
    pub name: String,
    pub sur_venue: Option<AncestorChain>,
    pub sub_venues: Vec<EntityRef>,
}

// ============================================================================
// Person / Company
// ============================================================================

/// Detail shape shared by Person and Company
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditedEntityView {
    pub model: Model,
    pub uuid: String,
    pub name: String,
    pub differentiator: Option<String>,
    pub materials: Vec<MaterialItem>,
    pub subsequent_version_materials: Vec<MaterialItem>,
    pub sourcing_materials: Vec<MaterialItem>,
    pub producer_productions: Vec<CreditedProductionItem>,
    pub creative_productions: Vec<CreditedProductionItem>,
    pub crew_productions: Vec<CreditedProductionItem>,
    pub awards: Vec<AwardBranch<PerspectiveNomination>>,
    pub subsequent_version_material_awards: Vec<AwardBranch<PerspectiveNomination>>,
}

// ============================================================================
// Character
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepictionView {
    pub display_name: Option<String>,
    pub qualifier: Option<String>,
    pub group: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterMaterialItem {
    #[serde(flatten)]
    pub material: MaterialItem,
    pub depictions: Vec<DepictionView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterView {
    pub model: Model,
    pub uuid: String,
    pub name: String,
    pub differentiator: Option<String>,
    pub materials: Vec<CharacterMaterialItem>,
}

// ============================================================================
// Awards
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardView {
    pub model: Model,
    pub uuid: String,
    pub name: String,
    pub differentiator: Option<String>,
    pub ceremonies: Vec<CeremonyBranch<NominationView>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardCeremonyView {
    pub model: Model,
    pub uuid: String,
    pub name: String,
    pub award: Option<EntityRef>,
    pub categories: Vec<CategoryBranch<NominationView>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardCeremonyListItem {
    pub model: Model,
    pub uuid: String,
    pub name: String,
    pub award: Option<EntityRef>,
}

// ============================================================================
// Seasons and festivals
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonView {
    pub model: Model,
    pub uuid: String,
    pub name: String,
    pub differentiator: Option<String>,
    pub productions: Vec<ProductionItem>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FestivalView {
    pub model: Model,
    pub uuid: String,
    pub name: String,
    pub differentiator: Option<String>,
    pub festival_series: Option<EntityRef>,
    pub productions: Vec<ProductionItem>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FestivalSeriesView {
    pub model: Model,
    pub uuid: String,
    pub name: String,
    pub differentiator: Option<String>,
    pub festivals: Vec<EntityRef>,
}
