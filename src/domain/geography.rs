//! Geography - Regions, States (UFs) and Municipalities

use serde::{Deserialize, Serialize};

/// Identifier of a region, state or municipality as issued by the API
pub type GeoId = u32;

/// A region, state or municipality
///
/// The API uses the same `{id, nome}` shape for every level; municipalities
/// additionally carry `cod_uf`, the id of the state they belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoEntity {
    pub id: GeoId,
    #[serde(rename = "nome")]
    pub name: String,
    /// Parent entity (the state for a municipality, the region for a state)
    #[serde(
        rename = "cod_uf",
        alias = "regiao_id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_id: Option<GeoId>,
}

impl GeoEntity {
    pub fn new(id: GeoId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            parent_id: None,
        }
    }

    /// Builder: set the parent entity
    pub fn with_parent(mut self, parent_id: GeoId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }
}

/// Find an entity by id
pub fn find_by_id(entities: &[GeoEntity], id: GeoId) -> Option<&GeoEntity> {
    entities.iter().find(|e| e.id == id)
}

/// Keep only the entities whose parent is `parent_id`
pub fn children_of(entities: Vec<GeoEntity>, parent_id: GeoId) -> Vec<GeoEntity> {
    entities
        .into_iter()
        .filter(|e| e.parent_id == Some(parent_id))
        .collect()
}
