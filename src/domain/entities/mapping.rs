//! Mapping entity tying an alias to its target URL.

/// A persisted alias → target URL mapping.
///
/// Mappings are created and deleted, never updated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub id: i64,
    pub alias: String,
    pub target_url: String,
}

impl Mapping {
    pub fn new(id: i64, alias: String, target_url: String) -> Self {
        Self {
            id,
            alias,
            target_url,
        }
    }
}

/// Input data for creating a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMapping {
    pub target_url: String,
    pub alias: String,
}

impl NewMapping {
    /// Attaches the store-assigned id.
    pub fn into_mapping(self, id: i64) -> Mapping {
        Mapping::new(id, self.alias, self.target_url)
    }
}
