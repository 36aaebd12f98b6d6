//! Core identity types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of a vertex.
///
/// Minted once when a vertex is created and never derived from the vertex's
/// contents, so two locations with identical food flags and neighbors are
/// still distinct. Copies of a vertex share its identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(Uuid);

impl VertexId {
    /// Mint a fresh, globally unique identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID (e.g., one issued by an external registry).
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for VertexId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A vertex sequence `[s, ..., t]` returned by path search.
pub type Path = Vec<VertexId>;

/// A route found by the extra-food search, with the food it relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodPlan {
    /// Simple path from start to destination
    pub path: Path,
    /// Vertices on `path` where extra food must be placed, in travel order
    pub placements: Vec<VertexId>,
}

impl FoodPlan {
    /// Number of hops along the path.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
