//! The vertex abstraction consumed by [`Maze`](super::Maze), and [`Location`],
//! the implementation shipped with the crate.

use super::types::VertexId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A location in the maze.
///
/// A vertex only stores its own half of each edge. Keeping adjacency symmetric
/// is the maze's job: callers should connect registered vertices through
/// [`Maze::fix_edge`](super::Maze::fix_edge) and
/// [`Maze::block_edge`](super::Maze::block_edge), never by calling
/// [`add_neighbor`](Vertex::add_neighbor) directly.
pub trait Vertex {
    /// Identity of this vertex. Must be stable for the vertex's lifetime.
    fn id(&self) -> VertexId;

    /// Whether this location carries food.
    fn has_food(&self) -> bool;

    /// Place or remove food at this location.
    fn set_has_food(&mut self, has_food: bool);

    /// Record `other` as a neighbor.
    ///
    /// Returns `true` if it was not already a neighbor.
    fn add_neighbor(&mut self, other: VertexId) -> bool;

    /// Forget `other` as a neighbor.
    ///
    /// Returns `true` if it was a neighbor.
    fn remove_neighbor(&mut self, other: VertexId) -> bool;

    /// Neighbor identities. Order is unspecified.
    fn neighbors(&self) -> Vec<VertexId>;

    /// Whether `other` is a neighbor.
    fn has_neighbor(&self, other: VertexId) -> bool {
        self.neighbors().contains(&other)
    }

    /// Number of neighbors.
    fn degree(&self) -> usize {
        self.neighbors().len()
    }
}

/// Default [`Vertex`] implementation.
///
/// Adjacency is a `BTreeSet`, so neighbor iteration is deterministic for a
/// fixed set of identities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    id: VertexId,
    has_food: bool,
    edges: BTreeSet<VertexId>,
}

impl Location {
    /// Create an unconnected location with a fresh identity.
    pub fn new(has_food: bool) -> Self {
        Self::with_id(VertexId::new(), has_food)
    }

    /// Create an unconnected location with a caller-chosen identity.
    pub fn with_id(id: VertexId, has_food: bool) -> Self {
        Self {
            id,
            has_food,
            edges: BTreeSet::new(),
        }
    }

    /// Create a location with food.
    pub fn food() -> Self {
        Self::new(true)
    }

    /// Create a location without food.
    pub fn empty() -> Self {
        Self::new(false)
    }

    /// Borrow the adjacency set.
    pub fn edges(&self) -> &BTreeSet<VertexId> {
        &self.edges
    }
}

impl Vertex for Location {
    fn id(&self) -> VertexId {
        self.id
    }

    fn has_food(&self) -> bool {
        self.has_food
    }

    fn set_has_food(&mut self, has_food: bool) {
        self.has_food = has_food;
    }

    fn add_neighbor(&mut self, other: VertexId) -> bool {
        self.edges.insert(other)
    }

    fn remove_neighbor(&mut self, other: VertexId) -> bool {
        self.edges.remove(&other)
    }

    fn neighbors(&self) -> Vec<VertexId> {
        self.edges.iter().copied().collect()
    }

    fn has_neighbor(&self, other: VertexId) -> bool {
        self.edges.contains(&other)
    }

    fn degree(&self) -> usize {
        self.edges.len()
    }
}

/// Identity equality: two locations are equal iff they are the same vertex.
impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Location {}

impl std::hash::Hash for Location {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
