//! Main Maze interface for graph mutation and queries.

use super::types::{FoodPlan, Path, VertexId};
use super::vertex::{Location, Vertex};
use crate::error::{MazeError, Result};
use log::{debug, warn};
use std::collections::{HashMap, HashSet};

/// An undirected simple graph of locations.
///
/// `Maze` owns its vertices and is the only place adjacency is changed, which
/// keeps three invariants: adjacency is symmetric, there are no self-loops,
/// and no vertex identity is registered twice. Vertices are never removed.
///
/// Every operation has two forms. The `try_` form returns a [`Result`] that
/// says why an operation was refused; the plain form reports the same outcome
/// as `bool` / `Option` and logs the reason at `debug` level.
#[derive(Clone)]
pub struct Maze<V: Vertex = Location> {
    vertices: HashMap<VertexId, V>,
    // Registration order, for deterministic iteration and export
    order: Vec<VertexId>,
}

impl<V: Vertex> Maze<V> {
    /// Create an empty maze.
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Create an empty maze with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: HashMap::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    // ===== Vertex Registry =====

    /// Register a vertex. Returns `false` if it is already present or arrives
    /// with neighbors.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        report("add_vertex", self.try_add_vertex(vertex)).is_some()
    }

    /// Register a vertex and return its id.
    ///
    /// # Errors
    ///
    /// - [`MazeError::DuplicateVertex`] if a vertex with the same identity is registered
    /// - [`MazeError::InvalidOperation`] if the vertex already has neighbors
    pub fn try_add_vertex(&mut self, vertex: V) -> Result<VertexId> {
        let id = vertex.id();
        if self.vertices.contains_key(&id) {
            return Err(MazeError::DuplicateVertex {
                vertex_id: id.to_string(),
            });
        }

        // Its neighbors could not hold the matching back-edge.
        if vertex.degree() > 0 {
            return Err(MazeError::InvalidOperation {
                message: format!(
                    "vertex {id} arrived with {} neighbor(s); connect it with fix_edge instead",
                    vertex.degree()
                ),
            });
        }

        debug!("Adding vertex: id={id}, has_food={}", vertex.has_food());
        self.vertices.insert(id, vertex);
        self.order.push(id);

        Ok(id)
    }

    // ===== Edge Mutation =====

    /// Connect `u` and `v`. Returns `false` if either is missing, `u == v`, or
    /// the edge already exists.
    pub fn fix_edge(&mut self, u: VertexId, v: VertexId) -> bool {
        report("fix_edge", self.try_fix_edge(u, v)).is_some()
    }

    /// Connect `u` and `v`.
    ///
    /// A half-present edge (one direction only) is completed.
    ///
    /// # Errors
    ///
    /// - [`MazeError::VertexNotFound`] if either endpoint is not registered
    /// - [`MazeError::SelfLoop`] if `u == v`
    /// - [`MazeError::EdgeExists`] if the edge is already present both ways
    /// - [`MazeError::AdjacencyMismatch`] if the vertices did not record the
    ///   edge; the halves added by this call are rolled back
    pub fn try_fix_edge(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        self.get_vertex(u)?;
        self.get_vertex(v)?;

        if u == v {
            return Err(MazeError::SelfLoop {
                vertex_id: u.to_string(),
            });
        }

        if self.half_edges(u, v) == (true, true) {
            return Err(MazeError::EdgeExists {
                u: u.to_string(),
                v: v.to_string(),
            });
        }

        debug!("Fixing edge: {u} -- {v}");
        let added_forward = self.vertex_mut(u)?.add_neighbor(v);
        let added_backward = self.vertex_mut(v)?.add_neighbor(u);

        if self.half_edges(u, v) != (true, true) {
            // A half that was already present stays.
            if added_forward {
                self.vertex_mut(u)?.remove_neighbor(v);
            }
            if added_backward {
                self.vertex_mut(v)?.remove_neighbor(u);
            }
            return Err(MazeError::AdjacencyMismatch {
                operation: "fix_edge",
                u: u.to_string(),
                v: v.to_string(),
            });
        }

        Ok(())
    }

    /// Disconnect `u` and `v`. Returns `false` if either is missing or there
    /// is no edge between them.
    pub fn block_edge(&mut self, u: VertexId, v: VertexId) -> bool {
        report("block_edge", self.try_block_edge(u, v)).is_some()
    }

    /// Disconnect `u` and `v`.
    ///
    /// A half-present edge is removed as well.
    ///
    /// # Errors
    ///
    /// - [`MazeError::VertexNotFound`] if either endpoint is not registered
    /// - [`MazeError::EdgeNotFound`] if neither direction is present
    /// - [`MazeError::AdjacencyMismatch`] if a direction survived removal
    pub fn try_block_edge(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        self.get_vertex(u)?;
        self.get_vertex(v)?;

        if self.half_edges(u, v) == (false, false) {
            return Err(MazeError::EdgeNotFound {
                u: u.to_string(),
                v: v.to_string(),
            });
        }

        debug!("Blocking edge: {u} -- {v}");
        self.vertex_mut(u)?.remove_neighbor(v);
        self.vertex_mut(v)?.remove_neighbor(u);

        if self.half_edges(u, v) != (false, false) {
            return Err(MazeError::AdjacencyMismatch {
                operation: "block_edge",
                u: u.to_string(),
                v: v.to_string(),
            });
        }

        Ok(())
    }

    // ===== Inspection =====

    /// Whether a vertex with this id is registered.
    pub fn contains(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Get a vertex by id.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::VertexNotFound`] if the vertex isn't registered.
    pub fn get_vertex(&self, id: VertexId) -> Result<&V> {
        self.vertices
            .get(&id)
            .ok_or_else(|| MazeError::vertex_not_found(id))
    }

    /// Place or remove food at a location.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::VertexNotFound`] if the vertex isn't registered.
    pub fn set_food(&mut self, id: VertexId, has_food: bool) -> Result<()> {
        debug!("Setting food: id={id}, has_food={has_food}");
        self.vertex_mut(id)?.set_has_food(has_food);
        Ok(())
    }

    /// Neighbors of a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::VertexNotFound`] if the vertex isn't registered.
    pub fn neighbors(&self, id: VertexId) -> Result<Vec<VertexId>> {
        Ok(self.get_vertex(id)?.neighbors())
    }

    /// Whether `u` and `v` are connected (both directions present).
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.contains(u) && self.contains(v) && self.half_edges(u, v) == (true, true)
    }

    /// Number of registered vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(|v| v.degree()).sum::<usize>() / 2
    }

    /// Vertex ids in registration order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.order.iter().copied()
    }

    /// Vertices in registration order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.order.iter().filter_map(|id| self.vertices.get(id))
    }

    /// Undirected edges, each once, in registration order of their first endpoint.
    pub fn edges(&self) -> Vec<(VertexId, VertexId)> {
        let mut emitted = HashSet::new();
        let mut edges = Vec::with_capacity(self.edge_count());

        for u in self.vertex_ids() {
            emitted.insert(u);
            if let Ok(vertex) = self.get_vertex(u) {
                for v in vertex.neighbors() {
                    if !emitted.contains(&v) {
                        edges.push((u, v));
                    }
                }
            }
        }

        edges
    }

    /// Verify the simple-graph invariants.
    ///
    /// # Errors
    ///
    /// - [`MazeError::SelfLoop`] if a vertex lists itself
    /// - [`MazeError::VertexNotFound`] if an adjacency entry is not registered
    /// - [`MazeError::AdjacencyMismatch`] if an edge is recorded one way only
    pub fn check_invariants(&self) -> Result<()> {
        for (&u, vertex) in &self.vertices {
            for v in vertex.neighbors() {
                if u == v {
                    return Err(MazeError::SelfLoop {
                        vertex_id: u.to_string(),
                    });
                }
                if !self.get_vertex(v)?.has_neighbor(u) {
                    return Err(MazeError::AdjacencyMismatch {
                        operation: "check_invariants",
                        u: u.to_string(),
                        v: v.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Whether `path` is a simple path of adjacent vertices on which no
    /// stretch between food locations exceeds `k` hops.
    pub fn path_is_valid(&self, path: &[VertexId], k: i64) -> bool {
        let (Ok(k), Some(&first)) = (usize::try_from(k), path.first()) else {
            return false;
        };

        let mut visited = HashSet::with_capacity(path.len());
        if !self.contains(first) || !visited.insert(first) {
            return false;
        }

        let mut budget = k;
        for hop in path.windows(2) {
            let (from, to) = (hop[0], hop[1]);
            if !self.has_edge(from, to) || !visited.insert(to) {
                return false;
            }
            let refill = match self.get_vertex(from) {
                Ok(vertex) if vertex.has_food() => k,
                Ok(_) => budget,
                Err(_) => return false,
            };
            match refill.checked_sub(1) {
                Some(left) => budget = left,
                None => return false,
            }
        }

        true
    }

    // ===== Path Search =====

    /// Find a simple path from `s` to `t` with at most `k` hops between food
    /// locations.
    ///
    /// Returns `None` if no such simple path exists, `k < 0`, or either vertex
    /// is missing. The search is exhaustive over simple paths.
    /// See [`algorithms::find_path`](super::algorithms::find_path).
    pub fn find_path(&self, s: VertexId, t: VertexId, k: i64) -> Option<Path> {
        report("find_path", self.try_find_path(s, t, k)).flatten()
    }

    /// Fallible form of [`find_path`](Self::find_path): `Err` for invalid
    /// input, `Ok(None)` when the search is exhausted.
    pub fn try_find_path(&self, s: VertexId, t: VertexId, k: i64) -> Result<Option<Path>> {
        super::algorithms::find_path(self, s, t, k)
    }

    /// Whether a simple path from `s` to `t` satisfies the `k`-hop food rule
    /// after placing food on at most `x` extra locations.
    ///
    /// Returns `false` on invalid input.
    pub fn exists_path_with_extra_food(&self, s: VertexId, t: VertexId, k: i64, x: i64) -> bool {
        report(
            "exists_path_with_extra_food",
            self.try_exists_path_with_extra_food(s, t, k, x),
        )
        .unwrap_or(false)
    }

    /// Fallible form of [`exists_path_with_extra_food`](Self::exists_path_with_extra_food).
    pub fn try_exists_path_with_extra_food(
        &self,
        s: VertexId,
        t: VertexId,
        k: i64,
        x: i64,
    ) -> Result<bool> {
        super::algorithms::exists_path_with_extra_food(self, s, t, k, x)
    }

    /// Route and extra-food placements for the extra-food search.
    ///
    /// # Errors
    ///
    /// Same as [`try_exists_path_with_extra_food`](Self::try_exists_path_with_extra_food).
    pub fn plan_path_with_extra_food(
        &self,
        s: VertexId,
        t: VertexId,
        k: i64,
        x: i64,
    ) -> Result<Option<FoodPlan>> {
        super::algorithms::plan_path_with_extra_food(self, s, t, k, x)
    }

    // ===== Export Methods =====

    /// Export the maze to Graphviz DOT format.
    ///
    /// **Warning**: Large mazes (>10K vertices) log a warning.
    /// Mazes over 100K vertices fail.
    pub fn export_dot(&self) -> Result<String> {
        self.check_export_size()?;
        crate::export::export_dot(self)
    }

    /// Export the maze to DOT format with custom styling options.
    pub fn export_dot_styled(&self, options: crate::export::DotOptions) -> Result<String> {
        self.check_export_size()?;
        crate::export::export_dot_styled(self, options)
    }

    /// Export the maze to D3.js-compatible JSON.
    ///
    /// **Warning**: Large mazes (>10K vertices) log a warning.
    /// Mazes over 100K vertices fail.
    #[cfg(feature = "export-json")]
    pub fn export_json(&self) -> Result<String> {
        self.check_export_size()?;
        crate::export::export_json(self)
    }

    // Private helper methods

    fn vertex_mut(&mut self, id: VertexId) -> Result<&mut V> {
        self.vertices
            .get_mut(&id)
            .ok_or_else(|| MazeError::vertex_not_found(id))
    }

    /// `(u lists v, v lists u)`. Both endpoints must be registered.
    fn half_edges(&self, u: VertexId, v: VertexId) -> (bool, bool) {
        let forward = self.vertices.get(&u).is_some_and(|x| x.has_neighbor(v));
        let backward = self.vertices.get(&v).is_some_and(|x| x.has_neighbor(u));
        (forward, backward)
    }

    /// Check maze size for export operations and issue warnings/errors.
    fn check_export_size(&self) -> Result<()> {
        let vertex_count = self.vertex_count();

        if vertex_count > 100_000 {
            return Err(MazeError::InvalidOperation {
                message: format!(
                    "Maze too large for export ({vertex_count} vertices > 100K limit)"
                ),
            });
        }

        if vertex_count > 10_000 {
            warn!("Exporting large maze ({vertex_count} vertices)");
        }

        Ok(())
    }
}

impl<V: Vertex> Default for Maze<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> std::fmt::Debug for Maze<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Maze")
            .field("vertices", &self.vertex_count())
            .field("edges", &self.edge_count())
            .finish()
    }
}

/// Collapse a `try_` result for the plain API, logging the refusal.
fn report<T>(operation: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            debug!("{operation} refused: {err}");
            None
        }
    }
}
