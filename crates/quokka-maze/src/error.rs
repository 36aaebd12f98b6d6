//! Error types for maze operations.
//!
//! Every fallible operation has a `try_` form returning [`Result<T>`] with a
//! context-rich error. The plain forms on [`Maze`](crate::Maze) collapse these
//! errors to `false` / `None`.

use thiserror::Error;

/// Result type alias for maze operations.
pub type Result<T> = std::result::Result<T, MazeError>;

/// Error type for all maze operations.
///
/// Every variant leaves the maze unchanged: operations validate before they mutate,
/// and the one post-mutation check ([`MazeError::AdjacencyMismatch`]) rolls back.
#[derive(Error, Debug)]
pub enum MazeError {
    /// Vertex is not registered in the maze
    #[error("Vertex not found: {vertex_id}")]
    VertexNotFound {
        /// ID of the missing vertex
        vertex_id: String,
    },

    /// Vertex with the same identity is already registered
    #[error("Duplicate vertex: {vertex_id}")]
    DuplicateVertex {
        /// ID of the vertex that was added twice
        vertex_id: String,
    },

    /// Edge from a vertex to itself
    #[error("Self-loop rejected on vertex {vertex_id}")]
    SelfLoop {
        /// ID of the vertex
        vertex_id: String,
    },

    /// Edge is already present in both adjacency sets
    #[error("Edge already exists: {u} -- {v}")]
    EdgeExists {
        /// First endpoint
        u: String,
        /// Second endpoint
        v: String,
    },

    /// No edge in either direction between the endpoints
    #[error("Edge not found: {u} -- {v}")]
    EdgeNotFound {
        /// First endpoint
        u: String,
        /// Second endpoint
        v: String,
    },

    /// Adjacency sets disagree after a mutation (broken `Vertex` implementation)
    #[error("Adjacency mismatch after {operation} on {u} -- {v}")]
    AdjacencyMismatch {
        /// Operation that observed the mismatch
        operation: &'static str,
        /// First endpoint
        u: String,
        /// Second endpoint
        v: String,
    },

    /// Numeric argument out of range (e.g., negative food budget)
    #[error("Invalid argument: {name} = {value} ({reason})")]
    InvalidArgument {
        /// Parameter name
        name: &'static str,
        /// Value that was passed
        value: i64,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Operation that would break a maze invariant
    #[error("Invalid operation: {message}")]
    InvalidOperation {
        /// Description of what went wrong
        message: String,
    },

    /// Serialization error during export
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl MazeError {
    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Create a vertex-not-found error for the given id.
    pub(crate) fn vertex_not_found(id: impl std::fmt::Display) -> Self {
        Self::VertexNotFound {
            vertex_id: id.to_string(),
        }
    }

    /// Reject a negative budget or credit count.
    pub(crate) fn negative(name: &'static str, value: i64) -> Self {
        Self::InvalidArgument {
            name,
            value,
            reason: "must be >= 0",
        }
    }
}
