//! Core maze types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Vertex`]: The location abstraction, with [`Location`] as the default
//! - [`Maze`]: The undirected simple graph and its mutation interface
//! - [`algorithms`]: Food-constrained path search

mod types;
mod vertex;
mod maze;
pub mod algorithms;

pub use types::{FoodPlan, Path, VertexId};
pub use vertex::{Location, Vertex};
pub use maze::Maze;
