//! # quokka-maze
//!
//! Food-constrained path search over undirected mazes of locations.
//!
//! A colony travels along a simple path and may never go more than `k`
//! consecutive hops without passing a location with food. The crate answers
//! two questions about a [`Maze`]:
//!
//! - [`Maze::find_path`]: is there such a path, and which one?
//! - [`Maze::exists_path_with_extra_food`]: is there one if we may place food
//!   on at most `x` extra locations?
//!
//! ## Core Principles
//!
//! - **Simple Graph Always**: edge operations never leave a self-loop, a
//!   duplicate, or a one-way edge behind
//! - **Identity, Not Structure**: vertices are compared by [`VertexId`]
//! - **No Panics at the Surface**: plain operations report `false` / `None`;
//!   `try_` forms say why
//! - **Stateless Queries**: search state lives and dies with each call
//!
//! ## Example
//!
//! ```rust
//! use quokka_maze::{helpers, Maze};
//!
//! // A---B---C*--D---E*
//! let mut maze = Maze::new();
//! let ids = helpers::build_chain(&mut maze, &[false, false, true, false, true]).unwrap();
//!
//! assert_eq!(maze.find_path(ids[0], ids[4], 2), Some(ids.clone()));
//! assert_eq!(maze.find_path(ids[0], ids[4], 1), None);
//! assert!(maze.exists_path_with_extra_food(ids[0], ids[4], 1, 2));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod graph;
pub mod helpers;

// Re-export main types
pub use error::{MazeError, Result};
pub use graph::{FoodPlan, Location, Maze, Path, Vertex, VertexId};
