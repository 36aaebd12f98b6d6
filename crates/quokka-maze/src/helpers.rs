//! Convenience helpers for building mazes.
//!
//! These wrap the registry and edge operations for the common cases of
//! adding a batch of locations and wiring them into corridors.

use crate::error::Result;
use crate::graph::{Location, Maze, Vertex, VertexId};

/// Add a fresh location to the maze.
///
/// # Returns
///
/// The id of the new location.
pub fn add_location(maze: &mut Maze, has_food: bool) -> Result<VertexId> {
    maze.try_add_vertex(Location::new(has_food))
}

/// Add one fresh location per food flag, in order.
pub fn add_locations(maze: &mut Maze, food: &[bool]) -> Result<Vec<VertexId>> {
    food.iter()
        .map(|&has_food| add_location(maze, has_food))
        .collect()
}

/// Fix an edge between each pair of consecutive vertices.
///
/// Stops at the first edge that cannot be fixed; earlier edges stay.
pub fn connect_chain<V: Vertex>(maze: &mut Maze<V>, ids: &[VertexId]) -> Result<()> {
    for pair in ids.windows(2) {
        maze.try_fix_edge(pair[0], pair[1])?;
    }
    Ok(())
}

/// Add a corridor of fresh locations, one per food flag, connected in order.
///
/// # Example
///
/// ```rust
/// use quokka_maze::{helpers, Maze};
///
/// let mut maze = Maze::new();
/// let ids = helpers::build_chain(&mut maze, &[false, true, false]).unwrap();
/// assert_eq!(maze.edge_count(), 2);
/// assert!(maze.has_edge(ids[0], ids[1]));
/// ```
pub fn build_chain(maze: &mut Maze, food: &[bool]) -> Result<Vec<VertexId>> {
    let ids = add_locations(maze, food)?;
    connect_chain(maze, &ids)?;
    Ok(ids)
}

/// Add a `rows` x `cols` grid of fresh locations, 4-connected.
///
/// `has_food(row, col)` decides which cells carry food. Ids are returned
/// row-major.
pub fn build_grid(
    maze: &mut Maze,
    rows: usize,
    cols: usize,
    has_food: impl Fn(usize, usize) -> bool,
) -> Result<Vec<VertexId>> {
    let mut ids = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            ids.push(add_location(maze, has_food(row, col))?);
        }
    }

    for row in 0..rows {
        for col in 0..cols {
            let here = ids[row * cols + col];
            if col + 1 < cols {
                maze.try_fix_edge(here, ids[row * cols + col + 1])?;
            }
            if row + 1 < rows {
                maze.try_fix_edge(here, ids[(row + 1) * cols + col])?;
            }
        }
    }

    Ok(ids)
}
