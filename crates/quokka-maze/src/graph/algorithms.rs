//! Food-constrained path search.
//!
//! Both searches walk simple paths depth-first while carrying a food budget:
//! the number of hops the colony can still make before it must pass a
//! location with food. Leaving a food location refills the budget to `k`;
//! every hop costs one. The extra-food variant may additionally spend a
//! credit to place food on the location being left when the budget runs dry.
//!
//! Vertices already on the current branch are never re-entered, so every
//! path is simple. A `(vertex, budget, credits)` state is remembered as a dead
//! end only when its whole subtree failed without running into the current
//! branch; such a failure holds whichever way the state is reached. A state
//! whose subtree was cut short by the branch is retried when another branch
//! reaches it, so both searches are exact. The worst case stays exponential,
//! as for any simple-path search.
//!
//! The DFS runs on an explicit frame stack, so deep mazes cannot overflow the
//! call stack. All working state is local to the call.

use crate::error::{MazeError, Result};
use crate::graph::{FoodPlan, Maze, Path, Vertex, VertexId};
use log::{debug, trace};
use std::collections::{HashMap, HashSet};

/// Find a simple path from `start` to `end` on which no stretch between food
/// locations is longer than `k` hops.
///
/// The start counts as a food checkpoint with a full budget. Returns the
/// first path the DFS discovers, not necessarily the shortest.
///
/// # Returns
/// - `Ok(Some(path))` with `path[0] == start` and `path.last() == end`
/// - `Ok(None)` if no such path exists
///
/// # Errors
/// - [`MazeError::InvalidArgument`] if `k < 0`
/// - [`MazeError::VertexNotFound`] if `start` or `end` is not in the maze
pub fn find_path<V: Vertex>(
    maze: &Maze<V>,
    start: VertexId,
    end: VertexId,
    k: i64,
) -> Result<Option<Path>> {
    let k = non_negative("k", k)?;
    let chain = search(maze, start, end, k, 0)?;
    Ok(chain.map(|states| states.iter().map(|state| state.vertex).collect()))
}

/// Decide whether a simple path from `start` to `end` satisfies the `k`-hop
/// food rule once food is placed on at most `x` extra locations along it.
///
/// # Errors
/// - [`MazeError::InvalidArgument`] if `k < 0` or `x < 0`
/// - [`MazeError::VertexNotFound`] if `start` or `end` is not in the maze
pub fn exists_path_with_extra_food<V: Vertex>(
    maze: &Maze<V>,
    start: VertexId,
    end: VertexId,
    k: i64,
    x: i64,
) -> Result<bool> {
    Ok(plan_path_with_extra_food(maze, start, end, k, x)?.is_some())
}

/// Like [`exists_path_with_extra_food`], but also return the route and the
/// locations where the extra food goes.
///
/// Food is placed lazily: only when the budget would otherwise run out, on
/// the location being left.
pub fn plan_path_with_extra_food<V: Vertex>(
    maze: &Maze<V>,
    start: VertexId,
    end: VertexId,
    k: i64,
    x: i64,
) -> Result<Option<FoodPlan>> {
    let k = non_negative("k", k)?;
    let credits = non_negative("x", x)?;

    let Some(states) = search(maze, start, end, k, credits)? else {
        return Ok(None);
    };

    let placements = states
        .windows(2)
        .filter(|hop| hop[1].credits < hop[0].credits)
        .map(|hop| hop[0].vertex)
        .collect();
    let path = states.iter().map(|state| state.vertex).collect();

    Ok(Some(FoodPlan { path, placements }))
}

/// Resources carried into a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct State {
    vertex: VertexId,
    /// Hops left before food is required
    budget: usize,
    /// Extra food placements left
    credits: usize,
}

/// One level of the explicit DFS stack.
struct Frame {
    state: State,
    /// Budget and credits after any hop out of `state`, `None` if stranded.
    after_hop: Option<(usize, usize)>,
    neighbors: std::vec::IntoIter<VertexId>,
    /// Set when the subtree skipped a vertex because it was on the branch.
    blocked: bool,
}

impl Frame {
    fn enter<V: Vertex>(maze: &Maze<V>, state: State, k: usize) -> Result<Self> {
        let vertex = maze.get_vertex(state.vertex)?;
        let after_hop = after_hop(k, vertex.has_food(), state);
        // A stranded frame has nothing to explore.
        let neighbors = match after_hop {
            Some(_) => vertex.neighbors(),
            None => Vec::new(),
        };

        Ok(Self {
            state,
            after_hop,
            neighbors: neighbors.into_iter(),
            blocked: false,
        })
    }
}

/// Budget and credits left after leaving a vertex.
fn after_hop(k: usize, has_food: bool, state: State) -> Option<(usize, usize)> {
    let refill = if has_food { k } else { state.budget };
    match refill.checked_sub(1) {
        Some(budget) => Some((budget, state.credits)),
        // Place food here and leave with a fresh budget.
        None if state.credits > 0 => k.checked_sub(1).map(|budget| (budget, state.credits - 1)),
        None => None,
    }
}

/// Shared DFS engine. Returns the state chain from `start` to `end`.
fn search<V: Vertex>(
    maze: &Maze<V>,
    start: VertexId,
    end: VertexId,
    k: usize,
    credits: usize,
) -> Result<Option<Vec<State>>> {
    maze.get_vertex(start)?;
    maze.get_vertex(end)?;

    let origin = State {
        vertex: start,
        budget: k,
        credits,
    };

    if start == end {
        return Ok(Some(vec![origin]));
    }

    let mut dead_ends: HashSet<State> = HashSet::new();
    let mut predecessors: HashMap<State, State> = HashMap::new();
    let mut on_path: HashSet<VertexId> = HashSet::new();
    let mut stack = vec![Frame::enter(maze, origin, k)?];
    let mut expanded = 1usize;

    on_path.insert(start);

    while let Some(frame) = stack.last_mut() {
        let current = frame.state;
        let (Some((budget, credits)), Some(next)) = (frame.after_hop, frame.neighbors.next())
        else {
            let blocked = frame.blocked;
            on_path.remove(&current.vertex);
            stack.pop();
            if !blocked {
                dead_ends.insert(current);
            } else if let Some(parent) = stack.last_mut() {
                parent.blocked = true;
            }
            continue;
        };

        if on_path.contains(&next) {
            frame.blocked = true;
            continue;
        }

        let state = State {
            vertex: next,
            budget,
            credits,
        };
        if dead_ends.contains(&state) {
            continue;
        }
        // Overwritten on re-entry, so the links always follow the live branch.
        predecessors.insert(state, current);
        expanded += 1;
        trace!(
            "{} -> {} (budget={}, credits={})",
            current.vertex, next, budget, credits
        );

        if next == end {
            debug!("Path found from {start} to {end} after expanding {expanded} states");
            return Ok(Some(reconstruct(&predecessors, origin, state)));
        }

        on_path.insert(next);
        stack.push(Frame::enter(maze, state, k)?);
    }

    debug!(
        "No path from {start} to {end} (k={k}, credits={credits}); {expanded} states expanded"
    );
    Ok(None)
}

/// Walk predecessor links back from `goal` to `origin`.
fn reconstruct(predecessors: &HashMap<State, State>, origin: State, goal: State) -> Vec<State> {
    let mut chain = vec![goal];
    let mut cursor = goal;

    while cursor != origin {
        match predecessors.get(&cursor) {
            Some(&previous) => {
                chain.push(previous);
                cursor = previous;
            }
            None => break,
        }
    }

    chain.reverse();
    chain
}

fn non_negative(name: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| MazeError::negative(name, value))
}
