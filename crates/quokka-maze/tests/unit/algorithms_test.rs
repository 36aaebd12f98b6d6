//! Unit tests for food-constrained path search.
//!
//! Tests cover:
//! - find_path on the reference corridors
//! - exists_path_with_extra_food on the reference corridors
//! - argument validation (negative k / x, unknown vertices)
//! - branching mazes, dead ends and cycles
//! - states cut short by the current branch being retried from another
//! - independence of successive searches

use quokka_maze::{helpers, Location, Maze, MazeError, VertexId};
use uuid::Uuid;

// A---B---C*--D---E*
fn food_at_c_and_e() -> (Maze, Vec<VertexId>) {
    let mut maze = Maze::new();
    let ids = helpers::build_chain(&mut maze, &[false, false, true, false, true]).unwrap();
    (maze, ids)
}

// A---B---C---D---E*
fn food_at_e() -> (Maze, Vec<VertexId>) {
    let mut maze = Maze::new();
    let ids = helpers::build_chain(&mut maze, &[false, false, false, false, true]).unwrap();
    (maze, ids)
}

#[test]
fn test_find_path_reference_corridor() {
    let (maze, ids) = food_at_c_and_e();
    let [a, b, c, _, e] = [ids[0], ids[1], ids[2], ids[3], ids[4]];

    let path = maze.find_path(a, e, 2).unwrap();
    assert_eq!(path.len(), 5);
    assert_eq!(path, ids);

    assert_eq!(maze.find_path(a, e, 1), None);
    assert_eq!(maze.find_path(a, c, 4), Some(vec![a, b, c]));
}

#[test]
fn test_find_path_same_vertex() {
    let (maze, ids) = food_at_c_and_e();

    for k in [0, 1, 7] {
        assert_eq!(maze.find_path(ids[1], ids[1], k), Some(vec![ids[1]]));
    }
}

#[test]
fn test_find_path_negative_k() {
    let (maze, ids) = food_at_c_and_e();

    assert_eq!(maze.find_path(ids[0], ids[4], -1), None);
    assert_eq!(maze.find_path(ids[0], ids[0], -3), None);
    assert!(matches!(
        maze.try_find_path(ids[0], ids[4], -1),
        Err(MazeError::InvalidArgument { name: "k", value: -1, .. })
    ));
}

#[test]
fn test_find_path_unknown_vertices() {
    let (maze, ids) = food_at_c_and_e();
    let stranger = VertexId::new();

    assert_eq!(maze.find_path(ids[0], stranger, 3), None);
    assert_eq!(maze.find_path(stranger, ids[0], 3), None);
    assert_eq!(maze.find_path(stranger, stranger, 3), None);
    assert!(matches!(
        maze.try_find_path(stranger, ids[0], 3),
        Err(MazeError::VertexNotFound { .. })
    ));
}

#[test]
fn test_find_path_zero_budget() {
    let (maze, ids) = food_at_c_and_e();

    // Even a food location cannot pay for a hop when k = 0.
    assert_eq!(maze.find_path(ids[2], ids[3], 0), None);
    assert_eq!(maze.try_find_path(ids[0], ids[1], 0).unwrap(), None);
}

#[test]
fn test_find_path_disconnected() {
    let mut maze = Maze::new();
    let a = helpers::add_location(&mut maze, true).unwrap();
    let b = helpers::add_location(&mut maze, true).unwrap();

    assert_eq!(maze.try_find_path(a, b, 10).unwrap(), None);
}

#[test]
fn test_find_path_avoids_starving_branch() {
    //       B---C---D
    //      /         \
    //     A           G
    //      \         /
    //       E*--F---
    let mut maze = Maze::new();
    let ids = helpers::add_locations(&mut maze, &[false, false, false, false, true, false, false])
        .unwrap();
    let [a, b, c, d, e, f, g] = [ids[0], ids[1], ids[2], ids[3], ids[4], ids[5], ids[6]];
    helpers::connect_chain(&mut maze, &[a, b, c, d, g]).unwrap();
    helpers::connect_chain(&mut maze, &[a, e, f, g]).unwrap();

    assert_eq!(maze.find_path(a, g, 2), Some(vec![a, e, f, g]));
    // With a generous budget either branch works, and the answer is still valid.
    let path = maze.find_path(a, g, 4).unwrap();
    assert!(maze.path_is_valid(&path, 4));
}

#[test]
fn test_find_path_in_cycle_stays_simple() {
    //   A---B
    //   |   |
    //   D---C---T
    let mut maze = Maze::new();
    let ids = helpers::add_locations(&mut maze, &[false, false, false, false, false]).unwrap();
    let [a, b, c, d, t] = [ids[0], ids[1], ids[2], ids[3], ids[4]];
    helpers::connect_chain(&mut maze, &[a, b, c, d, a]).unwrap();
    maze.try_fix_edge(c, t).unwrap();

    for k in 3..6 {
        let path = maze.find_path(a, t, k).unwrap();
        assert!(maze.path_is_valid(&path, k), "k={k}: {path:?}");
    }
    assert_eq!(maze.find_path(a, t, 2), None);
}

#[test]
fn test_find_path_without_any_food() {
    let mut maze = Maze::new();
    let ids = helpers::build_chain(&mut maze, &[false, false, false]).unwrap();

    assert_eq!(maze.find_path(ids[0], ids[2], 2), Some(ids.clone()));
    assert_eq!(maze.find_path(ids[0], ids[2], 1), None);
}

#[test]
fn test_find_path_reflects_mutations() {
    let (mut maze, ids) = food_at_c_and_e();

    assert!(maze.find_path(ids[0], ids[4], 2).is_some());
    assert!(maze.block_edge(ids[2], ids[3]));
    assert_eq!(maze.find_path(ids[0], ids[4], 2), None);
    assert!(maze.fix_edge(ids[2], ids[3]));
    assert!(maze.find_path(ids[0], ids[4], 2).is_some());

    // Food every hop lets even k = 1 through.
    maze.set_food(ids[1], true).unwrap();
    maze.set_food(ids[3], true).unwrap();
    assert_eq!(maze.find_path(ids[0], ids[4], 1), Some(ids.clone()));
}

#[test]
fn test_successive_searches_are_independent() {
    let (maze, ids) = food_at_c_and_e();

    let first = maze.find_path(ids[0], ids[4], 2);
    assert_eq!(maze.find_path(ids[0], ids[4], 1), None);
    assert_eq!(maze.find_path(ids[0], ids[4], 2), first);
    assert_eq!(maze.find_path(ids[4], ids[0], 2), Some(ids.iter().rev().copied().collect()));
}

#[test]
fn test_extra_food_reference_corridor() {
    let (maze, ids) = food_at_e();
    let [a, e] = [ids[0], ids[4]];

    assert!(!maze.exists_path_with_extra_food(a, e, 2, 0));
    assert!(maze.exists_path_with_extra_food(a, e, 2, 1));
    assert!(maze.exists_path_with_extra_food(a, e, 1, 6));
}

#[test]
fn test_extra_food_exact_credit_count() {
    let (maze, ids) = food_at_e();
    let [a, e] = [ids[0], ids[4]];

    // k = 1 needs food on B, C and D.
    assert!(!maze.exists_path_with_extra_food(a, e, 1, 2));
    assert!(maze.exists_path_with_extra_food(a, e, 1, 3));

    let plan = maze.plan_path_with_extra_food(a, e, 1, 6).unwrap().unwrap();
    assert_eq!(plan.path, ids);
    assert_eq!(plan.placements, vec![ids[1], ids[2], ids[3]]);
}

#[test]
fn test_extra_food_zero_credits_matches_find_path() {
    let (maze, ids) = food_at_c_and_e();

    for k in 0..5 {
        assert_eq!(
            maze.exists_path_with_extra_food(ids[0], ids[4], k, 0),
            maze.find_path(ids[0], ids[4], k).is_some(),
            "k={k}"
        );
    }
}

#[test]
fn test_extra_food_zero_budget() {
    let (maze, ids) = food_at_e();

    assert!(!maze.exists_path_with_extra_food(ids[0], ids[1], 0, 10));
    assert!(maze.exists_path_with_extra_food(ids[0], ids[0], 0, 0));
}

#[test]
fn test_extra_food_invalid_arguments() {
    let (maze, ids) = food_at_e();

    assert!(!maze.exists_path_with_extra_food(ids[0], ids[4], -1, 3));
    assert!(!maze.exists_path_with_extra_food(ids[0], ids[4], 3, -1));
    assert!(!maze.exists_path_with_extra_food(ids[0], VertexId::new(), 3, 3));
    assert!(matches!(
        maze.try_exists_path_with_extra_food(ids[0], ids[4], 3, -2),
        Err(MazeError::InvalidArgument { name: "x", value: -2, .. })
    ));
}

#[test]
fn test_extra_food_unreachable() {
    let mut maze = Maze::new();
    let a = helpers::add_location(&mut maze, false).unwrap();
    let b = helpers::add_location(&mut maze, false).unwrap();

    assert!(!maze.try_exists_path_with_extra_food(a, b, 5, 5).unwrap());
}

#[test]
fn test_plan_without_placements() {
    let (maze, ids) = food_at_c_and_e();

    let plan = maze.plan_path_with_extra_food(ids[0], ids[4], 2, 3).unwrap().unwrap();
    assert_eq!(plan.path, ids);
    assert!(plan.placements.is_empty());
}

#[test]
fn test_find_path_on_grid() {
    let mut maze = Maze::new();
    // Food down the middle column of a 5x5 grid.
    let ids = helpers::build_grid(&mut maze, 5, 5, |_, col| col == 2).unwrap();
    let corner = ids[0];
    let opposite = ids[24];

    let path = maze.find_path(corner, opposite, 4).unwrap();
    assert!(maze.path_is_valid(&path, 4));
    assert_eq!(path.first(), Some(&corner));
    assert_eq!(path.last(), Some(&opposite));
}

#[test]
fn test_deep_corridor_does_not_overflow() {
    let mut maze = Maze::new();
    let food: Vec<bool> = (0..50_000).map(|i| i % 3 == 0).collect();
    let ids = helpers::build_chain(&mut maze, &food).unwrap();

    let path = maze.find_path(ids[0], ids[ids.len() - 1], 3).unwrap();
    assert_eq!(path.len(), ids.len());
}

// Food on 0 and 4. With k = 3 every route from 8 to 4 must refill at 0.
const DETOUR_EDGES: [(usize, usize); 14] = [
    (0, 1),
    (0, 3),
    (1, 2),
    (1, 9),
    (1, 7),
    (2, 4),
    (3, 8),
    (3, 9),
    (4, 5),
    (4, 6),
    (4, 7),
    (5, 6),
    (6, 7),
    (8, 9),
];

/// Build the detour maze with ids ranked so that neighbors are visited in
/// `ranks` order (vertex `i` sorts at position `ranks[i]`).
fn detour_maze(ranks: [u128; 10]) -> (Maze, Vec<VertexId>) {
    let mut maze = Maze::new();
    let ids: Vec<VertexId> = ranks
        .iter()
        .enumerate()
        .map(|(i, &rank)| {
            let id = VertexId::from_uuid(Uuid::from_u128(rank + 1));
            maze.try_add_vertex(Location::with_id(id, i == 0 || i == 4)).unwrap()
        })
        .collect();
    for (u, v) in DETOUR_EDGES {
        maze.try_fix_edge(ids[u], ids[v]).unwrap();
    }
    (maze, ids)
}

#[test]
fn test_find_path_retries_state_blocked_by_branch() {
    // In this order some states are first reached while 3 or 9 is already on
    // the branch, and only a later branch can finish from them.
    let (maze, ids) = detour_maze([6, 8, 2, 9, 0, 4, 3, 7, 1, 5]);

    let path = maze.find_path(ids[8], ids[4], 3).unwrap();
    assert_eq!(path, [8, 9, 3, 0, 1, 2, 4].map(|i| ids[i]).to_vec());
    assert!(maze.path_is_valid(&path, 3));
    assert!(maze.exists_path_with_extra_food(ids[8], ids[4], 3, 0));
}

#[test]
fn test_find_path_independent_of_neighbor_order() {
    let orders = [
        [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
        [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
        [6, 8, 2, 9, 0, 4, 3, 7, 1, 5],
        [3, 0, 7, 5, 9, 1, 8, 2, 6, 4],
    ];

    for ranks in orders {
        let (maze, ids) = detour_maze(ranks);
        let path = maze.find_path(ids[8], ids[4], 3);
        assert!(
            path.as_ref().is_some_and(|p| maze.path_is_valid(p, 3)),
            "ranks={ranks:?}: {path:?}"
        );
        assert_eq!(maze.find_path(ids[8], ids[4], 2), None);
    }
}
