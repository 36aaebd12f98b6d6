//! Basic usage example for quokka-maze
//!
//! Builds the corridor
//!
//! ```text
//!             *       *
//!     A---B---C---D---E
//! ```
//!
//! (`*` marks food) and asks how far apart the food may be.

use quokka_maze::export::DotOptions;
use quokka_maze::{helpers, Maze, VertexId};

fn main() -> quokka_maze::Result<()> {
    let mut maze = Maze::new();
    let ids = helpers::build_chain(&mut maze, &[false, false, true, false, true])?;
    let names = ["A", "B", "C", "D", "E"];
    let name = |id: VertexId| {
        ids.iter()
            .position(|&x| x == id)
            .map(|i| names[i])
            .unwrap_or("?")
    };

    println!("Maze: {} locations, {} corridors", maze.vertex_count(), maze.edge_count());

    for k in [1, 2] {
        match maze.find_path(ids[0], ids[4], k) {
            Some(path) => {
                let route: Vec<_> = path.iter().map(|&id| name(id)).collect();
                println!("k={k}: {}", route.join(" -> "));
            }
            None => println!("k={k}: the colony starves"),
        }
    }

    // Take the food away from C and see how much has to be brought in.
    maze.set_food(ids[2], false)?;
    for x in 0..3 {
        if let Some(plan) = maze.plan_path_with_extra_food(ids[0], ids[4], 2, x)? {
            let drops: Vec<_> = plan.placements.iter().map(|&id| name(id)).collect();
            println!("x={x}: reachable, extra food at [{}]", drops.join(", "));
        } else {
            println!("x={x}: unreachable");
        }
    }

    let path = maze.find_path(ids[0], ids[4], 4).unwrap_or_default();
    let mut options = DotOptions::default().with_path(&path);
    for (id, label) in ids.iter().zip(names) {
        options = options.with_label(*id, label);
    }
    println!("\n{}", maze.export_dot_styled(options)?);
    println!("{}", maze.export_json()?);

    Ok(())
}
