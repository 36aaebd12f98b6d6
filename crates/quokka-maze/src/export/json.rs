//! JSON format export for D3.js and web visualization tools.
//!
//! Generates JSON with "nodes" and "links" arrays compatible with D3.js
//! force-directed layouts. Each undirected edge appears once.

use crate::{Maze, MazeError, Result, Vertex};
use serde_json::{json, Value};

/// Export maze to D3.js-compatible JSON format
pub fn export_json<V: Vertex>(maze: &Maze<V>) -> Result<String> {
    let nodes: Vec<Value> = maze
        .vertices()
        .map(|vertex| {
            json!({
                "id": vertex.id(),
                "has_food": vertex.has_food(),
                "degree": vertex.degree(),
            })
        })
        .collect();

    let links: Vec<Value> = maze
        .edges()
        .into_iter()
        .map(|(u, v)| json!({ "source": u, "target": v }))
        .collect();

    let result = json!({
        "nodes": nodes,
        "links": links,
    });

    serde_json::to_string_pretty(&result)
        .map_err(|e| MazeError::serialization("Failed to serialize maze", Some(e)))
}
