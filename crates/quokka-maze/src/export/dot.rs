//! DOT format export for Graphviz visualization.
//!
//! Vertices are written as `v0`, `v1`, ... in registration order; the full id
//! goes in the label unless a custom label is supplied.

use crate::{Maze, Result, Vertex, VertexId};
use std::collections::{HashMap, HashSet};

/// Options for styling DOT export
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Fill color for locations with food (hex color code)
    pub food_color: String,
    /// Fill color for locations without food
    pub empty_color: String,
    /// Node shape (box, circle, ellipse, etc.)
    pub shape: String,
    /// Graph layout direction: LR, TB, RL, BT
    pub rankdir: String,
    /// Custom vertex labels; unlabeled vertices show their id
    pub labels: HashMap<VertexId, String>,
    /// Path to draw in bold (e.g., the result of `find_path`)
    pub highlight_path: Vec<VertexId>,
    /// Color for highlighted vertices and edges
    pub highlight_color: String,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            food_color: "#A5D6A7".to_string(),
            empty_color: "#E0E0E0".to_string(),
            shape: "circle".to_string(),
            rankdir: "LR".to_string(),
            labels: HashMap::new(),
            highlight_path: Vec::new(),
            highlight_color: "#E53935".to_string(),
        }
    }
}

impl DotOptions {
    /// Label a vertex.
    pub fn with_label(mut self, id: VertexId, label: impl Into<String>) -> Self {
        self.labels.insert(id, label.into());
        self
    }

    /// Highlight a path.
    pub fn with_path(mut self, path: &[VertexId]) -> Self {
        self.highlight_path = path.to_vec();
        self
    }
}

/// Export maze to Graphviz DOT format
pub fn export_dot<V: Vertex>(maze: &Maze<V>) -> Result<String> {
    export_dot_styled(maze, DotOptions::default())
}

/// Export maze to Graphviz DOT format with custom styling
pub fn export_dot_styled<V: Vertex>(maze: &Maze<V>, options: DotOptions) -> Result<String> {
    let mut output = String::new();

    let index: HashMap<VertexId, usize> = maze
        .vertex_ids()
        .enumerate()
        .map(|(i, id)| (id, i))
        .collect();
    let on_path: HashSet<VertexId> = options.highlight_path.iter().copied().collect();
    let path_edges: HashSet<(VertexId, VertexId)> = options
        .highlight_path
        .windows(2)
        .flat_map(|hop| [(hop[0], hop[1]), (hop[1], hop[0])])
        .collect();

    // Header
    output.push_str("graph maze {\n");
    output.push_str(&format!("    rankdir={};\n", options.rankdir));
    output.push_str(&format!("    node [style=filled, shape={}];\n\n", options.shape));

    for (i, vertex) in maze.vertices().enumerate() {
        let id = vertex.id();
        let label = options
            .labels
            .get(&id)
            .map(|label| escape_dot_label(label))
            .unwrap_or_else(|| id.to_string());
        let color = if vertex.has_food() {
            &options.food_color
        } else {
            &options.empty_color
        };
        let outline = if on_path.contains(&id) {
            format!(", penwidth=3, color=\"{}\"", options.highlight_color)
        } else {
            String::new()
        };

        output.push_str(&format!(
            "    v{i} [label=\"{label}\", fillcolor=\"{color}\"{outline}];\n"
        ));
    }

    output.push('\n');

    for (u, v) in maze.edges() {
        let (Some(a), Some(b)) = (index.get(&u), index.get(&v)) else {
            continue;
        };
        let style = if path_edges.contains(&(u, v)) {
            format!(" [penwidth=3, color=\"{}\"]", options.highlight_color)
        } else {
            String::new()
        };
        output.push_str(&format!("    v{a} -- v{b}{style};\n"));
    }

    output.push_str("}\n");

    Ok(output)
}

/// Escape special characters for DOT labels
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
