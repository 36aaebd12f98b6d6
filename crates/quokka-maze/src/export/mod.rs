//! Export module for visualizing mazes in external tools.
//!
//! Supports:
//! - **DOT**: Graphviz visualization, with optional path highlighting
//! - **JSON**: D3.js and web-based tools (`export-json` feature)
//!
//! Export is one-way; nothing here reads a maze back.

pub mod dot;
#[cfg(feature = "export-json")]
pub mod json;

pub use dot::{export_dot, export_dot_styled, DotOptions};
#[cfg(feature = "export-json")]
pub use json::export_json;
