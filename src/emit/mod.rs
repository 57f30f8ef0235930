//! Schema emission module
//!
//! Converts a finished inferred type into a JSON Schema (draft 2020-12)
//! node, depth-first.

mod render;
mod types;

pub use render::{render, EmitOptions};
pub use types::{JsonType, JsonTypeOrArray, SchemaNode, SCHEMA_DRAFT_URI};

#[cfg(test)]
mod tests;
