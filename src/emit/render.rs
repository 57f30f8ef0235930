//! Rendering inferred types as JSON Schema

use super::types::SchemaNode;
use crate::classify::MAX_SAFE_INTEGER;
use crate::model::{InferredType, ObjectShape};
use crate::range::NumberRange;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::BTreeMap;
use tracing::debug;

/// How an inferred type is turned into a schema
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitOptions {
    /// Add the `$schema` keyword to the root node
    pub include_document_wrapper: bool,
    /// Attach `minimum`/`maximum` to numbers whose observations differed
    pub numeric_bounds: bool,
}

impl EmitOptions {
    /// Options for a bare schema node
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for a full schema document
    pub fn document() -> Self {
        Self {
            include_document_wrapper: true,
            ..Self::default()
        }
    }

    /// Enable/disable the `$schema` wrapper
    #[must_use]
    pub fn with_document_wrapper(mut self, enabled: bool) -> Self {
        self.include_document_wrapper = enabled;
        self
    }

    /// Enable/disable numeric bounds
    #[must_use]
    pub fn with_numeric_bounds(mut self, enabled: bool) -> Self {
        self.numeric_bounds = enabled;
        self
    }
}

/// Render an inferred type as a JSON Schema node
pub fn render(inferred: &InferredType, options: &EmitOptions) -> SchemaNode {
    let node = render_node(inferred, options);
    if options.include_document_wrapper {
        node.into_document()
    } else {
        node
    }
}

fn render_node(inferred: &InferredType, options: &EmitOptions) -> SchemaNode {
    match inferred {
        InferredType::Unknown => {
            debug!("rendering a position with no observations");
            SchemaNode::never()
        }
        InferredType::Boolean => SchemaNode::boolean(),
        InferredType::Int { range } => {
            let node = SchemaNode::integer();
            match int_bounds(range, options) {
                Some((min, max)) => node.with_bounds(min, max),
                None => node,
            }
        }
        InferredType::Float { range } => {
            let node = SchemaNode::number();
            match float_bounds(range, options) {
                Some((min, max)) => node.with_bounds(min, max),
                None => node,
            }
        }
        InferredType::String { format } => {
            SchemaNode::string(format.and_then(|f| f.json_schema_format()))
        }
        InferredType::Array { items } => {
            if items.is_unknown() {
                SchemaNode::empty_array()
            } else {
                SchemaNode::array(render_node(items, options))
            }
        }
        InferredType::Object(shape) => render_object(shape, options),
        InferredType::Nullable { inner } => {
            if inner.is_unknown() {
                SchemaNode::null()
            } else {
                render_node(inner, options).nullable()
            }
        }
        InferredType::Any { alternatives } => {
            let mut rendered: Vec<SchemaNode> = alternatives
                .iter()
                .map(|alt| render_node(alt, options))
                .collect();
            if rendered.len() == 1 {
                rendered.remove(0)
            } else {
                SchemaNode::any_of(rendered)
            }
        }
    }
}

fn render_object(shape: &ObjectShape, options: &EmitOptions) -> SchemaNode {
    let properties: BTreeMap<String, SchemaNode> = shape
        .required
        .iter()
        .chain(&shape.optional)
        .map(|(key, t)| (key.clone(), render_node(t, options)))
        .collect();
    let required: Vec<String> = shape.required.keys().cloned().collect();

    SchemaNode::object(properties, required)
}

fn wants_bounds(range: &NumberRange, options: &EmitOptions) -> bool {
    options.numeric_bounds && !range.is_empty() && !range.is_single_point() && is_exact(range)
}

/// Beyond 2^53 the f64 range may sit inside the observed values, so a bound
/// would reject data that was actually seen
fn is_exact(range: &NumberRange) -> bool {
    let exact = range.min >= -MAX_SAFE_INTEGER && range.max <= MAX_SAFE_INTEGER;
    if !exact {
        debug!(
            min = range.min,
            max = range.max,
            "range exceeds exact f64 integers, omitting bounds"
        );
    }
    exact
}

fn int_bounds(range: &NumberRange, options: &EmitOptions) -> Option<(Number, Number)> {
    if !wants_bounds(range, options) {
        return None;
    }
    Some((Number::from(range.min as i64), Number::from(range.max as i64)))
}

fn float_bounds(range: &NumberRange, options: &EmitOptions) -> Option<(Number, Number)> {
    if !wants_bounds(range, options) {
        return None;
    }
    Some((Number::from_f64(range.min)?, Number::from_f64(range.max)?))
}
