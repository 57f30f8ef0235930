//! Emitter tests

use super::*;
use crate::classify::{FormatClassifier, StringFormat};
use crate::model::{merge, InferredType};
use crate::range::NumberRange;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn schema_of(values: &[Value]) -> Value {
    schema_with(values, &EmitOptions::new())
}

fn schema_with(values: &[Value], options: &EmitOptions) -> Value {
    let classifier = FormatClassifier::new();
    let inferred = values
        .iter()
        .fold(InferredType::Unknown, |acc, v| merge(acc, v, &classifier));
    render(&inferred, options).to_json()
}

// ============================================================================
// Primitive Tests
// ============================================================================

#[test]
fn test_render_primitives() {
    assert_eq!(schema_of(&[json!(true)]), json!({"type": "boolean"}));
    assert_eq!(schema_of(&[json!(1)]), json!({"type": "integer"}));
    assert_eq!(schema_of(&[json!(1.1)]), json!({"type": "number"}));
    assert_eq!(schema_of(&[json!("hello")]), json!({"type": "string"}));
    assert_eq!(schema_of(&[json!(null)]), json!({"type": "null"}));
}

#[test]
fn test_render_unknown_never_matches() {
    let node = render(&InferredType::Unknown, &EmitOptions::new());
    assert_eq!(node.to_json(), json!({"not": {}}));
}

#[test]
fn test_render_string_formats() {
    assert_eq!(
        schema_of(&[json!("2019-01-01 00:00:00.000Z")]),
        json!({"type": "string", "format": "date-time"})
    );
    assert_eq!(
        schema_of(&[json!("2001:db8:1234::1")]),
        json!({"type": "string", "format": "ipv6"})
    );
    assert_eq!(
        schema_of(&[json!("AEA9CF21-965A-46C0-A4DD-3652B0BDC56D")]),
        json!({"type": "string", "format": "uuid"})
    );
}

#[test]
fn test_render_unsupported_format_degrades() {
    let inferred = InferredType::String {
        format: Some(StringFormat::Currency),
    };
    assert_eq!(
        render(&inferred, &EmitOptions::new()).to_json(),
        json!({"type": "string"})
    );
    assert_eq!(schema_of(&[json!("US")]), json!({"type": "string"}));
}

// ============================================================================
// Numeric Bounds Tests
// ============================================================================

#[test]
fn test_bounds_off_by_default() {
    assert_eq!(
        schema_of(&[json!(1), json!(2), json!(10)]),
        json!({"type": "integer"})
    );
}

#[test]
fn test_bounds_when_requested() {
    let options = EmitOptions::new().with_numeric_bounds(true);
    assert_eq!(
        schema_with(&[json!(1), json!(2), json!(10)], &options),
        json!({"type": "integer", "minimum": 1, "maximum": 10})
    );
    assert_eq!(
        schema_with(&[json!(0.5), json!(2)], &options),
        json!({"type": "number", "minimum": 0.5, "maximum": 2.0})
    );
}

#[test]
fn test_bounds_never_exclude_large_integers() {
    let options = EmitOptions::new().with_numeric_bounds(true);
    for large in [json!(9_007_199_254_740_993_u64), json!(u64::MAX), json!(i64::MIN)] {
        let schema = schema_with(&[json!(0), large.clone()], &options);
        assert_eq!(schema, json!({"type": "integer"}), "bounds for {large}");
    }

    let schema = schema_with(&[json!(0.5), json!(u64::MAX)], &options);
    assert_eq!(schema, json!({"type": "number"}));
}

#[test]
fn test_bounds_at_largest_exact_integer() {
    let options = EmitOptions::new().with_numeric_bounds(true);
    assert_eq!(
        schema_with(
            &[json!(-9_007_199_254_740_991_i64), json!(9_007_199_254_740_991_u64)],
            &options
        ),
        json!({
            "type": "integer",
            "minimum": -9_007_199_254_740_991_i64,
            "maximum": 9_007_199_254_740_991_u64
        })
    );
}

#[test]
fn test_single_point_range_has_no_bounds() {
    let options = EmitOptions::new().with_numeric_bounds(true);
    assert_eq!(
        schema_with(&[json!(7), json!(7)], &options),
        json!({"type": "integer"})
    );

    let inferred = InferredType::Float {
        range: NumberRange::from_value(3.5),
    };
    assert_eq!(
        render(&inferred, &options).to_json(),
        json!({"type": "number"})
    );
}

// ============================================================================
// Structure Tests
// ============================================================================

#[test]
fn test_render_arrays() {
    assert_eq!(
        schema_of(&[json!([1, 2, 3])]),
        json!({"type": "array", "items": {"type": "integer"}})
    );
    assert_eq!(
        schema_of(&[json!([1, "hello world", false])]),
        json!({
            "type": "array",
            "items": {"anyOf": [{"type": "integer"}, {"type": "string"}, {"type": "boolean"}]}
        })
    );
    assert_eq!(
        schema_of(&[json!([])]),
        json!({"type": "array", "maxItems": 0})
    );
}

#[test]
fn test_render_object_required_and_optional() {
    let schema = schema_of(&[
        json!({"foo": "bar", "baz": "qux"}),
        json!({"foo": "bar", "banana": 1}),
    ]);
    assert_eq!(
        schema,
        json!({
            "type": "object",
            "properties": {
                "foo": {"type": "string"},
                "baz": {"type": "string"},
                "banana": {"type": "integer"}
            },
            "required": ["foo"]
        })
    );
}

#[test]
fn test_render_object_without_required() {
    let schema = schema_of(&[json!({"a": 1}), json!({"b": true})]);
    assert_eq!(
        schema,
        json!({
            "type": "object",
            "properties": {"a": {"type": "integer"}, "b": {"type": "boolean"}}
        })
    );
    assert_eq!(schema_of(&[json!({})]), json!({"type": "object"}));
}

#[test]
fn test_render_any() {
    assert_eq!(
        schema_of(&[json!("hello world"), json!(1)]),
        json!({"anyOf": [{"type": "string"}, {"type": "integer"}]})
    );
    assert_eq!(
        schema_of(&[json!(true), json!("US"), json!("hello"), json!("a@b.com")]),
        json!({"anyOf": [{"type": "boolean"}, {"type": "string"}]})
    );
    assert_eq!(
        schema_of(&[json!({}), json!("hello world")]),
        json!({"anyOf": [{"type": "object"}, {"type": "string"}]})
    );
}

// ============================================================================
// Nullable Tests
// ============================================================================

#[test]
fn test_render_nullable_items() {
    assert_eq!(
        schema_of(&[json!([1, 2, null, 3, null, 4])]),
        json!({"type": "array", "items": {"type": ["integer", "null"]}})
    );
}

#[test]
fn test_render_nullable_any() {
    assert_eq!(
        schema_of(&[json!(true), json!("x"), json!(null)]),
        json!({"anyOf": [{"type": "boolean"}, {"type": "string"}, {"type": "null"}]})
    );
}

#[test]
fn test_nullable_is_idempotent() {
    let node = SchemaNode::integer().nullable().nullable();
    assert_eq!(node.to_json(), json!({"type": ["integer", "null"]}));

    let wrapped = SchemaNode::never().nullable();
    assert_eq!(wrapped.to_json(), json!({"anyOf": [{"not": {}}, {"type": "null"}]}));
}

// ============================================================================
// Document Tests
// ============================================================================

#[test]
fn test_document_wrapper() {
    assert_eq!(
        schema_with(&[json!(1)], &EmitOptions::document()),
        json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "type": "integer"
        })
    );
}

#[test]
fn test_schema_node_round_trips_through_serde() {
    let node = SchemaNode::object(
        [("id".to_string(), SchemaNode::string(Some("uuid")))].into(),
        vec!["id".to_string()],
    )
    .into_document();
    let parsed: SchemaNode = serde_json::from_str(&node.to_json_pretty()).unwrap();
    assert_eq!(parsed, node);
}
