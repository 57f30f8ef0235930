//! JSON Schema output types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// JSON Schema draft the document wrapper points at
pub const SCHEMA_DRAFT_URI: &str = "https://json-schema.org/draft/2020-12/schema";

/// JSON Schema type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
    Null,
}

impl std::fmt::Display for JsonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonType::String => write!(f, "string"),
            JsonType::Number => write!(f, "number"),
            JsonType::Integer => write!(f, "integer"),
            JsonType::Boolean => write!(f, "boolean"),
            JsonType::Object => write!(f, "object"),
            JsonType::Array => write!(f, "array"),
            JsonType::Null => write!(f, "null"),
        }
    }
}

/// JSON type can be a single type or array of types (for nullable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonTypeOrArray {
    Single(JsonType),
    Multiple(Vec<JsonType>),
}

impl JsonTypeOrArray {
    /// Check if this type admits null
    pub fn is_nullable(&self) -> bool {
        match self {
            JsonTypeOrArray::Single(t) => *t == JsonType::Null,
            JsonTypeOrArray::Multiple(types) => types.contains(&JsonType::Null),
        }
    }

    /// Add null to the admitted types
    #[must_use]
    pub fn make_nullable(self) -> Self {
        if self.is_nullable() {
            return self;
        }
        match self {
            JsonTypeOrArray::Single(t) => JsonTypeOrArray::Multiple(vec![t, JsonType::Null]),
            JsonTypeOrArray::Multiple(mut types) => {
                types.push(JsonType::Null);
                JsonTypeOrArray::Multiple(types)
            }
        }
    }
}

/// One JSON Schema node
///
/// Every keyword is optional; an all-`None` node is the empty schema `{}`
/// that accepts anything.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SchemaNode {
    /// Schema version (document root only)
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub json_type: Option<JsonTypeOrArray>,

    /// Format hint (e.g., "date-time", "email", "uri")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<serde_json::Number>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<serde_json::Number>,

    /// Array items schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,

    #[serde(rename = "maxItems", skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,

    /// Object properties, required and optional alike
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, SchemaNode>>,

    /// Keys every object carries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    #[serde(rename = "anyOf", skip_serializing_if = "Option::is_none")]
    pub any_of: Option<Vec<SchemaNode>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<SchemaNode>>,
}

impl SchemaNode {
    /// A node with a single type
    pub fn typed(json_type: JsonType) -> Self {
        Self {
            json_type: Some(JsonTypeOrArray::Single(json_type)),
            ..Default::default()
        }
    }

    /// `{"type": "boolean"}`
    pub fn boolean() -> Self {
        Self::typed(JsonType::Boolean)
    }

    /// `{"type": "integer"}`
    pub fn integer() -> Self {
        Self::typed(JsonType::Integer)
    }

    /// `{"type": "number"}`
    pub fn number() -> Self {
        Self::typed(JsonType::Number)
    }

    /// `{"type": "null"}`
    pub fn null() -> Self {
        Self::typed(JsonType::Null)
    }

    /// String node with an optional format keyword
    pub fn string(format: Option<&str>) -> Self {
        Self {
            format: format.map(str::to_string),
            ..Self::typed(JsonType::String)
        }
    }

    /// Array node with an item schema
    pub fn array(items: SchemaNode) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::typed(JsonType::Array)
        }
    }

    /// Array node that only admits `[]`
    pub fn empty_array() -> Self {
        Self {
            max_items: Some(0),
            ..Self::typed(JsonType::Array)
        }
    }

    /// Object node; empty maps and lists are left out of the output
    pub fn object(properties: BTreeMap<String, SchemaNode>, required: Vec<String>) -> Self {
        Self {
            properties: (!properties.is_empty()).then_some(properties),
            required: (!required.is_empty()).then_some(required),
            ..Self::typed(JsonType::Object)
        }
    }

    /// Matches any one of the given schemas
    pub fn any_of(options: Vec<SchemaNode>) -> Self {
        Self {
            any_of: Some(options),
            ..Default::default()
        }
    }

    /// `{"not": {}}`, a schema nothing satisfies
    pub fn never() -> Self {
        Self {
            not: Some(Box::default()),
            ..Default::default()
        }
    }

    /// Attach numeric bounds
    #[must_use]
    pub fn with_bounds(mut self, minimum: serde_json::Number, maximum: serde_json::Number) -> Self {
        self.minimum = Some(minimum);
        self.maximum = Some(maximum);
        self
    }

    /// Union this node with null
    #[must_use]
    pub fn nullable(mut self) -> Self {
        if let Some(json_type) = self.json_type.take() {
            self.json_type = Some(json_type.make_nullable());
            return self;
        }
        match self.any_of.as_mut() {
            Some(options) => {
                if !options.iter().any(SchemaNode::is_nullable) {
                    options.push(SchemaNode::null());
                }
                self
            }
            None => SchemaNode::any_of(vec![self, SchemaNode::null()]),
        }
    }

    /// Whether this node admits null through its `type`
    pub fn is_nullable(&self) -> bool {
        self.json_type
            .as_ref()
            .is_some_and(JsonTypeOrArray::is_nullable)
    }

    /// Mark this node as a document root
    #[must_use]
    pub fn into_document(mut self) -> Self {
        self.schema = Some(SCHEMA_DRAFT_URI.to_string());
        self
    }

    /// Convert to JSON value
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// Convert to pretty JSON string
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
