//! Inferred type tree

use crate::classify::StringFormat;
use crate::range::NumberRange;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What is known about the values seen at one position
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InferredType {
    /// Nothing observed yet
    #[default]
    Unknown,
    /// Booleans only
    Boolean,
    /// Whole numbers only
    Int { range: NumberRange },
    /// Numbers, at least one of them fractional
    Float { range: NumberRange },
    /// Strings, with the format every one of them shared
    String {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<StringFormat>,
    },
    /// Merged type of every element of every array seen
    Array { items: Box<InferredType> },
    /// Objects, keys split by whether every object had them
    Object(ObjectShape),
    /// Null was seen alongside `inner`; `inner` is `Unknown` when only null was seen
    Nullable { inner: Box<InferredType> },
    /// Incompatible shapes, at most one member per kind
    Any { alternatives: Vec<InferredType> },
}

/// Keys of the objects seen at one position
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ObjectShape {
    /// Keys present in every object so far
    #[serde(default)]
    pub required: BTreeMap<String, InferredType>,
    /// Keys missing from at least one object
    #[serde(default)]
    pub optional: BTreeMap<String, InferredType>,
}

impl ObjectShape {
    /// Look up a key in either map
    pub fn get(&self, key: &str) -> Option<&InferredType> {
        self.required.get(key).or_else(|| self.optional.get(key))
    }

    /// Whether `key` has been present in every object
    pub fn is_required(&self, key: &str) -> bool {
        self.required.contains_key(key)
    }

    /// Total number of keys ever seen
    pub fn len(&self) -> usize {
        self.required.len() + self.optional.len()
    }

    /// True when no key has been seen
    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.optional.is_empty()
    }
}

impl InferredType {
    /// Short name of the variant, used in logs and error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            InferredType::Unknown => "unknown",
            InferredType::Boolean => "boolean",
            InferredType::Int { .. } => "int",
            InferredType::Float { .. } => "float",
            InferredType::String { .. } => "string",
            InferredType::Array { .. } => "array",
            InferredType::Object(_) => "object",
            InferredType::Nullable { .. } => "nullable",
            InferredType::Any { .. } => "any",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, InferredType::Unknown)
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, InferredType::Nullable { .. })
    }

    /// Whether two members would compete for the same `Any` slot
    ///
    /// Integers and floats share the numeric slot.
    fn same_slot(&self, other: &InferredType) -> bool {
        matches!(
            (self, other),
            (InferredType::Boolean, InferredType::Boolean)
                | (
                    InferredType::Int { .. } | InferredType::Float { .. },
                    InferredType::Int { .. } | InferredType::Float { .. }
                )
                | (InferredType::String { .. }, InferredType::String { .. })
                | (InferredType::Array { .. }, InferredType::Array { .. })
                | (InferredType::Object(_), InferredType::Object(_))
        )
    }

    /// Check the structural invariants of the tree
    ///
    /// Trees built by merging always pass; this guards trees decoded from
    /// snapshots. The error names the offending path.
    pub fn check_invariants(&self) -> std::result::Result<(), String> {
        self.check_at("$")
    }

    fn check_at(&self, path: &str) -> std::result::Result<(), String> {
        match self {
            InferredType::Unknown | InferredType::Boolean | InferredType::String { .. } => Ok(()),
            InferredType::Int { range } | InferredType::Float { range } => {
                if range.is_empty() || !range.min.is_finite() || !range.max.is_finite() {
                    Err(format!(
                        "{path}: invalid range [{}, {}]",
                        range.min, range.max
                    ))
                } else {
                    Ok(())
                }
            }
            InferredType::Array { items } => items.check_at(&format!("{path}[]")),
            InferredType::Object(shape) => {
                if let Some(key) = shape
                    .required
                    .keys()
                    .find(|k| shape.optional.contains_key(*k))
                {
                    return Err(format!("{path}: key '{key}' is both required and optional"));
                }
                for (key, t) in shape.required.iter().chain(&shape.optional) {
                    if t.is_unknown() {
                        return Err(format!("{path}.{key}: unknown object property"));
                    }
                    t.check_at(&format!("{path}.{key}"))?;
                }
                Ok(())
            }
            InferredType::Nullable { inner } => {
                if inner.is_nullable() {
                    return Err(format!("{path}: nullable wraps another nullable"));
                }
                inner.check_at(path)
            }
            InferredType::Any { alternatives } => {
                if alternatives.len() < 2 {
                    return Err(format!(
                        "{path}: any with {} alternative(s)",
                        alternatives.len()
                    ));
                }
                for (i, alt) in alternatives.iter().enumerate() {
                    match alt {
                        InferredType::Any { .. } => {
                            return Err(format!("{path}: any nested inside any"));
                        }
                        InferredType::Nullable { .. } => {
                            return Err(format!("{path}: nullable inside any"));
                        }
                        InferredType::Unknown => {
                            return Err(format!("{path}: unknown inside any"));
                        }
                        _ => {}
                    }
                    if alternatives[..i].iter().any(|prev| prev.same_slot(alt)) {
                        return Err(format!(
                            "{path}: duplicate {} alternative",
                            alt.kind_name()
                        ));
                    }
                    alt.check_at(&format!("{path}|{i}"))?;
                }
                Ok(())
            }
        }
    }
}
