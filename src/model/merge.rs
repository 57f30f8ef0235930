//! Type-lattice merge
//!
//! `merge` folds one observed value into an inferred type. The dispatch is a
//! single match over (current variant, classified value); every pairing has
//! an arm and there is no catch-all over the type side, so adding a variant
//! fails to compile until its rules are written.

use super::types::{InferredType, ObjectShape};
use crate::classify::{Classified, Classifier, StringFormat};
use crate::range::NumberRange;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Merge one observed value into `current`, producing the generalized type
pub fn merge<C: Classifier + ?Sized>(
    current: InferredType,
    value: &Value,
    classifier: &C,
) -> InferredType {
    let classified = classifier.classify(value);
    merge_classified(current, classified, classifier)
}

fn merge_classified<C: Classifier + ?Sized>(
    current: InferredType,
    classified: Classified<'_>,
    classifier: &C,
) -> InferredType {
    match (current, classified) {
        // Null: hoist to a single outer nullable
        (InferredType::Nullable { inner }, Classified::Null) => InferredType::Nullable { inner },
        (current, Classified::Null) => InferredType::Nullable {
            inner: Box::new(current),
        },

        (InferredType::Nullable { inner }, classified) => InferredType::Nullable {
            inner: Box::new(merge_classified(*inner, classified, classifier)),
        },

        (InferredType::Unknown, classified) => adopt(classified, classifier),

        (InferredType::Any { mut alternatives }, classified) => {
            match alternatives.iter_mut().find(|alt| accepts(alt, &classified)) {
                Some(slot) => {
                    *slot = merge_classified(std::mem::take(slot), classified, classifier);
                }
                None => alternatives.push(adopt(classified, classifier)),
            }
            InferredType::Any { alternatives }
        }

        // Matching primitives
        (InferredType::Boolean, Classified::Bool(_)) => InferredType::Boolean,
        (InferredType::Int { range }, Classified::Int(n)) => InferredType::Int {
            range: range.extend(n),
        },
        (
            InferredType::Int { range } | InferredType::Float { range },
            Classified::Float(n),
        )
        | (InferredType::Float { range }, Classified::Int(n)) => InferredType::Float {
            range: range.extend(n),
        },
        (InferredType::String { format }, Classified::String { format: incoming, .. }) => {
            InferredType::String {
                format: reconcile_format(format, incoming),
            }
        }

        // Structures
        (InferredType::Array { items }, Classified::Array(elements)) => InferredType::Array {
            items: Box::new(fold_items(*items, elements, classifier)),
        },
        (InferredType::Object(shape), Classified::Object(map)) => {
            InferredType::Object(merge_object(shape, map, classifier))
        }

        // Everything else is a disjunction of the two shapes
        (
            current @ (InferredType::Boolean
            | InferredType::Int { .. }
            | InferredType::Float { .. }
            | InferredType::String { .. }
            | InferredType::Array { .. }
            | InferredType::Object(_)),
            classified,
        ) => {
            debug!(
                from = current.kind_name(),
                observed = %classified.kind(),
                "incompatible shapes, widening to any"
            );
            InferredType::Any {
                alternatives: vec![current, adopt(classified, classifier)],
            }
        }
    }
}

/// The type of a value seen at a fresh position
fn adopt<C: Classifier + ?Sized>(classified: Classified<'_>, classifier: &C) -> InferredType {
    match classified {
        Classified::Null => InferredType::Nullable {
            inner: Box::new(InferredType::Unknown),
        },
        Classified::Bool(_) => InferredType::Boolean,
        Classified::Int(n) => InferredType::Int {
            range: NumberRange::from_value(n),
        },
        Classified::Float(n) => InferredType::Float {
            range: NumberRange::from_value(n),
        },
        Classified::String { format, .. } => InferredType::String { format },
        Classified::Array(elements) => InferredType::Array {
            items: Box::new(fold_items(InferredType::Unknown, elements, classifier)),
        },
        Classified::Object(map) => {
            let required: BTreeMap<String, InferredType> = map
                .iter()
                .map(|(key, value)| (key.clone(), merge(InferredType::Unknown, value, classifier)))
                .collect();
            InferredType::Object(ObjectShape {
                required,
                optional: BTreeMap::new(),
            })
        }
    }
}

fn fold_items<C: Classifier + ?Sized>(
    items: InferredType,
    elements: &[Value],
    classifier: &C,
) -> InferredType {
    elements
        .iter()
        .fold(items, |acc, element| merge(acc, element, classifier))
}

/// A format survives only while every string agrees on it
fn reconcile_format(
    current: Option<StringFormat>,
    incoming: Option<StringFormat>,
) -> Option<StringFormat> {
    match (current, incoming) {
        (Some(a), Some(b)) if a == b => Some(a),
        (Some(dropped), incoming) => {
            trace!(%dropped, ?incoming, "string formats disagree, dropping format");
            None
        }
        (None, _) => None,
    }
}

fn merge_object<C: Classifier + ?Sized>(
    shape: ObjectShape,
    map: &Map<String, Value>,
    classifier: &C,
) -> ObjectShape {
    let ObjectShape {
        mut required,
        mut optional,
    } = shape;

    // Once missing, a key stays optional
    let missing: Vec<String> = required
        .keys()
        .filter(|key| !map.contains_key(*key))
        .cloned()
        .collect();
    for key in missing {
        if let Some(t) = required.remove(&key) {
            optional.insert(key, t);
        }
    }

    for (key, value) in map {
        if let Some(slot) = required.get_mut(key) {
            *slot = merge(std::mem::take(slot), value, classifier);
        } else if let Some(slot) = optional.get_mut(key) {
            *slot = merge(std::mem::take(slot), value, classifier);
        } else {
            optional.insert(key.clone(), merge(InferredType::Unknown, value, classifier));
        }
    }

    ObjectShape { required, optional }
}

/// Whether `alt` is the `Any` member a value of this kind merges into
///
/// Each kind has at most one member, with integers and floats sharing the
/// numeric one.
fn accepts(alt: &InferredType, classified: &Classified<'_>) -> bool {
    matches!(
        (alt, classified),
        (InferredType::Boolean, Classified::Bool(_))
            | (
                InferredType::Int { .. } | InferredType::Float { .. },
                Classified::Int(_) | Classified::Float(_)
            )
            | (InferredType::String { .. }, Classified::String { .. })
            | (InferredType::Array { .. }, Classified::Array(_))
            | (InferredType::Object(_), Classified::Object(_))
    )
}
