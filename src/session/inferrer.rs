//! Resumable inference session

use super::snapshot::Snapshot;
use crate::classify::{Classifier, FormatClassifier};
use crate::emit::{render, EmitOptions, SchemaNode};
use crate::error::Result;
use crate::model::{merge, InferredType};
use serde_json::Value;
use tracing::trace;

/// Holds the accumulated knowledge of one stream of values
///
/// `observe` takes `&mut self`, so a session has at most one merge in
/// flight. Independent sessions share nothing.
#[derive(Debug, Clone, Default)]
pub struct Session<C = FormatClassifier> {
    inferred: InferredType,
    classifier: C,
    observations: u64,
}

impl Session {
    /// Create an empty session with the built-in classifier
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume a session from a snapshot using the built-in classifier
    pub fn resume_from(snapshot: Snapshot) -> Result<Self> {
        Self::resume_with_classifier(snapshot, FormatClassifier::new())
    }
}

impl<C: Classifier> Session<C> {
    /// Create an empty session with a custom classifier
    pub fn with_classifier(classifier: C) -> Self {
        Self {
            inferred: InferredType::Unknown,
            classifier,
            observations: 0,
        }
    }

    /// Resume a session from a snapshot with a custom classifier
    pub fn resume_with_classifier(snapshot: Snapshot, classifier: C) -> Result<Self> {
        snapshot.validate()?;
        Ok(Self {
            inferred: snapshot.inferred,
            classifier,
            observations: snapshot.observations,
        })
    }

    /// Fold one value into the session
    pub fn observe(&mut self, value: &Value) {
        let current = std::mem::take(&mut self.inferred);
        self.inferred = merge(current, value, &self.classifier);
        self.observations += 1;
        trace!(
            observations = self.observations,
            kind = self.inferred.kind_name(),
            "Observed value"
        );
    }

    /// Fold every value, in order
    pub fn observe_all<'a, I>(&mut self, values: I)
    where
        I: IntoIterator<Item = &'a Value>,
    {
        for value in values {
            self.observe(value);
        }
    }

    /// The current inferred type
    pub fn inferred(&self) -> &InferredType {
        &self.inferred
    }

    /// Number of values observed, including those before a resume
    pub fn observations(&self) -> u64 {
        self.observations
    }

    /// The classifier in use
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Render the current knowledge as JSON Schema
    pub fn render(&self, options: &EmitOptions) -> SchemaNode {
        render(&self.inferred, options)
    }

    /// Render as a bare schema node with default options
    pub fn to_json_schema(&self) -> SchemaNode {
        self.render(&EmitOptions::default())
    }

    /// Capture the session so it can be resumed later
    pub fn export_snapshot(&self) -> Snapshot {
        Snapshot::new(self.inferred.clone(), self.observations)
    }

    /// Consume the session, returning its inferred type
    pub fn into_inferred(self) -> InferredType {
        self.inferred
    }
}
