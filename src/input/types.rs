//! Input decoding types and traits

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Format of an input document
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// One JSON document (default)
    #[default]
    Json,
    /// JSON Lines (one JSON value per line)
    Jsonl,
}

/// How input documents are turned into observed values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Document format
    pub format: InputFormat,
    /// Path to the records inside a JSON document
    pub record_path: Option<String>,
    /// Treat a top-level JSON array as a list of records
    pub split_arrays: bool,
}

impl InputConfig {
    /// Create a JSON input config
    pub fn json() -> Self {
        Self::default()
    }

    /// Create a JSONL input config
    pub fn jsonl() -> Self {
        Self {
            format: InputFormat::Jsonl,
            ..Default::default()
        }
    }

    /// Set the record path
    #[must_use]
    pub fn with_record_path(mut self, path: impl Into<String>) -> Self {
        self.record_path = Some(path.into());
        self
    }

    /// Enable/disable splitting top-level arrays
    #[must_use]
    pub fn with_split_arrays(mut self, enabled: bool) -> Self {
        self.split_arrays = enabled;
        self
    }
}

/// Trait for decoding input documents into records
pub trait RecordDecoder: Send + Sync {
    /// Decode a document into the values to observe, in order
    fn decode(&self, body: &str) -> Result<Vec<Value>>;
}
