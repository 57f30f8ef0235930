//! Session snapshots
//!
//! A snapshot is the serialized inferred type tree plus a little bookkeeping.
//! The format only needs to round-trip within this crate.

use crate::error::{Error, Result};
use crate::model::InferredType;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable capture of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,
    /// Number of values observed before the snapshot was taken
    #[serde(default)]
    pub observations: u64,
    /// The inferred type tree
    pub inferred: InferredType,
}

impl Snapshot {
    /// Current snapshot format version
    pub const VERSION: u32 = 1;

    /// Capture an inferred type
    pub fn new(inferred: InferredType, observations: u64) -> Self {
        Self {
            version: Self::VERSION,
            observations,
            inferred,
        }
    }

    /// Check the version and the structural invariants of the tree
    pub fn validate(&self) -> Result<()> {
        if self.version != Self::VERSION {
            return Err(Error::SnapshotVersion {
                found: self.version,
                expected: Self::VERSION,
            });
        }
        self.inferred.check_invariants().map_err(Error::snapshot)
    }

    /// Decode and validate a snapshot from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)
            .map_err(|e| Error::snapshot(format!("Failed to parse snapshot JSON: {e}")))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Decode and validate a snapshot from an already-parsed JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_value(value)
            .map_err(|e| Error::snapshot(format!("Failed to decode snapshot: {e}")))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Encode as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a snapshot file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Write the snapshot to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents = self.to_json()?;

        // Write to temp file first, then rename for atomicity
        let path = path.as_ref();
        let temp_path = path.with_extension("tmp");
        std::fs::write(&temp_path, &contents)?;
        std::fs::rename(&temp_path, path)?;

        tracing::debug!(path = %path.display(), "Saved snapshot");
        Ok(())
    }
}
