//! Configuration for inference runs
//!
//! Everything has a default, so an empty YAML document is a valid config.
//!
//! ```yaml
//! formats:
//!   hostname: false
//!   country: false
//! emit:
//!   numeric_bounds: true
//!   include_document_wrapper: true
//! input:
//!   format: json
//!   record_path: $.data[*]
//! ```

use crate::classify::{FormatClassifier, FormatDetection};
use crate::emit::EmitOptions;
use crate::error::{Error, Result};
use crate::input::{InputConfig, InputFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete inference configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferConfig {
    /// Which string formats to detect
    pub formats: FormatDetection,
    /// How the schema is rendered
    pub emit: EmitOptions,
    /// How input documents become observations
    pub input: InputConfig,
}

impl InferConfig {
    /// Create a config with every default
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config file: {e}")))?;
        Self::from_yaml_str(&contents)
    }

    /// Parse and validate a YAML config
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not an empty map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: InferConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Reject combinations that cannot work
    pub fn validate(&self) -> Result<()> {
        if self.input.format == InputFormat::Jsonl && self.input.record_path.is_some() {
            return Err(Error::invalid_value(
                "input.record_path",
                "record paths only apply to JSON input",
            ));
        }
        if self
            .input
            .record_path
            .as_deref()
            .is_some_and(|p| p.trim().is_empty())
        {
            return Err(Error::invalid_value("input.record_path", "must not be empty"));
        }
        Ok(())
    }

    /// The classifier these settings describe
    pub fn classifier(&self) -> FormatClassifier {
        FormatClassifier::with_detection(self.formats.clone())
    }

    /// Replace the format detection settings
    #[must_use]
    pub fn with_formats(mut self, formats: FormatDetection) -> Self {
        self.formats = formats;
        self
    }

    /// Replace the emit options
    #[must_use]
    pub fn with_emit(mut self, emit: EmitOptions) -> Self {
        self.emit = emit;
        self
    }

    /// Replace the input settings
    #[must_use]
    pub fn with_input(mut self, input: InputConfig) -> Self {
        self.input = input;
        self
    }
}
