//! Decoder implementations

use super::types::{InputConfig, InputFormat, RecordDecoder};
use crate::error::{Error, Result};
use serde_json::Value;

/// Build the decoder described by `config`
pub fn decoder_for(config: &InputConfig) -> Box<dyn RecordDecoder> {
    match config.format {
        InputFormat::Json => {
            let decoder = match &config.record_path {
                Some(path) => JsonDecoder::with_path(path.clone()),
                None => JsonDecoder::new(),
            };
            Box::new(decoder.with_split_arrays(config.split_arrays))
        }
        InputFormat::Jsonl => Box::new(JsonlDecoder::new()),
    }
}

// ============================================================================
// JSON Decoder
// ============================================================================

/// JSON decoder with optional record path extraction
#[derive(Debug, Clone, Default)]
pub struct JsonDecoder {
    /// JSONPath to extract records
    record_path: Option<String>,
    /// Whether a top-level array is a list of records
    split_arrays: bool,
}

impl JsonDecoder {
    /// Create a JSON decoder; the whole document is one record
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a JSON decoder with a record path
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            record_path: Some(path.into()),
            split_arrays: false,
        }
    }

    /// Enable/disable splitting a top-level array into records
    #[must_use]
    pub fn with_split_arrays(mut self, enabled: bool) -> Self {
        self.split_arrays = enabled;
        self
    }

    /// Extract records from a JSON value using a path
    fn extract_records(&self, value: Value) -> Result<Vec<Value>> {
        match &self.record_path {
            Some(path) => {
                // Simple paths are walked directly; wildcards go through jsonpath-rust
                if path.contains('*') && !path.contains("[-") {
                    extract_with_jsonpath(&value, path)
                } else {
                    match extract_simple_path(&value, path) {
                        Some(Value::Array(arr)) => Ok(arr),
                        Some(v) => Ok(vec![v]),
                        None => Ok(vec![]),
                    }
                }
            }
            None => match value {
                Value::Array(arr) if self.split_arrays => Ok(arr),
                other => Ok(vec![other]),
            },
        }
    }
}

impl RecordDecoder for JsonDecoder {
    fn decode(&self, body: &str) -> Result<Vec<Value>> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| Error::decode(format!("Failed to parse JSON: {e}")))?;
        self.extract_records(value)
    }
}

// ============================================================================
// JSONL Decoder
// ============================================================================

/// JSON Lines decoder (one JSON value per line)
#[derive(Debug, Clone, Default)]
pub struct JsonlDecoder;

impl JsonlDecoder {
    /// Create a new JSONL decoder
    pub fn new() -> Self {
        Self
    }
}

impl RecordDecoder for JsonlDecoder {
    fn decode(&self, body: &str) -> Result<Vec<Value>> {
        let mut records = Vec::new();

        for (line_num, line) in body.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let value: Value = serde_json::from_str(line).map_err(|e| {
                Error::decode(format!("Failed to parse JSONL at line {}: {e}", line_num + 1))
            })?;

            records.push(value);
        }

        Ok(records)
    }
}

// ============================================================================
// Path helpers
// ============================================================================

/// Walk a dot path such as `data.items` or `data[0]`
fn extract_simple_path(value: &Value, path: &str) -> Option<Value> {
    let path = path.strip_prefix("$.").unwrap_or(path);
    if path.is_empty() || path == "$" {
        return Some(value.clone());
    }

    let mut current = value;
    for part in path.split('.') {
        // Handle array indexing like "data[0]" or "items[-1]"
        if let Some(bracket_pos) = part.find('[') {
            let name = &part[..bracket_pos];
            let index_str = part[bracket_pos + 1..].strip_suffix(']')?;

            if !name.is_empty() {
                current = current.get(name)?;
            }

            if index_str == "*" {
                return Some(current.clone());
            }

            let index = index_str.parse::<i64>().ok()?;
            let Value::Array(arr) = current else {
                return None;
            };
            #[allow(clippy::cast_possible_wrap)]
            let idx = if index < 0 {
                arr.len() as i64 + index
            } else {
                index
            };
            current = arr.get(usize::try_from(idx).ok()?)?;
        } else {
            current = current.get(part)?;
        }
    }

    Some(current.clone())
}

/// Extract records using jsonpath-rust
fn extract_with_jsonpath(value: &Value, path: &str) -> Result<Vec<Value>> {
    use jsonpath_rust::JsonPath;

    let jp = JsonPath::try_from(path)
        .map_err(|e| Error::json_path(format!("Invalid JSONPath: {e}")))?;

    match jp.find(value) {
        Value::Array(arr) => Ok(arr),
        Value::Null => Ok(vec![]),
        other => Ok(vec![other]),
    }
}
