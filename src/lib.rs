// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # schema-infer
//!
//! Incremental JSON Schema inference. Observe JSON values one at a time and
//! keep a compact model of everything seen so far; render it as a JSON Schema
//! document whenever you like, or save it as a snapshot and resume later.
//!
//! ## Features
//!
//! - **Incremental**: each value is folded into the current model, nothing is buffered
//! - **Type lattice**: integers widen to numbers, missing keys become optional, `null` makes a position nullable
//! - **String formats**: email, URI, UUID, date/time, IP addresses and more
//! - **Numeric ranges**: observed min/max, optionally emitted as `minimum`/`maximum`
//! - **Snapshots**: export and resume a session as versioned JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use schema_infer::Session;
//! use serde_json::json;
//!
//! let mut session = Session::new();
//! session.observe(&json!({"id": 1, "email": "a@example.com"}));
//! session.observe(&json!({"id": 2}));
//!
//! let schema = session.to_json_schema().to_json();
//! assert_eq!(schema["required"], json!(["id"]));
//! assert_eq!(schema["properties"]["email"]["format"], "email");
//! ```
//!
//! ## Architecture
//!
//! ```text
//!   JSON value ──► classify ──► merge ──► InferredType ──► emit ──► JSON Schema
//!                  (kind +      (type      (model)          (render)
//!                   format)      lattice)     │
//!                                             └──► session ──► Snapshot (JSON)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Observed numeric ranges
pub mod range;

/// Value classification and string format detection
pub mod classify;

/// Inferred type model and the merge lattice
pub mod model;

/// JSON Schema rendering
pub mod emit;

/// Inference sessions and snapshots
pub mod session;

/// Input document decoders (JSON, JSONL)
pub mod input;

/// Inference configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use classify::{Classifier, FormatClassifier, FormatDetection, StringFormat};
pub use config::InferConfig;
pub use emit::{render, EmitOptions, SchemaNode};
pub use error::{Error, Result};
pub use model::{merge, InferredType, ObjectShape};
pub use range::NumberRange;
pub use session::{Session, Snapshot};

/// Infer a model from a single value
pub fn infer_schema(value: &serde_json::Value) -> Session {
    let mut session = Session::new();
    session.observe(value);
    session
}

/// Infer a model from a sequence of values
pub fn infer_schema_all<'a, I>(values: I) -> Session
where
    I: IntoIterator<Item = &'a serde_json::Value>,
{
    let mut session = Session::new();
    session.observe_all(values);
    session
}

/// Resume a session from a snapshot with the default classifier
pub fn restore_snapshot(snapshot: Snapshot) -> Result<Session> {
    Session::resume_from(snapshot)
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
