//! Input decoder module
//!
//! Supports: JSON, JSONL
//!
//! Turns input documents into the sequence of values a session observes,
//! optionally extracting records from a path inside each document.

mod decoders;
mod types;

pub use decoders::{decoder_for, JsonDecoder, JsonlDecoder};
pub use types::{InputConfig, InputFormat, RecordDecoder};
