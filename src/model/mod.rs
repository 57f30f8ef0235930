//! Inferred type model
//!
//! The tree of what is known about every position of the values observed so
//! far, and the merge that generalizes it one value at a time.
//!
//! # Features
//!
//! - **Numeric Widening**: ints widen to floats, never the reverse
//! - **Format Reconciliation**: string formats survive only while unanimous
//! - **Required Tracking**: object keys missing once become optional for good
//! - **Nullable Hoisting**: null collapses into one outer nullable flag
//! - **Union Fallback**: incompatible shapes become a deduplicated `Any`

mod merge;
mod types;

pub use merge::merge;
pub use types::{InferredType, ObjectShape};
