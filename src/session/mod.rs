//! Session module
//!
//! Holds one inferred type and exposes observe / render / snapshot.

mod inferrer;
mod snapshot;

pub use inferrer::Session;
pub use snapshot::Snapshot;
