//! Value classification module
//!
//! Maps a raw JSON value to its primitive kind and, for strings, a
//! recognized semantic format.
//!
//! # Formats
//!
//! - **Identifiers**: UUID
//! - **Network**: email, URI, hostname, IPv4, IPv6
//! - **Temporal**: date-time, date, time (validated with chrono)
//! - **Codes**: E.164 phone numbers, ISO 3166 countries, ISO 4217 currencies

mod classifier;
mod types;

pub use classifier::{Classifier, FormatClassifier};
pub(crate) use classifier::MAX_SAFE_INTEGER;
pub use types::{Classified, FormatDetection, StringFormat, ValueKind};

#[cfg(test)]
mod tests;
