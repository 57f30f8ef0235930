//! Numeric range tracking
//!
//! Inclusive `[min, max]` bounds over a stream of numeric observations.

use serde::{Deserialize, Serialize};

/// Inclusive bounds of every number merged so far
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumberRange {
    /// Smallest value seen
    pub min: f64,
    /// Largest value seen
    pub max: f64,
}

impl Default for NumberRange {
    fn default() -> Self {
        Self::empty()
    }
}

impl NumberRange {
    /// A range that any first value replaces entirely
    pub fn empty() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// A range covering exactly one value
    pub fn from_value(value: f64) -> Self {
        Self::empty().extend(value)
    }

    /// Widen the range to include `value`
    #[must_use]
    pub fn extend(self, value: f64) -> Self {
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }

    /// Smallest range covering both `self` and `other`
    #[must_use]
    pub fn union(self, other: NumberRange) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// True until the first value has been merged
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// True when every observation had the same value
    pub fn is_single_point(&self) -> bool {
        !self.is_empty() && self.min == self.max
    }

    /// Whether `value` lies inside the bounds
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}
