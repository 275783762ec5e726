//! The five evidence evaluators.
//!
//! Each is a pure function over the response set (plus a scale total for the
//! mood and anxiety evaluators). Missing response keys read as 0 (symptom
//! absent). A sub-domain where *no* contributing key was answered resolves to
//! an explicit insufficient state scoring 0 at the lowest band — an undefined
//! mean never reaches a comparison or sort key.

pub mod anxiety;
pub mod childhood;
pub mod consistency;
pub mod executive;
pub mod mood;

use triad_core::models::response::ResponseSet;

/// Mean over a fixed indicator set, with absent keys contributing 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndicatorMean {
    Computed { mean: f64, present: usize },
    Insufficient,
}

impl IndicatorMean {
    /// Aggregate the given keys. Requires at least one answered key for a
    /// computed mean; the all-absent case is `Insufficient`, never NaN.
    pub fn over(responses: &ResponseSet, keys: &[&str]) -> Self {
        let present = keys
            .iter()
            .filter(|key| responses.answered(key).is_some())
            .count();
        if present == 0 {
            return IndicatorMean::Insufficient;
        }
        let sum: u32 = keys.iter().map(|key| u32::from(responses.severity(key))).sum();
        IndicatorMean::Computed {
            mean: f64::from(sum) / keys.len() as f64,
            present,
        }
    }

    /// Numeric value for threshold comparisons; insufficient reads as 0.
    pub fn value(&self) -> f64 {
        match self {
            IndicatorMean::Computed { mean, .. } => *mean,
            IndicatorMean::Insufficient => 0.0,
        }
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, IndicatorMean::Insufficient)
    }
}
