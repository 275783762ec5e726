use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::condition::Condition;
use super::trace::RuleFiring;

/// Weighted evidence for one condition hypothesis.
///
/// The rule engine produces exactly three of these per run, in fixed order
/// (ADHD, depression, anxiety). Both scores stay in [0, 1] by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosticEvidence {
    pub condition: Condition,
    pub supporting_score: f64,
    pub confidence: f64,
    pub key_features: Vec<String>,
    pub contradicting_features: Vec<String>,
    pub clinical_reasoning: Vec<String>,
    /// Structured decision trace the text lists were rendered from.
    pub trace: Vec<RuleFiring>,
}

impl DiagnosticEvidence {
    /// Ranking key for the aggregator. Recomputed on every call, never cached.
    pub fn weighted_score(&self) -> f64 {
        self.supporting_score * self.confidence
    }
}
