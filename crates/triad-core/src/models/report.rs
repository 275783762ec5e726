use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::condition::Condition;
use super::evidence::DiagnosticEvidence;
use super::judgments::EvaluatorJudgments;

/// How many clinically significant conditions the presentation spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Complexity {
    SingleCondition,
    ComorbidTwoConditions,
    ComplexMultipleConditions,
}

/// Safety and follow-up flags, always first-class on the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskFlags {
    /// Self-harm item scored above 0; requires immediate clinical attention.
    pub suicidal_ideation: bool,
    /// Depression screen at or above its treatment cutoff.
    pub depression_treatment_indicated: bool,
    /// Anxiety screen at or above its treatment cutoff.
    pub anxiety_treatment_indicated: bool,
}

/// One entry of the ranked evidence list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RankedEvidence {
    /// supporting_score × confidence at ranking time.
    pub weighted_score: f64,
    pub evidence: DiagnosticEvidence,
}

/// Final, immutable output of one screening run.
///
/// This is screening evidence for downstream professional review, never a
/// diagnosis. The report is a pure value: identical inputs produce identical
/// reports, byte for byte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosisReport {
    pub primary_condition: Condition,
    pub primary_score: f64,
    pub comorbid_conditions: Vec<Condition>,
    pub diagnostic_impression: String,
    pub complexity: Complexity,
    /// All three evidence records, ranked by weighted score descending.
    pub evidence: Vec<RankedEvidence>,
    pub judgments: EvaluatorJudgments,
    pub risk_flags: RiskFlags,
    /// Recommendation lines; the first is always the screening disclaimer.
    pub recommendations: Vec<String>,
}
