use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One differential rule that fired, with the parameters it fired on.
///
/// The rule engine records these instead of prose: the decision trace is
/// testable by identifier, and the human-readable feature/reasoning lines are
/// rendered from the trace in a separate presentation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "rule", rename_all = "snake_case")]
#[ts(export)]
pub enum RuleFiring {
    /// Childhood indicators met the support threshold.
    ChildhoodOnsetSupported,
    /// Childhood history weak or absent; argues against ADHD.
    ChildhoodOnsetAbsent,
    /// Chronic, consistent lifetime course.
    ChronicConsistentPattern,
    /// Executive dysfunction rated primary (lifelong, not mood-driven).
    PrimaryExecutiveDysfunction,
    /// Both mood and anxiety screens below their moderate cutoffs.
    MinimalMoodAnxiety { phq9_total: u8, gad7_total: u8 },
    /// At least one of the mood/anxiety screens at or above moderate.
    ComorbidMoodAnxietyPresent { phq9_total: u8, gad7_total: u8 },
    /// Depression screen at or above its moderate cutoff.
    Phq9ModerateOrAbove { total: u8, cutoff: u8 },
    /// Episodic course favors a mood condition.
    EpisodicPattern,
    /// Executive deficits judged secondary to low mood.
    CognitiveSymptomsSecondaryToMood,
    /// Elevated depression screen without childhood onset.
    NoChildhoodOnsetFavorsDepression { phq9_total: u8 },
    /// Anxiety screen at or above its moderate cutoff.
    Gad7ModerateOrAbove { total: u8, cutoff: u8 },
}
