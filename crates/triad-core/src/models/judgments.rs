use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Qualitative band for childhood-onset evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EvidenceStrength {
    Strong,
    Moderate,
    Weak,
}

/// Evidence for childhood onset of symptoms, required for the ADHD hypothesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChildhoodOnset {
    /// Mean of the five childhood indicators, 0–4 scale.
    pub score: f64,
    pub strength: EvidenceStrength,
    pub supports_adhd: bool,
    /// True when no childhood indicator was answered at all. The score is
    /// then an explicit 0, never an undefined mean.
    pub insufficient_data: bool,
    pub interpretation: String,
}

/// Lifetime course of the reported symptoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CoursePattern {
    ChronicConsistent,
    EpisodicVariable,
    MixedUnclear,
}

/// Chronic-vs-episodic judgment over the consistency markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomConsistency {
    pub chronic_score: f64,
    pub episodic_score: f64,
    pub pattern: CoursePattern,
    /// Which hypothesis the course pattern favors, in prose.
    pub favors: String,
    pub chronic_insufficient: bool,
    pub episodic_insufficient: bool,
    pub clinical_reasoning: Vec<String>,
}

/// How executive-function deficits relate to the three hypotheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ExecutivePattern {
    AdhdPrimary,
    DepressionSecondary,
    UnclearNeedsAssessment,
    LowImpairment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExecutiveFunction {
    /// Mean of the six executive indicators, 0–4 scale.
    pub score: f64,
    pub pattern: ExecutivePattern,
    pub supports_adhd: bool,
    pub insufficient_data: bool,
    pub interpretation: String,
}

/// Shared clinical-significance grading for the mood and anxiety screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ClinicalSignificance {
    Minimal,
    LowToModerate,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MoodSeverity {
    Minimal,
    Mild,
    Moderate,
    ModeratelySevereToSevere,
}

/// What the depression screen, combined with its context items, points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MoodImpression {
    Depression,
    DepressionWithSecondaryAttentionProblems,
    MildDepressionOrSecondaryToAdhd,
    MinimalDepression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MoodEvaluation {
    pub phq9_total: u8,
    pub severity: MoodSeverity,
    pub significance: ClinicalSignificance,
    pub impression: MoodImpression,
    pub reasoning: String,
    pub requires_treatment: bool,
    /// True whenever the self-harm item scored above 0. Promoted onto the
    /// report's risk flags, never left buried in prose.
    pub suicidal_risk: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnxietySeverity {
    Minimal,
    Mild,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnxietyImpression {
    AnxietyWithWorryBasedDistraction,
    AnxietyPrimary,
    MildAnxietyOrSecondaryToAdhd,
    MinimalAnxiety,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnxietyEvaluation {
    pub gad7_total: u8,
    pub severity: AnxietySeverity,
    pub significance: ClinicalSignificance,
    pub impression: AnxietyImpression,
    pub reasoning: String,
    pub requires_treatment: bool,
}

/// The five evaluator outputs for one run, bundled for the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluatorJudgments {
    pub childhood_onset: ChildhoodOnset,
    pub symptom_consistency: SymptomConsistency,
    pub executive_function: ExecutiveFunction,
    pub mood: MoodEvaluation,
    pub anxiety: AnxietyEvaluation,
}
