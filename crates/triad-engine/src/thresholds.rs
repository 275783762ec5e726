use serde::{Deserialize, Serialize};

/// Clinical cutoffs and rule coefficients, overridable by the caller.
///
/// Defaults carry the published screening cutoffs (PHQ-9 and GAD-7 band at
/// 5/10/15) and the engine's heuristic weights. The weights and the
/// comorbidity threshold are screening heuristics, not independently
/// validated constants, so recalibrating them must not require a code change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicalThresholds {
    /// PHQ-9 band cutoffs: mild / moderate / moderately-severe-or-greater.
    pub phq9_mild: u8,
    pub phq9_moderate: u8,
    pub phq9_severe: u8,
    /// GAD-7 band cutoffs: mild / moderate / severe.
    pub gad7_mild: u8,
    pub gad7_moderate: u8,
    pub gad7_severe: u8,
    /// Childhood-onset mean (0–4) at which evidence is strong.
    pub childhood_strong: f64,
    /// Childhood-onset mean at which evidence is moderate and supports ADHD.
    pub childhood_moderate: f64,
    /// Margin one course mean must exceed the other by to call the pattern.
    pub consistency_margin: f64,
    /// Executive-function mean (0–4) counted as impairment.
    pub ef_impairment: f64,
    /// Severity (0–4) at which an auxiliary context item counts as present.
    pub auxiliary_signal: f64,
    /// ADHD confidence weights for the three supporting judgments.
    pub adhd_weight_childhood: f64,
    pub adhd_weight_chronic: f64,
    pub adhd_weight_executive: f64,
    /// Multiplier turning a mood/anxiety scale fraction into confidence.
    pub scale_confidence_multiplier: f64,
    /// Weighted score at or above which a non-primary condition is comorbid.
    pub comorbidity_threshold: f64,
}

impl Default for ClinicalThresholds {
    fn default() -> Self {
        Self {
            phq9_mild: 5,
            phq9_moderate: 10,
            phq9_severe: 15,
            gad7_mild: 5,
            gad7_moderate: 10,
            gad7_severe: 15,
            childhood_strong: 3.0,
            childhood_moderate: 2.0,
            consistency_margin: 0.5,
            ef_impairment: 3.0,
            auxiliary_signal: 3.0,
            adhd_weight_childhood: 0.4,
            adhd_weight_chronic: 0.3,
            adhd_weight_executive: 0.3,
            scale_confidence_multiplier: 1.5,
            comorbidity_threshold: 0.3,
        }
    }
}
