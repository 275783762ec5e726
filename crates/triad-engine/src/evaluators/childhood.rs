use triad_core::models::judgments::{ChildhoodOnset, EvidenceStrength};
use triad_core::models::response::ResponseSet;

use super::IndicatorMean;
use crate::thresholds::ClinicalThresholds;

/// The five childhood indicators, 0–4 scale each.
pub const CHILDHOOD_KEYS: [&str; 5] = [
    "childhood_school_difficulties",
    "childhood_attention_problems",
    "childhood_hyperactivity",
    "childhood_impulsivity",
    "parent_teacher_reports_childhood",
];

/// Evaluate evidence for childhood onset of symptoms.
///
/// DSM-5-TR requires symptom onset before age 12 for ADHD, so this judgment
/// carries the largest weight in the ADHD confidence computation.
pub fn evaluate_childhood_onset(
    responses: &ResponseSet,
    thresholds: &ClinicalThresholds,
) -> ChildhoodOnset {
    let mean = IndicatorMean::over(responses, &CHILDHOOD_KEYS);
    let score = mean.value();

    let (strength, interpretation) = if score >= thresholds.childhood_strong {
        (
            EvidenceStrength::Strong,
            "Clear evidence of childhood-onset symptoms consistent with ADHD",
        )
    } else if score >= thresholds.childhood_moderate {
        (
            EvidenceStrength::Moderate,
            "Some childhood symptoms reported; further detailed history needed",
        )
    } else {
        (
            EvidenceStrength::Weak,
            "Limited childhood symptom history; ADHD diagnosis questionable",
        )
    };

    ChildhoodOnset {
        score,
        strength,
        supports_adhd: score >= thresholds.childhood_moderate,
        insufficient_data: mean.is_insufficient(),
        interpretation: interpretation.to_string(),
    }
}
