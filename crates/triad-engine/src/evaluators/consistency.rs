use triad_core::models::judgments::{CoursePattern, SymptomConsistency};
use triad_core::models::response::ResponseSet;

use super::IndicatorMean;
use crate::thresholds::ClinicalThresholds;

/// Markers of a chronic, lifelong symptom course.
pub const CHRONIC_KEYS: [&str; 4] = [
    "symptoms_since_childhood",
    "symptoms_always_present",
    "no_remission_periods",
    "symptoms_multiple_settings",
];

/// Markers of an episodic, fluctuating course.
pub const EPISODIC_KEYS: [&str; 4] = [
    "symptoms_started_recently",
    "distinct_mood_episodes",
    "periods_without_symptoms",
    "symptoms_worse_with_stress",
];

/// Evaluate whether symptoms run chronic or episodic.
///
/// ADHD symptoms are chronic and consistent; depression and anxiety tend to
/// be episodic or fluctuating. Neither side winning by the configured margin
/// is an explicitly mixed, unclear call.
pub fn evaluate_symptom_consistency(
    responses: &ResponseSet,
    thresholds: &ClinicalThresholds,
) -> SymptomConsistency {
    let chronic = IndicatorMean::over(responses, &CHRONIC_KEYS);
    let episodic = IndicatorMean::over(responses, &EPISODIC_KEYS);
    let chronic_score = chronic.value();
    let episodic_score = episodic.value();

    let (pattern, favors) = if chronic_score > episodic_score + thresholds.consistency_margin {
        (CoursePattern::ChronicConsistent, "ADHD")
    } else if episodic_score > chronic_score + thresholds.consistency_margin {
        (CoursePattern::EpisodicVariable, "Depression or Anxiety")
    } else {
        (
            CoursePattern::MixedUnclear,
            "Possible comorbidity or requires further assessment",
        )
    };

    SymptomConsistency {
        chronic_score,
        episodic_score,
        pattern,
        favors: favors.to_string(),
        chronic_insufficient: chronic.is_insufficient(),
        episodic_insufficient: episodic.is_insufficient(),
        clinical_reasoning: vec![
            "ADHD symptoms are present consistently since childhood".to_string(),
            "Depression/anxiety tend to have episodic course".to_string(),
            "Comorbidity shows chronic ADHD with superimposed episodes".to_string(),
        ],
    }
}
