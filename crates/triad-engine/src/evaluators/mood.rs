use triad_core::models::judgments::{
    ClinicalSignificance, MoodEvaluation, MoodImpression, MoodSeverity,
};
use triad_core::models::response::ResponseSet;

use crate::thresholds::ClinicalThresholds;

/// PHQ-9 item 9; any score above 0 raises the suicidal-risk flag.
pub const SELF_HARM_KEY: &str = "thoughts_better_off_dead";
/// Context item: mood episodes had a clear onset.
pub const EPISODIC_ONSET_KEY: &str = "mood_episodes_clear_onset";
/// Context item: attention improves when mood is good.
pub const ATTENTION_IMPROVES_KEY: &str = "attention_better_when_mood_good";

/// Evaluate the depression screen and its relationship to attention problems.
pub fn evaluate_mood_symptoms(
    phq9_total: u8,
    responses: &ResponseSet,
    thresholds: &ClinicalThresholds,
) -> MoodEvaluation {
    let (severity, significance) = if phq9_total >= thresholds.phq9_severe {
        (
            MoodSeverity::ModeratelySevereToSevere,
            ClinicalSignificance::High,
        )
    } else if phq9_total >= thresholds.phq9_moderate {
        (MoodSeverity::Moderate, ClinicalSignificance::Moderate)
    } else if phq9_total >= thresholds.phq9_mild {
        (MoodSeverity::Mild, ClinicalSignificance::LowToModerate)
    } else {
        (MoodSeverity::Minimal, ClinicalSignificance::Minimal)
    };

    let episodic = f64::from(responses.severity(EPISODIC_ONSET_KEY));
    let attention_improves = f64::from(responses.severity(ATTENTION_IMPROVES_KEY));
    let moderate = phq9_total >= thresholds.phq9_moderate;

    let (impression, reasoning) = if moderate && episodic >= thresholds.auxiliary_signal {
        (
            MoodImpression::Depression,
            "Significant depressive symptoms with episodic pattern",
        )
    } else if moderate && attention_improves >= thresholds.auxiliary_signal {
        (
            MoodImpression::DepressionWithSecondaryAttentionProblems,
            "Depression causing secondary cognitive symptoms",
        )
    } else if phq9_total >= thresholds.phq9_mild && !moderate {
        (
            MoodImpression::MildDepressionOrSecondaryToAdhd,
            "Mild mood symptoms; could be secondary to chronic ADHD impairment",
        )
    } else {
        (
            MoodImpression::MinimalDepression,
            "Depression not a primary concern",
        )
    };

    MoodEvaluation {
        phq9_total,
        severity,
        significance,
        impression,
        reasoning: reasoning.to_string(),
        requires_treatment: moderate,
        suicidal_risk: responses.severity(SELF_HARM_KEY) > 0,
    }
}
