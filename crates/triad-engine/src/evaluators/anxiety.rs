use triad_core::models::judgments::{
    AnxietyEvaluation, AnxietyImpression, AnxietySeverity, ClinicalSignificance,
};
use triad_core::models::response::ResponseSet;

use crate::thresholds::ClinicalThresholds;

/// Context item: attention problems arrive via worry and preoccupation.
pub const WORRY_DISTRACTION_KEY: &str = "distraction_due_to_worry";
/// Context item: restlessness quality — 1 = tense (anxiety), 2 = driven (ADHD).
pub const RESTLESSNESS_TYPE_KEY: &str = "restlessness_tense_vs_driven";

pub const RESTLESSNESS_TENSE: u8 = 1;
pub const RESTLESSNESS_DRIVEN: u8 = 2;

/// Evaluate the anxiety screen and its relationship to attention problems.
pub fn evaluate_anxiety_symptoms(
    gad7_total: u8,
    responses: &ResponseSet,
    thresholds: &ClinicalThresholds,
) -> AnxietyEvaluation {
    let (severity, significance) = if gad7_total >= thresholds.gad7_severe {
        (AnxietySeverity::Severe, ClinicalSignificance::High)
    } else if gad7_total >= thresholds.gad7_moderate {
        (AnxietySeverity::Moderate, ClinicalSignificance::Moderate)
    } else if gad7_total >= thresholds.gad7_mild {
        (AnxietySeverity::Mild, ClinicalSignificance::LowToModerate)
    } else {
        (AnxietySeverity::Minimal, ClinicalSignificance::Minimal)
    };

    let worry_distraction = f64::from(responses.severity(WORRY_DISTRACTION_KEY));
    let restlessness = responses.severity(RESTLESSNESS_TYPE_KEY);
    let moderate = gad7_total >= thresholds.gad7_moderate;

    let (impression, reasoning) = if moderate && worry_distraction >= thresholds.auxiliary_signal {
        (
            AnxietyImpression::AnxietyWithWorryBasedDistraction,
            "Anxiety causing attention problems via worry and preoccupation",
        )
    } else if moderate && restlessness == RESTLESSNESS_TENSE {
        (
            AnxietyImpression::AnxietyPrimary,
            "Anxiety with tense restlessness (not ADHD-driven restlessness)",
        )
    } else if gad7_total >= thresholds.gad7_mild && !moderate {
        (
            AnxietyImpression::MildAnxietyOrSecondaryToAdhd,
            "Mild anxiety; could be secondary to chronic ADHD-related failures",
        )
    } else {
        (
            AnxietyImpression::MinimalAnxiety,
            "Anxiety not a primary concern",
        )
    };

    AnxietyEvaluation {
        gad7_total,
        severity,
        significance,
        impression,
        reasoning: reasoning.to_string(),
        requires_treatment: moderate,
    }
}
