use triad_core::models::judgments::{ExecutiveFunction, ExecutivePattern};
use triad_core::models::response::ResponseSet;

use super::IndicatorMean;
use crate::thresholds::ClinicalThresholds;

/// The six executive-function indicators, 0–4 scale each.
pub const EXECUTIVE_KEYS: [&str; 6] = [
    "difficulty_organizing_tasks",
    "time_management_problems",
    "difficulty_planning_ahead",
    "forgets_tasks_frequently",
    "difficulty_starting_tasks",
    "does_not_finish_tasks",
];

/// Auxiliary item: deficits track low mood.
pub const MOOD_RELATED_KEY: &str = "ef_worse_when_mood_low";
/// Auxiliary item: deficits present since childhood.
pub const LIFELONG_KEY: &str = "ef_problems_since_childhood";

/// Evaluate executive-function deficits and whether they look primary
/// (lifelong, as in ADHD) or secondary to mood disturbance.
pub fn evaluate_executive_dysfunction(
    responses: &ResponseSet,
    thresholds: &ClinicalThresholds,
) -> ExecutiveFunction {
    let mean = IndicatorMean::over(responses, &EXECUTIVE_KEYS);
    let score = mean.value();

    let mood_related = f64::from(responses.severity(MOOD_RELATED_KEY));
    let lifelong = f64::from(responses.severity(LIFELONG_KEY));

    let impaired = score >= thresholds.ef_impairment;
    let (pattern, interpretation) = if impaired && lifelong >= thresholds.auxiliary_signal {
        (
            ExecutivePattern::AdhdPrimary,
            "Primary executive dysfunction consistent with ADHD",
        )
    } else if impaired && mood_related >= thresholds.auxiliary_signal {
        (
            ExecutivePattern::DepressionSecondary,
            "Executive dysfunction appears secondary to mood disturbance",
        )
    } else if impaired {
        (
            ExecutivePattern::UnclearNeedsAssessment,
            "Executive dysfunction present; further evaluation of onset needed",
        )
    } else {
        (
            ExecutivePattern::LowImpairment,
            "Minimal executive dysfunction reported",
        )
    };

    ExecutiveFunction {
        score,
        pattern,
        supports_adhd: pattern == ExecutivePattern::AdhdPrimary,
        insufficient_data: mean.is_insufficient(),
        interpretation: interpretation.to_string(),
    }
}
