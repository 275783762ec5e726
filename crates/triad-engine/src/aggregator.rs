use triad_core::models::condition::Condition;
use triad_core::models::evidence::DiagnosticEvidence;
use triad_core::models::judgments::EvaluatorJudgments;
use triad_core::models::report::{Complexity, DiagnosisReport, RankedEvidence, RiskFlags};

use crate::render;
use crate::thresholds::ClinicalThresholds;

/// Rank the evidence records and assemble the final report. Expects the rule
/// engine's evidence list, which always holds its three records.
///
/// Weighted score is recomputed here (supporting × confidence), never reused
/// from a previous run. The sort is stable and the records arrive in fixed
/// condition order, so ties resolve ADHD before depression before anxiety.
pub fn generate_primary_diagnosis(
    evidence: Vec<DiagnosticEvidence>,
    judgments: EvaluatorJudgments,
    thresholds: &ClinicalThresholds,
) -> DiagnosisReport {
    let mut ranked: Vec<RankedEvidence> = evidence
        .into_iter()
        .map(|evidence| RankedEvidence {
            weighted_score: evidence.weighted_score(),
            evidence,
        })
        .collect();
    ranked.sort_by(|a, b| b.weighted_score.total_cmp(&a.weighted_score));

    let primary_condition = ranked[0].evidence.condition;
    let primary_score = ranked[0].weighted_score;

    let comorbid_conditions: Vec<Condition> = ranked[1..]
        .iter()
        .filter(|entry| entry.weighted_score >= thresholds.comorbidity_threshold)
        .map(|entry| entry.evidence.condition)
        .collect();

    let complexity = match comorbid_conditions.len() {
        0 => Complexity::SingleCondition,
        1 => Complexity::ComorbidTwoConditions,
        _ => Complexity::ComplexMultipleConditions,
    };

    let diagnostic_impression = render::render_impression(primary_condition, &comorbid_conditions);
    let recommendations =
        render::render_recommendations(primary_condition, &comorbid_conditions, complexity);

    let risk_flags = RiskFlags {
        suicidal_ideation: judgments.mood.suicidal_risk,
        depression_treatment_indicated: judgments.mood.requires_treatment,
        anxiety_treatment_indicated: judgments.anxiety.requires_treatment,
    };

    DiagnosisReport {
        primary_condition,
        primary_score,
        comorbid_conditions,
        diagnostic_impression,
        complexity,
        evidence: ranked,
        judgments,
        risk_flags,
        recommendations,
    }
}
