use tracing::{debug, info};

use triad_core::error::CoreError;
use triad_core::models::judgments::EvaluatorJudgments;
use triad_core::models::report::DiagnosisReport;
use triad_core::models::response::ResponseSet;
use triad_core::models::scales::ScaleScores;
use triad_knowledge::KnowledgeBase;

use crate::aggregator;
use crate::evaluators::{anxiety, childhood, consistency, executive, mood};
use crate::rules::DifferentialRuleEngine;
use crate::thresholds::ClinicalThresholds;

/// End-to-end screening run: evaluators → rule engine → aggregator.
///
/// Holds only a knowledge-base reference and the threshold configuration, so
/// one pipeline may serve arbitrarily many concurrent runs.
pub struct ScreeningPipeline {
    kb: &'static KnowledgeBase,
    thresholds: ClinicalThresholds,
}

impl ScreeningPipeline {
    pub fn new() -> Self {
        Self::with_thresholds(ClinicalThresholds::default())
    }

    pub fn with_thresholds(thresholds: ClinicalThresholds) -> Self {
        Self {
            kb: KnowledgeBase::shared(),
            thresholds,
        }
    }

    pub fn thresholds(&self) -> &ClinicalThresholds {
        &self.thresholds
    }

    /// Run one screening over validated inputs. Infallible: range errors are
    /// ruled out at `ScaleScores` construction, and missing response keys
    /// read as symptom-absent.
    pub fn screen(&self, responses: &ResponseSet, scores: &ScaleScores) -> DiagnosisReport {
        let judgments = EvaluatorJudgments {
            childhood_onset: childhood::evaluate_childhood_onset(responses, &self.thresholds),
            symptom_consistency: consistency::evaluate_symptom_consistency(
                responses,
                &self.thresholds,
            ),
            executive_function: executive::evaluate_executive_dysfunction(
                responses,
                &self.thresholds,
            ),
            mood: mood::evaluate_mood_symptoms(scores.phq9(), responses, &self.thresholds),
            anxiety: anxiety::evaluate_anxiety_symptoms(
                scores.gad7(),
                responses,
                &self.thresholds,
            ),
        };

        debug!(
            childhood_score = judgments.childhood_onset.score,
            childhood_supports_adhd = judgments.childhood_onset.supports_adhd,
            course_pattern = ?judgments.symptom_consistency.pattern,
            executive_pattern = ?judgments.executive_function.pattern,
            mood_severity = ?judgments.mood.severity,
            anxiety_severity = ?judgments.anxiety.severity,
            "evaluator judgments"
        );

        let engine = DifferentialRuleEngine::new(self.kb, &self.thresholds);
        let evidence = engine.apply_differential_rules(
            scores,
            &judgments.childhood_onset,
            &judgments.symptom_consistency,
            &judgments.executive_function,
        );

        let report = aggregator::generate_primary_diagnosis(evidence, judgments, &self.thresholds);

        info!(
            primary = %report.primary_condition,
            primary_score = report.primary_score,
            complexity = ?report.complexity,
            comorbid = report.comorbid_conditions.len(),
            suicidal_ideation = report.risk_flags.suicidal_ideation,
            "screening complete"
        );

        report
    }

    /// Convenience for callers holding raw totals: validates the scale
    /// ranges, then screens.
    pub fn screen_totals(
        &self,
        responses: &ResponseSet,
        asrs_total: i32,
        phq9_total: i32,
        gad7_total: i32,
    ) -> Result<DiagnosisReport, CoreError> {
        let scores = ScaleScores::new(asrs_total, phq9_total, gad7_total)?;
        Ok(self.screen(responses, &scores))
    }
}

impl Default for ScreeningPipeline {
    fn default() -> Self {
        Self::new()
    }
}
