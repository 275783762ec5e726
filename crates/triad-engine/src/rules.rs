use triad_core::models::condition::Condition;
use triad_core::models::evidence::DiagnosticEvidence;
use triad_core::models::judgments::{
    ChildhoodOnset, CoursePattern, ExecutiveFunction, ExecutivePattern, SymptomConsistency,
};
use triad_core::models::scales::{ScaleKind, ScaleScores};
use triad_core::models::trace::RuleFiring;
use triad_knowledge::KnowledgeBase;

use crate::render;
use crate::thresholds::ClinicalThresholds;

/// Combines the evaluator judgments and the three scale totals into exactly
/// one weighted evidence record per condition, in fixed order.
pub struct DifferentialRuleEngine<'a> {
    kb: &'a KnowledgeBase,
    thresholds: &'a ClinicalThresholds,
}

/// Accumulates rule firings for one condition and renders them into the
/// evidence text buckets as they land.
struct EvidenceBuilder<'a> {
    condition: Condition,
    kb: &'a KnowledgeBase,
    key_features: Vec<String>,
    contradicting_features: Vec<String>,
    clinical_reasoning: Vec<String>,
    trace: Vec<RuleFiring>,
}

impl<'a> EvidenceBuilder<'a> {
    fn new(condition: Condition, kb: &'a KnowledgeBase) -> Self {
        Self {
            condition,
            kb,
            key_features: Vec::new(),
            contradicting_features: Vec::new(),
            clinical_reasoning: Vec::new(),
            trace: Vec::new(),
        }
    }

    fn fire(&mut self, firing: RuleFiring) {
        let rendered = render::render_firing(&firing, self.kb);
        if let Some(line) = rendered.key_feature {
            self.key_features.push(line);
        }
        if let Some(line) = rendered.contradicting_feature {
            self.contradicting_features.push(line);
        }
        if let Some(line) = rendered.clinical_reasoning {
            self.clinical_reasoning.push(line);
        }
        self.trace.push(firing);
    }

    fn build(self, supporting_score: f64, confidence: f64) -> DiagnosticEvidence {
        DiagnosticEvidence {
            condition: self.condition,
            supporting_score,
            confidence,
            key_features: self.key_features,
            contradicting_features: self.contradicting_features,
            clinical_reasoning: self.clinical_reasoning,
            trace: self.trace,
        }
    }
}

impl<'a> DifferentialRuleEngine<'a> {
    pub fn new(kb: &'a KnowledgeBase, thresholds: &'a ClinicalThresholds) -> Self {
        Self { kb, thresholds }
    }

    /// Apply the differential rules. Always returns exactly three records,
    /// in fixed order: ADHD, depression, anxiety. Scale totals arrive
    /// pre-validated via `ScaleScores`, so every score and confidence here
    /// stays within [0, 1].
    pub fn apply_differential_rules(
        &self,
        scores: &ScaleScores,
        childhood: &ChildhoodOnset,
        consistency: &SymptomConsistency,
        executive: &ExecutiveFunction,
    ) -> Vec<DiagnosticEvidence> {
        vec![
            self.adhd_hypothesis(scores, childhood, consistency, executive),
            self.depression_hypothesis(scores, childhood, consistency, executive),
            self.anxiety_hypothesis(scores),
        ]
    }

    fn adhd_hypothesis(
        &self,
        scores: &ScaleScores,
        childhood: &ChildhoodOnset,
        consistency: &SymptomConsistency,
        executive: &ExecutiveFunction,
    ) -> DiagnosticEvidence {
        let t = self.thresholds;
        let mut builder = EvidenceBuilder::new(Condition::Adhd, self.kb);
        let mut confidence: f64 = 0.0;

        if childhood.supports_adhd {
            builder.fire(RuleFiring::ChildhoodOnsetSupported);
            confidence += t.adhd_weight_childhood;
        } else {
            builder.fire(RuleFiring::ChildhoodOnsetAbsent);
        }

        if consistency.pattern == CoursePattern::ChronicConsistent {
            builder.fire(RuleFiring::ChronicConsistentPattern);
            confidence += t.adhd_weight_chronic;
        }

        if executive.supports_adhd {
            builder.fire(RuleFiring::PrimaryExecutiveDysfunction);
            confidence += t.adhd_weight_executive;
        }

        let phq9 = scores.phq9();
        let gad7 = scores.gad7();
        if phq9 < t.phq9_moderate && gad7 < t.gad7_moderate {
            builder.fire(RuleFiring::MinimalMoodAnxiety {
                phq9_total: phq9,
                gad7_total: gad7,
            });
        } else {
            builder.fire(RuleFiring::ComorbidMoodAnxietyPresent {
                phq9_total: phq9,
                gad7_total: gad7,
            });
        }

        let confidence = confidence.min(1.0);
        let supporting_score = scores.fraction(ScaleKind::Asrs) * confidence;
        builder.build(supporting_score, confidence)
    }

    fn depression_hypothesis(
        &self,
        scores: &ScaleScores,
        childhood: &ChildhoodOnset,
        consistency: &SymptomConsistency,
        executive: &ExecutiveFunction,
    ) -> DiagnosticEvidence {
        let t = self.thresholds;
        let mut builder = EvidenceBuilder::new(Condition::Depression, self.kb);
        let phq9 = scores.phq9();
        let moderate = phq9 >= t.phq9_moderate;

        if moderate {
            builder.fire(RuleFiring::Phq9ModerateOrAbove {
                total: phq9,
                cutoff: t.phq9_moderate,
            });
        }

        if consistency.pattern == CoursePattern::EpisodicVariable {
            builder.fire(RuleFiring::EpisodicPattern);
        }

        if executive.pattern == ExecutivePattern::DepressionSecondary {
            builder.fire(RuleFiring::CognitiveSymptomsSecondaryToMood);
        }

        if !childhood.supports_adhd && moderate {
            builder.fire(RuleFiring::NoChildhoodOnsetFavorsDepression { phq9_total: phq9 });
        }

        let supporting_score = scores.fraction(ScaleKind::Phq9);
        let confidence = (supporting_score * t.scale_confidence_multiplier).min(1.0);
        builder.build(supporting_score, confidence)
    }

    fn anxiety_hypothesis(&self, scores: &ScaleScores) -> DiagnosticEvidence {
        let t = self.thresholds;
        let mut builder = EvidenceBuilder::new(Condition::Anxiety, self.kb);
        let gad7 = scores.gad7();

        if gad7 >= t.gad7_moderate {
            builder.fire(RuleFiring::Gad7ModerateOrAbove {
                total: gad7,
                cutoff: t.gad7_moderate,
            });
        }

        let supporting_score = scores.fraction(ScaleKind::Gad7);
        let confidence = (supporting_score * t.scale_confidence_multiplier).min(1.0);
        builder.build(supporting_score, confidence)
    }
}
