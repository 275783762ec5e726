//! Presentation layer for the decision trace.
//!
//! The rule engine records structured `RuleFiring` tuples; this module turns
//! them into the report's human-readable feature and reasoning lines. Keeping
//! the phrasing out of the engine means the trace stays testable by
//! identifier and the wording can change without touching decision logic.

use triad_core::models::condition::Condition;
use triad_core::models::report::Complexity;
use triad_core::models::trace::RuleFiring;
use triad_knowledge::KnowledgeBase;
use triad_knowledge::markers::ComorbidityKind;

/// First recommendation line of every report.
pub const DISCLAIMER: &str = "This is a SCREENING TOOL ONLY - not a diagnosis";
/// Second, fixed follow-up to the disclaimer.
pub const PROFESSIONAL_EVALUATION: &str =
    "Formal evaluation by a qualified mental health professional is necessary";

/// Text rendered from one rule firing, split into the evidence buckets.
#[derive(Debug, Default)]
pub struct RenderedFiring {
    pub key_feature: Option<String>,
    pub contradicting_feature: Option<String>,
    pub clinical_reasoning: Option<String>,
}

pub fn render_firing(firing: &RuleFiring, kb: &KnowledgeBase) -> RenderedFiring {
    match firing {
        RuleFiring::ChildhoodOnsetSupported => RenderedFiring {
            key_feature: Some("Clear childhood symptom onset before age 12".to_string()),
            clinical_reasoning: Some(
                "DSM-5-TR requires symptom onset before age 12 for ADHD".to_string(),
            ),
            ..Default::default()
        },
        RuleFiring::ChildhoodOnsetAbsent => RenderedFiring {
            contradicting_feature: Some("Weak or absent childhood symptom history".to_string()),
            clinical_reasoning: Some(
                "No clear childhood onset argues against ADHD diagnosis".to_string(),
            ),
            ..Default::default()
        },
        RuleFiring::ChronicConsistentPattern => RenderedFiring {
            key_feature: Some("Chronic, consistent symptom pattern".to_string()),
            clinical_reasoning: Some(
                "ADHD symptoms are lifelong and consistent, not episodic".to_string(),
            ),
            ..Default::default()
        },
        RuleFiring::PrimaryExecutiveDysfunction => RenderedFiring {
            key_feature: Some("Primary executive dysfunction since childhood".to_string()),
            clinical_reasoning: Some(
                "Core ADHD feature is primary executive dysfunction".to_string(),
            ),
            ..Default::default()
        },
        RuleFiring::MinimalMoodAnxiety { .. } => RenderedFiring {
            key_feature: Some("Minimal depression and anxiety symptoms".to_string()),
            ..Default::default()
        },
        RuleFiring::ComorbidMoodAnxietyPresent { .. } => RenderedFiring {
            key_feature: Some("Comorbid mood/anxiety symptoms present".to_string()),
            clinical_reasoning: Some(
                kb.comorbidity_pattern(ComorbidityKind::AdhdDepression)
                    .prevalence
                    .clone(),
            ),
            ..Default::default()
        },
        RuleFiring::Phq9ModerateOrAbove { total, cutoff } => RenderedFiring {
            key_feature: Some(format!(
                "PHQ-9 score of {total} indicates moderate or greater depression"
            )),
            clinical_reasoning: Some(format!(
                "PHQ-9 >={cutoff} has 88% sensitivity for major depression"
            )),
            ..Default::default()
        },
        RuleFiring::EpisodicPattern => RenderedFiring {
            key_feature: Some("Episodic symptom pattern".to_string()),
            clinical_reasoning: Some(
                "Depression typically has episodic course with remissions".to_string(),
            ),
            ..Default::default()
        },
        RuleFiring::CognitiveSymptomsSecondaryToMood => RenderedFiring {
            key_feature: Some("Cognitive symptoms appear secondary to mood".to_string()),
            clinical_reasoning: Some(
                "Depression causes secondary attention and concentration problems".to_string(),
            ),
            ..Default::default()
        },
        RuleFiring::NoChildhoodOnsetFavorsDepression { .. } => RenderedFiring {
            clinical_reasoning: Some(
                "Lack of childhood symptoms argues against ADHD; depression more likely"
                    .to_string(),
            ),
            ..Default::default()
        },
        RuleFiring::Gad7ModerateOrAbove { total, cutoff } => RenderedFiring {
            key_feature: Some(format!(
                "GAD-7 score of {total} indicates moderate or greater anxiety"
            )),
            clinical_reasoning: Some(format!(
                "GAD-7 >={cutoff} has 89% sensitivity for anxiety disorders"
            )),
            ..Default::default()
        },
    }
}

/// One-line diagnostic impression for the report header.
pub fn render_impression(primary: Condition, comorbid: &[Condition]) -> String {
    match comorbid {
        [] => format!("Primary pattern consistent with {primary}"),
        [only] => format!("Primary pattern: {primary} with comorbid {only}"),
        _ => format!("Complex presentation: {primary} with multiple comorbid conditions"),
    }
}

/// Recommendation lines: the fixed disclaimer, then a guidance block for each
/// clinically significant condition, then a complexity block when more than
/// one condition is significant.
pub fn render_recommendations(
    primary: Condition,
    comorbid: &[Condition],
    complexity: Complexity,
) -> Vec<String> {
    let mut lines = vec![DISCLAIMER.to_string(), PROFESSIONAL_EVALUATION.to_string()];

    let significant = |condition: Condition| primary == condition || comorbid.contains(&condition);

    if significant(Condition::Adhd) {
        lines.push("Comprehensive ADHD evaluation should include:".to_string());
        lines.push("  - Detailed childhood and developmental history".to_string());
        lines.push("  - Collateral information from family members".to_string());
        lines.push("  - Assessment of functional impairment across settings".to_string());
        lines.push(
            "  - Ruling out other conditions (mood, anxiety, learning disabilities)".to_string(),
        );
    }

    if significant(Condition::Depression) {
        lines.push("Depression screening positive - evaluation should address:".to_string());
        lines.push("  - Suicide risk assessment".to_string());
        lines.push("  - Duration and severity of current episode".to_string());
        lines.push("  - History of previous episodes".to_string());
        lines.push("  - Consideration of psychotherapy and/or medication".to_string());
    }

    if significant(Condition::Anxiety) {
        lines.push("Anxiety screening positive - evaluation should include:".to_string());
        lines.push("  - Specific anxiety disorder subtype assessment".to_string());
        lines.push("  - Impact on daily functioning".to_string());
        lines.push("  - Consideration of CBT and/or medication".to_string());
    }

    if complexity != Complexity::SingleCondition {
        lines.push("Complex presentation with multiple conditions:".to_string());
        lines.push("  - Integrated treatment approach needed".to_string());
        lines.push("  - Consider psychiatrist referral for medication management".to_string());
        lines.push("  - Psychotherapy for comorbid conditions".to_string());
    }

    lines
}
