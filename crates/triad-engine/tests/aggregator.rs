use triad_core::models::condition::Condition;
use triad_core::models::evidence::DiagnosticEvidence;
use triad_core::models::judgments::EvaluatorJudgments;
use triad_core::models::report::Complexity;
use triad_core::models::response::ResponseSet;
use triad_engine::aggregator::generate_primary_diagnosis;
use triad_engine::evaluators::{anxiety, childhood, consistency, executive, mood};
use triad_engine::render;
use triad_engine::thresholds::ClinicalThresholds;

fn evidence(condition: Condition, supporting_score: f64, confidence: f64) -> DiagnosticEvidence {
    DiagnosticEvidence {
        condition,
        supporting_score,
        confidence,
        key_features: Vec::new(),
        contradicting_features: Vec::new(),
        clinical_reasoning: Vec::new(),
        trace: Vec::new(),
    }
}

fn neutral_judgments() -> EvaluatorJudgments {
    let responses = ResponseSet::new();
    let t = ClinicalThresholds::default();
    EvaluatorJudgments {
        childhood_onset: childhood::evaluate_childhood_onset(&responses, &t),
        symptom_consistency: consistency::evaluate_symptom_consistency(&responses, &t),
        executive_function: executive::evaluate_executive_dysfunction(&responses, &t),
        mood: mood::evaluate_mood_symptoms(0, &responses, &t),
        anxiety: anxiety::evaluate_anxiety_symptoms(0, &responses, &t),
    }
}

fn fixed_order(
    adhd: (f64, f64),
    depression: (f64, f64),
    anxiety: (f64, f64),
) -> Vec<DiagnosticEvidence> {
    vec![
        evidence(Condition::Adhd, adhd.0, adhd.1),
        evidence(Condition::Depression, depression.0, depression.1),
        evidence(Condition::Anxiety, anxiety.0, anxiety.1),
    ]
}

#[test]
fn highest_weighted_score_becomes_primary() {
    let t = ClinicalThresholds::default();
    let report = generate_primary_diagnosis(
        fixed_order((0.2, 0.5), (0.8, 0.9), (0.1, 0.5)),
        neutral_judgments(),
        &t,
    );
    assert_eq!(report.primary_condition, Condition::Depression);
    assert!((report.primary_score - 0.72).abs() < 1e-9);
    assert_eq!(report.evidence.len(), 3);
    assert_eq!(report.evidence[0].evidence.condition, Condition::Depression);
}

#[test]
fn equal_weighted_scores_break_ties_in_fixed_condition_order() {
    let t = ClinicalThresholds::default();
    // ADHD and depression both weigh 0.40.
    let report = generate_primary_diagnosis(
        fixed_order((0.5, 0.8), (0.8, 0.5), (0.1, 0.1)),
        neutral_judgments(),
        &t,
    );
    assert_eq!(report.primary_condition, Condition::Adhd);

    // Depression and anxiety both weigh 0.42.
    let report = generate_primary_diagnosis(
        fixed_order((0.0, 0.0), (0.6, 0.7), (0.7, 0.6)),
        neutral_judgments(),
        &t,
    );
    assert_eq!(report.primary_condition, Condition::Depression);
    assert_eq!(report.comorbid_conditions, vec![Condition::Anxiety]);
}

#[test]
fn all_zero_evidence_defaults_to_adhd_first() {
    let t = ClinicalThresholds::default();
    let report = generate_primary_diagnosis(
        fixed_order((0.0, 0.0), (0.0, 0.0), (0.0, 0.0)),
        neutral_judgments(),
        &t,
    );
    assert_eq!(report.primary_condition, Condition::Adhd);
    assert_eq!(report.complexity, Complexity::SingleCondition);
    assert!(report.comorbid_conditions.is_empty());
}

#[test]
fn comorbidity_threshold_splits_complexity() {
    let t = ClinicalThresholds::default();

    let single = generate_primary_diagnosis(
        fixed_order((0.9, 0.9), (0.5, 0.5), (0.2, 0.2)),
        neutral_judgments(),
        &t,
    );
    assert_eq!(single.complexity, Complexity::SingleCondition);

    let two = generate_primary_diagnosis(
        fixed_order((0.9, 0.9), (0.7, 0.7), (0.2, 0.2)),
        neutral_judgments(),
        &t,
    );
    assert_eq!(two.complexity, Complexity::ComorbidTwoConditions);
    assert_eq!(two.comorbid_conditions, vec![Condition::Depression]);

    let complex = generate_primary_diagnosis(
        fixed_order((0.9, 0.9), (0.7, 0.7), (0.6, 0.6)),
        neutral_judgments(),
        &t,
    );
    assert_eq!(complex.complexity, Complexity::ComplexMultipleConditions);
    assert_eq!(complex.comorbid_conditions.len(), 2);
}

#[test]
fn weighted_score_exactly_at_threshold_is_comorbid() {
    let t = ClinicalThresholds::default();
    let report = generate_primary_diagnosis(
        fixed_order((0.9, 0.9), (0.6, 0.5), (0.0, 0.0)),
        neutral_judgments(),
        &t,
    );
    assert_eq!(report.comorbid_conditions, vec![Condition::Depression]);
}

#[test]
fn overridden_comorbidity_threshold_changes_the_call() {
    let t = ClinicalThresholds {
        comorbidity_threshold: 0.5,
        ..Default::default()
    };
    let report = generate_primary_diagnosis(
        fixed_order((0.9, 0.9), (0.6, 0.6), (0.0, 0.0)),
        neutral_judgments(),
        &t,
    );
    assert!(report.comorbid_conditions.is_empty());
    assert_eq!(report.complexity, Complexity::SingleCondition);
}

#[test]
fn impression_names_primary_and_comorbid_conditions() {
    let t = ClinicalThresholds::default();

    let single = generate_primary_diagnosis(
        fixed_order((0.9, 0.9), (0.1, 0.1), (0.1, 0.1)),
        neutral_judgments(),
        &t,
    );
    assert_eq!(
        single.diagnostic_impression,
        "Primary pattern consistent with ADHD"
    );

    let two = generate_primary_diagnosis(
        fixed_order((0.1, 0.1), (0.9, 0.9), (0.7, 0.7)),
        neutral_judgments(),
        &t,
    );
    assert_eq!(
        two.diagnostic_impression,
        "Primary pattern: Major Depressive Disorder with comorbid Generalized Anxiety Disorder"
    );

    let complex = generate_primary_diagnosis(
        fixed_order((0.9, 0.9), (0.8, 0.8), (0.7, 0.7)),
        neutral_judgments(),
        &t,
    );
    assert_eq!(
        complex.diagnostic_impression,
        "Complex presentation: ADHD with multiple comorbid conditions"
    );
}

#[test]
fn recommendations_always_open_with_the_disclaimer() {
    let t = ClinicalThresholds::default();
    let cases = [
        fixed_order((0.0, 0.0), (0.0, 0.0), (0.0, 0.0)),
        fixed_order((0.9, 0.9), (0.1, 0.1), (0.1, 0.1)),
        fixed_order((0.9, 0.9), (0.8, 0.8), (0.7, 0.7)),
    ];
    for evidence_list in cases {
        let report = generate_primary_diagnosis(evidence_list, neutral_judgments(), &t);
        assert_eq!(report.recommendations[0], render::DISCLAIMER);
        assert_eq!(report.recommendations[1], render::PROFESSIONAL_EVALUATION);
    }
}

#[test]
fn guidance_blocks_cover_primary_and_comorbid_conditions() {
    let t = ClinicalThresholds::default();
    // Depression primary with ADHD comorbid: both blocks present, plus the
    // complexity block; no anxiety block.
    let report = generate_primary_diagnosis(
        fixed_order((0.7, 0.7), (0.9, 0.9), (0.1, 0.1)),
        neutral_judgments(),
        &t,
    );
    let text = report.recommendations.join("\n");
    assert!(text.contains("Comprehensive ADHD evaluation"));
    assert!(text.contains("Depression screening positive"));
    assert!(!text.contains("Anxiety screening positive"));
    assert!(text.contains("Complex presentation with multiple conditions:"));
}

#[test]
fn single_condition_report_omits_the_complexity_block() {
    let t = ClinicalThresholds::default();
    let report = generate_primary_diagnosis(
        fixed_order((0.0, 0.0), (0.0, 0.0), (0.9, 0.9)),
        neutral_judgments(),
        &t,
    );
    let text = report.recommendations.join("\n");
    assert!(text.contains("Anxiety screening positive"));
    assert!(!text.contains("Integrated treatment approach"));
}

#[test]
fn risk_flags_are_promoted_from_the_mood_judgment() {
    let t = ClinicalThresholds::default();
    let responses: ResponseSet = [(mood::SELF_HARM_KEY, 2)].into_iter().collect();
    let mut judgments = neutral_judgments();
    judgments.mood = mood::evaluate_mood_symptoms(16, &responses, &t);
    judgments.anxiety = anxiety::evaluate_anxiety_symptoms(11, &ResponseSet::new(), &t);

    let report = generate_primary_diagnosis(
        fixed_order((0.1, 0.1), (0.9, 0.9), (0.6, 0.6)),
        judgments,
        &t,
    );
    assert!(report.risk_flags.suicidal_ideation);
    assert!(report.risk_flags.depression_treatment_indicated);
    assert!(report.risk_flags.anxiety_treatment_indicated);
}
