use triad_core::error::CoreError;
use triad_core::models::condition::Condition;
use triad_core::models::judgments::{CoursePattern, ExecutivePattern};
use triad_core::models::report::Complexity;
use triad_core::models::response::ResponseSet;
use triad_core::models::scales::ScaleScores;
use triad_engine::evaluators::{childhood, consistency, executive, mood};
use triad_engine::pipeline::ScreeningPipeline;
use triad_engine::render;
use triad_engine::thresholds::ClinicalThresholds;

/// A response map with strong childhood onset, a chronic course, and primary
/// lifelong executive dysfunction — the classic adult ADHD presentation.
fn adhd_presentation() -> ResponseSet {
    let mut responses = ResponseSet::new();
    for key in childhood::CHILDHOOD_KEYS {
        responses.set(key, 3);
    }
    responses.set("childhood_hyperactivity", 4);
    responses.set("childhood_impulsivity", 4);
    for key in consistency::CHRONIC_KEYS {
        responses.set(key, 4);
    }
    for key in consistency::EPISODIC_KEYS {
        responses.set(key, 1);
    }
    for key in executive::EXECUTIVE_KEYS {
        responses.set(key, 3);
    }
    responses.set(executive::LIFELONG_KEY, 4);
    responses
}

#[test]
fn classic_adhd_presentation_is_a_single_condition_report() {
    let pipeline = ScreeningPipeline::new();
    let scores = ScaleScores::new(54, 8, 6).unwrap();
    let report = pipeline.screen(&adhd_presentation(), &scores);

    assert_eq!(report.primary_condition, Condition::Adhd);
    assert!((report.primary_score - 0.75).abs() < 1e-9);
    assert_eq!(report.complexity, Complexity::SingleCondition);
    assert!(report.comorbid_conditions.is_empty());

    let adhd = &report.evidence[0].evidence;
    assert!((adhd.confidence - 1.0).abs() < 1e-9);
    assert!((adhd.supporting_score - 0.75).abs() < 1e-9);

    // Low totals keep both other hypotheses below the comorbidity threshold.
    assert!(report.evidence[1].weighted_score < 0.3);
    assert!(report.evidence[2].weighted_score < 0.3);

    assert_eq!(
        report.judgments.symptom_consistency.pattern,
        CoursePattern::ChronicConsistent
    );
    assert_eq!(
        report.judgments.executive_function.pattern,
        ExecutivePattern::AdhdPrimary
    );
}

#[test]
fn heavy_triple_presentation_is_complex() {
    let pipeline = ScreeningPipeline::new();
    let scores = ScaleScores::new(72, 20, 18).unwrap();
    let report = pipeline.screen(&adhd_presentation(), &scores);

    assert_eq!(report.primary_condition, Condition::Adhd);
    assert_eq!(report.complexity, Complexity::ComplexMultipleConditions);
    assert_eq!(report.comorbid_conditions.len(), 2);
    assert!(report.comorbid_conditions.contains(&Condition::Depression));
    assert!(report.comorbid_conditions.contains(&Condition::Anxiety));
    assert!(
        report
            .diagnostic_impression
            .starts_with("Complex presentation: ADHD")
    );
}

#[test]
fn empty_input_still_produces_a_complete_report() {
    let pipeline = ScreeningPipeline::new();
    let scores = ScaleScores::new(0, 0, 0).unwrap();
    let report = pipeline.screen(&ResponseSet::new(), &scores);

    // All weighted scores are zero; the tie resolves in fixed order.
    assert_eq!(report.primary_condition, Condition::Adhd);
    assert_eq!(report.primary_score, 0.0);
    assert_eq!(report.complexity, Complexity::SingleCondition);
    assert_eq!(report.evidence.len(), 3);
    assert_eq!(report.recommendations[0], render::DISCLAIMER);
    assert!(report.judgments.childhood_onset.insufficient_data);
    assert!(!report.risk_flags.suicidal_ideation);
}

#[test]
fn identical_inputs_serialize_byte_identically() {
    let pipeline = ScreeningPipeline::new();
    let mut responses = adhd_presentation();
    responses.set(mood::EPISODIC_ONSET_KEY, 3);
    responses.set(mood::SELF_HARM_KEY, 1);
    let scores = ScaleScores::new(48, 14, 11).unwrap();

    let first = serde_json::to_string(&pipeline.screen(&responses, &scores)).unwrap();
    let second = serde_json::to_string(&pipeline.screen(&responses, &scores)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn report_round_trips_through_serde() {
    let pipeline = ScreeningPipeline::new();
    let scores = ScaleScores::new(54, 12, 7).unwrap();
    let report = pipeline.screen(&adhd_presentation(), &scores);

    let json = serde_json::to_string(&report).unwrap();
    let parsed: triad_core::models::report::DiagnosisReport =
        serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);
}

#[test]
fn suicidal_risk_surfaces_as_a_report_field() {
    let pipeline = ScreeningPipeline::new();
    let responses: ResponseSet = [(mood::SELF_HARM_KEY, 1)].into_iter().collect();
    let scores = ScaleScores::new(10, 4, 2).unwrap();
    let report = pipeline.screen(&responses, &scores);
    assert!(report.risk_flags.suicidal_ideation);
}

#[test]
fn screen_totals_rejects_out_of_range_scales() {
    let pipeline = ScreeningPipeline::new();
    let responses = ResponseSet::new();

    let err = pipeline.screen_totals(&responses, 80, 0, 0).unwrap_err();
    assert!(matches!(err, CoreError::ScaleOutOfRange { .. }));

    let err = pipeline.screen_totals(&responses, 0, -3, 0).unwrap_err();
    assert!(matches!(err, CoreError::ScaleOutOfRange { .. }));

    assert!(pipeline.screen_totals(&responses, 72, 27, 21).is_ok());
}

#[test]
fn overridden_thresholds_flow_through_the_whole_run() {
    let strict = ScreeningPipeline::with_thresholds(ClinicalThresholds {
        comorbidity_threshold: 0.95,
        ..Default::default()
    });
    let scores = ScaleScores::new(72, 20, 18).unwrap();
    let report = strict.screen(&adhd_presentation(), &scores);
    assert_eq!(report.complexity, Complexity::SingleCondition);
    assert!(report.comorbid_conditions.is_empty());
}

#[test]
fn thresholds_deserialize_with_partial_overrides() {
    let thresholds: ClinicalThresholds =
        serde_json::from_str(r#"{"phq9_moderate": 8, "comorbidity_threshold": 0.4}"#).unwrap();
    assert_eq!(thresholds.phq9_moderate, 8);
    assert!((thresholds.comorbidity_threshold - 0.4).abs() < 1e-12);
    assert_eq!(thresholds.phq9_mild, 5);
    assert!((thresholds.adhd_weight_childhood - 0.4).abs() < 1e-12);
}
