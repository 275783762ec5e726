use serde::Serialize;
use ts_rs::TS;

use triad_core::models::condition::Condition;

/// Expert heuristics distinguishing one pair of similar-appearing conditions.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct DifferentialMarkers {
    /// Unordered pair; lookups accept either order.
    pub pair: (Condition, Condition),
    pub favoring_first: Vec<String>,
    pub favoring_second: Vec<String>,
    pub clinical_reasoning: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ComorbidityKind {
    AdhdDepression,
    AdhdAnxiety,
    DepressionAnxiety,
    Triple,
}

/// Research-backed pattern of co-occurrence between conditions.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct ComorbidityPattern {
    pub kind: ComorbidityKind,
    pub prevalence: String,
    pub clinical_pattern: Vec<String>,
    pub differential_challenge: Option<String>,
    pub key_distinction: Option<String>,
    /// Only populated for the triple-comorbidity pattern.
    pub assessment_strategy: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn differential_markers() -> [DifferentialMarkers; 3] {
    [
        DifferentialMarkers {
            pair: (Condition::Adhd, Condition::Depression),
            favoring_first: strings(&[
                "symptoms_present_since_childhood",
                "consistent_across_lifespan",
                "executive_dysfunction_primary",
                "stimulus_seeking_behavior",
                "difficulty_with_organization_time_management",
                "no_clear_mood_episodes",
                "restlessness_driven_by_motor",
                "impulsivity_not_mood_related",
            ]),
            favoring_second: strings(&[
                "episodic_pattern_with_clear_onset",
                "anhedonia_and_depressed_mood_primary",
                "cognitive_slowing_due_to_mood",
                "loss_of_interest_in_previously_enjoyed_activities",
                "guilt_and_worthlessness_prominent",
                "sleep_and_appetite_changes",
                "symptoms_worse_at_specific_times_of_day",
                "no_childhood_adhd_history",
            ]),
            clinical_reasoning: strings(&[
                "Depression causes secondary attention problems; ADHD is primary",
                "ADHD symptoms are lifelong and consistent; depression is episodic",
                "In depression, concentration improves when mood lifts",
                "ADHD shows poor sustained attention even during positive activities",
            ]),
        },
        DifferentialMarkers {
            pair: (Condition::Adhd, Condition::Anxiety),
            favoring_first: strings(&[
                "distractibility_not_due_to_worry",
                "impulsivity_and_risk_taking",
                "hyperactivity_not_tension_related",
                "poor_follow_through_on_tasks",
                "disorganization_primary",
                "childhood_onset_before_anxiety",
                "no_specific_worry_content",
            ]),
            favoring_second: strings(&[
                "attention_problems_only_when_anxious",
                "restlessness_due_to_worry_and_tension",
                "specific_worry_themes_identifiable",
                "avoidance_behaviors_present",
                "physical_tension_and_muscle_aches",
                "perfectionism_and_over_checking",
                "symptoms_fluctuate_with_stress_level",
            ]),
            clinical_reasoning: strings(&[
                "Anxiety causes worry-focused attention; ADHD is diffuse inattention",
                "Anxiety restlessness is tense; ADHD restlessness is driven",
                "ADHD shows poor inhibition; anxiety shows over-control",
                "Family history: ADHD is more heritable than GAD",
            ]),
        },
        DifferentialMarkers {
            pair: (Condition::Depression, Condition::Anxiety),
            favoring_first: strings(&[
                "anhedonia_more_prominent_than_worry",
                "psychomotor_retardation",
                "early_morning_awakening",
                "diurnal_mood_variation",
                "guilt_prominent",
            ]),
            favoring_second: strings(&[
                "worry_more_prominent_than_mood_low",
                "hypervigilance",
                "difficulty_falling_asleep",
                "physical_tension_prominent",
                "anticipatory_anxiety",
            ]),
            clinical_reasoning: strings(&[
                "Depression and anxiety frequently co-occur",
                "Assess which came first and which is more impairing",
                "PHQ-9 and GAD-7 scores help quantify relative severity",
            ]),
        },
    ]
}

pub(crate) fn comorbidity_patterns() -> [ComorbidityPattern; 4] {
    [
        ComorbidityPattern {
            kind: ComorbidityKind::AdhdDepression,
            prevalence: "30-50% of adults with ADHD have comorbid depression".to_string(),
            clinical_pattern: strings(&[
                "ADHD typically predates depression onset",
                "Chronic ADHD impairment can lead to secondary depression",
                "Depression can unmask previously compensated ADHD",
                "Both require treatment for optimal outcomes",
            ]),
            differential_challenge: Some("Both cause concentration problems".to_string()),
            key_distinction: Some(
                "ADHD attention problems are lifelong; depression is episodic".to_string(),
            ),
            assessment_strategy: Vec::new(),
        },
        ComorbidityPattern {
            kind: ComorbidityKind::AdhdAnxiety,
            prevalence: "25-40% of adults with ADHD have comorbid anxiety".to_string(),
            clinical_pattern: strings(&[
                "ADHD often leads to secondary anxiety due to failures",
                "Anxiety can worsen ADHD symptom expression",
                "Performance anxiety common in undiagnosed ADHD",
                "Social anxiety from chronic interpersonal difficulties",
            ]),
            differential_challenge: Some(
                "Both cause restlessness and concentration problems".to_string(),
            ),
            key_distinction: Some(
                "ADHD restlessness is motoric; anxiety is tense worry".to_string(),
            ),
            assessment_strategy: Vec::new(),
        },
        ComorbidityPattern {
            kind: ComorbidityKind::DepressionAnxiety,
            prevalence: "60-70% comorbidity rate".to_string(),
            clinical_pattern: strings(&[
                "Often occur together as part of common underlying vulnerability",
                "Anxiety typically predates depression",
                "Mixed anxiety-depression is common presentation",
                "PHQ-ADS score helps assess combined burden",
            ]),
            differential_challenge: Some(
                "Overlapping cognitive and vegetative symptoms".to_string(),
            ),
            key_distinction: Some("Assess predominant affect: low mood vs. worry".to_string()),
            assessment_strategy: Vec::new(),
        },
        ComorbidityPattern {
            kind: ComorbidityKind::Triple,
            prevalence: "10-20% of ADHD cases".to_string(),
            clinical_pattern: strings(&[
                "ADHD as primary neurodevelopmental condition",
                "Secondary depression and anxiety from chronic impairment",
                "Complex presentation requiring careful assessment",
                "Requires integrated treatment approach",
            ]),
            differential_challenge: None,
            key_distinction: None,
            assessment_strategy: strings(&[
                "Establish childhood ADHD history first",
                "Map timeline of depression and anxiety onset",
                "Assess each condition's relative contribution to impairment",
                "Consider sequential or concurrent treatment",
            ]),
        },
    ]
}
