use serde::Serialize;
use ts_rs::TS;

use triad_core::models::condition::Condition;

/// Lifetime course a symptom cluster typically follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DevelopmentalPattern {
    ChildhoodOnset,
    Episodic,
    Chronic,
}

/// A cluster of related symptoms for one condition.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct SymptomCluster {
    pub name: String,
    /// Symptom keys, unique within the cluster.
    pub symptoms: Vec<String>,
    /// Clinical significance weight, 0.0–1.0.
    pub weight: f64,
    pub context_dependent: bool,
    pub developmental_pattern: DevelopmentalPattern,
}

/// Complete diagnostic criteria for one condition, per DSM-5-TR.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct DiagnosticCriteria {
    pub condition: Condition,
    pub primary_clusters: Vec<SymptomCluster>,
    pub exclusion_criteria: Vec<String>,
    pub duration_requirement: String,
    pub onset_requirement: String,
    pub functional_impairment_required: bool,
    pub context_requirements: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn adhd_criteria() -> DiagnosticCriteria {
    let inattention = SymptomCluster {
        name: "Inattention".to_string(),
        symptoms: strings(&[
            "fails_to_give_close_attention_to_details",
            "difficulty_sustaining_attention",
            "does_not_seem_to_listen",
            "does_not_follow_through_instructions",
            "difficulty_organizing_tasks",
            "avoids_sustained_mental_effort",
            "loses_things_necessary_for_tasks",
            "easily_distracted_by_extraneous_stimuli",
            "forgetful_in_daily_activities",
        ]),
        weight: 1.0,
        context_dependent: true,
        developmental_pattern: DevelopmentalPattern::ChildhoodOnset,
    };

    let hyperactivity_impulsivity = SymptomCluster {
        name: "Hyperactivity-Impulsivity".to_string(),
        symptoms: strings(&[
            "fidgets_with_hands_or_feet",
            "leaves_seat_when_remaining_seated_expected",
            "feels_restless",
            "difficulty_engaging_in_leisure_quietly",
            "on_the_go_driven_by_motor",
            "talks_excessively",
            "blurts_out_answers",
            "difficulty_waiting_turn",
            "interrupts_or_intrudes_on_others",
        ]),
        weight: 1.0,
        context_dependent: true,
        developmental_pattern: DevelopmentalPattern::ChildhoodOnset,
    };

    DiagnosticCriteria {
        condition: Condition::Adhd,
        primary_clusters: vec![inattention, hyperactivity_impulsivity],
        exclusion_criteria: strings(&[
            "symptoms_better_explained_by_another_mental_disorder",
            "symptoms_only_during_psychosis",
        ]),
        duration_requirement: "at_least_6_months".to_string(),
        onset_requirement: "symptoms_present_before_age_12".to_string(),
        functional_impairment_required: true,
        context_requirements: strings(&["two_or_more_settings"]),
    }
}

pub(crate) fn depression_criteria() -> DiagnosticCriteria {
    let core = SymptomCluster {
        name: "Core Depressive Symptoms".to_string(),
        symptoms: strings(&[
            "depressed_mood_most_of_day",
            "markedly_diminished_interest_or_pleasure",
            "significant_weight_change_or_appetite_change",
            "insomnia_or_hypersomnia",
            "psychomotor_agitation_or_retardation",
            "fatigue_or_loss_of_energy",
            "feelings_of_worthlessness_or_guilt",
            "diminished_ability_to_think_or_concentrate",
            "recurrent_thoughts_of_death_or_suicide",
        ]),
        weight: 1.0,
        context_dependent: false,
        developmental_pattern: DevelopmentalPattern::Episodic,
    };

    DiagnosticCriteria {
        condition: Condition::Depression,
        primary_clusters: vec![core],
        exclusion_criteria: strings(&[
            "symptoms_due_to_substance_or_medical_condition",
            "manic_or_hypomanic_episode_ever",
        ]),
        duration_requirement: "at_least_2_weeks".to_string(),
        onset_requirement: "no_specific_childhood_onset_required".to_string(),
        functional_impairment_required: true,
        context_requirements: strings(&["nearly_every_day_during_episode"]),
    }
}

pub(crate) fn anxiety_criteria() -> DiagnosticCriteria {
    let core = SymptomCluster {
        name: "Core Anxiety Symptoms".to_string(),
        symptoms: strings(&[
            "excessive_anxiety_and_worry",
            "difficulty_controlling_worry",
            "restlessness_or_feeling_on_edge",
            "being_easily_fatigued",
            "difficulty_concentrating_mind_going_blank",
            "irritability",
            "muscle_tension",
            "sleep_disturbance",
        ]),
        weight: 1.0,
        context_dependent: false,
        developmental_pattern: DevelopmentalPattern::Chronic,
    };

    DiagnosticCriteria {
        condition: Condition::Anxiety,
        primary_clusters: vec![core],
        exclusion_criteria: strings(&[
            "anxiety_due_to_substance_or_medical_condition",
            "anxiety_better_explained_by_another_anxiety_disorder",
        ]),
        duration_requirement: "at_least_6_months".to_string(),
        onset_requirement: "no_specific_childhood_onset_required".to_string(),
        functional_impairment_required: true,
        context_requirements: strings(&["more_days_than_not"]),
    }
}
