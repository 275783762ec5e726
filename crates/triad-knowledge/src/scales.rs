use serde::Serialize;
use ts_rs::TS;

use triad_core::models::scales::ScaleKind;

/// A labeled severity band over an inclusive total range.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct SeverityBand {
    pub label: String,
    pub min: u8,
    pub max: u8,
}

/// Metadata for one validated screening scale.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct ScaleInfo {
    pub kind: ScaleKind,
    pub name: String,
    pub purpose: String,
    pub bands: Vec<SeverityBand>,
    /// Total at or above which the screen is considered positive.
    pub clinical_cutoff: Option<u8>,
    pub interpretation: Vec<String>,
}

/// Metadata for a structured diagnostic interview (not a scored scale).
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct InterviewInfo {
    pub name: String,
    pub purpose: String,
    pub structure: Vec<String>,
    pub clinical_note: String,
}

fn band(label: &str, min: u8, max: u8) -> SeverityBand {
    SeverityBand {
        label: label.to_string(),
        min,
        max,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn validated_scales() -> [ScaleInfo; 3] {
    [
        ScaleInfo {
            kind: ScaleKind::Asrs,
            name: "Adult ADHD Self-Report Scale".to_string(),
            purpose: "ADHD symptom screening in adults".to_string(),
            bands: Vec::new(),
            clinical_cutoff: None,
            interpretation: strings(&[
                "Positive screen is NOT a diagnosis",
                "Requires clinical interview to confirm DSM-5-TR criteria",
                "Must assess childhood onset and current impairment",
                "Consider differential diagnoses",
            ]),
        },
        ScaleInfo {
            kind: ScaleKind::Phq9,
            name: "Patient Health Questionnaire-9".to_string(),
            purpose: "Depression severity screening".to_string(),
            bands: vec![
                band("minimal", 0, 4),
                band("mild", 5, 9),
                band("moderate", 10, 14),
                band("moderately_severe", 15, 19),
                band("severe", 20, 27),
            ],
            clinical_cutoff: Some(10),
            interpretation: strings(&[
                "Score >=10 has 88% sensitivity for major depression",
                "Item 9 (suicidal ideation) requires immediate clinical attention",
                "Can track treatment response over time",
                "2-3 point change is clinically meaningful",
            ]),
        },
        ScaleInfo {
            kind: ScaleKind::Gad7,
            name: "Generalized Anxiety Disorder-7".to_string(),
            purpose: "Anxiety severity screening".to_string(),
            bands: vec![
                band("minimal", 0, 4),
                band("mild", 5, 9),
                band("moderate", 10, 14),
                band("severe", 15, 21),
            ],
            clinical_cutoff: Some(10),
            interpretation: strings(&[
                "Score >=10 has 89% sensitivity for GAD",
                "Also sensitive to panic, social anxiety, PTSD",
                "Can track treatment response",
                "2 point change is minimally clinically important",
            ]),
        },
    ]
}

pub(crate) fn diagnostic_interview() -> InterviewInfo {
    InterviewInfo {
        name: "Diagnostic Interview for ADHD in Adults (DIVA-5)".to_string(),
        purpose: "Structured diagnostic interview for ADHD".to_string(),
        structure: strings(&[
            "18 DSM criteria assessed for ages 5-12 (childhood symptoms)",
            "18 DSM criteria for current presentation",
            "Concrete behavioral examples for each criterion",
        ]),
        clinical_note: "Gold standard for ADHD diagnosis; requires trained clinician".to_string(),
    }
}
