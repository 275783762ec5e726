use serde::Serialize;
use ts_rs::TS;

/// Clinical observations that require special attention during review.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct RedFlags {
    pub immediate_risk: Vec<String>,
    pub adhd_misdiagnosis_risk: Vec<String>,
    pub depression_misdiagnosis_risk: Vec<String>,
    pub requires_specialist_referral: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn clinical_red_flags() -> RedFlags {
    RedFlags {
        immediate_risk: strings(&[
            "Suicidal ideation or plans (PHQ-9 item 9 score > 0)",
            "Self-harm behaviors or intent",
            "Severe functional impairment preventing basic self-care",
            "Psychotic symptoms",
            "Substance abuse with severe impairment",
        ]),
        adhd_misdiagnosis_risk: strings(&[
            "No clear childhood history of symptoms",
            "Symptoms only in one context (e.g., only at work)",
            "Recent onset coinciding with mood or life stress",
            "Better explained by anxiety or depression",
            "Adult-onset attention problems without childhood pattern",
        ]),
        depression_misdiagnosis_risk: strings(&[
            "Lifelong pattern misattributed to recent depression",
            "Chronic dysthymia mistaken for ADHD-related low mood",
            "Lack of anhedonia or depressed mood",
            "Attention problems present even when mood is good",
        ]),
        requires_specialist_referral: strings(&[
            "Bipolar disorder suspected",
            "Complex trauma history",
            "Autism spectrum considerations",
            "Learning disabilities",
            "Substance use disorders",
            "Personality disorder features",
        ]),
    }
}
