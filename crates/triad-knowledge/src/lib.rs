//! triad-knowledge
//!
//! Static clinical facts for differential screening across ADHD, major
//! depression, and generalized anxiety: DSM-5-TR-derived criteria, expert
//! differential markers, comorbidity patterns, validated-scale metadata, and
//! clinical red flags. Pure data — built once, read forever, never mutated.

pub mod criteria;
pub mod error;
pub mod markers;
pub mod red_flags;
pub mod scales;

use std::collections::HashSet;
use std::sync::LazyLock;

use triad_core::models::condition::Condition;
use triad_core::models::scales::ScaleKind;

use crate::criteria::DiagnosticCriteria;
use crate::error::KnowledgeError;
use crate::markers::{ComorbidityKind, ComorbidityPattern, DifferentialMarkers};
use crate::red_flags::RedFlags;
use crate::scales::{InterviewInfo, ScaleInfo};

/// Read-only clinical knowledge consulted by the evaluators, rule engine, and
/// report rendering. Immutable after construction, so arbitrarily many
/// concurrent screening runs may read it without coordination.
pub struct KnowledgeBase {
    adhd: DiagnosticCriteria,
    depression: DiagnosticCriteria,
    anxiety: DiagnosticCriteria,
    markers: [DifferentialMarkers; 3],
    comorbidity: [ComorbidityPattern; 4],
    scales: [ScaleInfo; 3],
    interview: InterviewInfo,
    red_flags: RedFlags,
}

static SHARED: LazyLock<KnowledgeBase> = LazyLock::new(KnowledgeBase::new);

impl KnowledgeBase {
    pub fn new() -> Self {
        Self {
            adhd: criteria::adhd_criteria(),
            depression: criteria::depression_criteria(),
            anxiety: criteria::anxiety_criteria(),
            markers: markers::differential_markers(),
            comorbidity: markers::comorbidity_patterns(),
            scales: scales::validated_scales(),
            interview: scales::diagnostic_interview(),
            red_flags: red_flags::clinical_red_flags(),
        }
    }

    /// Process-wide instance, built on first use.
    pub fn shared() -> &'static KnowledgeBase {
        &SHARED
    }

    /// Diagnostic criteria for a condition. Total over the condition enum.
    pub fn criteria(&self, condition: Condition) -> &DiagnosticCriteria {
        match condition {
            Condition::Adhd => &self.adhd,
            Condition::Depression => &self.depression,
            Condition::Anxiety => &self.anxiety,
        }
    }

    /// Expert markers distinguishing an unordered condition pair.
    pub fn differential_markers(
        &self,
        a: Condition,
        b: Condition,
    ) -> Result<&DifferentialMarkers, KnowledgeError> {
        if a == b {
            return Err(KnowledgeError::IdenticalConditions(a));
        }
        self.markers
            .iter()
            .find(|m| (m.pair == (a, b)) || (m.pair == (b, a)))
            .ok_or(KnowledgeError::MissingMarkerPair(a, b))
    }

    pub fn comorbidity_pattern(&self, kind: ComorbidityKind) -> &ComorbidityPattern {
        // Arrays are built in declaration order in `new`.
        let idx = match kind {
            ComorbidityKind::AdhdDepression => 0,
            ComorbidityKind::AdhdAnxiety => 1,
            ComorbidityKind::DepressionAnxiety => 2,
            ComorbidityKind::Triple => 3,
        };
        &self.comorbidity[idx]
    }

    pub fn comorbidity_patterns(&self) -> &[ComorbidityPattern] {
        &self.comorbidity
    }

    pub fn scale_info(&self, kind: ScaleKind) -> &ScaleInfo {
        let idx = match kind {
            ScaleKind::Asrs => 0,
            ScaleKind::Phq9 => 1,
            ScaleKind::Gad7 => 2,
        };
        &self.scales[idx]
    }

    /// DIVA-5 structured-interview metadata (the diagnostic gold standard the
    /// screening report defers to).
    pub fn diagnostic_interview(&self) -> &InterviewInfo {
        &self.interview
    }

    pub fn red_flags(&self) -> &RedFlags {
        &self.red_flags
    }

    /// Check construction invariants: every symptom key unique within its
    /// cluster, every condition pair covered by a marker set, every scale
    /// covered by metadata. The tables are compiled in, so this is exercised
    /// by tests rather than on every construction.
    pub fn validate(&self) -> Result<(), KnowledgeError> {
        for condition in Condition::ALL {
            for cluster in &self.criteria(condition).primary_clusters {
                let mut seen = HashSet::new();
                for key in &cluster.symptoms {
                    if !seen.insert(key.as_str()) {
                        return Err(KnowledgeError::DuplicateSymptomKey {
                            cluster: cluster.name.clone(),
                            key: key.clone(),
                        });
                    }
                }
            }
        }
        for a in Condition::ALL {
            for b in Condition::ALL {
                if a != b {
                    self.differential_markers(a, b)?;
                }
            }
        }
        Ok(())
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}
