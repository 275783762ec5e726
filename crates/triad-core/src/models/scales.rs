use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The three validated screening scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScaleKind {
    /// Adult ADHD Self-Report Scale, 18 items, total 0–72.
    Asrs,
    /// Patient Health Questionnaire-9, total 0–27.
    Phq9,
    /// Generalized Anxiety Disorder-7, total 0–21.
    Gad7,
}

impl ScaleKind {
    pub fn max_total(&self) -> u8 {
        match self {
            ScaleKind::Asrs => 72,
            ScaleKind::Phq9 => 27,
            ScaleKind::Gad7 => 21,
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            ScaleKind::Asrs => "ASRS v1.1",
            ScaleKind::Phq9 => "PHQ-9",
            ScaleKind::Gad7 => "GAD-7",
        }
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// The three scale totals for one assessment run.
///
/// Construction validates every total against its scale range, so downstream
/// arithmetic (score fractions, confidence weighting) can never exceed 1.0.
/// Deserialization goes through the same validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(try_from = "RawScaleScores")]
#[ts(export)]
pub struct ScaleScores {
    asrs_total: u8,
    phq9_total: u8,
    gad7_total: u8,
}

impl ScaleScores {
    pub fn new(asrs_total: i32, phq9_total: i32, gad7_total: i32) -> Result<Self, CoreError> {
        let checked = [
            (ScaleKind::Asrs, asrs_total),
            (ScaleKind::Phq9, phq9_total),
            (ScaleKind::Gad7, gad7_total),
        ];
        for (scale, value) in checked {
            if value < 0 || value > i32::from(scale.max_total()) {
                return Err(CoreError::ScaleOutOfRange { scale, value });
            }
        }
        Ok(Self {
            asrs_total: asrs_total as u8,
            phq9_total: phq9_total as u8,
            gad7_total: gad7_total as u8,
        })
    }

    pub fn asrs(&self) -> u8 {
        self.asrs_total
    }

    pub fn phq9(&self) -> u8 {
        self.phq9_total
    }

    pub fn gad7(&self) -> u8 {
        self.gad7_total
    }

    pub fn total(&self, kind: ScaleKind) -> u8 {
        match kind {
            ScaleKind::Asrs => self.asrs_total,
            ScaleKind::Phq9 => self.phq9_total,
            ScaleKind::Gad7 => self.gad7_total,
        }
    }

    /// Total as a fraction of the scale maximum, in [0, 1].
    pub fn fraction(&self, kind: ScaleKind) -> f64 {
        f64::from(self.total(kind)) / f64::from(kind.max_total())
    }
}

#[derive(Deserialize)]
struct RawScaleScores {
    asrs_total: i32,
    phq9_total: i32,
    gad7_total: i32,
}

impl TryFrom<RawScaleScores> for ScaleScores {
    type Error = CoreError;

    fn try_from(raw: RawScaleScores) -> Result<Self, Self::Error> {
        ScaleScores::new(raw.asrs_total, raw.phq9_total, raw.gad7_total)
    }
}
