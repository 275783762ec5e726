use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The three screening hypotheses, in fixed engine order.
///
/// The order matters: the rule engine always emits evidence as
/// ADHD, depression, anxiety, and ranking ties resolve in this order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Condition {
    Adhd,
    Depression,
    Anxiety,
}

impl Condition {
    pub const ALL: [Condition; 3] = [Condition::Adhd, Condition::Depression, Condition::Anxiety];

    /// Full clinical name used in report prose.
    pub fn clinical_name(&self) -> &'static str {
        match self {
            Condition::Adhd => "ADHD",
            Condition::Depression => "Major Depressive Disorder",
            Condition::Anxiety => "Generalized Anxiety Disorder",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.clinical_name())
    }
}

impl FromStr for Condition {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "adhd" | "ADHD" => Ok(Condition::Adhd),
            "depression" | "Major Depressive Disorder" => Ok(Condition::Depression),
            "anxiety" | "Generalized Anxiety Disorder" => Ok(Condition::Anxiety),
            other => Err(CoreError::UnknownCondition(other.to_string())),
        }
    }
}
