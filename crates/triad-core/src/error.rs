use thiserror::Error;

use crate::models::scales::ScaleKind;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{scale} total {value} is outside range [0, {max}]", max = .scale.max_total())]
    ScaleOutOfRange { scale: ScaleKind, value: i32 },

    #[error("unknown condition: {0}")]
    UnknownCondition(String),
}
