use thiserror::Error;

use triad_core::models::condition::Condition;

#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("no differential markers for a condition against itself: {0}")]
    IdenticalConditions(Condition),

    #[error("no differential markers registered for {0} vs {1}")]
    MissingMarkerPair(Condition, Condition),

    #[error("duplicate symptom key '{key}' in cluster '{cluster}'")]
    DuplicateSymptomKey { cluster: String, key: String },
}
