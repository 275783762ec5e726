//! triad-core
//!
//! Pure domain types for the differential screening pipeline.
//! No clinical logic lives here — this is the shared vocabulary of the
//! triad system: responses, scale totals, evidence, and the final report.

pub mod error;
pub mod models;
