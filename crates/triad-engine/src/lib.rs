//! triad-engine
//!
//! The diagnostic reasoning pipeline: five evidence evaluators, the
//! differential rule engine, and the aggregator that ranks per-condition
//! evidence into a screening report. Every component is a pure function of
//! its inputs — no I/O, no state across runs, no hidden ordering.

pub mod aggregator;
pub mod evaluators;
pub mod pipeline;
pub mod render;
pub mod rules;
pub mod thresholds;
