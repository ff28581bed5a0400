//! Ethical Propensity Score (EPS) engine for AI hiring pipelines.
//!
//! Raw audit counters are normalized into six percentage metrics, combined
//! under user-adjustable weights into a composite score, and evaluated
//! against a fixed threshold rule set to produce recommendations.

pub mod config;
pub mod error;
pub mod intake;
pub mod scoring;
pub mod telemetry;
