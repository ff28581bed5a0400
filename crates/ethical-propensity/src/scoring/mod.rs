//! Normalization, aggregation, and recommendation rules for the EPS.

mod aggregator;
mod inputs;
mod normalizer;
mod recommendations;
pub mod report;
mod session;

pub use aggregator::{aggregate, CompositeScore, GaugeBand};
pub use inputs::{MetricKind, RawInputs, WeightConfig, WeightError};
pub use normalizer::{normalize, normalize_with, MetricPolicy, MetricSet};
pub use recommendations::{recommend, Advisory, Recommendation, Severity};
pub use report::EpsReport;
pub use session::{Evaluation, ScoringSession};
