use super::inputs::{MetricKind, WeightConfig};
use super::normalizer::MetricSet;
use super::recommendations::Severity;
use serde::{Deserialize, Serialize};

/// Colored segment of the 0-100 gauge the score is displayed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GaugeBand {
    Red,
    Yellow,
    Green,
}

impl GaugeBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }
}

/// Weighted mean of the six metrics.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompositeScore(pub f64);

impl CompositeScore {
    pub const fn value(self) -> f64 {
        self.0
    }

    pub fn gauge_band(self) -> GaugeBand {
        if self.0 < Severity::CRITICAL_BELOW {
            GaugeBand::Red
        } else if self.0 < Severity::STRONG_FROM {
            GaugeBand::Yellow
        } else {
            GaugeBand::Green
        }
    }
}

/// Combines the metrics into a single score.
///
/// The division by the weight sum normalizes the weights, so they need not
/// add up to anything in particular. When every weight is zero each metric
/// counts equally and the result is the plain arithmetic mean.
pub fn aggregate(metrics: &MetricSet, weights: &WeightConfig) -> CompositeScore {
    let weights = if weights.total() == 0 {
        WeightConfig::uniform(1)
    } else {
        *weights
    };

    // u64 -> f64 is exact for any sum of six u32 weights.
    let weight_sum = weights.total() as f64;
    let weighted: f64 = MetricKind::ALL
        .iter()
        .map(|kind| metrics.get(*kind) * f64::from(weights.get(*kind)))
        .sum();

    CompositeScore(weighted / weight_sum)
}
