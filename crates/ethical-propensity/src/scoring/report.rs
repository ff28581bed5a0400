use super::aggregator::{CompositeScore, GaugeBand};
use super::inputs::{MetricKind, WeightConfig};
use super::normalizer::MetricSet;
use super::recommendations::{Advisory, Recommendation, Severity};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct MetricEntry {
    pub metric: MetricKind,
    pub label: &'static str,
    pub value: f64,
    pub display: String,
    pub weight: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeverityView {
    pub severity: Severity,
    pub label: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryView {
    pub advisory: Advisory,
    pub metric: MetricKind,
    pub title: &'static str,
    pub guidance: &'static str,
    pub threshold: f64,
    pub observed: f64,
}

/// Everything the presentation layer needs from one evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct EpsReport {
    pub metrics: Vec<MetricEntry>,
    pub composite_score: f64,
    pub composite_display: String,
    pub gauge_band: GaugeBand,
    pub severity: SeverityView,
    pub advisories: Vec<AdvisoryView>,
}

impl EpsReport {
    pub fn new(
        metrics: &MetricSet,
        weights: &WeightConfig,
        score: CompositeScore,
        recommendation: &Recommendation,
    ) -> Self {
        let entries = metrics
            .iter()
            .map(|(kind, value)| MetricEntry {
                metric: kind,
                label: kind.label(),
                value,
                display: format!("{value:.2}"),
                weight: weights.get(kind),
            })
            .collect();

        let advisories = recommendation
            .advisories
            .iter()
            .map(|advisory| AdvisoryView {
                advisory: *advisory,
                metric: advisory.metric(),
                title: advisory.title(),
                guidance: advisory.guidance(),
                threshold: advisory.threshold(),
                observed: metrics.get(advisory.metric()),
            })
            .collect();

        let severity = recommendation.severity;

        Self {
            metrics: entries,
            composite_score: score.value(),
            composite_display: format!("{:.2} / 100", score.value()),
            gauge_band: score.gauge_band(),
            severity: SeverityView {
                severity,
                label: severity.label(),
                message: severity.message(),
            },
            advisories,
        }
    }
}
