use super::aggregator::{aggregate, CompositeScore};
use super::inputs::{MetricKind, RawInputs, WeightConfig};
use super::normalizer::{normalize_with, MetricPolicy, MetricSet};
use super::recommendations::{recommend, Recommendation};
use super::report::EpsReport;
use serde::Serialize;
use tracing::debug;

/// Result of running the full pipeline over one snapshot of a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub inputs: RawInputs,
    pub weights: WeightConfig,
    pub metrics: MetricSet,
    pub score: CompositeScore,
    pub recommendation: Recommendation,
}

impl Evaluation {
    pub fn report(&self) -> EpsReport {
        EpsReport::new(&self.metrics, &self.weights, self.score, &self.recommendation)
    }
}

/// Inputs and weights held for one user between recomputations.
///
/// Nothing is cached: every call to [`ScoringSession::evaluate`] reads the
/// current values and recomputes from scratch.
#[derive(Debug, Clone, Default)]
pub struct ScoringSession {
    inputs: RawInputs,
    weights: WeightConfig,
    policy: MetricPolicy,
}

impl ScoringSession {
    pub fn new(inputs: RawInputs, weights: WeightConfig) -> Self {
        Self {
            inputs,
            weights,
            policy: MetricPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: MetricPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn inputs(&self) -> &RawInputs {
        &self.inputs
    }

    pub fn weights(&self) -> &WeightConfig {
        &self.weights
    }

    pub fn policy(&self) -> MetricPolicy {
        self.policy
    }

    /// Replaces every counter at once, as a form submission does.
    pub fn submit_inputs(&mut self, inputs: RawInputs) {
        debug!(?inputs, "session inputs replaced");
        self.inputs = inputs;
    }

    pub fn set_weight(&mut self, kind: MetricKind, weight: u32) {
        debug!(?kind, weight, "session weight adjusted");
        self.weights.set(kind, weight);
    }

    pub fn set_weights(&mut self, weights: WeightConfig) {
        self.weights = weights;
    }

    pub fn evaluate(&self) -> Evaluation {
        let metrics = normalize_with(&self.inputs, self.policy);
        let score = aggregate(&metrics, &self.weights);
        let recommendation = recommend(&metrics, score);

        debug!(
            score = score.value(),
            severity = recommendation.severity.label(),
            advisories = recommendation.advisories.len(),
            "session evaluated"
        );

        Evaluation {
            inputs: self.inputs,
            weights: self.weights,
            metrics,
            score,
            recommendation,
        }
    }
}
