use super::inputs::{MetricKind, RawInputs};
use serde::{Deserialize, Serialize};

/// Controls post-processing of normalized metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricPolicy {
    /// Clamp every metric into [0, 100]. Off by default so out-of-range
    /// counters stay visible.
    pub clamp_to_percent: bool,
}

/// Six percentage metrics derived from [`RawInputs`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSet {
    pub bias_free_index: f64,
    pub transparency: f64,
    pub accountability: f64,
    pub privacy_compliance: f64,
    pub fairness: f64,
    pub sentiment: f64,
}

impl MetricSet {
    pub fn uniform(value: f64) -> Self {
        Self {
            bias_free_index: value,
            transparency: value,
            accountability: value,
            privacy_compliance: value,
            fairness: value,
            sentiment: value,
        }
    }

    pub fn get(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::BiasFreeIndex => self.bias_free_index,
            MetricKind::Transparency => self.transparency,
            MetricKind::Accountability => self.accountability,
            MetricKind::PrivacyCompliance => self.privacy_compliance,
            MetricKind::Fairness => self.fairness,
            MetricKind::Sentiment => self.sentiment,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (MetricKind, f64)> + '_ {
        MetricKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.get(kind)))
    }

    pub fn min(&self) -> f64 {
        self.iter().map(|(_, value)| value).fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.iter()
            .map(|(_, value)| value)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn mean(&self) -> f64 {
        self.iter().map(|(_, value)| value).sum::<f64>() / MetricKind::ALL.len() as f64
    }

    pub fn clamped(&self) -> Self {
        let clamp = |value: f64| value.clamp(0.0, 100.0);
        Self {
            bias_free_index: clamp(self.bias_free_index),
            transparency: clamp(self.transparency),
            accountability: clamp(self.accountability),
            privacy_compliance: clamp(self.privacy_compliance),
            fairness: clamp(self.fairness),
            sentiment: clamp(self.sentiment),
        }
    }
}

/// Normalizes raw counters without clamping.
pub fn normalize(raw: &RawInputs) -> MetricSet {
    normalize_with(raw, MetricPolicy::default())
}

pub fn normalize_with(raw: &RawInputs, policy: MetricPolicy) -> MetricSet {
    let decisions = floor_denominator(raw.total_decisions);
    let transactions = floor_denominator(raw.total_data_transactions);
    let hires = floor_denominator(raw.total_hires);
    let feedback = floor_denominator(raw.total_feedback);

    let metrics = MetricSet {
        // Inverted: fewer complaints means a higher index.
        bias_free_index: 100.0 - percent(raw.bias_complaints, decisions),
        transparency: percent(raw.explainable_ai_decisions, decisions),
        accountability: percent(raw.human_reviewed_decisions, decisions),
        privacy_compliance: percent(transactions - raw.policy_violations, transactions),
        fairness: percent(raw.diverse_hires, hires),
        sentiment: percent(raw.positive_feedback, feedback),
    };

    if policy.clamp_to_percent {
        metrics.clamped()
    } else {
        metrics
    }
}

fn floor_denominator(value: f64) -> f64 {
    if value < 1.0 {
        1.0
    } else {
        value
    }
}

fn percent(numerator: f64, denominator: f64) -> f64 {
    (numerator / denominator) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> RawInputs {
        RawInputs::sample()
    }

    #[test]
    fn sample_inputs_produce_expected_metrics() {
        let metrics = normalize(&inputs());
        assert_eq!(metrics.bias_free_index, 95.0);
        assert_eq!(metrics.transparency, 60.0);
        assert_eq!(metrics.accountability, 30.0);
        assert!((metrics.privacy_compliance - 99.8).abs() < 1e-9);
        assert_eq!(metrics.fairness, 50.0);
        assert_eq!(metrics.sentiment, 80.0);
    }

    #[test]
    fn zero_denominators_behave_like_one() {
        let raw = RawInputs {
            total_decisions: 0.0,
            bias_complaints: 0.0,
            explainable_ai_decisions: 1.0,
            human_reviewed_decisions: 1.0,
            total_data_transactions: 0.0,
            policy_violations: 0.0,
            diverse_hires: 1.0,
            total_hires: 0.0,
            positive_feedback: 1.0,
            total_feedback: 0.0,
        };
        let floored = RawInputs {
            total_decisions: 1.0,
            total_data_transactions: 1.0,
            total_hires: 1.0,
            total_feedback: 1.0,
            ..raw
        };

        assert_eq!(normalize(&raw), normalize(&floored));
        assert_eq!(normalize(&raw), MetricSet::uniform(100.0));
    }

    #[test]
    fn excess_complaints_pass_through_unclamped() {
        let raw = RawInputs {
            total_decisions: 10.0,
            bias_complaints: 20.0,
            diverse_hires: 30.0,
            total_hires: 10.0,
            ..RawInputs::default()
        };

        let metrics = normalize(&raw);
        assert_eq!(metrics.bias_free_index, -100.0);
        assert_eq!(metrics.fairness, 300.0);
    }

    #[test]
    fn clamping_policy_bounds_out_of_range_metrics() {
        let raw = RawInputs {
            total_decisions: 10.0,
            bias_complaints: 20.0,
            diverse_hires: 30.0,
            total_hires: 10.0,
            ..RawInputs::default()
        };

        let metrics = normalize_with(
            &raw,
            MetricPolicy {
                clamp_to_percent: true,
            },
        );
        assert_eq!(metrics.bias_free_index, 0.0);
        assert_eq!(metrics.fairness, 100.0);
    }

    #[test]
    fn summary_statistics_cover_all_metrics() {
        let metrics = normalize(&inputs());
        assert_eq!(metrics.min(), 30.0);
        assert!((metrics.max() - 99.8).abs() < 1e-9);
        assert_eq!(metrics.iter().count(), 6);
    }
}
