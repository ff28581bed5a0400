use serde::{Deserialize, Serialize};

/// The six sub-metrics that make up the composite score, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    BiasFreeIndex,
    Transparency,
    Accountability,
    PrivacyCompliance,
    Fairness,
    Sentiment,
}

impl MetricKind {
    pub const ALL: [MetricKind; 6] = [
        MetricKind::BiasFreeIndex,
        MetricKind::Transparency,
        MetricKind::Accountability,
        MetricKind::PrivacyCompliance,
        MetricKind::Fairness,
        MetricKind::Sentiment,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::BiasFreeIndex => "Bias Index (%)",
            Self::Transparency => "Transparency (%)",
            Self::Accountability => "Accountability (%)",
            Self::PrivacyCompliance => "Privacy (%)",
            Self::Fairness => "Fairness (%)",
            Self::Sentiment => "Sentiment (%)",
        }
    }

    pub const fn weight_label(self) -> &'static str {
        match self {
            Self::BiasFreeIndex => "Bias Index Weight",
            Self::Transparency => "Transparency Weight",
            Self::Accountability => "Accountability Weight",
            Self::PrivacyCompliance => "Privacy Weight",
            Self::Fairness => "Fairness Weight",
            Self::Sentiment => "Sentiment Weight",
        }
    }
}

/// Audit counters entered for one hiring pipeline.
///
/// Counters are trusted as entered: numerators may exceed their
/// denominators and nothing here checks the sign. Denominators below 1 are
/// floored to 1 during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawInputs {
    pub total_decisions: f64,
    pub bias_complaints: f64,
    pub explainable_ai_decisions: f64,
    pub human_reviewed_decisions: f64,
    pub total_data_transactions: f64,
    pub policy_violations: f64,
    pub diverse_hires: f64,
    pub total_hires: f64,
    pub positive_feedback: f64,
    pub total_feedback: f64,
}

impl Default for RawInputs {
    /// Values read before anything has been submitted: every total is 1 and
    /// every numerator is 0.
    fn default() -> Self {
        Self {
            total_decisions: 1.0,
            bias_complaints: 0.0,
            explainable_ai_decisions: 0.0,
            human_reviewed_decisions: 0.0,
            total_data_transactions: 1.0,
            policy_violations: 0.0,
            diverse_hires: 0.0,
            total_hires: 1.0,
            positive_feedback: 0.0,
            total_feedback: 1.0,
        }
    }
}

impl RawInputs {
    /// Prefilled form values used by the CLI demo and documentation.
    pub fn sample() -> Self {
        Self {
            total_decisions: 100.0,
            bias_complaints: 5.0,
            explainable_ai_decisions: 60.0,
            human_reviewed_decisions: 30.0,
            total_data_transactions: 500.0,
            policy_violations: 1.0,
            diverse_hires: 20.0,
            total_hires: 40.0,
            positive_feedback: 80.0,
            total_feedback: 100.0,
        }
    }

    /// Field names paired with their current values, in form order.
    pub fn fields(&self) -> [(&'static str, f64); 10] {
        [
            ("total_decisions", self.total_decisions),
            ("bias_complaints", self.bias_complaints),
            ("explainable_ai_decisions", self.explainable_ai_decisions),
            ("human_reviewed_decisions", self.human_reviewed_decisions),
            ("total_data_transactions", self.total_data_transactions),
            ("policy_violations", self.policy_violations),
            ("diverse_hires", self.diverse_hires),
            ("total_hires", self.total_hires),
            ("positive_feedback", self.positive_feedback),
            ("total_feedback", self.total_feedback),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeightError {
    #[error("{label} must be between {min} and {max}, got {value}")]
    OutOfRange {
        label: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
}

/// Relative importance of each metric in the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightConfig {
    pub bias: u32,
    pub transparency: u32,
    pub accountability: u32,
    pub privacy: u32,
    pub fairness: u32,
    pub sentiment: u32,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            bias: 15,
            transparency: 10,
            accountability: 10,
            privacy: 10,
            fairness: 15,
            sentiment: 10,
        }
    }
}

impl WeightConfig {
    pub const MIN: u32 = 0;
    pub const MAX: u32 = 30;

    pub fn uniform(weight: u32) -> Self {
        Self {
            bias: weight,
            transparency: weight,
            accountability: weight,
            privacy: weight,
            fairness: weight,
            sentiment: weight,
        }
    }

    pub fn get(&self, kind: MetricKind) -> u32 {
        match kind {
            MetricKind::BiasFreeIndex => self.bias,
            MetricKind::Transparency => self.transparency,
            MetricKind::Accountability => self.accountability,
            MetricKind::PrivacyCompliance => self.privacy,
            MetricKind::Fairness => self.fairness,
            MetricKind::Sentiment => self.sentiment,
        }
    }

    pub fn set(&mut self, kind: MetricKind, weight: u32) {
        let slot = match kind {
            MetricKind::BiasFreeIndex => &mut self.bias,
            MetricKind::Transparency => &mut self.transparency,
            MetricKind::Accountability => &mut self.accountability,
            MetricKind::PrivacyCompliance => &mut self.privacy,
            MetricKind::Fairness => &mut self.fairness,
            MetricKind::Sentiment => &mut self.sentiment,
        };
        *slot = weight;
    }

    /// Sum of all six weights, widened so any `u32` weights fit.
    pub fn total(&self) -> u64 {
        MetricKind::ALL
            .iter()
            .map(|kind| u64::from(self.get(*kind)))
            .sum()
    }

    /// Rejects weights outside the slider range. The scoring core itself
    /// accepts any weight; hosts call this when they want to enforce it.
    pub fn validated(self) -> Result<Self, WeightError> {
        for kind in MetricKind::ALL {
            let value = self.get(kind);
            if !(Self::MIN..=Self::MAX).contains(&value) {
                return Err(WeightError::OutOfRange {
                    label: kind.weight_label(),
                    value,
                    min: Self::MIN,
                    max: Self::MAX,
                });
            }
        }
        Ok(self)
    }
}
