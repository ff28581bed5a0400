use super::aggregator::CompositeScore;
use super::inputs::MetricKind;
use super::normalizer::MetricSet;
use serde::{Deserialize, Serialize};

/// Overall verdict derived solely from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Moderate,
    Strong,
}

impl Severity {
    pub const CRITICAL_BELOW: f64 = 40.0;
    pub const STRONG_FROM: f64 = 70.0;

    pub fn for_score(score: CompositeScore) -> Self {
        let value = score.value();
        if value < Self::CRITICAL_BELOW {
            Self::Critical
        } else if value < Self::STRONG_FROM {
            Self::Moderate
        } else {
            Self::Strong
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::Critical => {
                "EPS is critically low. Immediate action required to reduce bias and improve oversight."
            }
            Self::Moderate => {
                "EPS is moderate. Consider additional transparency measures, improved data collection, and deeper audits."
            }
            Self::Strong => {
                "EPS is strong! Continue regular audits and keep refining AI models to maintain high ethical standards."
            }
        }
    }
}

/// Metric-specific suggestion fired when a metric drops below its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    HighBiasRisk,
    LowFairness,
    PrivacyGap,
    AccountabilityShortfall,
    LowTransparency,
    SentimentImprovement,
}

impl Advisory {
    /// Evaluation order, which is also the order advisories are reported in.
    pub const ALL: [Advisory; 6] = [
        Advisory::HighBiasRisk,
        Advisory::LowFairness,
        Advisory::PrivacyGap,
        Advisory::AccountabilityShortfall,
        Advisory::LowTransparency,
        Advisory::SentimentImprovement,
    ];

    pub const fn metric(self) -> MetricKind {
        match self {
            Self::HighBiasRisk => MetricKind::BiasFreeIndex,
            Self::LowFairness => MetricKind::Fairness,
            Self::PrivacyGap => MetricKind::PrivacyCompliance,
            Self::AccountabilityShortfall => MetricKind::Accountability,
            Self::LowTransparency => MetricKind::Transparency,
            Self::SentimentImprovement => MetricKind::Sentiment,
        }
    }

    /// The advisory fires when its metric is strictly below this value.
    pub const fn threshold(self) -> f64 {
        match self {
            Self::HighBiasRisk => 90.0,
            Self::LowFairness => 50.0,
            Self::PrivacyGap => 90.0,
            Self::AccountabilityShortfall => 50.0,
            Self::LowTransparency => 50.0,
            Self::SentimentImprovement => 70.0,
        }
    }

    pub fn applies_to(self, metrics: &MetricSet) -> bool {
        metrics.get(self.metric()) < self.threshold()
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::HighBiasRisk => "High Bias Risk",
            Self::LowFairness => "Low Fairness Index",
            Self::PrivacyGap => "Privacy Gaps",
            Self::AccountabilityShortfall => "Accountability Shortfall",
            Self::LowTransparency => "Low Transparency",
            Self::SentimentImprovement => "Improving Sentiment",
        }
    }

    pub const fn guidance(self) -> &'static str {
        match self {
            Self::HighBiasRisk => {
                "The bias-free score is below 90%. Investigate training data or re-tune AI models to reduce bias complaints."
            }
            Self::LowFairness => {
                "Partner with diverse job boards and community organizations. Ensure job descriptions attract underrepresented groups."
            }
            Self::PrivacyGap => {
                "Conduct a data audit to ensure compliance with GDPR/CCPA. Limit data retention for unselected candidates."
            }
            Self::AccountabilityShortfall => {
                "Increase human-in-the-loop reviews for borderline AI decisions; ensure final hiring decisions involve a person."
            }
            Self::LowTransparency => {
                "Provide clearer explanations to candidates on why they were (or weren't) selected. Implement an 'explainable AI' framework."
            }
            Self::SentimentImprovement => {
                "Collect more feedback from applicants and employees to refine the user experience around AI-driven hiring."
            }
        }
    }
}

/// One severity band plus every advisory that fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub severity: Severity,
    pub advisories: Vec<Advisory>,
}

impl Recommendation {
    pub fn summary(&self) -> String {
        if self.advisories.is_empty() {
            format!("{}: no metric-specific advisories", self.severity.label())
        } else {
            let titles: Vec<&str> = self.advisories.iter().map(|a| a.title()).collect();
            format!("{}: {}", self.severity.label(), titles.join("; "))
        }
    }
}

pub fn recommend(metrics: &MetricSet, score: CompositeScore) -> Recommendation {
    let advisories = Advisory::ALL
        .into_iter()
        .filter(|advisory| advisory.applies_to(metrics))
        .collect();

    Recommendation {
        severity: Severity::for_score(score),
        advisories,
    }
}
