use clap::Args;
use ethical_propensity::config::AppConfig;
use ethical_propensity::error::AppError;
use ethical_propensity::intake::{validate_inputs, RawInputsImporter};
use ethical_propensity::scoring::{
    EpsReport, MetricKind, MetricPolicy, RawInputs, ScoringSession, WeightConfig,
};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// CSV file of `field,value` rows with the audit counters
    #[arg(long)]
    pub(crate) inputs_csv: Option<PathBuf>,
    /// Start from the prefilled sample counters instead of empty ones
    #[arg(long, conflicts_with = "inputs_csv")]
    pub(crate) sample: bool,
    #[command(flatten)]
    pub(crate) counters: CounterArgs,
    #[command(flatten)]
    pub(crate) weights: WeightArgs,
    /// Clamp every metric into 0-100 before scoring
    #[arg(long)]
    pub(crate) clamp_metrics: bool,
    /// Print the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

/// Individual counter overrides, applied after the CSV or sample values.
#[derive(Args, Debug, Default)]
pub(crate) struct CounterArgs {
    #[arg(long)]
    pub(crate) total_decisions: Option<f64>,
    #[arg(long)]
    pub(crate) bias_complaints: Option<f64>,
    #[arg(long)]
    pub(crate) explainable_ai_decisions: Option<f64>,
    #[arg(long)]
    pub(crate) human_reviewed_decisions: Option<f64>,
    #[arg(long)]
    pub(crate) total_data_transactions: Option<f64>,
    #[arg(long)]
    pub(crate) policy_violations: Option<f64>,
    #[arg(long)]
    pub(crate) diverse_hires: Option<f64>,
    #[arg(long)]
    pub(crate) total_hires: Option<f64>,
    #[arg(long)]
    pub(crate) positive_feedback: Option<f64>,
    #[arg(long)]
    pub(crate) total_feedback: Option<f64>,
}

impl CounterArgs {
    fn apply(&self, inputs: &mut RawInputs) {
        let overrides = [
            (self.total_decisions, &mut inputs.total_decisions),
            (self.bias_complaints, &mut inputs.bias_complaints),
            (
                self.explainable_ai_decisions,
                &mut inputs.explainable_ai_decisions,
            ),
            (
                self.human_reviewed_decisions,
                &mut inputs.human_reviewed_decisions,
            ),
            (
                self.total_data_transactions,
                &mut inputs.total_data_transactions,
            ),
            (self.policy_violations, &mut inputs.policy_violations),
            (self.diverse_hires, &mut inputs.diverse_hires),
            (self.total_hires, &mut inputs.total_hires),
            (self.positive_feedback, &mut inputs.positive_feedback),
            (self.total_feedback, &mut inputs.total_feedback),
        ];

        for (value, slot) in overrides {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

/// Weight overrides on top of the defaults (0-30 each).
#[derive(Args, Debug, Default)]
pub(crate) struct WeightArgs {
    #[arg(long)]
    pub(crate) bias_weight: Option<u32>,
    #[arg(long)]
    pub(crate) transparency_weight: Option<u32>,
    #[arg(long)]
    pub(crate) accountability_weight: Option<u32>,
    #[arg(long)]
    pub(crate) privacy_weight: Option<u32>,
    #[arg(long)]
    pub(crate) fairness_weight: Option<u32>,
    #[arg(long)]
    pub(crate) sentiment_weight: Option<u32>,
}

impl WeightArgs {
    fn resolve(&self) -> WeightConfig {
        let mut weights = WeightConfig::default();
        let overrides = [
            (MetricKind::BiasFreeIndex, self.bias_weight),
            (MetricKind::Transparency, self.transparency_weight),
            (MetricKind::Accountability, self.accountability_weight),
            (MetricKind::PrivacyCompliance, self.privacy_weight),
            (MetricKind::Fairness, self.fairness_weight),
            (MetricKind::Sentiment, self.sentiment_weight),
        ];
        for (kind, value) in overrides {
            if let Some(value) = value {
                weights.set(kind, value);
            }
        }
        weights
    }
}

pub(crate) fn build_session(
    args: &ScoreArgs,
    config: &AppConfig,
) -> Result<ScoringSession, AppError> {
    let mut inputs = match &args.inputs_csv {
        Some(path) => RawInputsImporter::from_path(path)?,
        None if args.sample => RawInputs::sample(),
        None => RawInputs::default(),
    };
    args.counters.apply(&mut inputs);
    validate_inputs(&inputs)?;

    let weights = args.weights.resolve().validated()?;
    let policy = MetricPolicy {
        clamp_to_percent: args.clamp_metrics || config.scoring.clamp_metrics,
    };

    Ok(ScoringSession::new(inputs, weights).with_policy(policy))
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let session = build_session(&args, &config)?;
    let report = session.evaluate().report();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(&report, session.policy());
    }

    Ok(())
}

pub(crate) fn run_weights() -> Result<(), AppError> {
    let defaults = WeightConfig::default();
    println!(
        "Metric weights (range {}-{})",
        WeightConfig::MIN,
        WeightConfig::MAX
    );
    for kind in MetricKind::ALL {
        println!("- {}: {}", kind.weight_label(), defaults.get(kind));
    }
    Ok(())
}

fn render_report(report: &EpsReport, policy: MetricPolicy) {
    println!("Ethical Propensity Score (EPS)");
    if policy.clamp_to_percent {
        println!("Metrics clamped to 0-100");
    }

    println!("\nAI hiring metrics overview");
    for entry in &report.metrics {
        println!("- {}: {} (weight {})", entry.label, entry.display, entry.weight);
    }

    println!(
        "\nEPS: {} [{}]",
        report.composite_display,
        report.gauge_band.label()
    );

    println!("\n[{}] {}", report.severity.label, report.severity.message);

    if report.advisories.is_empty() {
        println!("\nMetric-specific suggestions: none");
    } else {
        println!("\nMetric-specific suggestions");
        for advisory in &report.advisories {
            println!(
                "- {} ({:.2} < {:.0}): {}",
                advisory.title, advisory.observed, advisory.threshold, advisory.guidance
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethical_propensity::config::{AppEnvironment, ScoringConfig, ServerConfig, TelemetryConfig};
    use ethical_propensity::scoring::Severity;

    fn config(clamp_metrics: bool) -> AppConfig {
        AppConfig {
            environment: AppEnvironment::Test,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            telemetry: TelemetryConfig {
                log_level: "info".to_string(),
            },
            scoring: ScoringConfig { clamp_metrics },
        }
    }

    #[test]
    fn sample_with_overrides_builds_session() {
        let args = ScoreArgs {
            sample: true,
            counters: CounterArgs {
                human_reviewed_decisions: Some(80.0),
                ..CounterArgs::default()
            },
            weights: WeightArgs {
                fairness_weight: Some(30),
                ..WeightArgs::default()
            },
            ..ScoreArgs::default()
        };

        let session = build_session(&args, &config(false)).expect("session builds");
        assert_eq!(session.inputs().human_reviewed_decisions, 80.0);
        assert_eq!(session.inputs().total_hires, 40.0);
        assert_eq!(session.weights().fairness, 30);
        assert!(!session.policy().clamp_to_percent);

        let evaluation = session.evaluate();
        assert!(evaluation.recommendation.advisories.is_empty());
        assert_eq!(evaluation.recommendation.severity, Severity::Strong);
    }

    #[test]
    fn out_of_range_weight_is_rejected() {
        let args = ScoreArgs {
            weights: WeightArgs {
                privacy_weight: Some(45),
                ..WeightArgs::default()
            },
            ..ScoreArgs::default()
        };

        let error = build_session(&args, &config(false)).expect_err("weight rejected");
        assert!(matches!(error, AppError::Weights(_)));
    }

    #[test]
    fn negative_counter_is_rejected() {
        let args = ScoreArgs {
            counters: CounterArgs {
                policy_violations: Some(-1.0),
                ..CounterArgs::default()
            },
            ..ScoreArgs::default()
        };

        let error = build_session(&args, &config(false)).expect_err("counter rejected");
        assert!(matches!(error, AppError::Intake(_)));
    }

    #[test]
    fn configured_clamping_applies_without_flag() {
        let session =
            build_session(&ScoreArgs::default(), &config(true)).expect("session builds");
        assert!(session.policy().clamp_to_percent);
    }
}
