use ethical_propensity::scoring::{
    aggregate, normalize, recommend, Advisory, CompositeScore, MetricSet, RawInputs, Severity,
    WeightConfig,
};

fn decisions(total: f64, complaints: f64) -> RawInputs {
    RawInputs {
        total_decisions: total,
        bias_complaints: complaints,
        ..RawInputs::sample()
    }
}

#[test]
fn zero_complaints_yield_perfect_bias_index() {
    for total in [0.0, 1.0, 7.0, 100.0, 12_345.0] {
        let metrics = normalize(&decisions(total, 0.0));
        assert_eq!(metrics.bias_free_index, 100.0, "total {total}");
    }
}

#[test]
fn complaints_on_every_decision_yield_zero_bias_index() {
    for total in [1.0, 4.0, 100.0, 12_345.0] {
        let metrics = normalize(&decisions(total, total));
        assert_eq!(metrics.bias_free_index, 0.0, "total {total}");
    }
}

#[test]
fn scenario_five_percent_complaints() {
    let metrics = normalize(&decisions(100.0, 5.0));
    assert_eq!(metrics.bias_free_index, 95.0);
}

#[test]
fn scenario_single_policy_violation() {
    let raw = RawInputs {
        total_data_transactions: 500.0,
        policy_violations: 1.0,
        ..RawInputs::default()
    };
    let metrics = normalize(&raw);
    assert!((metrics.privacy_compliance - 99.8).abs() < 1e-9);
}

#[test]
fn scenario_fairness_at_boundary_does_not_fire() {
    let raw = RawInputs {
        diverse_hires: 20.0,
        total_hires: 40.0,
        ..RawInputs::sample()
    };
    let metrics = normalize(&raw);
    assert_eq!(metrics.fairness, 50.0);

    let score = aggregate(&metrics, &WeightConfig::default());
    let recommendation = recommend(&metrics, score);
    assert!(!recommendation.advisories.contains(&Advisory::LowFairness));
}

#[test]
fn scenario_sentiment_above_boundary_does_not_fire() {
    let raw = RawInputs {
        positive_feedback: 80.0,
        total_feedback: 100.0,
        ..RawInputs::sample()
    };
    let metrics = normalize(&raw);
    assert_eq!(metrics.sentiment, 80.0);

    let score = aggregate(&metrics, &WeightConfig::default());
    let recommendation = recommend(&metrics, score);
    assert!(!recommendation
        .advisories
        .contains(&Advisory::SentimentImprovement));
}

#[test]
fn scenario_perfect_metrics_are_strong_without_advisories() {
    let metrics = MetricSet::uniform(100.0);
    let score = aggregate(&metrics, &WeightConfig::default());
    assert_eq!(score.value(), 100.0);

    let recommendation = recommend(&metrics, score);
    assert_eq!(recommendation.severity, Severity::Strong);
    assert!(recommendation.advisories.is_empty());
}

#[test]
fn scenario_zero_metrics_are_critical_with_every_advisory() {
    let metrics = MetricSet::uniform(0.0);
    let score = aggregate(&metrics, &WeightConfig::default());
    assert_eq!(score.value(), 0.0);

    let recommendation = recommend(&metrics, score);
    assert_eq!(recommendation.severity, Severity::Critical);
    assert_eq!(recommendation.advisories, Advisory::ALL.to_vec());
}

#[test]
fn perfect_inputs_normalize_to_perfect_metrics() {
    let raw = RawInputs {
        total_decisions: 50.0,
        bias_complaints: 0.0,
        explainable_ai_decisions: 50.0,
        human_reviewed_decisions: 50.0,
        total_data_transactions: 10.0,
        policy_violations: 0.0,
        diverse_hires: 8.0,
        total_hires: 8.0,
        positive_feedback: 3.0,
        total_feedback: 3.0,
    };
    assert_eq!(normalize(&raw), MetricSet::uniform(100.0));
}

#[test]
fn every_score_maps_to_exactly_one_severity() {
    let mut value = -20.0;
    while value <= 120.0 {
        let severity = Severity::for_score(CompositeScore(value));
        let expected = if value < 40.0 {
            Severity::Critical
        } else if value < 70.0 {
            Severity::Moderate
        } else {
            Severity::Strong
        };
        assert_eq!(severity, expected, "score {value}");
        value += 0.5;
    }
}

#[test]
fn weighted_mean_stays_between_extremes() {
    let metric_sets = [
        MetricSet {
            bias_free_index: 12.0,
            transparency: 88.0,
            accountability: 45.5,
            privacy_compliance: 100.0,
            fairness: 3.0,
            sentiment: 61.0,
        },
        normalize(&RawInputs::sample()),
        MetricSet::uniform(42.0),
    ];

    for metrics in metric_sets {
        for bias in [0, 15, 30] {
            for fairness in [0, 10, 30] {
                let weights = WeightConfig {
                    bias,
                    fairness,
                    ..WeightConfig::default()
                };
                let score = aggregate(&metrics, &weights).value();
                assert!(score >= metrics.min() - 1e-9);
                assert!(score <= metrics.max() + 1e-9);
            }
        }
    }
}

#[test]
fn rule_evaluation_does_not_mutate_metrics() {
    let metrics = normalize(&RawInputs::sample());
    let snapshot = metrics;
    let score = aggregate(&metrics, &WeightConfig::default());
    let _ = recommend(&metrics, score);
    assert_eq!(metrics, snapshot);
}
