use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use ethical_propensity::error::AppError;
use ethical_propensity::intake::validate_inputs;
use ethical_propensity::scoring::{
    EpsReport, MetricKind, MetricPolicy, RawInputs, ScoringSession, WeightConfig,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    #[serde(default)]
    pub(crate) inputs: RawInputs,
    #[serde(default)]
    pub(crate) weights: Option<WeightConfig>,
    #[serde(default)]
    pub(crate) clamp_metrics: Option<bool>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreResponse {
    pub(crate) evaluated_at: DateTime<Utc>,
    pub(crate) clamp_metrics: bool,
    pub(crate) inputs: RawInputs,
    pub(crate) weights: WeightConfig,
    #[serde(flatten)]
    pub(crate) report: EpsReport,
}

#[derive(Debug, Serialize)]
pub(crate) struct WeightEntry {
    pub(crate) metric: MetricKind,
    pub(crate) label: &'static str,
    pub(crate) default: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct WeightsResponse {
    pub(crate) min: u32,
    pub(crate) max: u32,
    pub(crate) defaults: WeightConfig,
    pub(crate) weights: Vec<WeightEntry>,
}

pub(crate) fn scoring_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/eps/weights", get(weights_endpoint))
        .route("/api/v1/eps/score", post(score_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn weights_endpoint() -> Json<WeightsResponse> {
    let defaults = WeightConfig::default();
    let weights = MetricKind::ALL
        .into_iter()
        .map(|kind| WeightEntry {
            metric: kind,
            label: kind.weight_label(),
            default: defaults.get(kind),
        })
        .collect();

    Json(WeightsResponse {
        min: WeightConfig::MIN,
        max: WeightConfig::MAX,
        defaults,
        weights,
    })
}

pub(crate) async fn score_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let ScoreRequest {
        inputs,
        weights,
        clamp_metrics,
    } = payload;

    validate_inputs(&inputs)?;
    let weights = weights.unwrap_or_default().validated()?;
    let policy = MetricPolicy {
        clamp_to_percent: clamp_metrics.unwrap_or(state.scoring.clamp_metrics),
    };

    let evaluation = ScoringSession::new(inputs, weights)
        .with_policy(policy)
        .evaluate();

    info!(
        score = evaluation.score.value(),
        severity = evaluation.recommendation.severity.label(),
        advisories = evaluation.recommendation.advisories.len(),
        "eps evaluated"
    );

    Ok(Json(ScoreResponse {
        evaluated_at: Utc::now(),
        clamp_metrics: policy.clamp_to_percent,
        inputs: evaluation.inputs,
        weights: evaluation.weights,
        report: evaluation.report(),
    }))
}
