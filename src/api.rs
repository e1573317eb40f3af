use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::advice::{self, RiskAdvice};
use crate::assessment::{RiskInput, RiskLevel, RiskResult};
use crate::config::AppConfig;
use crate::history::AssessmentHistory;
use crate::scorer;
use crate::validate::{self, FieldError};

#[derive(Clone)]
pub struct AppState {
    history: Arc<AssessmentHistory>,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            history: Arc::new(AssessmentHistory::with_capacity(config.history_capacity)),
            config: Arc::new(config),
        }
    }
}

pub fn router(config: AppConfig) -> Router {
    router_with_state(AppState::new(config))
}

pub fn router_with_state(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/predict/stroke", post(predict_stroke))
        .route("/history", get(history))
        .route("/history/last", get(history_last))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(serde::Serialize)]
struct PredictResp {
    prediction: u8,
    probability: f32,
    risk_level: RiskLevel,
    timestamp: DateTime<Utc>,
    advice: RiskAdvice,
}

#[derive(serde::Serialize)]
struct ValidationBody {
    error: &'static str,
    fields: Vec<FieldError>,
}

async fn predict_stroke(
    State(state): State<AppState>,
    Json(input): Json<RiskInput>,
) -> Result<Json<PredictResp>, (StatusCode, Json<ValidationBody>)> {
    if let Err(fields) = validate::validate(&input) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ValidationBody {
                error: "Please fill in all required fields with valid values.",
                fields,
            }),
        ));
    }

    // Optional artificial latency, mirroring the browser shell's fake API call.
    let delay = state.config.assess_delay_ms;
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    let result = scorer::compute_risk(&input);
    state.history.push(result.clone());

    info!(
        probability = result.probability,
        risk_level = ?result.risk_level,
        "assessment complete"
    );
    metrics::counter!(
        "assessments_total",
        "risk_level" => result.risk_level.title()
    )
    .increment(1);

    Ok(Json(predict_resp(result)))
}

fn predict_resp(result: RiskResult) -> PredictResp {
    PredictResp {
        prediction: result.prediction(),
        probability: result.probability,
        advice: advice::for_level(result.risk_level),
        risk_level: result.risk_level,
        timestamp: result.timestamp,
    }
}

#[derive(serde::Deserialize)]
struct HistoryQuery {
    n: Option<usize>,
}

#[derive(serde::Serialize)]
struct HistoryOut {
    timestamp: DateTime<Utc>,
    probability: f32,
    risk_level: RiskLevel,
    prediction: u8,
}

impl From<RiskResult> for HistoryOut {
    fn from(r: RiskResult) -> Self {
        Self {
            timestamp: r.timestamp,
            probability: r.probability,
            risk_level: r.risk_level,
            prediction: r.prediction(),
        }
    }
}

async fn history(
    State(state): State<AppState>,
    Query(q): Query<HistoryQuery>,
) -> Json<Vec<HistoryOut>> {
    let n = q.n.unwrap_or(crate::history::DEFAULT_CAPACITY);
    let rows = state.history.snapshot_last_n(n);
    Json(rows.into_iter().map(HistoryOut::from).collect())
}

async fn history_last(State(state): State<AppState>) -> Json<Option<HistoryOut>> {
    Json(state.history.latest().map(HistoryOut::from))
}
