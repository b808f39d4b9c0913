use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use career_match::matching::{CandidateProfile, MatchOutcome, Posting, ScoredPosting};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RankRequest {
    #[serde(default)]
    pub(crate) profile: Option<CandidateProfile>,
    pub(crate) postings: Vec<Posting>,
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RankResponse {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) total: usize,
    pub(crate) matches: Vec<ScoredPosting>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EligibleRequest {
    #[serde(default)]
    pub(crate) profile: Option<CandidateProfile>,
    pub(crate) postings: Vec<Posting>,
}

#[derive(Debug, Serialize)]
pub(crate) struct EligibleResponse {
    pub(crate) postings: Vec<Posting>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BreakdownRequest {
    #[serde(default)]
    pub(crate) profile: Option<CandidateProfile>,
    pub(crate) posting: Posting,
}

pub(crate) fn with_match_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/matches/rank", post(rank_endpoint))
        .route("/api/v1/matches/eligible", post(eligible_endpoint))
        .route("/api/v1/matches/breakdown", post(breakdown_endpoint))
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

pub(crate) async fn rank_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<RankRequest>,
) -> Json<RankResponse> {
    let RankRequest {
        profile,
        postings,
        limit,
    } = payload;

    let limit = limit.unwrap_or(state.engine.config().result_limit);
    let matches = state.engine.rank(profile.as_ref(), &postings, limit);
    info!(
        received = postings.len(),
        returned = matches.len(),
        profile_loaded = profile.as_ref().is_some_and(|p| p.qualifications.is_some()),
        "ranked postings"
    );

    Json(RankResponse {
        generated_at: Utc::now(),
        total: matches.len(),
        matches,
    })
}

pub(crate) async fn eligible_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<EligibleRequest>,
) -> Json<EligibleResponse> {
    let postings = state
        .engine
        .filter_qualified(payload.profile.as_ref(), &payload.postings);
    Json(EligibleResponse { postings })
}

pub(crate) async fn breakdown_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<BreakdownRequest>,
) -> Json<MatchOutcome> {
    Json(
        state
            .engine
            .evaluate(payload.profile.as_ref(), &payload.posting),
    )
}
