use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use formlabel_a11y::FieldReport;
use serde::Deserialize;
use tracing::{info, warn};

use crate::{ApiError, AppState};

/// Body of `POST /check`
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    /// Raw HTML, or an http(s) URL to fetch
    pub html: String,
}

pub async fn check_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckRequest>, JsonRejection>,
) -> Result<Json<Vec<FieldReport>>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected /check body: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    })?;

    let html = state.loader.load(&request.html).await.map_err(|err| {
        warn!("Document load failed: {}", err);
        ApiError::Fetch(err)
    })?;

    let analyzer = state.analyzer.clone();
    let report = tokio::task::spawn_blocking(move || analyzer.analyze(&html))
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;

    info!("Analyzed {} form fields", report.len());
    Ok(Json(report))
}

pub async fn healthz_handler() -> &'static str {
    "ok"
}
