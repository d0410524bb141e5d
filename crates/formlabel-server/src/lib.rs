//! formlabel Server
//!
//! `POST /check` accepts `{"html": "..."}` holding either markup or a URL
//! and answers with the label report for every form field.

pub mod config;
pub mod error;
pub mod handlers;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use formlabel_a11y::LabelAnalyzer;
use formlabel_net::{DocumentLoader, FetchError};

pub use config::ServerConfig;
pub use error::ApiError;

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pub loader: DocumentLoader,
    pub analyzer: LabelAnalyzer,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Result<Self, FetchError> {
        Ok(Self {
            loader: DocumentLoader::new(config.loader.clone())?,
            analyzer: LabelAnalyzer::new(config.analyzer),
        })
    }
}

pub fn build_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/check", post(handlers::check_handler))
        .route("/healthz", get(handlers::healthz_handler))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}
