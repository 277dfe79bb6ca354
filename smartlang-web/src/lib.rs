//! HTTP API around the SmartLang translator
//!
//! * `GET /` - welcome message
//! * `POST /translate` - rule-based or neural translation
//! * `POST /report-error` - store a user report about a bad translation

pub mod config;
pub mod reports;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use smartlang::nmt::{ModelUsed, NeuralTranslator, translate_with_fallback};
use smartlang::{SyntaxTree, TranslatedToken, Translator};

use crate::reports::{ErrorReport, ReportStore};

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    #[serde(default)]
    pub use_nmt: bool,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub original: String,
    pub translation: Option<String>,
    pub success: bool,
    pub error: Option<String>,
    pub tokens: Vec<TranslatedToken>,
    pub parse_tree: Option<SyntaxTree>,
    pub model_used: ModelUsed,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub success: bool,
    pub message: String,
    pub report_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<Translator>,
    pub nmt: Option<Arc<dyn NeuralTranslator>>,
    pub reports: Arc<ReportStore>,
}

pub fn router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/translate", post(translate))
        .route("/report-error", post(report_error))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to SmartLang API. POST /translate to translate English into Spanish."
    }))
}

async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Json<TranslateResponse> {
    info!("Translating {:?} (use_nmt: {})", request.text, request.use_nmt);

    let outcome = translate_with_fallback(
        &state.translator,
        state.nmt.as_deref(),
        &request.text,
        request.use_nmt,
    )
    .await;

    info!(
        "Translated with {}: {:?}",
        outcome.model_used, outcome.result.translation
    );

    Json(TranslateResponse {
        original: request.text,
        translation: outcome.result.translation,
        success: outcome.result.success,
        error: outcome.result.error,
        tokens: outcome.analysis.result.tokens,
        parse_tree: Some(outcome.analysis.tree),
        model_used: outcome.model_used,
    })
}

async fn report_error(
    State(state): State<AppState>,
    Json(report): Json<ErrorReport>,
) -> Result<Json<ReportResponse>, (StatusCode, Json<ErrorResponse>)> {
    let report_id = state.reports.submit(report).await.map_err(|e| {
        error!("Failed to save error report: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Failed to save error report: {}", e),
            }),
        )
    })?;

    Ok(Json(ReportResponse {
        success: true,
        message: "Error report submitted successfully".to_string(),
        report_id: Some(report_id),
    }))
}
