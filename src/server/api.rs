//! HTTP API server implementation

use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

use crate::core::errors::TranslationError;
use crate::core::models::TranslationRequest;
use crate::core::translator::translate_request;

/// Application state
#[derive(Clone)]
pub struct AppState {
    started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started_at: chrono::Utc::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub started_at: i64,
}

/// Batch translation request
#[derive(Deserialize)]
pub struct TranslateRequest {
    pub text_list: Vec<Option<String>>,
}

/// Batch translation response
#[derive(Serialize)]
pub struct TranslateResponse {
    pub translations: Vec<TranslationItem>,
}

#[derive(Serialize)]
pub struct TranslationItem {
    pub text: String,
    pub words_translated: usize,
}

/// Error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn invalid_request(message: String) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: ErrorDetail {
                message,
                code: Some("invalid_argument".to_string()),
                r#type: Some("invalid_request_error".to_string()),
            },
        }),
    )
}

/// Health check handler
async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        started_at: state.started_at.timestamp(),
    })
}

/// Batch translation handler
///
/// The whole batch is rejected if any entry is null or blank.
async fn translate(Json(payload): Json<TranslateRequest>) -> Result<Json<TranslateResponse>, ApiError> {
    if payload.text_list.is_empty() {
        return Err(invalid_request("text_list cannot be empty".to_string()));
    }

    let mut translations = Vec::with_capacity(payload.text_list.len());
    for (index, text) in payload.text_list.into_iter().enumerate() {
        match translate_request(&TranslationRequest { text }) {
            Ok(result) => translations.push(TranslationItem {
                text: result.translation,
                words_translated: result.words_translated,
            }),
            Err(e @ TranslationError::InvalidArgument { .. }) => {
                warn!("Rejected text_list[{}]: {}", index, e);
                return Err(invalid_request(format!("text_list[{}]: {}", index, e)));
            }
            Err(e) => {
                warn!("Translation failed for text_list[{}]: {}", index, e);
                return Err((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: ErrorDetail {
                            message: e.to_string(),
                            code: Some("translation_error".to_string()),
                            r#type: Some("api_error".to_string()),
                        },
                    }),
                ));
            }
        }
    }

    Ok(Json(TranslateResponse { translations }))
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/translate", post(translate))
        .with_state(state)
}

/// Run the HTTP server
pub async fn run_server(host: String, port: u16) -> anyhow::Result<()> {
    let app = router(Arc::new(AppState::new()));

    // Bind address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
