pub mod server;

use std::sync::Arc;

use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::{ChecksumFailurePolicy, ServiceConfig};
use crate::mask::mask;
use crate::validate::try_validate;

/// Shared state for the HTTP handlers. The config is immutable after
/// startup, so handlers need no locking.
pub struct AppState {
    pub config: ServiceConfig,
}

/// Error payload returned for rejected input and unknown routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Build the service router: `POST /validate`, `GET /health`, 404 fallback.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/validate", post(validate_card))
        .route("/health", get(health))
        .fallback(not_found)
        .with_state(state)
}

/// `POST /validate` -- extract the `number` field untyped and run the
/// validation pipeline. Only the masked form of the input ever reaches
/// the logs.
async fn validate_card(State(state): State<Arc<AppState>>, Json(body): Json<Value>) -> Response {
    let number = body.get("number").cloned().unwrap_or(Value::Null);
    let masked = number.as_str().map(mask).unwrap_or_default();

    match try_validate(&number) {
        Err(err) => {
            tracing::warn!(card = %masked, reason = %err, "rejected card input");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
        Ok(outcome) => {
            tracing::info!(
                card = %masked,
                scheme = %outcome.scheme,
                valid = outcome.valid,
                "validated card"
            );
            let status = if outcome.valid {
                StatusCode::OK
            } else {
                match state.config.checksum_failure {
                    ChecksumFailurePolicy::ClientError => StatusCode::BAD_REQUEST,
                    ChecksumFailurePolicy::Ok => StatusCode::OK,
                }
            };
            (status, Json(outcome)).into_response()
        }
    }
}

/// `GET /health`
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn not_found(method: Method, uri: Uri) -> (StatusCode, Json<ErrorBody>) {
    tracing::warn!(%method, path = %uri.path(), "route not found");
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Not Found".into(),
        }),
    )
}
