use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use tracing::warn;

use crate::db;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(ready))
}

/// Liveness probe: the process is up and serving.
async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "dishlab-api",
        "environment": state.config.environment,
    }))
}

/// Readiness probe: the document store answers a ping.
async fn ready(State(state): State<AppState>) -> Json<Value> {
    match db::ping(&state.db).await {
        Ok(()) => Json(json!({
            "status": "ready",
            "mongo": "ok",
            "read_only": state.config.read_only,
        })),
        Err(e) => {
            warn!(error = %e, "mongo ping failed");
            Json(json!({
                "status": "error",
                "dependency": "mongo",
                "detail": e.to_string(),
            }))
        }
    }
}
