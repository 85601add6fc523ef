use axum::Json;
use serde_json::{json, Value};

/// GET / - liveness banner
pub async fn index() -> Json<Value> {
    Json(json!({ "message": "Expense Tracker API is running!" }))
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
