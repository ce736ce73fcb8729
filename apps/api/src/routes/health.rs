use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Static welcome payload, doubles as a liveness check.
pub async fn welcome_handler() -> Json<Value> {
    Json(json!({
        "message": "Welcome to Resumate API"
    }))
}
