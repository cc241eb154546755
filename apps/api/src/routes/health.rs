use axum::Json;
use serde_json::{json, Value};

pub const SERVICE_NAME: &str = "Resume AI API";

/// Every route the router serves, reported by the status endpoint.
pub const ENDPOINTS: &[&str] = &["/", "/api", "/health", "/api/v1/status", "/api/v1/bullet"];

/// GET / and GET /api
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": format!("Welcome to {SERVICE_NAME}"),
        "status": "running"
    }))
}

/// GET /health
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME
    }))
}

/// GET /api/v1/status
pub async fn status_handler() -> Json<Value> {
    Json(json!({
        "api_version": env!("CARGO_PKG_VERSION"),
        "status": "operational",
        "endpoints": ENDPOINTS
    }))
}
