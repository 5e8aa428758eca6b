//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub storage: &'static str,
    pub timestamp: String,
}

/// Health check endpoint - returns server and storage status.
///
/// GET /health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let storage_ok = match state.posts.count().await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Storage health probe failed");
            false
        }
    };

    let response = HealthResponse {
        status: if storage_ok { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        storage: if storage_ok { "ok" } else { "unavailable" },
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    if storage_ok {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
