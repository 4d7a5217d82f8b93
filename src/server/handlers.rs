//! HTTP handlers for the health and info endpoints.

use actix_web::{HttpRequest, HttpResponse, web, http::StatusCode};
use log::warn;
use serde::{Serialize, Deserialize};

use crate::server::http_error::http_error_response;
use crate::server::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// `GET /health`: liveness probe.
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse { status: "ok".to_string() })
}

/// `GET /info`: service name and version.
pub async fn info(data: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(&data.service)
}

/// Fallback for every unmatched request.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    warn!("[Http] No route for {} {}", req.method(), req.path());
    http_error_response(
        "NOT_FOUND",
        "No route matches this path.",
        Some(req.path()),
        StatusCode::NOT_FOUND,
    )
}
