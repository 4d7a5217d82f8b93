/// Centralized helpers for HTTP error responses.
///
/// Every error body has the same shape: `{"error":{"code","message","context"}}`.
use actix_web::{HttpResponse, http::StatusCode};
use serde_json::json;

/// Returns an HTTP error response with a JSON body.
///
/// # Arguments
/// - `code`: Unique error code (e.g. "NOT_FOUND").
/// - `message`: Human-readable error message.
/// - `context`: Optional context string (e.g. the request path).
/// - `status`: HTTP status code.
pub fn http_error_response(
    code: &str,
    message: &str,
    context: Option<&str>,
    status: StatusCode,
) -> HttpResponse {
    let body = json!({
        "error": {
            "code": code,
            "message": message,
            "context": context.unwrap_or(""),
        }
    });
    HttpResponse::build(status).json(body)
}
