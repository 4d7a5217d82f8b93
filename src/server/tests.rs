use actix_web::{App, web, http::StatusCode};
use actix_web::test as actix_test;
use serde_json::{json, Value};

use crate::config::server::{ServerConfig, DEFAULT_HOST, DEFAULT_PORT};
use crate::server::{handlers, router, state::AppState};

macro_rules! test_app {
    () => {
        actix_test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::default()))
                .configure(router::config)
                .default_service(web::to(handlers::not_found)),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health_reports_ok() {
    let app = test_app!();
    let req = actix_test::TestRequest::get().uri("/health").to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "status": "ok" }));
}

#[actix_web::test]
async fn test_info_reports_name_and_version() {
    let app = test_app!();
    let req = actix_test::TestRequest::get().uri("/info").to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "name": "ee-2048-backend", "version": "1.0.0" }));
}

#[actix_web::test]
async fn test_api_prefix_serves_same_endpoints() {
    let app = test_app!();

    let req = actix_test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");

    let req = actix_test::TestRequest::get().uri("/api/info").to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["name"], "ee-2048-backend");
}

#[actix_web::test]
async fn test_unknown_route_returns_json_404() {
    let app = test_app!();
    let req = actix_test::TestRequest::get().uri("/game/state").to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["context"], "/game/state");
}

#[test]
fn test_server_config_defaults() {
    let config = ServerConfig::from_values(None, None);
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.host, DEFAULT_HOST);
    assert_eq!(config.port, DEFAULT_PORT);
}

#[test]
fn test_server_config_overrides() {
    let config = ServerConfig::from_values(Some("0.0.0.0".to_string()), Some("8080".to_string()));
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 8080);
}

#[test]
fn test_server_config_invalid_port_falls_back() {
    let config = ServerConfig::from_values(Some("  ".to_string()), Some("not-a-port".to_string()));
    assert_eq!(config.host, DEFAULT_HOST);
    assert_eq!(config.port, DEFAULT_PORT);
}
