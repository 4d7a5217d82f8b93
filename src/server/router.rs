//! HTTP routing configuration.
//!
//! Both endpoints are served at the root and again under `/api`.

use actix_web::web;
use crate::server::handlers::{health, info};

/// Configure the application's HTTP routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/info", web::get().to(info))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health))
                .route("/info", web::get().to(info))
        );
}
