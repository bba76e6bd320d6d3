// src/routes.rs
use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, services::ServeDir};

use crate::handlers::{signup, web};
use crate::middleware::security::SecurityHeaders;
use crate::AppState;

const MAX_FORM_BODY_BYTES: usize = 16 * 1024;

pub fn create_router(state: Arc<AppState>) -> Router {
    let security = SecurityHeaders {
        enable_hsts: state.config.enable_hsts,
    };

    Router::new()
        .route("/", get(web::index))
        .route(
            "/signup",
            get(web::signup_page).post(signup::signup_form_handler),
        )
        .route("/health", get(web::health))
        // Static files
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(axum::middleware::from_fn_with_state(
            security,
            crate::middleware::security::security_headers,
        ))
        .layer(DefaultBodyLimit::max(MAX_FORM_BODY_BYTES))
        .layer(CompressionLayer::new())
}
