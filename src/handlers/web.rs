// src/handlers/web.rs
use axum::{
    extract::State,
    response::{Html, Redirect},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::models::SignupForm;
use crate::templates::signup::SignupPage;
use crate::AppState;

pub async fn index() -> Redirect {
    Redirect::to("/signup")
}

pub async fn signup_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let form = SignupForm::default();
    Html(SignupPage::new(&form, &state.config.login_url).render())
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}
