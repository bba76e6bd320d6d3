// src/main.rs
mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod routes;
mod services;
mod templates;

use crate::config::Config;
use crate::routes::create_router;
use crate::services::signup_client::SignupClient;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

pub struct AppState {
    pub config: Config,
    pub signup_client: SignupClient,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let signup_client = SignupClient::new(&config.signup_api_url, config.request_timeout())?;
        Ok(Self {
            config,
            signup_client,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("signup_portal=info,tower_http=info")),
        )
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .init();

    tracing::info!("🚀 Starting signup portal...");

    let config = Config::from_env()?;
    let addr = config.server_addr()?;

    let state = Arc::new(AppState::new(config)?);
    tracing::info!("🔌 Signup endpoint: {}", state.signup_client.endpoint());
    tracing::info!(
        "↪️  Redirecting to {} {}ms after signup",
        state.config.login_url,
        state.config.redirect_delay_ms
    );

    let app = create_router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("✅ Signup portal listening on http://{}/signup", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
