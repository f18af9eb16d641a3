//! TripSense API Server
//!
//! Stateless HTTP layer over the LLM gateway: each operation performs at
//! most one outbound provider call and holds no shared mutable state
//! between requests.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tripsense::LlmProvider;

mod adapters;
mod config;
mod error;
mod models;
mod routes;

use config::Config;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn LlmProvider>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "TripSense API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🌍 TripSense API initializing...");

    // Missing credential is fatal here, never a per-request surprise
    let config = Config::from_env()?;
    let provider = adapters::build_provider(&config);
    tracing::info!(
        provider = %provider.provider_name(),
        model = %provider.model_id(),
        "🤖 LLM gateway ready"
    );

    let state = AppState { provider };

    let openapi = routes::swagger::ApiDoc::openapi();

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::itinerary::router())
        .merge(routes::budget::router())
        .merge(routes::plan_b::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ TripSense API ready on port {}", config.port);

    axum::serve(listener, router).await?;

    Ok(())
}
