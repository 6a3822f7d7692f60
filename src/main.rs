mod config;
mod models;
mod routes;
mod services;

#[cfg(test)]
mod test_support;

use axum::{routing::get, Router};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::categories::CategoryTree;
use crate::services::youku::{YoukuClient, YoukuError};

/// Application state shared across handlers
pub struct AppState {
    pub config: Config,
    pub client: YoukuClient,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, YoukuError> {
        let client = YoukuClient::from_config(&config)?;
        Ok(Self {
            config,
            client,
            start_time: Instant::now(),
        })
    }

    /// Category tree, re-read for every request
    pub async fn categories(&self) -> CategoryTree {
        CategoryTree::load_or_empty(&self.config.scope_dir).await
    }

    /// Random source for one request; fixed when `HOME_SEED` is set
    pub fn chooser(&self) -> StdRng {
        match self.config.home_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Build the application router
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        // Health endpoints
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health_check))
        .route("/live", get(routes::health::live))
        // Catalog endpoints
        .route("/api/categories", get(routes::catalog::get_categories))
        .route("/api/departments", get(routes::catalog::get_departments))
        .route("/api/filters/:kind", get(routes::catalog::get_filters))
        .route("/api/videos", get(routes::catalog::get_videos))
        .route("/api/shows", get(routes::catalog::get_shows))
        // Browse endpoints
        .route("/api/browse", get(routes::browse::browse))
        .route("/api/aggregate", get(routes::browse::aggregate))
        // Preview endpoints
        .route(
            "/api/preview/video/:id",
            get(routes::preview::preview_video),
        )
        .route("/api/preview/show/:id", get(routes::preview::preview_show))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "youku_discovery=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    // Load configuration
    let config = Config::from_env();
    let port = config.port;

    tracing::info!("Starting Youku Discovery v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app_env);
    tracing::info!("Upstream: {}", config.api_root);

    // Category data is optional at startup; browsing degrades without it
    match CategoryTree::load(&config.scope_dir).await {
        Ok(tree) => tracing::info!(
            "Category data loaded: {} video, {} show categories",
            tree.video.len(),
            tree.show.len()
        ),
        Err(e) => tracing::warn!("Category data unavailable: {:#}", e),
    }

    // Build application state
    let state = Arc::new(AppState::new(config)?);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
