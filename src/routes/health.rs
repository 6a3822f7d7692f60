use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::services::categories::CategoryTree;
use crate::services::youku::EntityKind;
use crate::AppState;

/// Root endpoint - basic status
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "Youku Discovery",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "runtime": "rust"
    }))
}

/// Category data stats
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryStats {
    loaded: bool,
    video_categories: usize,
    show_categories: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: String,
    uptime: u64,
    environment: String,
    api_root: String,
    categories: CategoryStats,
}

/// GET /health - Advanced health check
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let uptime = state.start_time.elapsed().as_secs();

    // Without category data only search and previews keep working
    let categories = match CategoryTree::load(&state.config.scope_dir).await {
        Ok(tree) => CategoryStats {
            loaded: true,
            video_categories: tree.categories(EntityKind::Video).len(),
            show_categories: tree.categories(EntityKind::Show).len(),
            error: None,
        },
        Err(e) => {
            tracing::warn!("Category data check failed: {:#}", e);
            CategoryStats {
                loaded: false,
                video_categories: 0,
                show_categories: 0,
                error: Some(format!("{:#}", e)),
            }
        }
    };

    let status = if categories.loaded { "ok" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        uptime,
        environment: state.config.app_env.clone(),
        api_root: state.config.api_root.clone(),
        categories,
    })
}

/// Liveness probe (for Kubernetes)
pub async fn live() -> impl IntoResponse {
    (StatusCode::OK, "alive")
}
