use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::services::discovery;
use crate::AppState;

fn not_found(what: &str) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({"error": format!("{} not found", what)})),
    )
}

/// GET /api/preview/video/:id - Video detail with comments
pub async fn preview_video(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    tracing::info!("Video preview: {}", video_id);

    let preview = discovery::preview_video(
        &state.client,
        &video_id,
        &state.config.display(),
        &state.config.scope_dir,
    )
    .await
    .ok_or_else(|| not_found("Video"))?;

    Ok(Json(preview))
}

/// GET /api/preview/show/:id - Show detail
pub async fn preview_show(
    State(state): State<Arc<AppState>>,
    Path(show_id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    tracing::info!("Show preview: {}", show_id);

    let preview = discovery::preview_show(&state.client, &show_id)
        .await
        .ok_or_else(|| not_found("Show"))?;

    Ok(Json(preview))
}
