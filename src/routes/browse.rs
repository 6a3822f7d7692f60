//! Browse Routes
//!
//! Card sections for departments, keyword searches and aggregated keywords.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::models::CardSection;
use crate::services::categories::DepartmentId;
use crate::services::discovery;
use crate::AppState;

// ============================================================================
// Query Parameters
// ============================================================================

#[derive(Deserialize, Default)]
pub struct BrowseQuery {
    /// Department id, e.g. `video_音乐` (empty for home)
    #[serde(default)]
    pub department: String,
    /// Search text
    #[serde(default)]
    pub q: String,
    pub orderby: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct AggregateQuery {
    /// Comma separated aggregation keywords, e.g. `music,news`
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub q: String,
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct SectionsResponse {
    pub department: String,
    pub sections: Vec<CardSection>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/browse - Sections for a department, or search results when `q` is set
pub async fn browse(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BrowseQuery>,
) -> Json<SectionsResponse> {
    let department = DepartmentId::parse(&query.department);
    let settings = state.config.display();
    let keyword = query.q.trim();

    tracing::info!(
        "Browse department={:?} query={:?}",
        query.department,
        keyword
    );

    let sections = if keyword.is_empty() {
        let tree = state.categories().await;
        let mut chooser = state.chooser();
        discovery::browse(
            &state.client,
            &tree,
            &department,
            query.orderby.as_deref(),
            &mut chooser,
            &settings,
        )
        .await
    } else {
        discovery::search(&state.client, keyword, &department, &settings).await
    };

    Json(SectionsResponse {
        department: query.department,
        sections,
    })
}

/// GET /api/aggregate - Featured section for aggregation keywords
pub async fn aggregate(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AggregateQuery>,
) -> Json<Vec<CardSection>> {
    let keywords: Vec<String> = query
        .keywords
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect();

    let tree = state.categories().await;
    let mut chooser = state.chooser();

    Json(
        discovery::aggregate(
            &state.client,
            &tree,
            &keywords,
            query.q.trim(),
            &mut chooser,
            &state.config.display(),
        )
        .await,
    )
}
