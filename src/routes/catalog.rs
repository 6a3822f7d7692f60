//! Catalog Routes
//!
//! Static catalog data (categories, departments, sort options) and the raw
//! normalized upstream listings.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::services::categories::Department;
use crate::services::youku::query::default_order;
use crate::services::youku::{
    build_list_query, orders, Entity, EntityKind, Page, QuerySpec, Show, Video,
};
use crate::AppState;

type ErrorResponse = (StatusCode, Json<serde_json::Value>);

// ============================================================================
// Query Parameters
// ============================================================================

#[derive(Deserialize, Default)]
pub struct VideosQuery {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub genre: String,
    pub period: Option<String>,
    pub orderby: Option<String>,
    pub page: Option<u32>,
    pub count: Option<u32>,
}

#[derive(Deserialize, Default)]
pub struct ShowsQuery {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub genre: String,
    pub orderby: Option<String>,
    pub page: Option<u32>,
    pub count: Option<u32>,
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct FilterOption {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Serialize)]
pub struct FiltersResponse {
    pub kind: EntityKind,
    pub default: &'static str,
    pub options: Vec<FilterOption>,
}

/// One page of a listing; `total` is the upstream's count across all pages
#[derive(Serialize)]
pub struct ListResponse<T> {
    pub total: i64,
    pub items: Vec<T>,
}

impl<T> From<Page<T>> for ListResponse<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            total: page.total,
            items: page.items,
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn parse_kind(s: &str) -> Result<EntityKind, ErrorResponse> {
    s.parse().map_err(|e: String| {
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": e})),
        )
    })
}

fn query_error(rejection: QueryRejection) -> ErrorResponse {
    (
        rejection.status(),
        Json(serde_json::json!({"error": rejection.body_text()})),
    )
}

/// Listing page, or an empty page when the upstream fails
async fn page_or_empty<T: Entity>(state: &AppState, spec: &QuerySpec) -> Page<T> {
    state.client.fetch_list(spec).await.unwrap_or_else(|e| {
        tracing::warn!(path = spec.path, "Listing degraded to empty: {}", e);
        Page::default()
    })
}

fn choose_order(requested: Option<String>, kind: EntityKind) -> String {
    requested
        .filter(|o| !o.is_empty())
        .unwrap_or_else(|| default_order(kind).to_string())
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/categories - Category tree
pub async fn get_categories(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.categories().await)
}

/// GET /api/departments - Department hierarchy
pub async fn get_departments(State(state): State<Arc<AppState>>) -> Json<Department> {
    Json(state.categories().await.departments())
}

/// GET /api/filters/:kind - Sort options for a kind
pub async fn get_filters(Path(kind): Path<String>) -> Result<impl IntoResponse, ErrorResponse> {
    let kind = parse_kind(&kind)?;

    Ok(Json(FiltersResponse {
        kind,
        default: default_order(kind),
        options: orders(kind)
            .iter()
            .map(|&(id, label)| FilterOption { id, label })
            .collect(),
    }))
}

/// GET /api/videos - Normalized videos of a category
pub async fn get_videos(
    State(state): State<Arc<AppState>>,
    query: Result<Query<VideosQuery>, QueryRejection>,
) -> Result<Json<ListResponse<Video>>, ErrorResponse> {
    let Query(query) = query.map_err(query_error)?;
    let period = query.period.unwrap_or_else(|| "today".to_string());
    let orderby = choose_order(query.orderby, EntityKind::Video);

    let spec = build_list_query(
        state.client.client_id(),
        EntityKind::Video,
        &query.category,
        &query.genre,
        &period,
        &orderby,
        query.page.unwrap_or(1),
        query.count.unwrap_or(state.config.result_count),
    );
    let page: Page<Video> = page_or_empty(&state, &spec).await;

    Ok(Json(page.into()))
}

/// GET /api/shows - Normalized shows of a category
pub async fn get_shows(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ShowsQuery>, QueryRejection>,
) -> Result<Json<ListResponse<Show>>, ErrorResponse> {
    let Query(query) = query.map_err(query_error)?;
    let orderby = choose_order(query.orderby, EntityKind::Show);

    let spec = build_list_query(
        state.client.client_id(),
        EntityKind::Show,
        &query.category,
        &query.genre,
        "",
        &orderby,
        query.page.unwrap_or(1),
        query.count.unwrap_or(state.config.result_count),
    );
    let page: Page<Show> = page_or_empty(&state, &spec).await;

    Ok(Json(page.into()))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{
        body_json, get, refused_api_root, spawn_upstream, test_state, write_categories,
    };
    use axum::{extract::Query, http::StatusCode, routing, Json, Router};
    use serde_json::json;
    use std::collections::HashMap;

    fn upstream() -> Router {
        Router::new()
            .route(
                "/videos/by_category.json",
                routing::get(|Query(q): Query<HashMap<String, String>>| async move {
                    let mut keys: Vec<_> = q.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
                    keys.sort();
                    Json(json!({"total": 5000, "page": 1, "count": 2, "videos": [
                        {"id": "v1", "title": keys.join("&"), "view_count": "7"},
                        {"id": "v2", "title": "two", "duration": "61.5"}
                    ]}))
                }),
            )
            .route(
                "/shows/by_category.json",
                routing::get(|| async {
                    Json(json!({"total": 1, "shows": [{"id": "s1", "name": "Drama", "score": "9.2"}]}))
                }),
            )
    }

    #[tokio::test]
    async fn test_categories_and_departments() {
        let dir = tempfile::tempdir().unwrap();
        write_categories(dir.path());
        let app = crate::app(test_state("http://127.0.0.1:9", dir.path()));

        let body = body_json(get(app.clone(), "/api/categories").await).await;
        assert_eq!(body["video"][0]["label"], "资讯");
        assert_eq!(body["show"][1]["genre"][0]["label"], "古装");

        let body = body_json(get(app, "/api/departments").await).await;
        assert_eq!(body["label"], "首页");
        assert_eq!(body["children"][0]["children"][0]["id"], "video_资讯");
        assert_eq!(body["children"][1]["children"][1]["children"][0]["id"], "show_电视剧_古装");
    }

    #[tokio::test]
    async fn test_categories_without_data_file() {
        let dir = tempfile::tempdir().unwrap();
        let app = crate::app(test_state("http://127.0.0.1:9", dir.path()));

        let response = get(app, "/api/categories").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"video": [], "show": []}));
    }

    #[tokio::test]
    async fn test_filters() {
        let dir = tempfile::tempdir().unwrap();
        let app = crate::app(test_state("http://127.0.0.1:9", dir.path()));

        let body = body_json(get(app.clone(), "/api/filters/show").await).await;
        assert_eq!(body["default"], "view-today-count");
        assert_eq!(body["options"].as_array().unwrap().len(), 8);
        assert_eq!(body["options"][6], json!({"id": "score", "label": "评分"}));

        let body = body_json(get(app.clone(), "/api/filters/videos").await).await;
        assert_eq!(body["kind"], "video");
        assert_eq!(body["default"], "published");

        let response = get(app, "/api/filters/playlist").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_videos_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let root = spawn_upstream(upstream()).await;
        let app = crate::app(test_state(&root, dir.path()));

        let body = body_json(get(app, "/api/videos?category=%E9%9F%B3%E4%B9%90").await).await;

        assert_eq!(body["total"], 5000);
        assert_eq!(body["items"].as_array().unwrap().len(), 2);
        assert_eq!(
            body["items"][0]["title"],
            "category=音乐&client_id=test-client&count=4&genre=&orderby=published&page=1&period=today"
        );
        assert_eq!(body["items"][0]["view_count"], 7);
        assert_eq!(body["items"][1]["duration"], 61.5);
    }

    #[tokio::test]
    async fn test_shows() {
        let dir = tempfile::tempdir().unwrap();
        let root = spawn_upstream(upstream()).await;
        let app = crate::app(test_state(&root, dir.path()));

        let body = body_json(get(app, "/api/shows?orderby=score").await).await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["items"][0]["score"], 9.2);
    }

    #[tokio::test]
    async fn test_listing_with_unreachable_upstream_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let app = crate::app(test_state(&refused_api_root().await, dir.path()));

        let response = get(app.clone(), "/api/videos").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"total": 0, "items": []}));

        let body = body_json(get(app, "/api/shows").await).await;
        assert_eq!(body["total"], 0);
    }

    #[tokio::test]
    async fn test_listing_with_malformed_envelope_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let root = spawn_upstream(Router::new().route(
            "/videos/by_category.json",
            routing::get(|| async { Json(json!({"total": 9, "shows": []})) }),
        ))
        .await;
        let app = crate::app(test_state(&root, dir.path()));

        let body = body_json(get(app, "/api/videos").await).await;
        assert_eq!(body, json!({"total": 0, "items": []}));
    }

    #[tokio::test]
    async fn test_listing_rejects_bad_query_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let app = crate::app(test_state("http://127.0.0.1:9", dir.path()));

        let response = get(app.clone(), "/api/videos?page=abc").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["error"].is_string());

        let response = get(app, "/api/shows?count=-1").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["error"].is_string());
    }
}
