//! Shared helpers for tests that need a live upstream

use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceExt;

use crate::config::Config;
use crate::models::CardSize;
use crate::services::categories::CATEGORY_FILE;
use crate::AppState;

/// Serve `router` on an ephemeral local port and return its base URL
pub async fn spawn_upstream(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Base URL of a port nothing listens on
pub async fn refused_api_root() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{}", addr)
}

/// Application state pointing at `api_root`, with scope data under `scope_dir`
pub fn test_state(api_root: &str, scope_dir: &Path) -> Arc<AppState> {
    let config = Config {
        port: 0,
        app_env: "test".to_string(),
        api_root: api_root.to_string(),
        client_id: "test-client".to_string(),
        user_agent: "test-agent".to_string(),
        fetch_timeout_ms: 5_000,
        scope_dir: scope_dir.to_path_buf(),
        result_count: 4,
        comment_count: 3,
        item_size: CardSize::Small,
        home_seed: Some(1),
    };
    Arc::new(AppState::new(config).unwrap())
}

/// Write a small category tree into `scope_dir`
pub fn write_categories(scope_dir: &Path) {
    std::fs::create_dir_all(scope_dir.join("data")).unwrap();
    std::fs::write(
        scope_dir.join(CATEGORY_FILE),
        r#"{
            "video": [
                {"term": "News", "label": "资讯", "genres": [{"label": "社会"}]},
                {"term": "Music", "label": "音乐"},
                {"term": "Sports", "label": "体育"}
            ],
            "show": [
                {"term": "Music", "label": "音乐"},
                {"term": "TV", "label": "电视剧", "genre": [{"label": "古装"}]},
                {"term": "Variety", "label": "综艺"}
            ]
        }"#,
    )
    .unwrap();
}

/// Issue a GET against the router
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
