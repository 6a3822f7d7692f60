//! Upstream query construction
//!
//! Pure functions turning a logical request into a [`QuerySpec`]. Every
//! parameter the endpoint understands is always emitted, empty values
//! included: some endpoints treat `genre=` differently from a missing `genre`.

use serde::Serialize;
use tracing::debug;

use super::types::EntityKind;

/// Sanctioned video sort keys with display labels
pub const VIDEO_ORDERS: &[(&str, &str)] = &[
    ("published", "发布时间"),
    ("view-count", "总播放数"),
    ("comment-count", "总评论数"),
    ("reference-count", "总引用数"),
    ("favorite-time", "收藏时间"),
    ("favorite-count", "总收藏数"),
];

/// Sanctioned show sort keys with display labels
pub const SHOW_ORDERS: &[(&str, &str)] = &[
    ("view-today-count", "今日播放数"),
    ("view-count", "总播放数"),
    ("comment-count", "总评论数"),
    ("favorite-count", "总收藏数"),
    ("view-week-count", "本周播放数"),
    ("release-date", "上映日期"),
    ("score", "评分"),
    ("updated", "最后更新"),
];

/// Sort keys for a kind
pub fn orders(kind: EntityKind) -> &'static [(&'static str, &'static str)] {
    match kind {
        EntityKind::Video => VIDEO_ORDERS,
        EntityKind::Show => SHOW_ORDERS,
    }
}

/// Default sort key when the caller has no preference
pub fn default_order(kind: EntityKind) -> &'static str {
    orders(kind)[0].0
}

/// Whether `orderby` is one of the documented keys for `kind`
pub fn is_sanctioned_order(kind: EntityKind, orderby: &str) -> bool {
    orders(kind).iter().any(|(key, _)| *key == orderby)
}

/// A fully specified upstream GET
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuerySpec {
    /// Path relative to the API root, e.g. `videos/by_category.json`
    pub path: &'static str,
    pub params: Vec<(String, String)>,
}

impl QuerySpec {
    fn new(path: &'static str, client_id: &str) -> Self {
        Self {
            path,
            params: vec![("client_id".to_string(), client_id.to_string())],
        }
    }

    fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    /// Value of a parameter, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Form-encoded query string; empty values render as `key=`
    pub fn query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish()
    }

    /// Absolute URL under `api_root`
    pub fn url(&self, api_root: &str) -> String {
        format!(
            "{}/{}?{}",
            api_root.trim_end_matches('/'),
            self.path,
            self.query_string()
        )
    }
}

fn check_order(kind: EntityKind, orderby: &str) {
    if !is_sanctioned_order(kind, orderby) {
        debug!(kind = %kind, orderby, "passing unsanctioned orderby through");
    }
}

/// Category listing (`videos/by_category.json`, `shows/by_category.json`)
///
/// `period` only applies to videos; show listings have no period parameter.
/// `page` and `count` are clamped to at least 1.
#[allow(clippy::too_many_arguments)]
pub fn build_list_query(
    client_id: &str,
    kind: EntityKind,
    category: &str,
    genre: &str,
    period: &str,
    orderby: &str,
    page: u32,
    count: u32,
) -> QuerySpec {
    check_order(kind, orderby);

    let spec = match kind {
        EntityKind::Video => QuerySpec::new("videos/by_category.json", client_id)
            .param("category", category)
            .param("genre", genre)
            .param("period", period),
        EntityKind::Show => QuerySpec::new("shows/by_category.json", client_id)
            .param("category", category)
            .param("genre", genre),
    };

    spec.param("orderby", orderby)
        .param("page", page.max(1))
        .param("count", count.max(1))
}

/// Single item lookup (`videos/show.json`, `shows/show.json`)
pub fn build_detail_query(client_id: &str, kind: EntityKind, id: &str) -> QuerySpec {
    match kind {
        EntityKind::Video => QuerySpec::new("videos/show.json", client_id)
            .param("video_id", id)
            .param("ext", "thumbnails"),
        EntityKind::Show => QuerySpec::new("shows/show.json", client_id).param("show_id", id),
    }
}

/// Keyword search (`searches/{video,show}/by_keyword.json`)
///
/// `window` is sent as `period` for videos and as `unite` for shows.
pub fn build_keyword_query(
    client_id: &str,
    kind: EntityKind,
    keyword: &str,
    category: &str,
    window: &str,
    orderby: &str,
    count: u32,
) -> QuerySpec {
    let spec = match kind {
        EntityKind::Video => QuerySpec::new("searches/video/by_keyword.json", client_id)
            .param("keyword", keyword)
            .param("category", category)
            .param("period", window),
        EntityKind::Show => QuerySpec::new("searches/show/by_keyword.json", client_id)
            .param("keyword", keyword)
            .param("category", category)
            .param("unite", window),
    };

    spec.param("orderby", orderby).param("count", count.max(1))
}

/// Comments of one video (`comments/by_video.json`)
pub fn build_comment_query(client_id: &str, video_id: &str, count: u32) -> QuerySpec {
    QuerySpec::new("comments/by_video.json", client_id)
        .param("video_id", video_id)
        .param("count", count.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CID: &str = "abc123";

    #[test]
    fn test_video_list_query_keeps_empty_values() {
        let spec = build_list_query(CID, EntityKind::Video, "", "", "today", "view-count", 1, 10);
        let qs = spec.query_string();

        assert_eq!(spec.path, "videos/by_category.json");
        assert!(qs.contains("client_id=abc123"));
        assert!(qs.contains("category=&"));
        assert!(qs.contains("genre=&"));
        assert!(qs.contains("period=today"));
        assert!(qs.contains("orderby=view-count"));
        assert!(qs.contains("page=1"));
        assert!(qs.contains("count=10"));
        assert_eq!(spec.params.len(), 7);
    }

    #[test]
    fn test_show_list_query_has_no_period() {
        let spec = build_list_query(CID, EntityKind::Show, "电视剧", "", "today", "score", 2, 24);

        assert_eq!(spec.path, "shows/by_category.json");
        assert_eq!(spec.get("period"), None);
        assert_eq!(spec.get("category"), Some("电视剧"));
        assert_eq!(spec.get("genre"), Some(""));
        assert_eq!(spec.get("page"), Some("2"));
        assert_eq!(spec.params.len(), 6);
    }

    #[test]
    fn test_list_query_clamps_paging() {
        let spec = build_list_query(CID, EntityKind::Video, "音乐", "", "week", "published", 0, 0);
        assert_eq!(spec.get("page"), Some("1"));
        assert_eq!(spec.get("count"), Some("1"));
    }

    #[test]
    fn test_unsanctioned_order_passes_through() {
        let spec = build_list_query(CID, EntityKind::Show, "", "", "", "view-couint", 1, 5);
        assert_eq!(spec.get("orderby"), Some("view-couint"));
        assert!(!is_sanctioned_order(EntityKind::Show, "view-couint"));
        assert!(is_sanctioned_order(EntityKind::Video, "reference-count"));
    }

    #[test]
    fn test_query_is_deterministic() {
        let a = build_list_query(CID, EntityKind::Video, "体育", "足球", "today", "published", 1, 9);
        let b = build_list_query(CID, EntityKind::Video, "体育", "足球", "today", "published", 1, 9);
        assert_eq!(a, b);
        assert_eq!(a.url("https://openapi.youku.com/v2/"), b.url("https://openapi.youku.com/v2"));
    }

    #[test]
    fn test_url_encodes_labels() {
        let spec = build_list_query(CID, EntityKind::Video, "音乐", "", "today", "published", 1, 1);
        let url = spec.url("https://openapi.youku.com/v2");
        assert!(url.starts_with("https://openapi.youku.com/v2/videos/by_category.json?client_id=abc123"));
        assert!(url.contains("category=%E9%9F%B3%E4%B9%90"));
    }

    #[test]
    fn test_detail_queries() {
        let video = build_detail_query(CID, EntityKind::Video, "XMTI5");
        assert_eq!(video.path, "videos/show.json");
        assert_eq!(video.get("video_id"), Some("XMTI5"));
        assert_eq!(video.get("ext"), Some("thumbnails"));
        assert_eq!(video.get("client_id"), Some(CID));

        let show = build_detail_query(CID, EntityKind::Show, "cc003");
        assert_eq!(show.path, "shows/show.json");
        assert_eq!(show.get("show_id"), Some("cc003"));
    }

    #[test]
    fn test_keyword_queries() {
        let video = build_keyword_query(CID, EntityKind::Video, "猫", "", "history", "relevance", 20);
        assert_eq!(video.path, "searches/video/by_keyword.json");
        assert_eq!(video.get("period"), Some("history"));
        assert_eq!(video.get("category"), Some(""));
        assert_eq!(video.get("unite"), None);

        let show = build_keyword_query(CID, EntityKind::Show, "猫", "动漫", "0", "view-count", 20);
        assert_eq!(show.path, "searches/show/by_keyword.json");
        assert_eq!(show.get("unite"), Some("0"));
        assert_eq!(show.get("period"), None);
    }

    #[test]
    fn test_comment_query() {
        let spec = build_comment_query(CID, "XMTI5", 20);
        assert_eq!(spec.path, "comments/by_video.json");
        assert_eq!(spec.get("video_id"), Some("XMTI5"));
        assert_eq!(spec.get("count"), Some("20"));
        assert_eq!(spec.get("client_id"), Some(CID));
    }

    #[test]
    fn test_default_orders() {
        assert_eq!(default_order(EntityKind::Video), "published");
        assert_eq!(default_order(EntityKind::Show), "view-today-count");
    }
}
