//! Youku Open API Types
//!
//! Type definitions for Youku Open API v2 responses. Every field is decoded
//! leniently (see [`super::flex`]) because upstream types vary per endpoint.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::flex;

/// Entity kinds the upstream serves lists of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Video,
    Show,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Video => "video",
            EntityKind::Show => "show",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "video" | "videos" => Ok(EntityKind::Video),
            "show" | "shows" => Ok(EntityKind::Show),
            other => Err(format!("unknown entity kind: {}", other)),
        }
    }
}

/// Something that arrives in an upstream list envelope
pub trait Entity: DeserializeOwned {
    /// Key of the item array in the list envelope
    const LIST_KEY: &'static str;

    fn id(&self) -> &str;
}

// ============================================================================
// Video Types
// ============================================================================

/// Video as returned by by_category / by_keyword
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Video {
    #[serde(default, deserialize_with = "flex::text")]
    pub id: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub title: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub link: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub thumbnail: String,
    #[serde(default, rename = "bigThumbnail", deserialize_with = "flex::text")]
    pub big_thumbnail: String,
    /// Seconds
    #[serde(default, deserialize_with = "flex::real")]
    pub duration: f64,
    #[serde(default, deserialize_with = "flex::text")]
    pub category: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub state: String,
    #[serde(default, deserialize_with = "flex::integer")]
    pub view_count: i64,
    #[serde(default, deserialize_with = "flex::integer")]
    pub favorite_count: i64,
    #[serde(default, deserialize_with = "flex::integer")]
    pub comment_count: i64,
    #[serde(default, deserialize_with = "flex::integer")]
    pub up_count: i64,
    #[serde(default, deserialize_with = "flex::integer")]
    pub down_count: i64,
    #[serde(default, deserialize_with = "flex::text")]
    pub published: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub favorite_time: String,
}

impl Entity for Video {
    const LIST_KEY: &'static str = "videos";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Screenshot attached to a video detail (`ext=thumbnails`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Screenshot {
    #[serde(default, deserialize_with = "flex::integer")]
    pub seq: i64,
    #[serde(default, deserialize_with = "flex::text")]
    pub url: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub big_url: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub small_url: String,
    #[serde(default, deserialize_with = "flex::integer")]
    pub is_cover: i64,
}

impl Screenshot {
    /// Largest available image
    pub fn best_url(&self) -> &str {
        if self.big_url.is_empty() {
            &self.url
        } else {
            &self.big_url
        }
    }
}

/// Detailed video information (from videos/show.json)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VideoDetail {
    #[serde(flatten)]
    pub video: Video,
    #[serde(default, deserialize_with = "flex::text")]
    pub created: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub description: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub player: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub public_type: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub copyright_type: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub tags: String,
    #[serde(default, rename = "thumbnails", deserialize_with = "flex::or_default")]
    pub screenshots: Vec<Screenshot>,
}

impl Entity for VideoDetail {
    const LIST_KEY: &'static str = "videos";

    fn id(&self) -> &str {
        &self.video.id
    }
}

// ============================================================================
// Show Types
// ============================================================================

/// Show (series, film, variety programme) as returned by by_category / by_keyword
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Show {
    #[serde(default, deserialize_with = "flex::text")]
    pub id: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub name: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub link: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub play_link: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub last_play_link: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub poster: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub thumbnail: String,
    #[serde(default, deserialize_with = "flex::or_default")]
    pub streamtypes: Vec<String>,
    #[serde(default, deserialize_with = "flex::integer")]
    pub episode_count: i64,
    /// Episode number or air date, depending on category
    #[serde(default, deserialize_with = "flex::text")]
    pub episode_updated: String,
    #[serde(default, deserialize_with = "flex::integer")]
    pub view_count: i64,
    #[serde(default, deserialize_with = "flex::score")]
    pub score: f64,
    #[serde(default, deserialize_with = "flex::integer")]
    pub paid: i64,
    #[serde(default, deserialize_with = "flex::text")]
    pub released: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub published: String,
}

impl Entity for Show {
    const LIST_KEY: &'static str = "shows";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Detailed show information (from shows/show.json)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ShowDetail {
    #[serde(flatten)]
    pub show: Show,
    #[serde(default, deserialize_with = "flex::text")]
    pub poster_large: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub thumbnail_large: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub genre: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub area: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub category: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub description: String,
    #[serde(default, deserialize_with = "flex::integer")]
    pub rank: i64,
    #[serde(default, deserialize_with = "flex::integer")]
    pub view_yesterday_count: i64,
    #[serde(default, deserialize_with = "flex::integer")]
    pub view_week_count: i64,
    #[serde(default, deserialize_with = "flex::integer")]
    pub comment_count: i64,
    #[serde(default, deserialize_with = "flex::integer")]
    pub favorite_count: i64,
    #[serde(default, deserialize_with = "flex::integer")]
    pub up_count: i64,
    #[serde(default, deserialize_with = "flex::integer")]
    pub down_count: i64,
}

impl Entity for ShowDetail {
    const LIST_KEY: &'static str = "shows";

    fn id(&self) -> &str {
        &self.show.id
    }
}

// ============================================================================
// Comment Types
// ============================================================================

/// Youku user, as embedded in comments
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct User {
    #[serde(default, deserialize_with = "flex::text")]
    pub id: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub name: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub link: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub avatar: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub avatar_large: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub gender: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub description: String,
    #[serde(default, deserialize_with = "flex::integer")]
    pub videos_count: i64,
    #[serde(default, deserialize_with = "flex::integer")]
    pub playlists_count: i64,
    #[serde(default, deserialize_with = "flex::integer")]
    pub favorites_count: i64,
    #[serde(default, deserialize_with = "flex::integer")]
    pub followers_count: i64,
    #[serde(default, deserialize_with = "flex::integer")]
    pub following_count: i64,
    #[serde(default, deserialize_with = "flex::integer")]
    pub statuses_count: i64,
    #[serde(default, deserialize_with = "flex::integer")]
    pub subscribe_count: i64,
    #[serde(default, deserialize_with = "flex::integer")]
    pub vv_count: i64,
    #[serde(default, deserialize_with = "flex::text")]
    pub regist_time: String,
}

/// Client the comment was posted from
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CommentSource {
    #[serde(default, deserialize_with = "flex::text")]
    pub name: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub link: String,
}

/// Video comment (from comments/by_video.json)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Comment {
    #[serde(default, deserialize_with = "flex::text")]
    pub id: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub content: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub published: String,
    #[serde(default, deserialize_with = "flex::or_default")]
    pub user: User,
    #[serde(default, deserialize_with = "flex::or_default")]
    pub source: CommentSource,
}

impl Entity for Comment {
    const LIST_KEY: &'static str = "comments";

    fn id(&self) -> &str {
        &self.id
    }
}

// ============================================================================
// Envelope Types
// ============================================================================

/// Decoded list envelope `{total, page, count, <plural>: [...]}`
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub total: i64,
    pub page: i64,
    pub count: i64,
    pub items: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            total: 0,
            page: 0,
            count: 0,
            items: Vec::new(),
        }
    }
}

/// Upstream error object `{"error": {"code": .., "type": .., "description": ..}}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, deserialize_with = "flex::integer")]
    pub code: i64,
    #[serde(default, rename = "type", deserialize_with = "flex::text")]
    pub kind: String,
    #[serde(default, deserialize_with = "flex::text")]
    pub description: String,
}
