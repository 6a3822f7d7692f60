//! Youku Open API Integration
//!
//! This module is the content query layer in front of the Youku Open API v2.
//!
//! # Overview
//!
//! - **Query**: turn (kind, category, genre, period, orderby, paging) into an
//!   upstream GET with every parameter present
//! - **Normalize**: decode list envelopes and detail objects, coercing the
//!   string-or-number fields into integers and reals
//! - **API Client**: one request per operation, with a strict `Result` layer
//!   and a silent-degrade layer on top
//!
//! # Endpoints
//!
//! ```text
//! videos/by_category.json           shows/by_category.json
//! videos/show.json                  shows/show.json
//! searches/video/by_keyword.json    searches/show/by_keyword.json
//! comments/by_video.json
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::services::youku::YoukuClient;
//!
//! let client = YoukuClient::from_config(&config)?;
//! let videos = client.videos_by_category("音乐", "", "today", "view-count", 1, 10).await;
//! ```

pub mod client;
pub mod flex;
pub mod normalize;
pub mod query;
pub mod types;

// Re-exports for convenience
pub use client::{YoukuClient, YoukuError};
pub use flex::Flex;
pub use query::{build_list_query, orders, QuerySpec};
pub use types::{Comment, Entity, EntityKind, Page, Show, ShowDetail, Video, VideoDetail};
