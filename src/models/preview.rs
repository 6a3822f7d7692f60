//! Detail previews for a single video or show

use serde::Serialize;
use std::path::Path;

use crate::services::format::{format_count, format_duration};
use crate::services::youku::{Comment, ShowDetail, VideoDetail};

#[derive(Debug, Clone, Serialize)]
pub struct PreviewHeader {
    pub title: String,
    pub subtitle: String,
}

/// Playable source with its poster frame
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewMedia {
    pub source: String,
    pub screenshot: String,
    pub share_uri: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoRow {
    pub label: String,
    pub value: String,
}

impl InfoRow {
    fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PreviewAction {
    pub id: String,
    pub label: String,
}

impl PreviewAction {
    fn play(label: &str) -> Self {
        Self {
            id: "play".to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentView {
    pub id: String,
    pub author: String,
    pub subtitle: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Icon for the client a comment was posted from
pub fn comment_icon(source_name: &str, asset_dir: &Path) -> Option<String> {
    let relative = if source_name.contains("优酷") {
        "icon.png"
    } else if source_name.contains("新浪") {
        "data/weibo.png"
    } else if source_name.contains("ndroid") {
        "data/android.png"
    } else if source_name.contains("iPhone") || source_name.contains("iPad") {
        "data/apple.png"
    } else {
        return None;
    };

    Some(asset_dir.join(relative).to_string_lossy().into_owned())
}

impl CommentView {
    pub fn from_comment(comment: &Comment, asset_dir: &Path) -> Self {
        Self {
            id: comment.id.clone(),
            author: comment.user.name.clone(),
            subtitle: format!("{}   {}", comment.published, comment.source.name),
            content: comment.content.clone(),
            icon: comment_icon(&comment.source.name, asset_dir),
        }
    }
}

/// Video detail with screenshots and latest comments
#[derive(Debug, Clone, Serialize)]
pub struct VideoPreview {
    pub header: PreviewHeader,
    pub media: PreviewMedia,
    pub info: Vec<InfoRow>,
    pub gallery: Vec<String>,
    pub description: String,
    pub actions: Vec<PreviewAction>,
    pub comments: Vec<CommentView>,
}

impl VideoPreview {
    pub fn build(detail: &VideoDetail, comments: &[Comment], asset_dir: &Path) -> Self {
        let video = &detail.video;

        let description = if detail.description.is_empty() {
            "无".to_string()
        } else {
            detail.description.clone()
        };

        Self {
            header: PreviewHeader {
                title: video.title.clone(),
                subtitle: format!("时长: {}", format_duration(video.duration)),
            },
            media: PreviewMedia {
                source: video.link.clone(),
                screenshot: video.big_thumbnail.clone(),
                share_uri: video.link.clone(),
            },
            info: vec![
                InfoRow::new("类型", video.category.as_str()),
                InfoRow::new("标签", detail.tags.as_str()),
                InfoRow::new("发布时间", video.published.as_str()),
                InfoRow::new("总播放数", format_count(video.view_count)),
                InfoRow::new(
                    "评论/收藏",
                    format!("{} / {}", video.comment_count, video.favorite_count),
                ),
                InfoRow::new("顶/踩", format!("{} / {}", video.up_count, video.down_count)),
            ],
            gallery: detail
                .screenshots
                .iter()
                .map(|s| s.best_url().to_string())
                .collect(),
            description,
            actions: vec![PreviewAction::play("播放")],
            comments: comments
                .iter()
                .map(|c| CommentView::from_comment(c, asset_dir))
                .collect(),
        }
    }
}

/// Show detail
#[derive(Debug, Clone, Serialize)]
pub struct ShowPreview {
    pub header: PreviewHeader,
    pub media: PreviewMedia,
    pub info: Vec<InfoRow>,
    pub description: String,
    pub actions: Vec<PreviewAction>,
}

impl ShowPreview {
    pub fn build(detail: &ShowDetail) -> Self {
        let show = &detail.show;

        let screenshot = if detail.thumbnail_large.is_empty() {
            show.thumbnail.clone()
        } else {
            detail.thumbnail_large.clone()
        };

        Self {
            header: PreviewHeader {
                title: show.name.clone(),
                subtitle: format!("评分: {:.1}", show.score),
            },
            media: PreviewMedia {
                source: show.play_link.clone(),
                screenshot,
                share_uri: show.play_link.clone(),
            },
            info: vec![
                InfoRow::new("类型", detail.genre.as_str()),
                InfoRow::new("地区", detail.area.as_str()),
                InfoRow::new("上映", show.released.as_str()),
                InfoRow::new(
                    "更新至/总集数",
                    format!("{} / {}", show.episode_updated, show.episode_count),
                ),
                InfoRow::new(
                    "周播放/总播放",
                    format!(
                        "{} / {}",
                        format_count(detail.view_week_count),
                        format_count(show.view_count)
                    ),
                ),
                InfoRow::new(
                    "评论/收藏",
                    format!(
                        "{} / {}",
                        format_count(detail.comment_count),
                        format_count(detail.favorite_count)
                    ),
                ),
                InfoRow::new(
                    "顶/踩",
                    format!(
                        "{} / {}",
                        format_count(detail.up_count),
                        format_count(detail.down_count)
                    ),
                ),
            ],
            description: detail.description.clone(),
            actions: vec![PreviewAction::play("分集播放")],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::youku::types::{CommentSource, Screenshot, Show, User, Video};

    fn comment(id: &str, source: &str) -> Comment {
        Comment {
            id: id.to_string(),
            content: "好看".to_string(),
            published: "2015-06-20 10:00:00".to_string(),
            user: User {
                name: "viewer".to_string(),
                ..Default::default()
            },
            source: CommentSource {
                name: source.to_string(),
                link: String::new(),
            },
        }
    }

    #[test]
    fn test_comment_icon() {
        let dir = Path::new("/opt/youku");

        assert_eq!(comment_icon("优酷网", dir).as_deref(), Some("/opt/youku/icon.png"));
        assert_eq!(comment_icon("新浪微博", dir).as_deref(), Some("/opt/youku/data/weibo.png"));
        assert_eq!(comment_icon("Android", dir).as_deref(), Some("/opt/youku/data/android.png"));
        assert_eq!(comment_icon("android客户端", dir).as_deref(), Some("/opt/youku/data/android.png"));
        assert_eq!(comment_icon("iPad", dir).as_deref(), Some("/opt/youku/data/apple.png"));
        assert_eq!(comment_icon("iPhone客户端", dir).as_deref(), Some("/opt/youku/data/apple.png"));
        assert_eq!(comment_icon("Windows Phone", dir), None);
        assert_eq!(comment_icon("", dir), None);
    }

    #[test]
    fn test_video_preview() {
        let detail = VideoDetail {
            video: Video {
                id: "XMTI5".to_string(),
                title: "Clip".to_string(),
                link: "http://v.youku.com/XMTI5".to_string(),
                big_thumbnail: "http://img/big.jpg".to_string(),
                duration: 65.0,
                category: "音乐".to_string(),
                view_count: 20_000,
                comment_count: 12,
                favorite_count: 3,
                up_count: 40,
                down_count: 1,
                ..Default::default()
            },
            tags: "live,rock".to_string(),
            screenshots: vec![
                Screenshot {
                    url: "http://img/1.jpg".to_string(),
                    ..Default::default()
                },
                Screenshot {
                    url: "http://img/2.jpg".to_string(),
                    big_url: "http://img/2b.jpg".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let comments = vec![comment("1", "优酷网"), comment("2", "unknown")];

        let preview = VideoPreview::build(&detail, &comments, Path::new("/opt/youku"));

        assert_eq!(preview.header.title, "Clip");
        assert_eq!(preview.header.subtitle, "时长: 1:05");
        assert_eq!(preview.media.source, "http://v.youku.com/XMTI5");
        assert_eq!(preview.media.screenshot, "http://img/big.jpg");
        assert_eq!(preview.info[0], InfoRow::new("类型", "音乐"));
        assert_eq!(preview.info[3], InfoRow::new("总播放数", "2.00万"));
        assert_eq!(preview.info[4], InfoRow::new("评论/收藏", "12 / 3"));
        assert_eq!(preview.info[5], InfoRow::new("顶/踩", "40 / 1"));
        assert_eq!(preview.gallery, vec!["http://img/1.jpg", "http://img/2b.jpg"]);
        assert_eq!(preview.description, "无");
        assert_eq!(preview.actions[0].label, "播放");

        assert_eq!(preview.comments.len(), 2);
        assert_eq!(preview.comments[0].author, "viewer");
        assert_eq!(preview.comments[0].subtitle, "2015-06-20 10:00:00   优酷网");
        assert_eq!(preview.comments[0].icon.as_deref(), Some("/opt/youku/icon.png"));
        assert_eq!(preview.comments[1].icon, None);
    }

    #[test]
    fn test_show_preview() {
        let detail = ShowDetail {
            show: Show {
                id: "cc003".to_string(),
                name: "Drama".to_string(),
                play_link: "http://v.youku.com/play/cc003".to_string(),
                thumbnail: "http://img/small.jpg".to_string(),
                episode_updated: "20".to_string(),
                episode_count: 40,
                view_count: 150_000_000,
                score: 8.66,
                released: "2015-06-01".to_string(),
                ..Default::default()
            },
            genre: "古装".to_string(),
            area: "大陆".to_string(),
            view_week_count: 5_000,
            comment_count: 12_000,
            favorite_count: 8,
            up_count: 100,
            down_count: 2,
            description: "A drama".to_string(),
            ..Default::default()
        };

        let preview = ShowPreview::build(&detail);

        assert_eq!(preview.header.subtitle, "评分: 8.7");
        assert_eq!(preview.media.source, "http://v.youku.com/play/cc003");
        assert_eq!(preview.media.screenshot, "http://img/small.jpg");
        assert_eq!(preview.info[0], InfoRow::new("类型", "古装"));
        assert_eq!(preview.info[1], InfoRow::new("地区", "大陆"));
        assert_eq!(preview.info[3], InfoRow::new("更新至/总集数", "20 / 40"));
        assert_eq!(preview.info[4], InfoRow::new("周播放/总播放", "5000 / 1.50亿"));
        assert_eq!(preview.info[5], InfoRow::new("评论/收藏", "1.20万 / 8"));
        assert_eq!(preview.description, "A drama");
        assert_eq!(preview.actions[0].label, "分集播放");
    }

    #[test]
    fn test_show_preview_prefers_large_thumbnail() {
        let detail = ShowDetail {
            show: Show {
                thumbnail: "http://img/small.jpg".to_string(),
                ..Default::default()
            },
            thumbnail_large: "http://img/large.jpg".to_string(),
            ..Default::default()
        };

        assert_eq!(ShowPreview::build(&detail).media.screenshot, "http://img/large.jpg");
    }
}
