use serde::{Deserialize, Serialize};

use crate::services::format::{format_count, format_duration};
use crate::services::youku::{EntityKind, Show, Video};

/// Grid card size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSize {
    Large,
    #[default]
    Medium,
    Small,
}

impl CardSize {
    /// Accepts the names as well as the legacy indices 0/1/2
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "large" | "0" => Some(CardSize::Large),
            "medium" | "1" => Some(CardSize::Medium),
            "small" | "2" => Some(CardSize::Small),
            _ => None,
        }
    }
}

/// How a section of cards is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "template", rename_all = "camelCase")]
pub enum CardLayout {
    /// Horizontal strip of large art
    Carousel,
    Grid { size: CardSize },
    /// Single enlarged card
    Journal,
    /// Compact rows for search results
    SearchList,
}

/// One browsable item
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultCard {
    pub id: String,
    pub kind: EntityKind,
    pub title: String,
    pub art: String,
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub attributes: Vec<String>,
}

impl ResultCard {
    pub fn from_video(video: &Video) -> Self {
        Self {
            id: video.id.clone(),
            kind: EntityKind::Video,
            title: video.title.clone(),
            art: video.thumbnail.clone(),
            uri: video.link.clone(),
            subtitle: None,
            attributes: vec![
                format!("🕒{}", format_duration(video.duration)),
                format!("🔥{}", format_count(video.view_count)),
            ],
        }
    }

    pub fn from_show(show: &Show) -> Self {
        Self {
            id: show.id.clone(),
            kind: EntityKind::Show,
            title: show.name.clone(),
            art: show.thumbnail.clone(),
            uri: show.link.clone(),
            subtitle: Some(format!("更新 {}", show.episode_updated)),
            attributes: vec![
                format!("★{:.2}", show.score),
                format!("🔥{}", format_count(show.view_count)),
            ],
        }
    }
}

/// A titled group of cards
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSection {
    pub id: String,
    pub title: String,
    pub layout: CardLayout,
    pub cards: Vec<ResultCard>,
}

impl CardSection {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        layout: CardLayout,
        cards: Vec<ResultCard>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            layout,
            cards,
        }
    }
}

/// Enlarge the first card of a list
///
/// With more than one card the first goes into a titled `Journal` section
/// (`<id>_large`) and the rest into an untitled grid. Otherwise everything
/// stays in one titled grid.
pub fn highlight_first(
    id: &str,
    title: &str,
    mut cards: Vec<ResultCard>,
    size: CardSize,
) -> Vec<CardSection> {
    let grid = CardLayout::Grid { size };

    if cards.len() <= 1 {
        return vec![CardSection::new(id, title, grid, cards)];
    }

    let rest = cards.split_off(1);
    vec![
        CardSection::new(format!("{}_large", id), title, CardLayout::Journal, cards),
        CardSection::new(id, "", grid, rest),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn video(id: &str) -> Video {
        Video {
            id: id.to_string(),
            title: format!("title {}", id),
            thumbnail: "http://img/t.jpg".to_string(),
            link: format!("http://v.youku.com/{}", id),
            duration: 3665.0,
            view_count: 123_456,
            ..Default::default()
        }
    }

    #[test]
    fn test_card_size_parse() {
        assert_eq!(CardSize::parse("large"), Some(CardSize::Large));
        assert_eq!(CardSize::parse(" Small "), Some(CardSize::Small));
        assert_eq!(CardSize::parse("1"), Some(CardSize::Medium));
        assert_eq!(CardSize::parse("2"), Some(CardSize::Small));
        assert_eq!(CardSize::parse("huge"), None);
        assert_eq!(CardSize::default(), CardSize::Medium);
    }

    #[test]
    fn test_video_card() {
        let card = ResultCard::from_video(&video("XM1"));

        assert_eq!(card.kind, EntityKind::Video);
        assert_eq!(card.title, "title XM1");
        assert_eq!(card.uri, "http://v.youku.com/XM1");
        assert_eq!(card.subtitle, None);
        assert_eq!(card.attributes, vec!["🕒1:01:05", "🔥12.35万"]);
    }

    #[test]
    fn test_show_card() {
        let show = Show {
            id: "cc003".to_string(),
            name: "Drama".to_string(),
            episode_updated: "20".to_string(),
            score: 8.7,
            view_count: 512,
            ..Default::default()
        };
        let card = ResultCard::from_show(&show);

        assert_eq!(card.kind, EntityKind::Show);
        assert_eq!(card.title, "Drama");
        assert_eq!(card.subtitle.as_deref(), Some("更新 20"));
        assert_eq!(card.attributes, vec!["★8.70", "🔥512"]);
    }

    #[test]
    fn test_highlight_first_splits() {
        let cards: Vec<_> = ["a", "b", "c"].iter().map(|id| ResultCard::from_video(&video(id))).collect();
        let sections = highlight_first("section_three", "体育视频", cards, CardSize::Small);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].id, "section_three_large");
        assert_eq!(sections[0].title, "体育视频");
        assert_eq!(sections[0].layout, CardLayout::Journal);
        assert_eq!(sections[0].cards.len(), 1);
        assert_eq!(sections[0].cards[0].id, "a");
        assert_eq!(sections[1].id, "section_three");
        assert_eq!(sections[1].title, "");
        assert_eq!(sections[1].layout, CardLayout::Grid { size: CardSize::Small });
        assert_eq!(sections[1].cards.len(), 2);
    }

    #[test]
    fn test_highlight_first_single_card() {
        let sections = highlight_first("section_two", "综艺节目", vec![ResultCard::from_video(&video("a"))], CardSize::Medium);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "综艺节目");
        assert_eq!(sections[0].cards.len(), 1);
    }

    #[test]
    fn test_section_serialization() {
        let section = CardSection::new("video", "视频", CardLayout::Grid { size: CardSize::Large }, vec![]);
        let value = serde_json::to_value(&section).unwrap();

        assert_eq!(value["layout"], json!({"template": "grid", "size": "large"}));
        assert_eq!(
            serde_json::to_value(CardLayout::SearchList).unwrap(),
            json!({"template": "searchList"})
        );
    }
}
