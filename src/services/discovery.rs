//! Discovery Service
//!
//! Composes upstream listings into card sections and previews: the home page,
//! department browsing, keyword search and the aggregated-keyword view.
//!
//! Upstream calls are issued one after another; a failing call contributes an
//! empty section instead of failing the page.

use std::path::Path;
use tracing::{debug, info};

use crate::config::DisplaySettings;
use crate::models::card::highlight_first;
use crate::models::{CardLayout, CardSection, CardSize, ResultCard, ShowPreview, VideoPreview};
use crate::services::categories::{CategoryTree, DepartmentId};
use crate::services::picker::{
    pick_label, plan_aggregate, plan_home, popular_order, Chooser, SectionStyle,
};
use crate::services::youku::query::default_order;
use crate::services::youku::{EntityKind, YoukuClient};

/// Number of items in the aggregated-keyword section
pub const AGGREGATE_COUNT: u32 = 10;

/// One category listing rendered as cards
#[allow(clippy::too_many_arguments)]
pub async fn list_cards(
    client: &YoukuClient,
    kind: EntityKind,
    category: &str,
    genre: &str,
    period: &str,
    orderby: &str,
    page: u32,
    count: u32,
) -> Vec<ResultCard> {
    match kind {
        EntityKind::Video => client
            .videos_by_category(category, genre, period, orderby, page, count)
            .await
            .iter()
            .map(ResultCard::from_video)
            .collect(),
        EntityKind::Show => client
            .shows_by_category(category, genre, orderby, page, count)
            .await
            .iter()
            .map(ResultCard::from_show)
            .collect(),
    }
}

fn period_for(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Video => "today",
        EntityKind::Show => "",
    }
}

// ============================================================================
// Home & browse
// ============================================================================

/// Randomly composed home page
pub async fn home(
    client: &YoukuClient,
    tree: &CategoryTree,
    chooser: &mut impl Chooser,
    size: CardSize,
) -> Vec<CardSection> {
    let plan = plan_home(tree, chooser);
    info!(sections = plan.len(), "Composing home page");

    let mut sections = Vec::new();
    for section in plan {
        let cards = list_cards(
            client,
            section.kind,
            &section.category,
            "",
            section.period(),
            section.orderby(),
            1,
            section.count,
        )
        .await;

        match section.style {
            SectionStyle::Top => sections.push(CardSection::new(
                section.id,
                section.title,
                CardLayout::Carousel,
                cards,
            )),
            SectionStyle::Regular => sections.push(CardSection::new(
                section.id,
                section.title,
                CardLayout::Grid { size },
                cards,
            )),
            SectionStyle::Highlighted => {
                sections.extend(highlight_first(section.id, &section.title, cards, size))
            }
        }
    }

    sections
}

/// Sections for a department without a search query
///
/// Home renders the composed home page. A kind department lists today's items
/// of its category and genre; a show department without category features a
/// random show category.
pub async fn browse(
    client: &YoukuClient,
    tree: &CategoryTree,
    department: &DepartmentId,
    orderby: Option<&str>,
    chooser: &mut impl Chooser,
    settings: &DisplaySettings,
) -> Vec<CardSection> {
    let (kind, category, genre) = match department {
        DepartmentId::Home => return home(client, tree, chooser, settings.item_size).await,
        DepartmentId::Kind {
            kind,
            category,
            genre,
        } => (*kind, category.clone(), genre.as_str()),
    };

    let category = if kind == EntityKind::Show && category.is_empty() {
        pick_label(tree, kind, chooser, &[]).unwrap_or_default()
    } else {
        category
    };

    let orderby = orderby
        .filter(|o| !o.is_empty())
        .unwrap_or_else(|| default_order(kind));

    debug!(kind = %kind, category = %category, genre, orderby, "Browsing department");

    let cards = list_cards(
        client,
        kind,
        &category,
        genre,
        period_for(kind),
        orderby,
        1,
        settings.result_count,
    )
    .await;

    let title = match kind {
        EntityKind::Video => format!("{}视频", category),
        EntityKind::Show => format!("{}节目", category),
    };

    vec![CardSection::new(
        kind.as_str(),
        title,
        CardLayout::Grid {
            size: settings.item_size,
        },
        cards,
    )]
}

// ============================================================================
// Search
// ============================================================================

async fn search_kind(
    client: &YoukuClient,
    kind: EntityKind,
    keyword: &str,
    category: &str,
    count: u32,
) -> CardSection {
    let (id, title, cards): (&str, String, Vec<ResultCard>) = match kind {
        EntityKind::Video => (
            "query_video",
            format!("{} 相关{}视频", keyword, category),
            client
                .search_videos(keyword, category, "history", "relevance", count)
                .await
                .iter()
                .map(ResultCard::from_video)
                .collect(),
        ),
        EntityKind::Show => (
            "query_show",
            format!("{} 相关{}节目", keyword, category),
            client
                .search_shows(keyword, category, 0, "view-count", count)
                .await
                .iter()
                .map(ResultCard::from_show)
                .collect(),
        ),
    };

    CardSection::new(id, title, CardLayout::SearchList, cards)
}

/// Keyword search scoped by department; home searches both kinds
pub async fn search(
    client: &YoukuClient,
    keyword: &str,
    department: &DepartmentId,
    settings: &DisplaySettings,
) -> Vec<CardSection> {
    let kinds: &[EntityKind] = match department.kind() {
        None => &[EntityKind::Video, EntityKind::Show],
        Some(EntityKind::Video) => &[EntityKind::Video],
        Some(EntityKind::Show) => &[EntityKind::Show],
    };

    let mut sections = Vec::with_capacity(kinds.len());
    for kind in kinds {
        sections.push(
            search_kind(
                client,
                *kind,
                keyword,
                department.category(),
                settings.result_count,
            )
            .await,
        );
    }
    sections
}

// ============================================================================
// Aggregated keywords
// ============================================================================

/// Section shown when embedded in an aggregating front end
///
/// A query string turns into a video keyword search; otherwise the keywords
/// select a kind and category to feature. Unsupported keywords yield nothing.
pub async fn aggregate(
    client: &YoukuClient,
    tree: &CategoryTree,
    keywords: &[String],
    query: &str,
    chooser: &mut impl Chooser,
    settings: &DisplaySettings,
) -> Vec<CardSection> {
    if !query.is_empty() {
        return vec![
            search_kind(client, EntityKind::Video, query, "", settings.result_count).await,
        ];
    }

    let Some((kind, category)) = plan_aggregate(keywords, tree, chooser) else {
        return Vec::new();
    };
    info!(kind = %kind, category = %category, "Aggregated section");

    let cards = list_cards(
        client,
        kind,
        &category,
        "",
        period_for(kind),
        popular_order(kind),
        1,
        AGGREGATE_COUNT,
    )
    .await;

    vec![CardSection::new(
        "aggregate",
        category,
        CardLayout::Grid {
            size: settings.item_size,
        },
        cards,
    )]
}

// ============================================================================
// Previews
// ============================================================================

/// Video detail plus its latest comments; `None` when the video is unavailable
pub async fn preview_video(
    client: &YoukuClient,
    video_id: &str,
    settings: &DisplaySettings,
    asset_dir: &Path,
) -> Option<VideoPreview> {
    let detail = client.video_detail(video_id).await?;
    let comments = client
        .comments_by_video(&detail.video.id, settings.comment_count)
        .await;

    Some(VideoPreview::build(&detail, &comments, asset_dir))
}

/// Show detail; `None` when the show is unavailable
pub async fn preview_show(client: &YoukuClient, show_id: &str) -> Option<ShowPreview> {
    let detail = client.show_detail(show_id).await?;
    Some(ShowPreview::build(&detail))
}
