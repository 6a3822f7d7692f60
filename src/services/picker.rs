//! Random section planning
//!
//! The home page and the aggregated-keyword view pick categories at random.
//! All randomness goes through [`Chooser`] so the plans can be reproduced in
//! tests (scripted chooser) or pinned in production (`HOME_SEED`).

use rand::Rng;
use tracing::debug;

use crate::services::categories::CategoryTree;
use crate::services::youku::EntityKind;

/// Shows in this category are never featured on the home page
pub const HOME_EXCLUDED_SHOW_CATEGORY: &str = "音乐";

/// Source of uniform choices
pub trait Chooser {
    /// Index in `0..len`; `len` is never 0
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng> Chooser for R {
    fn pick(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

fn choose<'a, T>(chooser: &mut impl Chooser, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(chooser.pick(items.len()))
}

fn coin_kind(chooser: &mut impl Chooser) -> EntityKind {
    if chooser.pick(2) == 0 {
        EntityKind::Video
    } else {
        EntityKind::Show
    }
}

/// Random category label of `kind`, never one of `exclude`
pub fn pick_label(
    tree: &CategoryTree,
    kind: EntityKind,
    chooser: &mut impl Chooser,
    exclude: &[&str],
) -> Option<String> {
    let candidates: Vec<&str> = tree
        .labels(kind)
        .into_iter()
        .filter(|label| !exclude.contains(label))
        .collect();

    choose(chooser, &candidates).map(|label| label.to_string())
}

// ============================================================================
// Home
// ============================================================================

/// How a planned section is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionStyle {
    /// Carousel of today's top items
    Top,
    /// Plain grid
    Regular,
    /// First card enlarged, remainder in a grid
    Highlighted,
}

/// One upstream list call and how to present it
#[derive(Debug, Clone, PartialEq)]
pub struct SectionPlan {
    pub id: &'static str,
    pub title: String,
    pub kind: EntityKind,
    pub category: String,
    pub count: u32,
    pub style: SectionStyle,
}

impl SectionPlan {
    fn new(
        id: &'static str,
        kind: EntityKind,
        category: String,
        count: u32,
        style: SectionStyle,
    ) -> Self {
        let title = match (style, kind) {
            (SectionStyle::Top, EntityKind::Video) => format!("今日{}视频TOP10", category),
            (SectionStyle::Top, EntityKind::Show) => format!("今日{}节目TOP10", category),
            (_, EntityKind::Video) => format!("{}视频", category),
            (_, EntityKind::Show) => format!("{}节目", category),
        };

        Self {
            id,
            title,
            kind,
            category,
            count,
            style,
        }
    }

    /// Video period for the listing; shows have none
    pub fn period(&self) -> &'static str {
        match self.kind {
            EntityKind::Video => "today",
            EntityKind::Show => "",
        }
    }

    pub fn orderby(&self) -> &'static str {
        popular_order(self.kind)
    }
}

/// Sort key for "popular today" listings
pub fn popular_order(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Video => "view-count",
        EntityKind::Show => "view-today-count",
    }
}

fn home_label(tree: &CategoryTree, kind: EntityKind, chooser: &mut impl Chooser) -> Option<String> {
    match kind {
        EntityKind::Video => pick_label(tree, kind, chooser, &[]),
        EntityKind::Show => pick_label(tree, kind, chooser, &[HOME_EXCLUDED_SHOW_CATEGORY]),
    }
}

/// Plan the four home sections
///
/// The top section features one kind at random and section one the other;
/// section two is always shows and section three always videos. A section
/// whose kind has no eligible category is left out.
pub fn plan_home(tree: &CategoryTree, chooser: &mut impl Chooser) -> Vec<SectionPlan> {
    let top_kind = coin_kind(chooser);
    let other_kind = match top_kind {
        EntityKind::Video => EntityKind::Show,
        EntityKind::Show => EntityKind::Video,
    };

    let layout = [
        ("home", top_kind, 10, SectionStyle::Top),
        ("section_one", other_kind, 9, SectionStyle::Regular),
        ("section_two", EntityKind::Show, 10, SectionStyle::Highlighted),
        ("section_three", EntityKind::Video, 10, SectionStyle::Highlighted),
    ];

    layout
        .into_iter()
        .filter_map(|(id, kind, count, style)| match home_label(tree, kind, chooser) {
            Some(category) => Some(SectionPlan::new(id, kind, category, count, style)),
            None => {
                debug!(section = id, kind = %kind, "no category available, skipping section");
                None
            }
        })
        .collect()
}

// ============================================================================
// Aggregated keywords
// ============================================================================

fn one_of(chooser: &mut impl Chooser, labels: &[&str]) -> String {
    choose(chooser, labels).copied().unwrap_or_default().to_string()
}

/// Kind and category to feature for a set of aggregated keywords
///
/// Keywords are checked in a fixed priority order; the first supported one
/// wins. `None` when no keyword is supported.
pub fn plan_aggregate(
    keywords: &[String],
    tree: &CategoryTree,
    chooser: &mut impl Chooser,
) -> Option<(EntityKind, String)> {
    let has = |key: &str| keywords.iter().any(|k| k == key);

    let plan = if has("videos") || has("video") {
        let kind = coin_kind(chooser);
        (kind, pick_label(tree, kind, chooser, &[])?)
    } else if has("music") {
        (EntityKind::Video, "音乐".to_string())
    } else if has("news") {
        (
            EntityKind::Video,
            one_of(chooser, &["资讯", "娱乐", "体育资讯", "游戏资讯"]),
        )
    } else if has("gaming") {
        (EntityKind::Video, "游戏".to_string())
    } else if has("kids") {
        (EntityKind::Video, one_of(chooser, &["动漫", "亲子"]))
    } else if has("educational") {
        (coin_kind(chooser), "教育".to_string())
    } else if has("finance") {
        (EntityKind::Video, "财经资讯".to_string())
    } else if has("humor") {
        (EntityKind::Video, "搞笑".to_string())
    } else if has("lifestyle") {
        (EntityKind::Video, "生活".to_string())
    } else if has("movies") {
        match coin_kind(chooser) {
            EntityKind::Video => (EntityKind::Video, one_of(chooser, &["电影", "微电影"])),
            EntityKind::Show => (EntityKind::Show, "电影".to_string()),
        }
    } else if has("science") {
        (EntityKind::Video, "科技".to_string())
    } else if has("shopping") {
        (EntityKind::Video, one_of(chooser, &["时尚", "广告"]))
    } else if has("sports") {
        (coin_kind(chooser), "体育".to_string())
    } else if has("travel") {
        (EntityKind::Video, "旅游".to_string())
    } else if has("tv") {
        let kind = coin_kind(chooser);
        (kind, one_of(chooser, &["电视剧", "网剧", "综艺", "纪录片"]))
    } else if has("comics") {
        (EntityKind::Video, "动漫".to_string())
    } else {
        debug!(?keywords, "no supported aggregated keyword");
        return None;
    };

    Some(plan)
}
