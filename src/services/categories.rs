//! Category tree and departments
//!
//! The category tree is static data shipped next to the binary in
//! `data/category.json`. Category and genre labels double as display text and
//! as the upstream `category` / `genre` parameter values.
//!
//! Departments are the browsable hierarchy derived from it:
//!
//! ```text
//! ""  首页
//! ├── video  视频
//! │   └── video_<category>
//! │       └── video_<category>_<genre>
//! └── show   节目
//!     └── show_<category>
//!         └── show_<category>_<genre>
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::services::youku::EntityKind;

/// Relative location of the category file inside the scope directory
pub const CATEGORY_FILE: &str = "data/category.json";

/// A genre inside a category
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Genre {
    #[serde(default)]
    pub term: String,
    pub label: String,
    #[serde(default)]
    pub lang: String,
}

/// A top-level category of one kind
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(from = "CategoryEntry")]
pub struct Category {
    pub term: String,
    pub label: String,
    pub lang: String,
    pub genre: Vec<Genre>,
}

/// Category as stored on disk
///
/// Video entries ship their genres as `genres`, show entries as `genre`. An
/// entry carrying both keys uses `genre` unless it is empty.
#[derive(Deserialize)]
struct CategoryEntry {
    #[serde(default)]
    term: String,
    label: String,
    #[serde(default)]
    lang: String,
    #[serde(default)]
    genre: Vec<Genre>,
    #[serde(default)]
    genres: Vec<Genre>,
}

impl From<CategoryEntry> for Category {
    fn from(entry: CategoryEntry) -> Self {
        let genre = if entry.genre.is_empty() {
            entry.genres
        } else {
            entry.genre
        };

        Self {
            term: entry.term,
            label: entry.label,
            lang: entry.lang,
            genre,
        }
    }
}

/// Categories of both kinds
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CategoryTree {
    #[serde(default)]
    pub video: Vec<Category>,
    #[serde(default)]
    pub show: Vec<Category>,
}

impl CategoryTree {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid category data")
    }

    /// Read `<scope_dir>/data/category.json`
    pub async fn load(scope_dir: &Path) -> Result<Self> {
        let path = scope_dir.join(CATEGORY_FILE);
        let json = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Load, or an empty tree when the file is missing or broken
    pub async fn load_or_empty(scope_dir: &Path) -> Self {
        Self::load(scope_dir).await.unwrap_or_else(|e| {
            tracing::warn!("Category tree unavailable: {:#}", e);
            Self::default()
        })
    }

    pub fn categories(&self, kind: EntityKind) -> &[Category] {
        match kind {
            EntityKind::Video => &self.video,
            EntityKind::Show => &self.show,
        }
    }

    pub fn labels(&self, kind: EntityKind) -> Vec<&str> {
        self.categories(kind)
            .iter()
            .map(|c| c.label.as_str())
            .collect()
    }

    /// Full department hierarchy rooted at the home department
    pub fn departments(&self) -> Department {
        let branch = |kind: EntityKind, label: &str| Department {
            id: kind.as_str().to_string(),
            label: label.to_string(),
            children: self
                .categories(kind)
                .iter()
                .map(|category| {
                    let id = format!("{}_{}", kind, category.label);
                    Department {
                        children: category
                            .genre
                            .iter()
                            .map(|genre| Department {
                                id: format!("{}_{}", id, genre.label),
                                label: genre.label.clone(),
                                children: Vec::new(),
                            })
                            .collect(),
                        id,
                        label: category.label.clone(),
                    }
                })
                .collect(),
        };

        Department {
            id: String::new(),
            label: "首页".to_string(),
            children: vec![
                branch(EntityKind::Video, "视频"),
                branch(EntityKind::Show, "节目"),
            ],
        }
    }
}

/// A node of the department hierarchy
#[derive(Debug, Clone, Serialize)]
pub struct Department {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Department>,
}

/// Parsed department id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepartmentId {
    Home,
    Kind {
        kind: EntityKind,
        category: String,
        genre: String,
    },
}

impl DepartmentId {
    /// Split `<kind>[_<category>[_<genre>]]`; anything else is home
    pub fn parse(id: &str) -> Self {
        let mut parts = id.split('_');
        let kind = match parts.next().unwrap_or_default() {
            "video" => EntityKind::Video,
            "show" => EntityKind::Show,
            _ => return DepartmentId::Home,
        };

        DepartmentId::Kind {
            kind,
            category: parts.next().unwrap_or_default().to_string(),
            genre: parts.next().unwrap_or_default().to_string(),
        }
    }

    pub fn kind(&self) -> Option<EntityKind> {
        match self {
            DepartmentId::Home => None,
            DepartmentId::Kind { kind, .. } => Some(*kind),
        }
    }

    pub fn category(&self) -> &str {
        match self {
            DepartmentId::Home => "",
            DepartmentId::Kind { category, .. } => category,
        }
    }
}
