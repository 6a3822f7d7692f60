use std::env;
use std::path::PathBuf;

use crate::models::CardSize;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,
    pub app_env: String,

    // Upstream
    pub api_root: String,
    pub client_id: String,
    pub user_agent: String,
    pub fetch_timeout_ms: u64,

    // Scope data (data/category.json and icons live here)
    pub scope_dir: PathBuf,

    // Display settings
    pub result_count: u32,
    pub comment_count: u32,
    pub item_size: CardSize,

    // Fixed seed for home/aggregate composition (random when unset)
    pub home_seed: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            // Server
            port: env::var("PORT")
                .unwrap_or_else(|_| "3002".to_string())
                .parse()
                .unwrap_or(3002),
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),

            // Upstream
            api_root: env::var("YOUKU_API_ROOT")
                .unwrap_or_else(|_| "https://openapi.youku.com/v2".to_string()),
            client_id: env::var("YOUKU_CLIENT_ID")
                .unwrap_or_else(|_| "7260506159958ac8".to_string()),
            user_agent: env::var("USER_AGENT")
                .unwrap_or_else(|_| format!("youku-discovery/{}", env!("CARGO_PKG_VERSION"))),
            fetch_timeout_ms: env::var("FETCH_TIMEOUT_MS")
                .unwrap_or_else(|_| "30000".to_string())
                .parse()
                .unwrap_or(30_000), // 30 seconds

            scope_dir: env::var("SCOPE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),

            // Display settings
            result_count: env::var("RESULT_COUNT")
                .unwrap_or_else(|_| "50".to_string())
                .parse()
                .unwrap_or(50),
            comment_count: env::var("COMMENT_COUNT")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .unwrap_or(20),
            item_size: env::var("ITEM_SIZE")
                .ok()
                .and_then(|v| CardSize::parse(&v))
                .unwrap_or_default(),

            home_seed: env::var("HOME_SEED").ok().and_then(|v| v.parse().ok()),
        }
    }

    /// Settings handed to the discovery layer for one request
    pub fn display(&self) -> DisplaySettings {
        DisplaySettings {
            result_count: self.result_count,
            comment_count: self.comment_count,
            item_size: self.item_size,
        }
    }
}

/// Display settings handed to the discovery layer
#[derive(Debug, Clone, Copy)]
pub struct DisplaySettings {
    pub result_count: u32,
    pub comment_count: u32,
    pub item_size: CardSize,
}
