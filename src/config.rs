//! App Configuration
//!
//! Values baked in at build time from environment variables.

use std::str::FromStr;

use log::LevelFilter;

use crate::models::ItemId;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Inventory API root, without trailing slash
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    /// Read `INVENTORY_API_URL` and `INVENTORY_LOG_LEVEL` as set at compile time
    pub fn from_env() -> Self {
        Self::from_values(option_env!("INVENTORY_API_URL"), option_env!("INVENTORY_LOG_LEVEL"))
    }

    pub fn from_values(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let base = api_base_url
            .map(|u| u.trim().trim_end_matches('/'))
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);
        let log_level = log_level
            .and_then(|l| LevelFilter::from_str(l.trim()).ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);
        Self { api_base_url: base.to_string(), log_level }
    }

    pub fn inventory_url(&self) -> String {
        format!("{}/inventory", self.api_base_url)
    }

    pub fn item_url(&self, id: ItemId) -> String {
        format!("{}/inventory/{}", self.api_base_url, id)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
