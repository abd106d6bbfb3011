use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_store_url")]
    pub store_url: String,

    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_minutes: u32,

    #[serde(default = "default_sample_news_limit")]
    pub sample_news_limit: usize,

    #[serde(default = "default_country_limit")]
    pub country_distribution_limit: usize,
}

fn default_store_url() -> String {
    "redis://127.0.0.1:6379/0".to_string()
}

fn default_refresh_interval() -> u32 {
    30
}

fn default_sample_news_limit() -> usize {
    50
}

fn default_country_limit() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_url: default_store_url(),
            refresh_interval_minutes: default_refresh_interval(),
            sample_news_limit: default_sample_news_limit(),
            country_distribution_limit: default_country_limit(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path())?;

        // Deployments point at the store through the environment
        if let Ok(url) = std::env::var("REDIS_URL") {
            if !url.is_empty() {
                config.store_url = url;
            }
        }

        Ok(config)
    }

    fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("econews-watch")
            .join("config.toml")
    }

    pub fn refresh_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(u64::from(self.refresh_interval_minutes) * 60)
    }
}
