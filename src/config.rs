use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL prepended to path-only URLs, without a trailing slash.
    pub website_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let website_url = env::var("WEBSITE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());

        Self {
            site: SiteConfig {
                website_url: website_url.trim_end_matches('/').to_string(),
            },
        }
    }
}

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Install a process-wide configuration. Fails if one is already set.
pub fn init(config: Config) -> AppResult<()> {
    CONFIG
        .set(config)
        .map_err(|_| AppError::Configuration("global configuration already set".to_string()))
}

/// The process-wide configuration, loaded from the environment on first use.
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_website_url_has_no_trailing_slash() {
        let config = Config::from_env();
        assert!(!config.site.website_url.ends_with('/'));
    }
}
