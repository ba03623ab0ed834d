// src/config.rs
//! Environment-driven configuration for the crawler and its data files.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

const DEFAULT_PROXY_URL: &str = "http://localhost:5000";
const DEFAULT_CRAWL_INTERVAL_SECS: u64 = 300;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the MCP-LinkedIn proxy service.
    pub proxy_url: String,
    /// Directory holding the flat JSON data files.
    pub data_dir: PathBuf,
    pub search: SearchConfig,
    /// Pause between crawl cycles.
    pub crawl_interval: Duration,
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub keywords: String,
    pub location: String,
    pub limit: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            keywords: "Software Engineer".to_string(),
            location: "San Francisco".to_string(),
            limit: 25,
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment, falling back to defaults.
    pub fn load() -> Result<Self> {
        let proxy_url =
            std::env::var("LINKEDIN_MCP_URL").unwrap_or_else(|_| DEFAULT_PROXY_URL.to_string());

        let data_dir = std::env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        let mut search = SearchConfig::default();
        if let Ok(keywords) = std::env::var("CRAWL_KEYWORDS") {
            search.keywords = keywords;
        }
        if let Ok(location) = std::env::var("CRAWL_LOCATION") {
            search.location = location;
        }
        if let Ok(limit) = std::env::var("CRAWL_LIMIT") {
            search.limit = limit
                .parse()
                .context("CRAWL_LIMIT must be a positive integer")?;
        }

        let crawl_interval = match std::env::var("CRAWL_INTERVAL_SECS") {
            Ok(secs) => Duration::from_secs(
                secs.parse()
                    .context("CRAWL_INTERVAL_SECS must be a number of seconds")?,
            ),
            Err(_) => Duration::from_secs(DEFAULT_CRAWL_INTERVAL_SECS),
        };

        info!("Proxy URL: {}", proxy_url);
        info!("Data directory: {}", data_dir.display());

        Ok(Self {
            proxy_url,
            data_dir,
            search,
            crawl_interval,
        })
    }

    pub fn jobs_path(&self) -> PathBuf {
        self.data_dir.join("jobs.json")
    }

    pub fn credentials_path(&self) -> PathBuf {
        self.data_dir.join("linkedin_credentials.json")
    }

    pub async fn ensure_directories(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .with_context(|| {
                format!(
                    "Failed to create data directory: {}",
                    self.data_dir.display()
                )
            })
    }
}
