//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::services::{ContactScanner, SelectorChain};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP and crawling behavior settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// Where the club listing lives
    #[serde(default)]
    pub source: SourceConfig,

    /// Detail page extraction rules
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Output document settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::validation("crawler.timeout_secs must be > 0"));
        }
        if let Some(agent) = &self.crawler.user_agent {
            if agent.trim().is_empty() {
                return Err(AppError::validation("crawler.user_agent is empty"));
            }
        }
        url::Url::parse(&self.source.listing_url)
            .map_err(|e| AppError::validation(format!("source.listing_url: {e}")))?;
        url::Url::parse(&self.source.base_url)
            .map_err(|e| AppError::validation(format!("source.base_url: {e}")))?;
        if self.extraction.title_selectors.is_empty() {
            return Err(AppError::validation("No title selectors defined"));
        }
        if self.extraction.description_selectors.is_empty() {
            return Err(AppError::validation("No description selectors defined"));
        }
        if self.output.path.trim().is_empty() {
            return Err(AppError::validation("output.path is empty"));
        }

        SelectorChain::new(&self.extraction.title_selectors)?;
        SelectorChain::new(&self.extraction.description_selectors)?;
        ContactScanner::new(&self.extraction.social_platforms)?;
        Ok(())
    }
}

/// HTTP client and crawling behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Delay before each detail page request in milliseconds
    #[serde(default = "defaults::request_delay")]
    pub request_delay_ms: u64,

    /// User-Agent header; the client default is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            timeout_secs: defaults::timeout(),
            request_delay_ms: defaults::request_delay(),
            user_agent: None,
        }
    }
}

/// Listing page location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Page enumerating all clubs
    #[serde(default = "defaults::listing_url")]
    pub listing_url: String,

    /// Host that relative listing links and images are joined with
    #[serde(default = "defaults::base_url")]
    pub base_url: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            listing_url: defaults::listing_url(),
            base_url: defaults::base_url(),
        }
    }
}

/// Detail page extraction rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Title selectors in priority order
    #[serde(default = "defaults::title_selectors")]
    pub title_selectors: Vec<String>,

    /// Description selectors in priority order
    #[serde(default = "defaults::description_selectors")]
    pub description_selectors: Vec<String>,

    /// A description candidate must be longer than this many characters
    #[serde(default = "defaults::min_description_chars")]
    pub min_description_chars: usize,

    /// Image path that marks the site's default cover
    #[serde(default = "defaults::placeholder_image")]
    pub placeholder_image: String,

    /// Meta tag names (or properties) copied into the metadata map
    #[serde(default = "defaults::meta_keys")]
    pub meta_keys: Vec<String>,

    /// Social platform URL patterns, matched case-insensitively
    #[serde(default = "defaults::social_platforms")]
    pub social_platforms: Vec<SocialPlatform>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            title_selectors: defaults::title_selectors(),
            description_selectors: defaults::description_selectors(),
            min_description_chars: defaults::min_description_chars(),
            placeholder_image: defaults::placeholder_image(),
            meta_keys: defaults::meta_keys(),
            social_platforms: defaults::social_platforms(),
        }
    }
}

/// A social platform and the URL pattern identifying its links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialPlatform {
    pub name: String,
    pub pattern: String,
}

/// Output document settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path of the JSON document, overwritten on every run
    #[serde(default = "defaults::output_path")]
    pub path: String,

    /// Number of characters of the first record echoed to the console
    #[serde(default = "defaults::preview_chars")]
    pub preview_chars: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: defaults::output_path(),
            preview_chars: defaults::preview_chars(),
        }
    }
}

mod defaults {
    use super::SocialPlatform;

    // Crawler defaults
    pub fn timeout() -> u64 {
        10
    }
    pub fn request_delay() -> u64 {
        1000
    }

    // Source defaults
    pub fn listing_url() -> String {
        "https://clubs.pes.edu/campus/pesu-ec-campus/".into()
    }
    pub fn base_url() -> String {
        "https://clubs.pes.edu".into()
    }

    // Extraction defaults
    pub fn title_selectors() -> Vec<String> {
        [
            "h1.entry-title",
            "h1",
            ".geodir-entry-title",
            ".listing-title h1",
            "title",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }
    pub fn description_selectors() -> Vec<String> {
        [
            ".geodir-entry-content",
            ".listing-content",
            ".entry-content",
            ".club-description",
            "div[class*='content']",
            "div[class*='description']",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }
    pub fn min_description_chars() -> usize {
        50
    }
    pub fn placeholder_image() -> String {
        "/static/images/def-cover.jpg".into()
    }
    pub fn meta_keys() -> Vec<String> {
        vec![
            "description".into(),
            "keywords".into(),
            "og:description".into(),
        ]
    }
    pub fn social_platforms() -> Vec<SocialPlatform> {
        [
            ("instagram", r"https?://(?:www\.)?instagram\.com/[\w\./]+"),
            ("facebook", r"https?://(?:www\.)?facebook\.com/[\w\./]+"),
            ("twitter", r"https?://(?:www\.)?twitter\.com/[\w\./]+"),
            ("linkedin", r"https?://(?:www\.)?linkedin\.com/[\w\./]+"),
            ("youtube", r"https?://(?:www\.)?youtube\.com/[\w\./]+"),
            ("github", r"https?://(?:www\.)?github\.com/[\w\./]+"),
        ]
        .into_iter()
        .map(|(name, pattern)| SocialPlatform {
            name: name.to_string(),
            pattern: pattern.to_string(),
        })
        .collect()
    }

    // Output defaults
    pub fn output_path() -> String {
        "clubs_data.json".into()
    }
    pub fn preview_chars() -> usize {
        1000
    }
}
