// src/pipeline/validate.rs

use crate::error::Result;
use crate::models::Config;

/// Validate the configuration and log what a crawl would use.
pub fn run_validate(config: &Config) -> Result<()> {
    log::info!("Validating configuration...");

    if let Err(e) = config.validate() {
        log::error!("Config validation failed: {}", e);
        return Err(e);
    }

    log::info!("✓ Config OK");
    log::info!("    Listing URL: {}", config.source.listing_url);
    log::info!("    Base URL: {}", config.source.base_url);
    log::info!("    Timeout: {}s", config.crawler.timeout_secs);
    log::info!("    Request delay: {}ms", config.crawler.request_delay_ms);
    log::info!(
        "    Selectors: {} title, {} description",
        config.extraction.title_selectors.len(),
        config.extraction.description_selectors.len()
    );
    log::info!(
        "    Social platforms: {}",
        config.extraction.social_platforms.len()
    );
    log::info!("    Output: {}", config.output.path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_validate_default() {
        assert!(run_validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_run_validate_reports_error() {
        let mut config = Config::default();
        config.extraction.description_selectors.clear();
        assert!(run_validate(&config).is_err());
    }
}
