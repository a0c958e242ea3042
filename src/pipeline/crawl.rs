// src/pipeline/crawl.rs

//! Club crawling pipeline.
//!
//! Listing page -> one detail page per linked club -> single JSON write.
//! Requests are issued one at a time with a fixed delay before each detail
//! fetch.

use std::time::Duration;

use chrono::Utc;
use reqwest::Client;

use crate::error::{AppError, Result};
use crate::models::{BasicInfo, ClubRecord, Config, CrawlStats, DetailOutcome};
use crate::services::{DetailExtractor, ListingParser};
use crate::storage::{ClubStorage, WriteMetadata};
use crate::utils::http::fetch_text;

/// Everything a crawl run produced.
#[derive(Debug)]
pub struct CrawlOutcome {
    /// One record per listing item, in listing order
    pub clubs: Vec<ClubRecord>,
    pub stats: CrawlStats,
    /// `None` when the document could not be written
    pub written: Option<WriteMetadata>,
}

/// Run the club crawler and write the result to `storage`.
///
/// Fails only when the listing page cannot be fetched or the extraction rules
/// do not compile. Detail page failures are recorded on the affected club and
/// a failed write is logged, leaving `written` unset.
pub async fn run_crawler(
    config: &Config,
    client: &Client,
    storage: &dyn ClubStorage,
) -> Result<CrawlOutcome> {
    let mut stats = CrawlStats::started(Utc::now());

    let listing = ListingParser::new(config)?;
    let extractor = DetailExtractor::new(&config.extraction)?;

    let listing_url = &config.source.listing_url;
    log::info!("Fetching club listing from {}", listing_url);
    let html = fetch_text(client, listing_url)
        .await
        .map_err(|e| AppError::listing_fetch(listing_url, e))?;

    let items = listing.parse(&html);
    log::info!(
        "Found {} clubs on listing page, extracting details...",
        items.len()
    );

    let delay = Duration::from_millis(config.crawler.request_delay_ms);
    let mut clubs = Vec::with_capacity(items.len());

    for basic_info in items {
        let record = crawl_club(basic_info, &extractor, client, delay, &mut stats).await;
        clubs.push(record);
    }

    stats.club_count = clubs.len();
    stats.end_time = Utc::now();

    let written = match storage.write_clubs(&clubs).await {
        Ok(meta) => {
            log::info!(
                "Successfully saved {} clubs to {}",
                meta.club_count,
                meta.location
            );
            Some(meta)
        }
        Err(e) => {
            log::error!("Error saving to JSON: {}", e);
            None
        }
    };

    Ok(CrawlOutcome {
        clubs,
        stats,
        written,
    })
}

/// Build one club record, visiting its detail page when it has a link.
async fn crawl_club(
    basic_info: BasicInfo,
    extractor: &DetailExtractor,
    client: &Client,
    delay: Duration,
    stats: &mut CrawlStats,
) -> ClubRecord {
    let Some(link) = basic_info.link.clone() else {
        log::debug!(
            "No link for club {:?}, skipping details",
            basic_info.name.as_deref().unwrap_or("<unnamed>")
        );
        stats.without_link += 1;
        return ClubRecord::new(basic_info);
    };

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let outcome = match extractor.fetch(client, &link).await {
        Ok(details) => {
            stats.detail_success += 1;
            DetailOutcome::Details(details)
        }
        Err(e) => {
            stats.detail_failures += 1;
            log::warn!("Error scraping {}: {}", link, e);
            DetailOutcome::Failed {
                error: e.to_string(),
            }
        }
    };

    ClubRecord {
        basic_info,
        detailed_info: Some(outcome),
    }
}
