//! End-of-run console reporting.

use crate::error::Result;
use crate::models::ClubRecord;
use crate::pipeline::CrawlOutcome;
use crate::utils::text::truncate_chars;

/// Pretty JSON of `record`, cut to `max_chars` and suffixed with `...`.
pub fn preview(record: &ClubRecord, max_chars: usize) -> Result<String> {
    let json = serde_json::to_string_pretty(record)?;
    let (head, _) = truncate_chars(&json, max_chars);
    Ok(format!("{head}..."))
}

/// Log the run summary.
pub fn log_summary(outcome: &CrawlOutcome) {
    let stats = &outcome.stats;

    log::info!("Scraping completed!");
    log::info!("Total clubs processed: {}", stats.club_count);
    log::info!(
        "    Details fetched: {} ({} failed, {} without link)",
        stats.detail_success,
        stats.detail_failures,
        stats.without_link
    );
    log::info!("    Success rate: {:.1}%", stats.success_rate() * 100.0);
    log::info!("    Elapsed: {}s", stats.elapsed_secs());

    match &outcome.written {
        Some(meta) => log::info!("    Output: {} ({})", meta.location, meta.timestamp),
        None => log::warn!("    Output: not written"),
    }
}
