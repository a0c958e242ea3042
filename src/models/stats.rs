//! Run statistics.

use chrono::{DateTime, Utc};

/// Counters collected over one crawl run.
#[derive(Debug, Clone)]
pub struct CrawlStats {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Listing items encountered
    pub club_count: usize,
    /// Detail pages fetched and parsed
    pub detail_success: usize,
    /// Detail pages recorded as errors
    pub detail_failures: usize,
    /// Listing items without a link, never visited
    pub without_link: usize,
}

impl CrawlStats {
    pub fn started(start_time: DateTime<Utc>) -> Self {
        Self {
            start_time,
            end_time: start_time,
            club_count: 0,
            detail_success: 0,
            detail_failures: 0,
            without_link: 0,
        }
    }

    /// Wall-clock seconds between start and end.
    pub fn elapsed_secs(&self) -> i64 {
        (self.end_time - self.start_time).num_seconds()
    }

    /// Share of visited detail pages that succeeded, 1.0 when none were visited.
    pub fn success_rate(&self) -> f64 {
        let attempted = self.detail_success + self.detail_failures;
        if attempted == 0 {
            return 1.0;
        }
        self.detail_success as f64 / attempted as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_success_rate() {
        let mut stats = CrawlStats::started(Utc::now());
        assert_eq!(stats.success_rate(), 1.0);

        stats.detail_success = 3;
        stats.detail_failures = 1;
        assert!((stats.success_rate() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_elapsed_secs() {
        let start = Utc::now();
        let mut stats = CrawlStats::started(start);
        stats.end_time = start + Duration::seconds(42);
        assert_eq!(stats.elapsed_secs(), 42);
    }
}
