//! Service layer for the crawler application.
//!
//! This module contains the business logic for:
//! - Listing page parsing (`ListingParser`)
//! - Detail page extraction (`DetailExtractor`)
//! - Raw-source contact and social link scans (`ContactScanner`)
//! - Prioritized selector fallback (`SelectorChain`)

mod details;
mod listing;
mod patterns;
mod selectors;

pub use details::DetailExtractor;
pub use listing::ListingParser;
pub use patterns::ContactScanner;
pub use selectors::{SelectorChain, parse_selector};
