// src/models/mod.rs

//! Domain models for the crawler application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod club;
mod config;
mod stats;

// Re-export all public types
pub use club::{BasicInfo, ClubRecord, ContactInfo, DetailOutcome, DetailRecord};
pub(crate) use club::non_empty;
pub use config::{
    Config, CrawlerConfig, ExtractionConfig, OutputConfig, SocialPlatform, SourceConfig,
};
pub use stats::CrawlStats;
