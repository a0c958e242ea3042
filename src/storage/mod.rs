//! Storage abstractions for club record persistence.
//!
//! A run produces one JSON document: an array of club records in listing
//! order. Each write replaces the previous document.

pub mod local;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::ClubRecord;

// Re-export for convenience
pub use local::LocalStorage;

/// Metadata about a storage write operation.
#[derive(Debug, Clone)]
pub struct WriteMetadata {
    /// Number of records written
    pub club_count: usize,
    /// Where the document landed
    pub location: String,
    /// Timestamp of the write
    pub timestamp: DateTime<Utc>,
}

/// Trait for club record storage backends.
#[async_trait]
pub trait ClubStorage: Send + Sync {
    /// Replace the stored document with `clubs`.
    async fn write_clubs(&self, clubs: &[ClubRecord]) -> Result<WriteMetadata>;

    /// Load the stored document, `None` if nothing has been written yet.
    async fn load_clubs(&self) -> Result<Option<Vec<ClubRecord>>>;

    /// Human-readable location of the document.
    fn location(&self) -> String;
}
