//! Pipeline entry points for crawler operations.
//!
//! - `run_crawler`: Fetch the listing, visit every club page, write the document
//! - `run_validate`: Check configuration before a run

pub mod crawl;
pub mod report;
pub mod validate;

pub use crawl::{CrawlOutcome, run_crawler};
pub use validate::run_validate;
