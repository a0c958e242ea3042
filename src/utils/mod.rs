//! Utility functions and helpers.

pub mod http;
pub mod text;
pub mod url;

pub use self::url::resolve_url;
pub use text::clean_text;
