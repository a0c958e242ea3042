//! Club record data structures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One club as it appears in the output document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClubRecord {
    /// Fields read from the listing page
    pub basic_info: BasicInfo,

    /// Present only when the listing item carried a link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_info: Option<DetailOutcome>,
}

impl ClubRecord {
    pub fn new(basic_info: BasicInfo) -> Self {
        Self {
            basic_info,
            detailed_info: None,
        }
    }

    /// Whether the detail page fetch for this club failed.
    pub fn is_failed(&self) -> bool {
        matches!(self.detailed_info, Some(DetailOutcome::Failed { .. }))
    }
}

/// Listing page fields. Missing elements serialize as `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BasicInfo {
    pub name: Option<String>,
    pub link: Option<String>,
    pub image: Option<String>,
}

/// Result of visiting a club's detail page.
///
/// `Failed` is listed first so that `{"error": ...}` is not swallowed by the
/// all-optional `Details` shape when deserializing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum DetailOutcome {
    Failed { error: String },
    Details(DetailRecord),
}

/// Fields harvested from a detail page. Empty categories are omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetailRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfo>,

    /// Platform name to profile links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_media: Option<BTreeMap<String, Vec<String>>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,

    /// Whitelisted meta tag name to content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

/// Contact details found anywhere in the page source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phones: Option<Vec<String>>,
}

impl ContactInfo {
    /// Build contact info, returning `None` when neither list has entries.
    pub fn from_lists(emails: Vec<String>, phones: Vec<String>) -> Option<Self> {
        let info = Self {
            emails: non_empty(emails),
            phones: non_empty(phones),
        };
        (info.emails.is_some() || info.phones.is_some()).then_some(info)
    }
}

/// `None` for an empty vector.
pub(crate) fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}
