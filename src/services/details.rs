//! Club detail page extractor.
//!
//! Fetches a club's page and assembles a [`DetailRecord`] from prioritized
//! selector chains (title, description), regex scans over the raw source
//! (contacts, social links), and plain element sweeps (images, meta tags).

use std::collections::{BTreeMap, BTreeSet};

use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{ContactInfo, DetailRecord, ExtractionConfig, non_empty};
use crate::services::patterns::ContactScanner;
use crate::services::selectors::{SelectorChain, parse_selector};
use crate::utils::http::fetch_text;
use crate::utils::text::{joined_text, visible_text};
use crate::utils::url::{is_real_image, resolve_url};
use crate::utils::clean_text;

/// Extractor for club detail pages.
pub struct DetailExtractor {
    title_chain: SelectorChain,
    description_chain: SelectorChain,
    min_description_chars: usize,
    placeholder_image: String,
    meta_keys: Vec<String>,
    scanner: ContactScanner,
    image_sel: Selector,
    meta_sel: Selector,
}

impl DetailExtractor {
    /// Compile the extraction rules.
    pub fn new(config: &ExtractionConfig) -> Result<Self> {
        Ok(Self {
            title_chain: SelectorChain::new(&config.title_selectors)?,
            description_chain: SelectorChain::new(&config.description_selectors)?,
            min_description_chars: config.min_description_chars,
            placeholder_image: config.placeholder_image.clone(),
            meta_keys: config.meta_keys.clone(),
            scanner: ContactScanner::new(&config.social_platforms)?,
            image_sel: parse_selector("img")?,
            meta_sel: parse_selector("meta")?,
        })
    }

    /// Fetch a detail page and extract its fields.
    ///
    /// Transport failures and non-success statuses become
    /// [`AppError::DetailFetch`].
    pub async fn fetch(&self, client: &Client, url: &str) -> Result<DetailRecord> {
        log::info!("Fetching details for: {}", url);

        let html = fetch_text(client, url)
            .await
            .map_err(|e| AppError::detail_fetch(url, e))?;
        let page_url = Url::parse(url)?;

        Ok(self.extract(&html, &page_url))
    }

    /// Extract every field from a page's source.
    pub fn extract(&self, html: &str, page_url: &Url) -> DetailRecord {
        let document = Html::parse_document(html);

        let emails = self.scanner.emails(html);
        let phones = self.scanner.phones(html);
        let social = self.scanner.social_links(html);

        DetailRecord {
            title: self.title(&document),
            description: self.description(&document),
            contact: ContactInfo::from_lists(emails, phones),
            social_media: (!social.is_empty()).then_some(social),
            images: non_empty(self.images(&document, page_url)),
            metadata: self.metadata(&document),
        }
    }

    /// Text of the first title match. A match with no text still ends the
    /// search and leaves the title unset.
    fn title(&self, document: &Html) -> Option<String> {
        self.title_chain
            .first(document)
            .and_then(|el| clean_text(&visible_text(el).collect::<String>()))
    }

    /// First candidate whose visible text is longer than the threshold.
    fn description(&self, document: &Html) -> Option<String> {
        self.description_chain.first_accepted(document, |el| {
            let text = joined_text(&el);
            if text.chars().count() > self.min_description_chars {
                clean_text(&text)
            } else {
                None
            }
        })
    }

    fn images(&self, document: &Html, page_url: &Url) -> Vec<String> {
        document
            .select(&self.image_sel)
            .filter_map(|img| img.value().attr("src"))
            .filter(|src| is_real_image(src, &self.placeholder_image))
            .filter_map(|src| resolve_url(page_url, src))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Whitelisted `meta` name/property to content. Later tags overwrite
    /// earlier ones with the same key.
    fn metadata(&self, document: &Html) -> Option<BTreeMap<String, String>> {
        let mut metadata = BTreeMap::new();
        for meta in document.select(&self.meta_sel) {
            let attrs = meta.value();
            let key = attrs
                .attr("name")
                .filter(|s| !s.is_empty())
                .or_else(|| attrs.attr("property"));
            let (Some(key), Some(content)) = (key, attrs.attr("content")) else {
                continue;
            };
            if content.is_empty() || !self.meta_keys.iter().any(|k| k == key) {
                continue;
            }
            metadata.insert(key.to_string(), content.to_string());
        }
        (!metadata.is_empty()).then_some(metadata)
    }
}
