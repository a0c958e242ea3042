//! Club listing page parser.
//!
//! Extracts name, link and cover image for every listing item on the campus
//! clubs page.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::Result;
use crate::models::{BasicInfo, Config};
use crate::services::selectors::parse_selector;
use crate::utils::clean_text;
use crate::utils::text::visible_text;
use crate::utils::url::{is_real_image, resolve_url};

const ITEM_SELECTOR: &str = "div.listing-item";
const LINK_SELECTOR: &str = "a.geodir-category-img_item";
const IMAGE_SELECTOR: &str = "img";
const NAME_SELECTOR: &str = "div.geodir-category-content";

/// Parser for the club listing page.
pub struct ListingParser {
    base_url: Url,
    placeholder_image: String,
    item_sel: Selector,
    link_sel: Selector,
    image_sel: Selector,
    name_sel: Selector,
}

impl ListingParser {
    /// Create a parser resolving relative links against `config.source.base_url`.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(&config.source.base_url)?,
            placeholder_image: config.extraction.placeholder_image.clone(),
            item_sel: parse_selector(ITEM_SELECTOR)?,
            link_sel: parse_selector(LINK_SELECTOR)?,
            image_sel: parse_selector(IMAGE_SELECTOR)?,
            name_sel: parse_selector(NAME_SELECTOR)?,
        })
    }

    /// Parse every listing item, in document order.
    pub fn parse(&self, html: &str) -> Vec<BasicInfo> {
        let document = Html::parse_document(html);
        document
            .select(&self.item_sel)
            .map(|item| self.parse_item(&item))
            .collect()
    }

    fn parse_item(&self, item: &ElementRef<'_>) -> BasicInfo {
        let link = item
            .select(&self.link_sel)
            .next()
            .and_then(|a| a.value().attr("href"))
            .and_then(|href| resolve_url(&self.base_url, href));

        let image = item
            .select(&self.image_sel)
            .next()
            .and_then(|img| img.value().attr("src"))
            .filter(|src| is_real_image(src, &self.placeholder_image))
            .and_then(|src| resolve_url(&self.base_url, src));

        let name = item
            .select(&self.name_sel)
            .next()
            .and_then(|div| clean_text(&visible_text(div).collect::<String>()));

        BasicInfo { name, link, image }
    }
}
