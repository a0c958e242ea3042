//! Prioritized CSS selector chains.
//!
//! A chain holds selectors in priority order. Lookups walk the chain and stop
//! at the first selector that yields an acceptable element.

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};

/// Parse a CSS selector, mapping failures to [`AppError::Selector`].
pub fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

/// An ordered list of selectors evaluated first-match-wins.
#[derive(Debug, Clone)]
pub struct SelectorChain {
    rules: Vec<(String, Selector)>,
}

impl SelectorChain {
    /// Compile every selector, failing on the first invalid one.
    pub fn new<S: AsRef<str>>(selectors: &[S]) -> Result<Self> {
        let rules = selectors
            .iter()
            .map(|s| {
                let s = s.as_ref();
                parse_selector(s).map(|sel| (s.to_string(), sel))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// First element in document order matched by the highest-priority
    /// selector that matches anything.
    pub fn first<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>> {
        self.rules
            .iter()
            .find_map(|(_, sel)| document.select(sel).next())
    }

    /// Walk the chain, taking the first match of each selector, and return
    /// the first value `accept` produces.
    ///
    /// A selector whose first match is rejected hands over to the next one;
    /// later matches of the same selector are not consulted.
    pub fn first_accepted<'a, T>(
        &self,
        document: &'a Html,
        mut accept: impl FnMut(ElementRef<'a>) -> Option<T>,
    ) -> Option<T> {
        self.rules.iter().find_map(|(source, sel)| {
            let element = document.select(sel).next()?;
            let value = accept(element);
            if value.is_none() {
                log::debug!("Selector '{}' matched but was rejected", source);
            }
            value
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selector_valid() {
        assert!(parse_selector("div.listing-item").is_ok());
        assert!(parse_selector("div[class*='content']").is_ok());
    }

    #[test]
    fn test_parse_selector_invalid() {
        assert!(parse_selector("[[invalid").is_err());
    }

    #[test]
    fn test_chain_rejects_invalid_member() {
        assert!(SelectorChain::new(&["h1", "[[invalid"]).is_err());
    }

    #[test]
    fn test_first_honors_priority_not_document_order() {
        let doc = Html::parse_document(
            "<html><head><title>Page</title></head><body><h1>Heading</h1></body></html>",
        );
        let chain = SelectorChain::new(&["h1", "title"]).unwrap();
        let el = chain.first(&doc).unwrap();
        assert_eq!(el.value().name(), "h1");
    }

    #[test]
    fn test_first_falls_through_to_later_rule() {
        let doc = Html::parse_document("<html><head><title>Page</title></head></html>");
        let chain = SelectorChain::new(&["h1.entry-title", "h1", "title"]).unwrap();
        let el = chain.first(&doc).unwrap();
        assert_eq!(el.value().name(), "title");
    }

    #[test]
    fn test_first_accepted_skips_rejected_rule() {
        let doc = Html::parse_document(
            "<div class='a'>short</div><div class='a'>a much longer text</div><div class='b'>long enough</div>",
        );
        let chain = SelectorChain::new(&[".a", ".b"]).unwrap();
        let text = chain.first_accepted(&doc, |el| {
            let text: String = el.text().collect();
            (text.len() > 5).then_some(text)
        });
        // Only the first `.a` is considered before moving on to `.b`.
        assert_eq!(text.as_deref(), Some("long enough"));
    }

    #[test]
    fn test_no_match_returns_none() {
        let doc = Html::parse_document("<p>nothing</p>");
        let chain = SelectorChain::new(&["h1", ".title"]).unwrap();
        assert!(chain.first(&doc).is_none());
        assert!(chain.first_accepted(&doc, |el| Some(el)).is_none());
    }
}
