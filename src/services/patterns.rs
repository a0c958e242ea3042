//! Regex scans over raw page source.
//!
//! Emails, phone numbers and social profile links are harvested from the
//! response text rather than the parsed DOM, so links hidden in scripts or
//! attributes are picked up too. Results are de-duplicated and sorted.

use std::collections::{BTreeMap, BTreeSet};

use regex::{Regex, RegexBuilder};

use crate::error::{AppError, Result};
use crate::models::SocialPlatform;

const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b";

// Indian mobile numbers with an optional +91 prefix, falling back to any ten
// digit run.
const PHONE_PATTERN: &str = r"(\+91[\s-]?)?[789]\d{9}|(\+91[\s-]?)?[0-9]{10}";

/// Compiled contact and social link patterns.
#[derive(Debug, Clone)]
pub struct ContactScanner {
    email: Regex,
    phone: Regex,
    social: Vec<(String, Regex)>,
}

impl ContactScanner {
    /// Compile the fixed contact patterns plus the given social platforms.
    ///
    /// Social patterns are matched case-insensitively.
    pub fn new(platforms: &[SocialPlatform]) -> Result<Self> {
        let social = platforms
            .iter()
            .map(|p| {
                RegexBuilder::new(&p.pattern)
                    .case_insensitive(true)
                    .build()
                    .map(|re| (p.name.clone(), re))
                    .map_err(|e| AppError::pattern(&p.pattern, e))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            email: compile(EMAIL_PATTERN)?,
            phone: compile(PHONE_PATTERN)?,
            social,
        })
    }

    /// Distinct email addresses in `text`, sorted.
    pub fn emails(&self, text: &str) -> Vec<String> {
        distinct_matches(&self.email, text)
    }

    /// Distinct phone number matches in `text`, sorted.
    ///
    /// Each entry is the full matched text, including any `+91` prefix.
    pub fn phones(&self, text: &str) -> Vec<String> {
        distinct_matches(&self.phone, text)
    }

    /// Distinct profile links per platform. Platforms without a hit are absent.
    pub fn social_links(&self, text: &str) -> BTreeMap<String, Vec<String>> {
        self.social
            .iter()
            .filter_map(|(name, re)| {
                let links = distinct_matches(re, text);
                (!links.is_empty()).then(|| (name.clone(), links))
            })
            .collect()
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| AppError::pattern(pattern, e))
}

fn distinct_matches(re: &Regex, text: &str) -> Vec<String> {
    re.find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExtractionConfig;

    fn scanner() -> ContactScanner {
        ContactScanner::new(&ExtractionConfig::default().social_platforms).unwrap()
    }

    #[test]
    fn test_emails_are_distinct() {
        let text = r#"Mail <a href="mailto:club@pes.edu">club@pes.edu</a> or head.of-club@gmail.com"#;
        assert_eq!(
            scanner().emails(text),
            vec!["club@pes.edu".to_string(), "head.of-club@gmail.com".to_string()]
        );
    }

    #[test]
    fn test_phones_with_and_without_prefix() {
        let text = "Call +91 9876543210 or 9876543210, office 0801234567.";
        assert_eq!(
            scanner().phones(text),
            vec![
                "+91 9876543210".to_string(),
                "0801234567".to_string(),
                "9876543210".to_string(),
            ]
        );
    }

    #[test]
    fn test_social_links_grouped_by_platform() {
        let text = r#"
            <a href="https://www.instagram.com/pes_robotics/">IG</a>
            <a href="HTTPS://INSTAGRAM.COM/pes_robotics_alt">IG alt</a>
            <a href="https://github.com/pesrobotics">code</a>
            <a href="https://www.instagram.com/pes_robotics/">IG again</a>
        "#;
        let links = scanner().social_links(text);

        assert_eq!(links.len(), 2);
        assert_eq!(
            links["instagram"],
            vec![
                "HTTPS://INSTAGRAM.COM/pes_robotics_alt".to_string(),
                "https://www.instagram.com/pes_robotics/".to_string(),
            ]
        );
        assert_eq!(links["github"], vec!["https://github.com/pesrobotics".to_string()]);
        assert!(!links.contains_key("facebook"));
    }

    #[test]
    fn test_scans_are_idempotent_and_order_independent() {
        let scanner = scanner();
        let a = "x@pes.edu y@pes.edu 9123456789 https://twitter.com/pes";
        let b = "https://twitter.com/pes 9123456789 y@pes.edu x@pes.edu x@pes.edu";

        assert_eq!(scanner.emails(a), scanner.emails(a));
        assert_eq!(scanner.emails(a), scanner.emails(b));
        assert_eq!(scanner.phones(a), scanner.phones(b));
        assert_eq!(scanner.social_links(a), scanner.social_links(b));
    }

    #[test]
    fn test_no_hits() {
        let scanner = scanner();
        assert!(scanner.emails("nothing here").is_empty());
        assert!(scanner.phones("12345").is_empty());
        assert!(scanner.social_links("https://example.com").is_empty());
    }
}
