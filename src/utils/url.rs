// src/utils/url.rs

//! URL manipulation utilities.

use url::Url;

/// Resolve a potentially relative URL against a base URL.
///
/// An empty href resolves to the base itself. Returns `None` when the base
/// cannot join `href`.
///
/// # Examples
/// ```
/// use club_crawler::utils::url::resolve_url;
/// use url::Url;
///
/// let base = Url::parse("https://clubs.pes.edu/campus/").unwrap();
/// assert_eq!(
///     resolve_url(&base, "/club/aeolus/"),
///     Some("https://clubs.pes.edu/club/aeolus/".to_string())
/// );
/// ```
pub fn resolve_url(base: &Url, href: &str) -> Option<String> {
    base.join(href.trim()).ok().map(|u| u.to_string())
}

/// Whether an image source is embedded inline rather than linked.
pub fn is_data_uri(src: &str) -> bool {
    src.starts_with("data:")
}

/// Whether an image source should be kept: linked, and not the placeholder cover.
pub fn is_real_image(src: &str, placeholder: &str) -> bool {
    !src.is_empty() && !is_data_uri(src) && (placeholder.is_empty() || !src.contains(placeholder))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://clubs.pes.edu/club/aeolus/").unwrap()
    }

    #[test]
    fn test_resolve_absolute_url() {
        assert_eq!(
            resolve_url(&base(), "https://cdn.example.com/a.png"),
            Some("https://cdn.example.com/a.png".to_string())
        );
    }

    #[test]
    fn test_resolve_absolute_path() {
        assert_eq!(
            resolve_url(&base(), "/static/logo.png"),
            Some("https://clubs.pes.edu/static/logo.png".to_string())
        );
    }

    #[test]
    fn test_resolve_relative_path() {
        assert_eq!(
            resolve_url(&base(), "gallery/1.jpg"),
            Some("https://clubs.pes.edu/club/aeolus/gallery/1.jpg".to_string())
        );
    }

    #[test]
    fn test_resolve_empty_href_is_base() {
        assert_eq!(resolve_url(&base(), ""), Some(base().to_string()));
        assert_eq!(resolve_url(&base(), "   "), Some(base().to_string()));
    }

    #[test]
    fn test_resolve_unjoinable_href() {
        assert_eq!(resolve_url(&base(), "http://[::1"), None);
    }

    #[test]
    fn test_is_real_image() {
        let placeholder = "/static/images/def-cover.jpg";
        assert!(is_real_image("/media/club.png", placeholder));
        assert!(!is_real_image("data:image/png;base64,AAAA", placeholder));
        assert!(!is_real_image(
            "https://clubs.pes.edu/static/images/def-cover.jpg",
            placeholder
        ));
        assert!(!is_real_image("", placeholder));
    }
}
