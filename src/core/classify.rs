//! Page classification from the document location.
//!
//! The classification is computed once per page runtime and shared by
//! reference with every downstream consumer (width policy, resource
//! planning, analytics context, sidekick gating).

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

use super::{Language, PageType};

/// Reserved section keywords that force `post` classification.
const RESERVED_SECTIONS: &[&str] = &["drafts", "publish", "fpost", "documentation"];

/// `YYYY/MM/DD` anywhere in the joined segment path marks a dated post.
static DATED_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}/[0-9]{2}/[0-9]{2}").unwrap());

// ============================================================================
// PageLocation
// ============================================================================

/// The classifier's complete input: where the page lives, plus the
/// externally-set error-page flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLocation {
    pub host: String,
    /// Decoded path, with leading slash.
    pub path: String,
    /// Set by the host when the page is a synthesized error page.
    pub error_page: bool,
}

impl PageLocation {
    pub fn new(host: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            path: path.into(),
            error_page: false,
        }
    }

    /// Build from a full URL or a bare path.
    ///
    /// Query string and fragment are stripped; percent-encoding in the
    /// path is decoded. Unparseable input degrades to a host-less path.
    pub fn from_url(input: &str) -> Self {
        if let Ok(parsed) = Url::parse(input)
            && parsed.has_host()
        {
            return Self {
                host: parsed.host_str().unwrap_or_default().to_string(),
                path: decode_path(parsed.path()),
                error_page: false,
            };
        }

        let path = input.split(['?', '#']).next().unwrap_or(input);
        Self {
            host: String::new(),
            path: decode_path(path),
            error_page: false,
        }
    }

    pub fn with_error_page(mut self, error_page: bool) -> Self {
        self.error_page = error_page;
        self
    }
}

/// Decode percent-encoding, falling back to the raw path on invalid UTF-8.
fn decode_path(path: &str) -> String {
    percent_encoding::percent_decode_str(path)
        .decode_utf8()
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

// ============================================================================
// PageClassification
// ============================================================================

/// `{language, pageType}` pair derived once from the location.
///
/// Immutable after construction. Exactly one language and one page type
/// are active per page; both fall back to their defaults (`en`, `home`)
/// when the path yields no stronger match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageClassification {
    pub language: Language,
    pub page_type: PageType,
}

impl Default for PageClassification {
    fn default() -> Self {
        Self {
            language: Language::default(),
            page_type: PageType::default(),
        }
    }
}

impl PageClassification {
    /// Classify a location path into `{language, pageType}`.
    ///
    /// Rules, evaluated in fixed order:
    /// 1. An optional leading language segment is consumed as `language`;
    ///    language detection always runs before type detection.
    /// 2. The first remaining segment equal to a reserved section keyword
    ///    classifies as `post`.
    /// 3. A `YYYY/MM/DD` pattern anywhere in the joined path classifies
    ///    as `post`.
    /// 4. The first `PageType` (declaration order) whose name prefixes
    ///    the first remaining segment wins.
    /// 5. Otherwise `home`.
    ///
    /// The error-page flag overrides rules 2-5 with `blank`; language is
    /// still derived from the path.
    pub fn classify(location: &PageLocation) -> Self {
        let segments: Vec<&str> = location
            .path
            .split('/')
            .filter(|seg| !seg.is_empty())
            .collect();

        let (language, rest) = match segments.first().and_then(|seg| Language::from_code(seg)) {
            Some(language) => (language, &segments[1..]),
            None => (Language::default(), segments.as_slice()),
        };

        let page_type = if location.error_page {
            PageType::Blank
        } else {
            classify_section(&segments, rest)
        };

        Self {
            language,
            page_type,
        }
    }
}

/// Type classification over the segments after the language was consumed.
///
/// `all` is the full segment list (the dated-path rule matches against
/// the joined original path, language segment included).
fn classify_section(all: &[&str], rest: &[&str]) -> PageType {
    let Some(section) = rest.first() else {
        return PageType::default();
    };

    if RESERVED_SECTIONS.contains(section) {
        return PageType::Post;
    }

    if DATED_PATH.is_match(&all.join("/")) {
        return PageType::Post;
    }

    PageType::from_segment_prefix(section).unwrap_or_default()
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(path: &str) -> PageClassification {
        PageClassification::classify(&PageLocation::new("", path))
    }

    #[test]
    fn test_root_path_defaults() {
        let c = classify("/");
        assert_eq!(c.language, Language::En);
        assert_eq!(c.page_type, PageType::Home);
    }

    #[test]
    fn test_language_from_first_segment() {
        assert_eq!(classify("/de/").language, Language::De);
        assert_eq!(classify("/ko/topics/design").language, Language::Ko);
        // Unknown first segment keeps the default language
        assert_eq!(classify("/unknown/page").language, Language::En);
    }

    #[test]
    fn test_language_resolved_before_type() {
        // A segment that is both a language code and could prefix-match
        // later rules is always consumed as language first.
        let c = classify("/en/topics/creativity");
        assert_eq!(c.language, Language::En);
        assert_eq!(c.page_type, PageType::Topic);
    }

    #[test]
    fn test_reserved_sections_classify_as_post() {
        for section in ["drafts", "publish", "fpost", "documentation"] {
            let c = classify(&format!("/en/{section}/some-page"));
            assert_eq!(c.page_type, PageType::Post, "section {section}");
        }
    }

    #[test]
    fn test_dated_path_classifies_as_post() {
        let c = classify("/en/2024/01/15/my-post");
        assert_eq!(c.language, Language::En);
        assert_eq!(c.page_type, PageType::Post);
        // Date deeper in the path still matches
        assert_eq!(
            classify("/en/archive/2021/12/09/launch").page_type,
            PageType::Post
        );
    }

    #[test]
    fn test_dated_path_requires_exact_digit_groups() {
        assert_eq!(classify("/en/224/1/5/x").page_type, PageType::Home);
        assert_eq!(classify("/en/2024/1/15/x").page_type, PageType::Home);
    }

    #[test]
    fn test_type_prefix_match() {
        assert_eq!(classify("/en/topics/creativity").page_type, PageType::Topic);
        assert_eq!(classify("/en/authors/jane-doe").page_type, PageType::Author);
        assert_eq!(
            classify("/en/products/photoshop").page_type,
            PageType::Product
        );
    }

    #[test]
    fn test_type_from_first_segment_without_language() {
        let c = classify("/topic/creativity");
        assert_eq!(c.language, Language::En);
        assert_eq!(c.page_type, PageType::Topic);
    }

    #[test]
    fn test_unmatched_section_defaults_to_home() {
        assert_eq!(classify("/en/creativity").page_type, PageType::Home);
        assert_eq!(classify("/en/").page_type, PageType::Home);
    }

    #[test]
    fn test_error_page_forces_blank() {
        let location = PageLocation::new("", "/en/2024/01/15/my-post").with_error_page(true);
        let c = PageClassification::classify(&location);
        // Path would classify as post; the flag wins
        assert_eq!(c.page_type, PageType::Blank);
        // Language is still derived from the path
        assert_eq!(c.language, Language::En);
    }

    #[test]
    fn test_from_url_full() {
        let location = PageLocation::from_url("https://blog.adobe.com/en/topics/news?foo=1#frag");
        assert_eq!(location.host, "blog.adobe.com");
        assert_eq!(location.path, "/en/topics/news");
    }

    #[test]
    fn test_from_url_bare_path() {
        let location = PageLocation::from_url("/ko/2020/05/01/%ED%95%9C%EA%B5%AD");
        assert_eq!(location.host, "");
        assert_eq!(location.path, "/ko/2020/05/01/한국");
        let c = PageClassification::classify(&location);
        assert_eq!(c.language, Language::Ko);
        assert_eq!(c.page_type, PageType::Post);
    }

    #[test]
    fn test_classification_serializes_camel_case() {
        let c = classify("/en/2024/01/15/my-post");
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"language":"en","pageType":"post"}"#);
    }
}
