//! Post-path normalization and published-URL prediction.

use std::sync::LazyLock;

use regex::Regex;

/// `YYYY/MM/DD` marks a dated post path.
static DATED_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}/[0-9]{2}/[0-9]{2}").unwrap());

/// Characters not allowed in a published filename slug; each occurrence
/// becomes a `-`.
static SLUG_DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_/.]").unwrap());

/// Splice `/publish/` into a dated post path that is missing it
/// (`/en/2021/12/09/x` -> `/en/publish/2021/12/09/x`). Any other path
/// passes through unchanged.
pub fn normalize_post_path(path: &str) -> String {
    if path.contains("/publish/") || !DATED_PATH.is_match(path) {
        return path.to_string();
    }
    let mut segs: Vec<&str> = path.split('/').collect();
    if segs.len() > 2 {
        segs.insert(2, "publish");
    }
    segs.join("/")
}

/// Posts under `documentation` or `fpost` sections are internal and not
/// surfaced by the card/URL plugins.
pub fn allowed_post_path(path: &str) -> bool {
    !matches!(
        path.split('/').nth(2),
        Some("documentation") | Some("fpost")
    )
}

/// Publish path segment from a raw `MM-DD-YYYY` date.
fn publish_path(raw_date: &str) -> Option<String> {
    let mut parts = raw_date.split('-');
    let month = parts.next()?;
    let day = parts.next()?;
    let year = parts.next()?;
    Some(format!("/publish/{year}/{month}/{day}"))
}

/// Predict the published URL for a post.
///
/// The filename is the last path segment without its extension,
/// lowercased, with disallowed characters replaced by `-` and `.html`
/// appended. Without a host the prediction is a bare path.
pub fn predict_url(host: Option<&str>, path: &str, raw_date: Option<&str>) -> String {
    let segs: Vec<&str> = path.split('/').collect();
    let publish = raw_date.and_then(publish_path).unwrap_or_default();

    let stem = segs
        .last()
        .and_then(|seg| seg.split('.').next())
        .unwrap_or_default()
        .to_lowercase();
    let filename = SLUG_DISALLOWED.replace_all(&stem, "-");

    let origin = host
        .map(|host| format!("https://{host}/"))
        .unwrap_or_default();
    let section = segs.get(1).copied().unwrap_or_default();
    format!("{origin}{section}{publish}/{filename}.html")
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_splices_publish() {
        assert_eq!(
            normalize_post_path("/en/2021/12/09/my-post"),
            "/en/publish/2021/12/09/my-post"
        );
    }

    #[test]
    fn test_normalize_leaves_published_and_undated_paths() {
        assert_eq!(
            normalize_post_path("/en/publish/2021/12/09/my-post"),
            "/en/publish/2021/12/09/my-post"
        );
        assert_eq!(normalize_post_path("/en/topics/news"), "/en/topics/news");
    }

    #[test]
    fn test_allowed_post_path() {
        assert!(allowed_post_path("/en/2021/12/09/my-post"));
        assert!(allowed_post_path("/en/drafts/wip"));
        assert!(!allowed_post_path("/en/documentation/setup"));
        assert!(!allowed_post_path("/en/fpost/internal"));
    }

    #[test]
    fn test_predict_url_with_host_and_date() {
        let url = predict_url(
            Some("blog.adobe.com"),
            "/en/drafts/My Great Post.docx",
            Some("12-09-2021"),
        );
        assert_eq!(
            url,
            "https://blog.adobe.com/en/publish/2021/12/09/my-great-post.html"
        );
    }

    #[test]
    fn test_predict_url_bare() {
        let url = predict_url(None, "/en/drafts/hello", None);
        assert_eq!(url, "en/hello.html");
    }

    #[test]
    fn test_predict_url_slug_replaces_each_char() {
        // Each disallowed character becomes its own dash
        let url = predict_url(None, "/en/drafts/a&b c", None);
        assert_eq!(url, "en/a-b-c.html");

        let url = predict_url(None, "/en/drafts/a!!b", None);
        assert_eq!(url, "en/a--b.html");
    }

    #[test]
    fn test_predict_url_short_raw_date_ignored() {
        let url = predict_url(None, "/en/drafts/x", Some("12-09"));
        assert_eq!(url, "en/x.html");
    }
}
