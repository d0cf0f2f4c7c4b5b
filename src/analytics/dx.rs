//! DX-page detection.
//!
//! A post is a DX (experience-business) page when any tag listed in a
//! `Products:` or `Topics:` paragraph of the last main-content block is
//! in the configured DX tag list.

use crate::config::AnalyticsConfig;
use crate::dom::Document;

/// Check a comma-separated tag string against the DX tag list.
pub fn tags_contain_dx(tags: &str, analytics: &AnalyticsConfig) -> bool {
    tags.split(',')
        .map(str::trim)
        .any(|tag| analytics.dx_tags.iter().any(|dx| dx == tag))
}

/// Scan the document's last main-content block for DX tags.
pub fn is_dx_page(doc: &Document, analytics: &AnalyticsConfig) -> bool {
    let Some(main) = doc.find_by_tag(doc.root(), "main") else {
        return false;
    };
    let Some(last_block) = doc.children_by_tag(main, "div").last() else {
        return false;
    };

    for p in doc.children_by_tag(last_block, "p") {
        let text = doc.text_content(p);
        if !text.contains("Products:") && !text.contains("Topics:") {
            continue;
        }
        // Tag list is the segment between the first and second ':'
        if let Some(tags) = text.split(':').nth(1)
            && tags_contain_dx(tags, analytics)
        {
            return true;
        }
    }
    false
}
