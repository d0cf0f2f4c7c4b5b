//! Post metadata for the card-preview and article-data plugins.

use serde::Serialize;

use crate::dom::Document;
use crate::images::{OptimizationParams, optimized_url};

use super::predict::predict_url;

/// Teaser length in the card preview.
const TEASER_LEN: usize = 75;

/// Post fields backing the article sheet row and the card preview.
///
/// Author, date, topics and products come from the page metadata the
/// host maintains; title, teaser and hero are extracted from the
/// instrumented document.
#[derive(Debug, Clone, Default)]
pub struct PostMeta {
    pub author: String,
    /// Raw post date, `MM-DD-YYYY`.
    pub raw_date: String,
    pub topics: Vec<String>,
    pub products: Vec<String>,
    pub title: String,
    pub teaser: String,
    pub hero: String,
}

/// Card-preview payload.
#[derive(Debug, Clone, Serialize)]
pub struct CardData {
    /// Post date, `MM-DD-YYYY`, zero padded.
    pub date: String,
    /// Hero URL through the rewriter with card sizing.
    pub hero: String,
    pub teaser: String,
    pub title: String,
    /// First topic, if any.
    pub topic: String,
}

impl PostMeta {
    /// Extract document-derived fields, keeping the supplied metadata.
    pub fn from_document(
        doc: &Document,
        author: impl Into<String>,
        raw_date: impl Into<String>,
        topics: Vec<String>,
        products: Vec<String>,
    ) -> Self {
        Self {
            author: author.into(),
            raw_date: raw_date.into(),
            topics,
            products,
            title: extract_title(doc),
            teaser: extract_teaser(doc),
            hero: extract_hero(doc),
        }
    }

    /// Tab-separated article sheet row:
    /// author, date (epoch seconds), hero path, predicted URL, products,
    /// a zero placeholder, teaser, title, topics.
    pub fn article_row(&self, path: &str) -> String {
        [
            self.author.clone(),
            raw_date_epoch(&self.raw_date)
                .map(|secs| secs.to_string())
                .unwrap_or_default(),
            self.hero.clone(),
            predict_url(None, path, Some(&self.raw_date)),
            json_list(&self.products),
            "0".to_string(),
            self.teaser.clone(),
            self.title.clone(),
            json_list(&self.topics),
        ]
        .join("\t")
    }

    /// Assemble the card-preview data. The card hero is sized through
    /// the rewriter (`height=512`, 3:2 crop over the defaults).
    pub fn card_data(&self) -> CardData {
        CardData {
            date: pad_raw_date(&self.raw_date),
            hero: optimized_url(
                &self.hero,
                &OptimizationParams::default()
                    .with_height(512.0)
                    .with_crop("3:2"),
            ),
            teaser: self.teaser.clone(),
            title: self.title.clone(),
            topic: self.topics.first().cloned().unwrap_or_default(),
        }
    }
}

// ============================================================================
// document extraction
// ============================================================================

fn extract_title(doc: &Document) -> String {
    doc.find_by_tag(doc.head(), "title")
        .map(|id| doc.text_content(id))
        .unwrap_or_default()
}

/// Teaser: first 75 characters of the fourth main-content block.
fn extract_teaser(doc: &Document) -> String {
    let Some(main) = doc.find_by_tag(doc.root(), "main") else {
        return String::new();
    };
    let Some(block) = doc.children_by_tag(main, "div").nth(3) else {
        return String::new();
    };
    doc.text_content(block).trim().chars().take(TEASER_LEN).collect()
}

/// Hero: CDN asset path from the `og:image` head meta, normalized to a
/// bare `/hlx_...` path.
fn extract_hero(doc: &Document) -> String {
    for id in doc.descendants(doc.head()) {
        let Some(el) = doc.element(id) else { continue };
        if !el.is("meta") || el.attr("property") != Some("og:image") {
            continue;
        }
        let content = el.attr("content").unwrap_or_default();
        return match content.split_once("/hlx_") {
            Some((_, rest)) => format!("/hlx_{rest}"),
            None => content.to_string(),
        };
    }
    String::new()
}

// ============================================================================
// dates
// ============================================================================

/// Epoch seconds at UTC midnight of a raw `MM-DD-YYYY` date.
pub fn raw_date_epoch(raw_date: &str) -> Option<i64> {
    let mut parts = raw_date.split('-');
    let month: i64 = parts.next()?.parse().ok()?;
    let day: i64 = parts.next()?.parse().ok()?;
    let year: i64 = parts.next()?.parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some(days_from_civil(year, month, day) * 86_400)
}

/// Days since 1970-01-01 for a proleptic Gregorian date
/// (Howard Hinnant's civil-days algorithm).
fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = if year >= 0 { year } else { year - 399 } / 400;
    let yoe = year - era * 400;
    let doy = (153 * (if month > 2 { month - 3 } else { month + 9 }) + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Zero-pad a raw `MM-DD-YYYY` date for display; malformed input passes
/// through untouched.
fn pad_raw_date(raw_date: &str) -> String {
    let parts: Vec<&str> = raw_date.split('-').collect();
    match parts.as_slice() {
        [month, day, year] => {
            match (month.parse::<u32>(), day.parse::<u32>(), year.parse::<u32>()) {
                (Ok(month), Ok(day), Ok(year)) => format!("{month:02}-{day:02}-{year:04}"),
                _ => raw_date.to_string(),
            }
        }
        _ => raw_date.to_string(),
    }
}

/// `["a", "b"]` list form used by the article sheet.
fn json_list(items: &[String]) -> String {
    format!("[\"{}\"]", items.join("\", \""))
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn post_doc() -> Document {
        let mut doc = Document::new();
        doc.ingest_page(
            "<html><head><title>A Great Post</title>\
             <meta property=\"og:image\" content=\"https://blog.adobe.com/m/hlx_abc123.jpeg\">\
             </head><body><main>\
             <div><img src=\"/hlx_abc123.jpeg\"></div>\
             <div><p>By Jane</p></div>\
             <div><p>Posted on 12-09-2021</p></div>\
             <div><p>This teaser paragraph is deliberately longer than seventy five characters so it gets cut.</p></div>\
             </main></body></html>",
        );
        doc
    }

    fn meta() -> PostMeta {
        PostMeta::from_document(
            &post_doc(),
            "Jane Doe",
            "12-09-2021",
            vec!["Creativity".into(), "News".into()],
            vec!["Photoshop".into()],
        )
    }

    #[test]
    fn test_extraction() {
        let meta = meta();
        assert_eq!(meta.title, "A Great Post");
        assert_eq!(meta.hero, "/hlx_abc123.jpeg");
        assert_eq!(meta.teaser.chars().count(), 75);
        assert!(meta.teaser.starts_with("This teaser paragraph"));
    }

    #[test]
    fn test_article_row() {
        let row = meta().article_row("/en/drafts/a-great-post");
        let fields: Vec<&str> = row.split('\t').collect();
        assert_eq!(fields.len(), 9);
        assert_eq!(fields[0], "Jane Doe");
        assert_eq!(fields[1], "1639008000");
        assert_eq!(fields[2], "/hlx_abc123.jpeg");
        assert_eq!(fields[3], "en/publish/2021/12/09/a-great-post.html");
        assert_eq!(fields[4], "[\"Photoshop\"]");
        assert_eq!(fields[5], "0");
        assert_eq!(fields[7], "A Great Post");
        assert_eq!(fields[8], "[\"Creativity\", \"News\"]");
    }

    #[test]
    fn test_card_data() {
        let card = meta().card_data();
        assert_eq!(card.date, "12-09-2021");
        assert_eq!(
            card.hero,
            "/hlx_abc123.jpeg?auto=webp&format=pjpg&optimize=medium&height=512&crop=3%3A2"
        );
        assert_eq!(card.topic, "Creativity");
    }

    #[test]
    fn test_raw_date_epoch() {
        assert_eq!(raw_date_epoch("12-09-2021"), Some(1_639_008_000));
        assert_eq!(raw_date_epoch("01-15-2024"), Some(1_705_276_800));
        assert_eq!(raw_date_epoch("01-01-1970"), Some(0));
        assert_eq!(raw_date_epoch("2021-12-09"), None);
        assert_eq!(raw_date_epoch("soon"), None);
    }

    #[test]
    fn test_pad_raw_date() {
        assert_eq!(pad_raw_date("1-5-2021"), "01-05-2021");
        assert_eq!(pad_raw_date("not-a-date"), "not-a-date");
    }
}
