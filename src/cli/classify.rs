//! Classify command implementation.
//!
//! Maps URLs (or bare paths) to their `{language, pageType}` pair, one
//! line of output per input.

use anyhow::Result;
use serde::Serialize;
use std::io::{self, BufRead, Write};

use crate::cli::ClassifyArgs;
use crate::core::{PageClassification, PageLocation};

/// One classified input line.
#[derive(Debug, Serialize)]
struct ClassifyRecord<'a> {
    url: &'a str,
    #[serde(flatten)]
    classification: PageClassification,
}

/// Run the classify command.
pub fn run_classify(args: &ClassifyArgs) -> Result<()> {
    let urls = expand_stdin(&args.urls)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for url in &urls {
        let location = PageLocation::from_url(url).with_error_page(args.error_page);
        let classification = PageClassification::classify(&location);

        if args.json {
            let record = ClassifyRecord {
                url,
                classification,
            };
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
        } else {
            writeln!(
                out,
                "{url}\t{}\t{}",
                classification.language, classification.page_type
            )?;
        }
    }
    Ok(())
}

/// Expand a `-` argument into stdin lines (one URL per line).
fn expand_stdin(urls: &[String]) -> Result<Vec<String>> {
    let mut expanded = Vec::with_capacity(urls.len());
    for url in urls {
        if url == "-" {
            for line in io::stdin().lock().lines() {
                let line = line?;
                let line = line.trim();
                if !line.is_empty() {
                    expanded.push(line.to_string());
                }
            }
        } else {
            expanded.push(url.clone());
        }
    }
    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Language, PageType};

    #[test]
    fn test_record_json_shape() {
        let location = PageLocation::from_url("https://blog.adobe.com/ko/topics/news");
        let record = ClassifyRecord {
            url: "https://blog.adobe.com/ko/topics/news",
            classification: PageClassification::classify(&location),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"url":"https://blog.adobe.com/ko/topics/news","language":"ko","pageType":"topic"}"#
        );
    }

    #[test]
    fn test_error_page_flag_forces_blank() {
        let location =
            PageLocation::from_url("/en/2024/01/15/my-post").with_error_page(true);
        let c = PageClassification::classify(&location);
        assert_eq!(c.language, Language::En);
        assert_eq!(c.page_type, PageType::Blank);
    }
}
