//! Region picker model.
//!
//! Selection logic only; the dropdown UI, positioning and clipboard
//! are host-document concerns outside this crate. The session store is
//! an input/output value here, not a side effect: the caller passes the
//! stored language in and persists the returned `remember` value.

use serde::Serialize;

use crate::config::Region;
use crate::core::Language;

/// Resolved region for the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionSelection {
    /// Selected region language key (e.g. `en_uk`).
    pub lang: String,

    /// Display name, when a configured region matches.
    pub name: Option<String>,

    /// Language key to persist in the session store, set only when a
    /// region home page was visited whose lang differs from the page
    /// language.
    pub remember: Option<String>,
}

/// Resolve the selected region.
///
/// A path equal to a region's home page selects that region directly.
/// Otherwise the stored language (if any) wins over the page language,
/// and the display name comes from the matching region entry.
pub fn select_region(
    path: &str,
    stored_lang: Option<&str>,
    language: Language,
    regions: &[Region],
) -> RegionSelection {
    let page_lang = language.code();

    if let Some(region) = regions.iter().find(|region| region.home == path) {
        let remember = (region.lang != page_lang).then(|| region.lang.clone());
        return RegionSelection {
            lang: region.lang.clone(),
            name: Some(region.name.clone()),
            remember,
        };
    }

    let lang = stored_lang.unwrap_or(page_lang);
    let name = regions
        .iter()
        .find(|region| region.lang == lang)
        .map(|region| region.name.clone());

    RegionSelection {
        lang: lang.to_string(),
        name,
        remember: None,
    }
}

// ============================================================================
// tests
// ============================================================================
