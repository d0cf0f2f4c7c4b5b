//! `[[regions]]` section configuration.
//!
//! Ordered region list backing the footer region picker. Declaration
//! order is display order.
//!
//! # Example
//!
//! ```toml
//! [[regions]]
//! lang = "en_uk"
//! name = "UK (English)"
//! home = "/en/uk.html"
//! ```

use serde::{Deserialize, Serialize};

/// One selectable region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Region language key. Regional variants (`en_uk`) differ from the
    /// page language they overlay (`en`).
    pub lang: String,

    /// Display name.
    pub name: String,

    /// Home page path identifying the region.
    pub home: String,
}

/// Production region list.
pub fn default_regions() -> Vec<Region> {
    [
        ("en_apac", "APAC (English)", "/en/apac.html"),
        ("ko", "Korea (한국어)", "/ko/ko.html"),
        ("en_uk", "UK (English)", "/en/uk.html"),
        ("en", "US (English)", "/"),
    ]
    .into_iter()
    .map(|(lang, name, home)| Region {
        lang: lang.into(),
        name: name.into(),
        home: home.into(),
    })
    .collect()
}
