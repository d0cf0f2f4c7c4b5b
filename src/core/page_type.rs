//! Page types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Page type derived from the location path.
///
/// Declaration order is the tie-break order for prefix classification:
/// the first type whose name prefixes the classified segment wins.
/// Do not reorder variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    #[default]
    Home,
    Post,
    Author,
    Topic,
    Product,
    /// Error pages, forced by the external error-page flag. Also
    /// reachable through the prefix table like any other variant.
    Blank,
}

impl PageType {
    /// All page types in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::Post,
        Self::Author,
        Self::Topic,
        Self::Product,
        Self::Blank,
    ];

    /// Lowercase type name, as used in resource paths.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Post => "post",
            Self::Author => "author",
            Self::Topic => "topic",
            Self::Product => "product",
            Self::Blank => "blank",
        }
    }

    /// First type (in declaration order) whose name is a prefix of `segment`.
    pub fn from_segment_prefix(segment: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| segment.starts_with(kind.as_str()))
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
