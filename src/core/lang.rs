//! Site languages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported site languages, identified by two-letter codes.
///
/// Declaration order is the detection order when matching the leading
/// path segment. `En` is the fallback for paths without a language segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
    Fr,
    Ko,
    Es,
    It,
    Jp,
    Br,
}

impl Language {
    /// All languages in declaration order.
    pub const ALL: [Self; 8] = [
        Self::En,
        Self::De,
        Self::Fr,
        Self::Ko,
        Self::Es,
        Self::It,
        Self::Jp,
        Self::Br,
    ];

    /// Two-letter language code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
            Self::Fr => "fr",
            Self::Ko => "ko",
            Self::Es => "es",
            Self::It => "it",
            Self::Jp => "jp",
            Self::Br => "br",
        }
    }

    /// Match a path segment against the known language codes (exact match).
    pub fn from_code(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == segment)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
