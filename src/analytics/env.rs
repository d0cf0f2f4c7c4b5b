//! Environment detection from the page host.

use serde::Serialize;
use std::fmt;

use crate::config::SiteInfoConfig;

/// Runtime environment of the page, derived from the host name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Stage,
    Production,
}

impl Environment {
    /// A host containing the staging marker is stage; the exact
    /// production host is production; anything else is dev.
    pub fn detect(host: &str, site: &SiteInfoConfig) -> Self {
        if host == site.host {
            Self::Production
        } else if host.contains(&site.staging_marker) {
            Self::Stage
        } else {
            Self::Dev
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Stage => "stage",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_detection() {
        let site = SiteInfoConfig::default();
        assert_eq!(
            Environment::detect("blog.adobe.com", &site),
            Environment::Production
        );
        assert_eq!(
            Environment::detect("blog-staging.corp.example", &site),
            Environment::Stage
        );
        assert_eq!(
            Environment::detect("localhost", &site),
            Environment::Dev
        );
        // Subdomain of production host is not production
        assert_eq!(
            Environment::detect("x.blog.adobe.com", &site),
            Environment::Dev
        );
    }
}
