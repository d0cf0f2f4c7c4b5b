//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "The Blog"
//! host = "blog.adobe.com"      # production host
//! staging_marker = "staging"   # hosts containing this are stage
//! ```

use serde::{Deserialize, Serialize};

/// Site identity and environment detection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title (used by the config template only).
    pub title: String,

    /// Production host name. A page served from exactly this host runs in
    /// the production environment.
    pub host: String,

    /// Hosts containing this marker run in the stage environment.
    pub staging_marker: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: "The Blog".into(),
            host: "blog.adobe.com".into(),
            staging_marker: "staging".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_site_config_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.host, "blog.adobe.com");
        assert_eq!(config.site.staging_marker, "staging");
    }

    #[test]
    fn test_site_config_override() {
        let config = test_parse_config("[site]\nhost = \"blog.example.com\"");
        assert_eq!(config.site.host, "blog.example.com");
        // Untouched fields keep their defaults
        assert_eq!(config.site.staging_marker, "staging");
    }
}
