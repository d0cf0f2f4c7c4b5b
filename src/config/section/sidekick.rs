//! `[sidekick]` section configuration.
//!
//! Host pair for the authoring-tool plugins: `host` is the public
//! production host, `inner_host` the preview host.
//!
//! # Example
//!
//! ```toml
//! [sidekick]
//! host = "blog.adobe.com"
//! inner_host = "theblog--adobe.hlx.page"
//! ```

use serde::{Deserialize, Serialize};

/// Authoring-tool settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SidekickConfig {
    /// Public production host, if configured.
    pub host: Option<String>,

    /// Preview (inner) host, if configured.
    pub inner_host: Option<String>,
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_sidekick_defaults_unset() {
        let config = test_parse_config("");
        assert_eq!(config.sidekick.host, None);
        assert_eq!(config.sidekick.inner_host, None);
    }

    #[test]
    fn test_sidekick_hosts() {
        let config = test_parse_config(
            "[sidekick]\nhost = \"blog.adobe.com\"\ninner_host = \"theblog--adobe.hlx.page\"",
        );
        assert_eq!(config.sidekick.host.as_deref(), Some("blog.adobe.com"));
        assert_eq!(
            config.sidekick.inner_host.as_deref(),
            Some("theblog--adobe.hlx.page")
        );
    }
}
