//! `[images]` section configuration.
//!
//! Controls which inserted images qualify for optimization and how the
//! rewritten URLs are marked up for the external lazy loader.
//!
//! # Example
//!
//! ```toml
//! [images]
//! cdn_marker = "/hlx_"        # source substring that qualifies an image
//! deferred_attr = "data-src"  # attribute holding the deferred URL
//! lazy_class = "lazyload"     # class consumed by the lazy loader
//! optimize = "medium"         # CDN quality tier
//! ```

use serde::{Deserialize, Serialize};

use crate::images::OptimizationParams;

/// Image qualification and rewrite defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagesConfig {
    /// Substring of the source URL that marks a CDN-hosted asset.
    pub cdn_marker: String,

    /// Attribute the deferred URL is stored under for lazy images.
    pub deferred_attr: String,

    /// Class marking an image for the external lazy loader.
    pub lazy_class: String,

    /// Output format hint (`auto` CDN parameter).
    pub auto: String,

    /// Container format (`format` CDN parameter).
    pub format: String,

    /// Quality tier (`optimize` CDN parameter).
    pub optimize: String,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            cdn_marker: "/hlx_".into(),
            deferred_attr: "data-src".into(),
            lazy_class: "lazyload".into(),
            auto: "webp".into(),
            format: "pjpg".into(),
            optimize: "medium".into(),
        }
    }
}

impl ImagesConfig {
    /// Default parameter set for the rewriter. Empty values are treated
    /// as unset.
    pub fn default_params(&self) -> OptimizationParams {
        let opt = |value: &str| (!value.is_empty()).then(|| value.to_string());
        OptimizationParams {
            auto: opt(&self.auto),
            format: opt(&self.format),
            optimize: opt(&self.optimize),
            ..OptimizationParams::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_images_config_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.images.cdn_marker, "/hlx_");
        assert_eq!(config.images.deferred_attr, "data-src");
        assert_eq!(config.images.lazy_class, "lazyload");

        let params = config.images.default_params();
        assert_eq!(params.auto.as_deref(), Some("webp"));
        assert_eq!(params.format.as_deref(), Some("pjpg"));
        assert_eq!(params.optimize.as_deref(), Some("medium"));
    }

    #[test]
    fn test_images_config_empty_value_unsets_default() {
        let config = test_parse_config("[images]\nformat = \"\"");
        assert_eq!(config.images.default_params().format, None);
    }
}
