//! `[resources]` section configuration.
//!
//! Root paths for per-page stylesheets, modules and language overlays.
//!
//! # Example
//!
//! ```toml
//! [resources]
//! style_root = "/style"
//! script_root = "/scripts"
//! dict_prefix = "/dict"
//! ```

use serde::{Deserialize, Serialize};

/// Page resource roots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcesConfig {
    /// Directory serving `{page_type}.css`.
    pub style_root: String,

    /// Directory serving `{page_type}.js` modules.
    pub script_root: String,

    /// Prefix for `{prefix}.{language}.css` overlays.
    pub dict_prefix: String,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            style_root: "/style".into(),
            script_root: "/scripts".into(),
            dict_prefix: "/dict".into(),
        }
    }
}
