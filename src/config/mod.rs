//! Site configuration management for `masthead.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── images     # [images]
//! │   ├── analytics  # [analytics]
//! │   ├── resources  # [resources]
//! │   ├── regions    # [[regions]]
//! │   └── sidekick   # [sidekick]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section       | Purpose                                        |
//! |---------------|------------------------------------------------|
//! | `[site]`      | Hosts and environment detection                |
//! | `[images]`    | CDN marker, lazy markup, rewrite defaults      |
//! | `[analytics]` | MarTech constants, locales, identity, consent  |
//! | `[resources]` | Per-page stylesheet/module roots               |
//! | `[[regions]]` | Region picker entries                          |
//! | `[sidekick]`  | Authoring-tool host pair                       |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{
    AnalyticsConfig, ConsentDomain, ImagesConfig, Region, ResourcesConfig, SidekickConfig,
    SiteInfoConfig, default_regions,
};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config};

use crate::{
    cli::{Cli, Commands},
    log,
};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing masthead.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// CLI arguments reference (internal use only)
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site hosts and environment detection
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Image qualification and rewrite settings
    #[serde(default)]
    pub images: ImagesConfig,

    /// Marketing/analytics context settings
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    /// Page resource roots
    #[serde(default)]
    pub resources: ResourcesConfig,

    /// Region picker entries, in display order
    #[serde(default = "default_regions")]
    pub regions: Vec<Region>,

    /// Authoring-tool settings
    #[serde(default)]
    pub sidekick: SidekickConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            cli: None,
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            site: SiteInfoConfig::default(),
            images: ImagesConfig::default(),
            analytics: AnalyticsConfig::default(),
            resources: ResourcesConfig::default(),
            regions: default_regions(),
            sidekick: SidekickConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find the config
    /// file; a missing file falls back to the built-in defaults (the
    /// defaults carry the production constants, so masthead is usable
    /// without a config file).
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        config.config_path = config_path;
        config.cli = Some(cli);
        config.finalize(cli);

        // Full validation (skip for init: no config file yet)
        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir()?;

        match &cli.command {
            Commands::Init {
                name: Some(name), ..
            } => {
                let path = cwd.join(name).join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            Commands::Init { name: None, .. } => {
                let path = cwd.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => {
                // Search upward from cwd
                match find_config_file(&cli.config) {
                    Some(path) => Ok((path, true)),
                    None => Ok((cwd.join(&cli.config), false)),
                }
            }
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        let root = match &cli.command {
            Commands::Init {
                name: Some(name), ..
            } => std::env::current_dir().unwrap_or_default().join(name),
            _ => self
                .config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };
        self.root = root;

        // Set verbose mode globally
        if let Commands::Optimize { args } = &cli.command {
            crate::logger::set_verbose(args.verbose);
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only filename (masthead.toml) since it's always at site root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input), explicit "y" or "yes" to continue
        Ok(input == "y" || input == "yes")
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        if self.site.host.is_empty() {
            diag.error(
                FieldPath::new("site.host"),
                "production host must not be empty",
            );
        }
        if self.images.cdn_marker.is_empty() {
            diag.error_with_hint(
                FieldPath::new("images.cdn_marker"),
                "empty marker would qualify every image",
                "use a source substring like \"/hlx_\"",
            );
        }
        if self.images.deferred_attr.is_empty() {
            diag.error(
                FieldPath::new("images.deferred_attr"),
                "deferred attribute name must not be empty",
            );
        }
        if self.images.lazy_class.is_empty() {
            diag.error(
                FieldPath::new("images.lazy_class"),
                "lazy-load class must not be empty",
            );
        }
        for region in &self.regions {
            if region.lang.is_empty() || region.home.is_empty() {
                diag.error(
                    FieldPath::new("regions"),
                    format!("region \"{}\" needs both lang and home", region.name),
                );
            }
        }
        if self.analytics.consent.is_empty() {
            diag.warn(
                FieldPath::new("analytics.consent"),
                "empty consent table: no consent id will be resolved",
            );
        }

        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from a TOML snippet.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
