//! Init command - write a default configuration file.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::{config::SiteConfig, log};

/// Default config filename
const CONFIG_FILE: &str = "masthead.toml";

/// Generate masthead.toml content with comments.
///
/// The template carries the built-in production constants, so a fresh
/// file is immediately valid and only needs editing where the site
/// differs from the defaults.
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# Masthead configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# https://github.com/masthead-tools/masthead\n\n");

    out.push_str(
        "[site]\n\
         # Production host; anything containing staging_marker is stage,\n\
         # everything else is dev\n\
         host = \"blog.adobe.com\"\n\
         staging_marker = \"staging\"\n\n",
    );

    out.push_str(
        "[images]\n\
         # Source substring that qualifies an image for optimization\n\
         cdn_marker = \"/hlx_\"\n\
         # Deferred-loading markup\n\
         deferred_attr = \"data-src\"\n\
         lazy_class = \"lazyload\"\n\
         # Rewrite defaults (skipped for .gif sources)\n\
         auto = \"webp\"\n\
         format = \"pjpg\"\n\
         optimize = \"medium\"\n\n",
    );

    out.push_str(
        "[analytics]\n\
         launch_property = \"global\"\n\
         target = true\n\
         audience_manager = true\n\
         dx_production_account = \"adbadobedxprod\"\n\
         dx_stage_account = \"adbadobedxqa\"\n\n\
         [analytics.identity]\n\
         client_id = \"theblog-helix\"\n\
         scope = \"AdobeID,openid\"\n\n",
    );

    out.push_str(
        "[resources]\n\
         style_root = \"/style\"\n\
         script_root = \"/scripts\"\n\
         dict_prefix = \"/dict\"\n\n",
    );

    out.push_str(
        "# Region picker entries, in display order\n\
         [[regions]]\n\
         lang = \"en_apac\"\n\
         name = \"APAC (English)\"\n\
         home = \"/en/apac.html\"\n\n\
         [[regions]]\n\
         lang = \"ko\"\n\
         name = \"Korea (한국어)\"\n\
         home = \"/ko/ko.html\"\n\n\
         [[regions]]\n\
         lang = \"en_uk\"\n\
         name = \"UK (English)\"\n\
         home = \"/en/uk.html\"\n\n\
         [[regions]]\n\
         lang = \"en\"\n\
         name = \"US (English)\"\n\
         home = \"/\"\n\n",
    );

    out.push_str(
        "[sidekick]\n\
         # Production and inner (preview) hosts for the authoring tool\n\
         # host = \"blog.adobe.com\"\n\
         # inner_host = \"theblog--adobe.hlx.page\"\n",
    );

    out
}

/// Create a default config file.
///
/// If `dry_run` is true, only prints the config template to stdout.
pub fn new_site(site_config: &SiteConfig, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    let root = site_config.get_root();
    write_config(root)?;

    log!("init"; "wrote {}", root.join(CONFIG_FILE).display());
    Ok(())
}

/// Write the default masthead.toml, refusing to overwrite.
fn write_config(root: &Path) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    if path.exists() {
        bail!(
            "'{}' already exists.\n\
             Remove it first, or use `--dry` to print the template.",
            path.display()
        );
    }

    if !root.exists() {
        fs::create_dir_all(root)
            .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    }

    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_to_defaults() {
        let template = generate_config_template();
        let config = crate::config::test_parse_config(&template);

        let defaults = SiteConfig::default();
        assert_eq!(config.site.host, defaults.site.host);
        assert_eq!(config.images.cdn_marker, defaults.images.cdn_marker);
        assert_eq!(config.regions.len(), defaults.regions.len());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path()).unwrap();

        let content = fs::read_to_string(temp.path().join(CONFIG_FILE)).unwrap();
        assert!(content.contains("[images]"));
        assert!(content.contains("[[regions]]"));
    }

    #[test]
    fn test_write_config_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "host = \"keep\"").unwrap();

        assert!(write_config(temp.path()).is_err());
        let content = fs::read_to_string(temp.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(content, "host = \"keep\"");
    }

    #[test]
    fn test_write_config_creates_directory() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("new_site");
        write_config(&root).unwrap();
        assert!(root.join(CONFIG_FILE).exists());
    }
}
