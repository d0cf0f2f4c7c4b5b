//! Authoring-tool (sidekick) plugins.
//!
//! Conditions and data assembly only; the browser actions (opening
//! windows, clipboard, modals) belong to the editing tool itself. Each
//! plugin is a table entry with a pure availability predicate over the
//! sidekick context; post-type gating reads the shared classification.

mod card;
mod predict;

pub use card::{CardData, PostMeta, raw_date_epoch};
pub use predict::{allowed_post_path, normalize_post_path, predict_url};

use crate::config::SidekickConfig;
use crate::core::{PageClassification, PageLocation, PageType};

/// Everything a plugin predicate can see.
#[derive(Debug, Clone, Copy)]
pub struct SidekickContext<'a> {
    pub location: &'a PageLocation,
    /// Raw query string of the current location (editors encode the
    /// edited file in it).
    pub query: &'a str,
    pub classification: &'a PageClassification,
    pub config: &'a SidekickConfig,
    /// The tool is attached to the document editor.
    pub is_editor: bool,
    /// The tool is attached to a rendered page.
    pub is_helix: bool,
}

impl SidekickContext<'_> {
    fn is_post(&self) -> bool {
        self.classification.page_type == PageType::Post
    }
}

/// One sidekick plugin registration.
pub struct Plugin {
    pub id: &'static str,
    /// Replaces a built-in plugin of the same id.
    pub override_builtin: bool,
    /// Button label, when the plugin adds one.
    pub button: Option<&'static str>,
    condition: fn(&SidekickContext) -> bool,
}

impl Plugin {
    pub fn available(&self, ctx: &SidekickContext) -> bool {
        (self.condition)(ctx)
    }
}

/// Plugin table, in registration order.
pub const PLUGINS: &[Plugin] = &[
    Plugin {
        id: "preview",
        override_builtin: true,
        button: None,
        condition: |ctx| ctx.is_editor || (ctx.is_helix && ctx.config.host.is_some()),
    },
    Plugin {
        id: "tagger",
        override_builtin: false,
        button: Some("Tagger"),
        condition: |ctx| {
            ctx.is_editor && (ctx.query.contains(".docx&") || ctx.query.contains(".md&"))
        },
    },
    Plugin {
        id: "card-preview",
        override_builtin: false,
        button: Some("Card Preview"),
        condition: |ctx| {
            ctx.is_helix && ctx.is_post() && allowed_post_path(&ctx.location.path)
        },
    },
    Plugin {
        id: "predicted-url",
        override_builtin: false,
        button: Some("Copy Predicted URL"),
        condition: |ctx| {
            ctx.is_helix
                && ctx.is_post()
                && ctx
                    .config
                    .host
                    .as_deref()
                    .is_some_and(|host| host != ctx.location.host)
                && allowed_post_path(&ctx.location.path)
        },
    },
    Plugin {
        id: "article-data",
        override_builtin: false,
        button: Some("Copy Article Data"),
        condition: |ctx| ctx.is_helix && ctx.is_post(),
    },
    Plugin {
        // No publish button for drafts
        id: "publish",
        override_builtin: false,
        button: None,
        condition: |ctx| ctx.is_helix && !ctx.location.path.contains("/drafts/"),
    },
    Plugin {
        id: "publish-data",
        override_builtin: true,
        button: Some("Publish"),
        condition: |ctx| {
            ctx.config.inner_host.is_some()
                && ctx.config.host.is_some()
                && ctx.is_editor
                && (ctx.query.contains("file=_taxonomy.xlsx")
                    || ctx.query.contains("file=redirects.xlsx"))
        },
    },
];

/// Ids of the plugins available in this context, in table order.
pub fn available_plugins(ctx: &SidekickContext) -> Vec<&'static str> {
    PLUGINS
        .iter()
        .filter(|plugin| plugin.available(ctx))
        .map(|plugin| plugin.id)
        .collect()
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Setup {
        location: PageLocation,
        classification: PageClassification,
        config: SidekickConfig,
    }

    fn setup(path: &str) -> Setup {
        let location = PageLocation::new("theblog--adobe.hlx.page", path);
        let classification = PageClassification::classify(&location);
        Setup {
            location,
            classification,
            config: SidekickConfig {
                host: Some("blog.adobe.com".into()),
                inner_host: Some("theblog--adobe.hlx.page".into()),
            },
        }
    }

    fn helix_ctx(setup: &Setup) -> SidekickContext<'_> {
        SidekickContext {
            location: &setup.location,
            query: "",
            classification: &setup.classification,
            config: &setup.config,
            is_editor: false,
            is_helix: true,
        }
    }

    #[test]
    fn test_post_page_plugins() {
        let setup = setup("/en/2021/12/09/my-post");
        let ids = available_plugins(&helix_ctx(&setup));
        assert_eq!(
            ids,
            ["preview", "card-preview", "predicted-url", "article-data", "publish"]
        );
    }

    #[test]
    fn test_drafts_hide_publish() {
        let setup = setup("/en/drafts/wip");
        let ids = available_plugins(&helix_ctx(&setup));
        assert!(!ids.contains(&"publish"));
        assert!(ids.contains(&"card-preview"));
    }

    #[test]
    fn test_documentation_posts_hide_card_and_url() {
        let setup = setup("/en/documentation/2021/12/09/setup");
        let ids = available_plugins(&helix_ctx(&setup));
        assert!(!ids.contains(&"card-preview"));
        assert!(!ids.contains(&"predicted-url"));
        assert!(ids.contains(&"article-data"));
    }

    #[test]
    fn test_non_post_pages_skip_post_plugins() {
        let setup = setup("/en/topics/news");
        let ids = available_plugins(&helix_ctx(&setup));
        assert_eq!(ids, ["preview", "publish"]);
    }

    #[test]
    fn test_predicted_url_hidden_on_production_host() {
        let mut setup = setup("/en/2021/12/09/my-post");
        setup.location.host = "blog.adobe.com".into();
        let ids = available_plugins(&helix_ctx(&setup));
        assert!(!ids.contains(&"predicted-url"));
    }

    #[test]
    fn test_editor_plugins_follow_query() {
        let setup = setup("/");
        let mut ctx = helix_ctx(&setup);
        ctx.is_editor = true;
        ctx.is_helix = false;

        ctx.query = "?file=post.docx&x=1";
        assert_eq!(available_plugins(&ctx), ["preview", "tagger"]);

        ctx.query = "?file=_taxonomy.xlsx";
        assert_eq!(available_plugins(&ctx), ["preview", "publish-data"]);
    }

    #[test]
    fn test_preview_needs_host_on_helix() {
        let mut setup = setup("/en/topics/news");
        setup.config.host = None;
        let ids = available_plugins(&helix_ctx(&setup));
        assert!(!ids.contains(&"preview"));
    }
}
