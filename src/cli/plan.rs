//! Plan command implementation.
//!
//! Assembles the complete page plan for one URL: classification,
//! environment, marketing-tech context, locales, identity, consent id,
//! region selection, planned resources and the available sidekick
//! plugins. With `--html` the backing document is parsed so DX
//! detection runs against real content.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};

use crate::analytics::{
    Environment, IdentityContext, MarTechContext, consent_domain_id, digital_data_language,
    feds_locale, is_dx_page,
};
use crate::cli::PlanArgs;
use crate::config::SiteConfig;
use crate::core::{PageClassification, PageLocation};
use crate::dom::Document;
use crate::regions::{RegionSelection, select_region};
use crate::resources::PageResources;
use crate::sidekick::{SidekickContext, available_plugins};

/// The full page plan, serialized as the JSON report.
#[derive(Debug, Serialize)]
pub struct PagePlan {
    pub url: String,
    #[serde(flatten)]
    pub classification: PageClassification,
    pub environment: Environment,
    pub dx: bool,
    pub martech: MarTechContext,
    pub consent_id: Option<String>,
    pub digital_data_language: String,
    pub feds_locale: String,
    pub identity: IdentityContext,
    pub region: RegionSelection,
    pub resources: PageResources,
    pub sidekick: Vec<&'static str>,
}

impl PagePlan {
    pub fn build(args: &PlanArgs, config: &SiteConfig) -> Result<Self> {
        let location = PageLocation::from_url(&args.url).with_error_page(args.error_page);
        let classification = PageClassification::classify(&location);
        let environment = Environment::detect(&location.host, &config.site);

        let dx = match &args.html {
            Some(path) => {
                let html = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read '{}'", path.display()))?;
                let mut doc = Document::new();
                doc.ingest_page(&html);
                is_dx_page(&doc, &config.analytics)
            }
            None => false,
        };

        let sidekick_ctx = SidekickContext {
            location: &location,
            query: "",
            classification: &classification,
            config: &config.sidekick,
            is_editor: false,
            is_helix: true,
        };

        Ok(Self {
            url: args.url.clone(),
            classification,
            environment,
            dx,
            martech: MarTechContext::build(environment, dx, &config.analytics),
            consent_id: consent_domain_id(&location.host, &config.analytics.consent)
                .map(String::from),
            digital_data_language: digital_data_language(
                classification.language,
                &config.analytics,
            ),
            feds_locale: feds_locale(classification.language, &config.analytics),
            identity: IdentityContext::build(classification.language, &config.analytics),
            region: select_region(
                &location.path,
                args.stored_lang.as_deref(),
                classification.language,
                &config.regions,
            ),
            resources: PageResources::plan(&classification, &config.resources),
            sidekick: available_plugins(&sidekick_ctx),
        })
    }
}

/// Run the plan command.
pub fn run_plan(args: &PlanArgs, config: &SiteConfig) -> Result<()> {
    let plan = PagePlan::build(args, config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.json {
        let json = if args.pretty {
            serde_json::to_string_pretty(&plan)?
        } else {
            serde_json::to_string(&plan)?
        };
        writeln!(out, "{json}")?;
        return Ok(());
    }

    writeln!(out, "url:          {}", plan.url)?;
    writeln!(
        out,
        "page:         {} {}",
        plan.classification.language, plan.classification.page_type
    )?;
    writeln!(out, "environment:  {}", plan.environment)?;
    writeln!(out, "dx:           {}", plan.dx)?;
    writeln!(
        out,
        "accounts:     {}",
        display_or_dash(&plan.martech.adobe.analytics.additional_accounts)
    )?;
    writeln!(
        out,
        "consent:      {}",
        plan.consent_id.as_deref().unwrap_or("-")
    )?;
    writeln!(
        out,
        "locales:      digital-data={} feds={}",
        plan.digital_data_language, plan.feds_locale
    )?;
    writeln!(
        out,
        "identity:     {} ({})",
        plan.identity.client_id, plan.identity.locale
    )?;
    writeln!(
        out,
        "region:       {}{}",
        plan.region.lang,
        plan.region
            .name
            .as_deref()
            .map(|name| format!(" ({name})"))
            .unwrap_or_default()
    )?;
    for resource in &plan.resources.resources {
        writeln!(out, "resource:     {}", resource.href)?;
    }
    writeln!(out, "sidekick:     {}", plan.sidekick.join(", "))?;
    Ok(())
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PageType;

    fn plan(url: &str) -> PagePlan {
        let args = PlanArgs {
            url: url.to_string(),
            error_page: false,
            html: None,
            stored_lang: None,
            json: false,
            pretty: false,
        };
        PagePlan::build(&args, &SiteConfig::default()).unwrap()
    }

    #[test]
    fn test_plan_production_post() {
        let plan = plan("https://blog.adobe.com/en/2021/12/09/my-post");
        assert_eq!(plan.classification.page_type, PageType::Post);
        assert_eq!(plan.environment, Environment::Production);
        assert!(!plan.dx);
        // Non-DX: no additional accounts
        assert_eq!(plan.martech.adobe.analytics.additional_accounts, "");
        assert_eq!(
            plan.consent_id.as_deref(),
            Some("7a5eb705-95ed-4cc4-a11d-0cc5760e93db")
        );
        assert_eq!(plan.digital_data_language, "en-US");
        assert!(plan.sidekick.contains(&"article-data"));
    }

    #[test]
    fn test_plan_dev_host() {
        let plan = plan("http://localhost:3000/ko/topics/news");
        assert_eq!(plan.environment, Environment::Dev);
        assert_eq!(plan.feds_locale, "kr");
        assert_eq!(
            plan.resources.resources[0].href,
            "/style/topic.css"
        );
    }

    #[test]
    fn test_plan_json_contains_classification() {
        let plan = plan("https://blog.adobe.com/");
        let json = serde_json::to_string(&plan).unwrap();
        assert!(json.contains("\"language\":\"en\""));
        assert!(json.contains("\"pageType\":\"home\""));
        assert!(json.contains("\"adobe\""));
    }
}
