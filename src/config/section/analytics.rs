//! `[analytics]` section configuration.
//!
//! Constants feeding the marketing-tech context, locale mappings,
//! identity bundle and consent-management lookup. Defaults carry the
//! production values; a fork only needs to override what differs.
//!
//! # Example
//!
//! ```toml
//! [analytics]
//! launch_property = "global"
//! dx_production_account = "adbadobedxprod"
//!
//! [analytics.identity]
//! client_id = "theblog-helix"
//!
//! [[analytics.consent]]
//! domain = "example.com"
//! id = "00000000-0000-0000-0000-000000000000"
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Tags that classify a post as a DX (experience-business) page.
const DX_TAGS: &[&str] = &[
    "Experience Cloud",
    "Experience Manager",
    "Magento Commerce",
    "Marketo Engage",
    "Target",
    "Commerce Cloud",
    "Campaign",
    "Audience Manager",
    "Analytics",
    "Advertising Cloud",
    "Travel & Hospitality",
    "Media & Entertainment",
    "Financial Services",
    "Government",
    "Non-profits",
    "Other",
    "Healthcare",
    "High Tech",
    "Retail",
    "Telecom",
    "Manufacturing",
    "Education",
    "B2B",
    "Social",
    "Personalization",
    "Campaign Management",
    "Content Management",
    "Email Marketing",
    "Commerce",
    "Advertising",
    "Digital Transformation",
];

/// Marketing/analytics context settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Launch property name.
    pub launch_property: String,

    /// Enable Target.
    pub target: bool,

    /// Enable Audience Manager.
    pub audience_manager: bool,

    /// Additional report suite for DX pages in production.
    pub dx_production_account: String,

    /// Additional report suite for DX pages on stage.
    pub dx_stage_account: String,

    /// Tags marking a DX page.
    pub dx_tags: Vec<String>,

    /// Page language -> digital-data locale overrides.
    pub language_map: FxHashMap<String, String>,

    /// Page language -> nav (feds) locale overrides.
    pub feds_map: FxHashMap<String, String>,

    /// Identity (IMS) settings.
    pub identity: IdentityConfig,

    /// Consent-management domain table, in lookup order.
    pub consent: Vec<ConsentDomain>,
}

/// Identity provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    pub client_id: String,
    pub scope: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            client_id: "theblog-helix".into(),
            scope: "AdobeID,openid".into(),
        }
    }
}

/// One `domain -> consent id` entry. The first entry whose domain is
/// contained in the page host wins; the first entry overall is the
/// fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsentDomain {
    pub domain: String,
    pub id: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        let consent = [
            ("adobe.com", "7a5eb705-95ed-4cc4-a11d-0cc5760e93db"),
            ("hlx.page", "3a6a37fe-9e07-4aa9-8640-8f358a623271"),
            ("project-helix.page", "45a95a10-dff7-4048-a2f3-a235b5ec0492"),
            ("helix-demo.xyz", "ff276bfd-1218-4a19-88d4-392a537b6ce3"),
            ("adobeaemcloud.com", "70cd62b6-0fe3-4e20-8788-ef0435b8cdb1"),
        ]
        .into_iter()
        .map(|(domain, id)| ConsentDomain {
            domain: domain.into(),
            id: id.into(),
        })
        .collect();

        Self {
            launch_property: "global".into(),
            target: true,
            audience_manager: true,
            dx_production_account: "adbadobedxprod".into(),
            dx_stage_account: "adbadobedxqa".into(),
            dx_tags: DX_TAGS.iter().map(|tag| (*tag).to_string()).collect(),
            language_map: FxHashMap::from_iter([("en".to_string(), "en-US".to_string())]),
            feds_map: FxHashMap::from_iter([("ko".to_string(), "kr".to_string())]),
            identity: IdentityConfig::default(),
            consent,
        }
    }
}
