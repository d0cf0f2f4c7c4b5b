//! Marketing-tech context assembly.
//!
//! Serializes to the tag-management loader's expected JSON shape:
//!
//! ```json
//! {"adobe": {"launch": {"property": "global", "environment": "production"},
//!            "analytics": {"additionalAccounts": "adbadobedxprod"},
//!            "target": true, "audienceManager": true}}
//! ```

use serde::Serialize;

use crate::config::AnalyticsConfig;
use crate::core::Language;

use super::env::Environment;

#[derive(Debug, Clone, Serialize)]
pub struct MarTechContext {
    pub adobe: AdobeContext,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdobeContext {
    pub launch: LaunchContext,
    pub analytics: AnalyticsContext,
    pub target: bool,
    #[serde(rename = "audienceManager")]
    pub audience_manager: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LaunchContext {
    pub property: String,
    pub environment: Environment,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsContext {
    /// Additional report suites, comma separated. Only set for DX pages
    /// in production or stage.
    #[serde(rename = "additionalAccounts")]
    pub additional_accounts: String,
}

impl MarTechContext {
    pub fn build(env: Environment, is_dx: bool, analytics: &AnalyticsConfig) -> Self {
        let additional_accounts = if is_dx {
            match env {
                Environment::Production => analytics.dx_production_account.clone(),
                Environment::Stage => analytics.dx_stage_account.clone(),
                Environment::Dev => String::new(),
            }
        } else {
            String::new()
        };

        Self {
            adobe: AdobeContext {
                launch: LaunchContext {
                    property: analytics.launch_property.clone(),
                    environment: env,
                },
                analytics: AnalyticsContext {
                    additional_accounts,
                },
                target: analytics.target,
                audience_manager: analytics.audience_manager,
            },
        }
    }
}

// ============================================================================
// locale mappings
// ============================================================================

/// Digital-data locale for a page language (`en` -> `en-US`), falling
/// back to the bare code.
pub fn digital_data_language(language: Language, analytics: &AnalyticsConfig) -> String {
    let code = language.code();
    analytics
        .language_map
        .get(code)
        .cloned()
        .unwrap_or_else(|| code.to_string())
}

/// Nav (feds) locale for a page language (`ko` -> `kr`).
pub fn feds_locale(language: Language, analytics: &AnalyticsConfig) -> String {
    let code = language.code();
    analytics
        .feds_map
        .get(code)
        .cloned()
        .unwrap_or_else(|| code.to_string())
}

// ============================================================================
// identity
// ============================================================================

/// Identity-provider bundle exposed to the host page.
#[derive(Debug, Clone, Serialize)]
pub struct IdentityContext {
    pub client_id: String,
    pub scope: String,
    pub locale: String,
}

impl IdentityContext {
    pub fn build(language: Language, analytics: &AnalyticsConfig) -> Self {
        Self {
            client_id: analytics.identity.client_id.clone(),
            scope: analytics.identity.scope.clone(),
            locale: language.code().to_string(),
        }
    }
}

// ============================================================================
// tests
// ============================================================================
