//! Consent-management (OneTrust) domain lookup.

use crate::config::ConsentDomain;

/// Resolve the consent-management id for a host.
///
/// The table is ordered: the first entry whose domain is contained in
/// the host wins; a host matching nothing falls back to the first
/// entry. An empty table resolves to nothing.
pub fn consent_domain_id<'a>(host: &str, consent: &'a [ConsentDomain]) -> Option<&'a str> {
    consent
        .iter()
        .find(|entry| host.contains(&entry.domain))
        .or_else(|| consent.first())
        .map(|entry| entry.id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalyticsConfig;

    #[test]
    fn test_consent_lookup_by_containment() {
        let consent = AnalyticsConfig::default().consent;
        assert_eq!(
            consent_domain_id("blog.adobe.com", &consent),
            Some("7a5eb705-95ed-4cc4-a11d-0cc5760e93db")
        );
        assert_eq!(
            consent_domain_id("theblog--adobe.hlx.page", &consent),
            Some("3a6a37fe-9e07-4aa9-8640-8f358a623271")
        );
    }

    #[test]
    fn test_consent_fallback_to_first_entry() {
        let consent = AnalyticsConfig::default().consent;
        assert_eq!(
            consent_domain_id("localhost", &consent),
            Some("7a5eb705-95ed-4cc4-a11d-0cc5760e93db")
        );
    }

    #[test]
    fn test_consent_empty_table() {
        assert_eq!(consent_domain_id("blog.adobe.com", &[]), None);
    }

    #[test]
    fn test_consent_order_wins() {
        let consent = vec![
            ConsentDomain {
                domain: "adobe.com".into(),
                id: "first".into(),
            },
            ConsentDomain {
                domain: "blog.adobe.com".into(),
                id: "second".into(),
            },
        ];
        // Both domains are contained in the host; the earlier entry wins
        assert_eq!(consent_domain_id("blog.adobe.com", &consent), Some("first"));
    }
}
