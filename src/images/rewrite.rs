//! Image URL rewriting for the optimization CDN.
//!
//! Total, pure string transform: malformed query strings degrade to
//! best-effort output, never an error. The CDN performing the actual
//! transcoding is external; this module only emits parameterized URLs.

use url::form_urlencoded;

/// Recognized optimization parameters.
///
/// `width` and `height` are floating point so fractional device-pixel
/// ratios survive into the query string unrounded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptimizationParams {
    pub auto: Option<String>,
    pub format: Option<String>,
    pub optimize: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub crop: Option<String>,
}

impl OptimizationParams {
    /// Default parameter set applied to any non-GIF source.
    pub fn defaults() -> Self {
        Self {
            auto: Some("webp".into()),
            format: Some("pjpg".into()),
            optimize: Some("medium".into()),
            ..Self::default()
        }
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_crop(mut self, crop: impl Into<String>) -> Self {
        self.crop = Some(crop.into());
        self
    }

    /// Merge `self` over `base`: explicitly supplied values win.
    fn merged_over(&self, base: &Self) -> Self {
        Self {
            auto: self.auto.clone().or_else(|| base.auto.clone()),
            format: self.format.clone().or_else(|| base.format.clone()),
            optimize: self.optimize.clone().or_else(|| base.optimize.clone()),
            width: self.width.or(base.width),
            height: self.height.or(base.height),
            crop: self.crop.clone().or_else(|| base.crop.clone()),
        }
    }

    /// Recognized keys with their truthy values, in canonical order.
    ///
    /// A falsy value (empty string, zero) is treated as absent: it never
    /// sets or clears a query parameter. This means `width: 0` cannot be
    /// used to drop a previously-set width, matching the legacy contract.
    fn entries(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        let mut push_str = |key, value: &Option<String>| {
            if let Some(value) = value
                && !value.is_empty()
            {
                out.push((key, value.clone()));
            }
        };
        push_str("auto", &self.auto);
        push_str("format", &self.format);
        push_str("optimize", &self.optimize);
        for (key, value) in [("width", self.width), ("height", self.height)] {
            if let Some(value) = value
                && value != 0.0
            {
                out.push((key, format_number(value)));
            }
        }
        if let Some(crop) = &self.crop
            && !crop.is_empty()
        {
            out.push(("crop", crop.clone()));
        }
        out
    }
}

/// Format a numeric parameter the way the query string expects: integral
/// values without a trailing `.0`, fractional values as-is.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Rewrite `src` with optimization parameters merged into the defaults.
///
/// GIF sources receive no defaults (animation must be preserved), but
/// explicitly supplied parameters still apply.
pub fn optimized_url(src: &str, overrides: &OptimizationParams) -> String {
    optimized_url_with(src, overrides, &OptimizationParams::defaults())
}

/// Rewrite `src` against a caller-supplied default parameter set.
///
/// Existing query parameters survive in their original order; recognized
/// keys with truthy merged values replace the first existing pair of that
/// key in place (later duplicates of the key are dropped), or append at
/// the end when new. Anything after a second `?` is discarded.
pub fn optimized_url_with(
    src: &str,
    overrides: &OptimizationParams,
    defaults: &OptimizationParams,
) -> String {
    let mut pieces = src.splitn(3, '?');
    let path = pieces.next().unwrap_or_default();
    let query = pieces.next().unwrap_or_default();

    let params = if path.ends_with(".gif") {
        overrides.clone()
    } else {
        overrides.merged_over(defaults)
    };

    let mut pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    for (key, value) in params.entries() {
        match pairs.iter().position(|(existing, _)| existing == key) {
            Some(first) => {
                pairs[first].1 = value;
                let mut index = 0;
                pairs.retain(|(existing, _)| {
                    let keep = existing != key || index <= first;
                    index += 1;
                    keep
                });
            }
            None => pairs.push((key.to_string(), value)),
        }
    }

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(&pairs)
        .finish();
    format!("{path}?{query}")
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_to_plain_source() {
        let url = optimized_url("https://cdn/x/hlx_abc.png", &OptimizationParams::default());
        assert_eq!(
            url,
            "https://cdn/x/hlx_abc.png?auto=webp&format=pjpg&optimize=medium"
        );
    }

    #[test]
    fn test_width_appended_after_defaults() {
        let url = optimized_url(
            "/hlx_abc.png",
            &OptimizationParams::default().with_width(1200.0),
        );
        assert_eq!(url, "/hlx_abc.png?auto=webp&format=pjpg&optimize=medium&width=1200");
    }

    #[test]
    fn test_fractional_width_passes_through() {
        let url = optimized_url(
            "/hlx_abc.png",
            &OptimizationParams::default().with_width(750.0 * 1.5),
        );
        assert!(url.ends_with("width=1125"));

        let url = optimized_url(
            "/hlx_abc.png",
            &OptimizationParams::default().with_width(600.0 * 1.25),
        );
        assert!(url.ends_with("width=750"));

        let url = optimized_url(
            "/hlx_abc.png",
            &OptimizationParams::default().with_width(500.5),
        );
        assert!(url.ends_with("width=500.5"));
    }

    #[test]
    fn test_gif_gets_no_defaults() {
        let url = optimized_url("/hlx_anim.gif", &OptimizationParams::default());
        assert_eq!(url, "/hlx_anim.gif?");

        // Explicit parameters still apply
        let url = optimized_url("/hlx_anim.gif", &OptimizationParams::default().with_width(600.0));
        assert_eq!(url, "/hlx_anim.gif?width=600");
    }

    #[test]
    fn test_existing_params_survive() {
        let url = optimized_url(
            "/hlx_a.png?foo=bar&width=100",
            &OptimizationParams::default().with_width(800.0),
        );
        // foo keeps its position, width is replaced in place
        assert_eq!(
            url,
            "/hlx_a.png?foo=bar&width=800&auto=webp&format=pjpg&optimize=medium"
        );
    }

    #[test]
    fn test_idempotent_rewrite() {
        let params = OptimizationParams::default().with_width(800.0);
        let once = optimized_url("/hlx_a.png", &params);
        let twice = optimized_url(&once, &params);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_duplicate_existing_keys_collapse() {
        let url = optimized_url(
            "/hlx_a.png?width=1&x=2&width=3",
            &OptimizationParams::default().with_width(800.0),
        );
        assert_eq!(
            url,
            "/hlx_a.png?width=800&x=2&auto=webp&format=pjpg&optimize=medium"
        );
    }

    #[test]
    fn test_falsy_width_leaves_existing_untouched() {
        // width: 0 is falsy and must not clear a previously-set width
        let url = optimized_url(
            "/hlx_a.png?width=640",
            &OptimizationParams::default().with_width(0.0),
        );
        assert_eq!(
            url,
            "/hlx_a.png?width=640&auto=webp&format=pjpg&optimize=medium"
        );
    }

    #[test]
    fn test_malformed_query_degrades() {
        let url = optimized_url("/hlx_a.png?&&=&%zz", &OptimizationParams::default());
        // Never errors; defaults still appended
        assert!(url.starts_with("/hlx_a.png?"));
        assert!(url.contains("auto=webp"));
    }

    #[test]
    fn test_extra_question_marks_discarded() {
        let url = optimized_url("/hlx_a.png?width=100?junk=1", &OptimizationParams::default());
        assert!(!url.contains("junk"));
    }

    #[test]
    fn test_query_encoding() {
        let url = optimized_url(
            "/hlx_a.png",
            &OptimizationParams::default().with_height(512.0).with_crop("3:2"),
        );
        assert_eq!(
            url,
            "/hlx_a.png?auto=webp&format=pjpg&optimize=medium&height=512&crop=3%3A2"
        );
    }

    #[test]
    fn test_override_wins_over_default() {
        let mut params = OptimizationParams::default();
        params.format = Some("png".into());
        let url = optimized_url("/hlx_a.png", &params);
        assert!(url.contains("format=png"));
        assert!(!url.contains("pjpg"));
    }
}
