//! Responsive width policy.
//!
//! Pure width-band selection per page type, viewport and image ordinal.
//! The hero image on a post (ordinal 0) gets the largest band and loads
//! eagerly; later images are thumbnail-scale and deferred.

use crate::core::{PageType, Viewport};

/// Target pixel width before device-pixel-ratio scaling.
pub fn target_width(page_type: PageType, viewport_width: u32, ordinal: u64) -> u32 {
    match page_type {
        // full width topic banner
        PageType::Topic => {
            if viewport_width <= 600 {
                600
            } else if viewport_width <= 1200 {
                1200
            } else {
                2000
            }
        }
        // author pic
        PageType::Author => {
            if viewport_width <= 1200 {
                124
            } else {
                224
            }
        }
        // post and everything else: hero vs body images
        _ => {
            if viewport_width <= 600 {
                600
            } else if ordinal > 0 {
                800
            } else {
                1000
            }
        }
    }
}

/// Final width: the band scaled by the device pixel ratio, unrounded.
/// Fractional ratios pass through to the query parameter as-is.
pub fn scaled_width(page_type: PageType, viewport: Viewport, ordinal: u64) -> f64 {
    f64::from(target_width(page_type, viewport.width, ordinal)) * viewport.dpr
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_bands_at_boundaries() {
        for (vw, expected) in [(600, 600), (601, 1200), (1200, 1200), (1201, 2000)] {
            assert_eq!(
                target_width(PageType::Topic, vw, 0),
                expected,
                "viewport {vw}"
            );
        }
        // Ordinal never affects topic banners
        assert_eq!(target_width(PageType::Topic, 601, 5), 1200);
    }

    #[test]
    fn test_author_bands_at_boundaries() {
        assert_eq!(target_width(PageType::Author, 1200, 0), 124);
        assert_eq!(target_width(PageType::Author, 1201, 0), 224);
        assert_eq!(target_width(PageType::Author, 320, 3), 124);
    }

    #[test]
    fn test_post_hero_vs_body() {
        // Narrow viewports collapse hero and body into one band
        assert_eq!(target_width(PageType::Post, 600, 0), 600);
        assert_eq!(target_width(PageType::Post, 600, 4), 600);
        // Above 600 the hero is larger than body images
        assert_eq!(target_width(PageType::Post, 601, 0), 1000);
        assert_eq!(target_width(PageType::Post, 601, 1), 800);
        assert_eq!(target_width(PageType::Post, 1920, 0), 1000);
        assert_eq!(target_width(PageType::Post, 1920, 7), 800);
    }

    #[test]
    fn test_non_special_types_use_post_bands() {
        for page_type in [PageType::Home, PageType::Product, PageType::Blank] {
            assert_eq!(target_width(page_type, 900, 0), 1000, "{page_type}");
            assert_eq!(target_width(page_type, 900, 2), 800, "{page_type}");
        }
    }

    #[test]
    fn test_scaled_width_keeps_fraction() {
        let viewport = Viewport::new(900, 1.25);
        assert_eq!(scaled_width(PageType::Post, viewport, 0), 1250.0);
        // dpr 1.0 passes the band through unchanged
        assert_eq!(
            scaled_width(PageType::Topic, Viewport::new(500, 1.0), 0),
            600.0
        );
    }

    #[test]
    fn test_policy_is_deterministic() {
        let first = target_width(PageType::Topic, 601, 2);
        for _ in 0..3 {
            assert_eq!(target_width(PageType::Topic, 601, 2), first);
        }
    }
}
