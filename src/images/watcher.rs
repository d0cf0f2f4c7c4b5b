//! Mutation watcher: the process entry point of the optimization pass.
//!
//! Installed once per page runtime and never torn down; a page "going
//! away" is the runtime being dropped. Each batch is handled
//! synchronously, in array order, because the ordinal decides which
//! image is the eager hero.

use crate::config::section::ImagesConfig;
use crate::core::{PageClassification, Viewport};
use crate::dom::{Document, MutationBatch};

use super::policy::scaled_width;
use super::rewrite::{OptimizationParams, optimized_url_with};

/// Watches document insertions and rewrites qualifying images.
///
/// Owns the ordinal counter: the 0-based count of qualifying images
/// handled since installation. Monotonic, never reset.
#[derive(Debug)]
pub struct ImageWatcher {
    ordinal: u64,
    cdn_marker: String,
    deferred_attr: String,
    lazy_class: String,
    defaults: OptimizationParams,
}

impl ImageWatcher {
    pub fn new(images: &ImagesConfig) -> Self {
        Self {
            ordinal: 0,
            cdn_marker: images.cdn_marker.clone(),
            deferred_attr: images.deferred_attr.clone(),
            lazy_class: images.lazy_class.clone(),
            defaults: images.default_params(),
        }
    }

    /// Qualifying images handled so far.
    pub fn ordinal(&self) -> u64 {
        self.ordinal
    }

    /// Handle one batch of insertions.
    ///
    /// A node qualifies only if it is an `img` whose `src` contains the
    /// CDN marker. Non-qualifying insertions have no side effect and do
    /// not advance the ordinal. The first qualifying image since
    /// installation loads eagerly; every later one is deferred to the
    /// secondary attribute and marked for the external lazy loader.
    pub fn on_batch(
        &mut self,
        doc: &mut Document,
        batch: &MutationBatch,
        classification: &PageClassification,
        viewport: Viewport,
    ) {
        for &id in &batch.added {
            let Some(src) = doc
                .element(id)
                .filter(|el| el.is("img"))
                .and_then(|el| el.attr("src"))
                .map(str::to_string)
            else {
                continue;
            };
            if !src.contains(&self.cdn_marker) {
                continue;
            }

            let width = scaled_width(classification.page_type, viewport, self.ordinal);
            let url = optimized_url_with(
                &src,
                &OptimizationParams::default().with_width(width),
                &self.defaults,
            );

            // No validation of the source string: best-effort rewrite of
            // whatever is present.
            if let Some(el) = doc.element_mut(id) {
                if self.ordinal == 0 {
                    el.set_attr("src", &url);
                } else {
                    el.set_attr(&self.deferred_attr, &url);
                    el.remove_attr("src");
                    el.add_class(&self.lazy_class);
                }
            }
            self.ordinal += 1;
        }
    }
}

// ============================================================================
// tests
// ============================================================================
