//! Per-page runtime: the explicit context object for one page load.
//!
//! Owns the classification (computed once at construction), the
//! document, the viewport readings and the installed image watcher.
//! Construction is the install step; there is no uninstall, the runtime
//! is dropped wholesale when the page goes away.

use crate::config::SiteConfig;
use crate::core::{PageClassification, PageLocation, Viewport};
use crate::dom::Document;
use crate::images::ImageWatcher;

/// One page load.
#[derive(Debug)]
pub struct PageRuntime {
    location: PageLocation,
    classification: PageClassification,
    viewport: Viewport,
    doc: Document,
    watcher: ImageWatcher,
}

impl PageRuntime {
    /// Classify the location and install the watcher. Happens exactly
    /// once per page.
    pub fn new(location: PageLocation, viewport: Viewport, config: &SiteConfig) -> Self {
        let classification = PageClassification::classify(&location);
        Self {
            location,
            classification,
            viewport,
            doc: Document::new(),
            watcher: ImageWatcher::new(&config.images),
        }
    }

    pub fn location(&self) -> &PageLocation {
        &self.location
    }

    /// Shared read access for every downstream consumer.
    pub fn classification(&self) -> &PageClassification {
        &self.classification
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    /// Parse an HTML fragment into the body and deliver the resulting
    /// insertions as one batch. Multiple calls model multiple observer
    /// invocations across macrotasks.
    pub fn ingest_html(&mut self, html: &str) {
        let body = self.doc.body();
        self.doc.ingest_fragment(body, html);
        self.pump();
    }

    /// Parse a complete page into the scaffold, then deliver one batch.
    pub fn ingest_page(&mut self, html: &str) {
        self.doc.ingest_page(html);
        self.pump();
    }

    /// Deliver pending journal entries as one batch (used after
    /// programmatic appends).
    pub fn pump(&mut self) {
        let batch = self.doc.take_batch();
        if batch.is_empty() {
            return;
        }
        self.watcher
            .on_batch(&mut self.doc, &batch, &self.classification, self.viewport);
    }

    /// Serialize the instrumented document.
    pub fn render(&self) -> String {
        self.doc.to_html()
    }
}

// ============================================================================
// tests
// ============================================================================
