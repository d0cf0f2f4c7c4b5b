//! Adaptive image optimization: width policy, URL rewriting, and the
//! mutation-driven watcher that applies both.

mod policy;
mod rewrite;
mod watcher;

pub use policy::{scaled_width, target_width};
pub use rewrite::{OptimizationParams, optimized_url, optimized_url_with};
pub use watcher::ImageWatcher;
