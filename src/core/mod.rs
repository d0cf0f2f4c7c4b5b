//! Core types - pure abstractions shared across the codebase.

mod classify;
mod lang;
mod page_type;
mod viewport;

pub use classify::{PageClassification, PageLocation};
pub use lang::Language;
pub use page_type::PageType;
pub use viewport::Viewport;
