//! Configuration section definitions.
//!
//! One module per `masthead.toml` section, each with a `Default` impl
//! carrying the production constants.

mod analytics;
mod images;
mod regions;
mod resources;
mod sidekick;
mod site;

pub use analytics::{AnalyticsConfig, ConsentDomain, IdentityConfig};
pub use images::ImagesConfig;
pub use regions::{Region, default_regions};
pub use resources::ResourcesConfig;
pub use sidekick::SidekickConfig;
pub use site::SiteInfoConfig;
