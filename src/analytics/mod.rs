//! Marketing/analytics context assembly.
//!
//! Pure derivations from the page host, classification and document:
//! environment, DX detection, the marketing-tech JSON context, locale
//! mappings, the identity bundle and the consent-management lookup.

mod context;
mod dx;
mod env;
mod privacy;

pub use context::{
    IdentityContext, MarTechContext, digital_data_language, feds_locale,
};
pub use dx::is_dx_page;
pub use env::Environment;
pub use privacy::consent_domain_id;
