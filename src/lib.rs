//! Pivot Forge - offline pivot helper for OSINT investigations
//!
//! Generates username variants, builds pivot links for public lookup sites and
//! derives deterministic (fabricated, non-authoritative) intel buckets for
//! domains, emails, phone numbers and IP addresses.

pub mod error;
pub mod intel;
pub mod pivots;
pub mod types;
pub mod variants;
pub mod workspace;

// Re-export commonly used types
pub use error::{PivotForgeError, Result};
pub use types::{ForgeConfig, InputKind, IntelValue};

// Re-export main functionality
pub use intel::{
    classify, classify_domain, classify_email, classify_ip, classify_phone, score, IntelRecord,
};
pub use pivots::{pivot_links, PivotLink};
pub use variants::{generate_variants, VariantConfig, VariantGenerator};
pub use workspace::{Action, Report, Workspace};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
