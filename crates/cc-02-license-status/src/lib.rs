//! # CC-02 License Status - License Lifecycle Registry
//!
//! **Subsystem ID:** 2
//!
//! ## Purpose
//!
//! Tracks one medical license record per provider identity, with a status
//! lifecycle and a block-height expiry. All mutations are restricted to the
//! registry admin and a set of delegated issuing authorities.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|----------------------|
//! | Status codes constrained to 1..=5, validated on write | `registry.rs` - `update_status()` |
//! | "Active" requires `status == Active` AND `expiry > height` | `domain/entities.rs` - `License::is_active()` |
//! | Rejected calls leave the store untouched | `registry.rs` - gate-first check order |
//!
//! ## Authorization
//!
//! | Operation | Authorized Caller |
//! |-----------|-------------------|
//! | `register_license` / `update_status` / `update_expiry` | Admin or delegated authority |
//! | `add_authority` | Admin only |
//! | `license` / `is_license_active` | Anyone (pure lookup) |
//!
//! Re-registering a provider's license silently overwrites the existing
//! record - there is deliberately no duplicate guard here, unlike the
//! identity and facility registries (see DESIGN.md).
//!
//! ## Usage Example
//!
//! ```
//! use cc_02_license_status::prelude::*;
//! use shared_types::{ChainContext, Identity};
//!
//! let admin = Identity::from("admin");
//! let mut registry = LicenseRegistry::new(admin.clone());
//! let provider = Identity::from("SP1HTBVD3JG9C05J7HBJTHGR0GGW7KXW28M5JS8QE");
//! let ctx = ChainContext::at_height(123);
//!
//! registry
//!     .register_license(&admin, &provider, "MD12345", "Medical Doctor",
//!                       "State Medical Board", 100, 200, &ctx)
//!     .unwrap();
//! assert!(registry.is_license_active(&provider, &ctx));
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::too_many_arguments)]

pub mod domain;
pub mod errors;
pub mod registry;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::domain::entities::License;
    pub use crate::errors::LicenseError;
    pub use crate::registry::{LicenseRegistry, RegistryStats};
    pub use shared_types::CredentialStatus;
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem ID within the credentialing family.
pub const SUBSYSTEM_ID: u8 = 2;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "License Status";
