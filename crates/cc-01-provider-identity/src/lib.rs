//! # CC-01 Provider Identity - Provider Profile Registry
//!
//! **Subsystem ID:** 1
//!
//! ## Purpose
//!
//! Maps a caller identity to its provider profile. Registration and profile
//! updates are self-service: the record under an identity can only ever be
//! written by that identity. The only privileged operation is reassigning
//! the registry admin slot.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|----------------------|
//! | One profile per identity, ever | `registry.rs` - `register()` |
//! | `created_at` survives profile updates | `registry.rs` - `update_profile()` |
//! | Admin slot reassigned only by its holder | `registry.rs` - `set_admin()` |
//!
//! ## Authorization
//!
//! | Operation | Authorized Caller |
//! |-----------|-------------------|
//! | `register` / `update_profile` | The profile's own identity |
//! | `set_admin` | Current admin |
//! | `profile` | Anyone (pure lookup) |
//!
//! ## Usage Example
//!
//! ```
//! use cc_01_provider_identity::prelude::*;
//! use shared_types::{ChainContext, Identity};
//!
//! let mut registry = ProviderIdentityRegistry::new(Identity::from("admin"));
//! let ctx = ChainContext::at_height(123);
//! let caller = Identity::from("SP1HTBVD3JG9C05J7HBJTHGR0GGW7KXW28M5JS8QE");
//!
//! registry
//!     .register(&caller, "Dr. John Doe", "Cardiology", "john.doe@hospital.com", &ctx)
//!     .unwrap();
//! assert!(registry.profile(&caller).is_some());
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod domain;
pub mod errors;
pub mod registry;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::domain::entities::ProviderProfile;
    pub use crate::errors::IdentityError;
    pub use crate::registry::ProviderIdentityRegistry;
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem ID within the credentialing family.
pub const SUBSYSTEM_ID: u8 = 1;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Provider Identity";
