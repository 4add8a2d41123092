//! # CC-04 Facility Privileging - Procedure Privilege Registry
//!
//! **Subsystem ID:** 4
//!
//! ## Purpose
//!
//! Tracks registered healthcare facilities and the procedure privileges
//! each facility grants to providers. Privileges are keyed by the typed
//! triple `(facility, provider, procedure id)`; procedure ids come from a
//! registry-wide 1-based counter and are never reused, so successive grants
//! get strictly increasing ids even across providers and facilities.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|----------------------|
//! | Facility ids are unique | `registry.rs` - `register_facility()` |
//! | Procedure ids strictly increasing, never reused | `registry.rs` - `grant_privilege()` |
//! | Status codes constrained to 1..=5, validated on write | `registry.rs` - `update_privilege_status()` |
//! | "Active" requires `status == Active` AND `expires_at > height` | `domain/entities.rs` - `Privilege::is_active()` |
//! | Original grantor survives status changes | `domain/entities.rs` - `Privilege::granted_by` |
//!
//! ## Authorization
//!
//! | Operation | Authorized Caller |
//! |-----------|-------------------|
//! | `register_facility` | Admin only |
//! | `grant_privilege` / `update_privilege_status` | Admin or facility-admin of that facility |
//! | `add_facility_admin` | Admin or existing facility-admin of that facility |
//! | lookups / `is_privilege_active` | Anyone |
//!
//! The gate runs before the facility-existence check, so an undelegated
//! caller probing an unregistered facility is told `Unauthorized`, not
//! `FacilityNotFound`.
//!
//! ## Usage Example
//!
//! ```
//! use cc_04_facility_privileging::prelude::*;
//! use shared_types::{ChainContext, FacilityId, Identity};
//!
//! let admin = Identity::from("admin");
//! let mut registry = PrivilegingRegistry::new(admin.clone());
//! let facility = FacilityId::from("F1");
//! let provider = Identity::from("P1");
//! let ctx = ChainContext::at_height(123);
//!
//! registry
//!     .register_facility(&admin, facility.clone(), "General Hospital", "Hospital", "New York", &ctx)
//!     .unwrap();
//! let id = registry
//!     .grant_privilege(&admin, &facility, &provider, "Cardiac Surgery", 200, &ctx)
//!     .unwrap();
//! assert_eq!(id, ProcedureId(1));
//! assert!(registry.is_privilege_active(&facility, &provider, id, &ctx));
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
    pub use crate::domain::entities::{Facility, Privilege, ProcedureId};
    pub use crate::errors::PrivilegeError;
    pub use crate::registry::{PrivilegingRegistry, RegistryStats};
    pub use shared_types::CredentialStatus;
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem ID within the credentialing family.
pub const SUBSYSTEM_ID: u8 = 4;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Facility Privileging";
