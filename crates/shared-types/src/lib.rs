//! # Shared Types Crate
//!
//! Domain primitives shared across the CredChain credentialing registries.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every type that crosses a registry boundary
//!   (identities, the chain context, the status lifecycle, the authorization
//!   building blocks) is defined here, once.
//! - **Explicit State**: there is no global singleton. The admin slot and
//!   delegate sets are plain values owned by each registry, so isolated
//!   instances can coexist in tests and in the hosting runtime.
//! - **Pre-Authenticated Identity**: an [`Identity`] is an opaque principal
//!   string already authenticated by the hosting runtime; registries compare
//!   it by exact equality and never verify signatures themselves.

pub mod authorization;
pub mod entities;
pub mod status;

pub use authorization::{Admin, DelegateSet};
pub use entities::{BlockHeight, ChainContext, FacilityId, Identity};
pub use status::CredentialStatus;
