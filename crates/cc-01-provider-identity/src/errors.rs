//! # Error Types
//!
//! Tagged results for provider identity operations. Errors are returned to
//! the caller, never panicked; a failed operation leaves state untouched.

use shared_types::Identity;
use thiserror::Error;

/// Errors from provider identity operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// The caller already holds a profile; a given identity registers once.
    #[error("already registered: {provider}")]
    AlreadyRegistered {
        /// The identity that attempted a second registration.
        provider: Identity,
    },

    /// No profile exists for the referenced identity.
    #[error("provider not found: {provider}")]
    NotFound {
        /// The identity with no profile.
        provider: Identity,
    },

    /// Caller does not hold the admin slot.
    #[error("unauthorized: {caller} is not the registry admin")]
    Unauthorized {
        /// The rejected caller.
        caller: Identity,
    },
}
