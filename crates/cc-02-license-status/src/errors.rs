//! # Error Types
//!
//! Tagged results for license operations.

use shared_types::Identity;
use thiserror::Error;

/// Errors from license registry operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LicenseError {
    /// Caller is neither the admin nor a delegated authority.
    #[error("unauthorized: {caller} is not an issuing authority")]
    Unauthorized {
        /// The rejected caller.
        caller: Identity,
    },

    /// No license record exists for the referenced provider.
    #[error("license not found for provider: {provider}")]
    NotFound {
        /// The provider with no license record.
        provider: Identity,
    },

    /// Status code outside the declared 1..=5 range.
    #[error("invalid status code: {code} not in 1..=5")]
    InvalidStatus {
        /// The rejected code.
        code: u8,
    },
}
