//! # Error Types
//!
//! Tagged results for qualification operations.

use crate::domain::entities::QualificationId;
use shared_types::Identity;
use thiserror::Error;

/// Errors from qualification registry operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QualificationError {
    /// Caller is neither the admin nor a delegated verifier.
    #[error("unauthorized: {caller} is not a verifier")]
    Unauthorized {
        /// The rejected caller.
        caller: Identity,
    },

    /// No qualification exists under `(provider, qualification)`.
    #[error("qualification not found: provider {provider}, id {qualification}")]
    NotFound {
        /// The provider whose record was referenced.
        provider: Identity,
        /// The missing sequence id.
        qualification: QualificationId,
    },
}
