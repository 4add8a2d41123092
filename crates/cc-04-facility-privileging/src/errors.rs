//! # Error Types
//!
//! Tagged results for facility and privilege operations.

use crate::domain::entities::ProcedureId;
use shared_types::{FacilityId, Identity};
use thiserror::Error;

/// Errors from privileging registry operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrivilegeError {
    /// Caller lacks the admin slot / facility-admin delegation the
    /// operation requires.
    #[error("unauthorized: {caller} may not administer this facility")]
    Unauthorized {
        /// The rejected caller.
        caller: Identity,
    },

    /// A facility with this id is already registered.
    #[error("facility already exists: {facility}")]
    AlreadyExists {
        /// The contested facility id.
        facility: FacilityId,
    },

    /// The referenced facility is not registered.
    #[error("facility not found: {facility}")]
    FacilityNotFound {
        /// The unknown facility id.
        facility: FacilityId,
    },

    /// No privilege exists under `(facility, provider, procedure)`.
    #[error("privilege not found: facility {facility}, provider {provider}, procedure {procedure}")]
    NotFound {
        /// Facility part of the key.
        facility: FacilityId,
        /// Provider part of the key.
        provider: Identity,
        /// Missing procedure id.
        procedure: ProcedureId,
    },

    /// Status code outside the declared 1..=5 range.
    #[error("invalid status code: {code} not in 1..=5")]
    InvalidStatus {
        /// The rejected code.
        code: u8,
    },
}
