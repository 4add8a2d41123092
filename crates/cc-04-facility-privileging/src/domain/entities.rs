//! # Core Domain Entities
//!
//! Facility metadata and the privilege records a facility grants.

use serde::{Deserialize, Serialize};
use shared_types::{BlockHeight, CredentialStatus, Identity};
use std::fmt;

// =============================================================================
// PROCEDURE ID
// =============================================================================

/// Registry-wide procedure sequence id.
///
/// 1-based, strictly increasing, never reused - even across providers and
/// facilities, since the counter is global to the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcedureId(pub u64);

impl fmt::Display for ProcedureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// FACILITY
// =============================================================================

/// A registered healthcare facility.
///
/// Created once by the admin; metadata is descriptive only and currently
/// immutable after registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    /// Display name, e.g. "General Hospital".
    pub name: String,
    /// Kind of facility, e.g. "Hospital".
    pub facility_type: String,
    /// Location, e.g. "New York".
    pub location: String,
    /// Block height at registration.
    pub created_at: BlockHeight,
}

// =============================================================================
// PRIVILEGE
// =============================================================================

/// A procedure privilege granted by a facility to a provider.
///
/// The grant audit pair (`granted_at`, `granted_by`) is fixed at grant time;
/// status changes stamp the separate (`last_updated`, `updated_by`) pair, so
/// the original grantor is never lost.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Privilege {
    /// Procedure covered by the grant, e.g. "Cardiac Surgery".
    pub procedure_name: String,
    /// Lifecycle status; fresh grants start [`CredentialStatus::Active`].
    pub status: CredentialStatus,
    /// Block height the privilege was granted at.
    pub granted_at: BlockHeight,
    /// Block height the privilege lapses at. Strict comparison: the
    /// privilege is already inactive when the chain reaches this height.
    pub expires_at: BlockHeight,
    /// Identity that granted the privilege. Never overwritten.
    pub granted_by: Identity,
    /// Block height of the most recent status change.
    pub last_updated: BlockHeight,
    /// Identity that performed the most recent status change.
    pub updated_by: Identity,
}

impl Privilege {
    /// Builds a fresh, active grant; audit pairs start at the grant itself.
    #[must_use]
    pub fn granted(
        procedure_name: String,
        expires_at: BlockHeight,
        granted_by: Identity,
        at: BlockHeight,
    ) -> Self {
        Self {
            procedure_name,
            status: CredentialStatus::Active,
            granted_at: at,
            expires_at,
            granted_by: granted_by.clone(),
            last_updated: at,
            updated_by: granted_by,
        }
    }

    /// Derived predicate: in force at the given height.
    #[must_use]
    pub fn is_active(&self, at: BlockHeight) -> bool {
        self.status == CredentialStatus::Active && self.expires_at > at
    }
}
