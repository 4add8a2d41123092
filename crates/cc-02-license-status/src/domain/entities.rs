//! # Core Domain Entities
//!
//! The license record held per provider identity.

use serde::{Deserialize, Serialize};
use shared_types::{BlockHeight, CredentialStatus, Identity};

/// A provider's license record.
///
/// One record per provider; re-registration overwrites it wholesale. The
/// audit pair (`last_updated`, `updated_by`) is stamped by every mutation,
/// so it always reflects the most recent actor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    /// Issuing body's license number, e.g. "MD12345".
    pub license_number: String,
    /// Kind of license, e.g. "Medical Doctor".
    pub license_type: String,
    /// Issuing body, e.g. "State Medical Board".
    pub issuing_authority: String,
    /// Lifecycle status; new registrations start [`CredentialStatus::Active`].
    pub status: CredentialStatus,
    /// Block height the license was issued at.
    pub issue_date: BlockHeight,
    /// Block height the license lapses at. Strict comparison: the license
    /// is already inactive when the chain reaches this height.
    pub expiry_date: BlockHeight,
    /// Block height of the most recent mutation.
    pub last_updated: BlockHeight,
    /// Identity that performed the most recent mutation.
    pub updated_by: Identity,
}

impl License {
    /// Derived predicate: in force at the given height.
    ///
    /// Requires `status == Active` and `expiry_date > at`. Every other
    /// status, and any record at or past expiry, is inactive.
    #[must_use]
    pub fn is_active(&self, at: BlockHeight) -> bool {
        self.status == CredentialStatus::Active && self.expiry_date > at
    }
}
