//! # Core Domain Entities
//!
//! Qualification records keyed by `(provider, sequence id)`.

use serde::{Deserialize, Serialize};
use shared_types::{BlockHeight, Identity};
use std::fmt;

// =============================================================================
// QUALIFICATION ID
// =============================================================================

/// Registry-wide qualification sequence id.
///
/// 1-based, strictly increasing, never reused. The counter is global to the
/// registry, so ids are unique across providers as well.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualificationId(pub u64);

impl fmt::Display for QualificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// QUALIFICATION
// =============================================================================

/// A provider-submitted qualification awaiting (or holding) attestation.
///
/// Verification is a boolean, not a status lifecycle: a record is either
/// unverified (as submitted) or verified with the attesting identity and
/// height recorded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qualification {
    /// Degree or certification, e.g. "MD".
    pub degree: String,
    /// Awarding institution, e.g. "Harvard Medical School".
    pub institution: String,
    /// Year awarded.
    pub year: u16,
    /// Whether a verifier has attested to this record.
    pub verified: bool,
    /// The attesting identity, once verified.
    pub verifier: Option<Identity>,
    /// Block height of the attestation, once verified.
    pub verified_at: Option<BlockHeight>,
}

impl Qualification {
    /// Builds a fresh, unverified submission.
    #[must_use]
    pub fn submitted(degree: String, institution: String, year: u16) -> Self {
        Self {
            degree,
            institution,
            year,
            verified: false,
            verifier: None,
            verified_at: None,
        }
    }

    /// Marks the record as attested by `verifier` at height `at`.
    pub fn attest(&mut self, verifier: Identity, at: BlockHeight) {
        self.verified = true;
        self.verifier = Some(verifier);
        self.verified_at = Some(at);
    }
}
