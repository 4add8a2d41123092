//! # Credential Status Lifecycle
//!
//! The status enum shared by license and privilege records. Stored on chain
//! as its ordinal code, validated on write, unrestricted transitions: any
//! authorized caller may move a record to any in-range status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a license or privilege record.
///
/// Ordinals 1..=5 match the on-chain representation; anything outside that
/// range is rejected at the registry boundary before any state is touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CredentialStatus {
    /// Record is in force (subject to expiry).
    Active = 1,
    /// Temporarily out of force.
    Suspended = 2,
    /// Permanently withdrawn.
    Revoked = 3,
    /// Past its expiry date.
    Expired = 4,
    /// Issued but not yet in force.
    Pending = 5,
}

impl CredentialStatus {
    /// Lowest valid ordinal code.
    pub const MIN_CODE: u8 = 1;

    /// Highest valid ordinal code.
    pub const MAX_CODE: u8 = 5;

    /// Decodes an ordinal code, `None` if outside the declared range.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Active),
            2 => Some(Self::Suspended),
            3 => Some(Self::Revoked),
            4 => Some(Self::Expired),
            5 => Some(Self::Pending),
            _ => None,
        }
    }

    /// Returns the ordinal code.
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for CredentialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Active => "active",
            Self::Suspended => "suspended",
            Self::Revoked => "revoked",
            Self::Expired => "expired",
            Self::Pending => "pending",
        };
        f.write_str(name)
    }
}

impl From<CredentialStatus> for u8 {
    fn from(status: CredentialStatus) -> Self {
        status.code()
    }
}

impl TryFrom<u8> for CredentialStatus {
    type Error = InvalidStatusCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(InvalidStatusCode(code))
    }
}

/// Raised when deserializing an out-of-range status code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidStatusCode(pub u8);

impl fmt::Display for InvalidStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid status code: {} not in 1..=5", self.0)
    }
}

impl std::error::Error for InvalidStatusCode {}

// =============================================================================
// TESTS
// =============================================================================
