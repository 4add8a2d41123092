//! # Core Entities
//!
//! Identity principals and the chain context supplied by the hosting runtime.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// IDENTITY
// =============================================================================

/// An opaque caller/account principal (e.g. a chain address).
///
/// The hosting runtime authenticates the principal before a registry call is
/// dispatched; registries only compare identities by exact equality.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Creates an identity from any string-like principal.
    pub fn new(principal: impl Into<String>) -> Self {
        Self(principal.into())
    }

    /// Returns the principal as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({})", self.0)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(principal: &str) -> Self {
        Self(principal.to_owned())
    }
}

impl From<String> for Identity {
    fn from(principal: String) -> Self {
        Self(principal)
    }
}

// =============================================================================
// FACILITY ID
// =============================================================================

/// An opaque facility principal.
///
/// Kept distinct from [`Identity`] so privilege keys are tuples of typed
/// identifiers rather than delimiter-joined strings.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacilityId(String);

impl FacilityId {
    /// Creates a facility id from any string-like principal.
    pub fn new(principal: impl Into<String>) -> Self {
        Self(principal.into())
    }

    /// Returns the principal as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for FacilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FacilityId({})", self.0)
    }
}

impl fmt::Display for FacilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FacilityId {
    fn from(principal: &str) -> Self {
        Self(principal.to_owned())
    }
}

impl From<String> for FacilityId {
    fn from(principal: String) -> Self {
        Self(principal)
    }
}

// =============================================================================
// CHAIN CONTEXT
// =============================================================================

/// Block height: the external monotonically non-decreasing time reference.
pub type BlockHeight = u64;

/// Read-only view of the hosting chain, supplied per call.
///
/// The registries never advance the height themselves; the runtime does.
/// Expiry comparisons are strict: a record expiring at height `h` is already
/// inactive when the chain is at `h`.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct ChainContext {
    /// Current block height.
    pub block_height: BlockHeight,
}

impl ChainContext {
    /// Creates a context at the given block height.
    #[must_use]
    pub const fn at_height(block_height: BlockHeight) -> Self {
        Self { block_height }
    }

    /// Returns a context advanced by `blocks`, saturating at the maximum.
    ///
    /// Test helper for expiry scenarios; the runtime owns the real counter.
    #[must_use]
    pub const fn advanced_by(self, blocks: u64) -> Self {
        Self {
            block_height: self.block_height.saturating_add(blocks),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
