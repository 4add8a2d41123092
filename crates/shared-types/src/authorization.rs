//! # Authorization Building Blocks
//!
//! Every mutating registry operation is gated by set membership: the caller
//! must be the admin, or belong to a registry-specific delegate set, or (for
//! privileging) a per-facility delegate set. These are the two primitives
//! the registries compose; the gating policy itself (which set satisfies
//! which operation, and which error to return) lives in each registry.
//!
//! No cryptographic proof is modeled here. The hosting runtime authenticates
//! the caller before the registry is invoked; membership is the whole check.

use crate::entities::Identity;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// =============================================================================
// ADMIN SLOT
// =============================================================================

/// The registry-wide admin slot as an explicit value.
///
/// Exactly one identity holds the slot at a time. Reassignment is exposed as
/// a plain mutation; the owning registry enforces that only the current
/// holder may trigger it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    current: Identity,
}

impl Admin {
    /// Seats the genesis admin.
    pub fn new(genesis: impl Into<Identity>) -> Self {
        Self {
            current: genesis.into(),
        }
    }

    /// Returns the current admin identity.
    #[must_use]
    pub fn current(&self) -> &Identity {
        &self.current
    }

    /// Returns true if `caller` holds the slot.
    #[must_use]
    pub fn is(&self, caller: &Identity) -> bool {
        &self.current == caller
    }

    /// Hands the slot to `new_admin`. Callers gate this on [`Admin::is`].
    pub fn reassign(&mut self, new_admin: Identity) {
        self.current = new_admin;
    }
}

// =============================================================================
// DELEGATE SET
// =============================================================================

/// An explicit membership set of delegated identities.
///
/// Used for license authorities, qualification verifiers, and per-facility
/// admins. Grants are idempotent and revocation removes the member outright;
/// the observable contract is the membership test, not grant history.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegateSet {
    members: HashSet<Identity>,
}

impl DelegateSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `identity` to the set. Returns true if it was not yet a member.
    pub fn grant(&mut self, identity: Identity) -> bool {
        self.members.insert(identity)
    }

    /// Removes `identity` from the set. Returns true if it was a member.
    pub fn revoke(&mut self, identity: &Identity) -> bool {
        self.members.remove(identity)
    }

    /// Membership test.
    #[must_use]
    pub fn contains(&self, identity: &Identity) -> bool {
        self.members.contains(identity)
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if no identity has been delegated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
