//! # Core Domain Entities
//!
//! The provider profile record held under each registered identity.

use serde::{Deserialize, Serialize};
use shared_types::BlockHeight;

/// A provider's self-maintained profile.
///
/// Created once on registration and updated in place; never deleted.
/// `created_at` is fixed at registration, `updated_at` tracks the most
/// recent profile edit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderProfile {
    /// Display name, e.g. "Dr. John Doe".
    pub name: String,
    /// Medical specialty, e.g. "Cardiology".
    pub specialty: String,
    /// Contact channel, e.g. an email address.
    pub contact: String,
    /// Block height at registration. Never changes afterwards.
    pub created_at: BlockHeight,
    /// Block height of the most recent profile edit.
    pub updated_at: BlockHeight,
}

impl ProviderProfile {
    /// Builds a fresh profile; both audit heights start at `at`.
    #[must_use]
    pub fn new(name: String, specialty: String, contact: String, at: BlockHeight) -> Self {
        Self {
            name,
            specialty,
            contact,
            created_at: at,
            updated_at: at,
        }
    }
}
