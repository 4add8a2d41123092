//! # Provider Identity Registry
//!
//! The registry value itself: an explicit store owned by the hosting
//! runtime, mutated one synchronous call at a time. The runtime
//! authenticates the caller identity before each call; this registry only
//! performs equality checks against its own state.

use crate::domain::entities::ProviderProfile;
use crate::errors::IdentityError;
use shared_types::{Admin, ChainContext, Identity};
use std::collections::HashMap;
use tracing::{info, instrument, warn};

/// Registry mapping a caller identity to its provider profile.
///
/// Registration and updates are self-service; only `set_admin` is gated on
/// the admin slot. Construct one instance per hosted chain (or per test
/// scenario - state never leaks between instances).
#[derive(Clone, Debug)]
pub struct ProviderIdentityRegistry {
    /// Registered profiles, keyed by the owning identity.
    providers: HashMap<Identity, ProviderProfile>,
    /// The registry admin slot.
    admin: Admin,
}

impl ProviderIdentityRegistry {
    /// Creates an empty registry with the genesis admin seated.
    pub fn new(genesis_admin: impl Into<Identity>) -> Self {
        Self {
            providers: HashMap::new(),
            admin: Admin::new(genesis_admin),
        }
    }

    /// Registers the caller as a provider.
    ///
    /// Fails with [`IdentityError::AlreadyRegistered`] on a second attempt;
    /// the original record is left unmodified.
    #[instrument(skip(self, name, specialty, contact), fields(caller = %caller))]
    pub fn register(
        &mut self,
        caller: &Identity,
        name: &str,
        specialty: &str,
        contact: &str,
        ctx: &ChainContext,
    ) -> Result<(), IdentityError> {
        if self.providers.contains_key(caller) {
            warn!("registration rejected: identity already registered");
            return Err(IdentityError::AlreadyRegistered {
                provider: caller.clone(),
            });
        }

        let profile = ProviderProfile::new(
            name.to_owned(),
            specialty.to_owned(),
            contact.to_owned(),
            ctx.block_height,
        );
        self.providers.insert(caller.clone(), profile);
        info!(height = ctx.block_height, "provider registered");
        Ok(())
    }

    /// Overwrites the caller's mutable profile fields.
    ///
    /// `created_at` is preserved; `updated_at` is bumped to the current
    /// height. Fails with [`IdentityError::NotFound`] if the caller never
    /// registered.
    #[instrument(skip(self, name, specialty, contact), fields(caller = %caller))]
    pub fn update_profile(
        &mut self,
        caller: &Identity,
        name: &str,
        specialty: &str,
        contact: &str,
        ctx: &ChainContext,
    ) -> Result<(), IdentityError> {
        let profile = self
            .providers
            .get_mut(caller)
            .ok_or_else(|| IdentityError::NotFound {
                provider: caller.clone(),
            })?;

        profile.name = name.to_owned();
        profile.specialty = specialty.to_owned();
        profile.contact = contact.to_owned();
        profile.updated_at = ctx.block_height;
        info!(height = ctx.block_height, "provider profile updated");
        Ok(())
    }

    /// Pure lookup of a provider profile.
    #[must_use]
    pub fn profile(&self, provider: &Identity) -> Option<&ProviderProfile> {
        self.providers.get(provider)
    }

    /// Hands the admin slot to `new_admin`.
    ///
    /// Only the current admin may reassign; afterwards the previous admin
    /// has no rights.
    #[instrument(skip(self), fields(caller = %caller, new_admin = %new_admin))]
    pub fn set_admin(
        &mut self,
        caller: &Identity,
        new_admin: Identity,
    ) -> Result<(), IdentityError> {
        if !self.admin.is(caller) {
            warn!("admin reassignment rejected: caller does not hold the slot");
            return Err(IdentityError::Unauthorized {
                caller: caller.clone(),
            });
        }
        self.admin.reassign(new_admin);
        info!("admin slot reassigned");
        Ok(())
    }

    /// Current admin identity.
    #[must_use]
    pub fn admin(&self) -> &Identity {
        self.admin.current()
    }

    /// Number of registered providers.
    #[must_use]
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }
}

// =============================================================================
// TESTS
// =============================================================================
