//! # License Registry
//!
//! Authority-gated license store. The check order mirrors the hosted
//! contract: authorization first, then record existence, then payload
//! validity - so an unauthorized caller learns nothing about the store.

use crate::domain::entities::License;
use crate::errors::LicenseError;
use shared_types::{Admin, BlockHeight, ChainContext, CredentialStatus, DelegateSet, Identity};
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

/// Call counters for the registry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RegistryStats {
    /// Mutating calls processed (accepted or rejected).
    pub calls_processed: u64,
    /// Mutations that changed the store.
    pub mutations_applied: u64,
    /// Calls rejected (unauthorized, not found, invalid payload).
    pub rejected_calls: u64,
}

/// Registry mapping a provider identity to its license record.
///
/// Mutations require the admin slot or membership in the delegated
/// authority set. Lookups are open.
#[derive(Clone, Debug)]
pub struct LicenseRegistry {
    /// License records, keyed by provider identity.
    licenses: HashMap<Identity, License>,
    /// The registry admin slot.
    admin: Admin,
    /// Delegated issuing authorities. Append-only: there is no removal
    /// operation on this registry.
    authorities: DelegateSet,
    /// Call counters.
    stats: RegistryStats,
}

impl LicenseRegistry {
    /// Creates an empty registry with the genesis admin seated.
    pub fn new(genesis_admin: impl Into<Identity>) -> Self {
        Self {
            licenses: HashMap::new(),
            admin: Admin::new(genesis_admin),
            authorities: DelegateSet::new(),
            stats: RegistryStats::default(),
        }
    }

    /// Gate shared by every license mutation: admin or delegated authority.
    fn authorize(&self, caller: &Identity) -> Result<(), LicenseError> {
        if self.admin.is(caller) || self.authorities.contains(caller) {
            Ok(())
        } else {
            Err(LicenseError::Unauthorized {
                caller: caller.clone(),
            })
        }
    }

    /// Registers (or wholesale overwrites) the license record for `provider`.
    ///
    /// The new record starts [`CredentialStatus::Active`] with the caller as
    /// the audit actor. There is no duplicate guard: repeated registration
    /// replaces the record silently.
    #[instrument(skip_all, fields(caller = %caller, provider = %provider))]
    pub fn register_license(
        &mut self,
        caller: &Identity,
        provider: &Identity,
        license_number: &str,
        license_type: &str,
        issuing_authority: &str,
        issue_date: BlockHeight,
        expiry_date: BlockHeight,
        ctx: &ChainContext,
    ) -> Result<(), LicenseError> {
        self.stats.calls_processed += 1;
        if let Err(err) = self.authorize(caller) {
            self.stats.rejected_calls += 1;
            warn!("license registration rejected: caller not an authority");
            return Err(err);
        }

        let license = License {
            license_number: license_number.to_owned(),
            license_type: license_type.to_owned(),
            issuing_authority: issuing_authority.to_owned(),
            status: CredentialStatus::Active,
            issue_date,
            expiry_date,
            last_updated: ctx.block_height,
            updated_by: caller.clone(),
        };
        self.licenses.insert(provider.clone(), license);
        self.stats.mutations_applied += 1;
        info!(height = ctx.block_height, "license registered");
        Ok(())
    }

    /// Moves the provider's license to the status encoded by `status_code`.
    ///
    /// Transitions are unrestricted within the 1..=5 range; an out-of-range
    /// code fails with [`LicenseError::InvalidStatus`] and the stored status
    /// is unchanged.
    #[instrument(skip(self), fields(caller = %caller, provider = %provider))]
    pub fn update_status(
        &mut self,
        caller: &Identity,
        provider: &Identity,
        status_code: u8,
        ctx: &ChainContext,
    ) -> Result<(), LicenseError> {
        self.stats.calls_processed += 1;
        let outcome = self.update_status_inner(caller, provider, status_code, ctx);
        match &outcome {
            Ok(()) => self.stats.mutations_applied += 1,
            Err(err) => {
                self.stats.rejected_calls += 1;
                warn!(error = %err, "license status update rejected");
            }
        }
        outcome
    }

    fn update_status_inner(
        &mut self,
        caller: &Identity,
        provider: &Identity,
        status_code: u8,
        ctx: &ChainContext,
    ) -> Result<(), LicenseError> {
        self.authorize(caller)?;
        let license = self
            .licenses
            .get_mut(provider)
            .ok_or_else(|| LicenseError::NotFound {
                provider: provider.clone(),
            })?;
        let status = CredentialStatus::from_code(status_code)
            .ok_or(LicenseError::InvalidStatus { code: status_code })?;

        license.status = status;
        license.last_updated = ctx.block_height;
        license.updated_by = caller.clone();
        info!(status = %status, height = ctx.block_height, "license status updated");
        Ok(())
    }

    /// Replaces the provider's license expiry height.
    #[instrument(skip(self), fields(caller = %caller, provider = %provider))]
    pub fn update_expiry(
        &mut self,
        caller: &Identity,
        provider: &Identity,
        new_expiry: BlockHeight,
        ctx: &ChainContext,
    ) -> Result<(), LicenseError> {
        self.stats.calls_processed += 1;
        let outcome: Result<(), LicenseError> = (|| {
            self.authorize(caller)?;
            let license = self
                .licenses
                .get_mut(provider)
                .ok_or_else(|| LicenseError::NotFound {
                    provider: provider.clone(),
                })?;
            license.expiry_date = new_expiry;
            license.last_updated = ctx.block_height;
            license.updated_by = caller.clone();
            Ok(())
        })();
        match &outcome {
            Ok(()) => {
                self.stats.mutations_applied += 1;
                info!(new_expiry, height = ctx.block_height, "license expiry updated");
            }
            Err(err) => {
                self.stats.rejected_calls += 1;
                warn!(error = %err, "license expiry update rejected");
            }
        }
        outcome
    }

    /// Pure lookup of a provider's license record.
    #[must_use]
    pub fn license(&self, provider: &Identity) -> Option<&License> {
        self.licenses.get(provider)
    }

    /// Derived predicate: the provider holds a license that is `Active` and
    /// not yet at its expiry height. Absent records are inactive.
    #[must_use]
    pub fn is_license_active(&self, provider: &Identity, ctx: &ChainContext) -> bool {
        let active = self
            .licenses
            .get(provider)
            .is_some_and(|license| license.is_active(ctx.block_height));
        debug!(provider = %provider, active, "license activity check");
        active
    }

    /// Delegates `authority` as an issuing authority. Admin-only, idempotent.
    #[instrument(skip(self), fields(caller = %caller, authority = %authority))]
    pub fn add_authority(
        &mut self,
        caller: &Identity,
        authority: Identity,
    ) -> Result<(), LicenseError> {
        self.stats.calls_processed += 1;
        if !self.admin.is(caller) {
            self.stats.rejected_calls += 1;
            warn!("authority delegation rejected: caller is not the admin");
            return Err(LicenseError::Unauthorized {
                caller: caller.clone(),
            });
        }
        self.authorities.grant(authority);
        self.stats.mutations_applied += 1;
        info!("issuing authority delegated");
        Ok(())
    }

    /// Returns true if `identity` is a delegated issuing authority.
    #[must_use]
    pub fn is_authority(&self, identity: &Identity) -> bool {
        self.authorities.contains(identity)
    }

    /// Current admin identity.
    #[must_use]
    pub fn admin(&self) -> &Identity {
        self.admin.current()
    }

    /// Current call counters.
    #[must_use]
    pub fn stats(&self) -> RegistryStats {
        self.stats
    }
}

// =============================================================================
// TESTS
// =============================================================================
