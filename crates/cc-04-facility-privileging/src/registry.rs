//! # Privileging Registry
//!
//! Facility store plus the privilege grants each facility extends to
//! providers. Authorization composes two tiers: the registry admin may act
//! on any facility, a facility-admin only on its own. The gate runs before
//! the facility-existence check, matching the hosted contract's order.

use crate::domain::entities::{Facility, Privilege, ProcedureId};
use crate::errors::PrivilegeError;
use shared_types::{
    Admin, BlockHeight, ChainContext, CredentialStatus, DelegateSet, FacilityId, Identity,
};
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

/// Registry of facilities and the procedure privileges they grant.
#[derive(Clone, Debug)]
pub struct PrivilegingRegistry {
    /// Registered facilities.
    facilities: HashMap<FacilityId, Facility>,
    /// Privilege grants, keyed by the typed triple.
    privileges: HashMap<(FacilityId, Identity, ProcedureId), Privilege>,
    /// Per-(facility, provider) index of granted procedure ids, in grant order.
    rosters: HashMap<(FacilityId, Identity), Vec<ProcedureId>>,
    /// Last allocated procedure id; the next grant gets `last + 1`.
    last_procedure: u64,
    /// The registry admin slot.
    admin: Admin,
    /// Delegated facility-admins, per facility.
    facility_admins: HashMap<FacilityId, DelegateSet>,
    /// Call counters.
    stats: RegistryStats,
}

impl PrivilegingRegistry {
    /// Creates an empty registry with the genesis admin seated.
    pub fn new(genesis_admin: impl Into<Identity>) -> Self {
        Self {
            facilities: HashMap::new(),
            privileges: HashMap::new(),
            rosters: HashMap::new(),
            last_procedure: 0,
            admin: Admin::new(genesis_admin),
            facility_admins: HashMap::new(),
            stats: RegistryStats::default(),
        }
    }

    /// Gate for facility-scoped mutations: admin, or facility-admin of
    /// `facility`. A facility with no delegate set rejects everyone but the
    /// admin, including callers probing unregistered facility ids.
    fn authorize_for_facility(
        &self,
        caller: &Identity,
        facility: &FacilityId,
    ) -> Result<(), PrivilegeError> {
        if self.admin.is(caller) || self.is_facility_admin(caller, facility) {
            Ok(())
        } else {
            Err(PrivilegeError::Unauthorized {
                caller: caller.clone(),
            })
        }
    }

    /// Registers a facility. Admin-only; facility ids are unique.
    #[instrument(skip(self, name, facility_type, location), fields(caller = %caller, facility = %facility_id))]
    pub fn register_facility(
        &mut self,
        caller: &Identity,
        facility_id: FacilityId,
        name: &str,
        facility_type: &str,
        location: &str,
        ctx: &ChainContext,
    ) -> Result<(), PrivilegeError> {
        self.stats.calls_processed += 1;
        if !self.admin.is(caller) {
            self.stats.rejected_calls += 1;
            warn!("facility registration rejected: caller is not the admin");
            return Err(PrivilegeError::Unauthorized {
                caller: caller.clone(),
            });
        }
        if self.facilities.contains_key(&facility_id) {
            self.stats.rejected_calls += 1;
            warn!("facility registration rejected: id already taken");
            return Err(PrivilegeError::AlreadyExists {
                facility: facility_id,
            });
        }

        self.facilities.insert(
            facility_id,
            Facility {
                name: name.to_owned(),
                facility_type: facility_type.to_owned(),
                location: location.to_owned(),
                created_at: ctx.block_height,
            },
        );
        self.stats.mutations_applied += 1;
        info!(height = ctx.block_height, "facility registered");
        Ok(())
    }

    /// Grants `provider` a procedure privilege at `facility_id` and returns
    /// the allocated procedure id.
    ///
    /// Admin or facility-admin of that facility; `FacilityNotFound` for an
    /// unregistered facility. The grant starts [`CredentialStatus::Active`]
    /// with the caller recorded as grantor.
    #[instrument(skip(self, procedure_name), fields(caller = %caller, facility = %facility_id, provider = %provider))]
    pub fn grant_privilege(
        &mut self,
        caller: &Identity,
        facility_id: &FacilityId,
        provider: &Identity,
        procedure_name: &str,
        expires_at: BlockHeight,
        ctx: &ChainContext,
    ) -> Result<ProcedureId, PrivilegeError> {
        self.stats.calls_processed += 1;
        if let Err(err) = self.authorize_for_facility(caller, facility_id) {
            self.stats.rejected_calls += 1;
            warn!("privilege grant rejected: caller may not administer facility");
            return Err(err);
        }
        if !self.facilities.contains_key(facility_id) {
            self.stats.rejected_calls += 1;
            warn!("privilege grant rejected: facility not registered");
            return Err(PrivilegeError::FacilityNotFound {
                facility: facility_id.clone(),
            });
        }

        self.last_procedure += 1;
        let procedure_id = ProcedureId(self.last_procedure);

        self.privileges.insert(
            (facility_id.clone(), provider.clone(), procedure_id),
            Privilege::granted(
                procedure_name.to_owned(),
                expires_at,
                caller.clone(),
                ctx.block_height,
            ),
        );
        self.rosters
            .entry((facility_id.clone(), provider.clone()))
            .or_default()
            .push(procedure_id);

        self.stats.mutations_applied += 1;
        info!(procedure = %procedure_id, expires_at, "privilege granted");
        Ok(procedure_id)
    }

    /// Moves a privilege to the status encoded by `status_code`.
    ///
    /// Same gate as granting. The original grantor is preserved; only the
    /// (`last_updated`, `updated_by`) audit pair is stamped with this call.
    #[instrument(skip(self), fields(caller = %caller, facility = %facility_id, provider = %provider, procedure = %procedure_id))]
    pub fn update_privilege_status(
        &mut self,
        caller: &Identity,
        facility_id: &FacilityId,
        provider: &Identity,
        procedure_id: ProcedureId,
        status_code: u8,
        ctx: &ChainContext,
    ) -> Result<(), PrivilegeError> {
        self.stats.calls_processed += 1;
        let outcome = self.update_privilege_status_inner(
            caller,
            facility_id,
            provider,
            procedure_id,
            status_code,
            ctx,
        );
        match &outcome {
            Ok(()) => self.stats.mutations_applied += 1,
            Err(err) => {
                self.stats.rejected_calls += 1;
                warn!(error = %err, "privilege status update rejected");
            }
        }
        outcome
    }

    fn update_privilege_status_inner(
        &mut self,
        caller: &Identity,
        facility_id: &FacilityId,
        provider: &Identity,
        procedure_id: ProcedureId,
        status_code: u8,
        ctx: &ChainContext,
    ) -> Result<(), PrivilegeError> {
        self.authorize_for_facility(caller, facility_id)?;
        let privilege = self
            .privileges
            .get_mut(&(facility_id.clone(), provider.clone(), procedure_id))
            .ok_or_else(|| PrivilegeError::NotFound {
                facility: facility_id.clone(),
                provider: provider.clone(),
                procedure: procedure_id,
            })?;
        let status = CredentialStatus::from_code(status_code)
            .ok_or(PrivilegeError::InvalidStatus { code: status_code })?;

        privilege.status = status;
        privilege.last_updated = ctx.block_height;
        privilege.updated_by = caller.clone();
        info!(status = %status, height = ctx.block_height, "privilege status updated");
        Ok(())
    }

    /// Pure lookup of a single privilege.
    #[must_use]
    pub fn privilege(
        &self,
        facility_id: &FacilityId,
        provider: &Identity,
        procedure_id: ProcedureId,
    ) -> Option<&Privilege> {
        self.privileges
            .get(&(facility_id.clone(), provider.clone(), procedure_id))
    }

    /// Procedure ids granted to `provider` at `facility_id`, in grant order.
    ///
    /// `None` when nothing was ever granted to that pair.
    #[must_use]
    pub fn provider_privileges(
        &self,
        facility_id: &FacilityId,
        provider: &Identity,
    ) -> Option<&[ProcedureId]> {
        self.rosters
            .get(&(facility_id.clone(), provider.clone()))
            .map(Vec::as_slice)
    }

    /// Pure lookup of facility metadata.
    #[must_use]
    pub fn facility(&self, facility_id: &FacilityId) -> Option<&Facility> {
        self.facilities.get(facility_id)
    }

    /// Derived predicate: the privilege exists, is `Active`, and is not yet
    /// at its expiry height. Absent records are inactive.
    #[must_use]
    pub fn is_privilege_active(
        &self,
        facility_id: &FacilityId,
        provider: &Identity,
        procedure_id: ProcedureId,
        ctx: &ChainContext,
    ) -> bool {
        let active = self
            .privilege(facility_id, provider, procedure_id)
            .is_some_and(|privilege| privilege.is_active(ctx.block_height));
        debug!(facility = %facility_id, provider = %provider, procedure = %procedure_id, active,
               "privilege activity check");
        active
    }

    /// Delegates `new_admin` as a facility-admin for `facility_id`.
    ///
    /// Admin or an existing facility-admin of that facility; the gate runs
    /// before the facility-existence check. Grants are set-based, so
    /// repeated delegation of the same identity collapses.
    #[instrument(skip(self), fields(caller = %caller, facility = %facility_id, new_admin = %new_admin))]
    pub fn add_facility_admin(
        &mut self,
        caller: &Identity,
        facility_id: &FacilityId,
        new_admin: Identity,
    ) -> Result<(), PrivilegeError> {
        self.stats.calls_processed += 1;
        if let Err(err) = self.authorize_for_facility(caller, facility_id) {
            self.stats.rejected_calls += 1;
            warn!("facility-admin delegation rejected: caller may not administer facility");
            return Err(err);
        }
        if !self.facilities.contains_key(facility_id) {
            self.stats.rejected_calls += 1;
            warn!("facility-admin delegation rejected: facility not registered");
            return Err(PrivilegeError::FacilityNotFound {
                facility: facility_id.clone(),
            });
        }

        self.facility_admins
            .entry(facility_id.clone())
            .or_default()
            .grant(new_admin);
        self.stats.mutations_applied += 1;
        info!("facility-admin delegated");
        Ok(())
    }

    /// Returns true if `identity` is a delegated facility-admin of
    /// `facility_id`.
    #[must_use]
    pub fn is_facility_admin(&self, identity: &Identity, facility_id: &FacilityId) -> bool {
        self.facility_admins
            .get(facility_id)
            .is_some_and(|admins| admins.contains(identity))
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
