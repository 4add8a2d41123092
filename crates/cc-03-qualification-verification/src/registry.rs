//! # Qualification Registry
//!
//! Open submission, gated attestation. Submissions are keyed by
//! `(provider, sequence id)`; the per-provider id list gives callers an
//! index without scanning the whole store.

use crate::domain::entities::{Qualification, QualificationId};
use crate::errors::QualificationError;
use shared_types::{Admin, ChainContext, DelegateSet, Identity};
use std::collections::HashMap;
use tracing::{info, instrument, warn};

/// Registry of provider-submitted qualifications and their attestations.
#[derive(Clone, Debug)]
pub struct QualificationRegistry {
    /// Submissions, keyed by owning provider and sequence id.
    records: HashMap<(Identity, QualificationId), Qualification>,
    /// Per-provider index of submitted ids, in submission order.
    by_provider: HashMap<Identity, Vec<QualificationId>>,
    /// Last allocated sequence id; the next submission gets `last + 1`.
    last_id: u64,
    /// The registry admin slot.
    admin: Admin,
    /// Delegated verifiers.
    verifiers: DelegateSet,
}

impl QualificationRegistry {
    /// Creates an empty registry with the genesis admin seated.
    pub fn new(genesis_admin: impl Into<Identity>) -> Self {
        Self {
            records: HashMap::new(),
            by_provider: HashMap::new(),
            last_id: 0,
            admin: Admin::new(genesis_admin),
            verifiers: DelegateSet::new(),
        }
    }

    /// Submits a qualification for the caller and returns its sequence id.
    ///
    /// Unauthenticated by design: providers describe their own credentials;
    /// the record carries no weight until a verifier attests to it.
    #[instrument(skip(self, degree, institution), fields(caller = %caller))]
    pub fn add_qualification(
        &mut self,
        caller: &Identity,
        degree: &str,
        institution: &str,
        year: u16,
    ) -> QualificationId {
        self.last_id += 1;
        let id = QualificationId(self.last_id);

        self.records.insert(
            (caller.clone(), id),
            Qualification::submitted(degree.to_owned(), institution.to_owned(), year),
        );
        self.by_provider
            .entry(caller.clone())
            .or_default()
            .push(id);

        info!(id = %id, "qualification submitted");
        id
    }

    /// Attests to `(provider, qualification_id)` as the calling verifier.
    ///
    /// Admin or delegated verifier only; the record keeps its unverified
    /// state when the caller is rejected.
    #[instrument(skip(self), fields(caller = %caller, provider = %provider, id = %qualification_id))]
    pub fn verify(
        &mut self,
        caller: &Identity,
        provider: &Identity,
        qualification_id: QualificationId,
        ctx: &ChainContext,
    ) -> Result<(), QualificationError> {
        if !self.admin.is(caller) && !self.verifiers.contains(caller) {
            warn!("attestation rejected: caller is not a verifier");
            return Err(QualificationError::Unauthorized {
                caller: caller.clone(),
            });
        }

        let record = self
            .records
            .get_mut(&(provider.clone(), qualification_id))
            .ok_or_else(|| QualificationError::NotFound {
                provider: provider.clone(),
                qualification: qualification_id,
            })?;

        record.attest(caller.clone(), ctx.block_height);
        info!(height = ctx.block_height, "qualification attested");
        Ok(())
    }

    /// Pure lookup of a single qualification.
    #[must_use]
    pub fn qualification(
        &self,
        provider: &Identity,
        qualification_id: QualificationId,
    ) -> Option<&Qualification> {
        self.records.get(&(provider.clone(), qualification_id))
    }

    /// Sequence ids submitted by `provider`, in submission order.
    ///
    /// `None` for providers that never submitted anything.
    #[must_use]
    pub fn qualification_ids(&self, provider: &Identity) -> Option<&[QualificationId]> {
        self.by_provider.get(provider).map(Vec::as_slice)
    }

    /// Delegates `identity` as a verifier. Admin-only, idempotent.
    #[instrument(skip(self), fields(caller = %caller, verifier = %identity))]
    pub fn add_verifier(
        &mut self,
        caller: &Identity,
        identity: Identity,
    ) -> Result<(), QualificationError> {
        self.require_admin(caller)?;
        self.verifiers.grant(identity);
        info!("verifier delegated");
        Ok(())
    }

    /// Revokes `identity` as a verifier. Admin-only.
    ///
    /// Removes set membership outright; subsequent attestation attempts by
    /// the removed verifier are rejected as unauthorized.
    #[instrument(skip(self), fields(caller = %caller, verifier = %identity))]
    pub fn remove_verifier(
        &mut self,
        caller: &Identity,
        identity: &Identity,
    ) -> Result<(), QualificationError> {
        self.require_admin(caller)?;
        self.verifiers.revoke(identity);
        info!("verifier revoked");
        Ok(())
    }

    /// Returns true if `identity` is currently a delegated verifier.
    #[must_use]
    pub fn is_verifier(&self, identity: &Identity) -> bool {
        self.verifiers.contains(identity)
    }

    /// Current admin identity.
    #[must_use]
    pub fn admin(&self) -> &Identity {
        self.admin.current()
    }

    fn require_admin(&self, caller: &Identity) -> Result<(), QualificationError> {
        if self.admin.is(caller) {
            Ok(())
        } else {
            warn!(caller = %caller, "verifier roster change rejected: caller is not the admin");
            Err(QualificationError::Unauthorized {
                caller: caller.clone(),
            })
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
