//! # Authorization Escalation Attempts
//!
//! Adversarial scenarios: callers probing for rights they were never
//! delegated, stale delegations after revocation or admin handover, and
//! cross-facility scope confusion. Every attempt must be rejected with the
//! store left exactly as it was.

#[cfg(test)]
mod tests {
    use cc_01_provider_identity::prelude::*;
    use cc_02_license_status::prelude::*;
    use cc_03_qualification_verification::prelude::*;
    use cc_04_facility_privileging::prelude::*;
    use shared_types::{ChainContext, FacilityId, Identity};

    const ADMIN: &str = "SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7";
    const ATTACKER: &str = "SP1ATTACKERXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX";
    const PROVIDER: &str = "SP1HTBVD3JG9C05J7HBJTHGR0GGW7KXW28M5JS8QE";

    fn admin() -> Identity {
        Identity::from(ADMIN)
    }

    fn attacker() -> Identity {
        Identity::from(ATTACKER)
    }

    /// An outsider cannot seize the identity-registry admin slot, and the
    /// failed attempt does not disturb the slot.
    #[test]
    fn test_admin_slot_cannot_be_seized() {
        crate::init_tracing();
        let mut registry = ProviderIdentityRegistry::new(ADMIN);

        let err = registry.set_admin(&attacker(), attacker()).unwrap_err();
        assert!(matches!(err, IdentityError::Unauthorized { .. }));
        assert_eq!(registry.admin(), &admin());
    }

    /// After a legitimate handover the previous admin retains no rights:
    /// the slot is a single seat, not an accumulating set.
    #[test]
    fn test_previous_admin_loses_rights_after_handover() {
        crate::init_tracing();
        let mut registry = ProviderIdentityRegistry::new(ADMIN);
        let successor = Identity::from(PROVIDER);

        registry.set_admin(&admin(), successor.clone()).unwrap();

        let err = registry.set_admin(&admin(), admin()).unwrap_err();
        assert!(matches!(err, IdentityError::Unauthorized { .. }));
        assert_eq!(registry.admin(), &successor);
    }

    /// A provider cannot issue its own license, and no partial record is
    /// left behind by the rejected call.
    #[test]
    fn test_provider_cannot_self_issue_license() {
        crate::init_tracing();
        let mut registry = LicenseRegistry::new(ADMIN);
        let provider = Identity::from(PROVIDER);
        let ctx = ChainContext::at_height(123);

        let err = registry
            .register_license(
                &provider, &provider, "MD00000", "Medical Doctor", "Self", 100, 999, &ctx,
            )
            .unwrap_err();
        assert!(matches!(err, LicenseError::Unauthorized { .. }));
        assert!(registry.license(&provider).is_none());
        assert!(!registry.is_license_active(&provider, &ctx));
    }

    /// Delegation is not transitive: an issuing authority cannot delegate
    /// further authorities.
    #[test]
    fn test_authority_cannot_delegate_authorities() {
        crate::init_tracing();
        let mut registry = LicenseRegistry::new(ADMIN);
        let authority = Identity::from(PROVIDER);
        registry.add_authority(&admin(), authority.clone()).unwrap();

        let err = registry.add_authority(&authority, attacker()).unwrap_err();
        assert!(matches!(err, LicenseError::Unauthorized { .. }));
        assert!(!registry.is_authority(&attacker()));
    }

    /// A revoked verifier cannot keep attesting with its stale delegation,
    /// and cannot re-delegate itself.
    #[test]
    fn test_revoked_verifier_has_no_residual_rights() {
        crate::init_tracing();
        let mut registry = QualificationRegistry::new(ADMIN);
        let verifier = Identity::from(PROVIDER);
        let subject = Identity::from("SP2NC4YBZW2YYAMJD3JGJE0FDWZJD57CKYP8JKGNN");
        let ctx = ChainContext::at_height(125);

        registry.add_verifier(&admin(), verifier.clone()).unwrap();
        let id = registry.add_qualification(&subject, "MD", "Harvard Medical School", 2010);
        registry.remove_verifier(&admin(), &verifier).unwrap();

        let err = registry.verify(&verifier, &subject, id, &ctx).unwrap_err();
        assert!(matches!(err, QualificationError::Unauthorized { .. }));
        assert!(!registry.qualification(&subject, id).unwrap().verified);

        let err = registry.add_verifier(&verifier, verifier.clone()).unwrap_err();
        assert!(matches!(err, QualificationError::Unauthorized { .. }));
    }

    /// Facility-admin rights are scoped to their facility: a delegate of
    /// facility A cannot grant or suspend at facility B.
    #[test]
    fn test_facility_admin_rights_do_not_cross_facilities() {
        crate::init_tracing();
        let mut registry = PrivilegingRegistry::new(ADMIN);
        let delegate = Identity::from(PROVIDER);
        let provider = Identity::from("SP2NC4YBZW2YYAMJD3JGJE0FDWZJD57CKYP8JKGNN");
        let fac_a = FacilityId::from("FA");
        let fac_b = FacilityId::from("FB");
        let ctx = ChainContext::at_height(123);

        for (fac, name) in [(&fac_a, "Hospital A"), (&fac_b, "Hospital B")] {
            registry
                .register_facility(&admin(), fac.clone(), name, "Hospital", "New York", &ctx)
                .unwrap();
        }
        registry.add_facility_admin(&admin(), &fac_a, delegate.clone()).unwrap();

        // Granting at the delegated facility works...
        let id = registry
            .grant_privilege(&delegate, &fac_a, &provider, "Cardiac Surgery", 200, &ctx)
            .unwrap();

        // ...but facility B rejects the same caller outright.
        let err = registry
            .grant_privilege(&delegate, &fac_b, &provider, "Cardiac Surgery", 200, &ctx)
            .unwrap_err();
        assert!(matches!(err, PrivilegeError::Unauthorized { .. }));

        let err = registry
            .add_facility_admin(&delegate, &fac_b, delegate.clone())
            .unwrap_err();
        assert!(matches!(err, PrivilegeError::Unauthorized { .. }));
        assert!(!registry.is_facility_admin(&delegate, &fac_b));

        // The legitimate grant at facility A is unaffected.
        assert!(registry.is_privilege_active(&fac_a, &provider, id, &ctx));
    }

    /// Probing an unregistered facility as an outsider reveals nothing:
    /// the gate answers before the existence check.
    #[test]
    fn test_unregistered_facility_probe_is_unauthorized() {
        crate::init_tracing();
        let mut registry = PrivilegingRegistry::new(ADMIN);
        let ghost = FacilityId::from("GHOST");
        let ctx = ChainContext::at_height(123);

        let err = registry
            .grant_privilege(&attacker(), &ghost, &attacker(), "Anything", 999, &ctx)
            .unwrap_err();
        assert!(matches!(err, PrivilegeError::Unauthorized { .. }));

        let err = registry
            .update_privilege_status(&attacker(), &ghost, &attacker(), ProcedureId(1), 1, &ctx)
            .unwrap_err();
        assert!(matches!(err, PrivilegeError::Unauthorized { .. }));
    }

    /// Rejected calls are visible in the counters but never in the store.
    #[test]
    fn test_rejections_are_counted_not_applied() {
        crate::init_tracing();
        let mut registry = LicenseRegistry::new(ADMIN);
        let provider = Identity::from(PROVIDER);
        let ctx = ChainContext::at_height(123);

        for _ in 0..3 {
            let _ = registry.register_license(
                &attacker(), &provider, "MD1", "Medical Doctor", "Board", 100, 200, &ctx,
            );
        }

        let stats = registry.stats();
        assert_eq!(stats.calls_processed, 3);
        assert_eq!(stats.rejected_calls, 3);
        assert_eq!(stats.mutations_applied, 0);
        assert!(registry.license(&provider).is_none());
    }
}
