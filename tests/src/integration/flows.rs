//! # Integration Test Flows
//!
//! Tests that the four credentialing registries compose into a coherent
//! provider onboarding pipeline. The registries are independent stores;
//! the choreography lives with the caller, so these tests drive all four
//! side by side the way a hosting runtime would.

#[cfg(test)]
mod tests {
    use cc_01_provider_identity::prelude::*;
    use cc_02_license_status::prelude::*;
    use cc_03_qualification_verification::prelude::*;
    use cc_04_facility_privileging::prelude::*;
    use rand::Rng;
    use shared_types::{ChainContext, FacilityId, Identity};

    const ADMIN: &str = "SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7";
    const PROVIDER: &str = "SP1HTBVD3JG9C05J7HBJTHGR0GGW7KXW28M5JS8QE";
    const VERIFIER: &str = "SP3GWX3NE58KXHESRYE4DYQ1S31PQJTCRXB3PE9SB";

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    struct Credentialing {
        identity: ProviderIdentityRegistry,
        licenses: LicenseRegistry,
        qualifications: QualificationRegistry,
        privileging: PrivilegingRegistry,
    }

    /// Fresh registries sharing one genesis admin, as deployed together.
    fn deploy() -> Credentialing {
        crate::init_tracing();
        Credentialing {
            identity: ProviderIdentityRegistry::new(ADMIN),
            licenses: LicenseRegistry::new(ADMIN),
            qualifications: QualificationRegistry::new(ADMIN),
            privileging: PrivilegingRegistry::new(ADMIN),
        }
    }

    /// Random chain principal for generated-identity scenarios.
    fn random_principal(rng: &mut impl Rng) -> Identity {
        let suffix: u64 = rng.gen();
        Identity::from(format!("SP{suffix:020}RANDOM"))
    }

    // =========================================================================
    // FULL ONBOARDING FLOW
    // =========================================================================

    /// A provider moves through all four registries: profile, license,
    /// verified qualification, and a facility privilege.
    #[test]
    fn test_full_provider_onboarding_flow() {
        let mut chain = deploy();
        let admin = Identity::from(ADMIN);
        let provider = Identity::from(PROVIDER);
        let verifier = Identity::from(VERIFIER);
        let facility = FacilityId::from("F1");
        let ctx = ChainContext::at_height(123);

        // 1. Self-service identity registration.
        chain
            .identity
            .register(&provider, "Dr. John Doe", "Cardiology", "john.doe@hospital.com", &ctx)
            .unwrap();

        // 2. Admin issues the license.
        chain
            .licenses
            .register_license(
                &admin, &provider, "MD12345", "Medical Doctor", "State Medical Board", 100, 200,
                &ctx,
            )
            .unwrap();
        assert!(chain.licenses.is_license_active(&provider, &ctx));

        // 3. Provider submits a qualification; a delegated verifier attests.
        chain.qualifications.add_verifier(&admin, verifier.clone()).unwrap();
        let qual_id = chain
            .qualifications
            .add_qualification(&provider, "MD", "Harvard Medical School", 2010);
        chain
            .qualifications
            .verify(&verifier, &provider, qual_id, &ctx.advanced_by(2))
            .unwrap();

        // 4. Admin registers the facility and grants the privilege.
        chain
            .privileging
            .register_facility(&admin, facility.clone(), "General Hospital", "Hospital", "New York", &ctx)
            .unwrap();
        let proc_id = chain
            .privileging
            .grant_privilege(&admin, &facility, &provider, "Cardiac Surgery", 200, &ctx)
            .unwrap();

        // The provider is fully credentialed.
        assert!(chain.identity.profile(&provider).is_some());
        assert!(chain.qualifications.qualification(&provider, qual_id).unwrap().verified);
        assert!(chain.privileging.is_privilege_active(&facility, &provider, proc_id, &ctx));
    }

    /// Registry state is independent: a rejection in one registry leaves
    /// the others untouched, and sequence counters never interact.
    #[test]
    fn test_registries_are_independent() {
        let mut chain = deploy();
        let admin = Identity::from(ADMIN);
        let provider = Identity::from(PROVIDER);
        let facility = FacilityId::from("F1");
        let ctx = ChainContext::at_height(123);

        // Qualification ids and procedure ids each start at 1.
        let qual_id = chain
            .qualifications
            .add_qualification(&provider, "MD", "Harvard Medical School", 2010);
        assert_eq!(qual_id, QualificationId(1));

        chain
            .privileging
            .register_facility(&admin, facility.clone(), "General Hospital", "Hospital", "New York", &ctx)
            .unwrap();
        let proc_id = chain
            .privileging
            .grant_privilege(&admin, &facility, &provider, "Cardiac Surgery", 200, &ctx)
            .unwrap();
        assert_eq!(proc_id, ProcedureId(1));

        // An unauthorized license write fails without touching other stores.
        assert!(chain
            .licenses
            .register_license(
                &provider, &provider, "MD12345", "Medical Doctor", "Board", 100, 200, &ctx
            )
            .is_err());
        assert!(chain.privileging.is_privilege_active(&facility, &provider, proc_id, &ctx));
    }

    // =========================================================================
    // SEQUENCE ID PROPERTIES
    // =========================================================================

    /// Privilege ids are strictly increasing from 1 across many grants to
    /// randomly generated providers, with no reuse.
    #[test]
    fn test_procedure_ids_strictly_increase_across_random_providers() {
        let mut chain = deploy();
        let admin = Identity::from(ADMIN);
        let facility = FacilityId::from("F1");
        let ctx = ChainContext::at_height(123);
        let mut rng = rand::thread_rng();

        chain
            .privileging
            .register_facility(&admin, facility.clone(), "General Hospital", "Hospital", "New York", &ctx)
            .unwrap();

        let mut last = 0u64;
        for n in 1..=50u64 {
            let provider = random_principal(&mut rng);
            let id = chain
                .privileging
                .grant_privilege(&admin, &facility, &provider, "Procedure", 200 + n, &ctx)
                .unwrap();
            assert_eq!(id.0, n);
            assert!(id.0 > last, "sequence ids must strictly increase");
            last = id.0;
        }
    }

    /// Qualification ids accumulate per provider while the counter stays
    /// global to the registry.
    #[test]
    fn test_qualification_ids_are_global_but_indexed_per_provider() {
        let mut chain = deploy();
        let mut rng = rand::thread_rng();
        let first = random_principal(&mut rng);
        let second = random_principal(&mut rng);

        chain.qualifications.add_qualification(&first, "MD", "Harvard Medical School", 2010);
        chain.qualifications.add_qualification(&second, "DO", "Michigan State", 2012);
        chain.qualifications.add_qualification(&first, "Fellowship", "Mayo Clinic", 2015);

        assert_eq!(
            chain.qualifications.qualification_ids(&first).unwrap(),
            &[QualificationId(1), QualificationId(3)]
        );
        assert_eq!(
            chain.qualifications.qualification_ids(&second).unwrap(),
            &[QualificationId(2)]
        );
    }

    // =========================================================================
    // STATE SHAPE
    // =========================================================================

    /// Records marshal to the key/value shape the hosting runtime persists:
    /// ordinal status codes, plain string principals.
    #[test]
    fn test_state_shape_round_trips_through_json() {
        let mut chain = deploy();
        let admin = Identity::from(ADMIN);
        let provider = Identity::from(PROVIDER);
        let ctx = ChainContext::at_height(123);

        chain
            .licenses
            .register_license(
                &admin, &provider, "MD12345", "Medical Doctor", "State Medical Board", 100, 200,
                &ctx,
            )
            .unwrap();
        chain.licenses.update_status(&admin, &provider, 5, &ctx).unwrap();

        let json = serde_json::to_value(chain.licenses.license(&provider).unwrap()).unwrap();
        assert_eq!(json["status"], 5);

        let restored: License = serde_json::from_value(json).unwrap();
        assert_eq!(restored.status, CredentialStatus::Pending);
        assert_eq!(restored, *chain.licenses.license(&provider).unwrap());
    }
}
