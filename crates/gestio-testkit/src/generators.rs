//! Proptest generators for property-based testing.

use proptest::prelude::*;

use gestio_core::{Capability, CapabilitySet, ModuleId, PermissionRecord, UserId};
use gestio_rates::{ExpeditionType, RateRequest, TransportType};

/// Generate a user identifier.
pub fn user_id() -> impl Strategy<Value = UserId> {
    "[a-z][a-z0-9-]{0,15}".prop_map(UserId::new)
}

/// Generate a module identifier from the application's module families.
pub fn module_id() -> impl Strategy<Value = ModuleId> {
    prop_oneof![
        Just(ModuleId::from("employees")),
        Just(ModuleId::from("salaries")),
        Just(ModuleId::from("freight")),
        Just(ModuleId::from("garage")),
        Just(ModuleId::from("health")),
        Just(ModuleId::from("accounting")),
        Just(ModuleId::from("rentals")),
    ]
}

/// Generate one capability.
pub fn capability() -> impl Strategy<Value = Capability> {
    prop_oneof![
        Just(Capability::View),
        Just(Capability::Create),
        Just(Capability::Edit),
        Just(Capability::Delete),
        Just(Capability::Export),
        Just(Capability::Modify),
    ]
}

/// Generate a capability set.
pub fn capability_set() -> impl Strategy<Value = CapabilitySet> {
    prop::collection::vec(capability(), 0..6).prop_map(CapabilitySet::from_iter)
}

/// Generate a permission record with unique modules.
pub fn permission_record() -> impl Strategy<Value = PermissionRecord> {
    (
        user_id(),
        prop::collection::btree_map(module_id(), capability_set(), 0..5),
    )
        .prop_map(|(user, grants)| {
            let mut record = PermissionRecord::new(user);
            for (module, caps) in grants {
                record = record.with_grant(module, caps);
            }
            record
        })
}

/// Generate an expedition type.
pub fn expedition_type() -> impl Strategy<Value = ExpeditionType> {
    prop_oneof![
        Just(ExpeditionType::Standard),
        Just(ExpeditionType::Express),
        Just(ExpeditionType::Priority),
    ]
}

/// Generate a transport type.
pub fn transport_type() -> impl Strategy<Value = TransportType> {
    prop_oneof![
        Just(TransportType::Road),
        Just(TransportType::Rail),
        Just(TransportType::Sea),
        Just(TransportType::Air),
    ]
}

/// Generate a valid (non-negative, finite) rate request.
pub fn rate_request() -> impl Strategy<Value = RateRequest> {
    (
        0.0f64..100_000.0,
        0.0f64..50_000.0,
        0.0f64..1_000_000.0,
        0.0f64..10_000.0,
        expedition_type(),
        transport_type(),
    )
        .prop_map(
            |(base_price, distance_km, weight_kg, volume_m3, expedition_type, transport_type)| {
                RateRequest {
                    base_price,
                    distance_km,
                    weight_kg,
                    volume_m3,
                    expedition_type,
                    transport_type,
                }
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gestio_perms::PermissionMatrix;
    use gestio_rates::estimate;

    proptest! {
        #[test]
        fn prop_generated_requests_validate(r in rate_request()) {
            prop_assert!(r.validate().is_ok());
        }

        #[test]
        fn prop_estimate_is_deterministic(r in rate_request()) {
            prop_assert_eq!(estimate(&r), estimate(&r));
        }

        #[test]
        fn prop_generated_records_apply_cleanly(record in permission_record()) {
            let mut matrix = PermissionMatrix::new();
            prop_assert!(matrix.apply_record(&record).is_ok());

            // what was applied reads back
            for grant in &record.grants {
                prop_assert_eq!(
                    matrix.get(&record.user_id, &grant.module_id),
                    grant.capabilities
                );
            }
        }

        #[test]
        fn prop_record_roundtrip_through_matrix(record in permission_record()) {
            let mut matrix = PermissionMatrix::new();
            matrix.apply_record(&record).unwrap();

            let out = matrix.record_for(&record.user_id);
            let mut back = PermissionMatrix::new();
            back.apply_record(&out).unwrap();

            for grant in &record.grants {
                prop_assert_eq!(
                    back.get(&record.user_id, &grant.module_id),
                    grant.capabilities
                );
            }
        }
    }
}
