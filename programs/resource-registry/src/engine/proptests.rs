//! Property-based tests for registry invariants.

use std::collections::BTreeSet;

use anchor_lang::prelude::Pubkey;
use proptest::prelude::*;

use super::*;
use crate::fees::MemoryLedger;

const ADMIN: Pubkey = Pubkey::new_from_array([1u8; 32]);
const COLLECTOR: Pubkey = Pubkey::new_from_array([2u8; 32]);

fn ready_state() -> RegistryState {
    let mut state = RegistryState::new(ADMIN);
    state
        .engine()
        .set_authority_contract(COLLECTOR, &CallContext::new(ADMIN, 0))
        .unwrap();
    state
}

fn params_for(hash: [u8; 32], max_versions: u8) -> RegisterParams {
    RegisterParams {
        hash: hash.to_vec(),
        title: "Title".to_string(),
        description: String::new(),
        ipfs_link: "ipfs://content".to_string(),
        category: Category::Video,
        format: Format::Mp4,
        visibility: false,
        license: License::PublicDomain,
        max_versions,
        access_fee: 0,
    }
}

/// Hashes drawn from a small alphabet so duplicates actually occur.
fn hash_strategy() -> impl Strategy<Value = [u8; 32]> {
    (0u8..8).prop_map(|b| [b; 32])
}

proptest! {
    /// Property: count equals successful registrations, ids are dense and the
    /// hash index agrees with the resources.
    #[test]
    fn prop_count_matches_successful_registrations(
        hashes in prop::collection::vec(hash_strategy(), 0..20),
        max_resources in 0u64..12,
    ) {
        let mut state = ready_state().with_max_resources(max_resources);
        let authorities = BTreeSet::from([ADMIN]);
        let mut ledger = MemoryLedger::unmetered();
        let mut successes = 0u64;

        for hash in hashes {
            let call = CallContext::new(ADMIN, successes);
            let result = state
                .engine()
                .register(params_for(hash, 3), &call, &authorities, &mut ledger);
            if result.is_ok() {
                successes += 1;
            }
        }

        prop_assert_eq!(state.get_resource_count(), successes);
        prop_assert!(successes <= max_resources);
        prop_assert_eq!(ledger.transfers().len() as u64, successes);
        for (expected, (id, resource)) in state.store.iter().enumerate() {
            prop_assert_eq!(id, expected as u64);
            prop_assert_eq!(state.store.id_by_hash(&resource.hash), Some(id));
        }
    }

    /// Property: current_version always stays within [1, max_versions].
    #[test]
    fn prop_version_stays_in_bounds(
        max_versions in 1u8..=10,
        targets in prop::collection::vec(0u8..=12, 1..15),
    ) {
        let mut state = ready_state();
        let authorities = BTreeSet::from([ADMIN]);
        let mut ledger = MemoryLedger::unmetered();
        let call = CallContext::new(ADMIN, 1);
        state
            .engine()
            .register(params_for([9u8; 32], max_versions), &call, &authorities, &mut ledger)
            .unwrap();

        for target in targets {
            let before = state.clone();
            let result = state.engine().update(0, UpdateParams {
                title: "T".to_string(),
                description: String::new(),
                ipfs_link: "ipfs://v".to_string(),
                new_version: target,
            }, &call);

            let in_range = target >= 1 && target <= max_versions;
            prop_assert_eq!(result.is_ok(), in_range);
            if !in_range {
                prop_assert_eq!(&state, &before);
            }
            let version = state.get_resource(0).unwrap().current_version;
            prop_assert!(version >= 1 && version <= max_versions);
        }
    }

    /// Property: a deactivated resource never becomes active again.
    #[test]
    fn prop_deactivation_is_one_way(ops in prop::collection::vec(0u8..3, 1..20)) {
        let mut state = ready_state();
        let authorities = BTreeSet::from([ADMIN]);
        let mut ledger = MemoryLedger::unmetered();
        let call = CallContext::new(ADMIN, 1);
        state
            .engine()
            .register(params_for([3u8; 32], 10), &call, &authorities, &mut ledger)
            .unwrap();
        let mut deactivated = false;

        for op in ops {
            match op {
                0 => {
                    state.engine().deactivate(0, &call).unwrap();
                    deactivated = true;
                }
                1 => {
                    state.engine().update(0, UpdateParams {
                        title: "T".to_string(),
                        description: String::new(),
                        ipfs_link: "ipfs://v".to_string(),
                        new_version: 2,
                    }, &call).unwrap();
                }
                _ => {
                    let _ = state.engine().transfer_ownership(0, ADMIN, &call);
                }
            }
            prop_assert_eq!(state.get_resource(0).unwrap().status, !deactivated);
        }
    }
}
