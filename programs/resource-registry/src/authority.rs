//! Authority gate: who may register resources and who may administer the
//! registry.

use anchor_lang::prelude::*;
use std::collections::BTreeSet;

use crate::errors::ResourceRegistryError;
use crate::state::{RegistryConfig, VerifiedAuthority};

/// Reserved null/burn principal. Never accepted as the target of an
/// authority assignment or an ownership transfer.
pub const BURN_PRINCIPAL: Pubkey = Pubkey::new_from_array([0u8; 32]);

/// Answers whether a principal currently holds authority status.
/// Implementations must not touch registry state.
pub trait AuthorityVerifier {
    fn is_verified_authority(&self, principal: &Pubkey) -> bool;
}

impl AuthorityVerifier for BTreeSet<Pubkey> {
    fn is_verified_authority(&self, principal: &Pubkey) -> bool {
        self.contains(principal)
    }
}

/// On-chain verifier backed by the caller's optional VerifiedAuthority PDA.
pub struct AccountVerifier<'a> {
    record: Option<&'a VerifiedAuthority>,
}

impl<'a> AccountVerifier<'a> {
    pub fn new(record: Option<&'a VerifiedAuthority>) -> Self {
        Self { record }
    }
}

impl AuthorityVerifier for AccountVerifier<'_> {
    fn is_verified_authority(&self, principal: &Pubkey) -> bool {
        self.record
            .is_some_and(|record| record.is_active && record.principal == *principal)
    }
}

pub fn is_burn_principal(principal: &Pubkey) -> bool {
    *principal == BURN_PRINCIPAL
}

pub fn is_authority(verifier: &impl AuthorityVerifier, principal: &Pubkey) -> bool {
    verifier.is_verified_authority(principal)
}

fn require_admin(config: &RegistryConfig, caller: &Pubkey) -> Result<()> {
    require_keys_eq!(config.admin, *caller, ResourceRegistryError::NotAuthorized);
    Ok(())
}

/// One-time assignment of the fee collector.
pub fn set_authority_contract(
    config: &mut RegistryConfig,
    caller: &Pubkey,
    principal: Pubkey,
) -> Result<()> {
    require_admin(config, caller)?;
    require!(!is_burn_principal(&principal), ResourceRegistryError::NotAuthorized);
    require!(
        config.authority_contract.is_none(),
        ResourceRegistryError::AuthorityAlreadySet
    );

    config.authority_contract = Some(principal);
    Ok(())
}

/// Change the registration fee. Returns the previous fee.
/// No upper bound is enforced.
pub fn set_registration_fee(
    config: &mut RegistryConfig,
    caller: &Pubkey,
    amount: u64,
) -> Result<u64> {
    require_admin(config, caller)?;
    require!(
        config.authority_contract.is_some(),
        ResourceRegistryError::AuthorityNotVerified
    );

    Ok(std::mem::replace(&mut config.registration_fee, amount))
}

/// Change the capacity ceiling. It may never drop below the number of
/// resources already registered.
pub fn set_max_resources(
    config: &mut RegistryConfig,
    caller: &Pubkey,
    max_resources: u64,
) -> Result<()> {
    require_admin(config, caller)?;
    require!(
        max_resources >= config.next_resource_id,
        ResourceRegistryError::InvalidUpdateParam
    );

    config.max_resources = max_resources;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADMIN: Pubkey = Pubkey::new_from_array([1u8; 32]);
    const COLLECTOR: Pubkey = Pubkey::new_from_array([2u8; 32]);
    const STRANGER: Pubkey = Pubkey::new_from_array([9u8; 32]);

    fn config() -> RegistryConfig {
        RegistryConfig::new(ADMIN, 0, 255)
    }

    #[test]
    fn authority_contract_is_set_once() {
        let mut config = config();
        set_authority_contract(&mut config, &ADMIN, COLLECTOR).unwrap();
        assert_eq!(config.authority_contract, Some(COLLECTOR));

        let err = set_authority_contract(&mut config, &ADMIN, STRANGER).unwrap_err();
        assert_eq!(err, ResourceRegistryError::AuthorityAlreadySet.into());
        assert_eq!(config.authority_contract, Some(COLLECTOR));
    }

    #[test]
    fn burn_principal_is_never_an_authority_contract() {
        let mut config = config();
        let err = set_authority_contract(&mut config, &ADMIN, BURN_PRINCIPAL).unwrap_err();
        assert_eq!(err, ResourceRegistryError::NotAuthorized.into());
        assert_eq!(config.authority_contract, None);
    }

    #[test]
    fn admin_operations_reject_other_callers() {
        let mut config = config();
        let before = config.clone();
        assert!(set_authority_contract(&mut config, &STRANGER, COLLECTOR).is_err());
        assert!(set_registration_fee(&mut config, &STRANGER, 1).is_err());
        assert!(set_max_resources(&mut config, &STRANGER, 1).is_err());
        assert_eq!(config, before);
    }

    #[test]
    fn registration_fee_requires_authority_contract() {
        let mut config = config();
        let err = set_registration_fee(&mut config, &ADMIN, 1000).unwrap_err();
        assert_eq!(err, ResourceRegistryError::AuthorityNotVerified.into());
        assert_eq!(config.registration_fee, 500);

        set_authority_contract(&mut config, &ADMIN, COLLECTOR).unwrap();
        assert_eq!(set_registration_fee(&mut config, &ADMIN, 1000).unwrap(), 500);
        assert_eq!(config.registration_fee, 1000);
    }

    #[test]
    fn max_resources_cannot_drop_below_registered_count() {
        let mut config = config();
        config.next_resource_id = 3;
        let err = set_max_resources(&mut config, &ADMIN, 2).unwrap_err();
        assert_eq!(err, ResourceRegistryError::InvalidUpdateParam.into());
        set_max_resources(&mut config, &ADMIN, 3).unwrap();
        assert_eq!(config.max_resources, 3);
    }

    #[test]
    fn account_verifier_checks_record_principal_and_status() {
        let record = VerifiedAuthority {
            principal: ADMIN,
            is_active: true,
            granted_at: 1,
            bump: 254,
        };
        assert!(AccountVerifier::new(Some(&record)).is_verified_authority(&ADMIN));
        assert!(!AccountVerifier::new(Some(&record)).is_verified_authority(&STRANGER));
        assert!(!AccountVerifier::new(None).is_verified_authority(&ADMIN));

        let revoked = VerifiedAuthority { is_active: false, ..record };
        assert!(!AccountVerifier::new(Some(&revoked)).is_verified_authority(&ADMIN));
    }
}
