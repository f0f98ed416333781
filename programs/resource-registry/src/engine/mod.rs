//! Registry engine.
//!
//! Every public operation is a deterministic transition over a
//! `RegistryConfig` and a `ResourceStore`. All checks run before the first
//! write, so a failed operation leaves both untouched.

use anchor_lang::prelude::*;

use crate::authority::{self, AuthorityVerifier};
use crate::errors::ResourceRegistryError;
use crate::fees::FeeTransfer;
use crate::state::{Category, Format, License, RegistryConfig, Resource, ResourceUpdate};
use crate::store::{MemoryStore, ResourceStore};
use crate::validation;

#[cfg(test)]
mod proptests;

/// Who is calling and at which block height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallContext {
    pub caller: Pubkey,
    pub block_height: u64,
}

impl CallContext {
    pub fn new(caller: Pubkey, block_height: u64) -> Self {
        Self {
            caller,
            block_height,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterParams {
    /// Raw fingerprint bytes; must be exactly 32 long
    pub hash: Vec<u8>,
    pub title: String,
    pub description: String,
    pub ipfs_link: String,
    pub category: Category,
    pub format: Format,
    pub visibility: bool,
    pub license: License,
    pub max_versions: u8,
    pub access_fee: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateParams {
    pub title: String,
    pub description: String,
    pub ipfs_link: String,
    pub new_version: u8,
}

pub struct RegistryEngine<'a, S: ResourceStore> {
    config: &'a mut RegistryConfig,
    store: &'a mut S,
}

impl<'a, S: ResourceStore> RegistryEngine<'a, S> {
    pub fn new(config: &'a mut RegistryConfig, store: &'a mut S) -> Self {
        Self { config, store }
    }

    /// Register a new resource and collect the registration fee.
    ///
    /// Checks, first failure wins: capacity, hash, title, description, link,
    /// max versions, access fee, caller authority, hash uniqueness and
    /// finally a configured authority contract. The fee transfer is requested
    /// exactly once, after every check and before anything is written.
    pub fn register(
        &mut self,
        params: RegisterParams,
        call: &CallContext,
        verifier: &impl AuthorityVerifier,
        fees: &mut impl FeeTransfer,
    ) -> Result<u64> {
        require!(
            self.config.has_capacity(),
            ResourceRegistryError::MaxResourcesExceeded
        );
        let hash = validation::validate_hash(&params.hash)?;
        validation::validate_metadata(&params.title, &params.description, &params.ipfs_link)?;
        validation::validate_max_versions(params.max_versions)?;
        validation::validate_access_fee(params.access_fee)?;
        require!(
            authority::is_authority(verifier, &call.caller),
            ResourceRegistryError::NotAuthorized
        );
        require!(
            !self.store.contains_hash(&hash),
            ResourceRegistryError::ResourceAlreadyExists
        );
        let collector = self
            .config
            .authority_contract
            .ok_or_else(|| error!(ResourceRegistryError::AuthorityNotVerified))?;

        let id = self.config.next_resource_id;
        let next_id = id
            .checked_add(1)
            .ok_or_else(|| error!(ResourceRegistryError::MathOverflow))?;
        require!(
            self.store.get(id).is_none(),
            ResourceRegistryError::ResourceAlreadyExists
        );

        fees.transfer(self.config.registration_fee, &call.caller, &collector)?;

        let resource = Resource {
            hash,
            title: params.title,
            description: params.description,
            ipfs_link: params.ipfs_link,
            owner: call.caller,
            registered_at: call.block_height,
            category: params.category,
            status: true,
            format: params.format,
            visibility: params.visibility,
            license: params.license,
            max_versions: params.max_versions,
            current_version: 1,
            access_fee: params.access_fee,
        };
        let inserted = self.store.insert(id, resource);
        require!(inserted, ResourceRegistryError::ResourceAlreadyExists);
        self.config.next_resource_id = next_id;

        Ok(id)
    }

    /// Replace a resource's title, description, link and current version,
    /// and overwrite its audit slot. Owner only.
    pub fn update(&mut self, id: u64, params: UpdateParams, call: &CallContext) -> Result<()> {
        let resource = self.owned(id, &call.caller)?;
        validation::validate_metadata(&params.title, &params.description, &params.ipfs_link)?;
        validation::validate_version(params.new_version, resource.max_versions)?;

        let mut updated = resource.clone();
        updated.apply_update(
            &params.title,
            &params.description,
            &params.ipfs_link,
            params.new_version,
        );
        let audit = ResourceUpdate {
            title: params.title,
            description: params.description,
            ipfs_link: params.ipfs_link,
            updated_at: call.block_height,
            updater: call.caller,
        };

        self.store.replace(id, updated);
        self.store.put_update(id, audit);
        Ok(())
    }

    /// Mark a resource inactive. Deactivating an inactive resource succeeds.
    pub fn deactivate(&mut self, id: u64, call: &CallContext) -> Result<()> {
        let mut updated = self.owned(id, &call.caller)?.clone();
        updated.deactivate();
        self.store.replace(id, updated);
        Ok(())
    }

    /// Hand a resource to a new owner. The burn principal is refused.
    pub fn transfer_ownership(
        &mut self,
        id: u64,
        new_owner: Pubkey,
        call: &CallContext,
    ) -> Result<()> {
        let resource = self.owned(id, &call.caller)?;
        require!(
            !authority::is_burn_principal(&new_owner),
            ResourceRegistryError::NotAuthorized
        );

        let mut updated = resource.clone();
        updated.transfer_to(new_owner);
        self.store.replace(id, updated);
        Ok(())
    }

    pub fn set_authority_contract(&mut self, principal: Pubkey, call: &CallContext) -> Result<()> {
        authority::set_authority_contract(self.config, &call.caller, principal)
    }

    pub fn set_registration_fee(&mut self, amount: u64, call: &CallContext) -> Result<u64> {
        authority::set_registration_fee(self.config, &call.caller, amount)
    }

    pub fn set_max_resources(&mut self, max_resources: u64, call: &CallContext) -> Result<()> {
        authority::set_max_resources(self.config, &call.caller, max_resources)
    }

    pub fn get_resource(&self, id: u64) -> Option<&Resource> {
        self.store.get(id)
    }

    pub fn get_resource_update(&self, id: u64) -> Option<&ResourceUpdate> {
        self.store.update_record(id)
    }

    pub fn get_resource_count(&self) -> u64 {
        self.config.next_resource_id
    }

    /// Exact-hash lookup. Malformed hashes are simply absent.
    pub fn check_existence(&self, hash: &[u8]) -> bool {
        validation::validate_hash(hash)
            .map(|hash| self.store.contains_hash(&hash))
            .unwrap_or(false)
    }

    fn owned(&self, id: u64, caller: &Pubkey) -> Result<&Resource> {
        let resource = self
            .store
            .get(id)
            .ok_or_else(|| error!(ResourceRegistryError::ResourceNotFound))?;
        require_keys_eq!(resource.owner, *caller, ResourceRegistryError::NotAuthorized);
        Ok(resource)
    }
}

/// Self-contained registry for off-chain and test hosts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryState {
    pub config: RegistryConfig,
    pub store: MemoryStore,
}

impl RegistryState {
    pub fn new(admin: Pubkey) -> Self {
        Self {
            config: RegistryConfig::new(admin, 0, 0),
            store: MemoryStore::default(),
        }
    }

    pub fn with_max_resources(mut self, max_resources: u64) -> Self {
        self.config.max_resources = max_resources;
        self
    }

    pub fn engine(&mut self) -> RegistryEngine<'_, MemoryStore> {
        RegistryEngine::new(&mut self.config, &mut self.store)
    }

    pub fn get_resource(&self, id: u64) -> Option<&Resource> {
        self.store.get(id)
    }

    pub fn get_resource_update(&self, id: u64) -> Option<&ResourceUpdate> {
        self.store.update_record(id)
    }

    pub fn get_resource_count(&self) -> u64 {
        self.config.next_resource_id
    }

    pub fn check_existence(&self, hash: &[u8]) -> bool {
        validation::validate_hash(hash)
            .map(|hash| self.store.contains_hash(&hash))
            .unwrap_or(false)
    }
}
