use anchor_lang::prelude::*;

pub mod authority;
pub mod contexts;
pub mod engine;
pub mod errors;
pub mod events;
pub mod fees;
pub mod state;
pub mod store;
pub mod utils;
pub mod validation;

pub use contexts::*;

use engine::{RegisterParams, UpdateParams};
use state::{Category, Format, License};

declare_id!("7Mq6xduGskZneG3PZtY4m4yHctTGscbuXVCHANk2mKLh");

#[program]
pub mod resource_registry {
    use super::*;

    // ============================================
    // REGISTRY ADMINISTRATION
    // ============================================

    /// Create the registry config (once). The signer becomes the admin.
    pub fn initialize_registry(
        ctx: Context<InitializeRegistry>,
        max_resources: Option<u64>,
    ) -> Result<()> {
        contexts::handle_initialize_registry(ctx, max_resources)
    }

    /// Set the fee collector (admin only, once)
    pub fn set_authority_contract(
        ctx: Context<ConfigureRegistry>,
        authority_contract: Pubkey,
    ) -> Result<()> {
        contexts::handle_set_authority_contract(ctx, authority_contract)
    }

    /// Change the registration fee (admin only, after the fee collector is set)
    pub fn set_registration_fee(ctx: Context<ConfigureRegistry>, new_fee: u64) -> Result<()> {
        contexts::handle_set_registration_fee(ctx, new_fee)
    }

    /// Change the capacity ceiling (admin only)
    pub fn set_max_resources(ctx: Context<ConfigureRegistry>, max_resources: u64) -> Result<()> {
        contexts::handle_set_max_resources(ctx, max_resources)
    }

    /// Allow a principal to register resources (admin only)
    pub fn grant_authority(ctx: Context<GrantAuthority>, principal: Pubkey) -> Result<()> {
        contexts::handle_grant_authority(ctx, principal)
    }

    /// Withdraw a principal's registration rights (admin only)
    pub fn revoke_authority(ctx: Context<RevokeAuthority>) -> Result<()> {
        contexts::handle_revoke_authority(ctx)
    }

    // ============================================
    // RESOURCE MANAGEMENT
    // ============================================

    /// Register a resource under a unique content hash, paying the
    /// registration fee to the authority contract. Returns the new id.
    #[allow(clippy::too_many_arguments)]
    pub fn register_resource(
        ctx: Context<RegisterResource>,
        hash: [u8; 32],
        title: String,
        description: String,
        ipfs_link: String,
        category: Category,
        format: Format,
        visibility: bool,
        license: License,
        max_versions: u8,
        access_fee: u64,
    ) -> Result<u64> {
        let params = RegisterParams {
            hash: hash.to_vec(),
            title,
            description,
            ipfs_link,
            category,
            format,
            visibility,
            license,
            max_versions,
            access_fee,
        };
        contexts::handle_register_resource(ctx, params)
    }

    /// Update title, description, link and version (owner only)
    pub fn update_resource(
        ctx: Context<UpdateResource>,
        resource_id: u64,
        title: String,
        description: String,
        ipfs_link: String,
        new_version: u8,
    ) -> Result<()> {
        let params = UpdateParams {
            title,
            description,
            ipfs_link,
            new_version,
        };
        contexts::handle_update_resource(ctx, resource_id, params)
    }

    /// Mark a resource inactive (owner only, irreversible)
    pub fn deactivate_resource(ctx: Context<ManageResource>, resource_id: u64) -> Result<()> {
        contexts::handle_deactivate_resource(ctx, resource_id)
    }

    /// Hand a resource to a new owner (owner only)
    pub fn transfer_ownership(
        ctx: Context<ManageResource>,
        resource_id: u64,
        new_owner: Pubkey,
    ) -> Result<()> {
        contexts::handle_transfer_ownership(ctx, resource_id, new_owner)
    }
}
