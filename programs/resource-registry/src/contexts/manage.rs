use anchor_lang::prelude::*;
use crate::engine::{CallContext, RegistryEngine, UpdateParams};
use crate::events::*;
use crate::state::*;
use crate::store::AccountStore;

/// Update resource metadata and version (owner only)
#[derive(Accounts)]
#[instruction(resource_id: u64)]
pub struct UpdateResource<'info> {
    #[account(
        seeds = [REGISTRY_CONFIG_SEED],
        bump = registry_config.bump
    )]
    pub registry_config: Account<'info, RegistryConfig>,

    /// Absent when no resource was registered under this id
    #[account(
        mut,
        seeds = [RESOURCE_SEED, resource_id.to_le_bytes().as_ref()],
        bump
    )]
    pub resource: Option<Account<'info, Resource>>,

    /// Single audit slot, created on the first update
    #[account(
        init_if_needed,
        payer = caller,
        space = 8 + ResourceUpdate::INIT_SPACE,
        seeds = [RESOURCE_UPDATE_SEED, resource_id.to_le_bytes().as_ref()],
        bump
    )]
    pub resource_update: Account<'info, ResourceUpdate>,

    #[account(mut)]
    pub caller: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Deactivate or hand over a resource (owner only)
#[derive(Accounts)]
#[instruction(resource_id: u64)]
pub struct ManageResource<'info> {
    #[account(
        seeds = [REGISTRY_CONFIG_SEED],
        bump = registry_config.bump
    )]
    pub registry_config: Account<'info, RegistryConfig>,

    /// Absent when no resource was registered under this id
    #[account(
        mut,
        seeds = [RESOURCE_SEED, resource_id.to_le_bytes().as_ref()],
        bump
    )]
    pub resource: Option<Account<'info, Resource>>,

    pub caller: Signer<'info>,
}

pub fn handle_update_resource(
    ctx: Context<UpdateResource>,
    resource_id: u64,
    params: UpdateParams,
) -> Result<()> {
    let slot = Clock::get()?.slot;
    let call = CallContext::new(ctx.accounts.caller.key(), slot);
    let version = params.new_version;

    let accounts = &mut *ctx.accounts;
    // A fresh audit account still carries the default updater
    let has_update = accounts.resource_update.updater != Pubkey::default();
    let mut store = AccountStore::loaded(resource_id, accounts.resource.as_deref_mut())
        .with_update(&mut accounts.resource_update, has_update);

    RegistryEngine::new(&mut accounts.registry_config, &mut store).update(
        resource_id,
        params,
        &call,
    )?;

    emit!(ResourceUpdated {
        resource_id,
        updater: call.caller,
        version,
        slot,
    });
    msg!("Resource {} updated to version {}", resource_id, version);

    Ok(())
}

pub fn handle_deactivate_resource(ctx: Context<ManageResource>, resource_id: u64) -> Result<()> {
    let slot = Clock::get()?.slot;
    let call = CallContext::new(ctx.accounts.caller.key(), slot);

    let accounts = &mut *ctx.accounts;
    let mut store = AccountStore::loaded(resource_id, accounts.resource.as_deref_mut());
    RegistryEngine::new(&mut accounts.registry_config, &mut store).deactivate(resource_id, &call)?;

    emit!(ResourceDeactivated {
        resource_id,
        owner: call.caller,
        slot,
    });
    msg!("Resource {} deactivated", resource_id);

    Ok(())
}

pub fn handle_transfer_ownership(
    ctx: Context<ManageResource>,
    resource_id: u64,
    new_owner: Pubkey,
) -> Result<()> {
    let slot = Clock::get()?.slot;
    let call = CallContext::new(ctx.accounts.caller.key(), slot);

    let accounts = &mut *ctx.accounts;
    let mut store = AccountStore::loaded(resource_id, accounts.resource.as_deref_mut());
    RegistryEngine::new(&mut accounts.registry_config, &mut store).transfer_ownership(
        resource_id,
        new_owner,
        &call,
    )?;

    emit!(OwnershipTransferred {
        resource_id,
        previous_owner: call.caller,
        new_owner,
        slot,
    });
    msg!("Resource {} transferred to {}", resource_id, new_owner);

    Ok(())
}
