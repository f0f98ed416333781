use anchor_lang::prelude::*;
use crate::authority::AccountVerifier;
use crate::engine::{CallContext, RegisterParams, RegistryEngine};
use crate::events::ResourceRegistered;
use crate::fees::SystemTransfer;
use crate::state::*;
use crate::store::AccountStore;

#[derive(Accounts)]
#[instruction(hash: [u8; 32])]
pub struct RegisterResource<'info> {
    #[account(
        mut,
        seeds = [REGISTRY_CONFIG_SEED],
        bump = registry_config.bump
    )]
    pub registry_config: Account<'info, RegistryConfig>,

    /// Resource PDA for the next id
    #[account(
        init,
        payer = caller,
        space = 8 + Resource::INIT_SPACE,
        seeds = [RESOURCE_SEED, registry_config.next_resource_id.to_le_bytes().as_ref()],
        bump
    )]
    pub resource: Account<'info, Resource>,

    /// Uniqueness index for the hash. Existing entries are rejected by the
    /// engine rather than by account creation.
    #[account(
        init_if_needed,
        payer = caller,
        space = 8 + HashIndex::INIT_SPACE,
        seeds = [HASH_INDEX_SEED, hash.as_ref()],
        bump
    )]
    pub hash_index: Account<'info, HashIndex>,

    /// Caller's membership record, if any
    pub verified_authority: Option<Account<'info, VerifiedAuthority>>,

    /// CHECK: Receives the registration fee; matched against the authority
    /// contract before any lamports move
    #[account(mut)]
    pub fee_collector: AccountInfo<'info>,

    #[account(mut)]
    pub caller: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_register_resource(
    ctx: Context<RegisterResource>,
    params: RegisterParams,
) -> Result<u64> {
    let slot = Clock::get()?.slot;
    let call = CallContext::new(ctx.accounts.caller.key(), slot);

    let mut fees = SystemTransfer::new(
        ctx.accounts.caller.to_account_info(),
        ctx.accounts.fee_collector.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
    );

    let accounts = &mut *ctx.accounts;
    let verifier = AccountVerifier::new(accounts.verified_authority.as_deref());
    let id = accounts.registry_config.next_resource_id;
    let fee = accounts.registry_config.registration_fee;
    let mut store = AccountStore::vacant(id, &mut accounts.resource, &mut accounts.hash_index);

    RegistryEngine::new(&mut accounts.registry_config, &mut store)
        .register(params, &call, &verifier, &mut fees)?;

    emit!(ResourceRegistered {
        resource_id: id,
        hash: accounts.resource.hash,
        owner: call.caller,
        fee_collector: accounts.fee_collector.key(),
        fee,
        slot,
    });
    msg!("Registered resource {} for {}", id, call.caller);

    Ok(id)
}
