use anchor_lang::prelude::*;
use crate::authority;
use crate::events::*;
use crate::state::*;

/// Create the registry config (once)
#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + RegistryConfig::INIT_SPACE,
        seeds = [REGISTRY_CONFIG_SEED],
        bump
    )]
    pub registry_config: Account<'info, RegistryConfig>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Admin-only registry settings. The admin check itself happens in the
/// authority gate so every host reports the same error.
#[derive(Accounts)]
pub struct ConfigureRegistry<'info> {
    #[account(
        mut,
        seeds = [REGISTRY_CONFIG_SEED],
        bump = registry_config.bump
    )]
    pub registry_config: Account<'info, RegistryConfig>,

    pub admin: Signer<'info>,
}

pub fn handle_initialize_registry(
    ctx: Context<InitializeRegistry>,
    max_resources: Option<u64>,
) -> Result<()> {
    let slot = Clock::get()?.slot;

    let mut config = RegistryConfig::new(
        ctx.accounts.admin.key(),
        slot,
        ctx.bumps.registry_config,
    );
    if let Some(max_resources) = max_resources {
        config.max_resources = max_resources;
    }

    emit!(RegistryInitialized {
        admin: config.admin,
        max_resources: config.max_resources,
        registration_fee: config.registration_fee,
        slot,
    });
    msg!("Registry initialized with capacity {}", config.max_resources);

    ctx.accounts.registry_config.set_inner(config);

    Ok(())
}

pub fn handle_set_authority_contract(
    ctx: Context<ConfigureRegistry>,
    authority_contract: Pubkey,
) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    authority::set_authority_contract(
        &mut ctx.accounts.registry_config,
        &admin,
        authority_contract,
    )?;

    emit!(AuthorityContractSet {
        authority_contract,
        slot: Clock::get()?.slot,
    });
    msg!("Authority contract set to {}", authority_contract);

    Ok(())
}

pub fn handle_set_registration_fee(ctx: Context<ConfigureRegistry>, new_fee: u64) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let old_fee =
        authority::set_registration_fee(&mut ctx.accounts.registry_config, &admin, new_fee)?;

    emit!(RegistrationFeeChanged {
        old_fee,
        new_fee,
        slot: Clock::get()?.slot,
    });
    msg!("Registration fee changed from {} to {}", old_fee, new_fee);

    Ok(())
}

pub fn handle_set_max_resources(ctx: Context<ConfigureRegistry>, max_resources: u64) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    authority::set_max_resources(&mut ctx.accounts.registry_config, &admin, max_resources)?;

    emit!(MaxResourcesChanged {
        max_resources,
        slot: Clock::get()?.slot,
    });

    Ok(())
}
