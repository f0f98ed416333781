use anchor_lang::prelude::*;
use crate::authority::is_burn_principal;
use crate::errors::ResourceRegistryError;
use crate::events::*;
use crate::state::*;

/// Grant (or re-grant) registration rights to a principal (admin only)
#[derive(Accounts)]
#[instruction(principal: Pubkey)]
pub struct GrantAuthority<'info> {
    #[account(
        seeds = [REGISTRY_CONFIG_SEED],
        bump = registry_config.bump,
        has_one = admin @ ResourceRegistryError::NotAuthorized
    )]
    pub registry_config: Account<'info, RegistryConfig>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + VerifiedAuthority::INIT_SPACE,
        seeds = [VERIFIED_AUTHORITY_SEED, principal.as_ref()],
        bump
    )]
    pub verified_authority: Account<'info, VerifiedAuthority>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Withdraw registration rights (admin only)
#[derive(Accounts)]
pub struct RevokeAuthority<'info> {
    #[account(
        seeds = [REGISTRY_CONFIG_SEED],
        bump = registry_config.bump,
        has_one = admin @ ResourceRegistryError::NotAuthorized
    )]
    pub registry_config: Account<'info, RegistryConfig>,

    #[account(
        mut,
        seeds = [VERIFIED_AUTHORITY_SEED, verified_authority.principal.as_ref()],
        bump = verified_authority.bump
    )]
    pub verified_authority: Account<'info, VerifiedAuthority>,

    pub admin: Signer<'info>,
}

pub fn handle_grant_authority(ctx: Context<GrantAuthority>, principal: Pubkey) -> Result<()> {
    require!(
        !is_burn_principal(&principal),
        ResourceRegistryError::InvalidPrincipal
    );

    let record = &mut ctx.accounts.verified_authority;
    let slot = Clock::get()?.slot;

    record.principal = principal;
    record.is_active = true;
    record.granted_at = slot;
    record.bump = ctx.bumps.verified_authority;

    emit!(AuthorityGranted { principal, slot });
    msg!("Authority granted to {}", principal);

    Ok(())
}

pub fn handle_revoke_authority(ctx: Context<RevokeAuthority>) -> Result<()> {
    let record = &mut ctx.accounts.verified_authority;
    record.is_active = false;

    emit!(AuthorityRevoked {
        principal: record.principal,
        slot: Clock::get()?.slot,
    });
    msg!("Authority revoked for {}", record.principal);

    Ok(())
}
