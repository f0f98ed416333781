use anchor_lang::prelude::*;

/// Seed prefix for verified authority PDAs
pub const VERIFIED_AUTHORITY_SEED: &[u8] = b"authority";

/// Membership record for a principal allowed to register resources.
/// PDA seeds: ["authority", principal]
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct VerifiedAuthority {
    pub principal: Pubkey,
    pub is_active: bool,
    /// Slot of the most recent grant
    pub granted_at: u64,
    pub bump: u8,
}
