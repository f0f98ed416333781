use anchor_lang::prelude::*;

/// Seed for the singleton registry config PDA
pub const REGISTRY_CONFIG_SEED: &[u8] = b"registry";

pub const DEFAULT_MAX_RESOURCES: u64 = 10_000;
/// Charged in lamports on every registration until changed by the admin
pub const DEFAULT_REGISTRATION_FEE: u64 = 500;

/// Global registry configuration and id counter.
/// PDA seeds: ["registry"]
/// Only one instance exists, controlled by admin
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Admin who can change fees, capacity and the authority contract
    pub admin: Pubkey,
    /// Fee collector; once set it can never change
    pub authority_contract: Option<Pubkey>,
    /// Lamports moved from the registrant to the authority contract
    pub registration_fee: u64,
    /// Ceiling on next_resource_id
    pub max_resources: u64,
    /// Id handed to the next registration, also the number of resources ever registered
    pub next_resource_id: u64,
    /// Slot when config was created
    pub created_at: u64,
    pub bump: u8,
}

impl RegistryConfig {
    pub fn new(admin: Pubkey, created_at: u64, bump: u8) -> Self {
        Self {
            admin,
            authority_contract: None,
            registration_fee: DEFAULT_REGISTRATION_FEE,
            max_resources: DEFAULT_MAX_RESOURCES,
            next_resource_id: 0,
            created_at,
            bump,
        }
    }

    pub fn has_capacity(&self) -> bool {
        self.next_resource_id < self.max_resources
    }
}
