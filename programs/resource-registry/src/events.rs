use anchor_lang::prelude::*;

#[event]
pub struct RegistryInitialized {
    pub admin: Pubkey,
    pub max_resources: u64,
    pub registration_fee: u64,
    pub slot: u64,
}

#[event]
pub struct AuthorityContractSet {
    pub authority_contract: Pubkey,
    pub slot: u64,
}

#[event]
pub struct RegistrationFeeChanged {
    pub old_fee: u64,
    pub new_fee: u64,
    pub slot: u64,
}

#[event]
pub struct MaxResourcesChanged {
    pub max_resources: u64,
    pub slot: u64,
}

#[event]
pub struct AuthorityGranted {
    pub principal: Pubkey,
    pub slot: u64,
}

#[event]
pub struct AuthorityRevoked {
    pub principal: Pubkey,
    pub slot: u64,
}

/// Emitted when a resource is registered and its fee collected
#[event]
pub struct ResourceRegistered {
    pub resource_id: u64,
    pub hash: [u8; 32],
    pub owner: Pubkey,
    /// Authority contract that received the fee
    pub fee_collector: Pubkey,
    /// Registration fee paid (lamports)
    pub fee: u64,
    pub slot: u64,
}

#[event]
pub struct ResourceUpdated {
    pub resource_id: u64,
    pub updater: Pubkey,
    pub version: u8,
    pub slot: u64,
}

#[event]
pub struct ResourceDeactivated {
    pub resource_id: u64,
    pub owner: Pubkey,
    pub slot: u64,
}

#[event]
pub struct OwnershipTransferred {
    pub resource_id: u64,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
    pub slot: u64,
}
