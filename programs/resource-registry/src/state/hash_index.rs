use anchor_lang::prelude::*;

/// Seed prefix for hash index PDAs
pub const HASH_INDEX_SEED: &[u8] = b"hash";

/// Uniqueness index entry for a content hash.
/// PDA seeds: ["hash", hash]
///
/// Created alongside the resource it points at and never closed, so a
/// registered hash can never be claimed by a second resource.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct HashIndex {
    pub hash: [u8; 32],
    /// Id of the resource registered under this hash
    pub resource_id: u64,
    pub is_registered: bool,
}

impl HashIndex {
    pub fn resolves(&self, hash: &[u8; 32]) -> Option<u64> {
        (self.is_registered && &self.hash == hash).then_some(self.resource_id)
    }
}
