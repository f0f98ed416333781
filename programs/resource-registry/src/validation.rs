//! Field validation rules.
//!
//! Each rule fails with the error kind naming its field. The engine runs
//! them in a fixed order and reports only the first failure.
//!
//! Text fields are ASCII only, so byte lengths are character counts and the
//! account sizes declared with `#[max_len]` hold exactly.

use anchor_lang::prelude::*;

use crate::errors::ResourceRegistryError;

pub const HASH_LEN: usize = 32;
pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 500;
pub const MAX_IPFS_LINK_LEN: usize = 200;
pub const MAX_VERSIONS_LIMIT: u8 = 10;
pub const MAX_ACCESS_FEE: u64 = 10_000;

fn is_ascii_within(text: &str, min: usize, max: usize) -> bool {
    text.is_ascii() && (min..=max).contains(&text.len())
}

/// Returns the hash as a fixed array once its length checks out.
pub fn validate_hash(hash: &[u8]) -> Result<[u8; HASH_LEN]> {
    <[u8; HASH_LEN]>::try_from(hash).map_err(|_| error!(ResourceRegistryError::InvalidHash))
}

pub fn validate_title(title: &str) -> Result<()> {
    require!(
        is_ascii_within(title, 1, MAX_TITLE_LEN),
        ResourceRegistryError::InvalidTitle
    );
    Ok(())
}

/// Empty descriptions are allowed.
pub fn validate_description(description: &str) -> Result<()> {
    require!(
        is_ascii_within(description, 0, MAX_DESCRIPTION_LEN),
        ResourceRegistryError::InvalidDescription
    );
    Ok(())
}

pub fn validate_ipfs_link(ipfs_link: &str) -> Result<()> {
    require!(
        is_ascii_within(ipfs_link, 1, MAX_IPFS_LINK_LEN),
        ResourceRegistryError::InvalidIpfsLink
    );
    Ok(())
}

pub fn validate_max_versions(max_versions: u8) -> Result<()> {
    require!(
        max_versions > 0 && max_versions <= MAX_VERSIONS_LIMIT,
        ResourceRegistryError::InvalidMaxVersions
    );
    Ok(())
}

pub fn validate_access_fee(access_fee: u64) -> Result<()> {
    require!(access_fee <= MAX_ACCESS_FEE, ResourceRegistryError::InvalidAccessFee);
    Ok(())
}

/// A target version must lie in [1, max_versions].
pub fn validate_version(version: u8, max_versions: u8) -> Result<()> {
    require!(
        version >= 1 && version <= max_versions,
        ResourceRegistryError::InvalidVersion
    );
    Ok(())
}

/// Title, description and link rules shared by registration and update.
pub fn validate_metadata(title: &str, description: &str, ipfs_link: &str) -> Result<()> {
    validate_title(title)?;
    validate_description(description)?;
    validate_ipfs_link(ipfs_link)
}
