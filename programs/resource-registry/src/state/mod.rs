pub mod resource;
pub mod registry_config;
pub mod hash_index;
pub mod verified_authority;

pub use resource::{
    Resource, ResourceUpdate, Category, Format, License,
    RESOURCE_SEED, RESOURCE_UPDATE_SEED,
};
pub use registry_config::{
    RegistryConfig, REGISTRY_CONFIG_SEED,
    DEFAULT_MAX_RESOURCES, DEFAULT_REGISTRATION_FEE,
};
pub use hash_index::{HashIndex, HASH_INDEX_SEED};
pub use verified_authority::{VerifiedAuthority, VERIFIED_AUTHORITY_SEED};
