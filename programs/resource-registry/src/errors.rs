use anchor_lang::prelude::*;

/// Error codes start at 100 so they match the codes clients of the
/// registry already decode.
#[error_code(offset = 100)]
pub enum ResourceRegistryError {
    #[msg("Caller lacks the required authority or ownership")]
    NotAuthorized,
    #[msg("Content hash must be exactly 32 bytes")]
    InvalidHash,
    #[msg("Title must be between 1 and 100 characters")]
    InvalidTitle,
    #[msg("Description must be 500 characters or less")]
    InvalidDescription,
    #[msg("IPFS link must be between 1 and 200 characters")]
    InvalidIpfsLink,
    #[msg("A resource with this hash is already registered")]
    ResourceAlreadyExists,
    #[msg("Resource not found")]
    ResourceNotFound,
    #[msg("Registration fee transfer failed")]
    FeeTransferFailed,
    #[msg("No authority contract has been configured")]
    AuthorityNotVerified,
    #[msg("Unknown resource category")]
    InvalidCategory,

    // Admin errors
    #[msg("Authority contract is already set")]
    AuthorityAlreadySet,
    #[msg("Arithmetic overflow")]
    MathOverflow,
    #[msg("Fee collector does not match the authority contract")]
    FeeCollectorMismatch,
    #[msg("Invalid update parameter")]
    InvalidUpdateParam,
    #[msg("Maximum number of resources reached")]
    MaxResourcesExceeded,
    #[msg("Unknown resource format")]
    InvalidFormat,
    #[msg("Principal cannot be the null address")]
    InvalidPrincipal,
    #[msg("Unknown resource license")]
    InvalidLicense,
    #[msg("Max versions must be between 1 and 10")]
    InvalidMaxVersions,
    #[msg("Version must be between 1 and the resource's max versions")]
    InvalidVersion,
    #[msg("Access fee must be 10000 or less")]
    InvalidAccessFee,
}
