use solana_sha256_hasher::hash;

/// Compute the 32-byte content fingerprint used as a resource's hash.
/// Clients hash the raw content bytes with this before registering.
pub fn fingerprint(content: &[u8]) -> [u8; 32] {
    hash(content).to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_deterministic() {
        assert_eq!(fingerprint(b"chapter one"), fingerprint(b"chapter one"));
        assert_ne!(fingerprint(b"chapter one"), fingerprint(b"chapter two"));
    }

    #[test]
    fn fingerprint_of_empty_input_is_sha256_of_nothing() {
        // e3b0c442... is the well-known SHA-256 of the empty string
        assert_eq!(&fingerprint(b"")[..4], &[0xe3, 0xb0, 0xc4, 0x42]);
    }
}
