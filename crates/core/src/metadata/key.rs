//! Scoped metadata key derivation.

use sha3::{Digest, Sha3_256};

/// Derives the 64-bit scoped metadata key for a human-readable key name.
///
/// Takes the first eight bytes of the SHA3-256 digest as a little-endian
/// integer (low word first) and sets the high bit, matching the keys other
/// Symbol wallets derive for the same name.
///
/// # Examples
///
/// ```
/// use symwallet_core::metadata::generate_scoped_key;
///
/// let key = generate_scoped_key("email");
/// assert_eq!(key, generate_scoped_key("email"));
/// assert!(key & (1 << 63) != 0);
/// ```
pub fn generate_scoped_key(input: &str) -> u64 {
    let digest = Sha3_256::digest(input.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes) | (1 << 63)
}
