use sha3::{Digest, Sha3_256};

/// Minimum length accepted for an account password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Hashes a password for storage and comparison.
///
/// Returns the lowercase hex SHA3-256 digest.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha3_256::digest(password.as_bytes()))
}
