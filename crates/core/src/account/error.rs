use thiserror::Error;

/// Errors that can occur when parsing an address.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Address must be {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Address contains a character outside the base32 alphabet: {0:?}")]
    InvalidCharacter(char),
    #[error("Unknown network type prefix: {0:?}")]
    UnknownNetwork(char),
    #[error("Encoded address is not valid hex: {0}")]
    InvalidEncoding(String),
}

/// Errors that can occur when parsing a public or private key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("Key must be {expected} hex characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Key is not valid hex: {0}")]
    InvalidHex(String),
}
