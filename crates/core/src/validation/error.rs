use thiserror::Error;

use crate::account::{AddressError, KeyError, NetworkType};

/// Why a value was rejected by a rule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    #[error("{0}")]
    Address(#[from] AddressError),
    #[error("{0}")]
    Key(#[from] KeyError),
    #[error("Invalid alias: {0}")]
    Alias(String),
    #[error("Not a number: {0}")]
    NotANumber(String),
    #[error("Too many decimals: {actual} (max {max})")]
    TooManyDecimals { max: u32, actual: u32 },
    #[error("Invalid URL: {0}")]
    Url(String),
    #[error("Address belongs to {actual:?}, expected {expected:?}")]
    NetworkMismatch {
        expected: NetworkType,
        actual: NetworkType,
    },
    #[error("Value is neither an address nor an alias")]
    NotAddressOrAlias,
    #[error("Value is neither an address nor a public key")]
    NotAddressOrPublicKey,
    #[error("Values do not match")]
    Mismatch,
    #[error("Account name already exists: {0}")]
    AccountExists(String),
    #[error("Wallet name already exists: {0}")]
    WalletNameExists(String),
    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("Wrong password")]
    WrongPassword,
    #[error("No active account")]
    NoActiveAccount,
    #[error("Invalid parameter {name}: {value}")]
    InvalidParam { name: &'static str, value: String },
}

/// A value rejected by a named rule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{rule}: {reason}")]
pub struct ValidationFailure {
    /// Rule that rejected the value.
    pub rule: &'static str,
    /// Message key shown to the user.
    pub message: &'static str,
    pub reason: InvalidReason,
}

/// Errors in how a rule table is used, as opposed to invalid input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleTableError {
    #[error("Unknown validation rule: {0}")]
    UnknownRule(String),
    #[error("Rule {rule} requires parameter {param}")]
    MissingParam { rule: &'static str, param: &'static str },
    #[error("Rule {rule} takes {expected} parameters, got {actual}")]
    TooManyParams {
        rule: &'static str,
        expected: usize,
        actual: usize,
    },
}
