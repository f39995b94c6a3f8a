mod context;
mod error;
mod rules;
mod validators;

pub use context::{AccountReadModel, ActiveAccount, InMemoryAccounts};
pub use error::{InvalidReason, RuleTableError, ValidationFailure};
pub use rules::{Rule, RuleCheck, RuleParams, RuleTable, Verdict};
pub use validators::{
    validate_address, validate_alias, validate_max_decimals, validate_private_key,
    validate_public_key, validate_url, MAX_ALIAS_DEPTH, MAX_ALIAS_PART_LENGTH,
};
