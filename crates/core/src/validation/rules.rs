//! Named validation rules and the table that holds them.
//!
//! A [`RuleTable`] is built once at startup and passed to whatever validates
//! form fields. Rules are plain functions over the input value, their declared
//! parameters and an [`AccountReadModel`].

use std::collections::BTreeMap;

use crate::account::{hash_password, Address, NetworkType, MIN_PASSWORD_LENGTH};

use super::validators::{
    validate_address, validate_alias, validate_max_decimals, validate_private_key,
    validate_public_key, validate_url,
};
use super::{AccountReadModel, InvalidReason, RuleTableError, ValidationFailure};

/// Signature shared by every rule check.
pub type RuleCheck = fn(&str, &RuleParams, &dyn AccountReadModel) -> Result<(), InvalidReason>;

/// Named parameters passed to a rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleParams(BTreeMap<String, String>);

impl RuleParams {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Returns the value of a parameter.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RuleParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A named predicate paired with the message shown when it fails.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    /// Message key for the failure notification.
    pub message: &'static str,
    /// Parameters the rule requires, in positional order.
    pub params: &'static [&'static str],
    check: RuleCheck,
}

impl Rule {
    /// Creates a rule.
    pub const fn new(
        name: &'static str,
        message: &'static str,
        params: &'static [&'static str],
        check: RuleCheck,
    ) -> Self {
        Self {
            name,
            message,
            params,
            check,
        }
    }
}

/// Outcome of running a rule against a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(ValidationFailure),
}

impl Verdict {
    /// Returns true for [`Verdict::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

/// Table of validation rules keyed by name.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: BTreeMap<&'static str, Rule>,
}

impl RuleTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding the wallet's standard form rules.
    pub fn standard() -> Self {
        let mut table = Self::new();
        for rule in STANDARD_RULES {
            table.register(*rule);
        }
        table
    }

    /// Adds a rule, replacing any rule with the same name.
    pub fn register(&mut self, rule: Rule) {
        self.rules.insert(rule.name, rule);
    }

    /// Returns a rule by name.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    /// Returns the registered rule names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.keys().copied()
    }

    /// Runs the rule `name` against `value`.
    ///
    /// Returns an error only when the rule is unknown or a declared
    /// parameter is missing; invalid input is reported as
    /// [`Verdict::Invalid`].
    pub fn validate(
        &self,
        name: &str,
        value: &str,
        params: &RuleParams,
        accounts: &dyn AccountReadModel,
    ) -> Result<Verdict, RuleTableError> {
        let rule = self
            .get(name)
            .ok_or_else(|| RuleTableError::UnknownRule(name.to_string()))?;

        if let Some(&param) = rule.params.iter().find(|p| !params.contains(p)) {
            return Err(RuleTableError::MissingParam {
                rule: rule.name,
                param,
            });
        }

        match (rule.check)(value, params, accounts) {
            Ok(()) => Ok(Verdict::Valid),
            Err(reason) => Ok(Verdict::Invalid(ValidationFailure {
                rule: rule.name,
                message: rule.message,
                reason,
            })),
        }
    }

    /// Boolean form of [`RuleTable::validate`].
    pub fn is_valid(
        &self,
        name: &str,
        value: &str,
        params: &RuleParams,
        accounts: &dyn AccountReadModel,
    ) -> Result<bool, RuleTableError> {
        self.validate(name, value, params, accounts)
            .map(|verdict| verdict.is_valid())
    }

    /// Runs a field rule string such as `"address|maxDecimals:6"`.
    ///
    /// Rules are separated by `|`; positional arguments follow a `:` and are
    /// separated by `,`, bound to the rule's declared parameters in order.
    /// Every rule runs; all failures are returned.
    pub fn check_field(
        &self,
        spec: &str,
        value: &str,
        accounts: &dyn AccountReadModel,
    ) -> Result<Vec<ValidationFailure>, RuleTableError> {
        let mut failures = Vec::new();

        for part in spec.split('|').map(str::trim).filter(|p| !p.is_empty()) {
            let (name, args) = match part.split_once(':') {
                Some((name, args)) => (name, args.split(',').collect::<Vec<_>>()),
                None => (part, Vec::new()),
            };
            let rule = self
                .get(name)
                .ok_or_else(|| RuleTableError::UnknownRule(name.to_string()))?;
            if args.len() > rule.params.len() {
                return Err(RuleTableError::TooManyParams {
                    rule: rule.name,
                    expected: rule.params.len(),
                    actual: args.len(),
                });
            }
            let params: RuleParams = rule.params.iter().copied().zip(args).collect();

            if let Verdict::Invalid(failure) = self.validate(name, value, &params, accounts)? {
                failures.push(failure);
            }
        }

        Ok(failures)
    }
}

const STANDARD_RULES: &[Rule] = &[
    Rule::new("address", "address_invalid", &[], check_address),
    Rule::new(
        "maxDecimals",
        "max_decimal_number_error",
        &["maxDecimalNumber"],
        check_max_decimals,
    ),
    Rule::new(
        "addressOrAlias",
        "incorrect_field_error",
        &[],
        check_address_or_alias,
    ),
    Rule::new(
        "addressOrAliasNetworkType",
        "network_type_invalid",
        &["networkType"],
        check_address_network_type,
    ),
    Rule::new("url", "incorrect_field_error", &[], check_url),
    Rule::new(
        "confirmPassword",
        "passwords_not_matching",
        &["target"],
        check_confirm_password,
    ),
    Rule::new(
        "newAccountName",
        "account_name_exists_error",
        &[],
        check_new_account_name,
    ),
    Rule::new(
        "accountPassword",
        "wrong_password_error",
        &[],
        check_account_password,
    ),
    Rule::new(
        "accountWalletName",
        "error_wallet_name_already_exists",
        &[],
        check_account_wallet_name,
    ),
    Rule::new("privateKey", "private_key_invalid", &[], check_private_key),
    Rule::new(
        "addressOrPublicKey",
        "incorrect_field_error",
        &[],
        check_address_or_public_key,
    ),
];

fn param<'a>(params: &'a RuleParams, name: &'static str) -> Result<&'a str, InvalidReason> {
    params.get(name).ok_or(InvalidReason::InvalidParam {
        name,
        value: String::new(),
    })
}

fn check_address(value: &str, _: &RuleParams, _: &dyn AccountReadModel) -> Result<(), InvalidReason> {
    validate_address(value).map(|_| ())
}

fn check_max_decimals(
    value: &str,
    params: &RuleParams,
    _: &dyn AccountReadModel,
) -> Result<(), InvalidReason> {
    let raw = param(params, "maxDecimalNumber")?;
    let max = raw.trim().parse().map_err(|_| InvalidReason::InvalidParam {
        name: "maxDecimalNumber",
        value: raw.to_string(),
    })?;
    validate_max_decimals(value, max)
}

fn check_address_or_alias(
    value: &str,
    _: &RuleParams,
    _: &dyn AccountReadModel,
) -> Result<(), InvalidReason> {
    if validate_address(value).is_ok() || validate_alias(value).is_ok() {
        Ok(())
    } else {
        Err(InvalidReason::NotAddressOrAlias)
    }
}

/// Passes aliases through; only addresses carry a network.
fn check_address_network_type(
    value: &str,
    params: &RuleParams,
    _: &dyn AccountReadModel,
) -> Result<(), InvalidReason> {
    let raw = param(params, "networkType")?;
    let expected: NetworkType = raw.parse().map_err(|_| InvalidReason::InvalidParam {
        name: "networkType",
        value: raw.to_string(),
    })?;

    let Ok(address) = Address::parse(value) else {
        return Ok(());
    };
    let actual = address.network_type();
    if actual == expected {
        Ok(())
    } else {
        Err(InvalidReason::NetworkMismatch { expected, actual })
    }
}

fn check_url(value: &str, _: &RuleParams, _: &dyn AccountReadModel) -> Result<(), InvalidReason> {
    validate_url(value)
}

fn check_confirm_password(
    value: &str,
    params: &RuleParams,
    _: &dyn AccountReadModel,
) -> Result<(), InvalidReason> {
    if value == param(params, "target")? {
        Ok(())
    } else {
        Err(InvalidReason::Mismatch)
    }
}

fn check_new_account_name(
    value: &str,
    _: &RuleParams,
    accounts: &dyn AccountReadModel,
) -> Result<(), InvalidReason> {
    if accounts.account_exists(value) {
        Err(InvalidReason::AccountExists(value.to_string()))
    } else {
        Ok(())
    }
}

fn check_account_password(
    value: &str,
    _: &RuleParams,
    accounts: &dyn AccountReadModel,
) -> Result<(), InvalidReason> {
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(InvalidReason::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }
    let current = accounts
        .current_password_hash()
        .ok_or(InvalidReason::NoActiveAccount)?;
    if hash_password(value) == current {
        Ok(())
    } else {
        Err(InvalidReason::WrongPassword)
    }
}

fn check_account_wallet_name(
    value: &str,
    _: &RuleParams,
    accounts: &dyn AccountReadModel,
) -> Result<(), InvalidReason> {
    if accounts.current_wallet_names().iter().any(|w| w == value) {
        Err(InvalidReason::WalletNameExists(value.to_string()))
    } else {
        Ok(())
    }
}

fn check_private_key(
    value: &str,
    _: &RuleParams,
    _: &dyn AccountReadModel,
) -> Result<(), InvalidReason> {
    validate_private_key(value)
}

fn check_address_or_public_key(
    value: &str,
    _: &RuleParams,
    _: &dyn AccountReadModel,
) -> Result<(), InvalidReason> {
    if validate_address(value).is_ok() || validate_public_key(value).is_ok() {
        Ok(())
    } else {
        Err(InvalidReason::NotAddressOrPublicKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::{AddressError, KeyError};
    use crate::validation::InMemoryAccounts;

    const MAINNET_ADDRESS: &str = "NAR3W7B4BCOZSZMFIZRYB3N5YGOUSWIYJCJ6HDA";

    fn accounts() -> InMemoryAccounts {
        InMemoryAccounts::new()
            .with_account("bob")
            .with_active("alice", "correct horse", ["Seed Wallet", "Ledger"])
    }

    fn verdict(name: &str, value: &str, params: &RuleParams) -> Verdict {
        RuleTable::standard()
            .validate(name, value, params, &accounts())
            .unwrap()
    }

    fn reason(name: &str, value: &str, params: &RuleParams) -> InvalidReason {
        match verdict(name, value, params) {
            Verdict::Invalid(failure) => failure.reason,
            Verdict::Valid => panic!("expected {name} to reject {value:?}"),
        }
    }

    #[test]
    fn test_standard_table_has_every_rule() {
        let names: Vec<_> = RuleTable::standard().names().collect();
        assert_eq!(
            names,
            vec![
                "accountPassword",
                "accountWalletName",
                "address",
                "addressOrAlias",
                "addressOrAliasNetworkType",
                "addressOrPublicKey",
                "confirmPassword",
                "maxDecimals",
                "newAccountName",
                "privateKey",
                "url",
            ]
        );
    }

    #[test]
    fn test_unknown_rule_is_an_error() {
        let result = RuleTable::standard().validate("zip", "x", &RuleParams::new(), &accounts());
        assert_eq!(result, Err(RuleTableError::UnknownRule("zip".to_string())));
    }

    #[test]
    fn test_missing_param_is_an_error() {
        let result =
            RuleTable::standard().validate("maxDecimals", "1.5", &RuleParams::new(), &accounts());
        assert_eq!(
            result,
            Err(RuleTableError::MissingParam {
                rule: "maxDecimals",
                param: "maxDecimalNumber"
            })
        );
    }

    #[test]
    fn test_failure_carries_message_and_reason() {
        let Verdict::Invalid(failure) = verdict("address", "NAR3", &RuleParams::new()) else {
            panic!("expected failure");
        };
        assert_eq!(failure.rule, "address");
        assert_eq!(failure.message, "address_invalid");
        assert_eq!(
            failure.reason,
            InvalidReason::Address(AddressError::InvalidLength {
                expected: 39,
                actual: 4
            })
        );
    }

    #[test]
    fn test_address_rule() {
        assert!(verdict("address", MAINNET_ADDRESS, &RuleParams::new()).is_valid());
    }

    #[test]
    fn test_max_decimals_rule() {
        let params = RuleParams::new().with("maxDecimalNumber", "2");
        assert!(verdict("maxDecimals", "1.25", &params).is_valid());
        assert_eq!(
            reason("maxDecimals", "1.255", &params),
            InvalidReason::TooManyDecimals { max: 2, actual: 3 }
        );
        let bad = RuleParams::new().with("maxDecimalNumber", "two");
        assert!(matches!(
            reason("maxDecimals", "1", &bad),
            InvalidReason::InvalidParam { .. }
        ));
    }

    #[test]
    fn test_address_or_alias_rule() {
        let none = RuleParams::new();
        assert!(verdict("addressOrAlias", MAINNET_ADDRESS, &none).is_valid());
        assert!(verdict("addressOrAlias", "symbol.xym", &none).is_valid());
        assert_eq!(
            reason("addressOrAlias", "Not An Alias", &none),
            InvalidReason::NotAddressOrAlias
        );
    }

    #[test]
    fn test_address_network_type_rule() {
        let params = RuleParams::new().with("networkType", "104");
        assert!(verdict("addressOrAliasNetworkType", MAINNET_ADDRESS, &params).is_valid());
        // aliases have no network to compare
        assert!(verdict("addressOrAliasNetworkType", "symbol.xym", &params).is_valid());

        let testnet = RuleParams::new().with("networkType", "testnet");
        assert_eq!(
            reason("addressOrAliasNetworkType", MAINNET_ADDRESS, &testnet),
            InvalidReason::NetworkMismatch {
                expected: NetworkType::TestNet,
                actual: NetworkType::MainNet
            }
        );
    }

    #[test]
    fn test_url_rule() {
        let none = RuleParams::new();
        assert!(verdict("url", "http://localhost:3000", &none).is_valid());
        assert!(!verdict("url", "localhost", &none).is_valid());
    }

    #[test]
    fn test_confirm_password_rule() {
        let params = RuleParams::new().with("target", "secret-pass");
        assert!(verdict("confirmPassword", "secret-pass", &params).is_valid());
        assert_eq!(
            reason("confirmPassword", "secret-pas", &params),
            InvalidReason::Mismatch
        );
    }

    #[test]
    fn test_new_account_name_rule() {
        let none = RuleParams::new();
        assert!(verdict("newAccountName", "carol", &none).is_valid());
        assert_eq!(
            reason("newAccountName", "bob", &none),
            InvalidReason::AccountExists("bob".to_string())
        );
    }

    #[test]
    fn test_account_password_rule() {
        let none = RuleParams::new();
        assert!(verdict("accountPassword", "correct horse", &none).is_valid());
        assert_eq!(
            reason("accountPassword", "short", &none),
            InvalidReason::PasswordTooShort(8)
        );
        assert_eq!(
            reason("accountPassword", "wrong horse", &none),
            InvalidReason::WrongPassword
        );
    }

    #[test]
    fn test_account_password_without_active_account() {
        let table = RuleTable::standard();
        let verdict = table
            .validate(
                "accountPassword",
                "correct horse",
                &RuleParams::new(),
                &InMemoryAccounts::new(),
            )
            .unwrap();
        assert!(matches!(
            verdict,
            Verdict::Invalid(ValidationFailure {
                reason: InvalidReason::NoActiveAccount,
                ..
            })
        ));
    }

    #[test]
    fn test_account_wallet_name_rule() {
        let none = RuleParams::new();
        assert!(verdict("accountWalletName", "Savings", &none).is_valid());
        assert_eq!(
            reason("accountWalletName", "Ledger", &none),
            InvalidReason::WalletNameExists("Ledger".to_string())
        );
    }

    #[test]
    fn test_private_key_rule_keeps_parse_error() {
        let none = RuleParams::new();
        assert!(verdict("privateKey", &"0".repeat(64), &none).is_valid());
        assert_eq!(
            reason("privateKey", "abc", &none),
            InvalidReason::Key(KeyError::InvalidLength {
                expected: 64,
                actual: 3
            })
        );
    }

    #[test]
    fn test_address_or_public_key_rule() {
        let none = RuleParams::new();
        assert!(verdict("addressOrPublicKey", MAINNET_ADDRESS, &none).is_valid());
        assert!(verdict("addressOrPublicKey", &"F".repeat(64), &none).is_valid());
        assert_eq!(
            reason("addressOrPublicKey", "symbol.xym", &none),
            InvalidReason::NotAddressOrPublicKey
        );
    }

    #[test]
    fn test_is_valid_matches_verdict() {
        let table = RuleTable::standard();
        let none = RuleParams::new();
        assert_eq!(
            table.is_valid("address", MAINNET_ADDRESS, &none, &accounts()),
            Ok(true)
        );
        assert_eq!(table.is_valid("address", "nope", &none, &accounts()), Ok(false));
    }

    #[test]
    fn test_check_field_binds_positional_params() {
        let table = RuleTable::standard();
        let failures = table
            .check_field("maxDecimals:2", "1.234", &accounts())
            .unwrap();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].rule, "maxDecimals");

        assert!(table
            .check_field("maxDecimals:6", "1.234", &accounts())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_check_field_collects_every_failure() {
        let table = RuleTable::standard();
        let failures = table
            .check_field("address | maxDecimals:0", "1.5", &accounts())
            .unwrap();
        let rules: Vec<_> = failures.iter().map(|f| f.rule).collect();
        assert_eq!(rules, vec!["address", "maxDecimals"]);
    }

    #[test]
    fn test_check_field_errors() {
        let table = RuleTable::standard();
        assert_eq!(
            table.check_field("address|zip", "x", &accounts()),
            Err(RuleTableError::UnknownRule("zip".to_string()))
        );
        assert_eq!(
            table.check_field("maxDecimals", "1", &accounts()),
            Err(RuleTableError::MissingParam {
                rule: "maxDecimals",
                param: "maxDecimalNumber"
            })
        );
        assert_eq!(
            table.check_field("address:1", "x", &accounts()),
            Err(RuleTableError::TooManyParams {
                rule: "address",
                expected: 0,
                actual: 1
            })
        );
    }

    #[test]
    fn test_register_custom_rule() {
        fn non_empty(
            value: &str,
            _: &RuleParams,
            _: &dyn AccountReadModel,
        ) -> Result<(), InvalidReason> {
            if value.is_empty() {
                Err(InvalidReason::Mismatch)
            } else {
                Ok(())
            }
        }

        let mut table = RuleTable::new();
        table.register(Rule::new("required", "field_required", &[], non_empty));
        assert_eq!(
            table.is_valid("required", "", &RuleParams::new(), &accounts()),
            Ok(false)
        );
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["required"]);
    }
}
