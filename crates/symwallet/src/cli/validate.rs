//! Validation command.

use clap::Args;

/// Check a value against a field rule string such as `address|maxDecimals:6`.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Rules separated by `|`; arguments follow `:` separated by `,`.
    pub rules: String,
    /// Value to check.
    pub value: String,
    /// Names of existing accounts.
    #[arg(long = "account")]
    pub accounts: Vec<String>,
    /// Name of the active account.
    #[arg(long, requires = "password")]
    pub active: Option<String>,
    /// Password of the active account.
    #[arg(long, requires = "active")]
    pub password: Option<String>,
    /// Wallet names of the active account.
    #[arg(long = "wallet")]
    pub wallets: Vec<String>,
}
