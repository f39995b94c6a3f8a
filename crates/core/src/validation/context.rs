use std::collections::BTreeSet;

use crate::account::hash_password;

/// Read-only view of locally known accounts consulted by validation rules.
pub trait AccountReadModel: Send + Sync {
    /// Returns true if an account with `name` is already stored.
    fn account_exists(&self, name: &str) -> bool;

    /// Returns the password hash of the active account, if one is active.
    fn current_password_hash(&self) -> Option<String>;

    /// Returns the wallet names of the active account.
    fn current_wallet_names(&self) -> Vec<String>;
}

/// The active account as seen by the validation rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveAccount {
    pub name: String,
    pub password_hash: String,
    pub wallet_names: Vec<String>,
}

/// In-memory [`AccountReadModel`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccounts {
    names: BTreeSet<String>,
    active: Option<ActiveAccount>,
}

impl InMemoryAccounts {
    /// Creates an empty read model with no active account.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a known account name.
    pub fn with_account(mut self, name: impl Into<String>) -> Self {
        self.names.insert(name.into());
        self
    }

    /// Sets the active account; its name is also added to the known names.
    pub fn with_active(
        mut self,
        name: impl Into<String>,
        password: &str,
        wallet_names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let name = name.into();
        self.names.insert(name.clone());
        self.active = Some(ActiveAccount {
            name,
            password_hash: hash_password(password),
            wallet_names: wallet_names.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Returns the active account, if any.
    pub fn active(&self) -> Option<&ActiveAccount> {
        self.active.as_ref()
    }
}

impl AccountReadModel for InMemoryAccounts {
    fn account_exists(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    fn current_password_hash(&self) -> Option<String> {
        self.active.as_ref().map(|a| a.password_hash.clone())
    }

    fn current_wallet_names(&self) -> Vec<String> {
        self.active
            .as_ref()
            .map(|a| a.wallet_names.clone())
            .unwrap_or_default()
    }
}
