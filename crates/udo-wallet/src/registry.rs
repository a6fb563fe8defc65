//! Ordered account collection with a current-account selection.

use tracing::info;
use udo_keys::Address;

use crate::account::{Account, AccountSource};
use crate::WalletError;

/// An ordered collection of accounts, unique by address.
///
/// Insertion order is registration order. The current account is stored as
/// an address key resolved against the sequence on read, never as a second
/// owning handle, so removal can't leave a dangling selection.
#[derive(Debug, Default)]
pub struct AccountRegistry {
    accounts: Vec<Account>,
    current: Option<Address>,
}

impl AccountRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the registry holds no accounts.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// All accounts in registration order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Look up an account by address.
    pub fn get(&self, address: &Address) -> Option<&Account> {
        self.accounts.iter().find(|a| a.address() == *address)
    }

    /// Look up an account by address for mutation.
    pub fn get_mut(&mut self, address: &Address) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.address() == *address)
    }

    /// Derive an account from a secret and append it.
    ///
    /// The first account ever added becomes current. Fails with
    /// `DuplicateAddress` (registry unchanged) if the derived address is
    /// already registered.
    pub fn add(&mut self, source: AccountSource<'_>) -> Result<&Account, WalletError> {
        let account = Account::from_source(source)?;
        let address = account.address();
        if self.get(&address).is_some() {
            return Err(WalletError::DuplicateAddress(address));
        }

        self.accounts.push(account);
        if self.current.is_none() {
            self.current = Some(address);
        }
        info!(%address, "account registered");

        // Just pushed, so the last element exists.
        Ok(&self.accounts[self.accounts.len() - 1])
    }

    /// Remove the account with the given address.
    ///
    /// A no-op when the address is not registered. If the removed account
    /// was current, the first remaining account (in registration order)
    /// becomes current, or the selection is cleared when none remain.
    pub fn remove(&mut self, address: &Address) {
        let before = self.accounts.len();
        self.accounts.retain(|a| a.address() != *address);
        if self.accounts.len() == before {
            return;
        }

        if self.current == Some(*address) {
            self.current = self.accounts.first().map(|a| a.address());
        }
        info!(%address, "account removed");
    }

    /// Select the account with the given address as current.
    ///
    /// Fails with `UnknownAccount` if the address is not registered.
    pub fn set_current(&mut self, address: &Address) -> Result<(), WalletError> {
        if self.get(address).is_none() {
            return Err(WalletError::UnknownAccount(*address));
        }
        self.current = Some(*address);
        Ok(())
    }

    /// The currently selected account, if any.
    pub fn current(&self) -> Option<&Account> {
        self.current.as_ref().and_then(|addr| self.get(addr))
    }
}
