//! The wallet adapter: accounts, chain selection, and the feature surface.

use tracing::info;
use udo_keys::Address;

use crate::account::{Account, AccountSource};
use crate::builder::{TransferBuilder, UnsignedTransaction};
use crate::chain::{Chain, ChainContext};
use crate::features::{
    SignAndExecuteTransactionOutput, SignPersonalMessageOutput, SignTransactionOutput,
    WALLET_FEATURES,
};
use crate::pipeline::SigningPipeline;
use crate::registry::AccountRegistry;
use crate::rpc::SuiRpc;
use crate::WalletError;

/// Wallet-standard version string.
pub const WALLET_VERSION: &str = "1.0.0";

/// Wallet display name.
pub const WALLET_NAME: &str = "UDO_";

/// Wallet display icon.
pub const WALLET_ICON: &str = "data:image/png;base64,dWRvX2ljb24=";

/// A browser-wallet adapter over one RPC client type.
///
/// Owns the account registry, the chain context, and the client handle.
/// All operations target the currently selected chain; switching chains
/// swaps the client handle wholesale.
#[derive(Debug)]
pub struct UdoWallet<R: SuiRpc> {
    registry: AccountRegistry,
    chain: ChainContext,
    client: R,
}

impl<R: SuiRpc> UdoWallet<R> {
    /// Create a wallet connected to the devnet endpoint.
    pub fn new() -> Self {
        Self::with_context(ChainContext::new())
    }

    /// Create a wallet on a specific chain with default endpoints.
    pub fn with_chain(chain: Chain) -> Self {
        Self::with_context(ChainContext::with_chain(chain))
    }

    /// Create a wallet from a prepared chain context.
    pub fn with_context(chain: ChainContext) -> Self {
        let client = R::connect(chain.current_endpoint().url());
        UdoWallet {
            registry: AccountRegistry::new(),
            chain,
            client,
        }
    }

    /// Wallet display name.
    pub fn name(&self) -> &'static str {
        WALLET_NAME
    }

    /// Wallet-standard version.
    pub fn version(&self) -> &'static str {
        WALLET_VERSION
    }

    /// Wallet display icon.
    pub fn icon(&self) -> &'static str {
        WALLET_ICON
    }

    /// Feature identifiers the wallet exposes.
    pub fn features(&self) -> &'static [&'static str] {
        WALLET_FEATURES
    }

    // -----------------------------------------------------------------
    // Accounts
    // -----------------------------------------------------------------

    /// Derive an account from a secret and register it.
    pub fn add_account(&mut self, source: AccountSource<'_>) -> Result<&Account, WalletError> {
        self.registry.add(source)
    }

    /// Remove an account; a no-op if the address is unknown.
    pub fn remove_account(&mut self, address: &Address) {
        self.registry.remove(address);
    }

    /// Select the current account.
    pub fn set_current_account(&mut self, address: &Address) -> Result<(), WalletError> {
        self.registry.set_current(address)
    }

    /// The currently selected account, if any.
    pub fn current_account(&self) -> Option<&Account> {
        self.registry.current()
    }

    /// All registered accounts in registration order.
    pub fn accounts(&self) -> &[Account] {
        self.registry.accounts()
    }

    /// Replace the chain list an account advertises.
    pub fn set_account_chains(
        &mut self,
        address: &Address,
        chains: Vec<String>,
    ) -> Result<(), WalletError> {
        let account = self
            .registry
            .get_mut(address)
            .ok_or(WalletError::UnknownAccount(*address))?;
        account.set_chains(chains);
        Ok(())
    }

    // -----------------------------------------------------------------
    // Chain
    // -----------------------------------------------------------------

    /// The currently selected chain.
    pub fn current_chain(&self) -> Chain {
        self.chain.current_chain()
    }

    /// Switch to another chain and reconnect the client to its endpoint.
    ///
    /// Fails with `UnsupportedChain` leaving both the chain context and the
    /// client untouched. On success the old client handle is dropped and a
    /// fresh one targeting the new endpoint takes its place.
    pub fn switch_chain(&mut self, identifier: &str) -> Result<(), WalletError> {
        let endpoint = self.chain.switch(identifier)?;
        self.client = R::connect(endpoint.url());
        info!(chain = identifier, url = endpoint.url(), "wallet reconnected");
        Ok(())
    }

    /// The active RPC client handle.
    pub fn client(&self) -> &R {
        &self.client
    }

    // -----------------------------------------------------------------
    // Features
    // -----------------------------------------------------------------

    /// Build a transfer of `amount` MIST to `recipient` from the current
    /// account with default gas parameters.
    pub fn build_transfer(
        &self,
        recipient: Address,
        amount: u64,
    ) -> Result<UnsignedTransaction, WalletError> {
        let account = self.checked_current_account()?;
        TransferBuilder::new(recipient, amount)
            .sender(account.address())
            .build()
    }

    /// `sui:signPersonalMessage` with the current account.
    pub fn sign_personal_message(
        &self,
        message: &[u8],
    ) -> Result<SignPersonalMessageOutput, WalletError> {
        let account = self.checked_current_account()?;
        let signed = SigningPipeline::new(&self.client).sign_personal_message(account, message)?;
        Ok(signed.into())
    }

    /// `sui:signTransaction` with the current account. No submission.
    pub async fn sign_transaction(
        &self,
        tx: &UnsignedTransaction,
    ) -> Result<SignTransactionOutput, WalletError> {
        let account = self.checked_current_account()?;
        let envelope = SigningPipeline::new(&self.client)
            .sign_transaction(account, tx)
            .await?;
        Ok(envelope.into())
    }

    /// `sui:signAndExecuteTransaction` with the current account.
    pub async fn sign_and_execute_transaction(
        &self,
        tx: &UnsignedTransaction,
    ) -> Result<SignAndExecuteTransactionOutput, WalletError> {
        let account = self.checked_current_account()?;
        let envelope = SigningPipeline::new(&self.client)
            .sign_and_execute(account, tx)
            .await?;
        Ok(envelope.into())
    }

    /// Build, sign, verify, and submit a transfer in one call.
    pub async fn execute_transfer(
        &self,
        recipient: Address,
        amount: u64,
    ) -> Result<SignAndExecuteTransactionOutput, WalletError> {
        let tx = self.build_transfer(recipient, amount)?;
        self.sign_and_execute_transaction(&tx).await
    }

    /// The current account, checked to support the selected chain.
    fn checked_current_account(&self) -> Result<&Account, WalletError> {
        let account = self.registry.current().ok_or(WalletError::NoCurrentAccount)?;
        let identifier = self.chain.current_chain().identifier();
        if !account.supports_chain(identifier) {
            return Err(WalletError::UnsupportedChain(identifier.to_string()));
        }
        Ok(account)
    }
}

impl<R: SuiRpc> Default for UdoWallet<R> {
    fn default() -> Self {
        Self::new()
    }
}
