//! A wallet account: one keypair plus its wallet-standard metadata.

use udo_keys::{Address, Ed25519Keypair, WalletSignature};

use crate::chain::SUPPORTED_CHAINS;
use crate::features::WALLET_FEATURES;
use crate::WalletError;

/// The secret an account is created from.
#[derive(Debug, Clone)]
pub enum AccountSource<'a> {
    /// A space-separated mnemonic phrase, derived along the default path.
    Mnemonic(&'a str),
    /// A hex-encoded 32-byte private key, optionally `0x`-prefixed.
    PrivateKeyHex(&'a str),
}

/// An account owned by the wallet.
///
/// Owns exactly one keypair. Address and public key are derived at
/// construction and never change; the chain and feature lists are
/// wallet-standard metadata a dapp can read.
#[derive(Debug)]
pub struct Account {
    keypair: Ed25519Keypair,
    address: Address,
    public_key: [u8; 32],
    chains: Vec<String>,
    features: Vec<String>,
    label: Option<String>,
    icon: Option<String>,
}

impl Account {
    /// Create an account from a secret.
    ///
    /// # Arguments
    /// * `source` - The mnemonic phrase or private key to derive from.
    ///
    /// # Returns
    /// `Ok(Account)` supporting every known chain and wallet feature, or a
    /// key error if the secret cannot be parsed.
    pub fn from_source(source: AccountSource<'_>) -> Result<Self, WalletError> {
        let keypair = match source {
            AccountSource::Mnemonic(phrase) => Ed25519Keypair::from_mnemonic(phrase)?,
            AccountSource::PrivateKeyHex(hex_str) => Ed25519Keypair::from_hex(hex_str)?,
        };
        Ok(Self::from_keypair(keypair))
    }

    /// Wrap an existing keypair in an account.
    pub fn from_keypair(keypair: Ed25519Keypair) -> Self {
        let address = keypair.address();
        let public_key = keypair.public_key();
        Account {
            keypair,
            address,
            public_key,
            chains: SUPPORTED_CHAINS.iter().map(|c| c.to_string()).collect(),
            features: WALLET_FEATURES.iter().map(|f| f.to_string()).collect(),
            label: None,
            icon: None,
        }
    }

    /// The account's address. Immutable for the account's lifetime.
    pub fn address(&self) -> Address {
        self.address
    }

    /// The raw public key bytes.
    pub fn public_key(&self) -> &[u8; 32] {
        &self.public_key
    }

    /// Chain identifiers this account can sign for.
    pub fn chains(&self) -> &[String] {
        &self.chains
    }

    /// Replace the supported-chain list.
    pub fn set_chains(&mut self, chains: Vec<String>) {
        self.chains = chains;
    }

    /// Whether this account can sign for the given chain identifier.
    pub fn supports_chain(&self, identifier: &str) -> bool {
        self.chains.iter().any(|c| c == identifier)
    }

    /// Feature identifiers this account supports.
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Optional display label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Set the display label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }

    /// Optional display icon (a data URI).
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Set the display icon.
    pub fn set_icon(&mut self, icon: impl Into<String>) {
        self.icon = Some(icon.into());
    }

    /// Sign arbitrary bytes as a personal message with this account's key.
    pub fn sign_personal_message(&self, message: &[u8]) -> WalletSignature {
        self.keypair.sign_personal_message(message)
    }

    /// Sign serialized transaction bytes with this account's key.
    pub fn sign_transaction_bytes(&self, tx_bytes: &[u8]) -> WalletSignature {
        self.keypair.sign_transaction_bytes(tx_bytes)
    }

    /// Swap in a foreign public key, simulating an account whose advertised
    /// key no longer matches its signer.
    #[cfg(test)]
    pub(crate) fn replace_public_key(&mut self, public_key: [u8; 32]) {
        self.public_key = public_key;
    }
}
