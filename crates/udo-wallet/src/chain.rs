//! Chain identifiers and the endpoint mapping.
//!
//! A chain identifier is a `sui:<network>` string naming a deployment. The
//! `ChainContext` maps identifiers to fullnode endpoints and tracks the
//! currently selected chain. Switching chains replaces the endpoint
//! descriptor wholesale; it never mutates one in place, and it never touches
//! account state.

use tracing::info;

use crate::WalletError;

/// Chain identifier for the Sui devnet deployment.
pub const SUI_DEVNET_CHAIN: &str = "sui:devnet";
/// Chain identifier for the Sui testnet deployment.
pub const SUI_TESTNET_CHAIN: &str = "sui:testnet";
/// Chain identifier for the Sui mainnet deployment.
pub const SUI_MAINNET_CHAIN: &str = "sui:mainnet";
/// Chain identifier for a local Sui deployment.
pub const SUI_LOCALNET_CHAIN: &str = "sui:localnet";

/// All chain identifiers the wallet knows about.
pub const SUPPORTED_CHAINS: &[&str] = &[
    SUI_DEVNET_CHAIN,
    SUI_TESTNET_CHAIN,
    SUI_MAINNET_CHAIN,
    SUI_LOCALNET_CHAIN,
];

/// A known network deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chain {
    /// The public devnet.
    Devnet,
    /// The public testnet.
    Testnet,
    /// The production network.
    Mainnet,
    /// A node running on the local machine.
    Localnet,
}

impl Chain {
    /// The `sui:<network>` identifier of this chain.
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::Devnet => SUI_DEVNET_CHAIN,
            Self::Testnet => SUI_TESTNET_CHAIN,
            Self::Mainnet => SUI_MAINNET_CHAIN,
            Self::Localnet => SUI_LOCALNET_CHAIN,
        }
    }

    /// Resolve a chain from its identifier.
    ///
    /// Returns `WalletError::UnsupportedChain` for anything outside the
    /// known mapping.
    pub fn from_identifier(identifier: &str) -> Result<Self, WalletError> {
        match identifier {
            SUI_DEVNET_CHAIN => Ok(Self::Devnet),
            SUI_TESTNET_CHAIN => Ok(Self::Testnet),
            SUI_MAINNET_CHAIN => Ok(Self::Mainnet),
            SUI_LOCALNET_CHAIN => Ok(Self::Localnet),
            other => Err(WalletError::UnsupportedChain(other.to_string())),
        }
    }

    /// The default fullnode URL for this chain.
    pub fn default_endpoint(&self) -> &'static str {
        match self {
            Self::Devnet => "https://fullnode.devnet.sui.io:443",
            Self::Testnet => "https://fullnode.testnet.sui.io:443",
            Self::Mainnet => "https://fullnode.mainnet.sui.io:443",
            Self::Localnet => "http://127.0.0.1:9000",
        }
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

/// An owned network-endpoint descriptor.
///
/// Produced fresh on every read and on every chain switch; holders never
/// observe a partially updated endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    chain: Chain,
    url: String,
}

impl Endpoint {
    /// The chain this endpoint serves.
    pub fn chain(&self) -> Chain {
        self.chain
    }

    /// The fullnode URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Maps chain identifiers to endpoints and tracks the selected chain.
#[derive(Debug, Clone)]
pub struct ChainContext {
    endpoints: Vec<(Chain, String)>,
    current: Chain,
}

impl ChainContext {
    /// Create a context with the default endpoint mapping, selected on devnet.
    pub fn new() -> Self {
        Self::with_chain(Chain::Devnet)
    }

    /// Create a context with the default endpoint mapping on a given chain.
    pub fn with_chain(chain: Chain) -> Self {
        let endpoints = [Chain::Devnet, Chain::Testnet, Chain::Mainnet, Chain::Localnet]
            .into_iter()
            .map(|c| (c, c.default_endpoint().to_string()))
            .collect();
        ChainContext {
            endpoints,
            current: chain,
        }
    }

    /// Override the endpoint URL for one chain.
    pub fn with_endpoint(mut self, chain: Chain, url: impl Into<String>) -> Self {
        for (c, u) in &mut self.endpoints {
            if *c == chain {
                *u = url.into();
                return self;
            }
        }
        self
    }

    /// Switch to the chain named by `identifier`.
    ///
    /// Fails with `WalletError::UnsupportedChain` without changing any
    /// state. On success the previous endpoint is dropped and a fresh
    /// descriptor for the new chain is returned.
    pub fn switch(&mut self, identifier: &str) -> Result<Endpoint, WalletError> {
        let chain = Chain::from_identifier(identifier)?;
        self.current = chain;
        info!(chain = identifier, "switched active chain");
        Ok(self.current_endpoint())
    }

    /// The currently selected chain.
    pub fn current_chain(&self) -> Chain {
        self.current
    }

    /// A fresh descriptor for the currently selected endpoint.
    pub fn current_endpoint(&self) -> Endpoint {
        let url = self
            .endpoints
            .iter()
            .find(|(c, _)| *c == self.current)
            .map(|(_, u)| u.clone())
            .unwrap_or_else(|| self.current.default_endpoint().to_string());
        Endpoint {
            chain: self.current,
            url,
        }
    }
}

impl Default for ChainContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_devnet() {
        let ctx = ChainContext::new();
        assert_eq!(ctx.current_chain(), Chain::Devnet);
        assert_eq!(
            ctx.current_endpoint().url(),
            "https://fullnode.devnet.sui.io:443"
        );
    }

    #[test]
    fn test_switch_to_known_chain() {
        let mut ctx = ChainContext::new();
        let endpoint = ctx.switch(SUI_TESTNET_CHAIN).unwrap();
        assert_eq!(endpoint.chain(), Chain::Testnet);
        assert_eq!(ctx.current_chain(), Chain::Testnet);
        assert_eq!(endpoint.url(), "https://fullnode.testnet.sui.io:443");
    }

    #[test]
    fn test_switch_unknown_chain_leaves_state_unchanged() {
        let mut ctx = ChainContext::new();
        let err = ctx.switch("sui:petnet").unwrap_err();
        assert!(matches!(err, WalletError::UnsupportedChain(ref c) if c == "sui:petnet"));
        assert_eq!(ctx.current_chain(), Chain::Devnet);
    }

    #[test]
    fn test_endpoint_override() {
        let mut ctx =
            ChainContext::new().with_endpoint(Chain::Localnet, "http://127.0.0.1:7777");
        let endpoint = ctx.switch(SUI_LOCALNET_CHAIN).unwrap();
        assert_eq!(endpoint.url(), "http://127.0.0.1:7777");
    }
}
