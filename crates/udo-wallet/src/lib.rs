//! UDO Wallet SDK - Accounts, chain context, and the signing pipeline.
//!
//! Defines the wallet-standard account model, the ordered account registry,
//! transfer transaction building, the build-sign-verify-submit signing
//! pipeline, and the `SuiRpc` boundary trait the pipeline submits through.

pub mod account;
pub mod builder;
pub mod chain;
pub mod features;
pub mod pipeline;
pub mod registry;
pub mod rpc;
pub mod wallet;

mod error;
pub use error::WalletError;

pub use account::{Account, AccountSource};
pub use builder::{TransferBuilder, UnsignedTransaction};
pub use chain::{Chain, ChainContext, Endpoint};
pub use pipeline::{SignedEnvelope, SignedMessage, SigningPipeline};
pub use registry::AccountRegistry;
pub use rpc::SuiRpc;
pub use wallet::UdoWallet;
