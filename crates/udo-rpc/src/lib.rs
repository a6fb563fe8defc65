#![deny(missing_docs)]

//! # udo-rpc
//!
//! JSON-RPC 2.0 client for a Sui fullnode.
//!
//! This crate provides the production implementation of the
//! [`SuiRpc`](udo_wallet::rpc::SuiRpc) boundary trait from `udo-wallet`:
//! coin queries, gas selection, transaction byte construction, and signed
//! transaction submission.
//!
//! # Example
//!
//! ```no_run
//! use udo_rpc::SuiClient;
//!
//! let client = SuiClient::new("https://fullnode.devnet.sui.io:443");
//! ```

pub mod client;
pub mod error;
pub mod types;


pub use client::SuiClient;
pub use error::RpcError;
pub use types::{CoinPage, RpcRequest, RpcResponse};
