#![deny(missing_docs)]

//! UDO Wallet SDK - Complete SDK.
//!
//! Re-exports all UDO SDK components for convenient single-crate usage.

pub use udo_keys as keys;
pub use udo_rpc as rpc;
pub use udo_wallet as wallet;
