//! UDO Wallet SDK - Key material, addresses, and intent-scoped signing.
//!
//! This crate provides the cryptographic building blocks for the UDO wallet:
//! - Ed25519 keypairs with deterministic address derivation
//! - Sui-style 32-byte addresses (BLAKE2b-256 over flag || public key)
//! - Intent-scoped message and transaction signing
//! - The serialized wallet signature envelope (flag || signature || pubkey)
//! - BIP-39 seed derivation and SLIP-0010 ed25519 key derivation

pub mod address;
pub mod intent;
pub mod keypair;
pub mod mnemonic;
pub mod scheme;
pub mod signature;

mod error;
pub use error::KeyError;

pub use address::Address;
pub use keypair::Ed25519Keypair;
pub use scheme::SignatureScheme;
pub use signature::WalletSignature;
