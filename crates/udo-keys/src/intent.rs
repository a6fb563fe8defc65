//! Intent-scoped signing digests.
//!
//! Every signature the wallet produces covers an intent: a three-byte
//! domain separator (scope, version, app id) prepended to the payload before
//! hashing. This prevents a signature over a personal message from ever
//! being replayed as a transaction signature and vice versa.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

type Blake2b256 = Blake2b<U32>;

/// Length of the signing digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// What a signature is committing to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentScope {
    /// Serialized transaction data.
    TransactionData,
    /// An arbitrary user-supplied message.
    PersonalMessage,
}

impl IntentScope {
    /// The scope byte of the intent prefix.
    pub fn scope_byte(&self) -> u8 {
        match self {
            Self::TransactionData => 0,
            Self::PersonalMessage => 3,
        }
    }

    /// The full three-byte intent prefix: scope, version 0, app id 0.
    pub fn intent_bytes(&self) -> [u8; 3] {
        [self.scope_byte(), 0, 0]
    }
}

/// Compute the 32-byte signing digest for a payload under a scope.
///
/// Transaction bytes are hashed as-is. Personal messages are length-prefixed
/// (ULEB128) first, so that the hashed payload is self-delimiting.
///
/// # Arguments
/// * `scope` - The intent scope of the signature.
/// * `payload` - The exact bytes being signed.
///
/// # Returns
/// The BLAKE2b-256 digest of `intent || payload`.
pub fn signing_digest(scope: IntentScope, payload: &[u8]) -> [u8; DIGEST_LEN] {
    let mut hasher = Blake2b256::new();
    hasher.update(scope.intent_bytes());
    match scope {
        IntentScope::TransactionData => hasher.update(payload),
        IntentScope::PersonalMessage => {
            hasher.update(uleb128_encode(payload.len() as u64));
            hasher.update(payload);
        }
    }

    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(&hasher.finalize());
    digest
}

/// ULEB128-encode a length prefix.
fn uleb128_encode(mut value: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(2);
    loop {
        let mut byte = (value & 0x7f) as u8;
        value >>= 7;
        if value != 0 {
            byte |= 0x80;
        }
        out.push(byte);
        if value == 0 {
            return out;
        }
    }
}
