//! Signature scheme flags.
//!
//! Sui serializes signatures and derives addresses with a one-byte scheme
//! flag in front of the public key. The wallet only implements Ed25519
//! keypairs, but the flag values for the ECDSA schemes are recognized so
//! that foreign signatures can at least be identified.

use crate::KeyError;

/// The signature schemes a wallet account can be backed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureScheme {
    /// Ed25519 (the only scheme this wallet creates keys for).
    Ed25519,
    /// ECDSA over secp256k1.
    Secp256k1,
    /// ECDSA over secp256r1.
    Secp256r1,
}

impl SignatureScheme {
    /// The one-byte flag used in serialized signatures and address derivation.
    pub fn flag(&self) -> u8 {
        match self {
            Self::Ed25519 => 0x00,
            Self::Secp256k1 => 0x01,
            Self::Secp256r1 => 0x02,
        }
    }

    /// Resolve a scheme from its flag byte.
    ///
    /// # Arguments
    /// * `flag` - The scheme flag byte from a serialized signature.
    ///
    /// # Returns
    /// `Ok(SignatureScheme)` for a known flag, or `KeyError::InvalidSignature`
    /// for an unrecognized one.
    pub fn from_flag(flag: u8) -> Result<Self, KeyError> {
        match flag {
            0x00 => Ok(Self::Ed25519),
            0x01 => Ok(Self::Secp256k1),
            0x02 => Ok(Self::Secp256r1),
            other => Err(KeyError::InvalidSignature(format!(
                "unknown scheme flag {:#04x}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Ed25519 => "ED25519",
            Self::Secp256k1 => "Secp256k1",
            Self::Secp256r1 => "Secp256r1",
        };
        write!(f, "{name}")
    }
}
