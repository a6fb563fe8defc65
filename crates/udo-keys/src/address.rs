//! Sui-style 32-byte account addresses.
//!
//! An address is the BLAKE2b-256 hash of the signature scheme flag followed
//! by the raw public key bytes, rendered as `0x` plus 64 lowercase hex
//! characters.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

use crate::scheme::SignatureScheme;
use crate::KeyError;

type Blake2b256 = Blake2b<U32>;

/// Length of an address in bytes.
pub const ADDRESS_BYTES_LEN: usize = 32;

/// A fixed-length on-chain account identifier derived from a public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; ADDRESS_BYTES_LEN]);

impl Address {
    /// Derive the address for a public key under the given scheme.
    ///
    /// # Arguments
    /// * `scheme` - The signature scheme of the key.
    /// * `public_key` - The raw public key bytes.
    ///
    /// # Returns
    /// The derived `Address`. Deterministic: the same scheme and key always
    /// produce the same address.
    pub fn from_public_key(scheme: SignatureScheme, public_key: &[u8]) -> Self {
        let mut hasher = Blake2b256::new();
        hasher.update([scheme.flag()]);
        hasher.update(public_key);
        let digest = hasher.finalize();

        let mut bytes = [0u8; ADDRESS_BYTES_LEN];
        bytes.copy_from_slice(&digest);
        Address(bytes)
    }

    /// Parse an address from a `0x`-prefixed or bare hex string.
    ///
    /// # Arguments
    /// * `s` - A 64-character hex string, optionally `0x`-prefixed.
    ///
    /// # Returns
    /// `Ok(Address)` on success, or `KeyError::InvalidAddress` if the hex is
    /// malformed or the wrong length.
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let decoded =
            hex::decode(stripped).map_err(|e| KeyError::InvalidAddress(e.to_string()))?;
        if decoded.len() != ADDRESS_BYTES_LEN {
            return Err(KeyError::InvalidAddress(format!(
                "expected {} bytes, got {}",
                ADDRESS_BYTES_LEN,
                decoded.len()
            )));
        }
        let mut bytes = [0u8; ADDRESS_BYTES_LEN];
        bytes.copy_from_slice(&decoded);
        Ok(Address(bytes))
    }

    /// The raw 32 address bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_BYTES_LEN] {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl std::fmt::Debug for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_is_deterministic() {
        let pk = [7u8; 32];
        let a = Address::from_public_key(SignatureScheme::Ed25519, &pk);
        let b = Address::from_public_key(SignatureScheme::Ed25519, &pk);
        assert_eq!(a, b);
    }

    #[test]
    fn test_scheme_flag_changes_address() {
        let pk = [7u8; 32];
        let ed = Address::from_public_key(SignatureScheme::Ed25519, &pk);
        let k1 = Address::from_public_key(SignatureScheme::Secp256k1, &pk);
        assert_ne!(ed, k1);
    }

    #[test]
    fn test_display_and_parse_round_trip() {
        let addr = Address::from_public_key(SignatureScheme::Ed25519, &[1u8; 32]);
        let rendered = addr.to_string();
        assert!(rendered.starts_with("0x"));
        assert_eq!(rendered.len(), 2 + 64);

        let parsed = Address::from_hex(&rendered).unwrap();
        assert_eq!(parsed, addr);

        // Bare hex is accepted too
        let parsed = Address::from_hex(rendered.trim_start_matches("0x")).unwrap();
        assert_eq!(parsed, addr);
    }

    #[test]
    fn test_malformed_addresses_rejected() {
        assert!(Address::from_hex("0x1234").is_err());
        assert!(Address::from_hex("not hex at all").is_err());
        assert!(Address::from_hex("").is_err());
    }
}
