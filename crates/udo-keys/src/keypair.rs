//! Ed25519 keypair with wallet-specific functionality.
//!
//! Wraps an ed25519-dalek signing key and adds address derivation,
//! intent-scoped signing, verification, and construction from a mnemonic
//! phrase or a raw/hex secret.

use ed25519_dalek::{Signer, SigningKey};
use rand::rngs::OsRng;

use crate::address::Address;
use crate::intent::{signing_digest, IntentScope};
use crate::mnemonic;
use crate::scheme::SignatureScheme;
use crate::signature::WalletSignature;
use crate::KeyError;

/// Length of a private key seed in bytes.
const PRIVATE_KEY_BYTES_LEN: usize = 32;

/// An Ed25519 keypair for signing wallet operations.
///
/// The private key is exclusively owned and never exposed. The public key
/// and address are pure deterministic functions of it and never change after
/// construction.
pub struct Ed25519Keypair {
    /// The underlying dalek signing key.
    inner: SigningKey,
}

impl Ed25519Keypair {
    /// Generate a new random keypair using the OS random number generator.
    pub fn generate() -> Self {
        let inner = SigningKey::generate(&mut OsRng);
        Ed25519Keypair { inner }
    }

    /// Create a keypair from a raw 32-byte seed.
    ///
    /// # Arguments
    /// * `bytes` - The 32-byte private key seed.
    ///
    /// # Returns
    /// `Ok(Ed25519Keypair)` on success, or `KeyError::InvalidKeyEncoding` if
    /// the slice is not exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        if bytes.len() != PRIVATE_KEY_BYTES_LEN {
            return Err(KeyError::InvalidKeyEncoding(format!(
                "expected {} bytes, got {}",
                PRIVATE_KEY_BYTES_LEN,
                bytes.len()
            )));
        }
        let mut seed = [0u8; PRIVATE_KEY_BYTES_LEN];
        seed.copy_from_slice(bytes);
        Ok(Ed25519Keypair {
            inner: SigningKey::from_bytes(&seed),
        })
    }

    /// Create a keypair from a hexadecimal secret, optionally `0x`-prefixed.
    ///
    /// # Arguments
    /// * `hex_str` - A 64-character hex string encoding the 32-byte seed.
    ///
    /// # Returns
    /// `Ok(Ed25519Keypair)` on success, or `KeyError::InvalidKeyEncoding` if
    /// the hex is empty, malformed, or the wrong length.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        let stripped = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        if stripped.is_empty() {
            return Err(KeyError::InvalidKeyEncoding(
                "private key hex is empty".to_string(),
            ));
        }
        let bytes =
            hex::decode(stripped).map_err(|e| KeyError::InvalidKeyEncoding(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Derive a keypair from a mnemonic phrase along Sui's default path.
    ///
    /// The phrase is stretched into a BIP-39 seed and the key is derived
    /// with SLIP-0010 along `m/44'/784'/0'/0'/0'`. Deterministic: the same
    /// phrase always yields the same keypair.
    ///
    /// # Arguments
    /// * `phrase` - The space-separated mnemonic phrase.
    ///
    /// # Returns
    /// `Ok(Ed25519Keypair)` on success, or `KeyError::InvalidMnemonic` if
    /// the phrase is empty.
    pub fn from_mnemonic(phrase: &str) -> Result<Self, KeyError> {
        let seed = mnemonic::seed_from_phrase(phrase, "")?;
        let key = mnemonic::derive_ed25519_key(&seed, mnemonic::SUI_DERIVATION_PATH)?;
        Self::from_bytes(&key)
    }

    /// The raw 32-byte public key.
    pub fn public_key(&self) -> [u8; 32] {
        self.inner.verifying_key().to_bytes()
    }

    /// The address derived from this keypair's public key.
    pub fn address(&self) -> Address {
        Address::from_public_key(SignatureScheme::Ed25519, &self.public_key())
    }

    /// The signature scheme of this keypair.
    pub fn scheme(&self) -> SignatureScheme {
        SignatureScheme::Ed25519
    }

    /// Sign arbitrary bytes as a personal message.
    ///
    /// No transaction semantics; the message is length-prefixed and domain
    /// separated from transaction signing.
    pub fn sign_personal_message(&self, message: &[u8]) -> WalletSignature {
        self.sign_with_scope(IntentScope::PersonalMessage, message)
    }

    /// Sign a serialized transaction payload.
    pub fn sign_transaction_bytes(&self, tx_bytes: &[u8]) -> WalletSignature {
        self.sign_with_scope(IntentScope::TransactionData, tx_bytes)
    }

    fn sign_with_scope(&self, scope: IntentScope, payload: &[u8]) -> WalletSignature {
        let digest = signing_digest(scope, payload);
        let signature = self.inner.sign(&digest);
        WalletSignature::new(
            SignatureScheme::Ed25519,
            signature.to_bytes(),
            self.public_key(),
        )
    }
}

impl Drop for Ed25519Keypair {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        // Overwrite the seed's memory with zeros before release.
        let mut bytes = self.inner.to_bytes();
        bytes.zeroize();
    }
}

impl std::fmt::Debug for Ed25519Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never expose private key material, even in debug output.
        f.debug_struct("Ed25519Keypair")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET_HEX: &str = "9bf49a6a0755f953811fce125f2683d50429c3bb49e074147e0089a52eae155f";

    /// The address and public key are stable across repeated derivations
    /// from the same secret.
    #[test]
    fn test_derivation_is_deterministic() {
        let a = Ed25519Keypair::from_hex(SECRET_HEX).unwrap();
        let b = Ed25519Keypair::from_hex(&format!("0x{SECRET_HEX}")).unwrap();

        assert_eq!(a.public_key(), b.public_key());
        assert_eq!(a.address(), b.address());
        assert_eq!(a.address(), a.address());
    }

    #[test]
    fn test_invalid_secrets_rejected() {
        assert!(Ed25519Keypair::from_hex("").is_err());
        assert!(Ed25519Keypair::from_hex("0x").is_err());
        assert!(Ed25519Keypair::from_hex("zzzz").is_err());
        // wrong length
        assert!(Ed25519Keypair::from_hex("abcd").is_err());
        assert!(Ed25519Keypair::from_bytes(&[0u8; 31]).is_err());
    }

    #[test]
    fn test_sign_and_verify_personal_message() {
        let keypair = Ed25519Keypair::generate();
        let message = b"Hello, UDO!";

        let sig = keypair.sign_personal_message(message);
        assert!(sig
            .verify_personal_message(&keypair.public_key(), message)
            .unwrap());

        // Wrong message fails
        assert!(!sig
            .verify_personal_message(&keypair.public_key(), b"other message")
            .unwrap());

        // Wrong key fails
        let other = Ed25519Keypair::generate();
        assert!(!sig
            .verify_personal_message(&other.public_key(), message)
            .unwrap());
    }

    #[test]
    fn test_sign_and_verify_transaction_bytes() {
        let keypair = Ed25519Keypair::from_hex(SECRET_HEX).unwrap();
        let tx_bytes = vec![0xde, 0xad, 0xbe, 0xef, 0x42];

        let sig = keypair.sign_transaction_bytes(&tx_bytes);
        assert!(sig
            .verify_transaction(&keypair.public_key(), &tx_bytes)
            .unwrap());

        // A transaction signature never verifies as a personal message over
        // the same bytes.
        assert!(!sig
            .verify_personal_message(&keypair.public_key(), &tx_bytes)
            .unwrap());
    }

    #[test]
    fn test_corrupted_signature_fails_verification() {
        let keypair = Ed25519Keypair::generate();
        let message = b"tamper me";

        let sig = keypair.sign_personal_message(message);
        let mut bytes = sig.to_bytes();
        bytes[5] ^= 0xff;

        let corrupted = WalletSignature::from_bytes(&bytes).unwrap();
        assert!(!corrupted
            .verify_personal_message(&keypair.public_key(), message)
            .unwrap());
    }

    #[test]
    fn test_mnemonic_derivation_is_deterministic() {
        let phrase = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
        let a = Ed25519Keypair::from_mnemonic(phrase).unwrap();
        let b = Ed25519Keypair::from_mnemonic(phrase).unwrap();
        assert_eq!(a.address(), b.address());

        let other = Ed25519Keypair::from_mnemonic("legal winner thank year wave sausage worth useful legal winner thank yellow").unwrap();
        assert_ne!(a.address(), other.address());
    }
}
