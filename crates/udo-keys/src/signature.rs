//! The serialized wallet signature envelope.
//!
//! A wallet signature is `flag(1) || signature(64) || public_key(32)`,
//! exchanged with dapps and the fullnode as base64. Verification recomputes
//! the intent digest from the exact bytes that were signed; callers must
//! never re-serialize between signing and verifying.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use ed25519_dalek::{Signature, VerifyingKey};

use crate::intent::{signing_digest, IntentScope};
use crate::scheme::SignatureScheme;
use crate::KeyError;

/// Length of an Ed25519 signature in bytes.
const SIGNATURE_BYTES_LEN: usize = 64;

/// Length of an Ed25519 public key in bytes.
const PUBLIC_KEY_BYTES_LEN: usize = 32;

/// A scheme-flagged signature with the signer's public key attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletSignature {
    scheme: SignatureScheme,
    signature: [u8; SIGNATURE_BYTES_LEN],
    public_key: [u8; PUBLIC_KEY_BYTES_LEN],
}

impl WalletSignature {
    /// Assemble a signature envelope from its parts.
    pub(crate) fn new(
        scheme: SignatureScheme,
        signature: [u8; SIGNATURE_BYTES_LEN],
        public_key: [u8; PUBLIC_KEY_BYTES_LEN],
    ) -> Self {
        WalletSignature {
            scheme,
            signature,
            public_key,
        }
    }

    /// The signature scheme flag of the signer.
    pub fn scheme(&self) -> SignatureScheme {
        self.scheme
    }

    /// The raw 64-byte signature.
    pub fn signature_bytes(&self) -> &[u8; SIGNATURE_BYTES_LEN] {
        &self.signature
    }

    /// The signer's raw public key bytes.
    pub fn public_key_bytes(&self) -> &[u8; PUBLIC_KEY_BYTES_LEN] {
        &self.public_key
    }

    /// Serialize as `flag || signature || public_key`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + SIGNATURE_BYTES_LEN + PUBLIC_KEY_BYTES_LEN);
        out.push(self.scheme.flag());
        out.extend_from_slice(&self.signature);
        out.extend_from_slice(&self.public_key);
        out
    }

    /// Serialize as base64 for the wire.
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.to_bytes())
    }

    /// Parse a serialized signature envelope.
    ///
    /// # Arguments
    /// * `bytes` - A `flag || signature || public_key` byte sequence.
    ///
    /// # Returns
    /// `Ok(WalletSignature)` on success, or `KeyError::InvalidSignature` if
    /// the flag is unknown or the length is wrong.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        if bytes.len() != 1 + SIGNATURE_BYTES_LEN + PUBLIC_KEY_BYTES_LEN {
            return Err(KeyError::InvalidSignature(format!(
                "expected {} bytes, got {}",
                1 + SIGNATURE_BYTES_LEN + PUBLIC_KEY_BYTES_LEN,
                bytes.len()
            )));
        }
        let scheme = SignatureScheme::from_flag(bytes[0])?;

        let mut signature = [0u8; SIGNATURE_BYTES_LEN];
        signature.copy_from_slice(&bytes[1..1 + SIGNATURE_BYTES_LEN]);

        let mut public_key = [0u8; PUBLIC_KEY_BYTES_LEN];
        public_key.copy_from_slice(&bytes[1 + SIGNATURE_BYTES_LEN..]);

        Ok(WalletSignature {
            scheme,
            signature,
            public_key,
        })
    }

    /// Parse a base64-encoded signature envelope.
    pub fn from_base64(s: &str) -> Result<Self, KeyError> {
        let bytes = BASE64
            .decode(s)
            .map_err(|e| KeyError::InvalidSignature(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Verify this signature over transaction bytes against a public key.
    ///
    /// Must be called with the exact serialized bytes that were signed.
    ///
    /// # Arguments
    /// * `public_key` - The 32-byte public key to verify against.
    /// * `tx_bytes` - The serialized transaction bytes.
    ///
    /// # Returns
    /// `Ok(true)` if the signature is valid, `Ok(false)` if it does not
    /// verify, or an error if the public key is malformed.
    pub fn verify_transaction(&self, public_key: &[u8], tx_bytes: &[u8]) -> Result<bool, KeyError> {
        self.verify(public_key, IntentScope::TransactionData, tx_bytes)
    }

    /// Verify this signature over a personal message against a public key.
    pub fn verify_personal_message(
        &self,
        public_key: &[u8],
        message: &[u8],
    ) -> Result<bool, KeyError> {
        self.verify(public_key, IntentScope::PersonalMessage, message)
    }

    fn verify(
        &self,
        public_key: &[u8],
        scope: IntentScope,
        payload: &[u8],
    ) -> Result<bool, KeyError> {
        let key_bytes: [u8; PUBLIC_KEY_BYTES_LEN] = public_key
            .try_into()
            .map_err(|_| KeyError::InvalidPublicKey(format!("expected 32 bytes, got {}", public_key.len())))?;
        let verifying_key = VerifyingKey::from_bytes(&key_bytes)
            .map_err(|e| KeyError::InvalidPublicKey(e.to_string()))?;

        let digest = signing_digest(scope, payload);
        let signature = Signature::from_bytes(&self.signature);
        Ok(verifying_key.verify_strict(&digest, &signature).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypair::Ed25519Keypair;

    #[test]
    fn test_base64_round_trip() {
        let keypair = Ed25519Keypair::generate();
        let sig = keypair.sign_personal_message(b"round trip");

        let restored = WalletSignature::from_base64(&sig.to_base64()).unwrap();
        assert_eq!(restored, sig);
        assert_eq!(restored.scheme(), SignatureScheme::Ed25519);
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!(WalletSignature::from_bytes(&[0u8; 10]).is_err());
        assert!(WalletSignature::from_bytes(&[]).is_err());
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let mut bytes = vec![0xeeu8];
        bytes.extend_from_slice(&[0u8; 96]);
        assert!(WalletSignature::from_bytes(&bytes).is_err());
    }

    #[test]
    fn test_verify_rejects_malformed_public_key() {
        let keypair = Ed25519Keypair::generate();
        let sig = keypair.sign_personal_message(b"m");
        assert!(sig.verify_personal_message(&[0u8; 5], b"m").is_err());
    }
}
