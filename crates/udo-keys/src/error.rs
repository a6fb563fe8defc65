/// Error types for key material operations.
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    /// The secret could not be parsed into the expected key format.
    #[error("invalid key encoding: {0}")]
    InvalidKeyEncoding(String),

    /// The mnemonic phrase or wordlist was unusable.
    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    /// The public key bytes do not form a valid curve point.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    /// The signature envelope is malformed.
    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    /// The address string is not a valid 32-byte hex address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}
