use udo_keys::{Address, KeyError};

/// Error types for wallet operations.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// Key material error (bad secret, signature, or public key encoding).
    #[error(transparent)]
    Key(#[from] KeyError),

    /// An account with this address is already registered.
    #[error("duplicate address: {0}")]
    DuplicateAddress(Address),

    /// The account is not a member of the registry.
    #[error("unknown account: {0}")]
    UnknownAccount(Address),

    /// No account is selected.
    #[error("no selected account")]
    NoCurrentAccount,

    /// The chain identifier is not in the known chain mapping.
    #[error("unsupported chain: {0}")]
    UnsupportedChain(String),

    /// The transfer amount must be greater than zero.
    #[error("invalid transfer amount: {0}")]
    InvalidAmount(u64),

    /// A field does not fit the serialized transaction format.
    #[error("transaction encoding failed: {0}")]
    EncodingFailed(String),

    /// The transaction could not be serialized or signed.
    #[error("signing failed: {0}")]
    SigningFailed(String),

    /// The fresh signature did not verify against the signed bytes.
    /// The envelope is discarded; nothing is returned or submitted.
    #[error("transaction signature verification failed")]
    VerificationFailed,

    /// The transaction could not be submitted to the network.
    #[error("transaction submission failed: {0}")]
    SubmissionFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}
