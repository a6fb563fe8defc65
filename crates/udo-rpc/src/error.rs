//! Error types for fullnode RPC operations.

/// Errors that can occur when talking to a fullnode.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to serialize or deserialize data.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The node answered with a JSON-RPC error object.
    #[error("RPC error {code}: {message}")]
    Rpc {
        /// The JSON-RPC error code.
        code: i64,
        /// Human-readable error description.
        message: String,
    },

    /// The response carried neither a result nor an error.
    #[error("response carried no result")]
    MissingResult,

    /// The sender owns no coin to pay gas from.
    #[error("no gas coin available for {0}")]
    NoGasCoin(String),

    /// A coin object on the wire had a malformed field.
    #[error("malformed coin object: {0}")]
    InvalidCoin(String),

    /// The transaction could not be serialized for submission.
    #[error("transaction encoding failed: {0}")]
    Encoding(String),
}
