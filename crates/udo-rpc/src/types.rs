//! JSON-RPC 2.0 envelope and fullnode response structures.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use udo_wallet::rpc::Coin;

/// Request-type to submit for transaction execution.
pub const WAIT_FOR_LOCAL_EXECUTION: &str = "WaitForLocalExecution";

/// A JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest {
    /// Always `"2.0"`.
    pub jsonrpc: &'static str,
    /// Request id; the client answers one call per connection, so `1`.
    pub id: u64,
    /// The method name (e.g. `suix_getCoins`).
    pub method: &'static str,
    /// Positional parameters.
    pub params: Vec<Value>,
}

impl RpcRequest {
    /// Build a request envelope for `method` with positional `params`.
    pub fn new(method: &'static str, params: Vec<Value>) -> Self {
        RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        }
    }
}

/// A JSON-RPC error object.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorObject {
    /// The JSON-RPC error code.
    pub code: i64,
    /// Human-readable error description.
    pub message: String,
}

/// A JSON-RPC 2.0 response envelope.
///
/// Exactly one of `result` and `error` is expected to be present.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct RpcResponse<T> {
    /// The successful result payload.
    #[serde(default)]
    pub result: Option<T>,
    /// The error object on failure.
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

/// One page of coin objects from `suix_getCoins`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinPage {
    /// The coins on this page.
    pub data: Vec<Coin>,
    /// Cursor for the next page, when one exists.
    #[serde(default)]
    pub next_cursor: Option<String>,
    /// Whether another page follows.
    #[serde(default)]
    pub has_next_page: bool,
}
