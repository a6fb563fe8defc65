//! The boundary to the blockchain node.
//!
//! The wallet core never talks to a fullnode directly; it goes through the
//! [`SuiRpc`] trait. The production implementation lives in `udo-rpc`; tests
//! substitute their own.

use std::future::Future;

use serde::{Deserialize, Serialize};
use udo_keys::{Address, WalletSignature};

use crate::builder::UnsignedTransaction;

/// A coin object owned by an address.
///
/// Numeric fields arrive as strings on the wire, per the node's JSON
/// conventions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coin {
    /// The coin type tag (e.g. `0x2::sui::SUI`).
    pub coin_type: String,
    /// Object id of the coin.
    pub coin_object_id: String,
    /// Object version.
    pub version: String,
    /// Object digest.
    pub digest: String,
    /// Balance in MIST.
    pub balance: String,
}

impl Coin {
    /// The balance as a number; `None` if the wire value is malformed.
    pub fn balance_u64(&self) -> Option<u64> {
        self.balance.parse().ok()
    }

    /// The version as a number; `None` if the wire value is malformed.
    pub fn version_u64(&self) -> Option<u64> {
        self.version.parse().ok()
    }
}

/// Execution status of a submitted transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionStatus {
    /// `"success"` or `"failure"`.
    pub status: String,
    /// The abort or error description on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Gas charged for a transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasCostSummary {
    /// Computation cost in MIST.
    pub computation_cost: String,
    /// Storage cost in MIST.
    pub storage_cost: String,
    /// Storage rebate in MIST.
    pub storage_rebate: String,
}

/// Summary of a transaction's execution effects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectsSummary {
    /// Whether execution succeeded.
    pub status: ExecutionStatus,
    /// Gas charged, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_used: Option<GasCostSummary>,
}

/// The node's response to a transaction submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteResponse {
    /// The transaction digest.
    pub digest: String,
    /// Execution effects, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<EffectsSummary>,
}

/// Narrow interface to a fullnode.
///
/// One handle targets one endpoint; switching chains means connecting a new
/// handle, never mutating an existing one.
pub trait SuiRpc: Sized + Send + Sync {
    /// Transport-level error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a handle targeting the given endpoint URL.
    fn connect(endpoint: &str) -> Self;

    /// List the coin objects an address owns.
    fn get_coins(
        &self,
        owner: &Address,
    ) -> impl Future<Output = Result<Vec<Coin>, Self::Error>> + Send;

    /// Resolve gas and serialize a transaction into its signable bytes.
    fn build_transaction_bytes(
        &self,
        tx: &UnsignedTransaction,
    ) -> impl Future<Output = Result<Vec<u8>, Self::Error>> + Send;

    /// Submit signed transaction bytes for execution.
    fn execute_transaction(
        &self,
        tx_bytes: &[u8],
        signature: &WalletSignature,
    ) -> impl Future<Output = Result<ExecuteResponse, Self::Error>> + Send;
}

#[cfg(test)]
pub(crate) mod mock {
    //! An in-memory `SuiRpc` double that records submission calls.

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use udo_keys::{Address, WalletSignature};

    use super::{Coin, EffectsSummary, ExecuteResponse, ExecutionStatus, SuiRpc};
    use crate::builder::{GasPayment, UnsignedTransaction};

    #[derive(Debug, thiserror::Error)]
    #[error("mock rpc failure: {0}")]
    pub struct MockRpcError(pub String);

    pub struct MockRpc {
        pub endpoint: String,
        pub execute_calls: Arc<AtomicUsize>,
        pub fail_execute: bool,
        pub coins: Vec<Coin>,
    }

    impl MockRpc {
        pub fn failing_execute() -> Self {
            MockRpc {
                fail_execute: true,
                ..Self::connect("mock://test")
            }
        }

        pub fn execute_count(&self) -> usize {
            self.execute_calls.load(Ordering::SeqCst)
        }

        fn gas() -> GasPayment {
            GasPayment {
                object_id: "0x2".to_string(),
                version: 1,
                digest: "mockgas".to_string(),
            }
        }
    }

    impl SuiRpc for MockRpc {
        type Error = MockRpcError;

        fn connect(endpoint: &str) -> Self {
            MockRpc {
                endpoint: endpoint.to_string(),
                execute_calls: Arc::new(AtomicUsize::new(0)),
                fail_execute: false,
                coins: Vec::new(),
            }
        }

        async fn get_coins(&self, _owner: &Address) -> Result<Vec<Coin>, MockRpcError> {
            Ok(self.coins.clone())
        }

        async fn build_transaction_bytes(
            &self,
            tx: &UnsignedTransaction,
        ) -> Result<Vec<u8>, MockRpcError> {
            tx.encode_with_gas(&Self::gas())
                .map_err(|e| MockRpcError(e.to_string()))
        }

        async fn execute_transaction(
            &self,
            _tx_bytes: &[u8],
            _signature: &WalletSignature,
        ) -> Result<ExecuteResponse, MockRpcError> {
            self.execute_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_execute {
                return Err(MockRpcError("connection reset".to_string()));
            }
            Ok(ExecuteResponse {
                digest: "7gZKtsLpBMrq9i3cf1BcxKz5mHg5DhnVZSLGBDjhRsK1".to_string(),
                effects: Some(EffectsSummary {
                    status: ExecutionStatus {
                        status: "success".to_string(),
                        error: None,
                    },
                    gas_used: None,
                }),
            })
        }
    }
}
