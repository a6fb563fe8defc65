//! JSON-RPC HTTP client for a Sui fullnode.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::debug;
use udo_keys::{Address, WalletSignature};
use udo_wallet::builder::{GasPayment, UnsignedTransaction};
use udo_wallet::rpc::{Coin, ExecuteResponse, SuiRpc};

use crate::error::RpcError;
use crate::types::{CoinPage, RpcRequest, RpcResponse, WAIT_FOR_LOCAL_EXECUTION};

/// HTTP client for a single fullnode endpoint.
///
/// One client targets one endpoint for its whole lifetime; switching chains
/// means connecting a fresh client.
#[derive(Debug, Clone)]
pub struct SuiClient {
    /// The fullnode URL.
    endpoint: String,
    /// Underlying HTTP client.
    http: reqwest::Client,
}

impl SuiClient {
    /// Create a client targeting the given fullnode URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    /// The endpoint URL this client targets.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Perform one JSON-RPC call and unwrap the response envelope.
    async fn call<T: DeserializeOwned>(
        &self,
        method: &'static str,
        params: Vec<Value>,
    ) -> Result<T, RpcError> {
        let request = RpcRequest::new(method, params);
        debug!(method, endpoint = %self.endpoint, "rpc call");

        let response: RpcResponse<T> = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?
            .json()
            .await?;

        if let Some(err) = response.error {
            return Err(RpcError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        response.result.ok_or(RpcError::MissingResult)
    }

    /// Pick the owned coin with the largest balance as the gas payment.
    async fn select_gas(&self, owner: &Address) -> Result<GasPayment, RpcError> {
        let coins = self.list_coins(owner).await?;
        let coin = coins
            .into_iter()
            .max_by_key(|c| c.balance_u64().unwrap_or(0))
            .ok_or_else(|| RpcError::NoGasCoin(owner.to_string()))?;

        let version = coin
            .version_u64()
            .ok_or_else(|| RpcError::InvalidCoin(format!("version {:?}", coin.version)))?;
        Ok(GasPayment {
            object_id: coin.coin_object_id,
            version,
            digest: coin.digest,
        })
    }

    /// Fetch the first page of SUI coins an address owns.
    async fn list_coins(&self, owner: &Address) -> Result<Vec<Coin>, RpcError> {
        let page: CoinPage = self
            .call(
                "suix_getCoins",
                vec![json!(owner.to_string()), Value::Null, Value::Null, Value::Null],
            )
            .await?;
        Ok(page.data)
    }
}

impl SuiRpc for SuiClient {
    type Error = RpcError;

    fn connect(endpoint: &str) -> Self {
        SuiClient::new(endpoint)
    }

    async fn get_coins(&self, owner: &Address) -> Result<Vec<Coin>, RpcError> {
        self.list_coins(owner).await
    }

    async fn build_transaction_bytes(
        &self,
        tx: &UnsignedTransaction,
    ) -> Result<Vec<u8>, RpcError> {
        let gas = self.select_gas(&tx.sender).await?;
        tx.encode_with_gas(&gas)
            .map_err(|e| RpcError::Encoding(e.to_string()))
    }

    async fn execute_transaction(
        &self,
        tx_bytes: &[u8],
        signature: &WalletSignature,
    ) -> Result<ExecuteResponse, RpcError> {
        self.call(
            "sui_executeTransactionBlock",
            vec![
                json!(BASE64.encode(tx_bytes)),
                json!([signature.to_base64()]),
                json!({ "showEffects": true }),
                json!(WAIT_FOR_LOCAL_EXECUTION),
            ],
        )
        .await
    }
}
