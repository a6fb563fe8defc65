//! The wallet-standard feature surface.
//!
//! Dapps address wallet capabilities by feature identifier and receive
//! base64-encoded payloads back. These are the output shapes of the three
//! signing features; the operations themselves live on
//! [`UdoWallet`](crate::wallet::UdoWallet).

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::pipeline::{SignedEnvelope, SignedMessage};
use crate::rpc::EffectsSummary;

/// Feature identifier for personal message signing.
pub const FEATURE_SIGN_PERSONAL_MESSAGE: &str = "sui:signPersonalMessage";
/// Feature identifier for transaction signing without submission.
pub const FEATURE_SIGN_TRANSACTION: &str = "sui:signTransaction";
/// Feature identifier for transaction signing with submission.
pub const FEATURE_SIGN_AND_EXECUTE_TRANSACTION: &str = "sui:signAndExecuteTransaction";

/// All features the wallet exposes.
pub const WALLET_FEATURES: &[&str] = &[
    FEATURE_SIGN_PERSONAL_MESSAGE,
    FEATURE_SIGN_TRANSACTION,
    FEATURE_SIGN_AND_EXECUTE_TRANSACTION,
];

/// Output of the `sui:signPersonalMessage` feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignPersonalMessageOutput {
    /// The signed message, base64-encoded.
    pub bytes: String,
    /// The serialized wallet signature, base64-encoded.
    pub signature: String,
}

impl From<SignedMessage> for SignPersonalMessageOutput {
    fn from(signed: SignedMessage) -> Self {
        SignPersonalMessageOutput {
            bytes: BASE64.encode(&signed.message),
            signature: signed.signature.to_base64(),
        }
    }
}

/// Output of the `sui:signTransaction` feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignTransactionOutput {
    /// The serialized transaction, base64-encoded.
    pub bytes: String,
    /// The serialized wallet signature, base64-encoded.
    pub signature: String,
}

impl From<SignedEnvelope> for SignTransactionOutput {
    fn from(envelope: SignedEnvelope) -> Self {
        SignTransactionOutput {
            bytes: BASE64.encode(&envelope.tx_bytes),
            signature: envelope.signature.to_base64(),
        }
    }
}

/// Output of the `sui:signAndExecuteTransaction` feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignAndExecuteTransactionOutput {
    /// The serialized transaction, base64-encoded.
    pub bytes: String,
    /// The serialized wallet signature, base64-encoded.
    pub signature: String,
    /// The transaction digest reported by the node.
    pub digest: String,
    /// Execution effects, when the node returned them.
    pub effects: Option<EffectsSummary>,
}

impl From<SignedEnvelope> for SignAndExecuteTransactionOutput {
    fn from(envelope: SignedEnvelope) -> Self {
        SignAndExecuteTransactionOutput {
            bytes: BASE64.encode(&envelope.tx_bytes),
            signature: envelope.signature.to_base64(),
            digest: envelope.digest.unwrap_or_default(),
            effects: envelope.effects,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::{Account, AccountSource};
    use crate::rpc::{ExecutionStatus, GasCostSummary};

    const SECRET_HEX: &str = "4d2763cbe1af9339ab9d93c79f053b6c6684fb1f5a0949dba4d840a5791e8d06";

    fn account() -> Account {
        Account::from_source(AccountSource::PrivateKeyHex(SECRET_HEX)).unwrap()
    }

    #[test]
    fn test_personal_message_output_round_trips_as_json() {
        let message = b"hello".to_vec();
        let signature = account().sign_personal_message(&message);
        let output = SignPersonalMessageOutput::from(SignedMessage { message, signature });

        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["bytes"], BASE64.encode(b"hello"));

        let back: SignPersonalMessageOutput = serde_json::from_value(json).unwrap();
        assert_eq!(back.bytes, output.bytes);
        assert_eq!(back.signature, output.signature);
    }

    /// Effects nest under camelCase keys the way a dapp reads them off the
    /// wire.
    #[test]
    fn test_execute_output_serializes_camel_case() {
        let tx_bytes = b"signable bytes".to_vec();
        let signature = account().sign_transaction_bytes(&tx_bytes);
        let envelope = SignedEnvelope {
            tx_bytes,
            signature,
            digest: Some("7gZKtsLpBMrq9i3cf1BcxKz5mHg5DhnVZSLGBDjhRsK1".to_string()),
            effects: Some(EffectsSummary {
                status: ExecutionStatus {
                    status: "success".to_string(),
                    error: None,
                },
                gas_used: Some(GasCostSummary {
                    computation_cost: "1000".to_string(),
                    storage_cost: "2000".to_string(),
                    storage_rebate: "100".to_string(),
                }),
            }),
        };

        let output = SignAndExecuteTransactionOutput::from(envelope);
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["digest"], "7gZKtsLpBMrq9i3cf1BcxKz5mHg5DhnVZSLGBDjhRsK1");
        assert_eq!(json["effects"]["status"]["status"], "success");
        assert_eq!(json["effects"]["gasUsed"]["computationCost"], "1000");

        let back: SignAndExecuteTransactionOutput = serde_json::from_value(json).unwrap();
        assert_eq!(back.digest, output.digest);
    }
}
