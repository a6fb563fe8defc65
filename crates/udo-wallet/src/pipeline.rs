//! The serialize, sign, verify, submit pipeline.
//!
//! Every transaction signing operation runs through here. The transaction
//! is serialized exactly once; the same byte buffer is signed, verified,
//! and submitted. A signature that does not verify against that buffer is
//! fatal: the envelope is never returned to the caller and never reaches
//! the network.

use tracing::{debug, warn};
use udo_keys::WalletSignature;

use crate::account::Account;
use crate::builder::UnsignedTransaction;
use crate::rpc::{EffectsSummary, SuiRpc};
use crate::WalletError;

/// A signed personal message.
#[derive(Debug, Clone)]
pub struct SignedMessage {
    /// The exact message bytes that were signed.
    pub message: Vec<u8>,
    /// The wallet signature over the message.
    pub signature: WalletSignature,
}

/// A signed, serialized transaction, optionally with execution results.
///
/// Never mutated after construction; digest and effects are populated only
/// by the execute path.
#[derive(Debug, Clone)]
pub struct SignedEnvelope {
    /// The serialized transaction bytes the signature covers.
    pub tx_bytes: Vec<u8>,
    /// The wallet signature over those bytes.
    pub signature: WalletSignature,
    /// Transaction digest, populated on execution.
    pub digest: Option<String>,
    /// Execution effects, populated on execution.
    pub effects: Option<EffectsSummary>,
}

/// Orchestrates signing operations against one RPC handle.
pub struct SigningPipeline<'c, R> {
    client: &'c R,
}

impl<'c, R: SuiRpc> SigningPipeline<'c, R> {
    /// Create a pipeline borrowing the given RPC handle.
    pub fn new(client: &'c R) -> Self {
        SigningPipeline { client }
    }

    /// Sign arbitrary bytes as a personal message.
    ///
    /// No transaction semantics and no network round trip.
    pub fn sign_personal_message(
        &self,
        account: &Account,
        message: &[u8],
    ) -> Result<SignedMessage, WalletError> {
        let signature = account.sign_personal_message(message);
        debug!(address = %account.address(), len = message.len(), "personal message signed");
        Ok(SignedMessage {
            message: message.to_vec(),
            signature,
        })
    }

    /// Serialize, sign, and verify a transaction without submitting it.
    ///
    /// The returned envelope's signature is guaranteed to verify against
    /// `tx_bytes`; `VerificationFailed` otherwise, and nothing is returned.
    pub async fn sign_transaction(
        &self,
        account: &Account,
        tx: &UnsignedTransaction,
    ) -> Result<SignedEnvelope, WalletError> {
        let tx_bytes = self
            .client
            .build_transaction_bytes(tx)
            .await
            .map_err(|e| WalletError::SigningFailed(format!("transaction serialization: {e}")))?;
        self.sign_verified(account, tx_bytes)
    }

    /// Serialize, sign, verify, and submit a transaction.
    ///
    /// Verification happens strictly before submission; an unverified
    /// transaction is never broadcast. Submission failures carry the
    /// transport error unmodified and are not retried.
    pub async fn sign_and_execute(
        &self,
        account: &Account,
        tx: &UnsignedTransaction,
    ) -> Result<SignedEnvelope, WalletError> {
        let mut envelope = self.sign_transaction(account, tx).await?;

        let response = self
            .client
            .execute_transaction(&envelope.tx_bytes, &envelope.signature)
            .await
            .map_err(|e| {
                warn!(address = %account.address(), error = %e, "transaction submission failed");
                WalletError::SubmissionFailed(Box::new(e))
            })?;

        debug!(digest = %response.digest, "transaction executed");
        envelope.digest = Some(response.digest);
        envelope.effects = response.effects;
        Ok(envelope)
    }

    /// Sign serialized bytes and verify the fresh signature against the
    /// identical buffer before handing anything back.
    fn sign_verified(
        &self,
        account: &Account,
        tx_bytes: Vec<u8>,
    ) -> Result<SignedEnvelope, WalletError> {
        let signature = account.sign_transaction_bytes(&tx_bytes);
        if !signature.verify_transaction(account.public_key(), &tx_bytes)? {
            return Err(WalletError::VerificationFailed);
        }
        debug!(address = %account.address(), len = tx_bytes.len(), "transaction signed and verified");

        Ok(SignedEnvelope {
            tx_bytes,
            signature,
            digest: None,
            effects: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AccountSource;
    use crate::builder::TransferBuilder;
    use crate::rpc::mock::MockRpc;
    use udo_keys::Ed25519Keypair;

    const SECRET_HEX: &str = "9bf49a6a0755f953811fce125f2683d50429c3bb49e074147e0089a52eae155f";

    fn account() -> Account {
        Account::from_source(AccountSource::PrivateKeyHex(SECRET_HEX)).unwrap()
    }

    fn transfer(account: &Account) -> UnsignedTransaction {
        let recipient = Ed25519Keypair::from_bytes(&[9u8; 32]).unwrap().address();
        TransferBuilder::new(recipient, 100)
            .sender(account.address())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_sign_transaction_envelope_verifies() {
        let client = MockRpc::connect("mock://test");
        let pipeline = SigningPipeline::new(&client);
        let account = account();

        let envelope = pipeline
            .sign_transaction(&account, &transfer(&account))
            .await
            .unwrap();

        assert!(envelope
            .signature
            .verify_transaction(account.public_key(), &envelope.tx_bytes)
            .unwrap());
        assert!(envelope.digest.is_none());
        assert!(envelope.effects.is_none());
        // Nothing was submitted.
        assert_eq!(client.execute_count(), 0);
    }

    #[tokio::test]
    async fn test_sign_and_execute_populates_results() {
        let client = MockRpc::connect("mock://test");
        let pipeline = SigningPipeline::new(&client);
        let account = account();

        let envelope = pipeline
            .sign_and_execute(&account, &transfer(&account))
            .await
            .unwrap();

        assert!(envelope.digest.is_some());
        assert!(envelope.effects.is_some());
        assert_eq!(client.execute_count(), 1);
    }

    /// A forced verification failure aborts before submission: no call ever
    /// reaches the node.
    #[tokio::test]
    async fn test_verification_failure_blocks_submission() {
        let client = MockRpc::connect("mock://test");
        let pipeline = SigningPipeline::new(&client);

        // Account whose advertised public key no longer matches its signer.
        let mut account = account();
        account.replace_public_key(Ed25519Keypair::from_bytes(&[7u8; 32]).unwrap().public_key());

        let tx = transfer(&account);
        let err = pipeline.sign_and_execute(&account, &tx).await.unwrap_err();

        assert!(matches!(err, WalletError::VerificationFailed));
        assert_eq!(client.execute_count(), 0);
    }

    #[tokio::test]
    async fn test_submission_failure_surfaces_transport_error() {
        let client = MockRpc::failing_execute();
        let pipeline = SigningPipeline::new(&client);
        let account = account();

        let err = pipeline
            .sign_and_execute(&account, &transfer(&account))
            .await
            .unwrap_err();

        match err {
            WalletError::SubmissionFailed(source) => {
                assert!(source.to_string().contains("connection reset"));
            }
            other => panic!("expected SubmissionFailed, got {other:?}"),
        }
        assert_eq!(client.execute_count(), 1);
    }

    #[tokio::test]
    async fn test_personal_message_signature_verifies() {
        let client = MockRpc::connect("mock://test");
        let pipeline = SigningPipeline::new(&client);
        let account = account();

        let signed = pipeline
            .sign_personal_message(&account, b"hello wallet")
            .unwrap();

        assert_eq!(signed.message, b"hello wallet");
        assert!(signed
            .signature
            .verify_personal_message(account.public_key(), &signed.message)
            .unwrap());
    }

    /// Re-signing the same transaction yields a valid signature each time.
    #[tokio::test]
    async fn test_re_signing_stays_valid() {
        let client = MockRpc::connect("mock://test");
        let pipeline = SigningPipeline::new(&client);
        let account = account();
        let tx = transfer(&account);

        let first = pipeline.sign_transaction(&account, &tx).await.unwrap();
        let second = pipeline.sign_transaction(&account, &tx).await.unwrap();

        assert_eq!(first.tx_bytes, second.tx_bytes);
        for envelope in [&first, &second] {
            assert!(envelope
                .signature
                .verify_transaction(account.public_key(), &envelope.tx_bytes)
                .unwrap());
        }
    }
}
