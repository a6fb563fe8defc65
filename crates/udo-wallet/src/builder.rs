//! Transfer transaction building.
//!
//! A transfer splits a single coin of the requested amount off the sender's
//! gas object and transfers it whole to the recipient: one split, one
//! transfer, exactly one recipient.

use udo_keys::Address;

use crate::WalletError;

/// Default gas price in MIST.
pub const DEFAULT_GAS_PRICE: u64 = 1000;

/// Default gas budget in MIST.
pub const DEFAULT_GAS_BUDGET: u64 = 100_000_000;

/// A single instruction inside an unsigned transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Split a coin of `amount` off the gas object.
    SplitCoins {
        /// Amount to split, in MIST.
        amount: u64,
    },
    /// Transfer the split coin to `recipient`.
    TransferObjects {
        /// The receiving address.
        recipient: Address,
    },
}

/// The gas object a transaction is paid from, resolved by the RPC client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GasPayment {
    /// Object id of the gas coin.
    pub object_id: String,
    /// Version of the gas coin object.
    pub version: u64,
    /// Digest of the gas coin object.
    pub digest: String,
}

/// A fully specified but unsigned transfer.
///
/// Created fresh per build call. The serialized form is produced once by
/// the RPC boundary and threaded unchanged through sign, verify, and
/// submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsignedTransaction {
    /// The sending account's address.
    pub sender: Address,
    /// Gas price in MIST.
    pub gas_price: u64,
    /// Gas budget in MIST.
    pub gas_budget: u64,
    /// The ordered instruction list.
    pub commands: Vec<Command>,
}

impl UnsignedTransaction {
    /// Build a single-output transfer.
    ///
    /// # Arguments
    /// * `sender` - The sending address.
    /// * `recipient` - The receiving address.
    /// * `amount` - Transfer amount in MIST; must be greater than zero.
    /// * `gas_price` - Gas price in MIST.
    /// * `gas_budget` - Gas budget in MIST.
    ///
    /// # Returns
    /// `Ok(UnsignedTransaction)` with exactly one split and one transfer
    /// instruction, or `WalletError::InvalidAmount` when `amount` is zero.
    pub fn transfer(
        sender: Address,
        recipient: Address,
        amount: u64,
        gas_price: u64,
        gas_budget: u64,
    ) -> Result<Self, WalletError> {
        if amount == 0 {
            return Err(WalletError::InvalidAmount(amount));
        }
        Ok(UnsignedTransaction {
            sender,
            gas_price,
            gas_budget,
            commands: vec![
                Command::SplitCoins { amount },
                Command::TransferObjects { recipient },
            ],
        })
    }

    /// The coin-split amount, when the transaction carries one.
    pub fn split_amount(&self) -> Option<u64> {
        self.commands.iter().find_map(|c| match c {
            Command::SplitCoins { amount } => Some(*amount),
            _ => None,
        })
    }

    /// The recipient, when the transaction carries a transfer.
    pub fn recipient(&self) -> Option<Address> {
        self.commands.iter().find_map(|c| match c {
            Command::TransferObjects { recipient } => Some(*recipient),
            _ => None,
        })
    }

    /// Serialize the transaction with its resolved gas payment.
    ///
    /// Deterministic: the same transaction and gas object always produce
    /// the same bytes. The result is the opaque payload that gets signed.
    ///
    /// Fails with `WalletError::EncodingFailed` when a variable-length
    /// field exceeds the format's u16 length prefix; nothing is ever
    /// silently truncated.
    pub fn encode_with_gas(&self, gas: &GasPayment) -> Result<Vec<u8>, WalletError> {
        let command_count = u16::try_from(self.commands.len()).map_err(|_| {
            WalletError::EncodingFailed(format!("{} commands exceed the limit", self.commands.len()))
        })?;

        let mut w = TxWriter::new();
        w.put_u8(TX_FORMAT_VERSION);
        w.put_fixed(self.sender.as_bytes());
        w.put_u64_le(self.gas_price);
        w.put_u64_le(self.gas_budget);
        w.put_var_bytes(gas.object_id.as_bytes())?;
        w.put_u64_le(gas.version);
        w.put_var_bytes(gas.digest.as_bytes())?;

        w.put_u16_le(command_count);
        for command in &self.commands {
            match command {
                Command::SplitCoins { amount } => {
                    w.put_u8(0);
                    w.put_u64_le(*amount);
                }
                Command::TransferObjects { recipient } => {
                    w.put_u8(1);
                    w.put_fixed(recipient.as_bytes());
                }
            }
        }
        Ok(w.into_bytes())
    }
}

/// Serialization format version byte.
const TX_FORMAT_VERSION: u8 = 1;

/// Minimal little-endian byte writer for transaction serialization.
struct TxWriter {
    buf: Vec<u8>,
}

impl TxWriter {
    fn new() -> Self {
        TxWriter { buf: Vec::new() }
    }

    fn put_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    fn put_u16_le(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    fn put_u64_le(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    fn put_fixed(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    fn put_var_bytes(&mut self, bytes: &[u8]) -> Result<(), WalletError> {
        let len = u16::try_from(bytes.len()).map_err(|_| {
            WalletError::EncodingFailed(format!("{} byte field exceeds the limit", bytes.len()))
        })?;
        self.put_u16_le(len);
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Fluent builder for transfer transactions.
///
/// Mirrors the set-sender / set-gas / split / transfer sequence of the
/// wallet's transfer flow, with the wallet's default gas parameters.
#[derive(Debug, Clone)]
pub struct TransferBuilder {
    sender: Option<Address>,
    recipient: Address,
    amount: u64,
    gas_price: u64,
    gas_budget: u64,
}

impl TransferBuilder {
    /// Start a transfer of `amount` MIST to `recipient` with default gas.
    pub fn new(recipient: Address, amount: u64) -> Self {
        TransferBuilder {
            sender: None,
            recipient,
            amount,
            gas_price: DEFAULT_GAS_PRICE,
            gas_budget: DEFAULT_GAS_BUDGET,
        }
    }

    /// Set the sender address.
    pub fn sender(mut self, sender: Address) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Override the gas price.
    pub fn gas_price(mut self, gas_price: u64) -> Self {
        self.gas_price = gas_price;
        self
    }

    /// Override the gas budget.
    pub fn gas_budget(mut self, gas_budget: u64) -> Self {
        self.gas_budget = gas_budget;
        self
    }

    /// Build the unsigned transfer.
    ///
    /// Fails with `NoCurrentAccount` when no sender was resolved and
    /// `InvalidAmount` when the amount is zero.
    pub fn build(self) -> Result<UnsignedTransaction, WalletError> {
        let sender = self.sender.ok_or(WalletError::NoCurrentAccount)?;
        UnsignedTransaction::transfer(
            sender,
            self.recipient,
            self.amount,
            self.gas_price,
            self.gas_budget,
        )
    }
}
