use alloy_primitives::{Bytes, U256};
use serde::{Deserialize, Serialize};

/// A transaction as returned by the transaction lookup methods.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// hash of the transaction
    pub hash: String,
    /// the number of transactions made by the sender prior to this one
    #[serde(with = "crate::serde::u64")]
    pub nonce: u64,
    /// hash of the block containing the transaction; `None` while pending
    #[serde(default)]
    pub block_hash: Option<String>,
    /// number of the block containing the transaction; `None` while pending
    #[serde(default, with = "crate::serde::optional_u64")]
    pub block_number: Option<u64>,
    /// index position within the block; `None` while pending
    #[serde(default, with = "crate::serde::optional_u64")]
    pub transaction_index: Option<u64>,
    /// address of the sender
    pub from: String,
    /// address of the receiver; `None` for a contract creation transaction
    #[serde(default)]
    pub to: Option<String>,
    /// value transferred, in xin
    pub value: U256,
    /// gas provided by the sender
    #[serde(with = "crate::serde::u64")]
    pub gas: u64,
    /// gas price provided by the sender, in xin
    pub gas_price: U256,
    /// the data sent along with the transaction
    pub input: Bytes,
}

impl Transaction {
    /// Whether the transaction creates a contract.
    pub fn is_contract_creation(&self) -> bool {
        self.to.is_none()
    }
}
