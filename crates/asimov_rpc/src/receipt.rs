use alloy_primitives::Bytes;
use serde::{Deserialize, Serialize};

use crate::log::Log;

/// A transaction receipt, as returned by `flow_getTransactionReceipt`.
///
/// Receipts exist only for mined transactions; a pending transaction has
/// none.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    /// hash of the transaction
    pub transaction_hash: String,
    /// index position of the transaction within the block
    #[serde(with = "crate::serde::u64")]
    pub transaction_index: u64,
    /// hash of the block containing the transaction
    pub block_hash: String,
    /// number of the block containing the transaction
    #[serde(with = "crate::serde::u64")]
    pub block_number: u64,
    /// total gas used by the block up to and including this transaction
    #[serde(with = "crate::serde::u64")]
    pub cumulative_gas_used: u64,
    /// gas used by this transaction alone
    #[serde(with = "crate::serde::u64")]
    pub gas_used: u64,
    /// address of the created contract, for contract creation transactions
    #[serde(default)]
    pub contract_address: Option<String>,
    /// the logs this transaction generated
    #[serde(default)]
    pub logs: Vec<Log>,
    /// the bloom filter for the logs of the transaction
    pub logs_bloom: Bytes,
    /// pre-consensus-change state root, on chains that report one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    /// execution status quantity: 1 on success, 0 on failure
    #[serde(
        default,
        with = "crate::serde::optional_u64",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<u64>,
}

impl TransactionReceipt {
    /// Whether the transaction executed successfully, when the node reports
    /// a status.
    pub fn succeeded(&self) -> Option<bool> {
        self.status.map(|status| status == 1)
    }
}
