use alloy_primitives::Bytes;
use serde::{Deserialize, Serialize};

/// A log entry emitted by a contract call, as returned by the filter and log
/// query methods.
///
/// The linkage fields are `None` for logs from pending transactions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    /// true when the log was removed due to a chain reorganization
    #[serde(default)]
    pub removed: bool,
    /// index of the log within the block
    #[serde(default, with = "crate::serde::optional_u64")]
    pub log_index: Option<u64>,
    /// index within the block of the transaction that emitted the log
    #[serde(default, with = "crate::serde::optional_u64")]
    pub transaction_index: Option<u64>,
    /// hash of the transaction that emitted the log
    #[serde(default)]
    pub transaction_hash: Option<String>,
    /// hash of the block containing the log
    #[serde(default)]
    pub block_hash: Option<String>,
    /// number of the block containing the log
    #[serde(default, with = "crate::serde::optional_u64")]
    pub block_number: Option<u64>,
    /// address the log originates from
    pub address: String,
    /// non-indexed arguments of the log
    pub data: Bytes,
    /// indexed arguments of the log
    #[serde(default)]
    pub topics: Vec<String>,
}
