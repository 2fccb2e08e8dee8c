use alloy_primitives::{Bytes, U256};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::transaction::Transaction;

/// A block, as returned by `flow_getBlockByHash` and `flow_getBlockByNumber`.
///
/// The node returns the block's transactions either as a list of hashes or
/// as full transaction records, depending on a flag in the request; the two
/// wire shapes decode into this one record with the variant carried by
/// [`BlockTransactions`]. Pending blocks carry `None` for hash, number,
/// nonce and miner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// hash of the block; `None` when pending
    pub hash: Option<String>,
    /// hash of the parent block
    pub parent_hash: String,
    /// hash of the generated proof-of-work; `None` when pending
    pub nonce: Option<String>,
    /// SHA3 of the uncles data in the block
    pub sha3_uncles: String,
    /// the bloom filter for the logs of the block
    pub logs_bloom: Bytes,
    /// the root of the transaction trie of the block
    pub transactions_root: String,
    /// the root of the final state trie of the block
    pub state_root: String,
    /// the root of the receipts trie of the block
    pub receipts_root: String,
    /// the address of the beneficiary of the mining rewards; `None` when
    /// pending
    pub miner: Option<String>,
    /// the block number; `None` when pending
    #[serde(with = "crate::serde::optional_u64")]
    pub number: Option<u64>,
    /// integer of the difficulty for this block
    pub difficulty: U256,
    /// integer of the total difficulty of the chain until this block
    pub total_difficulty: Option<U256>,
    /// the "extra data" field of this block
    pub extra_data: Bytes,
    /// the length of the serialized block, in bytes
    #[serde(with = "crate::serde::u64")]
    pub size: u64,
    /// the maximum gas allowed in this block
    #[serde(with = "crate::serde::u64")]
    pub gas_limit: u64,
    /// the total gas used by all transactions in this block
    #[serde(with = "crate::serde::u64")]
    pub gas_used: u64,
    /// the unix timestamp for when the block was collated
    #[serde(with = "crate::serde::u64")]
    pub timestamp: u64,
    /// the transactions of the block, in the shape the caller requested
    pub transactions: BlockTransactions,
    /// hashes of the uncles of the block
    pub uncles: Vec<String>,
}

/// The transactions of a [`Block`]: hashes only, or full records.
///
/// Which variant applies is decided by the caller's full-transactions flag
/// at decode time, never by inspecting the payload; an empty list therefore
/// still carries the requested variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BlockTransactions {
    /// transaction hashes
    Hashes(Vec<String>),
    /// full transaction records
    Full(Vec<Transaction>),
}

impl BlockTransactions {
    /// Returns the number of transactions in the block.
    pub fn len(&self) -> usize {
        match self {
            BlockTransactions::Hashes(hashes) => hashes.len(),
            BlockTransactions::Full(transactions) => transactions.len(),
        }
    }

    /// Whether the block contains no transactions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The wire shape shared by both block responses, generic over the element
/// type of the transaction list.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "TransactionT: serde::de::DeserializeOwned"))]
pub(crate) struct RawBlock<TransactionT> {
    #[serde(default)]
    hash: Option<String>,
    parent_hash: String,
    #[serde(default)]
    nonce: Option<String>,
    sha3_uncles: String,
    logs_bloom: Bytes,
    transactions_root: String,
    state_root: String,
    receipts_root: String,
    #[serde(default)]
    miner: Option<String>,
    #[serde(default, with = "crate::serde::optional_u64")]
    number: Option<u64>,
    difficulty: U256,
    #[serde(default)]
    total_difficulty: Option<U256>,
    extra_data: Bytes,
    #[serde(with = "crate::serde::u64")]
    size: u64,
    #[serde(with = "crate::serde::u64")]
    gas_limit: u64,
    #[serde(with = "crate::serde::u64")]
    gas_used: u64,
    #[serde(with = "crate::serde::u64")]
    timestamp: u64,
    #[serde(default)]
    transactions: Vec<TransactionT>,
    #[serde(default)]
    uncles: Vec<String>,
}

/// Transaction-list element types that can be assembled into
/// [`BlockTransactions`].
pub(crate) trait IntoBlockTransactions: DeserializeOwned {
    fn into_block_transactions(transactions: Vec<Self>) -> BlockTransactions;
}

impl IntoBlockTransactions for String {
    fn into_block_transactions(transactions: Vec<Self>) -> BlockTransactions {
        BlockTransactions::Hashes(transactions)
    }
}

impl IntoBlockTransactions for Transaction {
    fn into_block_transactions(transactions: Vec<Self>) -> BlockTransactions {
        BlockTransactions::Full(transactions)
    }
}

impl<TransactionT: IntoBlockTransactions> From<RawBlock<TransactionT>> for Block {
    fn from(value: RawBlock<TransactionT>) -> Self {
        Block {
            hash: value.hash,
            parent_hash: value.parent_hash,
            nonce: value.nonce,
            sha3_uncles: value.sha3_uncles,
            logs_bloom: value.logs_bloom,
            transactions_root: value.transactions_root,
            state_root: value.state_root,
            receipts_root: value.receipts_root,
            miner: value.miner,
            number: value.number,
            difficulty: value.difficulty,
            total_difficulty: value.total_difficulty,
            extra_data: value.extra_data,
            size: value.size,
            gas_limit: value.gas_limit,
            gas_used: value.gas_used,
            timestamp: value.timestamp,
            transactions: TransactionT::into_block_transactions(value.transactions),
            uncles: value.uncles,
        }
    }
}
