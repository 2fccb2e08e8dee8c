#![warn(missing_docs)]

//! Typed client for the JSON-RPC interface of an Asimov node

/// Types for the blocks returned by the block retrieval methods
pub mod block;
/// Block identifiers: concrete numbers and symbolic tags
pub mod block_spec;
/// The typed client
pub mod client;
/// Matchers for the filter and log query methods
pub mod filter;
/// Types for contract logs
pub mod log;
pub mod quantity;
/// Types for transaction receipts
pub mod receipt;
mod request_methods;
pub mod serde;
/// The node's sync state
pub mod sync;
/// Types for the transactions returned by the transaction lookup methods
pub mod transaction;
/// Input for the methods that take a transaction object
pub mod transaction_request;

use alloy_primitives::U256;

pub use asimov_rpc_client::{HeaderMap, ReqwestError, RpcClientError, header, jsonrpc};

pub use self::{
    block::{Block, BlockTransactions},
    block_spec::{BlockSpec, BlockTag},
    client::AsimovRpcClient,
    filter::{LogFilterOptions, OneOrMore},
    log::Log,
    quantity::FormatError,
    receipt::TransactionReceipt,
    request_methods::RequestMethod,
    sync::{SyncProgress, SyncStatus},
    transaction::Transaction,
    transaction_request::TransactionRequest,
};

/// One ASIM, the native coin, expressed in xin, its smallest unit.
pub const XIN_PER_ASIM: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);
