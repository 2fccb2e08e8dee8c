use alloy_primitives::Bytes;
use serde::{Deserialize, Serialize};

use crate::{
    block_spec::BlockSpec, filter::LogFilterOptions, transaction_request::TransactionRequest,
};

/// For invoking a JSON-RPC method on a remote Asimov node.
///
/// Serialization produces the `method` and `params` fields of the request
/// envelope; the variant renames are the exact wire names the node accepts,
/// and the field order of each variant is the node's parameter order.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "method", content = "params")]
pub enum RequestMethod {
    /// # `web3_clientVersion`
    #[serde(rename = "web3_clientVersion", with = "crate::serde::empty_params")]
    ClientVersion(()),
    /// # `web3_sha3`
    ///
    /// Keccak-256 of the given data, computed by the node.
    #[serde(rename = "web3_sha3", with = "crate::serde::sequence")]
    Sha3(Bytes),
    /// # `net_version`
    #[serde(rename = "net_version", with = "crate::serde::empty_params")]
    NetVersion(()),
    /// # `net_listening`
    #[serde(rename = "net_listening", with = "crate::serde::empty_params")]
    NetListening(()),
    /// # `net_peerCount`
    #[serde(rename = "net_peerCount", with = "crate::serde::empty_params")]
    NetPeerCount(()),
    /// # `flow_protocolVersion`
    #[serde(rename = "flow_protocolVersion", with = "crate::serde::empty_params")]
    ProtocolVersion(()),
    /// # `flow_syncing`
    #[serde(rename = "flow_syncing", with = "crate::serde::empty_params")]
    Syncing(()),
    /// # `flow_coinbase`
    #[serde(rename = "flow_coinbase", with = "crate::serde::empty_params")]
    Coinbase(()),
    /// # `flow_mining`
    #[serde(rename = "flow_mining", with = "crate::serde::empty_params")]
    Mining(()),
    /// # `flow_hashrate`
    #[serde(rename = "flow_hashrate", with = "crate::serde::empty_params")]
    Hashrate(()),
    /// # `flow_gasPrice`
    #[serde(rename = "flow_gasPrice", with = "crate::serde::empty_params")]
    GasPrice(()),
    /// # `flow_accounts`
    #[serde(rename = "flow_accounts", with = "crate::serde::empty_params")]
    Accounts(()),
    /// # `flow_blockNumber`
    #[serde(rename = "flow_blockNumber", with = "crate::serde::empty_params")]
    BlockNumber(()),
    /// # `flow_getBalance`
    #[serde(rename = "flow_getBalance")]
    GetBalance(String, BlockSpec),
    /// # `flow_getStorageAt`
    #[serde(rename = "flow_getStorageAt")]
    GetStorageAt(
        String,
        /// the storage position, as a quantity
        #[serde(with = "crate::serde::u64")]
        u64,
        BlockSpec,
    ),
    /// # `flow_getTransactionCount`
    #[serde(rename = "flow_getTransactionCount")]
    GetTransactionCount(String, BlockSpec),
    /// # `flow_getBlockTransactionCountByHash`
    #[serde(
        rename = "flow_getBlockTransactionCountByHash",
        with = "crate::serde::sequence"
    )]
    GetBlockTransactionCountByHash(String),
    /// # `flow_getBlockTransactionCountByNumber`
    #[serde(
        rename = "flow_getBlockTransactionCountByNumber",
        with = "crate::serde::sequence"
    )]
    GetBlockTransactionCountByNumber(BlockSpec),
    /// # `flow_getUncleCountByBlockHash`
    #[serde(
        rename = "flow_getUncleCountByBlockHash",
        with = "crate::serde::sequence"
    )]
    GetUncleCountByBlockHash(String),
    /// # `flow_getUncleCountByBlockNumber`
    #[serde(
        rename = "flow_getUncleCountByBlockNumber",
        with = "crate::serde::sequence"
    )]
    GetUncleCountByBlockNumber(BlockSpec),
    /// # `flow_getCode`
    #[serde(rename = "flow_getCode")]
    GetCode(String, BlockSpec),
    /// # `flow_sign`
    ///
    /// Chain-specific signature over the given data, by an unlocked account.
    #[serde(rename = "flow_sign")]
    Sign(String, Bytes),
    /// # `flow_sendTransaction`
    #[serde(rename = "flow_sendTransaction", with = "crate::serde::sequence")]
    SendTransaction(TransactionRequest),
    /// # `flow_sendRawTransaction`
    #[serde(rename = "flow_sendRawTransaction", with = "crate::serde::sequence")]
    SendRawTransaction(Bytes),
    /// # `flow_call`
    #[serde(rename = "flow_call")]
    Call(TransactionRequest, BlockSpec),
    /// # `flow_estimateGas`
    #[serde(rename = "flow_estimateGas", with = "crate::serde::sequence")]
    EstimateGas(TransactionRequest),
    /// # `flow_getBlockByHash`
    ///
    /// The second parameter requests full transaction records instead of
    /// hashes.
    #[serde(rename = "flow_getBlockByHash")]
    GetBlockByHash(String, bool),
    /// # `flow_getBlockByNumber`
    #[serde(rename = "flow_getBlockByNumber")]
    GetBlockByNumber(BlockSpec, bool),
    /// # `flow_getTransactionByHash`
    #[serde(rename = "flow_getTransactionByHash", with = "crate::serde::sequence")]
    GetTransactionByHash(String),
    /// # `flow_getTransactionByBlockHashAndIndex`
    #[serde(rename = "flow_getTransactionByBlockHashAndIndex")]
    GetTransactionByBlockHashAndIndex(
        String,
        /// the transaction index, as a quantity
        #[serde(with = "crate::serde::u64")]
        u64,
    ),
    /// # `flow_getTransactionByBlockNumberAndIndex`
    #[serde(rename = "flow_getTransactionByBlockNumberAndIndex")]
    GetTransactionByBlockNumberAndIndex(
        BlockSpec,
        /// the transaction index, as a quantity
        #[serde(with = "crate::serde::u64")]
        u64,
    ),
    /// # `flow_getTransactionReceipt`
    #[serde(rename = "flow_getTransactionReceipt", with = "crate::serde::sequence")]
    GetTransactionReceipt(String),
    /// # `flow_getCompilers`
    ///
    /// Deprecated on current nodes; exposed as a pass-through.
    #[serde(rename = "flow_getCompilers", with = "crate::serde::empty_params")]
    GetCompilers(()),
    /// # `flow_newFilter`
    #[serde(rename = "flow_newFilter", with = "crate::serde::sequence")]
    NewFilter(LogFilterOptions),
    /// # `flow_newBlockFilter`
    #[serde(rename = "flow_newBlockFilter", with = "crate::serde::empty_params")]
    NewBlockFilter(()),
    /// # `flow_newPendingTransactionFilter`
    #[serde(
        rename = "flow_newPendingTransactionFilter",
        with = "crate::serde::empty_params"
    )]
    NewPendingTransactionFilter(()),
    /// # `flow_uninstallFilter`
    #[serde(rename = "flow_uninstallFilter", with = "crate::serde::sequence")]
    UninstallFilter(String),
    /// # `flow_getFilterChanges`
    #[serde(rename = "flow_getFilterChanges", with = "crate::serde::sequence")]
    GetFilterChanges(String),
    /// # `flow_getFilterLogs`
    #[serde(rename = "flow_getFilterLogs", with = "crate::serde::sequence")]
    GetFilterLogs(String),
    /// # `flow_getLogs`
    #[serde(rename = "flow_getLogs", with = "crate::serde::sequence")]
    GetLogs(LogFilterOptions),
}

impl asimov_rpc_client::RpcMethod for RequestMethod {
    fn name(&self) -> &'static str {
        match self {
            RequestMethod::ClientVersion(_) => "web3_clientVersion",
            RequestMethod::Sha3(_) => "web3_sha3",
            RequestMethod::NetVersion(_) => "net_version",
            RequestMethod::NetListening(_) => "net_listening",
            RequestMethod::NetPeerCount(_) => "net_peerCount",
            RequestMethod::ProtocolVersion(_) => "flow_protocolVersion",
            RequestMethod::Syncing(_) => "flow_syncing",
            RequestMethod::Coinbase(_) => "flow_coinbase",
            RequestMethod::Mining(_) => "flow_mining",
            RequestMethod::Hashrate(_) => "flow_hashrate",
            RequestMethod::GasPrice(_) => "flow_gasPrice",
            RequestMethod::Accounts(_) => "flow_accounts",
            RequestMethod::BlockNumber(_) => "flow_blockNumber",
            RequestMethod::GetBalance(..) => "flow_getBalance",
            RequestMethod::GetStorageAt(..) => "flow_getStorageAt",
            RequestMethod::GetTransactionCount(..) => "flow_getTransactionCount",
            RequestMethod::GetBlockTransactionCountByHash(_) => {
                "flow_getBlockTransactionCountByHash"
            }
            RequestMethod::GetBlockTransactionCountByNumber(_) => {
                "flow_getBlockTransactionCountByNumber"
            }
            RequestMethod::GetUncleCountByBlockHash(_) => "flow_getUncleCountByBlockHash",
            RequestMethod::GetUncleCountByBlockNumber(_) => "flow_getUncleCountByBlockNumber",
            RequestMethod::GetCode(..) => "flow_getCode",
            RequestMethod::Sign(..) => "flow_sign",
            RequestMethod::SendTransaction(_) => "flow_sendTransaction",
            RequestMethod::SendRawTransaction(_) => "flow_sendRawTransaction",
            RequestMethod::Call(..) => "flow_call",
            RequestMethod::EstimateGas(_) => "flow_estimateGas",
            RequestMethod::GetBlockByHash(..) => "flow_getBlockByHash",
            RequestMethod::GetBlockByNumber(..) => "flow_getBlockByNumber",
            RequestMethod::GetTransactionByHash(_) => "flow_getTransactionByHash",
            RequestMethod::GetTransactionByBlockHashAndIndex(..) => {
                "flow_getTransactionByBlockHashAndIndex"
            }
            RequestMethod::GetTransactionByBlockNumberAndIndex(..) => {
                "flow_getTransactionByBlockNumberAndIndex"
            }
            RequestMethod::GetTransactionReceipt(_) => "flow_getTransactionReceipt",
            RequestMethod::GetCompilers(_) => "flow_getCompilers",
            RequestMethod::NewFilter(_) => "flow_newFilter",
            RequestMethod::NewBlockFilter(_) => "flow_newBlockFilter",
            RequestMethod::NewPendingTransactionFilter(_) => "flow_newPendingTransactionFilter",
            RequestMethod::UninstallFilter(_) => "flow_uninstallFilter",
            RequestMethod::GetFilterChanges(_) => "flow_getFilterChanges",
            RequestMethod::GetFilterLogs(_) => "flow_getFilterLogs",
            RequestMethod::GetLogs(_) => "flow_getLogs",
        }
    }
}
