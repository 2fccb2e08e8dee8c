use alloy_primitives::{Bytes, U256, U64};
use asimov_rpc_client::{HeaderMap, RpcClient, RpcClientError};

use crate::{
    block::{Block, IntoBlockTransactions, RawBlock},
    block_spec::BlockSpec,
    filter::LogFilterOptions,
    log::Log,
    receipt::TransactionReceipt,
    request_methods::RequestMethod,
    sync::SyncStatus,
    transaction::Transaction,
    transaction_request::TransactionRequest,
};

/// A client for executing typed RPC methods on a remote Asimov node.
///
/// One operation per remote method; every operation performs a single
/// request/response round trip and decodes the node's result into its
/// record shape. Lookup operations that the node answers with `null` for an
/// unknown identifier return `None`.
#[derive(Debug)]
pub struct AsimovRpcClient {
    inner: RpcClient<RequestMethod>,
}

impl AsimovRpcClient {
    /// Creates a new instance, given a remote node URL.
    pub fn new(url: &str, extra_headers: Option<HeaderMap>) -> Result<Self, RpcClientError> {
        let inner = RpcClient::new(url, extra_headers)?;
        Ok(Self { inner })
    }

    /// Creates a new instance using a caller-provided HTTP client.
    pub fn with_http_client(
        url: &str,
        http_client: reqwest::Client,
    ) -> Result<Self, RpcClientError> {
        let inner = RpcClient::with_http_client(url, http_client)?;
        Ok(Self { inner })
    }

    /// Enables or disables verbose request/response logging.
    #[must_use]
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.inner = self.inner.with_debug(enabled);
        self
    }

    /// Returns the URL of the remote node.
    pub fn url(&self) -> &url::Url {
        self.inner.url()
    }

    /// Calls `web3_clientVersion` and returns the node's client version.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn client_version(&self) -> Result<String, RpcClientError> {
        self.inner.call(RequestMethod::ClientVersion(())).await
    }

    /// Calls `web3_sha3` and returns the Keccak-256 hash of the given data,
    /// as computed by the node.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn sha3(&self, data: Bytes) -> Result<String, RpcClientError> {
        self.inner.call(RequestMethod::Sha3(data)).await
    }

    /// Calls `net_version` and returns the network id.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn network_version(&self) -> Result<String, RpcClientError> {
        self.inner.call(RequestMethod::NetVersion(())).await
    }

    /// Calls `net_listening`. Whether the node accepts network connections.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn is_listening(&self) -> Result<bool, RpcClientError> {
        self.inner.call(RequestMethod::NetListening(())).await
    }

    /// Calls `net_peerCount` and returns the number of connected peers.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn peer_count(&self) -> Result<u64, RpcClientError> {
        self.inner
            .call::<U64>(RequestMethod::NetPeerCount(()))
            .await
            .map(|count| count.as_limbs()[0])
    }

    /// Calls `flow_protocolVersion` and returns the protocol version.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn protocol_version(&self) -> Result<String, RpcClientError> {
        self.inner.call(RequestMethod::ProtocolVersion(())).await
    }

    /// Calls `flow_syncing` and returns the node's sync state.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn syncing(&self) -> Result<SyncStatus, RpcClientError> {
        self.inner.call(RequestMethod::Syncing(())).await
    }

    /// Calls `flow_coinbase` and returns the node's coinbase address.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn coinbase(&self) -> Result<String, RpcClientError> {
        self.inner.call(RequestMethod::Coinbase(())).await
    }

    /// Calls `flow_mining`. Whether the node is mining new blocks.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn is_mining(&self) -> Result<bool, RpcClientError> {
        self.inner.call(RequestMethod::Mining(())).await
    }

    /// Calls `flow_hashrate` and returns the number of hashes per second the
    /// node is mining with.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn hashrate(&self) -> Result<u64, RpcClientError> {
        self.inner
            .call::<U64>(RequestMethod::Hashrate(()))
            .await
            .map(|rate| rate.as_limbs()[0])
    }

    /// Calls `flow_gasPrice` and returns the current price per gas, in xin.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn gas_price(&self) -> Result<U256, RpcClientError> {
        self.inner.call(RequestMethod::GasPrice(())).await
    }

    /// Calls `flow_accounts` and returns the addresses owned by the node.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn accounts(&self) -> Result<Vec<String>, RpcClientError> {
        self.inner.call(RequestMethod::Accounts(())).await
    }

    /// Calls `flow_blockNumber` and returns the number of the most recent
    /// block.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn block_number(&self) -> Result<u64, RpcClientError> {
        self.inner
            .call::<U64>(RequestMethod::BlockNumber(()))
            .await
            .map(|number| number.as_limbs()[0])
    }

    /// Calls `flow_getBalance` and returns the balance of the account, in
    /// xin.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_balance(
        &self,
        address: &str,
        block: BlockSpec,
    ) -> Result<U256, RpcClientError> {
        self.inner
            .call(RequestMethod::GetBalance(address.to_string(), block))
            .await
    }

    /// Calls `flow_getStorageAt` and returns the word stored at the given
    /// position.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_storage_at(
        &self,
        address: &str,
        position: u64,
        block: BlockSpec,
    ) -> Result<String, RpcClientError> {
        self.inner
            .call(RequestMethod::GetStorageAt(
                address.to_string(),
                position,
                block,
            ))
            .await
    }

    /// Calls `flow_getTransactionCount` and returns the number of
    /// transactions sent from the address.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_transaction_count(
        &self,
        address: &str,
        block: BlockSpec,
    ) -> Result<u64, RpcClientError> {
        self.inner
            .call::<U64>(RequestMethod::GetTransactionCount(
                address.to_string(),
                block,
            ))
            .await
            .map(|count| count.as_limbs()[0])
    }

    /// Calls `flow_getBlockTransactionCountByHash` and returns the number of
    /// transactions in the block.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_block_transaction_count_by_hash(
        &self,
        hash: &str,
    ) -> Result<u64, RpcClientError> {
        self.inner
            .call::<U64>(RequestMethod::GetBlockTransactionCountByHash(
                hash.to_string(),
            ))
            .await
            .map(|count| count.as_limbs()[0])
    }

    /// Calls `flow_getBlockTransactionCountByNumber` and returns the number
    /// of transactions in the block.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_block_transaction_count_by_number(
        &self,
        block: BlockSpec,
    ) -> Result<u64, RpcClientError> {
        self.inner
            .call::<U64>(RequestMethod::GetBlockTransactionCountByNumber(block))
            .await
            .map(|count| count.as_limbs()[0])
    }

    /// Calls `flow_getUncleCountByBlockHash` and returns the number of
    /// uncles in the block.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_uncle_count_by_block_hash(&self, hash: &str) -> Result<u64, RpcClientError> {
        self.inner
            .call::<U64>(RequestMethod::GetUncleCountByBlockHash(hash.to_string()))
            .await
            .map(|count| count.as_limbs()[0])
    }

    /// Calls `flow_getUncleCountByBlockNumber` and returns the number of
    /// uncles in the block.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_uncle_count_by_block_number(
        &self,
        block: BlockSpec,
    ) -> Result<u64, RpcClientError> {
        self.inner
            .call::<U64>(RequestMethod::GetUncleCountByBlockNumber(block))
            .await
            .map(|count| count.as_limbs()[0])
    }

    /// Calls `flow_getCode` and returns the code at the given address.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_code(&self, address: &str, block: BlockSpec) -> Result<Bytes, RpcClientError> {
        self.inner
            .call(RequestMethod::GetCode(address.to_string(), block))
            .await
    }

    /// Calls `flow_sign` and returns the signature over the given data.
    ///
    /// The address must be unlocked on the node.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn sign(&self, address: &str, data: Bytes) -> Result<String, RpcClientError> {
        self.inner
            .call(RequestMethod::Sign(address.to_string(), data))
            .await
    }

    /// Calls `flow_sendTransaction` and returns the hash of the submitted
    /// transaction.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn send_transaction(
        &self,
        transaction: TransactionRequest,
    ) -> Result<String, RpcClientError> {
        self.inner
            .call(RequestMethod::SendTransaction(transaction))
            .await
    }

    /// Calls `flow_sendRawTransaction` with an already-signed transaction
    /// and returns its hash.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn send_raw_transaction(&self, data: Bytes) -> Result<String, RpcClientError> {
        self.inner
            .call(RequestMethod::SendRawTransaction(data))
            .await
    }

    /// Calls `flow_call`, executing the message call on the node without
    /// creating a transaction, and returns the return data.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn call(
        &self,
        transaction: TransactionRequest,
        block: BlockSpec,
    ) -> Result<Bytes, RpcClientError> {
        self.inner
            .call(RequestMethod::Call(transaction, block))
            .await
    }

    /// Calls `flow_estimateGas` and returns the amount of gas the
    /// transaction would use.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn estimate_gas(
        &self,
        transaction: TransactionRequest,
    ) -> Result<u64, RpcClientError> {
        self.inner
            .call::<U64>(RequestMethod::EstimateGas(transaction))
            .await
            .map(|gas| gas.as_limbs()[0])
    }

    /// Calls `flow_getBlockByHash` and returns the block, or `None` when no
    /// block with that hash exists.
    ///
    /// With `full_transactions` the block embeds full transaction records;
    /// otherwise it carries transaction hashes.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_block_by_hash(
        &self,
        hash: &str,
        full_transactions: bool,
    ) -> Result<Option<Block>, RpcClientError> {
        let method = RequestMethod::GetBlockByHash(hash.to_string(), full_transactions);
        self.get_block(method, full_transactions).await
    }

    /// Calls `flow_getBlockByNumber` and returns the block, or `None` when
    /// no block with that number exists.
    ///
    /// With `full_transactions` the block embeds full transaction records;
    /// otherwise it carries transaction hashes.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_block_by_number(
        &self,
        block: BlockSpec,
        full_transactions: bool,
    ) -> Result<Option<Block>, RpcClientError> {
        let method = RequestMethod::GetBlockByNumber(block, full_transactions);
        self.get_block(method, full_transactions).await
    }

    // The caller's flag, not the payload, decides which wire shape the
    // transaction list decodes through.
    async fn get_block(
        &self,
        method: RequestMethod,
        full_transactions: bool,
    ) -> Result<Option<Block>, RpcClientError> {
        if full_transactions {
            self.get_block_as::<Transaction>(method).await
        } else {
            self.get_block_as::<String>(method).await
        }
    }

    async fn get_block_as<TransactionT: IntoBlockTransactions>(
        &self,
        method: RequestMethod,
    ) -> Result<Option<Block>, RpcClientError> {
        self.inner
            .call::<Option<RawBlock<TransactionT>>>(method)
            .await
            .map(|block| block.map(Block::from))
    }

    /// Calls `flow_getTransactionByHash` and returns the transaction, or
    /// `None` when the hash is unknown.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_transaction_by_hash(
        &self,
        hash: &str,
    ) -> Result<Option<Transaction>, RpcClientError> {
        self.inner
            .call(RequestMethod::GetTransactionByHash(hash.to_string()))
            .await
    }

    /// Calls `flow_getTransactionByBlockHashAndIndex` and returns the
    /// transaction, or `None` when the position is unoccupied.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_transaction_by_block_hash_and_index(
        &self,
        block_hash: &str,
        index: u64,
    ) -> Result<Option<Transaction>, RpcClientError> {
        self.inner
            .call(RequestMethod::GetTransactionByBlockHashAndIndex(
                block_hash.to_string(),
                index,
            ))
            .await
    }

    /// Calls `flow_getTransactionByBlockNumberAndIndex` and returns the
    /// transaction, or `None` when the position is unoccupied.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_transaction_by_block_number_and_index(
        &self,
        block: BlockSpec,
        index: u64,
    ) -> Result<Option<Transaction>, RpcClientError> {
        self.inner
            .call(RequestMethod::GetTransactionByBlockNumberAndIndex(
                block, index,
            ))
            .await
    }

    /// Calls `flow_getTransactionReceipt` and returns the receipt, or `None`
    /// while the transaction is pending or unknown.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_transaction_receipt(
        &self,
        hash: &str,
    ) -> Result<Option<TransactionReceipt>, RpcClientError> {
        self.inner
            .call(RequestMethod::GetTransactionReceipt(hash.to_string()))
            .await
    }

    /// Calls `flow_getCompilers` and returns the compilers available on the
    /// node. Deprecated on current nodes; a node may answer with an empty
    /// list or reject the method.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_compilers(&self) -> Result<Vec<String>, RpcClientError> {
        self.inner.call(RequestMethod::GetCompilers(())).await
    }

    /// Calls `flow_newFilter` and returns the id of the registered log
    /// filter.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn new_filter(&self, options: LogFilterOptions) -> Result<String, RpcClientError> {
        self.inner.call(RequestMethod::NewFilter(options)).await
    }

    /// Calls `flow_newBlockFilter` and returns the id of a filter that
    /// reports new blocks.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn new_block_filter(&self) -> Result<String, RpcClientError> {
        self.inner.call(RequestMethod::NewBlockFilter(())).await
    }

    /// Calls `flow_newPendingTransactionFilter` and returns the id of a
    /// filter that reports new pending transactions.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn new_pending_transaction_filter(&self) -> Result<String, RpcClientError> {
        self.inner
            .call(RequestMethod::NewPendingTransactionFilter(()))
            .await
    }

    /// Calls `flow_uninstallFilter`. Whether the filter existed and was
    /// removed.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn uninstall_filter(&self, filter_id: &str) -> Result<bool, RpcClientError> {
        self.inner
            .call(RequestMethod::UninstallFilter(filter_id.to_string()))
            .await
    }

    /// Calls `flow_getFilterChanges` and returns the logs that occurred
    /// since the last poll of the filter.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_filter_changes(&self, filter_id: &str) -> Result<Vec<Log>, RpcClientError> {
        self.inner
            .call(RequestMethod::GetFilterChanges(filter_id.to_string()))
            .await
    }

    /// Calls `flow_getFilterLogs` and returns all logs matching the filter.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_filter_logs(&self, filter_id: &str) -> Result<Vec<Log>, RpcClientError> {
        self.inner
            .call(RequestMethod::GetFilterLogs(filter_id.to_string()))
            .await
    }

    /// Calls `flow_getLogs` and returns all logs matching the given
    /// options.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_logs(&self, options: LogFilterOptions) -> Result<Vec<Log>, RpcClientError> {
        self.inner.call(RequestMethod::GetLogs(options)).await
    }
}
