use alloy_primitives::U256;
use asimov_rpc::{
    AsimovRpcClient, BlockSpec, BlockTransactions, LogFilterOptions, RpcClientError, SyncProgress,
    SyncStatus, TransactionRequest,
};
use mockito::Matcher;

const ADDRESS: &str = "0x6685cbda7fa8e1a5224a30c304f8b1ecfdf5785ac5";
const BLOCK_HASH: &str = "0x9b83c12c69edb74f6c8dd5d052765c1adf940e320bd1291696e6fa07829eee71";
const TX_HASH: &str = "0xc008e9f9bb92057dd0035496fbf4fb54f66b4b18b370928e46d6603933054d5a";

fn client(server: &mockito::ServerGuard) -> AsimovRpcClient {
    AsimovRpcClient::new(&server.url(), None).expect("url ok")
}

fn result_body(result: serde_json::Value) -> String {
    serde_json::json!({"jsonrpc": "2.0", "id": 0, "result": result}).to_string()
}

fn block_fixture(transactions: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "hash": BLOCK_HASH,
        "parentHash": "0xb903239f8543d04b5dc1ba6579132b143087c68db1b2168786408fcbce568238",
        "nonce": "0x0000000000000042",
        "sha3Uncles": "0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347",
        "logsBloom": "0x00",
        "transactionsRoot": "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421",
        "stateRoot": "0xd5855eb08b3387c0af375e9cdb6acfc05eb8f519e419b874b6ff2ffda7ed1dff",
        "receiptsRoot": "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421",
        "miner": "0x66bb7aa3c43d0f46bdd6a319d998c3a2cfbd9a382b",
        "number": "0x1b4",
        "difficulty": "0x027f07",
        "totalDifficulty": "0x027f07",
        "extraData": "0x",
        "size": "0x27f07",
        "gasLimit": "0x9f759",
        "gasUsed": "0x9f759",
        "timestamp": "0x54e34e8e",
        "transactions": transactions,
        "uncles": []
    })
}

#[tokio::test]
async fn http_error_status() {
    const STATUS_CODE: u16 = 400;

    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .with_status(STATUS_CODE.into())
        .with_header("content-type", "text/plain")
        .create_async()
        .await;

    let error = client(&server)
        .get_transaction_by_hash(TX_HASH)
        .await
        .expect_err("should have failed due to a HTTP status error");

    if let RpcClientError::HttpStatus(error) = error {
        assert_eq!(
            reqwest::Error::from(error).status(),
            Some(reqwest::StatusCode::from_u16(STATUS_CODE).unwrap())
        );
    } else {
        unreachable!("Invalid error: {error}");
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn node_error_is_surfaced_verbatim() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/")
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "jsonrpc": "2.0",
                "id": 0,
                "error": {"code": -32000, "message": "x"},
            })
            .to_string(),
        )
        .create_async()
        .await;

    let error = client(&server)
        .get_balance(ADDRESS, BlockSpec::latest())
        .await
        .expect_err("should have failed with the node's error");

    match error {
        RpcClientError::JsonRpcError { error, .. } => {
            assert_eq!(error.code, -32000);
            assert_eq!(error.message, "x");
        }
        error => unreachable!("Invalid error: {error}"),
    }
}

#[tokio::test]
async fn get_balance_decodes_quantity_and_sends_exact_params() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "jsonrpc": "2.0",
            "method": "flow_getBalance",
            "params": [ADDRESS, "latest"],
        })))
        .with_header("content-type", "application/json")
        .with_body(result_body(serde_json::json!("0xde0b6b3a7640000")))
        .create_async()
        .await;

    let balance = client(&server)
        .get_balance(ADDRESS, BlockSpec::latest())
        .await
        .expect("should have succeeded");

    assert_eq!(balance, U256::from(1_000_000_000_000_000_000u64));
    assert_eq!(balance, asimov_rpc::XIN_PER_ASIM);

    mock.assert_async().await;
}

#[tokio::test]
async fn get_block_by_hash_none() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/")
        .with_header("content-type", "application/json")
        .with_body(result_body(serde_json::Value::Null))
        .create_async()
        .await;

    let block = client(&server)
        .get_block_by_hash(BLOCK_HASH, false)
        .await
        .expect("a null result is not an error");

    assert!(block.is_none());
}

#[tokio::test]
async fn get_block_by_hash_with_hashes() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "method": "flow_getBlockByHash",
            "params": [BLOCK_HASH, false],
        })))
        .with_header("content-type", "application/json")
        .with_body(result_body(block_fixture(serde_json::json!([TX_HASH]))))
        .create_async()
        .await;

    let block = client(&server)
        .get_block_by_hash(BLOCK_HASH, false)
        .await
        .expect("should have succeeded")
        .expect("block must exist");

    assert_eq!(block.hash.as_deref(), Some(BLOCK_HASH));
    assert_eq!(block.number, Some(0x1b4));
    match &block.transactions {
        BlockTransactions::Hashes(hashes) => assert_eq!(hashes, &[TX_HASH.to_string()]),
        BlockTransactions::Full(_) => panic!("requested transaction hashes"),
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn get_block_by_hash_with_full_transactions() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "method": "flow_getBlockByHash",
            "params": [BLOCK_HASH, true],
        })))
        .with_header("content-type", "application/json")
        .with_body(result_body(block_fixture(serde_json::json!([{
            "hash": TX_HASH,
            "nonce": "0x653b",
            "blockHash": BLOCK_HASH,
            "blockNumber": "0x1b4",
            "transactionIndex": "0x0",
            "from": ADDRESS,
            "to": "0x63d4f1b5f6f4ebe1b0e2b7f8bb1a0366fd64d27b1a",
            "value": "0xde0b6b3a7640000",
            "gas": "0x30d40",
            "gasPrice": "0x1e449a99b8",
            "input": "0x"
        }]))))
        .create_async()
        .await;

    let block = client(&server)
        .get_block_by_hash(BLOCK_HASH, true)
        .await
        .expect("should have succeeded")
        .expect("block must exist");

    match &block.transactions {
        BlockTransactions::Full(transactions) => {
            assert_eq!(transactions.len(), 1);
            assert_eq!(transactions[0].hash, TX_HASH);
            assert_eq!(transactions[0].nonce, 0x653b);
        }
        BlockTransactions::Hashes(_) => panic!("requested full transaction records"),
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn get_block_by_number_sends_quantity() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "method": "flow_getBlockByNumber",
            "params": ["0x1b4", false],
        })))
        .with_header("content-type", "application/json")
        .with_body(result_body(block_fixture(serde_json::json!([]))))
        .create_async()
        .await;

    let block = client(&server)
        .get_block_by_number(BlockSpec::Number(0x1b4), false)
        .await
        .expect("should have succeeded")
        .expect("block must exist");

    assert!(block.transactions.is_empty());
    assert!(matches!(block.transactions, BlockTransactions::Hashes(_)));

    mock.assert_async().await;
}

#[tokio::test]
async fn syncing_false() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/")
        .with_header("content-type", "application/json")
        .with_body(result_body(serde_json::json!(false)))
        .create_async()
        .await;

    let status = client(&server)
        .syncing()
        .await
        .expect("should have succeeded");

    assert_eq!(status, SyncStatus::NotSyncing);
}

#[tokio::test]
async fn syncing_in_progress() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/")
        .with_header("content-type", "application/json")
        .with_body(result_body(serde_json::json!({
            "startingBlock": "0x0",
            "currentBlock": "0x5",
            "highestBlock": "0xa",
        })))
        .create_async()
        .await;

    let status = client(&server)
        .syncing()
        .await
        .expect("should have succeeded");

    assert_eq!(
        status,
        SyncStatus::Syncing(SyncProgress {
            starting_block: 0,
            current_block: 5,
            highest_block: 10,
        })
    );
}

#[tokio::test]
async fn block_number_decodes_quantity() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "method": "flow_blockNumber",
            "params": [],
        })))
        .with_header("content-type", "application/json")
        .with_body(result_body(serde_json::json!("0x4b7")))
        .create_async()
        .await;

    let number = client(&server)
        .block_number()
        .await
        .expect("should have succeeded");

    assert_eq!(number, 1207);
}

#[tokio::test]
async fn send_transaction_sends_the_request_object() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "method": "flow_sendTransaction",
            "params": [{
                "from": ADDRESS,
                "to": "0x63d4f1b5f6f4ebe1b0e2b7f8bb1a0366fd64d27b1a",
                "value": "0xde0b6b3a7640000",
            }],
        })))
        .with_header("content-type", "application/json")
        .with_body(result_body(serde_json::json!(TX_HASH)))
        .create_async()
        .await;

    let hash = client(&server)
        .send_transaction(TransactionRequest {
            from: ADDRESS.to_string(),
            to: Some("0x63d4f1b5f6f4ebe1b0e2b7f8bb1a0366fd64d27b1a".to_string()),
            value: Some(U256::from(1_000_000_000_000_000_000u64)),
            ..TransactionRequest::default()
        })
        .await
        .expect("should have succeeded");

    assert_eq!(hash, TX_HASH);

    mock.assert_async().await;
}

#[tokio::test]
async fn get_transaction_receipt_some() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/")
        .with_header("content-type", "application/json")
        .with_body(result_body(serde_json::json!({
            "transactionHash": TX_HASH,
            "transactionIndex": "0x88",
            "blockHash": BLOCK_HASH,
            "blockNumber": "0xa74fde",
            "cumulativeGasUsed": "0x56c81b",
            "gasUsed": "0xa0f9",
            "contractAddress": null,
            "logs": [{
                "removed": false,
                "logIndex": "0x0",
                "transactionIndex": "0x88",
                "transactionHash": TX_HASH,
                "blockHash": BLOCK_HASH,
                "blockNumber": "0xa74fde",
                "address": "0x63d4f1b5f6f4ebe1b0e2b7f8bb1a0366fd64d27b1a",
                "data": "0x",
                "topics": []
            }],
            "logsBloom": "0x00000000000000000000000000000000",
            "status": "0x1"
        })))
        .create_async()
        .await;

    let receipt = client(&server)
        .get_transaction_receipt(TX_HASH)
        .await
        .expect("should have succeeded")
        .expect("receipt must exist");

    assert_eq!(receipt.block_number, 0xa74fde);
    assert_eq!(receipt.logs.len(), 1);
    assert_eq!(receipt.succeeded(), Some(true));
}

#[tokio::test]
async fn get_transaction_receipt_none_while_pending() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/")
        .with_header("content-type", "application/json")
        .with_body(result_body(serde_json::Value::Null))
        .create_async()
        .await;

    let receipt = client(&server)
        .get_transaction_receipt(TX_HASH)
        .await
        .expect("a null result is not an error");

    assert!(receipt.is_none());
}

#[tokio::test]
async fn filter_lifecycle() {
    let mut server = mockito::Server::new_async().await;

    let new_filter = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "method": "flow_newFilter",
            "params": [{"fromBlock": "0x1", "toBlock": "latest"}],
        })))
        .with_header("content-type", "application/json")
        .with_body(result_body(serde_json::json!("0x1")))
        .create_async()
        .await;

    let changes = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "method": "flow_getFilterChanges",
            "params": ["0x1"],
        })))
        .with_header("content-type", "application/json")
        .with_body(result_body(serde_json::json!([{
            "removed": false,
            "logIndex": "0x1",
            "transactionIndex": "0x0",
            "transactionHash": TX_HASH,
            "blockHash": BLOCK_HASH,
            "blockNumber": "0x1b4",
            "address": "0x63d4f1b5f6f4ebe1b0e2b7f8bb1a0366fd64d27b1a",
            "data": "0x0000000000000000000000000000000000000000000000000000000000000000",
            "topics": [
                "0x59ebeb90bc63057b6515673c3ecf9438e5058bca0f92585014eced636878c9a5"
            ]
        }])))
        .create_async()
        .await;

    let uninstall = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "method": "flow_uninstallFilter",
            "params": ["0x1"],
        })))
        .with_header("content-type", "application/json")
        .with_body(result_body(serde_json::json!(true)))
        .create_async()
        .await;

    let client = client(&server);

    let filter_id = client
        .new_filter(LogFilterOptions {
            from_block: Some(BlockSpec::Number(1)),
            to_block: Some(BlockSpec::latest()),
            ..LogFilterOptions::default()
        })
        .await
        .expect("should have succeeded");
    assert_eq!(filter_id, "0x1");

    let logs = client
        .get_filter_changes(&filter_id)
        .await
        .expect("should have succeeded");
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].block_number, Some(0x1b4));

    let removed = client
        .uninstall_filter(&filter_id)
        .await
        .expect("should have succeeded");
    assert!(removed);

    new_filter.assert_async().await;
    changes.assert_async().await;
    uninstall.assert_async().await;
}

#[tokio::test]
async fn get_compilers_passes_through() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "method": "flow_getCompilers",
            "params": [],
        })))
        .with_header("content-type", "application/json")
        .with_body(result_body(serde_json::json!([])))
        .create_async()
        .await;

    let compilers = client(&server)
        .get_compilers()
        .await
        .expect("should have succeeded");

    assert!(compilers.is_empty());
}

#[tokio::test]
async fn decode_mismatch_is_not_a_zeroed_result() {
    let mut server = mockito::Server::new_async().await;

    // A balance query must decode a quantity; an object is a shape mismatch.
    let _mock = server
        .mock("POST", "/")
        .with_header("content-type", "application/json")
        .with_body(result_body(serde_json::json!({"unexpected": true})))
        .create_async()
        .await;

    let error = client(&server)
        .get_balance(ADDRESS, BlockSpec::latest())
        .await
        .expect_err("a shape mismatch must surface as an error");

    assert!(matches!(error, RpcClientError::InvalidResponse { .. }));
}
