use alloy_primitives::{Bytes, U256};
use serde::{Deserialize, Serialize};

/// For specifying input to the methods requiring a transaction object:
/// `flow_sendTransaction`, `flow_call` and `flow_estimateGas`.
///
/// Optional fields are omitted from the wire so the node fills in its own
/// defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    /// the address the transaction is sent from
    pub from: String,
    /// the address the transaction is directed to; omitted when creating a
    /// contract
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// gas provided for the transaction execution
    #[serde(
        default,
        with = "crate::serde::optional_u64",
        skip_serializing_if = "Option::is_none"
    )]
    pub gas: Option<u64>,
    /// gas price, in xin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<U256>,
    /// value to transfer, in xin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,
    /// compiled contract code or encoded call data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Bytes>,
    /// nonce override
    #[serde(
        default,
        with = "crate::serde::optional_u64",
        skip_serializing_if = "Option::is_none"
    )]
    pub nonce: Option<u64>,
}
