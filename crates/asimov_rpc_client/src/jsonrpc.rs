//! Types for the JSON-RPC 2.0 envelope.

use serde::{Deserialize, Serialize};

/// A JSON-RPC 2.0 request.
///
/// The method type is expected to carry both the method name and its
/// parameter list, e.g. an enum tagged with `method`/`params`, such that
/// flattening it yields `"method": ..., "params": [...]`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Request<MethodT> {
    /// JSON-RPC version
    #[serde(rename = "jsonrpc")]
    pub version: Version,
    /// the request id
    pub id: Id,
    /// the method invocation, including its parameters
    #[serde(flatten)]
    pub method: MethodT,
}

/// A JSON-RPC 2.0 response.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Response<T> {
    /// JSON-RPC version
    #[serde(rename = "jsonrpc")]
    pub version: Version,
    /// the request id, echoed by the node
    pub id: Id,
    /// the result payload or the error object
    #[serde(flatten)]
    pub data: ResponseData<T>,
}

/// The payload of a JSON-RPC response: exactly one of `result` or `error`.
// `Error` is listed first so that a malformed response carrying both fields
// resolves to the error.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ResponseData<T> {
    /// the node rejected the call
    Error {
        /// the error object
        error: Error,
    },
    /// the call succeeded
    Success {
        /// the decoded `result` field
        result: T,
    },
}

impl<T> ResponseData<T> {
    /// Converts the response data into a `Result`, surfacing the node's
    /// error verbatim.
    pub fn into_result(self) -> Result<T, Error> {
        match self {
            ResponseData::Success { result } => Ok(result),
            ResponseData::Error { error } => Err(error),
        }
    }
}

/// An error object returned by the remote node.
#[derive(Clone, Debug, PartialEq, thiserror::Error, Deserialize, Serialize)]
#[error("error code {code}: {message}")]
pub struct Error {
    /// the error code
    pub code: i64,
    /// the error message
    pub message: String,
    /// optional additional data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// A JSON-RPC request id.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Id {
    /// a numeric id
    Num(u64),
    /// a string id
    Str(String),
}

/// The JSON-RPC version tag. Only version 2.0 exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum Version {
    /// `"jsonrpc": "2.0"`
    #[serde(rename = "2.0")]
    V2_0,
}
