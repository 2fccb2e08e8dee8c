#![warn(missing_docs)]

//! Generic JSON-RPC client used by the Asimov typed client

mod client;
mod reqwest_error;

/// Types specific to JSON-RPC
pub mod jsonrpc;

pub use reqwest::header::{self, HeaderMap};

pub use self::{
    client::{RpcClient, RpcClientError, RpcMethod},
    reqwest_error::ReqwestError,
};
