use std::{
    marker::PhantomData,
    sync::atomic::{AtomicU64, Ordering},
};

use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};

use crate::{ReqwestError, jsonrpc};

/// Trait for method types that can be sent by [`RpcClient`].
///
/// Serializing a value must yield the `method` and `params` fields of the
/// request envelope, e.g. via `#[serde(tag = "method", content = "params")]`
/// on an enum with one variant per remote method.
pub trait RpcMethod: Serialize {
    /// Returns the remote name of the method, for diagnostics.
    fn name(&self) -> &'static str;
}

/// Specialized error types
#[derive(Debug, thiserror::Error)]
pub enum RpcClientError {
    /// The message could not be sent to the remote node
    #[error(transparent)]
    FailedToSend(ReqwestError),

    /// The remote node failed to reply with the body of the response
    #[error("The response text was corrupted: {0}.")]
    CorruptedResponse(ReqwestError),

    /// The server returned an error status code.
    #[error("The Http server returned error status code: {0}")]
    HttpStatus(ReqwestError),

    /// The request cannot be serialized as JSON.
    #[error(transparent)]
    InvalidJsonRequest(serde_json::Error),

    /// The server returned an invalid JSON-RPC response.
    #[error(
        "Response '{response}' failed to parse with expected type '{expected_type}', due to error: '{error}'"
    )]
    InvalidResponse {
        /// The response text
        response: String,
        /// The expected type of the response
        expected_type: &'static str,
        /// The parse error
        error: serde_json::Error,
    },

    /// Invalid URL format
    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),

    /// The JSON-RPC call returned an error.
    #[error("{error}. Request: {request}")]
    JsonRpcError {
        /// The JSON-RPC error
        error: jsonrpc::Error,
        /// The request JSON
        request: String,
    },
}

/// A client for executing JSON-RPC methods on a remote node.
///
/// Each call performs exactly one HTTP POST; there is no retry, no caching
/// and no state shared between calls beyond the request id counter, so one
/// instance can be shared freely between concurrent callers.
#[derive(Debug)]
pub struct RpcClient<MethodT: RpcMethod> {
    url: url::Url,
    client: reqwest::Client,
    next_id: AtomicU64,
    debug: bool,
    _phantom: PhantomData<MethodT>,
}

impl<MethodT: RpcMethod> RpcClient<MethodT> {
    /// Create a new instance, given a remote node URL.
    pub fn new(url: &str, extra_headers: Option<HeaderMap>) -> Result<Self, RpcClientError> {
        let mut headers = extra_headers.unwrap_or_default();
        headers.append(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.append(
            header::USER_AGENT,
            HeaderValue::from_str(&format!("asimov-rpc {}", env!("CARGO_PKG_VERSION")))
                .expect("Version string is valid header value"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Default construction nor setting default headers can cause an error");

        Self::with_http_client(url, client)
    }

    /// Create a new instance using a caller-provided HTTP client.
    ///
    /// The client is used as-is: any timeout, proxy or connection pooling
    /// policy it carries applies to every call. The caller is responsible
    /// for sending a JSON content type if the configured client overrides
    /// default headers.
    pub fn with_http_client(
        url: &str,
        http_client: reqwest::Client,
    ) -> Result<Self, RpcClientError> {
        Ok(RpcClient {
            url: url.parse()?,
            client: http_client,
            next_id: AtomicU64::new(0),
            debug: false,
            _phantom: PhantomData,
        })
    }

    /// Enables or disables logging of the method name, request body and
    /// response body of every call, at debug level. Diagnostic only; the
    /// flag has no effect on behavior.
    #[must_use]
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Returns the URL of the remote node.
    pub fn url(&self) -> &url::Url {
        &self.url
    }

    fn parse_response_str<SuccessT: DeserializeOwned>(
        response: String,
    ) -> Result<jsonrpc::Response<SuccessT>, RpcClientError> {
        serde_json::from_str(&response).map_err(|error| RpcClientError::InvalidResponse {
            response,
            expected_type: std::any::type_name::<jsonrpc::Response<SuccessT>>(),
            error,
        })
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
    async fn send_request_body(
        &self,
        request_body: &SerializedRequest,
    ) -> Result<String, RpcClientError> {
        self.client
            .post(self.url.clone())
            .body(request_body.to_json_string())
            .send()
            .await
            .map_err(|err| RpcClientError::FailedToSend(err.into()))?
            .error_for_status()
            .map_err(|err| RpcClientError::HttpStatus(err.into()))?
            .text()
            .await
            .map_err(|err| RpcClientError::CorruptedResponse(err.into()))
    }

    fn serialize_request(&self, method: &MethodT) -> Result<SerializedRequest, RpcClientError> {
        let id = jsonrpc::Id::Num(self.next_id.fetch_add(1, Ordering::Relaxed));

        let request = serde_json::to_value(jsonrpc::Request {
            version: jsonrpc::Version::V2_0,
            id,
            method,
        })
        .map_err(RpcClientError::InvalidJsonRequest)?;

        Ok(SerializedRequest(request))
    }

    /// Calls the provided JSON-RPC method and returns the decoded result.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
    pub async fn call<SuccessT: DeserializeOwned>(
        &self,
        method: MethodT,
    ) -> Result<SuccessT, RpcClientError> {
        let request = self.serialize_request(&method)?;

        let response = self.send_request_body(&request).await?;

        if self.debug {
            log::debug!(
                "{}\nRequest: {}\nResponse: {}",
                method.name(),
                request.to_json_string(),
                response
            );
        }

        Self::parse_response_str(response)?
            .data
            .into_result()
            .map_err(|error| RpcClientError::JsonRpcError {
                error,
                request: request.to_json_string(),
            })
    }
}

#[derive(Clone, Debug)]
#[repr(transparent)]
struct SerializedRequest(serde_json::Value);

impl SerializedRequest {
    fn to_json_string(&self) -> String {
        self.0.to_string()
    }
}
