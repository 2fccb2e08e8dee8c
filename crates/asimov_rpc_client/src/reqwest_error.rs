use std::fmt;

/// A wrapper for `reqwest::Error` whose message redacts the endpoint URL.
/// Node URLs routinely embed API keys, so they must not leak into error
/// messages or logs.
#[derive(Debug, thiserror::Error)]
pub struct ReqwestError(#[from] reqwest::Error);

impl fmt::Display for ReqwestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(url) = self.0.url() {
            let redacted = self.0.to_string().replace(url.as_str(), "<endpoint>");
            write!(f, "{redacted}")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<ReqwestError> for reqwest::Error {
    fn from(value: ReqwestError) -> Self {
        value.0
    }
}
