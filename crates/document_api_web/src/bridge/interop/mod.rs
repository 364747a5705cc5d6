//! Shared `fetch` interop for the document bridge.
//!
//! Routes calls to the target-specific implementation while keeping one API for
//! [`super::documents`].

use document_api::{ApiError, CancellationToken};
use serde_json::Value;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raw HTTP reply: status code plus body text.
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    /// Decodes the body as JSON regardless of status; the API reports failures in the body.
    pub fn into_json(self) -> Result<Value, ApiError> {
        match serde_json::from_str::<Value>(&self.body) {
            Ok(value) => Ok(value),
            Err(_) if !(200..300).contains(&self.status) => {
                Err(ApiError::Transport(format!("http status {}", self.status)))
            }
            Err(err) => Err(ApiError::Decode(err.to_string())),
        }
    }
}

pub async fn post_json(
    url: &str,
    body: &str,
    cancel: Option<&CancellationToken>,
) -> Result<HttpReply, ApiError> {
    if cancel.map(CancellationToken::is_cancelled).unwrap_or(false) {
        return Err(ApiError::Cancelled);
    }
    imp::post_json(url, body, cancel).await
}
