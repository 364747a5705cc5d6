//! Error taxonomy for document API calls.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback text shown when the API supplies no `error`/`message` field.
pub const SERVICE_UNAVAILABLE: &str = "Service unavailable";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Failure body shape (`{ error?, message? }`) returned by the document API.
pub struct ApiFailureBody {
    /// Short error label.
    #[serde(default)]
    pub error: Option<String>,
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Document API failure.
///
/// Transport failures and application-level rejections are surfaced to the user the same way;
/// the variants only exist so the text shown can pick up the server's `error`/`message` fields.
pub enum ApiError {
    /// Request never produced a response (network failure, CORS, unsupported target).
    #[error("transport failure: {0}")]
    Transport(String),
    /// API answered but signalled failure.
    #[error("request rejected: {}", rejection_text(.error, .message))]
    Rejected {
        /// `error` field of the response body.
        error: Option<String>,
        /// `message` field of the response body.
        message: Option<String>,
    },
    /// Response body could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Request was aborted through its cancellation token.
    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    /// Builds a rejection from a decoded failure body.
    pub fn rejected(body: ApiFailureBody) -> Self {
        Self::Rejected {
            error: non_empty(body.error),
            message: non_empty(body.message),
        }
    }

    /// Toast title: the `error` field, else [`SERVICE_UNAVAILABLE`].
    pub fn title(&self) -> String {
        match self {
            Self::Rejected {
                error: Some(error), ..
            } => error.clone(),
            _ => SERVICE_UNAVAILABLE.to_string(),
        }
    }

    /// Toast description: the `message` field, else [`SERVICE_UNAVAILABLE`].
    pub fn description(&self) -> String {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Rejected { .. } => SERVICE_UNAVAILABLE.to_string(),
            Self::Transport(detail) | Self::Decode(detail) if !detail.trim().is_empty() => {
                detail.clone()
            }
            Self::Cancelled => "Request cancelled".to_string(),
            _ => SERVICE_UNAVAILABLE.to_string(),
        }
    }

    /// Per-file upload error line: `message`, else `error`, else [`SERVICE_UNAVAILABLE`].
    pub fn upload_message(&self) -> String {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Rejected {
                error: Some(error), ..
            } => error.clone(),
            _ => SERVICE_UNAVAILABLE.to_string(),
        }
    }

    /// Returns `true` when the failure was caused by the request's cancellation token.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

fn rejection_text<'a>(error: &'a Option<String>, message: &'a Option<String>) -> &'a str {
    message
        .as_deref()
        .or(error.as_deref())
        .unwrap_or(SERVICE_UNAVAILABLE)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rejection_texts_prefer_server_fields() {
        let err = ApiError::rejected(ApiFailureBody {
            error: Some("Conflict".to_string()),
            message: Some("Folder already exists".to_string()),
        });
        assert_eq!(err.title(), "Conflict");
        assert_eq!(err.description(), "Folder already exists");
        assert_eq!(err.upload_message(), "Folder already exists");
    }

    #[test]
    fn missing_fields_fall_back_to_service_unavailable() {
        let err = ApiError::rejected(ApiFailureBody::default());
        assert_eq!(err.title(), SERVICE_UNAVAILABLE);
        assert_eq!(err.description(), SERVICE_UNAVAILABLE);
        assert_eq!(err.upload_message(), SERVICE_UNAVAILABLE);

        let blank = ApiError::rejected(ApiFailureBody {
            error: Some("  ".to_string()),
            message: None,
        });
        assert_eq!(blank.title(), SERVICE_UNAVAILABLE);
    }

    #[test]
    fn upload_message_uses_error_when_message_is_absent() {
        let err = ApiError::rejected(ApiFailureBody {
            error: Some("Bad Request".to_string()),
            message: None,
        });
        assert_eq!(err.upload_message(), "Bad Request");
    }

    #[test]
    fn transport_failures_share_the_generic_title() {
        let err = ApiError::Transport("Failed to fetch".to_string());
        assert_eq!(err.title(), SERVICE_UNAVAILABLE);
        assert_eq!(err.description(), "Failed to fetch");
        assert_eq!(err.upload_message(), SERVICE_UNAVAILABLE);
    }
}
