//! Browser-level error wrapper rendered by the listing error boundary.

use document_api::ApiError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors surfaced through the listing `ErrorBoundary`.
pub enum BrowserError {
    /// Listing request failed.
    #[error("{}", .0.description())]
    Listing(#[source] ApiError),
}

impl From<ApiError> for BrowserError {
    fn from(err: ApiError) -> Self {
        Self::Listing(err)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn listing_error_displays_description() {
        let err = BrowserError::from(ApiError::Transport("Failed to fetch".to_string()));
        assert_eq!(err.to_string(), "Failed to fetch");
    }
}
