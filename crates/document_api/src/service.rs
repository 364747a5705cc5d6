//! Document API service contract and response parsing shared by all transports.

use std::{future::Future, pin::Pin};

use serde_json::Value;

use crate::{
    cancel::CancellationToken,
    error::{ApiError, ApiFailureBody},
    model::{CreateDocumentRequest, Document, ListDocumentsRequest, Paginated},
};

/// Listing endpoint path.
pub const LIST_DOCUMENTS_PATH: &str = "/document/list";
/// Create endpoint path.
pub const CREATE_DOCUMENT_PATH: &str = "/document/create";

/// Object-safe boxed future used by [`DocumentApi`] async methods.
pub type DocumentApiFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Remote document API consumed by the browser.
///
/// Calls are independent; no retries or timeouts are applied at this layer.
pub trait DocumentApi {
    /// Lists one page of documents (`POST /document/list`).
    fn list_documents<'a>(
        &'a self,
        request: &'a ListDocumentsRequest,
    ) -> DocumentApiFuture<'a, Result<Paginated<Document>, ApiError>>;

    /// Creates a file or folder (`POST /document/create`).
    ///
    /// When `cancel` fires before the response settles, implementations abort the request and
    /// resolve to [`ApiError::Cancelled`].
    fn create_document<'a>(
        &'a self,
        request: &'a CreateDocumentRequest,
        cancel: Option<&'a CancellationToken>,
    ) -> DocumentApiFuture<'a, Result<Document, ApiError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op document API for unsupported targets and baseline tests.
pub struct NoopDocumentApi;

impl NoopDocumentApi {
    fn unsupported_error(op: &str) -> ApiError {
        ApiError::Transport(format!("document api unavailable: {op}"))
    }
}

impl DocumentApi for NoopDocumentApi {
    fn list_documents<'a>(
        &'a self,
        _request: &'a ListDocumentsRequest,
    ) -> DocumentApiFuture<'a, Result<Paginated<Document>, ApiError>> {
        Box::pin(async { Ok(Paginated::default()) })
    }

    fn create_document<'a>(
        &'a self,
        _request: &'a CreateDocumentRequest,
        _cancel: Option<&'a CancellationToken>,
    ) -> DocumentApiFuture<'a, Result<Document, ApiError>> {
        Box::pin(async { Err(Self::unsupported_error("create_document")) })
    }
}

/// Interprets a create response body.
///
/// The API signals success by returning the created document (which carries an `id`); any other
/// body is read as `{ error?, message? }`.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] when the body has no `id`, or [`ApiError::Decode`] when it has
/// one but is not a valid document.
pub fn parse_create_response(body: Value) -> Result<Document, ApiError> {
    let has_id = body.get("id").map(|id| !id.is_null()).unwrap_or(false);
    if !has_id {
        return Err(rejection_from(body));
    }
    serde_json::from_value(body).map_err(|err| ApiError::Decode(err.to_string()))
}

/// Interprets a listing response body.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] for `{ error?, message? }` bodies without `data`, or
/// [`ApiError::Decode`] for malformed envelopes.
pub fn parse_list_response(body: Value) -> Result<Paginated<Document>, ApiError> {
    if body.get("data").is_none() {
        return Err(rejection_from(body));
    }
    serde_json::from_value(body).map_err(|err| ApiError::Decode(err.to_string()))
}

fn rejection_from(body: Value) -> ApiError {
    let failure = serde_json::from_value::<ApiFailureBody>(body).unwrap_or_default();
    ApiError::rejected(failure)
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::model::{DocumentId, DocumentKind, ListScope};

    #[test]
    fn create_response_with_id_is_success() {
        let doc = parse_create_response(json!({
            "id": 4,
            "type": "file",
            "name": "a.pdf",
            "completePath": "/Root/a.pdf",
            "fileSize": 10,
            "parentId": null,
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-01T00:00:00Z"
        }))
        .expect("created");
        assert_eq!(doc.id, DocumentId(4));
        assert_eq!(doc.kind, DocumentKind::File);
    }

    #[test]
    fn create_response_without_id_is_rejection() {
        let err = parse_create_response(json!({
            "error": "Bad Request",
            "message": "name must not be empty"
        }))
        .expect_err("rejected");
        assert_eq!(err.title(), "Bad Request");
        assert_eq!(err.description(), "name must not be empty");
    }

    #[test]
    fn non_object_create_body_is_generic_rejection() {
        let err = parse_create_response(json!("oops")).expect_err("rejected");
        assert_eq!(err.title(), crate::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn list_response_parses_envelope() {
        let page = parse_list_response(json!({
            "currentPage": 1,
            "totalPages": 3,
            "data": []
        }))
        .expect("page");
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 3);
        assert!(page.data.is_empty());
    }

    #[test]
    fn noop_service_lists_empty_and_refuses_creates() {
        let api = NoopDocumentApi;
        let api_obj: &dyn DocumentApi = &api;
        let req = ListDocumentsRequest::for_page(1, 10, ListScope::Folder { parent_id: None });
        let page = block_on(api_obj.list_documents(&req)).expect("list");
        assert!(page.data.is_empty());

        let create = CreateDocumentRequest::folder("x", None);
        assert!(block_on(api_obj.create_document(&create, None)).is_err());
    }
}
