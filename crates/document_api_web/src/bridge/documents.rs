use document_api::{
    parse_create_response, parse_list_response, ApiConfig, ApiError, CancellationToken,
    CreateDocumentRequest, Document, ListDocumentsRequest, Paginated, CREATE_DOCUMENT_PATH,
    LIST_DOCUMENTS_PATH,
};
use serde::Serialize;

use super::interop;

pub(crate) async fn list_documents(
    config: &ApiConfig,
    request: &ListDocumentsRequest,
) -> Result<Paginated<Document>, ApiError> {
    let body = encode(request)?;
    let reply = interop::post_json(&config.endpoint(LIST_DOCUMENTS_PATH), &body, None).await?;
    parse_list_response(reply.into_json()?)
}

pub(crate) async fn create_document(
    config: &ApiConfig,
    request: &CreateDocumentRequest,
    cancel: Option<&CancellationToken>,
) -> Result<Document, ApiError> {
    let body = encode(request)?;
    let reply = interop::post_json(&config.endpoint(CREATE_DOCUMENT_PATH), &body, cancel).await?;
    parse_create_response(reply.into_json()?)
}

fn encode<T: Serialize>(request: &T) -> Result<String, ApiError> {
    serde_json::to_string(request).map_err(|err| ApiError::Decode(format!("encode request: {err}")))
}
