//! Typed contracts for the remote document API consumed by the document browser.
//!
//! This crate is the API-first boundary between the browser UI and the document service. It
//! exposes the shared data model, request/response envelopes, the object-safe
//! [`DocumentApi`] service trait, per-request cancellation, and the injected [`ApiConfig`].
//! Concrete browser transport lives in `document_api_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod cancel;
pub mod config;
pub mod error;
pub mod memory;
pub mod model;
pub mod service;

pub use cancel::CancellationToken;
pub use config::{ApiConfig, ConfigError, DEFAULT_API_BASE_URL, DEFAULT_PAGE_SIZE};
pub use error::{ApiError, ApiFailureBody, SERVICE_UNAVAILABLE};
pub use memory::MemoryDocumentApi;
pub use model::{
    CreateDocumentRequest, Document, DocumentId, DocumentKind, FolderPathEntry,
    ListDocumentsRequest, ListScope, Paginated,
};
pub use service::{
    parse_create_response, parse_list_response, DocumentApi, DocumentApiFuture, NoopDocumentApi,
    CREATE_DOCUMENT_PATH, LIST_DOCUMENTS_PATH,
};
