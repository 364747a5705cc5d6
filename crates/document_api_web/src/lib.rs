//! Browser (`wasm32`) implementation of the [`document_api`] service contract.
//!
//! Transport bindings live under `bridge/`:
//! - `bridge::documents` (typed list/create calls)
//! - `bridge::interop` (shared wasm/non-wasm `fetch` glue)

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time backend selection and the concrete adapter factory used by the site entry.
pub mod adapters;
mod bridge;
pub mod http;

pub use adapters::{
    backend_strategy_name, demo_document_api, document_api, selected_backend_strategy,
    BackendStrategy, DocumentApiAdapter,
};
pub use http::HttpDocumentApi;
