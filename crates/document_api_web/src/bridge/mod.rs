//! Transport bindings for `document_api_web` service adapters.
//!
//! `documents` owns request encoding and response interpretation; `interop` owns the raw
//! `fetch` call and its non-wasm fallback.

pub(crate) mod documents;
mod interop;
