use chrono::{TimeZone, Utc};
use document_api::{
    ApiConfig, ApiError, CancellationToken, CreateDocumentRequest, Document, DocumentApi,
    DocumentApiFuture, DocumentKind, ListDocumentsRequest, MemoryDocumentApi, Paginated,
};

use crate::HttpDocumentApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected document backend.
pub enum BackendStrategy {
    /// Remote API over `fetch`.
    Http,
    /// Seeded in-memory tree for offline demos.
    InMemory,
}

/// Returns the compile-time selected backend strategy for the active build.
pub const fn selected_backend_strategy() -> BackendStrategy {
    #[cfg(feature = "in-memory-backend")]
    {
        BackendStrategy::InMemory
    }

    #[cfg(not(feature = "in-memory-backend"))]
    {
        BackendStrategy::Http
    }
}

/// Returns the selected backend strategy as a stable string token.
pub fn backend_strategy_name() -> &'static str {
    match selected_backend_strategy() {
        BackendStrategy::Http => "http",
        BackendStrategy::InMemory => "in-memory",
    }
}

/// Adapter enum that erases the concrete backend behind [`DocumentApi`].
#[derive(Debug, Clone)]
pub enum DocumentApiAdapter {
    /// Remote API over `fetch`.
    Http(HttpDocumentApi),
    /// In-memory tree.
    InMemory(MemoryDocumentApi),
}

impl DocumentApi for DocumentApiAdapter {
    fn list_documents<'a>(
        &'a self,
        request: &'a ListDocumentsRequest,
    ) -> DocumentApiFuture<'a, Result<Paginated<Document>, ApiError>> {
        match self {
            Self::Http(api) => api.list_documents(request),
            Self::InMemory(api) => api.list_documents(request),
        }
    }

    fn create_document<'a>(
        &'a self,
        request: &'a CreateDocumentRequest,
        cancel: Option<&'a CancellationToken>,
    ) -> DocumentApiFuture<'a, Result<Document, ApiError>> {
        match self {
            Self::Http(api) => api.create_document(request, cancel),
            Self::InMemory(api) => api.create_document(request, cancel),
        }
    }
}

/// Builds the document API adapter for the compile-time selected strategy.
pub fn document_api(config: ApiConfig) -> DocumentApiAdapter {
    match selected_backend_strategy() {
        BackendStrategy::Http => DocumentApiAdapter::Http(HttpDocumentApi::new(config)),
        BackendStrategy::InMemory => DocumentApiAdapter::InMemory(demo_document_api()),
    }
}

/// Builds an in-memory tree seeded with a few folders and files.
pub fn demo_document_api() -> MemoryDocumentApi {
    let api = MemoryDocumentApi::new();
    let day = |d: u32| {
        Utc.with_ymd_and_hms(2025, 4, d, 9, 30, 0)
            .single()
            .unwrap_or_else(Utc::now)
    };

    let reports = api.seed("Reports", DocumentKind::Folder, None, None, day(1));
    let designs = api.seed("Designs", DocumentKind::Folder, None, None, day(2));
    api.seed("welcome.html", DocumentKind::File, None, Some(4_096), day(3));
    api.seed("report-2024.pdf", DocumentKind::File, Some(reports), Some(1_572_864), day(4));
    api.seed("report-2025.pdf", DocumentKind::File, Some(reports), Some(2_097_152), day(5));
    let q1 = api.seed("Q1", DocumentKind::Folder, Some(reports), None, day(6));
    api.seed("q1-summary.zip", DocumentKind::File, Some(q1), Some(10_485_760), day(7));
    api.seed("bracket.stl", DocumentKind::File, Some(designs), Some(734_003), day(8));
    api.seed("cover.png", DocumentKind::File, Some(designs), Some(220_160), day(9));
    api
}
