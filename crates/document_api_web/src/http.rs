//! `fetch`-backed document API adapter.

use document_api::{
    ApiConfig, ApiError, CancellationToken, CreateDocumentRequest, Document, DocumentApi,
    DocumentApiFuture, ListDocumentsRequest, Paginated,
};

use crate::bridge::documents;

#[derive(Debug, Clone, Default)]
/// Browser document API adapter posting JSON to the configured base URL.
pub struct HttpDocumentApi {
    config: ApiConfig,
}

impl HttpDocumentApi {
    /// Creates an adapter bound to `config`.
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Configuration the adapter was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl DocumentApi for HttpDocumentApi {
    fn list_documents<'a>(
        &'a self,
        request: &'a ListDocumentsRequest,
    ) -> DocumentApiFuture<'a, Result<Paginated<Document>, ApiError>> {
        Box::pin(documents::list_documents(&self.config, request))
    }

    fn create_document<'a>(
        &'a self,
        request: &'a CreateDocumentRequest,
        cancel: Option<&'a CancellationToken>,
    ) -> DocumentApiFuture<'a, Result<Document, ApiError>> {
        Box::pin(documents::create_document(&self.config, request, cancel))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use document_api::{ListScope, DEFAULT_PAGE_SIZE};
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn native_build_reports_transport_failure() {
        let api = HttpDocumentApi::new(ApiConfig::default());
        let req = ListDocumentsRequest::for_page(
            1,
            DEFAULT_PAGE_SIZE,
            ListScope::Folder { parent_id: None },
        );
        let err = block_on(api.list_documents(&req)).expect_err("no fetch natively");
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(err.title(), document_api::SERVICE_UNAVAILABLE);
    }
}
