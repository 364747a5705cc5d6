//! In-memory document API used by tests and the offline demo backend.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use chrono::{DateTime, Utc};

use crate::{
    cancel::CancellationToken,
    error::{ApiError, ApiFailureBody},
    model::{
        CreateDocumentRequest, Document, DocumentId, DocumentKind, ListDocumentsRequest,
        ListScope, Paginated,
    },
    service::{DocumentApi, DocumentApiFuture},
};

#[derive(Debug, Default)]
struct MemoryTree {
    documents: Vec<Document>,
    next_id: u64,
    create_failures: HashMap<String, ApiFailureBody>,
    list_requests: Vec<ListDocumentsRequest>,
    create_requests: Vec<CreateDocumentRequest>,
}

#[derive(Debug, Clone, Default)]
/// In-memory document tree implementing [`DocumentApi`].
///
/// Listing mirrors the remote API: folder scope returns direct children, search scope matches
/// names case-insensitively across the whole tree. Every request is recorded so callers can
/// assert on what was sent.
pub struct MemoryDocumentApi {
    inner: Rc<RefCell<MemoryTree>>,
}

impl MemoryDocumentApi {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a document directly, bypassing validation, and returns its id.
    pub fn seed(
        &self,
        name: &str,
        kind: DocumentKind,
        parent_id: Option<DocumentId>,
        file_size: Option<u64>,
        created_at: DateTime<Utc>,
    ) -> DocumentId {
        let mut tree = self.inner.borrow_mut();
        let doc = tree.build_document(name, kind, parent_id, file_size, created_at);
        let id = doc.id;
        tree.documents.push(doc);
        id
    }

    /// Makes every subsequent create request for `name` fail with `body`.
    pub fn fail_creates_named(&self, name: &str, body: ApiFailureBody) {
        self.inner
            .borrow_mut()
            .create_failures
            .insert(name.to_string(), body);
    }

    /// Listing requests received so far.
    pub fn list_requests(&self) -> Vec<ListDocumentsRequest> {
        self.inner.borrow().list_requests.clone()
    }

    /// Create requests received so far.
    pub fn create_requests(&self) -> Vec<CreateDocumentRequest> {
        self.inner.borrow().create_requests.clone()
    }

    /// Snapshot of every stored document.
    pub fn documents(&self) -> Vec<Document> {
        self.inner.borrow().documents.clone()
    }
}

impl MemoryTree {
    fn build_document(
        &mut self,
        name: &str,
        kind: DocumentKind,
        parent_id: Option<DocumentId>,
        file_size: Option<u64>,
        created_at: DateTime<Utc>,
    ) -> Document {
        self.next_id = self.next_id.saturating_add(1);
        let parent_path = parent_id
            .and_then(|pid| self.documents.iter().find(|doc| doc.id == pid))
            .map(|parent| parent.complete_path.clone())
            .unwrap_or_default();
        Document {
            id: DocumentId(self.next_id),
            kind,
            name: name.to_string(),
            complete_path: format!("{parent_path}/{name}"),
            file_size,
            parent_id,
            created_at,
            updated_at: created_at,
        }
    }

    fn list(&self, request: &ListDocumentsRequest) -> Paginated<Document> {
        let matches: Vec<&Document> = match &request.scope {
            ListScope::Folder { parent_id } => self
                .documents
                .iter()
                .filter(|doc| doc.parent_id == *parent_id)
                .collect(),
            ListScope::Search { search } => {
                let needle = search.to_lowercase();
                self.documents
                    .iter()
                    .filter(|doc| doc.name.to_lowercase().contains(&needle))
                    .collect()
            }
        };

        let limit = request.limit.max(1);
        let total = matches.len() as u32;
        let total_pages = total.div_ceil(limit);
        let data = matches
            .into_iter()
            .skip(request.skip as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        Paginated {
            current_page: request.skip / limit + 1,
            total_pages,
            data,
        }
    }

    fn create(&mut self, request: &CreateDocumentRequest) -> Result<Document, ApiError> {
        if let Some(body) = self.create_failures.get(&request.name) {
            return Err(ApiError::rejected(body.clone()));
        }
        if request.name.trim().is_empty() {
            return Err(ApiError::rejected(ApiFailureBody {
                error: Some("Bad Request".to_string()),
                message: Some("name should not be empty".to_string()),
            }));
        }
        if let Some(parent_id) = request.parent_id {
            let parent_is_folder = self
                .documents
                .iter()
                .any(|doc| doc.id == parent_id && doc.is_folder());
            if !parent_is_folder {
                return Err(ApiError::rejected(ApiFailureBody {
                    error: Some("Not Found".to_string()),
                    message: Some(format!("folder {parent_id} does not exist")),
                }));
            }
        }
        let doc = self.build_document(
            &request.name,
            request.kind,
            request.parent_id,
            request.file_size,
            Utc::now(),
        );
        self.documents.push(doc.clone());
        Ok(doc)
    }
}

impl DocumentApi for MemoryDocumentApi {
    fn list_documents<'a>(
        &'a self,
        request: &'a ListDocumentsRequest,
    ) -> DocumentApiFuture<'a, Result<Paginated<Document>, ApiError>> {
        Box::pin(async move {
            let mut tree = self.inner.borrow_mut();
            tree.list_requests.push(request.clone());
            Ok(tree.list(request))
        })
    }

    fn create_document<'a>(
        &'a self,
        request: &'a CreateDocumentRequest,
        cancel: Option<&'a CancellationToken>,
    ) -> DocumentApiFuture<'a, Result<Document, ApiError>> {
        Box::pin(async move {
            let mut tree = self.inner.borrow_mut();
            tree.create_requests.push(request.clone());
            if cancel.map(CancellationToken::is_cancelled).unwrap_or(false) {
                return Err(ApiError::Cancelled);
            }
            tree.create(request)
        })
    }
}
