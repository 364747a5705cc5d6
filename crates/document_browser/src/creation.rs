//! Folder creation dialog state and request flow.

use document_api::{ApiError, CreateDocumentRequest, Document, DocumentApi, DocumentId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// "Create folder" dialog state.
pub struct FolderForm {
    /// Dialog visibility.
    pub open: bool,
    /// Folder name being typed.
    pub name: String,
    /// Create request in flight.
    pub creating: bool,
}

impl FolderForm {
    /// Opens the dialog.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closes the dialog and clears the name. Refused (returns `false`) while creating.
    pub fn request_close(&mut self) -> bool {
        if self.creating {
            return false;
        }
        self.open = false;
        self.name.clear();
        true
    }

    /// Starts a create request for the typed name under `parent_id`.
    ///
    /// Returns `None` when a request is already in flight.
    pub fn begin_create(&mut self, parent_id: Option<DocumentId>) -> Option<CreateDocumentRequest> {
        if self.creating {
            return None;
        }
        self.creating = true;
        Some(CreateDocumentRequest::folder(self.name.clone(), parent_id))
    }

    /// Applies the create outcome. Success closes the dialog; failure keeps it open for retry.
    ///
    /// Returns `true` when the dialog closed.
    pub fn finish_create(&mut self, outcome: &Result<Document, ApiError>) -> bool {
        self.creating = false;
        match outcome {
            Ok(_) => self.request_close(),
            Err(_) => false,
        }
    }
}

/// Creates folder `name` under `parent_id`.
///
/// # Errors
///
/// Propagates the [`ApiError`] returned by the service.
pub async fn create_folder(
    api: &dyn DocumentApi,
    name: &str,
    parent_id: Option<DocumentId>,
) -> Result<Document, ApiError> {
    let request = CreateDocumentRequest::folder(name, parent_id);
    api.create_document(&request, None).await
}
