//! Document data model and request/response envelopes shared by the API contract and browser UI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Server-assigned document identifier.
pub struct DocumentId(pub u64);

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Document entity kind.
pub enum DocumentKind {
    /// Regular file entry.
    File,
    /// Folder entry that can contain other documents.
    Folder,
}

impl DocumentKind {
    /// Returns the wire token used by the document API.
    pub const fn token(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Folder => "folder",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// File or folder entity returned by the listing API.
///
/// Documents are immutable once fetched; the browser replaces its page of documents wholesale on
/// every navigation, search, or page change.
pub struct Document {
    /// Server-assigned id.
    pub id: DocumentId,
    /// File or folder.
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    /// Base name.
    pub name: String,
    /// Full path from the root, shown in complete-path mode.
    #[serde(default)]
    pub complete_path: String,
    /// Size in bytes; folders usually report `0` or nothing.
    #[serde(default)]
    pub file_size: Option<u64>,
    /// Containing folder, `None` at the root.
    #[serde(default)]
    pub parent_id: Option<DocumentId>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Returns `true` for folder rows.
    pub fn is_folder(&self) -> bool {
        self.kind == DocumentKind::Folder
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One breadcrumb segment of the folder path.
///
/// `parent_id` is the id of the folder this segment represents, i.e. the parent of everything
/// listed while the segment is current. The root segment carries `None`.
pub struct FolderPathEntry {
    /// Folder display name.
    pub name: String,
    /// Folder id used as `parentId` for list/create calls.
    pub parent_id: Option<DocumentId>,
}

impl FolderPathEntry {
    /// Builds the root segment (`{ name: "Root", parentId: null }`).
    pub fn root() -> Self {
        Self {
            name: "Root".to_string(),
            parent_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Pagination envelope returned by `POST /document/list`.
pub struct Paginated<T> {
    /// 1-based page index the server answered for.
    pub current_page: u32,
    /// Total number of pages available.
    pub total_pages: u32,
    /// Page contents.
    pub data: Vec<T>,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            data: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
/// Listing scope: either one folder's children or a tree-wide search.
pub enum ListScope {
    /// Search across the whole tree; `parentId` is omitted from the request.
    Search {
        /// Search term sent verbatim.
        search: String,
    },
    /// Children of one folder; `parentId` is always sent, `null` at the root.
    Folder {
        /// Folder id, `None` for the root.
        #[serde(rename = "parentId")]
        parent_id: Option<DocumentId>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Body of `POST /document/list`.
pub struct ListDocumentsRequest {
    /// Number of rows to skip.
    pub skip: u32,
    /// Page size.
    pub limit: u32,
    /// Folder or search scope, flattened into the body.
    #[serde(flatten)]
    pub scope: ListScope,
}

impl ListDocumentsRequest {
    /// Builds a request for a 1-based `page` of `page_size` rows.
    pub fn for_page(page: u32, page_size: u32, scope: ListScope) -> Self {
        Self {
            skip: page.saturating_sub(1).saturating_mul(page_size),
            limit: page_size,
            scope,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Body of `POST /document/create`.
pub struct CreateDocumentRequest {
    /// Name of the new entry.
    pub name: String,
    /// File or folder.
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    /// Containing folder, `null` at the root.
    pub parent_id: Option<DocumentId>,
    /// File size in bytes (files only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

impl CreateDocumentRequest {
    /// Builds a folder create request.
    pub fn folder(name: impl Into<String>, parent_id: Option<DocumentId>) -> Self {
        Self {
            name: name.into(),
            kind: DocumentKind::Folder,
            parent_id,
            file_size: None,
        }
    }

    /// Builds a file create request.
    pub fn file(name: impl Into<String>, file_size: u64, parent_id: Option<DocumentId>) -> Self {
        Self {
            name: name.into(),
            kind: DocumentKind::File,
            parent_id,
            file_size: Some(file_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn root_folder_listing_sends_explicit_null_parent() {
        let req = ListDocumentsRequest::for_page(1, 10, ListScope::Folder { parent_id: None });
        assert_eq!(
            serde_json::to_value(&req).expect("serialize"),
            json!({ "skip": 0, "limit": 10, "parentId": null })
        );
    }

    #[test]
    fn search_listing_omits_parent_id() {
        let req = ListDocumentsRequest::for_page(
            3,
            10,
            ListScope::Search {
                search: "report".to_string(),
            },
        );
        assert_eq!(
            serde_json::to_value(&req).expect("serialize"),
            json!({ "skip": 20, "limit": 10, "search": "report" })
        );
    }

    #[test]
    fn folder_create_request_matches_wire_shape() {
        let req = CreateDocumentRequest::folder("Invoices", Some(DocumentId(7)));
        assert_eq!(
            serde_json::to_value(&req).expect("serialize"),
            json!({ "name": "Invoices", "type": "folder", "parentId": 7 })
        );

        let file = CreateDocumentRequest::file("scan.pdf", 2048, None);
        assert_eq!(
            serde_json::to_value(&file).expect("serialize"),
            json!({ "name": "scan.pdf", "type": "file", "parentId": null, "fileSize": 2048 })
        );
    }

    #[test]
    fn document_deserializes_from_api_payload() {
        let doc: Document = serde_json::from_value(json!({
            "id": 12,
            "type": "folder",
            "name": "Reports",
            "completePath": "/Root/Reports",
            "fileSize": 0,
            "createdAt": "2025-04-05T10:00:00.000Z",
            "updatedAt": "2025-04-06T10:00:00.000Z"
        }))
        .expect("deserialize");

        assert_eq!(doc.id, DocumentId(12));
        assert!(doc.is_folder());
        assert_eq!(doc.parent_id, None);
        assert_eq!(doc.complete_path, "/Root/Reports");
    }
}
