//! URL-backed navigation state: folder breadcrumb trail, page, and search term.
//!
//! The browser keeps no navigation state outside the URL. Every navigation event produces a new
//! [`NavigationState`] whose [`NavigationState::to_url`] is pushed onto the history stack; the
//! listing is derived from the state decoded back out of the query string.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use document_api::{
    Document, DocumentId, FolderPathEntry, ListDocumentsRequest, ListScope,
};
use leptos::logging::warn;
use thiserror::Error;
use url::form_urlencoded;

/// Query parameter carrying the base64 JSON folder trail.
pub const FOLDER_PATH_PARAM: &str = "folderPath";
/// Query parameter carrying the 1-based page.
pub const PAGE_PARAM: &str = "page";
/// Query parameter carrying the search term.
pub const SEARCH_PARAM: &str = "search";
/// Quiet period before a typed search term is applied.
pub const SEARCH_DEBOUNCE_MS: u64 = 500;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failure decoding a `folderPath` query value.
pub enum NavigationError {
    /// Value is not standard base64.
    #[error("folder path is not valid base64: {0}")]
    Base64(String),
    /// Decoded bytes are not a JSON array of `{ name, parentId }` entries.
    #[error("folder path is not valid json: {0}")]
    Json(String),
    /// Decoded trail has no entries.
    #[error("folder path is empty")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Breadcrumb trail from the root to the current folder. Never empty.
pub struct FolderPath {
    entries: Vec<FolderPathEntry>,
}

impl Default for FolderPath {
    fn default() -> Self {
        Self::root()
    }
}

impl FolderPath {
    /// Trail containing only the root segment.
    pub fn root() -> Self {
        Self {
            entries: vec![FolderPathEntry::root()],
        }
    }

    /// Builds a trail from explicit entries; `None` when `entries` is empty.
    pub fn from_entries(entries: Vec<FolderPathEntry>) -> Option<Self> {
        if entries.is_empty() {
            None
        } else {
            Some(Self { entries })
        }
    }

    /// Segments from root to current folder.
    pub fn entries(&self) -> &[FolderPathEntry] {
        &self.entries
    }

    /// Number of segments (root included).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current (last) segment.
    pub fn current(&self) -> FolderPathEntry {
        self.entries
            .last()
            .cloned()
            .unwrap_or_else(FolderPathEntry::root)
    }

    /// Folder id used as `parentId` for list, create, and upload calls.
    pub fn current_folder_id(&self) -> Option<DocumentId> {
        self.entries.last().and_then(|entry| entry.parent_id)
    }

    /// Display name of the current folder.
    pub fn current_name(&self) -> String {
        self.current().name
    }

    /// Returns the trail extended by one folder.
    pub fn enter(&self, name: &str, folder_id: DocumentId) -> Self {
        let mut entries = self.entries.clone();
        entries.push(FolderPathEntry {
            name: name.to_string(),
            parent_id: Some(folder_id),
        });
        Self { entries }
    }

    /// Returns the trail cut after segment `index` (inclusive). Out-of-range indexes keep the
    /// whole trail.
    pub fn truncate_to(&self, index: usize) -> Self {
        let keep = index.saturating_add(1).min(self.entries.len()).max(1);
        Self {
            entries: self.entries[..keep].to_vec(),
        }
    }

    /// Encodes the trail as base64 (standard alphabet) of its JSON array.
    pub fn encode(&self) -> String {
        let json = serde_json::to_string(&self.entries).unwrap_or_else(|_| "[]".to_string());
        STANDARD.encode(json.as_bytes())
    }

    /// Decodes a trail produced by [`FolderPath::encode`].
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError`] for invalid base64, invalid JSON, or an empty array.
    pub fn decode(raw: &str) -> Result<Self, NavigationError> {
        let bytes = STANDARD
            .decode(raw.trim())
            .map_err(|err| NavigationError::Base64(err.to_string()))?;
        let entries: Vec<FolderPathEntry> =
            serde_json::from_slice(&bytes).map_err(|err| NavigationError::Json(err.to_string()))?;
        Self::from_entries(entries).ok_or(NavigationError::Empty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One breadcrumb as rendered above the table.
pub struct Breadcrumb {
    /// Index into the folder trail, used for truncation on click.
    pub index: usize,
    /// Segment name.
    pub name: String,
    /// Whether clicking the segment navigates (every segment but the current one).
    pub clickable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Browser navigation triple decoded from / encoded into the URL query.
pub struct NavigationState {
    /// Folder trail; root when absent from the URL.
    pub folder_path: FolderPath,
    /// 1-based page.
    pub page: u32,
    /// Applied search term; `None` when absent or empty.
    pub search: Option<String>,
}

impl NavigationState {
    /// Root folder, page 1, no search.
    pub fn root() -> Self {
        Self {
            folder_path: FolderPath::root(),
            page: 1,
            search: None,
        }
    }

    /// Decodes state from query values looked up by parameter name.
    ///
    /// Malformed folder paths fall back to the root with a warning; malformed or non-positive
    /// pages fall back to page 1.
    pub fn from_query<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let folder_path = match lookup(FOLDER_PATH_PARAM) {
            Some(raw) if !raw.trim().is_empty() => FolderPath::decode(&raw).unwrap_or_else(|err| {
                warn!("ignoring malformed folderPath parameter: {err}");
                FolderPath::root()
            }),
            _ => FolderPath::root(),
        };
        let page = lookup(PAGE_PARAM)
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(1);
        let search = normalize_search(lookup(SEARCH_PARAM).as_deref());

        Self {
            folder_path,
            page,
            search,
        }
    }

    /// Decodes state from a raw query string (leading `?` optional).
    ///
    /// Uses `application/x-www-form-urlencoded` rules, so `+` decodes to a space exactly as the
    /// router's `URLSearchParams` does. The first occurrence of a repeated key wins.
    pub fn from_query_string(query: &str) -> Self {
        let pairs: Vec<(String, String)> =
            form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
                .into_owned()
                .collect();

        Self::from_query(|name| {
            pairs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
        })
    }

    /// Query string (without `?`) encoding this state.
    pub fn to_query(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query
            .append_pair(PAGE_PARAM, &self.page.to_string())
            .append_pair(FOLDER_PATH_PARAM, &self.folder_path.encode());
        if let Some(search) = self.search.as_deref() {
            query.append_pair(SEARCH_PARAM, search);
        }
        query.finish()
    }

    /// Canonical in-app URL for this state.
    pub fn to_url(&self) -> String {
        format!("/?{}", self.to_query())
    }

    /// Whether listing is search-scoped (complete-path display mode).
    pub fn is_search_mode(&self) -> bool {
        self.search.is_some()
    }

    /// Navigates into `folder`, page 1. Entering a folder leaves search mode.
    pub fn enter_folder(&self, folder: &Document) -> Self {
        Self {
            folder_path: self.folder_path.enter(&folder.name, folder.id),
            page: 1,
            search: None,
        }
    }

    /// Navigates to breadcrumb `index`, page 1.
    pub fn truncate_to(&self, index: usize) -> Self {
        Self {
            folder_path: self.folder_path.truncate_to(index),
            page: 1,
            search: self.search.clone(),
        }
    }

    /// Same folder and search, different page.
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            folder_path: self.folder_path.clone(),
            page: page.max(1),
            search: self.search.clone(),
        }
    }

    /// Same folder, new search term (empty clears), page 1.
    pub fn with_search(&self, search: &str) -> Self {
        Self {
            folder_path: self.folder_path.clone(),
            page: 1,
            search: normalize_search(Some(search)),
        }
    }

    /// Whether applying the debounced `input` would change the applied search term.
    ///
    /// Empty input and an absent search term compare equal.
    pub fn search_changed(&self, input: &str) -> bool {
        normalize_search(Some(input)) != self.search
    }

    /// Listing request for this state. Search mode drops folder scoping.
    pub fn list_request(&self, page_size: u32) -> ListDocumentsRequest {
        let scope = match self.search.as_ref() {
            Some(search) => ListScope::Search {
                search: search.clone(),
            },
            None => ListScope::Folder {
                parent_id: self.folder_path.current_folder_id(),
            },
        };
        ListDocumentsRequest::for_page(self.page, page_size, scope)
    }

    /// Breadcrumbs to render. In search mode only the trailing folder name is shown.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        let entries = self.folder_path.entries();
        let last = entries.len().saturating_sub(1);
        if self.is_search_mode() {
            return vec![Breadcrumb {
                index: last,
                name: self.folder_path.current_name(),
                clickable: false,
            }];
        }
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| Breadcrumb {
                index,
                name: entry.name.clone(),
                clickable: index != last,
            })
            .collect()
    }

    /// Row label: complete path in search mode, base name otherwise.
    pub fn display_name<'a>(&self, document: &'a Document) -> &'a str {
        if self.is_search_mode() && !document.complete_path.is_empty() {
            &document.complete_path
        } else {
            &document.name
        }
    }
}

fn normalize_search(raw: Option<&str>) -> Option<String> {
    raw.filter(|value| !value.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use document_api::DocumentKind;
    use pretty_assertions::assert_eq;

    use super::*;

    fn folder(id: u64, name: &str) -> Document {
        let at = Utc.with_ymd_and_hms(2025, 4, 5, 0, 0, 0).unwrap();
        Document {
            id: DocumentId(id),
            kind: DocumentKind::Folder,
            name: name.to_string(),
            complete_path: format!("/{name}"),
            file_size: None,
            parent_id: None,
            created_at: at,
            updated_at: at,
        }
    }

    fn nested_path() -> FolderPath {
        FolderPath::root()
            .enter("Reports", DocumentId(3))
            .enter("Q1 & Q2 \"final\"", DocumentId(9))
    }

    #[test]
    fn folder_path_round_trips_through_base64() {
        let path = nested_path();
        assert_eq!(FolderPath::decode(&path.encode()), Ok(path.clone()));
        assert_eq!(path.current_folder_id(), Some(DocumentId(9)));
        assert_eq!(FolderPath::decode(&FolderPath::root().encode()), Ok(FolderPath::root()));
    }

    #[test]
    fn root_encoding_matches_json_shape() {
        let decoded = STANDARD.decode(FolderPath::root().encode()).expect("base64");
        assert_eq!(
            String::from_utf8(decoded).expect("utf8"),
            r#"[{"name":"Root","parentId":null}]"#
        );
    }

    #[test]
    fn decode_rejects_garbage_and_empty_trails() {
        assert!(matches!(FolderPath::decode("%%%"), Err(NavigationError::Base64(_))));
        let not_json = STANDARD.encode("nope");
        assert!(matches!(FolderPath::decode(&not_json), Err(NavigationError::Json(_))));
        let empty = STANDARD.encode("[]");
        assert_eq!(FolderPath::decode(&empty), Err(NavigationError::Empty));
    }

    #[test]
    fn missing_and_malformed_params_fall_back_to_defaults() {
        assert_eq!(NavigationState::from_query_string(""), NavigationState::root());
        assert_eq!(
            NavigationState::from_query_string("?page=abc&folderPath=%%%&search="),
            NavigationState::root()
        );
        assert_eq!(NavigationState::from_query_string("page=0").page, 1);
    }

    #[test]
    fn url_round_trips_navigation_state() {
        let state = NavigationState {
            folder_path: nested_path(),
            page: 3,
            search: Some("q1 report+draft".to_string()),
        };
        let url = state.to_url();
        assert!(url.starts_with("/?page=3&folderPath="));
        assert!(url.contains("search=q1+report%2Bdraft"));
        let query = url.trim_start_matches('/');
        assert_eq!(NavigationState::from_query_string(query), state);
    }

    #[test]
    fn query_plus_decodes_to_space_like_url_search_params() {
        assert_eq!(
            NavigationState::from_query_string("?search=q1+report").search.as_deref(),
            Some("q1 report")
        );
        assert_eq!(
            NavigationState::from_query_string("?search=a%2Bb%20c").search.as_deref(),
            Some("a+b c")
        );
    }

    #[test]
    fn encoded_folder_path_never_carries_literal_plus() {
        let state = NavigationState::root().enter_folder(&folder(62, "\u{fb}\u{ff}\u{fe}?>"));
        let query = state.to_query();
        assert!(!query.contains('+'));
        assert_eq!(NavigationState::from_query_string(&query), state);
    }

    #[test]
    fn reapplying_current_navigation_decodes_to_equal_state() {
        let state = NavigationState::root()
            .enter_folder(&folder(3, "Reports"))
            .with_page(2);
        let reloaded = NavigationState::from_query_string(&state.to_query());
        assert_eq!(reloaded, state);
        assert_eq!(reloaded.with_page(2), state);
        assert_eq!(reloaded.list_request(10), state.list_request(10));

        let searching = state.with_search("report");
        assert!(!searching.search_changed("report"));
        assert_eq!(
            NavigationState::from_query_string(&searching.to_query()),
            searching
        );
    }

    #[test]
    fn search_omitted_from_url_when_absent() {
        let url = NavigationState::root().to_url();
        assert!(!url.contains(SEARCH_PARAM));
    }

    #[test]
    fn entering_folder_appends_segment_and_resets_page() {
        let state = NavigationState::root().with_page(2);
        let next = state.enter_folder(&folder(5, "Designs"));
        assert_eq!(next.page, 1);
        assert_eq!(next.folder_path.len(), 2);
        assert_eq!(
            next.folder_path.current(),
            FolderPathEntry {
                name: "Designs".to_string(),
                parent_id: Some(DocumentId(5)),
            }
        );
    }

    #[test]
    fn breadcrumb_click_truncates_inclusive() {
        let state = NavigationState {
            folder_path: nested_path(),
            page: 4,
            search: None,
        };
        let next = state.truncate_to(1);
        assert_eq!(next.folder_path.len(), 2);
        assert_eq!(next.folder_path.current_name(), "Reports");
        assert_eq!(next.page, 1);
        assert_eq!(state.truncate_to(0).folder_path, FolderPath::root());
        assert_eq!(state.truncate_to(42).folder_path, nested_path());
    }

    #[test]
    fn search_change_detection_treats_empty_as_absent() {
        let state = NavigationState::root();
        assert!(!state.search_changed(""));
        assert!(state.search_changed("report"));

        let searching = state.with_search("report");
        assert!(!searching.search_changed("report"));
        assert!(searching.search_changed(""));
        assert_eq!(searching.with_search("").search, None);
    }

    #[test]
    fn list_request_scopes_by_folder_or_search() {
        let state = NavigationState {
            folder_path: nested_path(),
            page: 2,
            search: None,
        };
        assert_eq!(
            state.list_request(10),
            ListDocumentsRequest {
                skip: 10,
                limit: 10,
                scope: ListScope::Folder {
                    parent_id: Some(DocumentId(9)),
                },
            }
        );

        let search = state.with_search("report").list_request(10);
        assert_eq!(search.skip, 0);
        assert_eq!(
            search.scope,
            ListScope::Search {
                search: "report".to_string(),
            }
        );
    }

    #[test]
    fn breadcrumbs_collapse_in_search_mode() {
        let state = NavigationState {
            folder_path: nested_path(),
            page: 1,
            search: None,
        };
        let crumbs = state.breadcrumbs();
        assert_eq!(crumbs.len(), 3);
        assert!(crumbs[0].clickable && crumbs[1].clickable);
        assert!(!crumbs[2].clickable);

        let searching = state.with_search("x");
        assert_eq!(
            searching.breadcrumbs(),
            vec![Breadcrumb {
                index: 2,
                name: "Q1 & Q2 \"final\"".to_string(),
                clickable: false,
            }]
        );
    }

    #[test]
    fn display_name_switches_to_complete_path_when_searching() {
        let doc = folder(1, "Reports");
        let state = NavigationState::root();
        assert_eq!(state.display_name(&doc), "Reports");
        assert_eq!(state.with_search("rep").display_name(&doc), "/Reports");
    }
}
