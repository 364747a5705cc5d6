//! Document browser: a paginated, searchable, sortable listing of files and folders with
//! folder-creation and multi-file upload dialogs.
//!
//! State lives in plain Rust types driven by small transition functions ([`navigation`],
//! [`table`], [`upload`], [`creation`]); [`components`] renders them with Leptos and the shared
//! `system_ui` primitives. Navigation state is carried entirely by the URL query.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod components;
pub mod context;
pub mod creation;
pub mod error;
pub mod format;
pub mod navigation;
pub mod pagination;
pub mod table;
pub mod toast;
pub mod upload;

pub use components::DocumentBrowser;
pub use context::{use_browser, BrowserContext, BrowserProvider};
pub use error::BrowserError;
pub use navigation::{FolderPath, NavigationState};
pub use upload::UploadLimits;
