//! In-app toast notifications.

use document_api::ApiError;

use crate::upload::{CommitSummary, FileRejection};

/// Lifetime of a toast before it dismisses itself.
pub const TOAST_LIFETIME_MS: u64 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Toast styling.
pub enum ToastKind {
    /// Positive confirmation.
    Success,
    /// Failure report.
    Error,
}

impl ToastKind {
    /// Stable DOM token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Toast text and kind.
pub struct ToastContent {
    /// Styling.
    pub kind: ToastKind,
    /// Bold first line.
    pub title: String,
    /// Optional second line.
    pub description: Option<String>,
}

impl ToastContent {
    /// Success toast with a title only.
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.into(),
            description: None,
        }
    }

    /// Error toast.
    pub fn error(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            title: title.into(),
            description,
        }
    }

    /// Error toast carrying the API's `error` / `message` fields.
    pub fn from_api_error(err: &ApiError) -> Self {
        Self::error(err.title(), Some(err.description()))
    }

    /// Error toast listing rejected files.
    pub fn from_rejections(rejections: &[FileRejection]) -> Self {
        let lines: Vec<String> = rejections.iter().map(FileRejection::summary).collect();
        Self::error("Some files were rejected", Some(lines.join("\n")))
    }

    /// Result toast for a finished upload save.
    pub fn from_commit(summary: &CommitSummary) -> Self {
        if summary.all_succeeded() {
            Self::success("Files saved successfully.")
        } else {
            Self::error("Failed to upload some files", None)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Toast id.
pub struct ToastId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
/// Visible toast.
pub struct Toast {
    /// Id used for dismissal.
    pub id: ToastId,
    /// Text and kind.
    pub content: ToastContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Ordered stack of visible toasts, oldest first.
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Shows a toast and returns its id.
    pub fn push(&mut self, content: ToastContent) -> ToastId {
        self.next_id = self.next_id.wrapping_add(1);
        let id = ToastId(self.next_id);
        self.toasts.push(Toast { id, content });
        id
    }

    /// Removes a toast; unknown ids are ignored.
    pub fn dismiss(&mut self, id: ToastId) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Visible toasts.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}
