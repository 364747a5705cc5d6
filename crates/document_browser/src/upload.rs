//! Multi-file upload session: validation, per-file lifecycle, cancellation, and commit.
//!
//! The session is driven by [`reduce_upload`], which mutates [`UploadSession`] and returns
//! [`UploadEffect`] intents. The dialog executes effects (API calls, removal timers, toasts) and
//! feeds results back as further actions.

use std::collections::BTreeSet;

use document_api::{ApiError, CancellationToken, CreateDocumentRequest, DocumentApi, DocumentId};
use leptos::logging;
use thiserror::Error;
use uuid::Uuid;

use crate::format::format_bytes;

/// Delay between marking a row vanishing and removing it.
pub const VANISH_DELAY_MS: u64 = 300;
/// Default per-file size limit in megabytes.
pub const DEFAULT_MAX_SIZE_MB: u64 = 1000;
/// Default number of files tracked at once.
pub const DEFAULT_MAX_FILES: usize = 10;

/// Accepted MIME types and the extensions accepted for each.
pub const ACCEPTED_TYPES: &[(&str, &[&str])] = &[
    ("application/pdf", &[".pdf"]),
    ("application/zip", &[".zip"]),
    ("application/octet-stream", &[".stl"]),
    ("model/stl", &[".stl"]),
    ("image/jpeg", &[".jpg", ".jpeg"]),
    ("image/png", &[".png"]),
    ("image/webp", &[".webp"]),
    ("text/html", &[".html", ".htm"]),
];

/// Returns `true` when either the MIME type or the file extension is accepted.
pub fn accepts_file_type(name: &str, mime: &str) -> bool {
    let mime = mime.trim().to_ascii_lowercase();
    let name = name.to_ascii_lowercase();
    ACCEPTED_TYPES.iter().any(|(accepted_mime, extensions)| {
        *accepted_mime == mime || extensions.iter().any(|ext| name.ends_with(ext))
    })
}

/// Whether a MIME type reported during a drag may be accepted.
///
/// Names are not visible until drop, so an empty type is given the benefit of the doubt.
pub fn drag_type_acceptable(mime: &str) -> bool {
    let mime = mime.trim().to_ascii_lowercase();
    mime.is_empty() || ACCEPTED_TYPES.iter().any(|(accepted, _)| *accepted == mime)
}

/// Value for the file input's `accept` attribute.
pub fn accept_attribute() -> String {
    let mut tokens: Vec<&str> = Vec::new();
    for (mime, extensions) in ACCEPTED_TYPES {
        tokens.push(mime);
        tokens.extend(extensions.iter().copied());
    }
    tokens.dedup();
    tokens.join(",")
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Client-generated upload row id.
pub struct UploadId(pub String);

impl UploadId {
    /// Generates a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl std::fmt::Display for UploadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// File metadata picked from a drop or the file input.
pub struct FileCandidate {
    /// File name.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Browser-reported MIME type (may be empty).
    pub mime: String,
}

impl FileCandidate {
    /// Builds a candidate.
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Why a dropped file was not tracked.
pub enum RejectionReason {
    /// Neither MIME type nor extension is accepted.
    #[error("File type is not supported")]
    InvalidType,
    /// File exceeds the per-file size limit.
    #[error("File is larger than {max_size_mb}MB")]
    TooLarge {
        /// Configured limit.
        max_size_mb: u64,
    },
    /// Drop would exceed the tracked-file limit.
    #[error("Too many files (max {max_files})")]
    TooManyFiles {
        /// Configured limit.
        max_files: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A rejected file and every reason it was rejected.
pub struct FileRejection {
    /// Rejected file.
    pub file: FileCandidate,
    /// Reasons, in check order.
    pub reasons: Vec<RejectionReason>,
}

impl FileRejection {
    /// `"{name}: {reason}; {reason}"` line used in the rejection toast.
    pub fn summary(&self) -> String {
        let reasons: Vec<String> = self.reasons.iter().map(ToString::to_string).collect();
        format!("{}: {}", self.file.name, reasons.join("; "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Upload validation limits.
pub struct UploadLimits {
    /// Per-file size limit in megabytes.
    pub max_size_mb: u64,
    /// Maximum tracked files.
    pub max_files: usize,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_size_mb: DEFAULT_MAX_SIZE_MB,
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

impl UploadLimits {
    /// Per-file size limit in bytes.
    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_mb.saturating_mul(1024 * 1024)
    }

    /// Splits a drop into accepted files and rejections.
    ///
    /// Type and size are checked per file. When the files passing those checks exceed the
    /// remaining capacity (`max_files - tracked`), every one of them is rejected as
    /// [`RejectionReason::TooManyFiles`].
    pub fn validate(
        &self,
        candidates: Vec<FileCandidate>,
        tracked: usize,
    ) -> (Vec<FileCandidate>, Vec<FileRejection>) {
        let mut accepted = Vec::new();
        let mut rejected = Vec::new();
        for file in candidates {
            let mut reasons = Vec::new();
            if !accepts_file_type(&file.name, &file.mime) {
                reasons.push(RejectionReason::InvalidType);
            }
            if file.size > self.max_size_bytes() {
                reasons.push(RejectionReason::TooLarge {
                    max_size_mb: self.max_size_mb,
                });
            }
            if reasons.is_empty() {
                accepted.push(file);
            } else {
                rejected.push(FileRejection { file, reasons });
            }
        }

        let capacity = self.max_files.saturating_sub(tracked);
        if accepted.len() > capacity {
            let reason = RejectionReason::TooManyFiles {
                max_files: self.max_files,
            };
            rejected.extend(accepted.drain(..).map(|file| FileRejection {
                file,
                reasons: vec![reason],
            }));
        }
        (accepted, rejected)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Per-file upload status.
pub enum UploadStatus {
    /// Waiting for save.
    Pending,
    /// Create request in flight.
    Uploading,
    /// Created; about to vanish.
    Success,
    /// Create failed; stays listed for retry or removal.
    Error,
}

impl UploadStatus {
    /// Stable DOM token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Uploading => "uploading",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// One tracked file row.
pub struct UploadedFile {
    /// Row id.
    pub id: UploadId,
    /// File metadata.
    pub file: FileCandidate,
    /// Progress percentage, 0..=100.
    pub progress: u8,
    /// Lifecycle status.
    pub status: UploadStatus,
    /// Failure line shown under `Error`.
    pub error_message: Option<String>,
    /// Aborts this file's create request.
    pub cancel: CancellationToken,
    /// Playing the exit animation.
    pub vanishing: bool,
}

impl UploadedFile {
    fn pending(file: FileCandidate) -> Self {
        Self {
            id: UploadId::generate(),
            file,
            progress: 0,
            status: UploadStatus::Pending,
            error_message: None,
            cancel: CancellationToken::new(),
            vanishing: false,
        }
    }
}

/// Status line for a file row.
pub fn status_text(file: &UploadedFile) -> String {
    match file.status {
        UploadStatus::Pending => "Pending".to_string(),
        UploadStatus::Uploading => format!("{}%", file.progress),
        UploadStatus::Success => "Uploaded".to_string(),
        UploadStatus::Error => file
            .error_message
            .clone()
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| "Failed".to_string()),
    }
}

/// Size line for a file row.
pub fn size_text(file: &UploadedFile) -> String {
    format_bytes(file.file.size)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Aggregate result of one save.
pub struct CommitSummary {
    /// Files created.
    pub succeeded: usize,
    /// Files the API refused or that failed in transport.
    pub failed: usize,
    /// Files removed mid-flight; not counted as failures.
    pub cancelled: usize,
}

impl CommitSummary {
    /// Whether no file failed.
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }

    /// Dialog follow-up for this save.
    pub fn follow_up(&self) -> CommitFollowUp {
        CommitFollowUp {
            refresh_listing: self.succeeded > 0,
            close_dialog: self.all_succeeded(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What the upload dialog does once a save settles.
pub struct CommitFollowUp {
    /// At least one file was created, so the listing is stale.
    pub refresh_listing: bool,
    /// Nothing failed: reset the session and close the dialog. Otherwise the failed rows stay
    /// visible for removal or another save.
    pub close_dialog: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Upload dialog state.
pub struct UploadSession {
    /// Validation limits.
    pub limits: UploadLimits,
    /// Tracked rows in drop order.
    pub files: Vec<UploadedFile>,
    /// Whether a save is in flight.
    pub saving: bool,
    in_flight: BTreeSet<UploadId>,
    summary: CommitSummary,
}

impl UploadSession {
    /// Empty session with the given limits.
    pub fn new(limits: UploadLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// Rows that count against the file limit.
    pub fn tracked(&self) -> usize {
        self.files.iter().filter(|file| !file.vanishing).count()
    }

    /// Free slots shown as `{remaining} of {max} files remaining`.
    pub fn remaining(&self) -> usize {
        self.limits.max_files.saturating_sub(self.tracked())
    }

    /// Looks up a row.
    pub fn file(&self, id: &UploadId) -> Option<&UploadedFile> {
        self.files.iter().find(|file| &file.id == id)
    }

    fn file_mut(&mut self, id: &UploadId) -> Option<&mut UploadedFile> {
        self.files.iter_mut().find(|file| &file.id == id)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_upload`].
pub enum UploadAction {
    /// Files dropped or picked.
    FilesDropped(Vec<FileCandidate>),
    /// Save pressed: create every tracked file under `parent_id`.
    BeginCommit {
        /// Current folder.
        parent_id: Option<DocumentId>,
    },
    /// One create request settled.
    CommitSettled {
        /// Row the request belonged to.
        id: UploadId,
        /// API outcome.
        outcome: Result<DocumentId, ApiError>,
    },
    /// Remove button pressed.
    RemoveFile {
        /// Row to remove.
        id: UploadId,
    },
    /// Vanish delay elapsed.
    FinishRemoval {
        /// Row to drop.
        id: UploadId,
    },
    /// Dialog closed.
    Reset,
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_upload`].
pub enum UploadEffect {
    /// Show rejected files to the user.
    ReportRejections(Vec<FileRejection>),
    /// Issue one create request, abortable through `cancel`.
    IssueCreate {
        /// Row the request belongs to.
        id: UploadId,
        /// Request body.
        request: CreateDocumentRequest,
        /// Row cancellation token.
        cancel: CancellationToken,
    },
    /// Dispatch [`UploadAction::FinishRemoval`] after [`VANISH_DELAY_MS`].
    ScheduleRemoval {
        /// Row to drop.
        id: UploadId,
    },
    /// Every request of the save settled.
    CommitFinished(CommitSummary),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Upload reducer errors.
pub enum UploadError {
    /// Action referenced a row that is not tracked.
    #[error("upload {0} not found")]
    UnknownFile(UploadId),
    /// Action is not allowed while a save is in flight.
    #[error("upload save in progress")]
    CommitInProgress,
}

/// Applies an [`UploadAction`] and returns the effects to execute.
///
/// # Errors
///
/// Returns [`UploadError::UnknownFile`] when removing an untracked row, and
/// [`UploadError::CommitInProgress`] for saves or resets during a save.
pub fn reduce_upload(
    session: &mut UploadSession,
    action: UploadAction,
) -> Result<Vec<UploadEffect>, UploadError> {
    let mut effects = Vec::new();
    match action {
        UploadAction::FilesDropped(candidates) => {
            let (accepted, rejected) = session.limits.validate(candidates, session.tracked());
            session
                .files
                .extend(accepted.into_iter().map(UploadedFile::pending));
            if !rejected.is_empty() {
                effects.push(UploadEffect::ReportRejections(rejected));
            }
        }
        UploadAction::BeginCommit { parent_id } => {
            if session.saving {
                return Err(UploadError::CommitInProgress);
            }
            session.summary = CommitSummary::default();
            session.in_flight.clear();
            for file in session.files.iter_mut().filter(|file| !file.vanishing) {
                file.status = UploadStatus::Uploading;
                file.progress = 0;
                file.error_message = None;
                session.in_flight.insert(file.id.clone());
                effects.push(UploadEffect::IssueCreate {
                    id: file.id.clone(),
                    request: CreateDocumentRequest::file(
                        file.file.name.clone(),
                        file.file.size,
                        parent_id,
                    ),
                    cancel: file.cancel.clone(),
                });
            }
            if session.in_flight.is_empty() {
                effects.push(UploadEffect::CommitFinished(session.summary));
            } else {
                session.saving = true;
            }
        }
        UploadAction::CommitSettled { id, outcome } => {
            if !session.in_flight.remove(&id) {
                return Ok(effects);
            }
            match outcome {
                Err(err) if err.is_cancelled() => session.summary.cancelled += 1,
                Err(err) => {
                    session.summary.failed += 1;
                    if let Some(file) = session.file_mut(&id) {
                        file.status = UploadStatus::Error;
                        file.progress = 0;
                        file.error_message = Some(err.upload_message());
                    }
                }
                Ok(_) => {
                    session.summary.succeeded += 1;
                    if let Some(file) = session.file_mut(&id) {
                        file.status = UploadStatus::Success;
                        file.progress = 100;
                        if !file.vanishing {
                            file.vanishing = true;
                            effects.push(UploadEffect::ScheduleRemoval { id });
                        }
                    }
                }
            }
            if session.in_flight.is_empty() && session.saving {
                session.saving = false;
                effects.push(UploadEffect::CommitFinished(session.summary));
            }
        }
        UploadAction::RemoveFile { id } => {
            let file = session
                .file_mut(&id)
                .ok_or_else(|| UploadError::UnknownFile(id.clone()))?;
            if file.status == UploadStatus::Uploading {
                file.cancel.cancel();
            }
            if !file.vanishing {
                file.vanishing = true;
                effects.push(UploadEffect::ScheduleRemoval { id });
            }
        }
        UploadAction::FinishRemoval { id } => {
            session.files.retain(|file| file.id != id);
        }
        UploadAction::Reset => {
            if session.saving {
                return Err(UploadError::CommitInProgress);
            }
            *session = UploadSession::new(session.limits);
        }
    }
    Ok(effects)
}

/// Issues the create request behind one [`UploadEffect::IssueCreate`] and wraps its outcome as
/// [`UploadAction::CommitSettled`].
pub async fn settle_create(
    api: &dyn DocumentApi,
    id: UploadId,
    request: CreateDocumentRequest,
    cancel: CancellationToken,
) -> UploadAction {
    let outcome = api
        .create_document(&request, Some(&cancel))
        .await
        .map(|document| document.id);
    match &outcome {
        Err(err) if err.is_cancelled() => logging::log!("upload of {} cancelled", request.name),
        Err(err) => logging::warn!("upload of {} failed: {err}", request.name),
        Ok(_) => {}
    }
    UploadAction::CommitSettled { id, outcome }
}

#[cfg(test)]
mod tests {
    use document_api::{ApiFailureBody, MemoryDocumentApi};
    use futures::{executor::block_on, future::join_all};
    use pretty_assertions::assert_eq;

    use crate::toast::ToastContent;

    use super::*;

    const MB: u64 = 1024 * 1024;

    fn pdf(name: &str) -> FileCandidate {
        FileCandidate::new(name, 2 * MB, "application/pdf")
    }

    fn drop_files(session: &mut UploadSession, files: Vec<FileCandidate>) -> Vec<UploadEffect> {
        reduce_upload(session, UploadAction::FilesDropped(files)).expect("drop")
    }

    fn issued(effects: &[UploadEffect]) -> Vec<(UploadId, CreateDocumentRequest)> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                UploadEffect::IssueCreate { id, request, .. } => Some((id.clone(), request.clone())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn accepted_types_match_mime_or_extension() {
        assert!(accepts_file_type("scan.PDF", ""));
        assert!(accepts_file_type("bracket.stl", ""));
        assert!(accepts_file_type("blob", "model/stl"));
        assert!(accepts_file_type("photo.jpeg", "image/jpeg"));
        assert!(accepts_file_type("page.htm", ""));
        assert!(!accepts_file_type("notes.txt", "text/plain"));
        assert!(!accepts_file_type("setup.exe", "application/x-msdownload"));
    }

    #[test]
    fn oversized_file_is_rejected_and_valid_files_are_pending() {
        let mut session = UploadSession::new(UploadLimits::default());
        let effects = drop_files(
            &mut session,
            vec![
                pdf("a.pdf"),
                FileCandidate::new("b.png", MB, "image/png"),
                FileCandidate::new("huge.zip", 1001 * MB, "application/zip"),
                FileCandidate::new("c.webp", MB, "image/webp"),
            ],
        );

        assert_eq!(session.files.len(), 3);
        assert!(session
            .files
            .iter()
            .all(|file| file.status == UploadStatus::Pending && file.progress == 0));
        let [UploadEffect::ReportRejections(rejected)] = effects.as_slice() else {
            panic!("expected a single rejection report, got {effects:?}");
        };
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].file.name, "huge.zip");
        assert_eq!(
            rejected[0].reasons,
            vec![RejectionReason::TooLarge { max_size_mb: 1000 }]
        );
    }

    #[test]
    fn drop_beyond_remaining_capacity_is_rejected_whole() {
        let mut session = UploadSession::new(UploadLimits {
            max_size_mb: 10,
            max_files: 3,
        });
        drop_files(&mut session, vec![pdf("a.pdf"), pdf("b.pdf")]);
        let effects = drop_files(
            &mut session,
            vec![pdf("c.pdf"), pdf("d.pdf"), FileCandidate::new("x.txt", 1, "text/plain")],
        );

        assert_eq!(session.files.len(), 2);
        assert_eq!(session.remaining(), 1);
        let [UploadEffect::ReportRejections(rejected)] = effects.as_slice() else {
            panic!("expected rejections");
        };
        let summaries: Vec<String> = rejected.iter().map(FileRejection::summary).collect();
        assert_eq!(
            summaries,
            vec![
                "x.txt: File type is not supported".to_string(),
                "c.pdf: Too many files (max 3)".to_string(),
                "d.pdf: Too many files (max 3)".to_string(),
            ]
        );
    }

    #[test]
    fn commit_issues_one_create_per_file_with_parent() {
        let mut session = UploadSession::new(UploadLimits::default());
        drop_files(&mut session, vec![pdf("a.pdf"), pdf("b.pdf")]);

        let effects = reduce_upload(
            &mut session,
            UploadAction::BeginCommit {
                parent_id: Some(DocumentId(8)),
            },
        )
        .expect("commit");

        let requests = issued(&effects);
        assert_eq!(requests.len(), 2);
        assert_eq!(
            requests[0].1,
            CreateDocumentRequest::file("a.pdf", 2 * MB, Some(DocumentId(8)))
        );
        assert!(session.saving);
        assert!(session
            .files
            .iter()
            .all(|file| file.status == UploadStatus::Uploading));
        assert_eq!(
            reduce_upload(&mut session, UploadAction::BeginCommit { parent_id: None }),
            Err(UploadError::CommitInProgress)
        );
    }

    #[test]
    fn partial_failure_keeps_failed_row_and_reports_aggregate() {
        let mut session = UploadSession::new(UploadLimits::default());
        drop_files(&mut session, vec![pdf("ok.pdf"), pdf("bad.pdf")]);
        let effects =
            reduce_upload(&mut session, UploadAction::BeginCommit { parent_id: None }).expect("commit");
        let requests = issued(&effects);
        let (ok_id, bad_id) = (requests[0].0.clone(), requests[1].0.clone());

        let ok_effects = reduce_upload(
            &mut session,
            UploadAction::CommitSettled {
                id: ok_id.clone(),
                outcome: Ok(DocumentId(1)),
            },
        )
        .expect("settle ok");
        assert_eq!(ok_effects, vec![UploadEffect::ScheduleRemoval { id: ok_id.clone() }]);
        assert!(session.saving);

        let bad_effects = reduce_upload(
            &mut session,
            UploadAction::CommitSettled {
                id: bad_id.clone(),
                outcome: Err(ApiError::rejected(ApiFailureBody {
                    error: Some("Conflict".to_string()),
                    message: Some("File already exists".to_string()),
                })),
            },
        )
        .expect("settle bad");
        assert_eq!(
            bad_effects,
            vec![UploadEffect::CommitFinished(CommitSummary {
                succeeded: 1,
                failed: 1,
                cancelled: 0,
            })]
        );
        assert!(!session.saving);

        reduce_upload(&mut session, UploadAction::FinishRemoval { id: ok_id }).expect("remove");
        assert_eq!(session.files.len(), 1);
        let failed = &session.files[0];
        assert_eq!(failed.id, bad_id);
        assert_eq!(failed.status, UploadStatus::Error);
        assert_eq!(status_text(failed), "File already exists");
    }

    #[test]
    fn removing_uploading_file_cancels_only_that_request() {
        let mut session = UploadSession::new(UploadLimits::default());
        drop_files(&mut session, vec![pdf("a.pdf"), pdf("b.pdf")]);
        reduce_upload(&mut session, UploadAction::BeginCommit { parent_id: None }).expect("commit");
        let first = session.files[0].id.clone();

        let effects =
            reduce_upload(&mut session, UploadAction::RemoveFile { id: first.clone() }).expect("remove");
        assert_eq!(effects, vec![UploadEffect::ScheduleRemoval { id: first.clone() }]);
        assert!(session.files[0].cancel.is_cancelled());
        assert!(session.files[0].vanishing);
        assert!(!session.files[1].cancel.is_cancelled());

        let again =
            reduce_upload(&mut session, UploadAction::RemoveFile { id: first.clone() }).expect("again");
        assert!(again.is_empty());
    }

    #[test]
    fn cancelled_uploads_do_not_count_as_failures() {
        let mut session = UploadSession::new(UploadLimits::default());
        drop_files(&mut session, vec![pdf("a.pdf")]);
        reduce_upload(&mut session, UploadAction::BeginCommit { parent_id: None }).expect("commit");
        let id = session.files[0].id.clone();
        reduce_upload(&mut session, UploadAction::RemoveFile { id: id.clone() }).expect("remove");
        reduce_upload(&mut session, UploadAction::FinishRemoval { id: id.clone() }).expect("finish");

        let effects = reduce_upload(
            &mut session,
            UploadAction::CommitSettled {
                id,
                outcome: Err(ApiError::Cancelled),
            },
        )
        .expect("settle");
        assert_eq!(
            effects,
            vec![UploadEffect::CommitFinished(CommitSummary {
                succeeded: 0,
                failed: 0,
                cancelled: 1,
            })]
        );
    }

    #[test]
    fn empty_commit_finishes_immediately() {
        let mut session = UploadSession::new(UploadLimits::default());
        let effects =
            reduce_upload(&mut session, UploadAction::BeginCommit { parent_id: None }).expect("commit");
        assert_eq!(
            effects,
            vec![UploadEffect::CommitFinished(CommitSummary::default())]
        );
        assert!(!session.saving);
    }

    #[test]
    fn reset_is_refused_while_saving() {
        let mut session = UploadSession::new(UploadLimits::default());
        drop_files(&mut session, vec![pdf("a.pdf")]);
        reduce_upload(&mut session, UploadAction::BeginCommit { parent_id: None }).expect("commit");
        assert_eq!(
            reduce_upload(&mut session, UploadAction::Reset),
            Err(UploadError::CommitInProgress)
        );

        let id = session.files[0].id.clone();
        reduce_upload(
            &mut session,
            UploadAction::CommitSettled {
                id,
                outcome: Err(ApiError::Transport("offline".to_string())),
            },
        )
        .expect("settle");
        reduce_upload(&mut session, UploadAction::Reset).expect("reset");
        assert!(session.files.is_empty());
    }

    #[test]
    fn unknown_removal_is_an_error() {
        let mut session = UploadSession::default();
        let id = UploadId("missing".to_string());
        assert_eq!(
            reduce_upload(&mut session, UploadAction::RemoveFile { id: id.clone() }),
            Err(UploadError::UnknownFile(id))
        );
    }

    #[test]
    fn status_text_covers_every_state() {
        let mut file = UploadedFile::pending(pdf("a.pdf"));
        assert_eq!(status_text(&file), "Pending");
        file.status = UploadStatus::Uploading;
        file.progress = 40;
        assert_eq!(status_text(&file), "40%");
        file.status = UploadStatus::Success;
        assert_eq!(status_text(&file), "Uploaded");
        file.status = UploadStatus::Error;
        assert_eq!(status_text(&file), "Failed");
        assert_eq!(size_text(&file), "2 MB");
    }

    #[test]
    fn drag_types_allow_unknown_but_refuse_foreign_mimes() {
        assert!(drag_type_acceptable(""));
        assert!(drag_type_acceptable("image/png"));
        assert!(!drag_type_acceptable("text/plain"));
    }

    #[test]
    fn accept_attribute_lists_types_and_extensions() {
        let accept = accept_attribute();
        assert!(accept.starts_with("application/pdf,.pdf,application/zip,.zip"));
        assert!(accept.contains("model/stl"));
    }

    #[test]
    fn follow_up_refreshes_on_any_success_and_closes_only_without_failures() {
        let mixed = CommitSummary {
            succeeded: 1,
            failed: 1,
            cancelled: 0,
        };
        assert_eq!(
            mixed.follow_up(),
            CommitFollowUp {
                refresh_listing: true,
                close_dialog: false,
            }
        );

        let all_failed = CommitSummary {
            succeeded: 0,
            failed: 2,
            cancelled: 0,
        };
        assert_eq!(
            all_failed.follow_up(),
            CommitFollowUp {
                refresh_listing: false,
                close_dialog: false,
            }
        );

        let with_cancelled = CommitSummary {
            succeeded: 2,
            failed: 0,
            cancelled: 1,
        };
        assert_eq!(
            with_cancelled.follow_up(),
            CommitFollowUp {
                refresh_listing: true,
                close_dialog: true,
            }
        );

        assert_eq!(
            CommitSummary::default().follow_up(),
            CommitFollowUp {
                refresh_listing: false,
                close_dialog: true,
            }
        );
    }

    #[test]
    fn save_with_one_failing_file_keeps_it_listed_and_dialog_open() {
        let api = MemoryDocumentApi::new();
        api.fail_creates_named(
            "broken.zip",
            ApiFailureBody {
                error: Some("Payload Too Large".to_string()),
                message: Some("Quota exceeded".to_string()),
            },
        );
        let mut session = UploadSession::new(UploadLimits::default());
        drop_files(
            &mut session,
            vec![
                pdf("report.pdf"),
                FileCandidate::new("broken.zip", MB, "application/zip"),
            ],
        );

        let effects =
            reduce_upload(&mut session, UploadAction::BeginCommit { parent_id: None }).expect("commit");
        let creates: Vec<_> = effects
            .into_iter()
            .filter_map(|effect| match effect {
                UploadEffect::IssueCreate {
                    id,
                    request,
                    cancel,
                } => Some(settle_create(&api, id, request, cancel)),
                _ => None,
            })
            .collect();
        assert_eq!(creates.len(), 2);
        let settled = block_on(join_all(creates));

        let mut removals = Vec::new();
        let mut finished = None;
        for action in settled {
            for effect in reduce_upload(&mut session, action).expect("settle") {
                match effect {
                    UploadEffect::ScheduleRemoval { id } => removals.push(id),
                    UploadEffect::CommitFinished(summary) => finished = Some(summary),
                    other => panic!("unexpected effect {other:?}"),
                }
            }
        }
        for id in removals {
            reduce_upload(&mut session, UploadAction::FinishRemoval { id }).expect("remove");
        }

        let summary = finished.expect("save finished");
        assert_eq!(
            summary,
            CommitSummary {
                succeeded: 1,
                failed: 1,
                cancelled: 0,
            }
        );
        assert!(!summary.follow_up().close_dialog);
        assert!(summary.follow_up().refresh_listing);
        assert_eq!(
            ToastContent::from_commit(&summary).title,
            "Failed to upload some files"
        );
        assert!(!session.saving);
        assert_eq!(session.files.len(), 1);
        let failed = &session.files[0];
        assert_eq!(failed.file.name, "broken.zip");
        assert_eq!(failed.status, UploadStatus::Error);
        assert_eq!(failed.error_message.as_deref(), Some("Quota exceeded"));
        assert_eq!(status_text(failed), "Quota exceeded");

        let stored: Vec<_> = api.documents().into_iter().map(|doc| doc.name).collect();
        assert_eq!(stored, vec!["report.pdf".to_string()]);
    }
}
