//! "Upload files" trigger, dropzone, and tracked file list.

use std::{rc::Rc, time::Duration};

use document_api::{CancellationToken, CreateDocumentRequest, DocumentApi, DocumentId};
use futures::future::join_all;
use leptos::ev::{DragEvent, KeyboardEvent, MouseEvent};
use leptos::*;
use system_ui::{
    Button, ButtonVariant, Icon, IconButton, IconName, IconSize, LayoutGap, Modal, ModalFooter,
    ProgressBar, Stack, Text, TextRole, TextTone,
};

use crate::{
    context::{use_browser, BrowserContext},
    toast::ToastContent,
    upload::{
        accept_attribute, drag_type_acceptable, reduce_upload, settle_create, size_text,
        status_text, FileCandidate, UploadAction, UploadEffect, UploadId, UploadSession,
        UploadStatus, VANISH_DELAY_MS,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragState {
    Idle,
    Active,
    Rejected,
}

impl DragState {
    fn token(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Active => "drag-active",
            Self::Rejected => "drag-reject",
        }
    }
}

fn candidates_from(list: Option<web_sys::FileList>) -> Vec<FileCandidate> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.get(index))
        .map(|file| FileCandidate::new(file.name(), file.size() as u64, file.type_()))
        .collect()
}

fn drag_state_for(event: &DragEvent) -> DragState {
    let Some(transfer) = event.data_transfer() else {
        return DragState::Active;
    };
    let items = transfer.items();
    let rejected = (0..items.length())
        .filter_map(|index| items.get(index))
        .filter(|item| item.kind() == "file")
        .any(|item| !drag_type_acceptable(&item.type_()));
    if rejected {
        DragState::Rejected
    } else {
        DragState::Active
    }
}

type PendingCreate = (UploadId, CreateDocumentRequest, CancellationToken);

fn issue_creates(api: Rc<dyn DocumentApi>, creates: Vec<PendingCreate>, dispatch: Callback<UploadAction>) {
    spawn_local(async move {
        let uploads = creates.into_iter().map(|(id, request, cancel)| {
            let api = Rc::clone(&api);
            async move {
                dispatch.call(settle_create(api.as_ref(), id, request, cancel).await);
            }
        });
        join_all(uploads).await;
    });
}

fn install_effect_executor(
    browser: BrowserContext,
    effects: RwSignal<Vec<UploadEffect>>,
    dispatch: Callback<UploadAction>,
    open: RwSignal<bool>,
) {
    create_effect(move |_| {
        let queued = effects.get();
        if queued.is_empty() {
            return;
        }
        effects.set(Vec::new());

        let mut creates = Vec::new();
        for effect in queued {
            match effect {
                UploadEffect::ReportRejections(rejections) => {
                    browser.notify(ToastContent::from_rejections(&rejections));
                }
                UploadEffect::IssueCreate {
                    id,
                    request,
                    cancel,
                } => creates.push((id, request, cancel)),
                UploadEffect::ScheduleRemoval { id } => set_timeout(
                    move || dispatch.call(UploadAction::FinishRemoval { id }),
                    Duration::from_millis(VANISH_DELAY_MS),
                ),
                UploadEffect::CommitFinished(summary) => {
                    browser.notify(ToastContent::from_commit(&summary));
                    let follow_up = summary.follow_up();
                    if follow_up.refresh_listing {
                        browser.refresh_listing();
                    }
                    if follow_up.close_dialog {
                        dispatch.call(UploadAction::Reset);
                        open.set(false);
                    }
                }
            }
        }
        if !creates.is_empty() {
            issue_creates(browser.api(), creates, dispatch);
        }
    });
}

#[component]
/// Button opening the upload dialog for the current folder.
pub fn UploadDialog(
    /// Folder files are created in.
    parent_id: Signal<Option<DocumentId>>,
    /// Display name of that folder.
    dir_name: Signal<String>,
) -> impl IntoView {
    let browser = use_browser();
    let session = create_rw_signal(UploadSession::new(browser.upload_limits.get_value()));
    let effects = create_rw_signal(Vec::<UploadEffect>::new());
    let open = create_rw_signal(false);

    let dispatch = Callback::new(move |action: UploadAction| {
        let previous = session.get_untracked();
        let mut next = previous.clone();
        match reduce_upload(&mut next, action) {
            Ok(new_effects) => {
                if next != previous {
                    session.set(next);
                }
                if !new_effects.is_empty() {
                    effects.update(|queue| queue.extend(new_effects));
                }
            }
            Err(err) => logging::warn!("upload action ignored: {err}"),
        }
    });
    install_effect_executor(browser, effects, dispatch, open);

    let saving = Signal::derive(move || session.with(|session| session.saving));
    let close = move || {
        if session.with_untracked(|session| session.saving) {
            return;
        }
        dispatch.call(UploadAction::Reset);
        open.set(false);
    };
    let save = move || {
        dispatch.call(UploadAction::BeginCommit {
            parent_id: parent_id.get_untracked(),
        });
    };

    view! {
        <Button leading_icon=IconName::Upload on_click=Callback::new(move |_| open.set(true))>
            "Upload files"
        </Button>
        <Modal
            open=open
            title="Upload files"
            description=Signal::derive(move || format!("Upload new files in {} directory", dir_name.get()))
            layout_class="upload-dialog"
            on_dismiss=Callback::new(move |_| close())
        >
            <Stack gap=LayoutGap::Lg>
                <Dropzone session=session dispatch=dispatch />
                <UploadFileList session=session dispatch=dispatch />
            </Stack>
            <ModalFooter>
                <Button disabled=saving on_click=Callback::new(move |_| close())>
                    "Cancel"
                </Button>
                <Button
                    variant=ButtonVariant::Primary
                    disabled=saving
                    on_click=Callback::new(move |_| save())
                >
                    {move || if saving.get() { "Saving..." } else { "Save changes" }}
                </Button>
            </ModalFooter>
        </Modal>
    }
}

#[component]
fn Dropzone(session: RwSignal<UploadSession>, dispatch: Callback<UploadAction>) -> impl IntoView {
    let drag = create_rw_signal(DragState::Idle);
    let input_ref = create_node_ref::<html::Input>();
    let limits = session.with_untracked(|session| session.limits);
    let remaining = move || session.with(UploadSession::remaining);

    let add_files = move |list: Option<web_sys::FileList>| {
        let candidates = candidates_from(list);
        if !candidates.is_empty() {
            dispatch.call(UploadAction::FilesDropped(candidates));
        }
    };
    let browse = move || {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div class="upload-intro">
            <Text tone=TextTone::Secondary>"Drag and drop your files here or click to browse"</Text>
            <Text role=TextRole::Caption tone=TextTone::Secondary>
                {format!(
                    "Supported formats: IMAGES(JPG, JPEG, ETC..), PDF, ZIP, STL, HTML \u{2022} Max size: {}MB per file",
                    limits.max_size_mb
                )}
            </Text>
        </div>
        <div
            class="upload-dropzone"
            role="button"
            tabindex="0"
            aria-label="Choose files to upload"
            data-ui-state=move || drag.get().token()
            on:click=move |_| browse()
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Enter" || ev.key() == " " {
                    ev.prevent_default();
                    browse();
                }
            }
            on:dragenter=move |ev: DragEvent| {
                ev.prevent_default();
                drag.set(drag_state_for(&ev));
            }
            on:dragover=move |ev: DragEvent| {
                ev.prevent_default();
                drag.set(drag_state_for(&ev));
            }
            on:dragleave=move |_| drag.set(DragState::Idle)
            on:drop=move |ev: DragEvent| {
                ev.prevent_default();
                drag.set(DragState::Idle);
                add_files(ev.data_transfer().and_then(|transfer| transfer.files()));
            }
        >
            <input
                node_ref=input_ref
                class="upload-input"
                type="file"
                multiple=true
                hidden=true
                accept=accept_attribute()
                on:click=|ev: MouseEvent| ev.stop_propagation()
                on:change=move |ev| {
                    let input = event_target::<web_sys::HtmlInputElement>(&ev);
                    add_files(input.files());
                    input.set_value("");
                }
            />
            {move || {
                let icon = if drag.get() == DragState::Rejected {
                    IconName::Alert
                } else {
                    IconName::Upload
                };
                view! { <Icon icon=icon size=IconSize::Lg /> }
            }}
            {move || match drag.get() {
                DragState::Idle => view! {
                    <Text role=TextRole::Label>"Drop your files here, or browse"</Text>
                    <Text role=TextRole::Caption tone=TextTone::Secondary>
                        {move || format!("{} of {} files remaining", remaining(), limits.max_files)}
                    </Text>
                }
                .into_view(),
                DragState::Active => view! {
                    <Text role=TextRole::Label tone=TextTone::Accent>"Drop the files here..."</Text>
                }
                .into_view(),
                DragState::Rejected => view! {
                    <Text role=TextRole::Label tone=TextTone::Danger>"Some files are not supported"</Text>
                }
                .into_view(),
            }}
        </div>
    }
}

#[component]
fn UploadFileList(session: RwSignal<UploadSession>, dispatch: Callback<UploadAction>) -> impl IntoView {
    let ids = move || {
        session.with(|session| {
            session
                .files
                .iter()
                .map(|file| file.id.clone())
                .collect::<Vec<_>>()
        })
    };

    view! {
        <Show when=move || session.with(|session| !session.files.is_empty()) fallback=|| ()>
            <Stack gap=LayoutGap::Sm layout_class="upload-file-list">
                <Text role=TextRole::Title>
                    {move || format!("Selected Files ({})", session.with(|session| session.files.len()))}
                </Text>
                <ul class="upload-rows">
                    <For each=ids key=|id: &UploadId| id.clone() let:id>
                        <UploadRow id=id session=session dispatch=dispatch />
                    </For>
                </ul>
            </Stack>
        </Show>
    }
}

#[component]
fn UploadRow(id: UploadId, session: RwSignal<UploadSession>, dispatch: Callback<UploadAction>) -> impl IntoView {
    let row = {
        let id = id.clone();
        create_memo(move |_| session.with(|session| session.file(&id).cloned()))
    };
    let status = move || {
        row.with(|file| file.as_ref().map(|file| file.status))
            .unwrap_or(UploadStatus::Pending)
    };
    let vanishing = move || row.with(|file| file.as_ref().map_or(true, |file| file.vanishing));
    let status_line = move || row.with(|file| file.as_ref().map(status_text).unwrap_or_default());
    let progress = Signal::derive(move || {
        row.with(|file| file.as_ref().map_or(0, |file| u16::from(file.progress)))
    });
    let name = row.with_untracked(|file| {
        file.as_ref()
            .map(|file| file.file.name.clone())
            .unwrap_or_default()
    });
    let size = row.with_untracked(|file| file.as_ref().map(size_text).unwrap_or_default());
    let remove_id = store_value(id);

    view! {
        <li
            class="upload-row"
            data-ui-status=move || status().token()
            data-ui-vanishing=move || vanishing().to_string()
        >
            <Icon icon=IconName::File size=IconSize::Lg />
            <div class="upload-row-body">
                <div class="upload-row-head">
                    <Text role=TextRole::Label>{name}</Text>
                    <span class="upload-row-actions">
                        {move || {
                            let icon = match status() {
                                UploadStatus::Success => Some(IconName::Check),
                                UploadStatus::Error => Some(IconName::Alert),
                                UploadStatus::Pending | UploadStatus::Uploading => None,
                            };
                            icon.map(|icon| view! { <Icon icon=icon size=IconSize::Sm /> })
                        }}
                        <IconButton
                            icon=IconName::Close
                            aria_label="Remove file"
                            on_click=Callback::new(move |_| {
                                dispatch.call(UploadAction::RemoveFile {
                                    id: remove_id.get_value(),
                                })
                            })
                        />
                    </span>
                </div>
                <div class="upload-row-meta">
                    <Text role=TextRole::Caption tone=TextTone::Secondary>{size}</Text>
                    <span class="upload-row-status" data-ui-status=move || status().token()>
                        {status_line}
                    </span>
                </div>
                <Show when=move || status() == UploadStatus::Uploading fallback=|| ()>
                    <ProgressBar max=100 value=progress ui_slot="upload-progress" />
                </Show>
            </div>
        </li>
    }
}
