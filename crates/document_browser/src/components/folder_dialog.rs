//! "Add new folder" trigger and dialog.

use document_api::DocumentId;
use leptos::ev::KeyboardEvent;
use leptos::*;
use system_ui::{Button, ButtonVariant, FieldGroup, IconName, Modal, ModalFooter, TextField};

use crate::{
    context::use_browser,
    creation::{create_folder, FolderForm},
    toast::ToastContent,
};

#[component]
/// Button opening the folder creation dialog for the current folder.
pub fn FolderDialog(
    /// Folder the new folder is created in.
    parent_id: Signal<Option<DocumentId>>,
    /// Display name of that folder.
    dir_name: Signal<String>,
) -> impl IntoView {
    let browser = use_browser();
    let form = create_rw_signal(FolderForm::default());
    let open = Signal::derive(move || form.with(|form| form.open));
    let creating = Signal::derive(move || form.with(|form| form.creating));
    let name = Signal::derive(move || form.with(|form| form.name.clone()));

    let close = move || {
        form.update(|form| {
            form.request_close();
        });
    };

    let submit = move || {
        let Some(request) = form
            .try_update(|form| form.begin_create(parent_id.get_untracked()))
            .flatten()
        else {
            return;
        };
        let api = browser.api();
        spawn_local(async move {
            let outcome = create_folder(api.as_ref(), &request.name, request.parent_id).await;
            match &outcome {
                Ok(folder) => {
                    logging::log!("folder {} created", folder.id);
                    browser.notify(ToastContent::success("Folder created successfully."));
                    browser.refresh_listing();
                }
                Err(err) => {
                    logging::warn!("folder create failed: {err}");
                    browser.notify(ToastContent::from_api_error(err));
                }
            }
            form.update(|form| {
                form.finish_create(&outcome);
            });
        });
    };

    view! {
        <Button on_click=Callback::new(move |_| form.update(FolderForm::open))>
            "Add new folder"
        </Button>
        <Modal
            open=open
            title="Create folder"
            description=Signal::derive(move || format!("Create a new folder in {} directory", dir_name.get()))
            on_dismiss=Callback::new(move |_| close())
        >
            <FieldGroup title="Folder name">
                <TextField
                    name="folder-name"
                    placeholder="Folder name"
                    aria_label="Folder name"
                    leading_icon=IconName::Folder
                    value=name
                    disabled=creating
                    on_input=Callback::new(move |ev: web_sys::Event| {
                        let value = event_target_value(&ev);
                        form.update(|form| form.name = value);
                    })
                    on_keydown=Callback::new(move |ev: KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit();
                        }
                    })
                />
            </FieldGroup>
            <ModalFooter>
                <Button disabled=creating on_click=Callback::new(move |_| close())>
                    "Cancel"
                </Button>
                <Button
                    variant=ButtonVariant::Primary
                    disabled=creating
                    on_click=Callback::new(move |_| submit())
                >
                    {move || if creating.get() { "Creating..." } else { "Create" }}
                </Button>
            </ModalFooter>
        </Modal>
    }
}
