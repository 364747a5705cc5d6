//! Toast stack rendered in the page corner.

use leptos::*;
use system_ui::{IconButton, IconName, Text, TextRole, TextTone};

use crate::{context::use_browser, toast::Toast};

#[component]
/// Visible toasts, newest last.
pub fn ToastStack() -> impl IntoView {
    let browser = use_browser();

    view! {
        <ol class="toast-stack" aria-live="polite">
            <For
                each=move || browser.toasts.with(|queue| queue.toasts().to_vec())
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let tone = match toast.content.kind {
                        crate::toast::ToastKind::Success => TextTone::Success,
                        crate::toast::ToastKind::Error => TextTone::Danger,
                    };
                    view! {
                        <li class="toast" role="status" data-ui-kind=toast.content.kind.token()>
                            <div class="toast-copy">
                                <Text role=TextRole::Label tone=tone>{toast.content.title}</Text>
                                {toast
                                    .content
                                    .description
                                    .map(|description| view! { <Text tone=TextTone::Secondary>{description}</Text> })}
                            </div>
                            <IconButton
                                icon=IconName::Close
                                aria_label="Dismiss notification"
                                on_click=Callback::new(move |_| browser.dismiss(id))
                            />
                        </li>
                    }
                }
            />
        </ol>
    }
}
