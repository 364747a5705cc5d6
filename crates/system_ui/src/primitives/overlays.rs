use super::*;

#[component]
/// Modal dialog overlay.
///
/// `on_dismiss` fires for backdrop clicks, the close button, and Escape; the owner decides
/// whether to honor it (for example, refusing while a request is in flight).
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(optional, into)] description: MaybeSignal<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
    children: ChildrenFn,
) -> impl IntoView {
    let title = store_value(title);
    let description = Signal::derive(move || description.get());
    let children = store_value(children);
    let dismiss = move || {
        if let Some(on_dismiss) = on_dismiss.as_ref() {
            on_dismiss.call(());
        }
    };

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div
                class="ui-modal-backdrop"
                data-ui-primitive="true"
                data-ui-kind="modal-backdrop"
                on:click=move |_| dismiss()
            >
                <div
                    class=merge_layout_class("ui-modal", layout_class)
                    role="dialog"
                    aria-modal="true"
                    aria-label=title.get_value()
                    tabindex="-1"
                    data-ui-primitive="true"
                    data-ui-kind="modal"
                    on:click=move |ev: MouseEvent| ev.stop_propagation()
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            dismiss();
                        }
                    }
                >
                    <header data-ui-slot="header">
                        <div data-ui-slot="copy">
                            <h2 data-ui-slot="title">{title.get_value()}</h2>
                            <Show when=move || !description.get().is_empty() fallback=|| ()>
                                <p data-ui-slot="description">{move || description.get()}</p>
                            </Show>
                        </div>
                        <IconButton
                            icon=IconName::Close
                            aria_label="Close"
                            on_click=Callback::new(move |_| dismiss())
                        />
                    </header>
                    <div data-ui-slot="body">{children.with_value(|children| children())}</div>
                </div>
            </div>
        </Show>
    }
}

#[component]
/// Right-aligned action row at the bottom of a [`Modal`].
pub fn ModalFooter(children: Children) -> impl IntoView {
    view! {
        <footer class="ui-modal-footer" data-ui-primitive="true" data-ui-kind="modal-footer">
            {children()}
        </footer>
    }
}
