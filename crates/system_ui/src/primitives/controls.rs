use super::*;

#[component]
/// Shared button primitive with an optional leading icon.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] aria_current: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            aria-label=move || optional_attr(aria_label.get())
            aria-current=move || optional_attr(aria_current.get())
            title=move || optional_attr(title.get())
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-state=move || if selected.get() { "selected" } else { "idle" }
            data-ui-selected=move || bool_token(selected.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {leading_icon.map(|icon| view! { <Icon icon=icon size=IconSize::Sm /> })}
            {children()}
        </button>
    }
}

#[component]
/// Compact icon-only button for row actions and dismiss controls.
pub fn IconButton(
    icon: IconName,
    #[prop(default = ButtonVariant::Quiet)] variant: ButtonVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let label = Signal::derive(move || optional_attr(aria_label.get()));

    view! {
        <button
            type="button"
            class=merge_layout_class("ui-icon-button", layout_class)
            aria-label=move || label.get()
            title=move || label.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="icon-button"
            data-ui-variant=variant.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Icon icon=icon size=IconSize::Sm />
        </button>
    }
}

#[component]
/// Labeled field wrapper that keeps copy and control structure on the primitive layer.
pub fn FieldGroup(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <label
            class=merge_layout_class("ui-field-group", layout_class)
            data-ui-primitive="true"
            data-ui-kind="field-group"
        >
            <span data-ui-slot="copy">
                {title.map(|title| view! { <span data-ui-slot="title">{title}</span> })}
                {description.map(|description| view! { <span data-ui-slot="description">{description}</span> })}
            </span>
            <span data-ui-slot="control">{children()}</span>
        </label>
    }
}

#[component]
/// Shared text input primitive with an optional leading icon.
pub fn TextField(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-field-shell", layout_class)
            data-ui-primitive="true"
            data-ui-kind="field-shell"
            data-ui-has-icon=bool_token(leading_icon.is_some())
        >
            {leading_icon.map(|icon| view! { <Icon icon=icon size=IconSize::Sm /> })}
            <input
                class="ui-field"
                id=id
                name=name
                placeholder=placeholder
                aria-label=aria_label
                autocomplete="off"
                type=input_type.unwrap_or("text")
                prop:value=move || value.get()
                disabled=move || disabled.get()
                data-ui-primitive="true"
                data-ui-kind="text-field"
                data-ui-disabled=move || bool_token(disabled.get())
                on:input=move |ev| {
                    if let Some(on_input) = on_input.as_ref() {
                        on_input.call(ev);
                    }
                }
                on:keydown=move |ev| {
                    if let Some(on_keydown) = on_keydown.as_ref() {
                        on_keydown.call(ev);
                    }
                }
            />
        </span>
    }
}

#[component]
/// Shared checkbox with tri-state (`indeterminate`) support.
///
/// Clicks never bubble to the containing row so row-level click handling stays separate.
pub fn CheckboxField(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] indeterminate: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_toggle: Option<Callback<bool>>,
) -> impl IntoView {
    view! {
        <input
            class=merge_layout_class("ui-checkbox", layout_class)
            type="checkbox"
            aria-label=move || optional_attr(aria_label.get())
            aria-checked=move || {
                if indeterminate.get() {
                    "mixed"
                } else {
                    bool_token(checked.get())
                }
            }
            prop:checked=move || checked.get()
            prop:indeterminate=move || indeterminate.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="checkbox"
            data-ui-selected=move || bool_token(checked.get())
            on:click=move |ev: MouseEvent| ev.stop_propagation()
            on:dblclick=move |ev: MouseEvent| ev.stop_propagation()
            on:change=move |ev| {
                if let Some(on_toggle) = on_toggle.as_ref() {
                    on_toggle.call(event_target_checked(&ev));
                }
            }
        />
    }
}

#[component]
/// Shared linear progress indicator.
pub fn ProgressBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    max: u16,
    #[prop(into)] value: MaybeSignal<u16>,
) -> impl IntoView {
    let capped = move || value.get().min(max);

    view! {
        <progress
            class=merge_layout_class("ui-progress", layout_class)
            max=max
            value=capped
            data-ui-primitive="true"
            data-ui-kind="progress"
            data-ui-slot=ui_slot
            data-ui-value=capped
            data-ui-max=max
        ></progress>
    }
}
