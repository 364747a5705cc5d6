use super::*;

#[component]
/// Raised panel surface holding the listing table and pager.
pub fn Panel(
    #[prop(default = LayoutPadding::None)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-panel", layout_class)
            data-ui-primitive="true"
            data-ui-kind="panel"
            data-ui-slot=ui_slot
            data-ui-padding=padding.token()
            aria-label=aria_label
        >
            {children()}
        </section>
    }
}

#[component]
/// Shared text primitive.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Shared page/dialog heading.
pub fn Heading(
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <h1
            class=merge_layout_class("ui-heading", layout_class)
            id=id
            data-ui-primitive="true"
            data-ui-kind="heading"
            data-ui-tone=tone.token()
        >
            {children()}
        </h1>
    }
}

#[component]
/// Empty/error state content block.
pub fn EmptyState(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(default = TextTone::Secondary)] tone: TextTone,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            data-ui-primitive="true"
            data-ui-kind="empty-state"
            data-ui-tone=tone.token()
        >
            {icon.map(|icon| view! { <Icon icon=icon size=IconSize::Lg /> })}
            {children()}
        </div>
    }
}

#[component]
/// Pulsing placeholder bar shown while data loads.
pub fn Skeleton(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = "100%")] width: &'static str,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-skeleton", layout_class)
            aria-hidden="true"
            style=format!("width: {width}")
            data-ui-primitive="true"
            data-ui-kind="skeleton"
        ></span>
    }
}

#[component]
/// Shared table primitive.
pub fn DataTable(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] aria_busy: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="ui-data-table-scroll" data-ui-primitive="true" data-ui-kind="data-table-scroll">
            <table
                class=merge_layout_class("ui-data-table", layout_class)
                role="grid"
                aria-label=aria_label
                aria-busy=move || bool_token(aria_busy.get())
                data-ui-primitive="true"
                data-ui-kind="data-table"
            >
                {children()}
            </table>
        </div>
    }
}
