//! Document browser page composition.

mod breadcrumbs;
mod folder_dialog;
mod listing;
mod pager;
mod toasts;
mod upload_dialog;

use std::time::Duration;

use document_api::Document;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use leptos_router::{use_navigate, use_query_map, NavigateOptions};
use system_ui::{
    Button, ButtonVariant, Cluster, EmptyState, Heading, IconName, LayoutAlign, LayoutGap,
    LayoutJustify, Panel, Stack, Text, TextField, TextRole, TextTone,
};

pub use self::{
    breadcrumbs::Breadcrumbs,
    folder_dialog::FolderDialog,
    listing::{DocumentTable, TableSkeleton},
    pager::Pager,
    toasts::ToastStack,
    upload_dialog::UploadDialog,
};

use crate::{
    context::use_browser,
    error::BrowserError,
    navigation::{NavigationState, SEARCH_DEBOUNCE_MS},
    pagination::PagerModel,
    table::TableState,
};

#[component]
/// Full document browser page: header, breadcrumbs, listing table, pager, dialogs, and toasts.
///
/// Must be rendered inside a router and a [`crate::BrowserProvider`].
pub fn DocumentBrowser() -> impl IntoView {
    let browser = use_browser();
    let query = use_query_map();
    let navigation = create_memo(move |_| {
        query.with(|params| NavigationState::from_query(|key| params.get(key).cloned()))
    });

    let navigate = use_navigate();
    let go = Callback::new(move |next: NavigationState| {
        navigate(&next.to_url(), NavigateOptions::default());
    });

    let page_size = browser.page_size();
    let skeleton_rows = page_size as usize;
    let listing = create_local_resource(
        move || (navigation.get(), browser.refresh.get()),
        move |(state, _)| {
            let api = browser.api();
            async move {
                let request = state.list_request(page_size);
                api.list_documents(&request).await.map_err(|err| {
                    logging::warn!("document list failed: {err}");
                    BrowserError::from(err)
                })
            }
        },
    );

    let table = create_rw_signal(TableState::default());
    create_effect(move |_| {
        listing.with(|_| ());
        table.update(TableState::replace_data);
    });

    let on_activate = Callback::new(move |document: Document| {
        if document.is_folder() {
            go.call(navigation.get_untracked().enter_folder(&document));
        } else {
            logging::log!("open requested for file {}; file preview is not available", document.name);
        }
    });

    let parent_id = Signal::derive(move || navigation.with(|state| state.folder_path.current_folder_id()));
    let dir_name = Signal::derive(move || navigation.with(|state| state.folder_path.current_name()));

    view! {
        <div class="document-browser" data-ui-kind="document-browser">
            <Stack gap=LayoutGap::Lg layout_class="document-browser-inner">
                <header class="document-browser-header">
                    <Heading>"Documents"</Heading>
                    <Cluster justify=LayoutJustify::Between align=LayoutAlign::Center>
                        <SearchField navigation=navigation on_search=go />
                        <Cluster gap=LayoutGap::Sm>
                            <UploadDialog parent_id=parent_id dir_name=dir_name />
                            <FolderDialog parent_id=parent_id dir_name=dir_name />
                        </Cluster>
                    </Cluster>
                </header>
                <Breadcrumbs navigation=navigation on_navigate=go />
                <Panel aria_label="Documents">
                    <Suspense fallback=move || view! { <TableSkeleton rows=skeleton_rows /> }>
                        <ErrorBoundary fallback=move |errors| {
                            view! { <ListingError errors=errors on_home=Callback::new(move |_| go.call(NavigationState::root())) /> }
                        }>
                            {move || {
                                listing
                                    .get()
                                    .map(|result| {
                                        result.map(|page| {
                                            let pager = PagerModel::from_page(&page);
                                            let documents = page.data;
                                            view! {
                                                <DocumentTable
                                                    documents=documents
                                                    navigation=navigation
                                                    table=table
                                                    on_activate=on_activate
                                                />
                                                <Pager
                                                    model=pager
                                                    page_size=page_size
                                                    on_page=Callback::new(move |page| {
                                                        go.call(navigation.get_untracked().with_page(page))
                                                    })
                                                />
                                            }
                                        })
                                    })
                            }}
                        </ErrorBoundary>
                    </Suspense>
                </Panel>
            </Stack>
            <ToastStack />
        </div>
    }
}

#[component]
fn SearchField(navigation: Memo<NavigationState>, on_search: Callback<NavigationState>) -> impl IntoView {
    let applied = create_memo(move |_| navigation.with(|state| state.search.clone()));
    let input = create_rw_signal(applied.get_untracked().unwrap_or_default());
    create_effect(move |_| input.set(applied.get().unwrap_or_default()));

    let pending = store_value(None::<TimeoutHandle>);
    let on_input = Callback::new(move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        input.set(value.clone());
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
        let scheduled = set_timeout_with_handle(
            move || {
                let current = navigation.get_untracked();
                if current.search_changed(&value) {
                    on_search.call(current.with_search(&value));
                }
            },
            Duration::from_millis(SEARCH_DEBOUNCE_MS),
        );
        match scheduled {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(err) => logging::warn!("search debounce timer failed: {err:?}"),
        }
    });
    on_cleanup(move || {
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
    });

    view! {
        <TextField
            layout_class="document-search"
            placeholder="Search"
            aria_label="Search documents"
            input_type="search"
            leading_icon=IconName::Search
            value=input
            on_input=on_input
        />
    }
}

#[component]
fn ListingError(errors: RwSignal<Errors>, on_home: Callback<()>) -> impl IntoView {
    let browser = use_browser();
    let messages = move || {
        errors.with(|errors| {
            errors
                .iter()
                .map(|(_, err)| err.to_string())
                .collect::<Vec<_>>()
        })
    };

    view! {
        <EmptyState icon=IconName::Alert tone=TextTone::Danger layout_class="listing-error">
            <Text role=TextRole::Title>"Something went wrong"</Text>
            <Text tone=TextTone::Secondary>
                "We encountered an error while loading your documents. Please try again."
            </Text>
            <ul class="listing-error-details">
                {move || messages().into_iter().map(|message| view! { <li>{message}</li> }).collect_view()}
            </ul>
            <Cluster gap=LayoutGap::Sm justify=LayoutJustify::Center>
                <Button
                    variant=ButtonVariant::Primary
                    leading_icon=IconName::Refresh
                    on_click=Callback::new(move |_| browser.refresh_listing())
                >
                    "Try again"
                </Button>
                <Button leading_icon=IconName::Home on_click=Callback::new(move |_| on_home.call(()))>
                    "Go home"
                </Button>
            </Cluster>
        </EmptyState>
    }
}
