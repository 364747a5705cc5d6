//! Listing table and its loading skeleton.

use std::time::Duration;

use document_api::{Document, DocumentId};
use leptos::ev::MouseEvent;
use leptos::*;
use system_ui::{CheckboxField, DataTable, EmptyState, Icon, IconButton, IconName, IconSize, Skeleton};

use crate::{
    format::{format_date, format_file_size_cell},
    navigation::NavigationState,
    table::{
        default_columns, sort_documents, ClickOutcome, Column, ColumnId, SortOrder,
        TableState, CLICK_DISAMBIGUATION_MS,
    },
};

fn sort_icon(order: Option<SortOrder>) -> IconName {
    match order {
        Some(SortOrder::Ascending) => IconName::SortAscending,
        Some(SortOrder::Descending) => IconName::SortDescending,
        None => IconName::SortNone,
    }
}

fn handle_row_click(table: RwSignal<TableState>, document: Document, on_activate: Callback<Document>) {
    let Some(outcome) = table.try_update(|state| state.clicks.click(document.id)) else {
        return;
    };
    match outcome {
        ClickOutcome::Activate(_) => on_activate.call(document),
        ClickOutcome::Pending {
            generation,
            flushed,
        } => {
            if let Some(row) = flushed {
                table.update(|state| state.selection.toggle(row));
            }
            set_timeout(
                move || {
                    table.update(|state| {
                        if let Some(row) = state.clicks.fire(generation) {
                            state.selection.toggle(row);
                        }
                    });
                },
                Duration::from_millis(CLICK_DISAMBIGUATION_MS),
            );
        }
    }
}

#[component]
/// Sortable, selectable document table for one listing page.
pub fn DocumentTable(
    /// Rows in server order.
    documents: Vec<Document>,
    /// Current navigation state (complete-path mode).
    navigation: Memo<NavigationState>,
    /// Sort, selection, and click state; reset by the owner on every new data set.
    table: RwSignal<TableState>,
    /// Row activation (double click).
    on_activate: Callback<Document>,
) -> impl IntoView {
    let loaded_ids: Vec<DocumentId> = documents.iter().map(|doc| doc.id).collect();
    let total = loaded_ids.len();
    let loaded_ids = store_value(loaded_ids);
    let documents = store_value(documents);
    let rows = create_memo(move |_| {
        let sort = table.with(|state| state.sort);
        documents.with_value(|docs| sort_documents(docs, sort))
    });

    let all_selected = Signal::derive(move || table.with(|state| state.selection.is_all_selected(total)));
    let indeterminate = Signal::derive(move || table.with(|state| state.selection.is_indeterminate(total)));
    let on_toggle_all = Callback::new(move |_checked: bool| {
        table.update(|state| loaded_ids.with_value(|ids| state.selection.toggle_all(ids)));
    });

    if total == 0 {
        return view! {
            <EmptyState icon=IconName::Folder layout_class="listing-empty">
                "This folder is empty."
            </EmptyState>
        }
        .into_view();
    }

    view! {
        <DataTable aria_label="Documents" layout_class="document-table">
            <thead>
                <tr>
                    <th class="document-table-select" scope="col">
                        <CheckboxField
                            aria_label="Select all rows"
                            checked=all_selected
                            indeterminate=indeterminate
                            on_toggle=on_toggle_all
                        />
                    </th>
                    {default_columns()
                        .into_iter()
                        .map(|column| view! { <ColumnHeader column=column table=table /> })
                        .collect_view()}
                </tr>
            </thead>
            <tbody>
                <For each=move || rows.get() key=|doc: &Document| doc.id let:doc>
                    <DocumentRow document=doc navigation=navigation table=table on_activate=on_activate />
                </For>
            </tbody>
        </DataTable>
    }
    .into_view()
}

#[component]
fn ColumnHeader(column: Column, table: RwSignal<TableState>) -> impl IntoView {
    let Some(key) = column.sort_key else {
        return view! {
            <th scope="col" data-ui-column=column_token(column.id)>{column.label}</th>
        }
        .into_view();
    };

    let order = Signal::derive(move || table.with(|state| state.order_for(key)));
    let aria_sort = move || order.get().map(SortOrder::aria_token).unwrap_or("none");

    view! {
        <th scope="col" data-ui-column=column_token(column.id) aria-sort=aria_sort>
            <button
                type="button"
                class="document-table-sort"
                data-ui-sort-key=key.token()
                on:click=move |_| table.update(|state| state.sort_by(key))
            >
                {column.label}
                {move || view! { <Icon icon=sort_icon(order.get()) size=IconSize::Sm /> }}
            </button>
        </th>
    }
    .into_view()
}

fn column_token(id: ColumnId) -> &'static str {
    match id {
        ColumnId::Name => "name",
        ColumnId::CreatedBy => "created-by",
        ColumnId::Date => "date",
        ColumnId::FileSize => "file-size",
        ColumnId::Actions => "actions",
    }
}

#[component]
fn DocumentRow(
    document: Document,
    navigation: Memo<NavigationState>,
    table: RwSignal<TableState>,
    on_activate: Callback<Document>,
) -> impl IntoView {
    let id = document.id;
    let selected = Signal::derive(move || table.with(|state| state.selection.contains(id)));
    let icon = if document.is_folder() {
        IconName::Folder
    } else {
        IconName::File
    };
    let label = {
        let document = document.clone();
        move || navigation.with(|state| state.display_name(&document).to_string())
    };
    let date = format_date(&document.created_at);
    let size = format_file_size_cell(document.file_size);
    let kind = document.kind.token();
    let document = store_value(document);

    view! {
        <tr
            class="document-row"
            data-ui-kind=kind
            data-ui-selected=move || if selected.get() { "true" } else { "false" }
            aria-selected=move || selected.get().to_string()
            on:click=move |_| handle_row_click(table, document.get_value(), on_activate)
        >
            <td class="document-table-select">
                <CheckboxField
                    aria_label="Select row"
                    checked=selected
                    on_toggle=Callback::new(move |_| table.update(|state| state.selection.toggle(id)))
                />
            </td>
            <td data-ui-column="name">
                <span class="document-name">
                    <Icon icon=icon size=IconSize::Md />
                    <span>{label}</span>
                </span>
            </td>
            <td data-ui-column="created-by">"-"</td>
            <td data-ui-column="date">{date}</td>
            <td data-ui-column="file-size">{size}</td>
            <td data-ui-column="actions">
                <IconButton
                    icon=IconName::More
                    aria_label="More actions"
                    on_click=Callback::new(|ev: MouseEvent| ev.stop_propagation())
                />
            </td>
        </tr>
    }
}

#[component]
/// Placeholder rows shown while a listing request is in flight.
pub fn TableSkeleton(
    /// Number of placeholder rows.
    #[prop(default = 10)]
    rows: usize,
) -> impl IntoView {
    view! {
        <DataTable aria_label="Loading documents" aria_busy=true layout_class="document-table">
            <thead>
                <tr>
                    <th class="document-table-select"></th>
                    {default_columns()
                        .into_iter()
                        .map(|column| view! { <th scope="col">{column.label}</th> })
                        .collect_view()}
                </tr>
            </thead>
            <tbody>
                {(0..rows)
                    .map(|_| {
                        view! {
                            <tr class="document-row" data-ui-state="loading">
                                <td><Skeleton width="1rem" /></td>
                                <td><Skeleton width="60%" /></td>
                                <td><Skeleton width="3rem" /></td>
                                <td><Skeleton width="5rem" /></td>
                                <td><Skeleton width="4rem" /></td>
                                <td></td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </DataTable>
    }
}
