//! Listing table state: column model, sort cycling, row selection, and click disambiguation.

use std::{cmp::Ordering, collections::BTreeSet};

use document_api::{Document, DocumentId};

/// Quiet period after a row click before it is treated as a selection toggle.
pub const CLICK_DISAMBIGUATION_MS: u64 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Sortable document fields.
pub enum SortKey {
    /// Document name, locale-aware.
    Name,
    /// Creation timestamp.
    CreatedAt,
}

impl SortKey {
    /// Stable token used in DOM attributes.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CreatedAt => "createdAt",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Sort direction.
pub enum SortOrder {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortOrder {
    /// `aria-sort` token.
    pub const fn aria_token(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Active sort. At most one column is sorted at a time.
pub struct SortSpec {
    /// Sorted column.
    pub key: SortKey,
    /// Direction.
    pub order: SortOrder,
}

/// Advances the sort cycle for `key`: unsorted, ascending, descending, unsorted.
///
/// Clicking a column other than the sorted one starts that column at ascending.
pub fn cycle_sort(current: Option<SortSpec>, key: SortKey) -> Option<SortSpec> {
    match current {
        Some(spec) if spec.key == key => match spec.order {
            SortOrder::Ascending => Some(SortSpec {
                key,
                order: SortOrder::Descending,
            }),
            SortOrder::Descending => None,
        },
        _ => Some(SortSpec {
            key,
            order: SortOrder::Ascending,
        }),
    }
}

/// Locale-aware string comparison.
#[cfg(target_arch = "wasm32")]
pub fn compare_text(left: &str, right: &str) -> Ordering {
    let left = js_sys::JsString::from(left);
    left.locale_compare(right, &js_sys::Array::new(), &js_sys::Object::new())
        .cmp(&0)
}

/// Locale-aware string comparison (case-insensitive fallback off the browser).
#[cfg(not(target_arch = "wasm32"))]
pub fn compare_text(left: &str, right: &str) -> Ordering {
    left.to_lowercase()
        .cmp(&right.to_lowercase())
        .then_with(|| left.cmp(right))
}

/// Returns `documents` ordered by `sort`; `None` keeps server order.
pub fn sort_documents(documents: &[Document], sort: Option<SortSpec>) -> Vec<Document> {
    let mut rows = documents.to_vec();
    let Some(spec) = sort else {
        return rows;
    };
    rows.sort_by(|a, b| {
        let ordering = match spec.key {
            SortKey::Name => compare_text(&a.name, &b.name),
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        match spec.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    rows
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Listing columns after the selection checkbox.
pub enum ColumnId {
    /// Icon and name.
    Name,
    /// Owner placeholder.
    CreatedBy,
    /// Creation date.
    Date,
    /// Human-readable size.
    FileSize,
    /// Row menu.
    Actions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Column header definition.
pub struct Column {
    /// Column identity.
    pub id: ColumnId,
    /// Header label.
    pub label: &'static str,
    /// Sort key when the column is sortable.
    pub sort_key: Option<SortKey>,
}

/// Listing columns in display order.
pub fn default_columns() -> Vec<Column> {
    vec![
        Column {
            id: ColumnId::Name,
            label: "Name",
            sort_key: Some(SortKey::Name),
        },
        Column {
            id: ColumnId::CreatedBy,
            label: "Created by",
            sort_key: None,
        },
        Column {
            id: ColumnId::Date,
            label: "Date",
            sort_key: Some(SortKey::CreatedAt),
        },
        Column {
            id: ColumnId::FileSize,
            label: "File size",
            sort_key: None,
        },
        Column {
            id: ColumnId::Actions,
            label: "",
            sort_key: None,
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Selected rows of the current page.
pub struct Selection {
    selected: BTreeSet<DocumentId>,
    /// Partial selection replaced by the last select-all, restored by the next one.
    before_select_all: Option<BTreeSet<DocumentId>>,
}

impl Selection {
    /// Flips one row.
    pub fn toggle(&mut self, id: DocumentId) {
        self.before_select_all = None;
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Selects every loaded row. When all are already selected, restores the partial selection
    /// the previous select-all replaced, or clears the selection if there was none.
    pub fn toggle_all(&mut self, loaded: &[DocumentId]) {
        if self.is_all_selected(loaded.len()) {
            self.selected = self.before_select_all.take().unwrap_or_default();
        } else {
            let previous = std::mem::replace(&mut self.selected, loaded.iter().copied().collect());
            self.before_select_all = (!previous.is_empty()).then_some(previous);
        }
    }

    /// Whether `id` is selected.
    pub fn contains(&self, id: DocumentId) -> bool {
        self.selected.contains(&id)
    }

    /// Number of selected rows.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Header checkbox checked state.
    pub fn is_all_selected(&self, total: usize) -> bool {
        total > 0 && self.selected.len() >= total
    }

    /// Header checkbox mixed state: `0 < selected < total`.
    pub fn is_indeterminate(&self, total: usize) -> bool {
        !self.selected.is_empty() && self.selected.len() < total
    }

    /// Clears the selection.
    pub fn reset(&mut self) {
        self.selected.clear();
        self.before_select_all = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of feeding one row click into a [`ClickTracker`].
pub enum ClickOutcome {
    /// Start the disambiguation timer and call [`ClickTracker::fire`] with `generation` when it
    /// elapses. `flushed` is a previous row whose pending toggle must be applied now.
    Pending {
        /// Timer generation.
        generation: u64,
        /// Row whose pending click was superseded by a click elsewhere.
        flushed: Option<DocumentId>,
    },
    /// Second click on the same row inside the window: activate the row, skip selection.
    Activate(DocumentId),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Single- vs double-click disambiguation.
///
/// Timers are never cancelled directly; each click bumps a generation and stale timers are
/// ignored by [`ClickTracker::fire`].
pub struct ClickTracker {
    pending: Option<(DocumentId, u64)>,
    generation: u64,
}

impl ClickTracker {
    /// Registers a click on row `id`.
    pub fn click(&mut self, id: DocumentId) -> ClickOutcome {
        self.generation = self.generation.wrapping_add(1);
        match self.pending.take() {
            Some((pending, _)) if pending == id => ClickOutcome::Activate(id),
            previous => {
                self.pending = Some((id, self.generation));
                ClickOutcome::Pending {
                    generation: self.generation,
                    flushed: previous.map(|(row, _)| row),
                }
            }
        }
    }

    /// Timer callback: returns the row to toggle when `generation` is still current.
    pub fn fire(&mut self, generation: u64) -> Option<DocumentId> {
        match self.pending {
            Some((row, pending)) if pending == generation => {
                self.pending = None;
                Some(row)
            }
            _ => None,
        }
    }

    /// Drops any pending click.
    pub fn reset(&mut self) {
        self.pending = None;
        self.generation = self.generation.wrapping_add(1);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Per-data-set table state.
pub struct TableState {
    /// Active sort, `None` for server order.
    pub sort: Option<SortSpec>,
    /// Selected rows.
    pub selection: Selection,
    /// Pending row click.
    pub clicks: ClickTracker,
}

impl TableState {
    /// Resets sort, selection, and pending clicks for a freshly loaded data set.
    pub fn replace_data(&mut self) {
        self.sort = None;
        self.selection.reset();
        self.clicks.reset();
    }

    /// Cycles the sort for `key`.
    pub fn sort_by(&mut self, key: SortKey) {
        self.sort = cycle_sort(self.sort, key);
    }

    /// Current order for `key`, if it is the sorted column.
    pub fn order_for(&self, key: SortKey) -> Option<SortOrder> {
        self.sort
            .filter(|spec| spec.key == key)
            .map(|spec| spec.order)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use document_api::DocumentKind;
    use pretty_assertions::assert_eq;

    use super::*;

    fn doc(id: u64, name: &str, day: u32) -> Document {
        let at = Utc.with_ymd_and_hms(2025, 3, day, 8, 0, 0).unwrap();
        Document {
            id: DocumentId(id),
            kind: DocumentKind::File,
            name: name.to_string(),
            complete_path: format!("/{name}"),
            file_size: Some(1),
            parent_id: None,
            created_at: at,
            updated_at: at,
        }
    }

    fn names(rows: &[Document]) -> Vec<&str> {
        rows.iter().map(|row| row.name.as_str()).collect()
    }

    #[test]
    fn sort_cycles_through_three_states() {
        let first = cycle_sort(None, SortKey::Name);
        assert_eq!(
            first,
            Some(SortSpec {
                key: SortKey::Name,
                order: SortOrder::Ascending,
            })
        );
        let second = cycle_sort(first, SortKey::Name);
        assert_eq!(second.map(|spec| spec.order), Some(SortOrder::Descending));
        assert_eq!(cycle_sort(second, SortKey::Name), None);
    }

    #[test]
    fn sorting_another_column_discards_previous_sort() {
        let mut table = TableState::default();
        table.sort_by(SortKey::Name);
        table.sort_by(SortKey::Name);
        table.sort_by(SortKey::CreatedAt);
        assert_eq!(table.order_for(SortKey::Name), None);
        assert_eq!(table.order_for(SortKey::CreatedAt), Some(SortOrder::Ascending));
    }

    #[test]
    fn documents_sort_by_name_and_date() {
        let rows = vec![doc(1, "beta", 3), doc(2, "Alpha", 1), doc(3, "gamma", 2)];
        let by_name = sort_documents(
            &rows,
            Some(SortSpec {
                key: SortKey::Name,
                order: SortOrder::Ascending,
            }),
        );
        assert_eq!(names(&by_name), vec!["Alpha", "beta", "gamma"]);

        let by_date_desc = sort_documents(
            &rows,
            Some(SortSpec {
                key: SortKey::CreatedAt,
                order: SortOrder::Descending,
            }),
        );
        assert_eq!(names(&by_date_desc), vec!["beta", "gamma", "Alpha"]);
        assert_eq!(names(&sort_documents(&rows, None)), vec!["beta", "Alpha", "gamma"]);
    }

    #[test]
    fn select_all_twice_restores_selection() {
        let loaded = [DocumentId(1), DocumentId(2), DocumentId(3)];
        let mut selection = Selection::default();
        let original = selection.clone();

        selection.toggle_all(&loaded);
        assert!(selection.is_all_selected(loaded.len()));
        selection.toggle_all(&loaded);
        assert_eq!(selection, original);

        let mut full = Selection::default();
        full.toggle_all(&loaded);
        let full_original = full.clone();
        full.toggle_all(&loaded);
        full.toggle_all(&loaded);
        assert_eq!(full, full_original);
    }

    #[test]
    fn select_all_twice_restores_partial_selection() {
        let loaded = [DocumentId(1), DocumentId(2), DocumentId(3)];
        let mut selection = Selection::default();
        selection.toggle(DocumentId(1));
        let original = selection.clone();

        selection.toggle_all(&loaded);
        assert!(selection.is_all_selected(loaded.len()));
        assert!(!selection.is_indeterminate(loaded.len()));
        selection.toggle_all(&loaded);
        assert_eq!(selection, original);
        assert!(selection.contains(DocumentId(1)));
        assert!(selection.is_indeterminate(loaded.len()));
    }

    #[test]
    fn row_toggle_after_select_all_forgets_prior_selection() {
        let loaded = [DocumentId(1), DocumentId(2), DocumentId(3)];
        let mut selection = Selection::default();
        selection.toggle(DocumentId(1));
        selection.toggle_all(&loaded);
        selection.toggle(DocumentId(2));
        selection.toggle(DocumentId(2));

        selection.toggle_all(&loaded);
        assert!(selection.is_empty());
    }

    #[test]
    fn indeterminate_only_for_partial_selection() {
        let mut selection = Selection::default();
        assert!(!selection.is_indeterminate(3));
        selection.toggle(DocumentId(1));
        assert!(selection.is_indeterminate(3));
        assert!(!selection.is_all_selected(3));
        selection.toggle(DocumentId(2));
        selection.toggle(DocumentId(3));
        assert!(!selection.is_indeterminate(3));
        assert!(selection.is_all_selected(3));
        selection.toggle(DocumentId(3));
        assert_eq!(selection.len(), 2);
        assert!(!Selection::default().is_all_selected(0));
    }

    #[test]
    fn double_click_activates_without_toggling() {
        let mut clicks = ClickTracker::default();
        let ClickOutcome::Pending { generation, flushed } = clicks.click(DocumentId(7)) else {
            panic!("first click should be pending");
        };
        assert_eq!(flushed, None);
        assert_eq!(clicks.click(DocumentId(7)), ClickOutcome::Activate(DocumentId(7)));
        assert_eq!(clicks.fire(generation), None);
    }

    #[test]
    fn quiet_period_toggles_selection() {
        let mut clicks = ClickTracker::default();
        let ClickOutcome::Pending { generation, .. } = clicks.click(DocumentId(4)) else {
            panic!("pending");
        };
        assert_eq!(clicks.fire(generation), Some(DocumentId(4)));
        assert!(matches!(clicks.click(DocumentId(4)), ClickOutcome::Pending { .. }));
    }

    #[test]
    fn click_on_other_row_flushes_pending_toggle() {
        let mut clicks = ClickTracker::default();
        let ClickOutcome::Pending { generation: first, .. } = clicks.click(DocumentId(1)) else {
            panic!("pending");
        };
        let outcome = clicks.click(DocumentId(2));
        let ClickOutcome::Pending { generation, flushed } = outcome else {
            panic!("pending");
        };
        assert_eq!(flushed, Some(DocumentId(1)));
        assert_eq!(clicks.fire(first), None);
        assert_eq!(clicks.fire(generation), Some(DocumentId(2)));
    }

    #[test]
    fn replacing_data_resets_sort_and_selection() {
        let mut table = TableState::default();
        table.sort_by(SortKey::Name);
        table.selection.toggle(DocumentId(1));
        let _ = table.clicks.click(DocumentId(1));
        table.replace_data();
        assert_eq!(table.sort, None);
        assert!(table.selection.is_empty());
        assert!(matches!(
            table.clicks.click(DocumentId(1)),
            ClickOutcome::Pending { flushed: None, .. }
        ));
    }

    #[test]
    fn only_name_and_date_columns_sort() {
        let sortable: Vec<_> = default_columns()
            .into_iter()
            .filter_map(|column| column.sort_key)
            .collect();
        assert_eq!(sortable, vec![SortKey::Name, SortKey::CreatedAt]);
    }
}
