//! The data grid widget.

use std::sync::Arc;

use parking_lot::RwLock;

use salam_grid_core::Signal;

use crate::error::{GridError, Result};
use crate::model::{FieldFn, FieldValue, RowIdFn, RowModel};
use crate::selection::RowSelection;
use crate::storage::ViewModeStore;

use super::actions::{ActionHandler, RowAction, RowActionKind};
use super::column::ColumnDef;
use super::frame::{
    Card, CardContent, CardFrame, CardRenderFn, GridFrame, HeaderCell, TableFrame, TableRow,
};
use super::pipeline::{derive_window, RowWindow};
use super::view_state::{SortState, ViewMode, ViewState};

/// Caller-surfaced fetch status.
struct FetchStatus {
    loading: bool,
    error: Option<(String, bool)>,
}

/// Builder for [`DataGrid`].
///
/// Collects configuration, validates it, and fails fast on programmer
/// errors (duplicate column ids, card view without a card renderer)
/// instead of silently rendering a blank grid.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use salam_grid::grid::{ColumnDef, DataGridBuilder};
/// use salam_grid::model::{FieldValue, RowModel};
///
/// #[derive(Clone)]
/// struct Subject {
///     id: String,
///     name: String,
/// }
///
/// let model = Arc::new(RowModel::new(vec![
///     Subject { id: "1".into(), name: "Fiqih".into() },
/// ]));
///
/// let grid = DataGridBuilder::new(model, |s: &Subject| s.id.clone())
///     .column(ColumnDef::new("name", "Subject", |s: &Subject| {
///         FieldValue::from(s.name.as_str())
///     }))
///     .search_field(|s: &Subject| FieldValue::from(s.name.as_str()))
///     .page_size(10)
///     .build()
///     .unwrap();
///
/// assert_eq!(grid.page(), 0);
/// ```
pub struct DataGridBuilder<T> {
    model: Arc<RowModel<T>>,
    row_id: RowIdFn<T>,
    columns: Vec<ColumnDef<T>>,
    search_fields: Vec<FieldFn<T>>,
    card_renderer: Option<CardRenderFn<T>>,
    action_handler: Option<ActionHandler<T>>,
    page_size: usize,
    page_size_options: Vec<usize>,
    default_view: ViewMode,
    storage_key: Option<String>,
    store: Option<Arc<dyn ViewModeStore>>,
}

impl<T: Send + Sync + 'static> DataGridBuilder<T> {
    /// Creates a builder over the given model and row-id accessor.
    ///
    /// The row id must be stable and unique per row; the grid keys rows
    /// and routes actions by it.
    pub fn new<F>(model: Arc<RowModel<T>>, row_id: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            model,
            row_id: Arc::new(row_id),
            columns: Vec::new(),
            search_fields: Vec::new(),
            card_renderer: None,
            action_handler: None,
            page_size: 10,
            page_size_options: vec![10, 25, 50],
            default_view: ViewMode::Table,
            storage_key: None,
            store: None,
        }
    }

    /// Appends a column definition for table mode.
    pub fn column(mut self, column: ColumnDef<T>) -> Self {
        self.columns.push(column);
        self
    }

    /// Appends a field matched against the search query.
    pub fn search_field<F>(mut self, field: F) -> Self
    where
        F: Fn(&T) -> FieldValue + Send + Sync + 'static,
    {
        self.search_fields.push(Arc::new(field));
        self
    }

    /// Sets the card renderer, required for card mode.
    pub fn card_renderer<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&T) -> CardContent + Send + Sync + 'static,
    {
        self.card_renderer = Some(Arc::new(renderer));
        self
    }

    /// Sets the single handler row actions are dispatched to.
    pub fn on_action<F>(mut self, handler: F) -> Self
    where
        F: Fn(RowAction<T>) + Send + Sync + 'static,
    {
        self.action_handler = Some(Arc::new(handler));
        self
    }

    /// Sets the initial page size (default 10).
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the page sizes offered to the user (default 10, 25, 50).
    pub fn page_size_options(mut self, options: Vec<usize>) -> Self {
        self.page_size_options = options;
        self
    }

    /// Sets the view mode used when no persisted preference exists.
    pub fn default_view(mut self, view: ViewMode) -> Self {
        self.default_view = view;
        self
    }

    /// Persists the view mode under `key` in the given store.
    ///
    /// The preference is read once at build and written on every
    /// user-driven view-mode change. Grids sharing a key observe each
    /// other's last-written value on next build.
    pub fn persist_view(mut self, store: Arc<dyn ViewModeStore>, key: impl Into<String>) -> Self {
        self.store = Some(store);
        self.storage_key = Some(key.into());
        self
    }

    /// Validates the configuration and builds the grid.
    pub fn build(self) -> Result<DataGrid<T>> {
        for (i, column) in self.columns.iter().enumerate() {
            if self.columns[..i].iter().any(|c| c.id() == column.id()) {
                return Err(GridError::DuplicateColumn {
                    id: column.id().to_string(),
                });
            }
        }

        // A persisted preference overrides the configured default; an
        // unparseable stored value falls back to it.
        let mut view = self.default_view;
        if let (Some(store), Some(key)) = (&self.store, &self.storage_key) {
            if let Some(stored) = store.get(key) {
                match ViewMode::parse(&stored) {
                    Some(mode) => view = mode,
                    None => tracing::warn!(
                        target: "salam_grid::grid",
                        key = %key,
                        stored = %stored,
                        "ignoring unparseable view preference"
                    ),
                }
            }
        }

        check_view_supported(view, &self.columns, self.card_renderer.as_ref())?;

        let state = ViewState::new(self.page_size, view)?;
        let selection = Arc::new(RowSelection::new());
        let changed = Arc::new(Signal::new());

        // Model mutations invalidate the derived window, so surface them
        // through the grid's own change signal and drop any selection
        // when the collection is swapped wholesale.
        {
            let changed = Arc::clone(&changed);
            let selection_for_reset = Arc::clone(&selection);
            let signals = self.model.signals();
            signals.model_reset.connect({
                let changed = Arc::clone(&changed);
                move |_| {
                    selection_for_reset.clear();
                    changed.emit(());
                }
            });
            signals.rows_inserted.connect({
                let changed = Arc::clone(&changed);
                move |_| changed.emit(())
            });
            signals.rows_removed.connect({
                let changed = Arc::clone(&changed);
                move |_| changed.emit(())
            });
            signals.data_changed.connect(move |_| changed.emit(()));
        }

        Ok(DataGrid {
            model: self.model,
            row_id: self.row_id,
            columns: self.columns,
            search_fields: self.search_fields,
            card_renderer: self.card_renderer,
            action_handler: self.action_handler,
            page_size_options: self.page_size_options,
            storage_key: self.storage_key,
            store: self.store,
            state: RwLock::new(state),
            status: RwLock::new(FetchStatus {
                loading: false,
                error: None,
            }),
            selection,
            changed,
        })
    }
}

/// A searchable, sortable, paginated, dual-mode grid over an in-memory
/// collection.
///
/// The grid owns its control state (query, page, page size, sort, view
/// mode) and derives the visible window from the row model on every
/// [`frame`](Self::frame) call; it holds no copy of the rows and mutates
/// nothing. Row interactions are delegated to the caller's action
/// handler as [`RowAction`] values.
///
/// Hosts connect to [`changed`](Self::changed) and call
/// [`frame`](Self::frame) when it fires.
pub struct DataGrid<T> {
    model: Arc<RowModel<T>>,
    row_id: RowIdFn<T>,
    columns: Vec<ColumnDef<T>>,
    search_fields: Vec<FieldFn<T>>,
    card_renderer: Option<CardRenderFn<T>>,
    action_handler: Option<ActionHandler<T>>,
    page_size_options: Vec<usize>,
    storage_key: Option<String>,
    store: Option<Arc<dyn ViewModeStore>>,
    state: RwLock<ViewState>,
    status: RwLock<FetchStatus>,
    selection: Arc<RowSelection>,
    changed: Arc<Signal<()>>,
}

impl<T: Send + Sync + 'static> DataGrid<T> {
    /// The underlying row model.
    pub fn model(&self) -> &Arc<RowModel<T>> {
        &self.model
    }

    /// Emitted whenever the visible window may have changed: any control
    /// change, fetch-status change, or model mutation.
    pub fn changed(&self) -> &Signal<()> {
        &self.changed
    }

    /// Current-row tracking for action menus.
    pub fn selection(&self) -> &RowSelection {
        &self.selection
    }

    /// The current search query.
    pub fn query(&self) -> String {
        self.state.read().query().to_string()
    }

    /// The current zero-based page.
    pub fn page(&self) -> usize {
        self.state.read().page()
    }

    /// The current page size.
    pub fn page_size(&self) -> usize {
        self.state.read().page_size()
    }

    /// The page sizes offered to the user.
    pub fn page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    /// The current view mode.
    pub fn view_mode(&self) -> ViewMode {
        self.state.read().view_mode()
    }

    /// The current sort, if any.
    pub fn sort(&self) -> Option<SortState> {
        self.state.read().sort().cloned()
    }

    /// Sets the search query. Resets the page to 0 on change.
    pub fn set_query(&self, query: impl Into<String>) {
        if self.state.write().set_query(query) {
            tracing::debug!(target: "salam_grid::grid", "query changed");
            self.changed.emit(());
        }
    }

    /// Jumps to the given zero-based page.
    ///
    /// An out-of-range page is clamped during the next frame derivation.
    pub fn set_page(&self, page: usize) {
        if self.state.write().set_page(page) {
            self.changed.emit(());
        }
    }

    /// Advances one page. The pipeline clamps past-the-end requests.
    pub fn next_page(&self) {
        let page = self.state.read().page();
        self.set_page(page + 1);
    }

    /// Goes back one page.
    pub fn prev_page(&self) {
        let page = self.state.read().page();
        self.set_page(page.saturating_sub(1));
    }

    /// Sets the page size. Resets the page to 0 on change.
    pub fn set_page_size(&self, page_size: usize) -> Result<()> {
        if self.state.write().set_page_size(page_size)? {
            self.changed.emit(());
        }
        Ok(())
    }

    /// Applies a header click: sorts by `column_id`, toggling direction on
    /// a repeated click.
    ///
    /// Fails on an unknown or non-sortable column id.
    pub fn sort_by(&self, column_id: &str) -> Result<()> {
        let column = self
            .columns
            .iter()
            .find(|c| c.id() == column_id)
            .ok_or_else(|| GridError::invalid_sort_column(column_id, "no such column"))?;
        if !column.is_sortable() {
            return Err(GridError::invalid_sort_column(
                column_id,
                "column is not sortable",
            ));
        }
        self.state.write().toggle_sort(column_id);
        self.changed.emit(());
        Ok(())
    }

    /// Clears the sort, restoring source order.
    pub fn clear_sort(&self) {
        if self.state.write().clear_sort() {
            self.changed.emit(());
        }
    }

    /// Switches between table and card rendering.
    ///
    /// The same filtered, sorted, paginated slice is re-rendered through
    /// the other renderer; query, sort, and page are untouched. Fails
    /// fast if the target mode is not configured (card mode without a
    /// card renderer, table mode without columns).
    ///
    /// On success the preference is written to the configured store, if
    /// any. Only this user-driven path writes; data refreshes never do.
    pub fn set_view_mode(&self, view: ViewMode) -> Result<()> {
        check_view_supported(view, &self.columns, self.card_renderer.as_ref())?;
        if self.state.write().set_view_mode(view) {
            if let (Some(store), Some(key)) = (&self.store, &self.storage_key) {
                store.set(key, view.as_str());
            }
            self.changed.emit(());
        }
        Ok(())
    }

    /// Marks a fetch as in flight. While loading, frames suppress the row
    /// area in favor of a loading indicator.
    pub fn set_loading(&self, loading: bool) {
        let mut status = self.status.write();
        if status.loading != loading {
            status.loading = loading;
            drop(status);
            self.changed.emit(());
        }
    }

    /// Surfaces a failed fetch. The message is opaque to the grid;
    /// `retryable` says whether the host renders a retry affordance.
    pub fn set_error(&self, message: impl Into<String>, retryable: bool) {
        self.status.write().error = Some((message.into(), retryable));
        self.changed.emit(());
    }

    /// Clears a previously surfaced fetch error.
    pub fn clear_error(&self) {
        if self.status.write().error.take().is_some() {
            self.changed.emit(());
        }
    }

    /// Renders one frame.
    ///
    /// Precedence: loading, then error, then the row area. With rows, the
    /// window is derived filter-first, then sorted stably, then clamped
    /// and paginated; a page left dangling by a shrunk result set is
    /// clamped and synced back into the view state here.
    pub fn frame(&self) -> GridFrame {
        {
            let status = self.status.read();
            if status.loading {
                return GridFrame::Loading;
            }
            if let Some((message, retryable)) = &status.error {
                return GridFrame::Failed {
                    message: message.clone(),
                    retryable: *retryable,
                };
            }
        }

        // Snapshot the controls so no state lock is held while caller
        // closures run; a cell accessor or card renderer may call back
        // into a grid accessor, and the locks are not re-entrant.
        let state = self.state.read().clone();
        let rows = self.model.rows();

        if rows.is_empty() {
            return GridFrame::Empty;
        }

        let window = self.derive(&rows, &state);
        if window.pages.total == 0 {
            return GridFrame::NoMatches {
                query: state.query().to_string(),
            };
        }
        if window.pages.page != state.page() {
            tracing::debug!(
                target: "salam_grid::grid",
                requested = state.page(),
                clamped = window.pages.page,
                "page clamped after result set shrank"
            );
            let mut live = self.state.write();
            // Only sync if the page has not moved since the snapshot.
            if live.page() == state.page() {
                live.sync_clamped_page(window.pages.page);
            }
        }

        #[cfg(debug_assertions)]
        self.warn_on_duplicate_ids(&rows);

        match state.view_mode() {
            ViewMode::Table => self.render_table(&rows, &state, window),
            ViewMode::Card => match &self.card_renderer {
                Some(renderer) => self.render_cards(&rows, renderer, window),
                // Unreachable: card mode is rejected without a renderer at
                // build and on set_view_mode.
                None => {
                    tracing::error!(
                        target: "salam_grid::grid",
                        "card mode active without a renderer; falling back to table"
                    );
                    self.render_table(&rows, &state, window)
                }
            },
        }
    }

    /// Dispatches a row action for the row at `window_index` of the
    /// current visible window.
    ///
    /// The row becomes current (for the action menu highlight) and is
    /// handed to the action handler as data. Returns `false` when the
    /// index is out of range or no handler is configured.
    pub fn trigger(&self, kind: RowActionKind, window_index: usize) -> bool
    where
        T: Clone,
    {
        let source_index = {
            // Snapshot for the same reason frame() does: derivation runs
            // caller closures.
            let state = self.state.read().clone();
            let rows = self.model.rows();
            let window = self.derive(&rows, &state);
            match window.indices.get(window_index) {
                Some(&index) => index,
                None => return false,
            }
        };

        let Some(handler) = &self.action_handler else {
            return false;
        };
        let Some((row, id)) = self
            .model
            .with_row(source_index, |row| (row.clone(), (self.row_id)(row)))
        else {
            return false;
        };

        tracing::debug!(
            target: "salam_grid::grid",
            row = %id,
            action = ?kind,
            "dispatching row action"
        );
        self.selection.set_current(Some(id));
        handler(RowAction { kind, row });
        true
    }

    fn derive(&self, rows: &[T], state: &ViewState) -> RowWindow {
        let sort = state.sort().and_then(|sort| {
            self.columns
                .iter()
                .find(|c| c.id() == sort.column_id)
                .map(|c| (c.cell_fn(), sort.direction))
        });
        derive_window(
            rows,
            &self.search_fields,
            state.query(),
            sort.as_ref().map(|(f, d)| (f, *d)),
            state.page(),
            state.page_size(),
        )
    }

    fn render_table(&self, rows: &[T], state: &ViewState, window: RowWindow) -> GridFrame {
        let headers = self
            .columns
            .iter()
            .map(|column| HeaderCell {
                id: column.id().to_string(),
                title: column.title().to_string(),
                align: column.align(),
                min_width: column.min_width(),
                sort: state
                    .sort()
                    .filter(|s| s.column_id == column.id())
                    .map(|s| s.direction),
                sortable: column.is_sortable(),
            })
            .collect();

        let table_rows = window
            .indices
            .iter()
            .map(|&index| {
                let row = &rows[index];
                TableRow {
                    id: (self.row_id)(row),
                    cells: self.columns.iter().map(|c| c.value(row)).collect(),
                }
            })
            .collect();

        GridFrame::Table(TableFrame {
            headers,
            rows: table_rows,
            pages: window.pages,
        })
    }

    fn render_cards(&self, rows: &[T], renderer: &CardRenderFn<T>, window: RowWindow) -> GridFrame {
        let cards = window
            .indices
            .iter()
            .map(|&index| {
                let row = &rows[index];
                Card {
                    id: (self.row_id)(row),
                    content: renderer(row),
                }
            })
            .collect();

        GridFrame::Cards(CardFrame {
            cards,
            pages: window.pages,
        })
    }

    /// Row-id uniqueness is a documented caller precondition; scan for
    /// violations in debug builds only.
    #[cfg(debug_assertions)]
    fn warn_on_duplicate_ids(&self, rows: &[T]) {
        let mut seen = std::collections::HashSet::with_capacity(rows.len());
        for row in rows {
            let id = (self.row_id)(row);
            if !seen.insert(id.clone()) {
                tracing::warn!(
                    target: "salam_grid::grid",
                    row = %id,
                    "duplicate row id; keying and actions will misbehave"
                );
            }
        }
    }
}

fn check_view_supported<T>(
    view: ViewMode,
    columns: &[ColumnDef<T>],
    card_renderer: Option<&CardRenderFn<T>>,
) -> Result<()> {
    match view {
        ViewMode::Table if columns.is_empty() => Err(GridError::NoColumns),
        ViewMode::Card if card_renderer.is_none() => Err(GridError::MissingCardRenderer),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Clone)]
    struct Subject {
        id: &'static str,
        name: &'static str,
    }

    fn model() -> Arc<RowModel<Subject>> {
        Arc::new(RowModel::new(vec![
            Subject { id: "s-1", name: "Fiqih" },
            Subject { id: "s-2", name: "Tajwid" },
            Subject { id: "s-3", name: "Tauhid" },
        ]))
    }

    fn builder(model: Arc<RowModel<Subject>>) -> DataGridBuilder<Subject> {
        DataGridBuilder::new(model, |s: &Subject| s.id.to_string())
            .column(ColumnDef::new("name", "Subject", |s: &Subject| {
                FieldValue::from(s.name)
            }))
            .search_field(|s: &Subject| FieldValue::from(s.name))
    }

    #[test]
    fn test_build_rejects_duplicate_column() {
        let result = builder(model())
            .column(ColumnDef::new("name", "Again", |s: &Subject| {
                FieldValue::from(s.name)
            }))
            .build();
        assert!(matches!(result, Err(GridError::DuplicateColumn { id }) if id == "name"));
    }

    #[test]
    fn test_build_rejects_card_default_without_renderer() {
        let result = builder(model()).default_view(ViewMode::Card).build();
        assert!(matches!(result, Err(GridError::MissingCardRenderer)));
    }

    #[test]
    fn test_build_rejects_table_without_columns() {
        let result =
            DataGridBuilder::new(model(), |s: &Subject| s.id.to_string()).build();
        assert!(matches!(result, Err(GridError::NoColumns)));
    }

    #[test]
    fn test_build_rejects_page_size_zero() {
        let result = builder(model()).page_size(0).build();
        assert!(matches!(result, Err(GridError::PageSizeZero)));
    }

    #[test]
    fn test_loading_beats_error_beats_rows() {
        let grid = builder(model()).build().unwrap();

        grid.set_loading(true);
        grid.set_error("network down", true);
        assert!(grid.frame().is_loading());

        grid.set_loading(false);
        assert!(matches!(
            grid.frame(),
            GridFrame::Failed { message, retryable: true } if message == "network down"
        ));

        grid.clear_error();
        assert!(matches!(grid.frame(), GridFrame::Table(_)));
    }

    #[test]
    fn test_empty_and_no_matches_are_distinct() {
        let model = model();
        let grid = builder(Arc::clone(&model)).build().unwrap();

        grid.set_query("zz");
        assert!(matches!(
            grid.frame(),
            GridFrame::NoMatches { query } if query == "zz"
        ));

        model.set_rows(Vec::new());
        assert!(matches!(grid.frame(), GridFrame::Empty));
    }

    #[test]
    fn test_sort_by_rejects_unknown_and_unsortable() {
        let grid = builder(model())
            .column(
                ColumnDef::new("menu", "", |_: &Subject| FieldValue::None).not_sortable(),
            )
            .build()
            .unwrap();

        assert!(grid.sort_by("bogus").is_err());
        assert!(grid.sort_by("menu").is_err());
        assert!(grid.sort_by("name").is_ok());
        assert_eq!(grid.sort().unwrap().column_id, "name");
    }

    #[test]
    fn test_view_toggle_preserves_window() {
        let grid = builder(model())
            .card_renderer(|s: &Subject| CardContent::new(s.name))
            .build()
            .unwrap();
        grid.set_query("ta");
        grid.sort_by("name").unwrap();

        let table = match grid.frame() {
            GridFrame::Table(table) => table,
            other => panic!("expected table frame, got {other:?}"),
        };
        let table_ids: Vec<_> = table.rows.iter().map(|r| r.id.clone()).collect();

        grid.set_view_mode(ViewMode::Card).unwrap();
        let cards = match grid.frame() {
            GridFrame::Cards(cards) => cards,
            other => panic!("expected card frame, got {other:?}"),
        };
        let card_ids: Vec<_> = cards.cards.iter().map(|c| c.id.clone()).collect();

        // Same rows, same order, same pagination; only the rendering differs.
        assert_eq!(table_ids, card_ids);
        assert_eq!(table.pages, cards.pages);
        assert_eq!(grid.query(), "ta");
        assert!(grid.sort().is_some());
    }

    #[test]
    fn test_set_view_mode_rejects_card_without_renderer() {
        let grid = builder(model()).build().unwrap();
        assert!(matches!(
            grid.set_view_mode(ViewMode::Card),
            Err(GridError::MissingCardRenderer)
        ));
        assert_eq!(grid.view_mode(), ViewMode::Table);
    }

    #[test]
    fn test_trigger_dispatches_and_selects() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recv = seen.clone();
        let grid = builder(model())
            .on_action(move |action: RowAction<Subject>| {
                recv.lock().push((action.kind, action.row.id));
            })
            .build()
            .unwrap();

        grid.sort_by("name").unwrap();
        grid.sort_by("name").unwrap(); // Descending: Tauhid, Tajwid, Fiqih.

        assert!(grid.trigger(RowActionKind::Edit, 0));
        assert!(!grid.trigger(RowActionKind::Delete, 99));

        let events = seen.lock();
        assert_eq!(events.as_slice(), &[(RowActionKind::Edit, "s-3")]);
        assert!(grid.selection().is_current("s-3"));
    }

    #[test]
    fn test_model_mutation_fires_changed_and_clears_selection() {
        let model = model();
        let grid = builder(Arc::clone(&model)).build().unwrap();
        grid.selection().set_current(Some("s-1".into()));

        let fired = Arc::new(Mutex::new(0usize));
        let recv = fired.clone();
        grid.changed().connect(move |_| *recv.lock() += 1);

        model.set_rows(vec![Subject { id: "s-9", name: "Nahwu" }]);

        assert_eq!(*fired.lock(), 1);
        assert_eq!(grid.selection().current(), None);
    }

    #[test]
    fn test_sort_with_nan_keeps_numbers_ordered() {
        #[derive(Clone)]
        struct Score {
            id: &'static str,
            value: f64,
        }
        let model = Arc::new(RowModel::new(vec![
            Score { id: "a", value: 3.0 },
            Score { id: "b", value: f64::NAN },
            Score { id: "c", value: 1.0 },
            Score { id: "d", value: f64::NAN },
            Score { id: "e", value: 2.0 },
            Score { id: "f", value: 0.5 },
        ]));
        let grid = DataGridBuilder::new(model, |s: &Score| s.id.to_string())
            .column(ColumnDef::new("value", "Value", |s: &Score| {
                FieldValue::from(s.value)
            }))
            .build()
            .unwrap();

        grid.sort_by("value").unwrap();
        let frame = match grid.frame() {
            GridFrame::Table(frame) => frame,
            other => panic!("expected table frame, got {other:?}"),
        };
        let values: Vec<f64> = frame
            .rows
            .iter()
            .map(|r| r.cells[0].as_float().unwrap())
            .collect();

        // The non-NaN values must come out ascending; NaN entries sort
        // together at the end rather than scrambling their neighbors.
        let numbers: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        assert_eq!(numbers, vec![0.5, 1.0, 2.0, 3.0]);
        assert!(values[4].is_nan() && values[5].is_nan());
    }

    #[test]
    fn test_closures_can_read_grid_state_during_frame() {
        // Cell accessors and card renderers run during derivation and
        // rendering; one that reads back from the grid must not deadlock.
        type Slot = Arc<Mutex<Option<Arc<DataGrid<Subject>>>>>;
        let slot: Slot = Arc::new(Mutex::new(None));

        let for_search = Arc::clone(&slot);
        let for_cards = Arc::clone(&slot);
        let grid = Arc::new(
            builder(model())
                .search_field(move |s: &Subject| {
                    let _ = for_search.lock().as_ref().map(|g| g.page());
                    FieldValue::from(s.name)
                })
                .card_renderer(move |s: &Subject| {
                    let query = for_cards
                        .lock()
                        .as_ref()
                        .map(|g| g.query())
                        .unwrap_or_default();
                    CardContent::new(s.name).with_detail("Query", query)
                })
                .build()
                .unwrap(),
        );
        *slot.lock() = Some(Arc::clone(&grid));

        grid.set_query("ta");
        grid.sort_by("name").unwrap();
        assert!(matches!(grid.frame(), GridFrame::Table(_)));

        grid.set_view_mode(ViewMode::Card).unwrap();
        let cards = match grid.frame() {
            GridFrame::Cards(cards) => cards,
            other => panic!("expected card frame, got {other:?}"),
        };
        assert_eq!(cards.cards[0].content.details[0].1, "ta");

        *slot.lock() = None;
    }

    #[test]
    fn test_changed_fires_on_control_changes_only_when_changed() {
        let grid = builder(model()).build().unwrap();
        let fired = Arc::new(Mutex::new(0usize));
        let recv = fired.clone();
        grid.changed().connect(move |_| *recv.lock() += 1);

        grid.set_query("ta");
        grid.set_query("ta"); // No-op.
        grid.set_page_size(25).unwrap();
        grid.set_page_size(25).unwrap(); // No-op.
        grid.set_loading(true);
        grid.set_loading(true); // No-op.

        assert_eq!(*fired.lock(), 3);
    }
}
