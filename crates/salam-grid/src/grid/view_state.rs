//! Per-grid view state: query, page, page size, sort, and view mode.

use crate::error::{GridError, Result};

/// How the visible row slice is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Tabular rendering through column definitions.
    #[default]
    Table,
    /// Card-grid rendering through the caller's card renderer.
    Card,
}

impl ViewMode {
    /// The string form stored in a view-preference store.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Table => "table",
            ViewMode::Card => "card",
        }
    }

    /// Parses a stored string form. Unknown values yield `None` so a
    /// corrupt preference falls back to the configured default.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "table" => Some(ViewMode::Table),
            "card" => Some(ViewMode::Card),
            _ => None,
        }
    }
}

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest value first.
    #[default]
    Ascending,
    /// Largest value first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The user-selected sort: which column, which direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    /// Id of the column being sorted.
    pub column_id: String,
    /// Direction of the sort.
    pub direction: SortDirection,
}

/// The mutable control state a grid owns.
///
/// All fields change only through user interaction; a data refresh never
/// touches them. Created on grid construction from caller defaults and
/// discarded with the grid, except the view mode which may be persisted
/// through a [`ViewModeStore`](crate::storage::ViewModeStore).
///
/// # Invariants
///
/// - `page_size >= 1`, enforced at construction and on change.
/// - `page` resets to 0 whenever the query or page size changes, so a
///   stale page can never point past the end of a shrunk result set.
#[derive(Debug, Clone)]
pub struct ViewState {
    query: String,
    page: usize,
    page_size: usize,
    view_mode: ViewMode,
    sort: Option<SortState>,
}

impl ViewState {
    /// Creates view state with the given page size and view mode.
    pub fn new(page_size: usize, view_mode: ViewMode) -> Result<Self> {
        if page_size == 0 {
            return Err(GridError::PageSizeZero);
        }
        Ok(Self {
            query: String::new(),
            page: 0,
            page_size,
            view_mode,
            sort: None,
        })
    }

    /// The current search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The current zero-based page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// The current page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The current view mode.
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// The current sort, if any.
    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Sets the search query and resets the page to 0.
    ///
    /// Returns `true` if anything changed.
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if query == self.query {
            return false;
        }
        self.query = query;
        self.page = 0;
        true
    }

    /// Sets the current page.
    pub fn set_page(&mut self, page: usize) -> bool {
        if page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    /// Sets the page size and resets the page to 0.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<bool> {
        if page_size == 0 {
            return Err(GridError::PageSizeZero);
        }
        if page_size == self.page_size {
            return Ok(false);
        }
        self.page_size = page_size;
        self.page = 0;
        Ok(true)
    }

    /// Sets the view mode.
    ///
    /// Deliberately touches nothing else: toggling table/card re-renders
    /// the same filtered, sorted, paginated slice.
    pub fn set_view_mode(&mut self, view_mode: ViewMode) -> bool {
        if view_mode == self.view_mode {
            return false;
        }
        self.view_mode = view_mode;
        true
    }

    /// Applies a header click on `column_id`.
    ///
    /// Clicking the sorted column toggles its direction; clicking another
    /// column starts an ascending sort on it.
    pub fn toggle_sort(&mut self, column_id: &str) {
        self.sort = match self.sort.take() {
            Some(sort) if sort.column_id == column_id => Some(SortState {
                column_id: sort.column_id,
                direction: sort.direction.toggled(),
            }),
            _ => Some(SortState {
                column_id: column_id.to_string(),
                direction: SortDirection::Ascending,
            }),
        };
    }

    /// Clears the sort, restoring source order.
    pub fn clear_sort(&mut self) -> bool {
        self.sort.take().is_some()
    }

    /// Writes back a page clamped by the pipeline after the row count shrank.
    pub(crate) fn sync_clamped_page(&mut self, page: usize) {
        self.page = page;
    }
}
