//! Error types for the grid.

/// Result type alias for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors that can occur when configuring or driving a grid.
///
/// These are programmer errors in the embedding application, not data
/// errors: a failed fetch is routed through
/// [`DataGrid::set_error`](crate::grid::DataGrid::set_error) as an opaque
/// message and is never represented here.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Card view was requested but no card renderer is configured.
    #[error("card view requires a card renderer; configure one with `DataGridBuilder::card_renderer`")]
    MissingCardRenderer,

    /// Table view was requested with an empty column list.
    #[error("table view requires at least one column")]
    NoColumns,

    /// Two columns share the same id.
    #[error("duplicate column id '{id}'")]
    DuplicateColumn { id: String },

    /// A sort was requested on a column id no column has, or on a column
    /// marked not sortable.
    #[error("cannot sort by column '{id}': {reason}")]
    InvalidSortColumn { id: String, reason: String },

    /// Page size must be at least 1.
    #[error("page size must be at least 1")]
    PageSizeZero,
}

impl GridError {
    /// Create an invalid-sort-column error.
    pub fn invalid_sort_column(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSortColumn {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
