//! Column definitions for table mode.

use std::sync::Arc;

use crate::model::{FieldFn, FieldValue};

/// Horizontal alignment of a column's cells and header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Align to the left edge.
    #[default]
    Left,
    /// Align to the center.
    Center,
    /// Align to the right edge.
    Right,
}

/// Describes one column of a grid in table mode.
///
/// A column pairs a unique id and header title with the accessor that
/// extracts the cell value from a row. The id must be unique within a grid
/// instance; [`DataGridBuilder::build`](crate::grid::DataGridBuilder::build)
/// rejects duplicates.
///
/// # Example
///
/// ```
/// use salam_grid::grid::{Alignment, ColumnDef};
/// use salam_grid::model::FieldValue;
///
/// struct Subject {
///     name: String,
///     credits: u32,
/// }
///
/// let name_col = ColumnDef::new("name", "Subject", |s: &Subject| {
///     FieldValue::from(s.name.as_str())
/// });
///
/// let credits_col = ColumnDef::new("credits", "Credits", |s: &Subject| {
///     FieldValue::from(s.credits)
/// })
/// .with_align(Alignment::Right)
/// .with_min_width(64.0);
/// ```
pub struct ColumnDef<T> {
    id: String,
    title: String,
    cell: FieldFn<T>,
    min_width: Option<f32>,
    align: Alignment,
    sortable: bool,
}

impl<T> ColumnDef<T> {
    /// Creates a new column with the given id, header title, and cell accessor.
    pub fn new<F>(id: impl Into<String>, title: impl Into<String>, cell: F) -> Self
    where
        F: Fn(&T) -> FieldValue + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            title: title.into(),
            cell: Arc::new(cell),
            min_width: None,
            align: Alignment::Left,
            sortable: true,
        }
    }

    /// Sets the alignment for this column.
    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Sets the minimum width hint for this column, in logical pixels.
    pub fn with_min_width(mut self, min_width: f32) -> Self {
        self.min_width = Some(min_width);
        self
    }

    /// Marks this column as not sortable (e.g. an action-menu column).
    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// The unique column id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The header title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The minimum width hint, if any.
    pub fn min_width(&self) -> Option<f32> {
        self.min_width
    }

    /// The cell alignment.
    pub fn align(&self) -> Alignment {
        self.align
    }

    /// Whether the user can sort by this column.
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Extracts this column's value from a row.
    pub fn value(&self, row: &T) -> FieldValue {
        (self.cell)(row)
    }

    /// The cell accessor, shared for use by the sort pipeline.
    pub(crate) fn cell_fn(&self) -> FieldFn<T> {
        Arc::clone(&self.cell)
    }
}
