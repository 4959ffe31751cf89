//! Row actions as explicit command data.
//!
//! Instead of separate view/edit/delete callback props, a row interaction
//! produces one [`RowAction`] value dispatched to a single caller-owned
//! handler. The grid never mutates rows itself; the handler owns the
//! resulting network call and cache invalidation, then swaps refreshed
//! rows back into the model.

use std::sync::Arc;

/// What the user asked to do with a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowActionKind {
    /// Open a read-only detail view.
    View,
    /// Open an edit dialog.
    Edit,
    /// Request deletion.
    Delete,
}

/// A row interaction, as plain data.
///
/// The row is cloned out of the model so the handler can hold it across
/// an async mutation without borrowing the model.
#[derive(Debug, Clone)]
pub struct RowAction<T> {
    /// The requested operation.
    pub kind: RowActionKind,
    /// The affected row.
    pub row: T,
}

/// Type alias for the caller-owned action handler.
pub type ActionHandler<T> = Arc<dyn Fn(RowAction<T>) + Send + Sync>;
