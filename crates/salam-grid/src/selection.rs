//! Current-row tracking for action menus.
//!
//! List screens highlight the row whose action menu is open. That is the
//! only selection the dashboard's grids need, so this model tracks a
//! single current row id rather than a full multi-select range model.

use parking_lot::RwLock;

use salam_grid_core::Signal;

/// Tracks which row, if any, is current.
///
/// Rows are identified by their stable id (the grid's `row_id` accessor),
/// not by position, so the current row survives re-sorting and filtering
/// as long as it stays visible.
///
/// # Signals
///
/// - `current_changed`: Emitted when the current row changes, with
///   (new id, old id).
pub struct RowSelection {
    current: RwLock<Option<String>>,
    /// Emitted when the current row changes. Args: (new, old).
    pub current_changed: Signal<(Option<String>, Option<String>)>,
}

impl Default for RowSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl RowSelection {
    /// Creates a selection with no current row.
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
            current_changed: Signal::new(),
        }
    }

    /// The current row id, if any.
    pub fn current(&self) -> Option<String> {
        self.current.read().clone()
    }

    /// Returns `true` if `row_id` is the current row.
    pub fn is_current(&self, row_id: &str) -> bool {
        self.current.read().as_deref() == Some(row_id)
    }

    /// Makes `row_id` the current row.
    pub fn set_current(&self, row_id: Option<String>) {
        let old = {
            let mut current = self.current.write();
            if *current == row_id {
                return;
            }
            std::mem::replace(&mut *current, row_id.clone())
        };
        self.current_changed.emit((row_id, old));
    }

    /// Clears the current row, e.g. after a model reset.
    pub fn clear(&self) {
        self.set_current(None);
    }
}
