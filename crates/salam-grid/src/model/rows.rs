//! Generic row model.
//!
//! `RowModel<T>` owns the full, already-fetched collection a grid displays.
//! It performs no network I/O: when the caller refetches, it swaps the
//! whole collection in with [`RowModel::set_rows`] and connected views
//! re-derive their visible slice.

use parking_lot::RwLock;

use salam_grid_core::Signal;

/// Collection of signals emitted by a row model.
///
/// Views connect to these signals to stay synchronized with the model.
///
/// # Signal Usage
///
/// - **Before modifications**: `rows_about_to_be_inserted` / `_removed`
/// - **After modifications**: `rows_inserted` / `rows_removed`
/// - **Value changes**: `data_changed` with the affected row index
/// - **Whole-collection swap**: `model_about_to_reset` / `model_reset`
/// - **Reordering**: `layout_changed`
pub struct RowSignals {
    /// Emitted just before rows are inserted. Args: (first row, last row).
    pub rows_about_to_be_inserted: Signal<(usize, usize)>,
    /// Emitted after rows have been inserted. Args: (first row, last row).
    pub rows_inserted: Signal<(usize, usize)>,
    /// Emitted just before rows are removed. Args: (first row, last row).
    pub rows_about_to_be_removed: Signal<(usize, usize)>,
    /// Emitted after rows have been removed. Args: (first row, last row).
    pub rows_removed: Signal<(usize, usize)>,
    /// Emitted when an existing row's data changes. Arg: row index.
    pub data_changed: Signal<usize>,
    /// Emitted before the whole collection is replaced.
    pub model_about_to_reset: Signal<()>,
    /// Emitted after the whole collection has been replaced.
    pub model_reset: Signal<()>,
    /// Emitted after rows are reordered in place.
    pub layout_changed: Signal<()>,
}

impl Default for RowSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl RowSignals {
    /// Creates a new set of row signals.
    pub fn new() -> Self {
        Self {
            rows_about_to_be_inserted: Signal::new(),
            rows_inserted: Signal::new(),
            rows_about_to_be_removed: Signal::new(),
            rows_removed: Signal::new(),
            data_changed: Signal::new(),
            model_about_to_reset: Signal::new(),
            model_reset: Signal::new(),
            layout_changed: Signal::new(),
        }
    }

    /// Emits signals for row insertion.
    ///
    /// Calls the provided function between the about_to_be_inserted and
    /// inserted signals.
    pub fn emit_rows_inserted<F>(&self, first: usize, last: usize, insert_fn: F)
    where
        F: FnOnce(),
    {
        self.rows_about_to_be_inserted.emit((first, last));
        insert_fn();
        self.rows_inserted.emit((first, last));
    }

    /// Emits signals for row removal.
    ///
    /// Calls the provided function between the about_to_be_removed and
    /// removed signals.
    pub fn emit_rows_removed<F>(&self, first: usize, last: usize, remove_fn: F)
    where
        F: FnOnce(),
    {
        self.rows_about_to_be_removed.emit((first, last));
        remove_fn();
        self.rows_removed.emit((first, last));
    }

    /// Emits signals for a model reset.
    ///
    /// Calls the provided function between the about_to_reset and reset
    /// signals.
    pub fn emit_reset<F>(&self, reset_fn: F)
    where
        F: FnOnce(),
    {
        self.model_about_to_reset.emit(());
        reset_fn();
        self.model_reset.emit(());
    }
}

/// A generic model holding the rows a grid displays.
///
/// The model has interior mutability so callers can hold it in an `Arc`
/// shared with one or more grids and mutate it when data arrives.
///
/// # Example
///
/// ```
/// use salam_grid::model::RowModel;
///
/// struct Subject {
///     name: String,
///     code: String,
/// }
///
/// let model = RowModel::new(vec![
///     Subject { name: "Fiqih".into(), code: "FQ".into() },
///     Subject { name: "Tajwid".into(), code: "TJ".into() },
/// ]);
///
/// assert_eq!(model.len(), 2);
///
/// // A refetch replaces the whole collection.
/// model.set_rows(vec![
///     Subject { name: "Tauhid".into(), code: "TH".into() },
/// ]);
/// assert_eq!(model.len(), 1);
/// ```
pub struct RowModel<T> {
    rows: RwLock<Vec<T>>,
    signals: RowSignals,
}

impl<T> Default for RowModel<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> RowModel<T> {
    /// Creates a new model with the given rows.
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows: RwLock::new(rows),
            signals: RowSignals::new(),
        }
    }

    /// Creates an empty model.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns the signals for this model.
    pub fn signals(&self) -> &RowSignals {
        &self.signals
    }

    /// Returns the number of rows in the model.
    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    /// Returns `true` if the model is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }

    /// Appends a row to the end of the collection.
    pub fn push(&self, row: T) {
        let index = self.rows.read().len();
        self.signals.emit_rows_inserted(index, index, || {
            self.rows.write().push(row);
        });
    }

    /// Inserts a row at the specified index.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&self, index: usize, row: T) {
        self.signals.emit_rows_inserted(index, index, || {
            self.rows.write().insert(index, row);
        });
    }

    /// Removes and returns the row at the specified index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove(&self, index: usize) -> T {
        let mut removed = None;
        self.signals.emit_rows_removed(index, index, || {
            removed = Some(self.rows.write().remove(index));
        });
        removed.unwrap()
    }

    /// Removes all rows from the model.
    pub fn clear(&self) {
        self.signals.emit_reset(|| {
            self.rows.write().clear();
        });
    }

    /// Replaces the whole collection.
    ///
    /// This is the data-refresh entry point: the caller's fetch layer
    /// produces a fresh `Vec<T>` and swaps it in. Connected grids re-derive
    /// their visible slice on the next frame.
    pub fn set_rows(&self, rows: Vec<T>) {
        tracing::debug!(
            target: "salam_grid::model",
            row_count = rows.len(),
            "replacing row collection"
        );
        self.signals.emit_reset(|| {
            *self.rows.write() = rows;
        });
    }

    /// Returns a read guard over the rows.
    pub fn rows(&self) -> impl std::ops::Deref<Target = Vec<T>> + '_ {
        self.rows.read()
    }

    /// Runs a closure against the row at `index`, if it exists.
    pub fn with_row<F, R>(&self, index: usize, f: F) -> Option<R>
    where
        F: FnOnce(&T) -> R,
    {
        let rows = self.rows.read();
        rows.get(index).map(f)
    }

    /// Provides mutable access to a row via a closure.
    ///
    /// Emits `data_changed` after modification.
    pub fn modify<F, R>(&self, index: usize, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut rows = self.rows.write();
        if index >= rows.len() {
            return None;
        }
        let result = f(&mut rows[index]);
        drop(rows);

        self.signals.data_changed.emit(index);
        Some(result)
    }

    /// Sorts the rows in place using the provided comparator.
    ///
    /// Emits `layout_changed`. Note that grids do not sort the model; they
    /// sort their derived window. This is for callers that want a
    /// persistent base order.
    pub fn sort_by<F>(&self, compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        self.rows.write().sort_by(compare);
        self.signals.layout_changed.emit(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    struct TestRow {
        name: String,
    }

    fn row(name: &str) -> TestRow {
        TestRow { name: name.into() }
    }

    #[test]
    fn test_len_and_access() {
        let model = RowModel::new(vec![row("First"), row("Second")]);

        assert_eq!(model.len(), 2);
        assert!(!model.is_empty());
        assert_eq!(
            model.with_row(1, |r| r.name.clone()),
            Some("Second".to_string())
        );
        assert_eq!(model.with_row(5, |r| r.name.clone()), None);
    }

    #[test]
    fn test_push_and_signals() {
        let model = RowModel::<TestRow>::empty();
        let inserted = Arc::new(Mutex::new(Vec::new()));

        let recv = inserted.clone();
        model.signals().rows_inserted.connect(move |&(first, last)| {
            recv.lock().push((first, last));
        });

        model.push(row("New"));

        assert_eq!(model.len(), 1);
        let events = inserted.lock();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0], (0, 0));
    }

    #[test]
    fn test_remove_and_signals() {
        let model = RowModel::new(vec![row("A"), row("B"), row("C")]);
        let removed = Arc::new(Mutex::new(Vec::new()));

        let recv = removed.clone();
        model.signals().rows_removed.connect(move |&(first, last)| {
            recv.lock().push((first, last));
        });

        let item = model.remove(1);
        assert_eq!(item.name, "B");
        assert_eq!(model.len(), 2);

        let events = removed.lock();
        assert_eq!(events[0], (1, 1));
    }

    #[test]
    fn test_set_rows_emits_reset() {
        let model = RowModel::new(vec![row("A")]);
        let reset = Arc::new(Mutex::new(false));

        let recv = reset.clone();
        model.signals().model_reset.connect(move |_| *recv.lock() = true);

        model.set_rows(vec![row("B"), row("C")]);

        assert!(*reset.lock());
        assert_eq!(model.len(), 2);
    }

    #[test]
    fn test_modify() {
        let model = RowModel::new(vec![row("Original")]);
        let changed = Arc::new(Mutex::new(None));

        let recv = changed.clone();
        model.signals().data_changed.connect(move |&index| {
            *recv.lock() = Some(index);
        });

        model.modify(0, |r| {
            r.name = "Modified".into();
        });

        assert_eq!(*changed.lock(), Some(0));
        assert_eq!(
            model.with_row(0, |r| r.name.clone()),
            Some("Modified".to_string())
        );
    }

    #[test]
    fn test_sort() {
        let model = RowModel::new(vec![row("C"), row("A"), row("B")]);
        let layout_changed = Arc::new(Mutex::new(false));

        let recv = layout_changed.clone();
        model
            .signals()
            .layout_changed
            .connect(move |_| *recv.lock() = true);

        model.sort_by(|a, b| a.name.cmp(&b.name));

        assert!(*layout_changed.lock());
        assert_eq!(model.with_row(0, |r| r.name.clone()), Some("A".to_string()));
    }
}
