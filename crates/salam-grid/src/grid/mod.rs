//! The data grid: controls, derivation pipeline, and frame output.
//!
//! A [`DataGrid`] owns the user's control state (search query, sort,
//! page, page size, view mode) and derives what is visible from a shared
//! [`RowModel`](crate::model::RowModel) on demand. The derivation order
//! is fixed: filter, then sort, then paginate. Rendering is data-out via
//! [`GridFrame`]; interactions come back in through the grid's methods.

mod actions;
mod column;
mod data_grid;
mod frame;
mod pipeline;
mod view_state;

pub use actions::{ActionHandler, RowAction, RowActionKind};
pub use column::{Alignment, ColumnDef};
pub use data_grid::{DataGrid, DataGridBuilder};
pub use frame::{
    Card, CardContent, CardFrame, CardRenderFn, GridFrame, HeaderCell, TableFrame, TableRow,
};
pub use pipeline::{PageInfo, RowWindow};
pub use view_state::{SortDirection, SortState, ViewMode, ViewState};
