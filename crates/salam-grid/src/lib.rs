//! Salam Grid - a searchable, sortable, paginated data grid for
//! collection screens.
//!
//! School-administration dashboards are dozens of list screens over
//! different row types: subjects, books, classes, teachers. This crate
//! factors out what they share. The caller supplies a row type, column
//! definitions, search fields, and an action handler; the grid owns the
//! control state and derives the visible slice in a fixed order (filter,
//! then sort, then paginate), rendering it as plain-data frames in either
//! table or card form.
//!
//! The grid performs no I/O. Fetching, mutation, and cache invalidation
//! stay with the caller, wired in through the [`storage`] and [`cache`]
//! ports and the [`RowModel`](model::RowModel) refresh entry point.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use salam_grid::grid::{ColumnDef, DataGridBuilder, GridFrame};
//! use salam_grid::model::{FieldValue, RowModel};
//!
//! #[derive(Clone)]
//! struct Subject {
//!     id: String,
//!     name: String,
//! }
//!
//! let model = Arc::new(RowModel::new(vec![
//!     Subject { id: "s-1".into(), name: "Fiqih".into() },
//!     Subject { id: "s-2".into(), name: "Tajwid".into() },
//! ]));
//!
//! let grid = DataGridBuilder::new(Arc::clone(&model), |s: &Subject| s.id.clone())
//!     .column(ColumnDef::new("name", "Subject", |s: &Subject| {
//!         FieldValue::from(s.name.as_str())
//!     }))
//!     .search_field(|s: &Subject| FieldValue::from(s.name.as_str()))
//!     .build()?;
//!
//! grid.set_query("taj");
//! match grid.frame() {
//!     GridFrame::Table(table) => assert_eq!(table.rows.len(), 1),
//!     other => panic!("unexpected frame: {other:?}"),
//! }
//! # Ok::<(), salam_grid::GridError>(())
//! ```

pub mod cache;
mod error;
pub mod grid;
pub mod model;
pub mod selection;
pub mod storage;

pub use error::{GridError, Result};
pub use grid::{DataGrid, DataGridBuilder, GridFrame, ViewMode};
pub use model::RowModel;
