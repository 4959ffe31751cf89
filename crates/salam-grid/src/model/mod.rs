//! Row models and field access for Salam Grid.
//!
//! This module separates data ownership from display logic:
//!
//! - [`RowModel`] owns the fetched collection and notifies views of changes
//! - [`FieldValue`] is the type-erased unit of cell display, search
//!   matching, and sort comparison
//! - [`RowIdFn`] / [`FieldFn`] are the caller-supplied accessors through
//!   which the grid reads otherwise-opaque rows
//!
//! # Example
//!
//! ```
//! use salam_grid::model::{FieldValue, RowModel};
//!
//! let model = RowModel::new(vec!["Apple".to_string(), "Banana".to_string()]);
//!
//! assert_eq!(model.len(), 2);
//!
//! // Connect to change notifications
//! model.signals().model_reset.connect(|_| {
//!     println!("Collection replaced");
//! });
//! ```

mod fields;
mod rows;

pub use fields::{FieldFn, FieldValue, RowIdFn};
pub use rows::{RowModel, RowSignals};
