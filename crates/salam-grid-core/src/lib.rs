//! Core systems for Salam Grid.
//!
//! This crate provides the foundational components of the Salam Grid
//! model/view toolkit:
//!
//! - **Signal/Slot System**: Type-safe change notification between models
//!   and views
//! - **Logging targets**: `tracing` target constants for per-subsystem
//!   filtering
//!
//! # Signal/Slot Example
//!
//! ```
//! use salam_grid_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let page_changed = Signal::<usize>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = page_changed.connect(|page| {
//!     println!("Page changed to: {}", page);
//! });
//!
//! // Emit the signal
//! page_changed.emit(2);
//!
//! // Disconnect when done
//! page_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
