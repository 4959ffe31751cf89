//! Logging facilities for Salam Grid.
//!
//! Salam Grid uses the `tracing` crate for instrumentation. The library
//! never installs a subscriber; to see logs, install one in your
//! application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! All log events carry one of the targets in [`targets`], so a subsystem
//! can be filtered with a standard `tracing` directive, e.g.
//! `RUST_LOG=salam_grid::grid=debug`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "salam_grid_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "salam_grid_core::signal";
    /// Grid widget target (view state, frame derivation).
    pub const GRID: &str = "salam_grid::grid";
    /// Row model target.
    pub const MODEL: &str = "salam_grid::model";
    /// View-preference storage target.
    pub const STORAGE: &str = "salam_grid::storage";
    /// Collection cache target.
    pub const CACHE: &str = "salam_grid::cache";
}
