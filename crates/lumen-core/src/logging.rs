//! Logging facilities for Lumen.
//!
//! Lumen uses the `tracing` crate for instrumentation. To see logs, install a
//! tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Widget state transitions log at `trace`, style passes at `debug`. Use the
//! constants in [`targets`] with `tracing` directives (for example
//! `RUST_LOG=lumen::interaction=trace`) to filter by subsystem.

/// Target names for log filtering.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "lumen_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "lumen_core::signal";
    /// Widget style/recolor pass target.
    pub const STYLE: &str = "lumen::style";
    /// Widget layout pass target.
    pub const LAYOUT: &str = "lumen::layout";
    /// Pointer interaction target.
    pub const INTERACTION: &str = "lumen::interaction";
    /// Tracking-area registry target.
    pub const TRACKING: &str = "lumen::tracking";
}
