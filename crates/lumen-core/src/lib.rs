//! Core systems for Lumen.
//!
//! This crate provides the foundational pieces shared by the Lumen widget
//! crates:
//!
//! - **Signal/Slot System**: Type-safe callbacks for widget notifications
//! - **Logging targets**: `tracing` target constants for log filtering
//!
//! # Signal Example
//!
//! ```
//! use lumen_core::Signal;
//!
//! let activated = Signal::<()>::new();
//!
//! let conn_id = activated.connect(|()| {
//!     println!("button clicked");
//! });
//!
//! activated.emit(());
//! activated.disconnect(conn_id);
//! ```

pub mod logging;
mod signal;

pub use signal::{ConnectionId, Signal};
