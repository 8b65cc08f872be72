//! The widget system: the glow button control and its supporting pieces.
//!
//! - [`GlowButton`]: the control itself
//! - [`GlowStyle`] / [`StatePair`]: visual configuration, loadable from TOML
//! - [`TrackingRegistry`]: explicit pointer tracking areas for enter/leave
//! - event types the host feeds into the control

mod events;
mod glow_button;
mod style;
mod tracking;

pub use events::{
    EventBase, MouseButton, PointerEnterEvent, PointerLeaveEvent, PointerPressEvent,
    PointerReleaseEvent,
};
pub use glow_button::{GlowButton, ImagePlacement};
pub use style::{GlowStyle, StatePair, StyleError, HOVER_HIGHLIGHT_LEVEL};
pub use tracking::{TrackingId, TrackingRegistry};
