//! Pointer event types delivered to controls.
//!
//! Hosts translate their native input stream into these events and feed them
//! to a control's `handle_*` methods. Each event carries an [`EventBase`]
//! recording whether the control accepted it, so a dispatcher can decide
//! whether to keep propagating.

use lumen_render::Point;

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left = 0,
    /// Secondary button (usually right).
    Right = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
}

/// Common data for all pointer events.
#[derive(Debug, Clone, Copy)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl Default for EventBase {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Sent when the pointer enters a tracked area.
#[derive(Debug, Clone, Copy)]
pub struct PointerEnterEvent {
    /// Base event data.
    pub base: EventBase,
    /// The position where the pointer entered, in parent coordinates.
    pub pos: Point,
}

impl PointerEnterEvent {
    /// Create a new enter event.
    pub fn new(pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            pos,
        }
    }
}

/// Sent when the pointer leaves a tracked area.
#[derive(Debug, Clone, Copy)]
pub struct PointerLeaveEvent {
    /// Base event data.
    pub base: EventBase,
}

impl PointerLeaveEvent {
    /// Create a new leave event.
    pub fn new() -> Self {
        Self {
            base: EventBase::new(),
        }
    }
}

impl Default for PointerLeaveEvent {
    fn default() -> Self {
        Self::new()
    }
}

/// Sent when a pointer button is pressed over the control.
#[derive(Debug, Clone, Copy)]
pub struct PointerPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: MouseButton,
    /// Position in parent coordinates.
    pub pos: Point,
}

impl PointerPressEvent {
    /// Create a new press event.
    pub fn new(button: MouseButton, pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            button,
            pos,
        }
    }
}

/// Sent when a pointer button is released.
#[derive(Debug, Clone, Copy)]
pub struct PointerReleaseEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was released.
    pub button: MouseButton,
    /// Position in parent coordinates.
    pub pos: Point,
}

impl PointerReleaseEvent {
    /// Create a new release event.
    pub fn new(button: MouseButton, pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            button,
            pos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_base_accept_ignore() {
        let mut base = EventBase::new();
        assert!(!base.is_accepted());

        base.accept();
        assert!(base.is_accepted());

        base.ignore();
        assert!(!base.is_accepted());
    }

    #[test]
    fn test_press_event_starts_unaccepted() {
        let event = PointerPressEvent::new(MouseButton::Left, Point::new(4.0, 5.0));
        assert!(!event.base.is_accepted());
        assert_eq!(event.button, MouseButton::Left);
    }
}
