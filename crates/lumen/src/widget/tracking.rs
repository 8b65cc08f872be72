//! Pointer tracking areas.
//!
//! Hover feedback only works if something watches the pointer cross control
//! boundaries. The [`TrackingRegistry`] is that something: controls register
//! the rectangle they occupy, the host feeds pointer positions to the
//! registry, and the registry reports which areas contain the pointer so the
//! host can synthesize enter/leave events.
//!
//! Registration is explicit. A control that is removed from its host must be
//! unregistered, and a control whose frame changes must push the new
//! rectangle, otherwise enter/leave detection goes stale.

use lumen_render::{Point, Rect};
use slotmap::SlotMap;

use lumen_core::logging::targets;

slotmap::new_key_type! {
    /// Stable handle for a registered tracking area.
    pub struct TrackingId;
}

/// Registry of rectangular pointer-tracking areas.
#[derive(Debug, Default)]
pub struct TrackingRegistry {
    areas: SlotMap<TrackingId, Rect>,
}

impl TrackingRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tracking area and return its handle.
    pub fn register(&mut self, rect: Rect) -> TrackingId {
        let id = self.areas.insert(rect);
        tracing::debug!(target: targets::TRACKING, ?id, ?rect, "registered tracking area");
        id
    }

    /// Replace the rectangle of an existing area.
    ///
    /// Returns `false` if the handle is no longer registered.
    pub fn set_rect(&mut self, id: TrackingId, rect: Rect) -> bool {
        match self.areas.get_mut(id) {
            Some(slot) => {
                *slot = rect;
                true
            }
            None => false,
        }
    }

    /// Remove an area. Returns `false` if the handle was already gone.
    pub fn unregister(&mut self, id: TrackingId) -> bool {
        let removed = self.areas.remove(id).is_some();
        if removed {
            tracing::debug!(target: targets::TRACKING, ?id, "unregistered tracking area");
        }
        removed
    }

    /// The rectangle registered under `id`, if still present.
    pub fn rect(&self, id: TrackingId) -> Option<Rect> {
        self.areas.get(id).copied()
    }

    /// Whether the area under `id` currently contains `point`.
    pub fn contains(&self, id: TrackingId, point: Point) -> bool {
        self.areas
            .get(id)
            .map(|rect| rect.contains(point))
            .unwrap_or(false)
    }

    /// All areas containing `point`, in registration order.
    pub fn areas_at(&self, point: Point) -> Vec<TrackingId> {
        self.areas
            .iter()
            .filter(|(_, rect)| rect.contains(point))
            .map(|(id, _)| id)
            .collect()
    }

    /// Number of registered areas.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Whether the registry has no areas.
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
