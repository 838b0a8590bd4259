//! Pointer-drag controller for free-floating cards.
//!
//! Each draggable card has its own [`DragState`]. A gesture belongs to the
//! pointer that started it; events from any other pointer leave the card
//! alone. Offsets persist between gestures, so a second drag continues from
//! where the first one left the card.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::geometry::Point;
use super::types::{ElementId, fmt_number};

/// Result of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The event changed drag state.
    Handled,
    /// The event had no effect.
    Ignored,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Handled)
    }
}

/// Pointer event data in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pointer_id: u32,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub fn new(pointer_id: u32, x: f32, y: f32) -> Self {
        Self { pointer_id, x, y }
    }

    fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Translation applied to a dragged card.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DragOffset {
    pub x: f32,
    pub y: f32,
}

impl DragOffset {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// CSS transform, e.g. `translate(12px, -4px)`.
    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px)",
            fmt_number(self.x as f64),
            fmt_number(self.y as f64)
        )
    }
}

/// An in-progress drag owned by one pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gesture {
    pub pointer_id: u32,
    pub origin_pointer: Point,
    pub origin_offset: DragOffset,
}

/// Drag state of one card.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragState {
    pub offset: DragOffset,
    pub gesture: Option<Gesture>,
}

/// Exclusive binding of a pointer to the element that started a drag.
pub trait PointerCapture {
    fn set_capture(&mut self, element: &ElementId, pointer_id: u32);

    fn has_capture(&self, element: &ElementId, pointer_id: u32) -> bool;

    /// Release a capture. Callers check [`has_capture`](Self::has_capture)
    /// first; releasing a capture that is not held is an error on some hosts.
    fn release_capture(&mut self, element: &ElementId, pointer_id: u32);
}

/// In-memory capture bookkeeping for headless hosts.
#[derive(Debug, Default)]
pub struct CaptureTable {
    held: HashSet<(ElementId, u32)>,
}

impl CaptureTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop a capture as if the host revoked it.
    pub fn revoke(&mut self, element: &ElementId, pointer_id: u32) -> bool {
        self.held.remove(&(element.clone(), pointer_id))
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}

impl PointerCapture for CaptureTable {
    fn set_capture(&mut self, element: &ElementId, pointer_id: u32) {
        self.held.insert((element.clone(), pointer_id));
    }

    fn has_capture(&self, element: &ElementId, pointer_id: u32) -> bool {
        self.held.contains(&(element.clone(), pointer_id))
    }

    fn release_capture(&mut self, element: &ElementId, pointer_id: u32) {
        self.held.remove(&(element.clone(), pointer_id));
    }
}

#[derive(Debug, Default)]
pub struct DragController {
    cards: HashMap<ElementId, DragState>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller with the given cards registered at offset zero.
    pub fn with_cards(ids: impl IntoIterator<Item = ElementId>) -> Self {
        Self {
            cards: ids.into_iter().map(|id| (id, DragState::default())).collect(),
        }
    }

    pub fn register(&mut self, id: ElementId) {
        self.cards.entry(id).or_default();
    }

    /// Start a gesture on `id` and claim pointer capture.
    ///
    /// Ignored for elements that were never registered as cards, and while
    /// another pointer owns a gesture on the same card.
    pub fn pointer_down(&mut self, id: &ElementId, event: PointerEvent, capture: &mut dyn PointerCapture) -> EventResult {
        let Some(state) = self.cards.get_mut(id) else {
            trace!(element = %id, "pointer down on an element that is not a card");
            return EventResult::Ignored;
        };
        if let Some(gesture) = &state.gesture {
            if gesture.pointer_id != event.pointer_id {
                trace!(card = %id, owner = gesture.pointer_id, pointer = event.pointer_id, "card already dragged by another pointer");
                return EventResult::Ignored;
            }
        }

        state.gesture = Some(Gesture {
            pointer_id: event.pointer_id,
            origin_pointer: event.position(),
            origin_offset: state.offset,
        });
        capture.set_capture(id, event.pointer_id);
        trace!(card = %id, pointer = event.pointer_id, "drag started");
        EventResult::Handled
    }

    /// Move the card if `event` comes from the pointer owning its gesture.
    pub fn pointer_move(&mut self, id: &ElementId, event: PointerEvent) -> Option<DragOffset> {
        let state = self.cards.get_mut(id)?;
        let gesture = state.gesture.as_ref()?;
        if gesture.pointer_id != event.pointer_id {
            return None;
        }

        state.offset = DragOffset::new(
            gesture.origin_offset.x + (event.x - gesture.origin_pointer.x),
            gesture.origin_offset.y + (event.y - gesture.origin_pointer.y),
        );
        Some(state.offset)
    }

    /// End the gesture owned by `event`'s pointer and release its capture
    /// if it is still held. The offset keeps its last value.
    pub fn pointer_up(&mut self, id: &ElementId, event: PointerEvent, capture: &mut dyn PointerCapture) -> EventResult {
        let ended = self.end_gesture(id, event.pointer_id);
        if capture.has_capture(id, event.pointer_id) {
            capture.release_capture(id, event.pointer_id);
        }
        ended
    }

    /// Pointer left the card; same as releasing it.
    pub fn pointer_leave(&mut self, id: &ElementId, event: PointerEvent, capture: &mut dyn PointerCapture) -> EventResult {
        self.pointer_up(id, event, capture)
    }

    /// The host revoked capture; end the gesture without touching capture.
    pub fn capture_lost(&mut self, id: &ElementId, pointer_id: u32) -> EventResult {
        self.end_gesture(id, pointer_id)
    }

    fn end_gesture(&mut self, id: &ElementId, pointer_id: u32) -> EventResult {
        let Some(state) = self.cards.get_mut(id) else {
            return EventResult::Ignored;
        };
        match state.gesture {
            Some(gesture) if gesture.pointer_id == pointer_id => {
                state.gesture = None;
                trace!(card = %id, pointer = pointer_id, x = state.offset.x, y = state.offset.y, "drag ended");
                EventResult::Handled
            }
            _ => EventResult::Ignored,
        }
    }

    pub fn offset(&self, id: &ElementId) -> DragOffset {
        self.cards.get(id).map(|state| state.offset).unwrap_or_default()
    }

    pub fn is_dragging(&self, id: &ElementId) -> bool {
        self.cards.get(id).is_some_and(|state| state.gesture.is_some())
    }

    pub fn state(&self, id: &ElementId) -> Option<&DragState> {
        self.cards.get(id)
    }

    pub fn transform_css(&self, id: &ElementId) -> String {
        self.offset(id).to_css()
    }

    pub fn cards(&self) -> impl Iterator<Item = &ElementId> {
        self.cards.keys()
    }
}
