//! The animation engine seam.
//!
//! The reveal orchestrator never looks an engine up ambiently: it receives one
//! (or `None`) at construction. `AnimationManager` is the built-in
//! implementation; tests can substitute their own.

use super::transition::TransitionSpec;
use super::types::{ElementId, StyleFrame};

/// Property tweening backend driven by explicit time steps.
pub trait MotionEngine {
    /// Set an element's style immediately, cancelling anything in flight.
    fn set_style(&mut self, element: &ElementId, frame: &StyleFrame);

    /// Animate an element from `from` to `to`.
    ///
    /// Properties already in flight are retargeted from their current value.
    fn animate(&mut self, element: &ElementId, from: &StyleFrame, to: &StyleFrame, spec: &TransitionSpec);

    /// Stop every animation of an element, holding its current style.
    fn cancel(&mut self, element: &ElementId);

    /// Forget an element entirely.
    fn release(&mut self, element: &ElementId);

    /// Advance time for every running animation.
    fn advance(&mut self, delta_ms: f32);

    /// Current style of an element, or `None` if the engine never touched it.
    fn style_of(&self, element: &ElementId) -> Option<StyleFrame>;

    /// Whether any animation (including a pending delay) targets the element.
    fn is_animating(&self, element: &ElementId) -> bool;
}
