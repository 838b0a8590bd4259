//! The built-in [`MotionEngine`].
//!
//! Each element has a resting [`StyleFrame`]; every property that is moving
//! has one [`ActiveTransition`] layered over it. Asking to animate a property
//! that is already moving bends the running transition toward the new target
//! instead of jumping back to the nominal start. A finished transition writes
//! its target into the resting frame, so the final style sticks.
//!
//! ```
//! use mns_motion::engine::MotionEngine;
//! use mns_motion::manager::AnimationManager;
//! use mns_motion::transition::TransitionSpec;
//! use mns_motion::types::{ElementId, StyleFrame};
//!
//! let mut manager = AnimationManager::new();
//! let card = ElementId::new("products.card.joint-mortar");
//! let hidden = StyleFrame::IDENTITY.opacity(0.0).translate(0.0, 80.0);
//!
//! manager.animate(&card, &hidden, &StyleFrame::IDENTITY, &TransitionSpec::new(800.0));
//! manager.advance(16.0);
//! assert!(manager.style_of(&card).unwrap().opacity > 0.0);
//! ```

use std::collections::HashMap;

use super::engine::MotionEngine;
use super::events::{EventLog, MotionEvent, MotionEventKind};
use super::transition::{ActiveTransition, TransitionSpec};
use super::types::{AnimatableProperty, ElementId, StyleFrame};

type Track = (ElementId, AnimatableProperty);

#[derive(Debug, Default)]
pub struct AnimationManager {
    resting: HashMap<ElementId, StyleFrame>,
    moving: HashMap<Track, ActiveTransition>,
    events: EventLog,
}

impl AnimationManager {
    pub fn new() -> Self {
        Self::default()
    }

    fn rest(&mut self, element: &ElementId, property: AnimatableProperty, value: f64) {
        self.resting
            .entry(element.clone())
            .or_insert(StyleFrame::IDENTITY)
            .set(property, value);
    }

    /// Move one property toward `to`. A property already in motion is
    /// retargeted and `from` is ignored.
    pub fn move_property(
        &mut self,
        element: &ElementId,
        property: AnimatableProperty,
        from: f64,
        to: f64,
        spec: &TransitionSpec,
    ) {
        let track = (element.clone(), property);
        if let Some(running) = self.moving.get_mut(&track) {
            running.retarget(to, spec);
            return;
        }

        self.rest(element, property, from);
        let transition = ActiveTransition::new(element.clone(), property, from, to, spec);
        self.events
            .record(MotionEvent::new(MotionEventKind::Started, transition.id, element, property));
        self.moving.insert(track, transition);
    }

    /// Stop everything moving on `element`, keeping the values reached.
    fn halt(&mut self, element: &ElementId) {
        for property in AnimatableProperty::ALL {
            if let Some(mut transition) = self.moving.remove(&(element.clone(), property)) {
                let reached = transition.current_value();
                transition.cancel();
                self.rest(element, property, reached);
                self.events
                    .record(MotionEvent::new(MotionEventKind::Cancelled, transition.id, element, property));
            }
        }
    }

    /// Value `property` has right now, moving or resting.
    pub fn value_of(&self, element: &ElementId, property: AnimatableProperty) -> Option<f64> {
        match self.moving.get(&(element.clone(), property)) {
            Some(transition) => Some(transition.current_value()),
            None => self.resting.get(element).map(|frame| frame.get(property)),
        }
    }

    pub fn moving_count(&self) -> usize {
        self.moving.len()
    }

    pub fn has_active_animations(&self) -> bool {
        !self.moving.is_empty()
    }

    pub fn take_events(&mut self) -> Vec<MotionEvent> {
        self.events.take()
    }
}

impl MotionEngine for AnimationManager {
    fn set_style(&mut self, element: &ElementId, frame: &StyleFrame) {
        self.halt(element);
        self.resting.insert(element.clone(), *frame);
    }

    fn animate(&mut self, element: &ElementId, from: &StyleFrame, to: &StyleFrame, spec: &TransitionSpec) {
        for property in AnimatableProperty::ALL {
            let (start, end) = (from.get(property), to.get(property));
            let in_motion = self.moving.contains_key(&(element.clone(), property));
            if in_motion || (start - end).abs() > f64::EPSILON {
                self.move_property(element, property, start, end, spec);
            } else {
                self.rest(element, property, end);
            }
        }
    }

    fn cancel(&mut self, element: &ElementId) {
        self.halt(element);
    }

    fn release(&mut self, element: &ElementId) {
        self.halt(element);
        self.resting.remove(element);
    }

    fn advance(&mut self, delta_ms: f32) {
        let mut landed = Vec::new();
        for (track, transition) in &mut self.moving {
            if !transition.update(delta_ms) {
                landed.push(track.clone());
            }
        }

        for track in landed {
            let Some(transition) = self.moving.remove(&track) else {
                continue;
            };
            let (element, property) = track;
            self.rest(&element, property, transition.target);
            self.events
                .record(MotionEvent::new(MotionEventKind::Ended, transition.id, &element, property));
        }
    }

    fn style_of(&self, element: &ElementId) -> Option<StyleFrame> {
        let mut frame = *self.resting.get(element)?;
        for property in AnimatableProperty::ALL {
            if let Some(transition) = self.moving.get(&(element.clone(), property)) {
                frame.set(property, transition.current_value());
            }
        }
        Some(frame)
    }

    fn is_animating(&self, element: &ElementId) -> bool {
        AnimatableProperty::ALL
            .into_iter()
            .any(|property| self.moving.contains_key(&(element.clone(), property)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::EasingFunction;

    fn linear(duration_ms: f32) -> TransitionSpec {
        TransitionSpec::new(duration_ms).with_easing(EasingFunction::Linear)
    }

    fn faded_down() -> StyleFrame {
        StyleFrame::IDENTITY.opacity(0.0).translate(0.0, 40.0)
    }

    fn card() -> ElementId {
        ElementId::new("why-choose-us.card.durability")
    }

    #[test]
    fn test_entrance_lands_on_identity() {
        let mut manager = AnimationManager::new();
        manager.animate(&card(), &faded_down(), &StyleFrame::IDENTITY, &linear(200.0));
        assert!(manager.is_animating(&card()));

        manager.advance(100.0);
        let halfway = manager.style_of(&card()).unwrap();
        assert!((halfway.opacity - 0.5).abs() < 1e-6);
        assert!((halfway.translate_y - 20.0).abs() < 1e-6);

        manager.advance(120.0);
        assert!(!manager.has_active_animations());
        assert_eq!(manager.style_of(&card()), Some(StyleFrame::IDENTITY));
    }

    #[test]
    fn test_unchanged_properties_rest_without_moving() {
        let mut manager = AnimationManager::new();
        manager.animate(&card(), &faded_down(), &StyleFrame::IDENTITY, &linear(200.0));
        assert_eq!(manager.moving_count(), 2);
        assert_eq!(manager.value_of(&card(), AnimatableProperty::Scale), Some(1.0));
    }

    #[test]
    fn test_reverse_mid_entrance_bends_from_reached_value() {
        let mut manager = AnimationManager::new();
        manager.animate(&card(), &faded_down(), &StyleFrame::IDENTITY, &linear(200.0));
        manager.advance(100.0);

        manager.animate(&card(), &StyleFrame::IDENTITY, &faded_down(), &linear(200.0));
        let turned = manager.style_of(&card()).unwrap();
        assert!((turned.opacity - 0.5).abs() < 1e-6);

        manager.advance(200.0);
        assert_eq!(manager.style_of(&card()), Some(faded_down()));
    }

    #[test]
    fn test_cancel_keeps_partial_progress() {
        let mut manager = AnimationManager::new();
        manager.animate(&card(), &faded_down(), &StyleFrame::IDENTITY, &linear(100.0));
        manager.advance(25.0);
        manager.cancel(&card());

        assert!(!manager.is_animating(&card()));
        let frozen = manager.style_of(&card()).unwrap();
        assert!((frozen.opacity - 0.25).abs() < 1e-6);

        manager.advance(500.0);
        assert_eq!(manager.style_of(&card()), Some(frozen));
    }

    #[test]
    fn test_release_forgets_element() {
        let mut manager = AnimationManager::new();
        assert_eq!(manager.style_of(&card()), None);

        manager.set_style(&card(), &faded_down());
        assert_eq!(manager.style_of(&card()), Some(faded_down()));

        manager.release(&card());
        assert_eq!(manager.style_of(&card()), None);
    }

    #[test]
    fn test_events_record_start_then_end() {
        let mut manager = AnimationManager::new();
        manager.move_property(&card(), AnimatableProperty::Opacity, 0.0, 1.0, &linear(10.0));
        manager.advance(20.0);

        let kinds: Vec<_> = manager.take_events().into_iter().map(|event| event.kind).collect();
        assert_eq!(kinds, [MotionEventKind::Started, MotionEventKind::Ended]);
        assert!(manager.take_events().is_empty());
    }

    #[test]
    fn test_delayed_entrance_holds_hidden_frame() {
        let mut manager = AnimationManager::new();
        manager.animate(&card(), &faded_down(), &StyleFrame::IDENTITY, &linear(100.0).with_delay(200.0));
        manager.advance(150.0);

        assert!(manager.is_animating(&card()));
        assert_eq!(manager.style_of(&card()), Some(faded_down()));
        assert_eq!(manager.value_of(&card(), AnimatableProperty::Opacity), Some(0.0));
    }
}
