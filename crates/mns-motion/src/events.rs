//! Transition lifecycle notifications.
//!
//! [`AnimationManager`](crate::manager::AnimationManager) records one event
//! per lifecycle change; hosts take them after advancing.

use serde::{Deserialize, Serialize};

use super::types::{AnimatableProperty, AnimationId, ElementId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionEventKind {
    Started,
    /// Reached its target and was folded into the resting style.
    Ended,
    /// Stopped early; the value reached is kept.
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionEvent {
    pub kind: MotionEventKind,
    pub transition_id: AnimationId,
    pub element: ElementId,
    pub property: AnimatableProperty,
}

impl MotionEvent {
    pub fn new(kind: MotionEventKind, transition_id: AnimationId, element: &ElementId, property: AnimatableProperty) -> Self {
        Self {
            kind,
            transition_id,
            element: element.clone(),
            property,
        }
    }
}

/// Events in the order they happened, kept until taken.
#[derive(Debug, Default)]
pub struct EventLog {
    pending: Vec<MotionEvent>,
}

impl EventLog {
    pub fn record(&mut self, event: MotionEvent) {
        tracing::trace!(element = %event.element, property = ?event.property, kind = ?event.kind, "motion event");
        self.pending.push(event);
    }

    pub fn take(&mut self) -> Vec<MotionEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_returns_events_in_order_and_empties_log() {
        let mut log = EventLog::default();
        let stat = ElementId::new("hero.stat.projects");
        log.record(MotionEvent::new(MotionEventKind::Started, AnimationId(7), &stat, AnimatableProperty::Opacity));
        log.record(MotionEvent::new(MotionEventKind::Ended, AnimationId(7), &stat, AnimatableProperty::Opacity));
        assert_eq!(log.len(), 2);

        let kinds: Vec<_> = log.take().into_iter().map(|event| event.kind).collect();
        assert_eq!(kinds, [MotionEventKind::Started, MotionEventKind::Ended]);
        assert!(log.is_empty());
    }
}
