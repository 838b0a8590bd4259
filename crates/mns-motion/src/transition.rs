//! Timed interpolation of one numeric property.
//!
//! A [`TransitionSpec`] says how long a change takes, how long it waits, and
//! how it accelerates. An [`ActiveTransition`] is that spec applied to one
//! property of one element, with a clock the manager advances every frame.
//!
//! ```
//! use mns_motion::easing::EasingFunction;
//! use mns_motion::transition::TransitionSpec;
//!
//! let fade = TransitionSpec::new(900.0)
//!     .with_delay(200.0)
//!     .with_easing(EasingFunction::OutExpo);
//! assert_eq!(fade.total_ms(), 1100.0);
//! ```

use serde::{Deserialize, Serialize};

use super::easing::EasingFunction;
use super::interpolate::Interpolate;
use super::types::{AnimatableProperty, AnimationId, AnimationState, ElementId};

/// Entrance length used when a preset does not name one.
pub const DEFAULT_DURATION_MS: f32 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionSpec {
    pub duration_ms: f32,
    /// Wait before the value starts moving.
    pub delay_ms: f32,
    pub easing: EasingFunction,
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            delay_ms: 0.0,
            easing: EasingFunction::PowerOut { power: 3 },
        }
    }
}

impl TransitionSpec {
    pub fn new(duration_ms: f32) -> Self {
        Self {
            duration_ms: duration_ms.max(0.0),
            ..Self::default()
        }
    }

    pub fn with_delay(self, delay_ms: f32) -> Self {
        Self {
            delay_ms: delay_ms.max(0.0),
            ..self
        }
    }

    pub fn with_easing(self, easing: EasingFunction) -> Self {
        Self { easing, ..self }
    }

    /// Delay plus duration.
    pub fn total_ms(&self) -> f32 {
        self.delay_ms + self.duration_ms
    }
}

/// One property moving from `start` to `target`.
#[derive(Debug, Clone)]
pub struct ActiveTransition {
    pub id: AnimationId,
    pub element: ElementId,
    pub property: AnimatableProperty,
    pub start: f64,
    pub target: f64,
    spec: TransitionSpec,
    /// Milliseconds since creation or the last retarget, delay included.
    clock_ms: f32,
    cancelled: bool,
}

impl ActiveTransition {
    pub fn new(
        element: ElementId,
        property: AnimatableProperty,
        start: f64,
        target: f64,
        spec: &TransitionSpec,
    ) -> Self {
        Self {
            id: AnimationId::new(),
            element,
            property,
            start,
            target,
            spec: *spec,
            clock_ms: 0.0,
            cancelled: false,
        }
    }

    pub fn spec(&self) -> &TransitionSpec {
        &self.spec
    }

    pub fn clock_ms(&self) -> f32 {
        self.clock_ms
    }

    /// Derived from the clock; only cancellation is stored.
    pub fn state(&self) -> AnimationState {
        if self.cancelled {
            AnimationState::Cancelled
        } else if self.clock_ms < self.spec.delay_ms {
            AnimationState::Pending
        } else if self.clock_ms - self.spec.delay_ms >= self.spec.duration_ms {
            AnimationState::Finished
        } else {
            AnimationState::Running
        }
    }

    /// Linear progress through the duration, in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        if self.spec.duration_ms <= 0.0 {
            return if self.clock_ms >= self.spec.delay_ms { 1.0 } else { 0.0 };
        }
        ((self.clock_ms - self.spec.delay_ms) / self.spec.duration_ms).clamp(0.0, 1.0)
    }

    pub fn current_value(&self) -> f64 {
        match self.state() {
            AnimationState::Finished => self.target,
            AnimationState::Pending | AnimationState::Cancelled => self.start,
            AnimationState::Running => {
                let eased = self.spec.easing.evaluate(self.progress());
                self.start.interpolate(&self.target, eased)
            }
        }
    }

    /// Move the clock forward. Returns whether the transition still has
    /// work left; a single long frame may cover both delay and duration.
    pub fn update(&mut self, delta_ms: f32) -> bool {
        if !self.is_active() {
            return false;
        }
        self.clock_ms += delta_ms.max(0.0);
        self.is_active()
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state(), AnimationState::Pending | AnimationState::Running)
    }

    pub fn is_finished(&self) -> bool {
        self.state() == AnimationState::Finished
    }

    /// Head for `target` from the value reached so far, restarting the clock
    /// under `spec`.
    pub fn retarget(&mut self, target: f64, spec: &TransitionSpec) {
        self.start = self.current_value();
        self.target = target;
        self.spec = *spec;
        self.clock_ms = 0.0;
        self.cancelled = false;
    }
}
