//! Continuous scroll-linked effects: background parallax and navbar elevation.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::easing::EasingFunction;
use super::transition::{ActiveTransition, TransitionSpec};
use super::types::{AnimatableProperty, ElementId, StyleFrame};

pub const PARALLAX_FACTOR: f32 = 0.5;
pub const PARALLAX_DURATION_MS: f32 = 300.0;
pub const NAVBAR_ELEVATION_THRESHOLD: f32 = 50.0;

/// Background that trails the scroll position by `factor`, easing toward
/// each new target.
#[derive(Debug, Clone)]
pub struct Parallax {
    element: ElementId,
    factor: f32,
    spec: TransitionSpec,
    transition: Option<ActiveTransition>,
    offset: f64,
}

impl Parallax {
    pub fn new(element: ElementId) -> Self {
        Self {
            element,
            factor: PARALLAX_FACTOR,
            spec: TransitionSpec::new(PARALLAX_DURATION_MS).with_easing(EasingFunction::PowerOut { power: 2 }),
            transition: None,
            offset: 0.0,
        }
    }

    pub fn with_factor(mut self, factor: f32) -> Self {
        self.factor = factor;
        self
    }

    pub fn element(&self) -> &ElementId {
        &self.element
    }

    /// Retarget the background for a new scroll position.
    pub fn on_scroll(&mut self, scroll_y: f32) {
        let target = f64::from(scroll_y * self.factor);
        match self.transition.as_mut() {
            Some(transition) => transition.retarget(target, &self.spec),
            None => {
                self.transition = Some(ActiveTransition::new(
                    self.element.clone(),
                    AnimatableProperty::TranslateY,
                    self.offset,
                    target,
                    &self.spec,
                ));
            }
        }
    }

    pub fn tick(&mut self, delta_ms: f32) {
        let Some(transition) = self.transition.as_mut() else {
            return;
        };
        let running = transition.update(delta_ms);
        self.offset = transition.current_value();
        if !running {
            self.transition = None;
        }
    }

    /// Jump straight to the resting position for `scroll_y`.
    pub fn settle_at(&mut self, scroll_y: f32) {
        self.transition = None;
        self.offset = f64::from(scroll_y * self.factor);
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_moving(&self) -> bool {
        self.transition.is_some()
    }

    pub fn style(&self) -> StyleFrame {
        StyleFrame::IDENTITY.translate(0.0, self.offset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavbarState {
    #[default]
    Resting,
    Elevated,
}

/// Navbar backdrop that turns opaque with a shadow once the page scrolls.
#[derive(Debug, Clone, Default)]
pub struct NavbarElevation {
    state: NavbarState,
}

impl NavbarElevation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the state changed.
    pub fn on_scroll(&mut self, scroll_y: f32) -> bool {
        let next = if scroll_y > NAVBAR_ELEVATION_THRESHOLD {
            NavbarState::Elevated
        } else {
            NavbarState::Resting
        };
        let changed = next != self.state;
        if changed {
            trace!(?next, scroll_y, "navbar elevation changed");
        }
        self.state = next;
        changed
    }

    pub fn state(&self) -> NavbarState {
        self.state
    }

    pub fn css(&self) -> &'static str {
        match self.state {
            NavbarState::Resting => "background-color: rgba(255, 255, 255, 0.8); box-shadow: none",
            NavbarState::Elevated => {
                "background-color: rgba(255, 255, 255, 0.95); box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1)"
            }
        }
    }
}
