//! Reveal presets and batches.
//!
//! A [`RevealBatch`] is the unit a section hands to the orchestrator: an
//! ordered member list plus the trigger, replay policy, grouping and preset
//! they share. Member order is the stagger order.

use serde::{Deserialize, Serialize};

use super::easing::EasingFunction;
use super::transition::{DEFAULT_DURATION_MS, TransitionSpec};
use super::trigger::{Grouping, ReplayPolicy, Trigger};
use super::types::{ElementId, StyleFrame};

/// Duration used when a preset does not name one.
pub const DEFAULT_REVEAL_DURATION_MS: f32 = DEFAULT_DURATION_MS;

/// Per-member delay: `start_ms + step_ms * index`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Stagger {
    #[serde(default)]
    pub start_ms: f32,
    #[serde(default)]
    pub step_ms: f32,
}

impl Stagger {
    pub const NONE: Stagger = Stagger {
        start_ms: 0.0,
        step_ms: 0.0,
    };

    pub const fn every(step_ms: f32) -> Self {
        Self {
            start_ms: 0.0,
            step_ms,
        }
    }

    pub const fn starting_at(start_ms: f32, step_ms: f32) -> Self {
        Self { start_ms, step_ms }
    }

    /// Delay of the member at `index`. Non-decreasing in `index` for any
    /// non-negative step.
    pub fn delay_for(&self, index: usize) -> f32 {
        (self.start_ms + self.step_ms * index as f32).max(0.0)
    }
}

/// How a member looks before and after its entrance, and how it gets there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealPreset {
    pub hidden: StyleFrame,
    #[serde(default)]
    pub target: StyleFrame,
    pub duration_ms: f32,
    pub easing: EasingFunction,
    #[serde(default)]
    pub stagger: Stagger,
}

impl RevealPreset {
    pub fn new(hidden: StyleFrame) -> Self {
        Self {
            hidden,
            target: StyleFrame::IDENTITY,
            duration_ms: DEFAULT_REVEAL_DURATION_MS,
            easing: EasingFunction::default(),
            stagger: Stagger::NONE,
        }
    }

    pub fn duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    pub fn stagger(mut self, stagger: Stagger) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn target(mut self, target: StyleFrame) -> Self {
        self.target = target;
        self
    }

    /// Transition for the entrance of the member at stagger `index`.
    pub fn entrance(&self, index: usize) -> TransitionSpec {
        TransitionSpec::new(self.duration_ms)
            .with_delay(self.stagger.delay_for(index))
            .with_easing(self.easing)
    }

    /// Transition back to the hidden frame: same curve, no delay.
    pub fn reversal(&self) -> TransitionSpec {
        TransitionSpec::new(self.duration_ms).with_easing(self.easing)
    }
}

/// An ordered group of elements sharing one trigger policy and preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealBatch {
    /// Stable name of the batch, e.g. `products.cards`.
    pub id: String,
    /// Section that owns the members; used for teardown.
    pub section: String,
    pub members: Vec<ElementId>,
    pub trigger: Trigger,
    #[serde(default)]
    pub replay: ReplayPolicy,
    #[serde(default)]
    pub grouping: Grouping,
    pub preset: RevealPreset,
}

impl RevealBatch {
    pub fn new(section: &str, name: &str, trigger: Trigger, preset: RevealPreset) -> Self {
        Self {
            id: format!("{section}.{name}"),
            section: section.to_string(),
            members: Vec::new(),
            trigger,
            replay: ReplayPolicy::default(),
            grouping: Grouping::default(),
            preset,
        }
    }

    pub fn member(mut self, id: ElementId) -> Self {
        self.members.push(id);
        self
    }

    pub fn members(mut self, ids: impl IntoIterator<Item = ElementId>) -> Self {
        self.members.extend(ids);
        self
    }

    pub fn replay(mut self, replay: ReplayPolicy) -> Self {
        self.replay = replay;
        self
    }

    pub fn individually(mut self) -> Self {
        self.grouping = Grouping::Individual;
        self
    }

    pub fn reverses(&self) -> bool {
        self.replay == ReplayPolicy::PlayAndReverse
    }
}
