//! Headless motion core for the MNS site.
//!
//! This crate provides:
//! - **Transitions**: Eased interpolation of opacity, translation, scale and rotation
//! - **Animation Manager**: The default [`MotionEngine`], with retargeting and fill-forwards
//! - **Reveal Orchestrator**: Scroll-triggered entrance animations for batches of elements
//! - **Drag Controller**: Pointer-driven repositioning of floating cards
//! - **Scroll Effects**: Background parallax and navbar elevation
//!
//! # Architecture
//!
//! ```text
//! RevealOrchestrator<E: MotionEngine>
//!   ├── RevealBatch (members, trigger, replay, grouping, preset)
//!   ├── ElementRegistry (ElementId → ElementRect)
//!   └── E = AnimationManager
//!         └── ActiveTransition per (element, property)
//!
//! DragController
//!   └── DragState per card ── PointerCapture (host seam)
//! ```
//!
//! Everything is driven by explicit calls: scroll positions, elapsed time and
//! pointer events. Nothing reads a clock.

pub mod drag;
pub mod easing;
pub mod engine;
pub mod events;
pub mod geometry;
pub mod interpolate;
pub mod manager;
pub mod orchestrator;
pub mod registry;
pub mod reveal;
pub mod scroll_effects;
pub mod transition;
pub mod trigger;
pub mod types;

pub use drag::{CaptureTable, DragController, DragOffset, DragState, EventResult, Gesture, PointerCapture, PointerEvent};
pub use easing::{EasingFunction, EasingParseError, StepJump};
pub use engine::MotionEngine;
pub use events::{EventLog, MotionEvent, MotionEventKind};
pub use geometry::{ElementRect, Point, Viewport};
pub use interpolate::Interpolate;
pub use manager::AnimationManager;
pub use orchestrator::{BatchHandle, RevealOrchestrator, RevealPhase};
pub use registry::ElementRegistry;
pub use reveal::{RevealBatch, RevealPreset, Stagger};
pub use scroll_effects::{NavbarElevation, NavbarState, Parallax};
pub use transition::{ActiveTransition, TransitionSpec};
pub use trigger::{Edge, Grouping, ReplayPolicy, Trigger, TriggerParseError, TriggerStart};
pub use types::{AnimatableProperty, AnimationId, AnimationState, ElementId, StyleFrame, slug};
