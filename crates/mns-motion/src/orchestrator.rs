//! Scroll-triggered reveal orchestration.
//!
//! One [`RevealOrchestrator`] serves every section of the page. Sections hand
//! it [`RevealBatch`]es; the orchestrator hides bound members, watches their
//! trigger lines on every scroll update and plays the entrance (or reversal)
//! through the injected [`MotionEngine`].
//!
//! Without an engine the orchestrator never touches styles, so content keeps
//! its default, fully visible state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::engine::MotionEngine;
use super::geometry::Viewport;
use super::registry::ElementRegistry;
use super::reveal::RevealBatch;
use super::trigger::{Grouping, Trigger};
use super::types::{ElementId, StyleFrame};

/// Reveal state of a bound element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealPhase {
    Hidden,
    Revealing,
    Visible,
    Reversing,
}

/// Returned by [`RevealOrchestrator::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BatchHandle(u64);

#[derive(Debug)]
struct BoundMember {
    id: ElementId,
    /// Position in the batch's declared member list.
    registration_index: usize,
    entered: bool,
}

#[derive(Debug)]
struct BoundBatch {
    handle: BatchHandle,
    batch: RevealBatch,
    members: Vec<BoundMember>,
}

pub struct RevealOrchestrator<E: MotionEngine> {
    engine: Option<E>,
    batches: Vec<BoundBatch>,
    phases: HashMap<ElementId, RevealPhase>,
    next_handle: u64,
}

impl<E: MotionEngine> RevealOrchestrator<E> {
    /// Create an orchestrator. `None` means no animation engine is available.
    pub fn new(engine: Option<E>) -> Self {
        Self {
            engine,
            batches: Vec::new(),
            phases: HashMap::new(),
            next_handle: 0,
        }
    }

    pub fn engine_available(&self) -> bool {
        self.engine.is_some()
    }

    pub fn engine(&self) -> Option<&E> {
        self.engine.as_ref()
    }

    pub fn engine_mut(&mut self) -> Option<&mut E> {
        self.engine.as_mut()
    }

    /// Bind a batch's mounted members.
    ///
    /// Members missing from the registry, or already bound by another batch,
    /// are skipped. With an engine, bound members are hidden immediately and
    /// `OnMount` batches start playing.
    pub fn register(&mut self, batch: RevealBatch, registry: &ElementRegistry) -> BatchHandle {
        let handle = BatchHandle(self.next_handle);
        self.next_handle += 1;

        let mut members = Vec::with_capacity(batch.members.len());
        for (registration_index, id) in batch.members.iter().enumerate() {
            if !registry.is_mounted(id) {
                debug!(batch = %batch.id, element = %id, "element not mounted, skipping");
                continue;
            }
            if self.phases.contains_key(id) {
                debug!(batch = %batch.id, element = %id, "element already bound, skipping");
                continue;
            }
            members.push(BoundMember {
                id: id.clone(),
                registration_index,
                entered: false,
            });
        }

        let initial = if self.engine.is_some() {
            RevealPhase::Hidden
        } else {
            RevealPhase::Visible
        };
        for member in &members {
            self.phases.insert(member.id.clone(), initial);
        }

        debug!(
            batch = %batch.id,
            bound = members.len(),
            declared = batch.members.len(),
            engine = self.engine.is_some(),
            "registered reveal batch"
        );

        let mut bound = BoundBatch {
            handle,
            batch,
            members,
        };

        if let Some(engine) = self.engine.as_mut() {
            for member in &bound.members {
                engine.set_style(&member.id, &bound.batch.preset.hidden);
            }
            if bound.batch.trigger == Trigger::OnMount {
                let entering: Vec<usize> = (0..bound.members.len()).collect();
                play_entrances(engine, &mut self.phases, &mut bound, &entering);
            }
        }

        self.batches.push(bound);
        handle
    }

    /// Evaluate trigger crossings for the current viewport.
    pub fn on_scroll(&mut self, viewport: &Viewport, registry: &ElementRegistry) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };

        for bound in &mut self.batches {
            let Trigger::Scroll { start, anchor } = &bound.batch.trigger else {
                continue;
            };
            let anchor_rect = anchor.as_ref().and_then(|id| registry.rect(id));

            let mut entering = Vec::new();
            let mut leaving = Vec::new();
            for (position, member) in bound.members.iter().enumerate() {
                let Some(rect) = anchor_rect.or_else(|| registry.rect(&member.id)) else {
                    continue;
                };
                let inside = start.has_entered(rect, viewport);
                if inside && !member.entered {
                    entering.push(position);
                } else if !inside && member.entered && bound.batch.reverses() {
                    leaving.push(position);
                }
            }

            if !entering.is_empty() {
                debug!(batch = %bound.batch.id, count = entering.len(), scroll_y = viewport.scroll_y, "members entered");
                play_entrances(engine, &mut self.phases, bound, &entering);
            }

            for position in leaving {
                let member = &mut bound.members[position];
                let current = engine
                    .style_of(&member.id)
                    .unwrap_or(bound.batch.preset.target);
                engine.animate(
                    &member.id,
                    &current,
                    &bound.batch.preset.hidden,
                    &bound.batch.preset.reversal(),
                );
                member.entered = false;
                self.phases.insert(member.id.clone(), RevealPhase::Reversing);
                debug!(batch = %bound.batch.id, element = %member.id, "member left, reversing");
            }
        }
    }

    /// Advance the engine and settle finished entrances and reversals.
    pub fn tick(&mut self, delta_ms: f32) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        engine.advance(delta_ms);

        for (id, phase) in self.phases.iter_mut() {
            if engine.is_animating(id) {
                continue;
            }
            *phase = match *phase {
                RevealPhase::Revealing => RevealPhase::Visible,
                RevealPhase::Reversing => RevealPhase::Hidden,
                settled => settled,
            };
        }
    }

    /// Drop every batch owned by `section`, cancelling in-flight animations
    /// of its members. Returns the number of members deregistered.
    pub fn unmount_section(&mut self, section: &str) -> usize {
        let mut removed = 0;
        let mut kept = Vec::with_capacity(self.batches.len());

        for bound in self.batches.drain(..) {
            if bound.batch.section != section {
                kept.push(bound);
                continue;
            }
            for member in &bound.members {
                if let Some(engine) = self.engine.as_mut() {
                    engine.release(&member.id);
                }
                self.phases.remove(&member.id);
                removed += 1;
            }
            debug!(batch = %bound.batch.id, "reveal batch torn down");
        }

        self.batches = kept;
        removed
    }

    pub fn phase(&self, id: &ElementId) -> Option<RevealPhase> {
        self.phases.get(id).copied()
    }

    /// Style to render for an element. `IDENTITY` for anything the engine
    /// does not drive, and for everything when there is no engine.
    pub fn style_of(&self, id: &ElementId) -> StyleFrame {
        self.engine
            .as_ref()
            .and_then(|engine| engine.style_of(id))
            .unwrap_or(StyleFrame::IDENTITY)
    }

    pub fn visible_count(&self) -> usize {
        self.phases
            .values()
            .filter(|phase| **phase == RevealPhase::Visible)
            .count()
    }

    pub fn bound_count(&self) -> usize {
        self.phases.len()
    }

    /// Members of a batch that were bound at registration, in stagger order.
    pub fn bound_members(&self, handle: BatchHandle) -> Vec<&ElementId> {
        self.batches
            .iter()
            .find(|bound| bound.handle == handle)
            .map(|bound| bound.members.iter().map(|member| &member.id).collect())
            .unwrap_or_default()
    }

    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }
}

/// Start the entrance of the members at `positions` (ascending), staggered
/// according to the batch's grouping.
fn play_entrances<E: MotionEngine>(
    engine: &mut E,
    phases: &mut HashMap<ElementId, RevealPhase>,
    bound: &mut BoundBatch,
    positions: &[usize],
) {
    let preset = &bound.batch.preset;
    for (group_index, &position) in positions.iter().enumerate() {
        let member = &mut bound.members[position];
        let stagger_index = match bound.batch.grouping {
            Grouping::Batch => group_index,
            Grouping::Individual => member.registration_index,
        };
        let current = engine.style_of(&member.id).unwrap_or(preset.hidden);
        engine.animate(&member.id, &current, &preset.target, &preset.entrance(stagger_index));
        member.entered = true;
        phases.insert(member.id.clone(), RevealPhase::Revealing);
    }
}
