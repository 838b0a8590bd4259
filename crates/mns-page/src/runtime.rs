//! A mounted page driven by explicit scroll, time and pointer input.
//!
//! `PageRuntime` owns everything that changes after mount: the element
//! registry, the reveal orchestrator, the drag controller and the scroll
//! effects. It doubles as a [`StyleSource`], so any moment of its life can be
//! rendered as a static snapshot.

use mns_motion::{
    AnimationManager, CaptureTable, DragController, DragOffset, ElementId, ElementRegistry, EventResult,
    NavbarElevation, NavbarState, Parallax, PointerEvent, RevealOrchestrator, Viewport,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::layout::{LayoutError, PageLayout, layout_page};
use crate::page::Page;
use crate::render::StyleSource;
use crate::sections::navbar_id;

/// Height of the fixed navbar; anchor jumps land just below it.
pub const NAVBAR_OFFSET: f32 = 64.0;

/// Upper bound on the time `scroll_through` waits for animations to finish.
const SETTLE_LIMIT_MS: f32 = 30_000.0;

/// Outcome of a simulated scroll from top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollReport {
    pub frames: usize,
    pub final_scroll: f32,
    pub document_height: f32,
    /// Members bound to a batch.
    pub bound: usize,
    /// Bound members that reached the visible state.
    pub visible: usize,
}

impl ScrollReport {
    pub fn all_visible(&self) -> bool {
        self.visible == self.bound
    }
}

pub struct PageRuntime {
    page: Page,
    layout: PageLayout,
    registry: ElementRegistry,
    orchestrator: RevealOrchestrator<AnimationManager>,
    drag: DragController,
    capture: CaptureTable,
    navbar: NavbarElevation,
    parallax: Vec<Parallax>,
    viewport: Viewport,
}

impl PageRuntime {
    /// Lay the page out, mount every keyed element and register every
    /// section's reveal batches. With `motion` off no engine is created and
    /// the page stays fully visible.
    pub fn mount(page: Page, viewport: Viewport, motion: bool) -> Result<Self, LayoutError> {
        let layout = layout_page(&page.body(), viewport.width)?;
        let registry = layout.registry();
        let viewport = viewport.with_document_height(layout.height()).scrolled_to(0.0);

        let mut orchestrator = RevealOrchestrator::new(motion.then(AnimationManager::new));
        for section in page.sections() {
            for batch in section.reveal_batches() {
                orchestrator.register(batch, &registry);
            }
        }

        let parallax = if motion {
            page.parallax_layers().into_iter().map(Parallax::new).collect()
        } else {
            Vec::new()
        };

        let mut runtime = Self {
            drag: DragController::with_cards(page.draggables()),
            page,
            layout,
            registry,
            orchestrator,
            capture: CaptureTable::new(),
            navbar: NavbarElevation::new(),
            parallax,
            viewport,
        };
        runtime.orchestrator.on_scroll(&runtime.viewport, &runtime.registry);

        info!(
            elements = runtime.registry.len(),
            bound = runtime.orchestrator.bound_count(),
            batches = runtime.orchestrator.batch_count(),
            height = runtime.layout.height(),
            motion,
            "page mounted"
        );
        Ok(runtime)
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    pub fn orchestrator(&self) -> &RevealOrchestrator<AnimationManager> {
        &self.orchestrator
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn navbar_state(&self) -> NavbarState {
        self.navbar.state()
    }

    pub fn max_scroll(&self) -> f32 {
        self.viewport.max_scroll(self.layout.height())
    }

    /// Scroll to `scroll_y`, clamped to the document.
    pub fn scroll_to(&mut self, scroll_y: f32) {
        let clamped = scroll_y.clamp(0.0, self.max_scroll());
        self.viewport = self.viewport.scrolled_to(clamped);
        self.orchestrator.on_scroll(&self.viewport, &self.registry);
        self.navbar.on_scroll(clamped);
        for layer in &mut self.parallax {
            layer.on_scroll(clamped);
        }
    }

    /// Jump to an in-page anchor, leaving room for the navbar. Returns the
    /// resulting scroll offset, or `None` for an unknown anchor.
    pub fn scroll_to_anchor(&mut self, anchor: &str) -> Option<f32> {
        let rect = self.layout.anchor(anchor)?;
        self.scroll_to(rect.top() - NAVBAR_OFFSET);
        Some(self.viewport.scroll_y)
    }

    pub fn tick(&mut self, delta_ms: f32) {
        self.orchestrator.tick(delta_ms);
        for layer in &mut self.parallax {
            layer.tick(delta_ms);
        }
    }

    /// Advance time by `elapsed_ms` in frames of `frame_ms`.
    ///
    /// Stops early once nothing is moving, since idle frames change nothing;
    /// an unbounded `elapsed_ms` therefore means "until settled". NaN and
    /// negative durations are no-ops.
    pub fn run_for(&mut self, elapsed_ms: f32, frame_ms: f32) {
        if elapsed_ms.is_nan() || elapsed_ms <= 0.0 {
            return;
        }
        let frame_ms = frame_ms.max(1.0);
        let frames = ((f64::from(elapsed_ms) / f64::from(frame_ms)).ceil() as u64).max(1);
        for frame in 0..frames {
            if !self.is_animating() {
                break;
            }
            let remaining = f64::from(elapsed_ms) - frame as f64 * f64::from(frame_ms);
            self.tick(remaining.min(f64::from(frame_ms)) as f32);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.orchestrator
            .engine()
            .is_some_and(AnimationManager::has_active_animations)
            || self.parallax.iter().any(Parallax::is_moving)
    }

    /// Tear down one section's reveal batches and unmount its elements.
    /// Returns the number of reveal members deregistered.
    pub fn unmount_section(&mut self, section: &str) -> usize {
        let members = self.orchestrator.unmount_section(section);
        let elements = self.registry.unmount_section(section);
        debug!(section, members, elements, "section unmounted");
        members
    }

    /// Scroll from the top of the document to the bottom in `step` pixel
    /// increments, one frame per step, then let running animations finish.
    pub fn scroll_through(&mut self, step: f32, frame_ms: f32) -> ScrollReport {
        let step = step.max(1.0);
        let max_scroll = self.max_scroll();
        let mut frames = 0;

        self.scroll_to(0.0);
        let mut scroll_y = 0.0;
        loop {
            self.tick(frame_ms);
            frames += 1;
            if scroll_y >= max_scroll {
                break;
            }
            scroll_y = (scroll_y + step).min(max_scroll);
            self.scroll_to(scroll_y);
        }

        let mut settled = 0.0;
        while self.is_animating() && settled < SETTLE_LIMIT_MS {
            self.tick(frame_ms);
            settled += frame_ms.max(1.0);
            frames += 1;
        }

        let report = ScrollReport {
            frames,
            final_scroll: self.viewport.scroll_y,
            document_height: self.layout.height(),
            bound: self.orchestrator.bound_count(),
            visible: self.orchestrator.visible_count(),
        };
        info!(
            frames = report.frames,
            bound = report.bound,
            visible = report.visible,
            "scroll-through finished"
        );
        report
    }

    pub fn pointer_down(&mut self, id: &ElementId, event: PointerEvent) -> EventResult {
        self.drag.pointer_down(id, event, &mut self.capture)
    }

    pub fn pointer_move(&mut self, id: &ElementId, event: PointerEvent) -> Option<DragOffset> {
        self.drag.pointer_move(id, event)
    }

    pub fn pointer_up(&mut self, id: &ElementId, event: PointerEvent) -> EventResult {
        self.drag.pointer_up(id, event, &mut self.capture)
    }

    pub fn pointer_leave(&mut self, id: &ElementId, event: PointerEvent) -> EventResult {
        self.drag.pointer_leave(id, event, &mut self.capture)
    }

    /// The host revoked capture (e.g. the window lost focus mid-drag).
    pub fn capture_lost(&mut self, id: &ElementId, pointer_id: u32) -> EventResult {
        self.capture.revoke(id, pointer_id);
        self.drag.capture_lost(id, pointer_id)
    }
}

impl StyleSource for PageRuntime {
    fn inline_style(&self, id: &ElementId) -> Option<String> {
        if *id == navbar_id() {
            return Some(self.navbar.css().to_string());
        }
        if let Some(layer) = self.parallax.iter().find(|layer| layer.element() == id) {
            return layer.style().to_css();
        }
        if self.drag.state(id).is_some() {
            let offset = self.drag.offset(id);
            return (offset != DragOffset::default()).then(|| format!("transform: {}", offset.to_css()));
        }
        self.orchestrator.style_of(id).to_css()
    }
}
