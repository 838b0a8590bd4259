use anyhow::Result;
use mns_motion::{
    AnimationManager, ElementId, ElementRect, ElementRegistry, EasingFunction, ReplayPolicy, RevealBatch,
    RevealOrchestrator, RevealPhase, RevealPreset, Stagger, StyleFrame, Trigger, TriggerStart, Viewport,
};

const VIEWPORT_HEIGHT: f32 = 800.0;
const FRAME_MS: f32 = 16.0;

/// Three sections stacked down a 4000px page, each with a batch of cards.
fn page() -> (ElementRegistry, Vec<RevealBatch>, f32) {
    let mut registry = ElementRegistry::new();
    let mut batches = Vec::new();

    for (section_index, section) in ["features", "catalog", "contact"].into_iter().enumerate() {
        let top = 600.0 + section_index as f32 * 1100.0;
        let ids: Vec<ElementId> = (0..4)
            .map(|card| ElementId::scoped(section, "card", &format!("item {card}")))
            .collect();
        for (card, id) in ids.iter().enumerate() {
            registry.mount(id.clone(), ElementRect::new(0.0, top + card as f32 * 220.0, 300.0, 180.0));
        }

        let preset = RevealPreset::new(StyleFrame::IDENTITY.opacity(0.0).translate(0.0, 60.0).scale(0.8))
            .duration(700.0)
            .easing("power2.out".parse().unwrap_or_default())
            .stagger(Stagger::every(150.0));
        let mut batch = RevealBatch::new(section, "cards", Trigger::scroll(TriggerStart::top(85.0)), preset)
            .members(ids)
            .member(ElementId::scoped(section, "card", "never mounted"));
        if section_index % 2 == 0 {
            batch = batch.replay(ReplayPolicy::PlayAndReverse).individually();
        }
        batches.push(batch);
    }

    (registry, batches, 4000.0)
}

fn scroll_through<E: mns_motion::MotionEngine>(
    orchestrator: &mut RevealOrchestrator<E>,
    registry: &ElementRegistry,
    document_height: f32,
) {
    let base = Viewport::new(1280.0, VIEWPORT_HEIGHT).with_document_height(document_height);
    let max_scroll = base.max_scroll(document_height);
    let mut scroll_y = 0.0;
    loop {
        orchestrator.on_scroll(&base.scrolled_to(scroll_y), registry);
        orchestrator.tick(FRAME_MS);
        if scroll_y >= max_scroll {
            break;
        }
        scroll_y = (scroll_y + 40.0).min(max_scroll);
    }
    // Let the last staggered entrances finish.
    for _ in 0..200 {
        orchestrator.tick(FRAME_MS);
    }
}

#[test]
fn every_mounted_member_becomes_visible_after_full_scroll() -> Result<()> {
    let (registry, batches, height) = page();
    let mut orchestrator = RevealOrchestrator::new(Some(AnimationManager::new()));
    for batch in batches {
        orchestrator.register(batch, &registry);
    }

    assert_eq!(orchestrator.bound_count(), registry.len());
    assert_eq!(orchestrator.visible_count(), 0);

    scroll_through(&mut orchestrator, &registry, height);

    assert_eq!(orchestrator.visible_count(), registry.len());
    for (id, _) in registry.iter() {
        assert_eq!(orchestrator.style_of(id), StyleFrame::IDENTITY, "{id} should be at rest");
    }
    Ok(())
}

#[test]
fn scrolling_back_up_reverses_only_reversible_batches() -> Result<()> {
    let (registry, batches, height) = page();
    let mut orchestrator = RevealOrchestrator::new(Some(AnimationManager::new()));
    for batch in batches {
        orchestrator.register(batch, &registry);
    }
    scroll_through(&mut orchestrator, &registry, height);

    let top = Viewport::new(1280.0, VIEWPORT_HEIGHT).with_document_height(height);
    orchestrator.on_scroll(&top, &registry);
    for _ in 0..100 {
        orchestrator.tick(FRAME_MS);
    }

    // Line at 680px: the first features card (600px) is still past it.
    let still_in = ElementId::scoped("features", "card", "item 0");
    let features = ElementId::scoped("features", "card", "item 3");
    let catalog = ElementId::scoped("catalog", "card", "item 0");
    assert_eq!(orchestrator.phase(&features), Some(RevealPhase::Hidden));
    assert_eq!(orchestrator.style_of(&features).opacity, 0.0);
    assert_eq!(orchestrator.phase(&still_in), Some(RevealPhase::Visible));
    assert_eq!(orchestrator.phase(&catalog), Some(RevealPhase::Visible));
    Ok(())
}

#[test]
fn missing_engine_leaves_all_content_visible() -> Result<()> {
    let (registry, batches, height) = page();
    let mut orchestrator: RevealOrchestrator<AnimationManager> = RevealOrchestrator::new(None);
    for batch in batches {
        orchestrator.register(batch, &registry);
    }

    for (id, _) in registry.iter() {
        assert_eq!(orchestrator.style_of(id), StyleFrame::IDENTITY);
        assert!(StyleFrame::IDENTITY.to_css().is_none());
    }
    scroll_through(&mut orchestrator, &registry, height);
    assert_eq!(orchestrator.visible_count(), registry.len());
    Ok(())
}

#[test]
fn stagger_delays_never_decrease_with_index() {
    let presets = [
        Stagger::every(30.0),
        Stagger::starting_at(1200.0, 150.0),
        Stagger::starting_at(400.0, 100.0),
        Stagger::NONE,
    ];
    for stagger in presets {
        let preset = RevealPreset::new(StyleFrame::IDENTITY.opacity(0.0)).stagger(stagger);
        let delays: Vec<f32> = (0..20).map(|index| preset.entrance(index).delay_ms).collect();
        assert!(delays.windows(2).all(|pair| pair[1] >= pair[0]), "{stagger:?}");
    }
}
