use std::fs;

use anyhow::Result;
use mns_motion::{ElementId, RevealPhase, Viewport};
use mns_page::{Page, PageRuntime, RevealManifest, StaticStyles, render_document};
use scraper::{Html, Selector};

const YEAR: i32 = 2025;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

fn mount(motion: bool) -> Result<PageRuntime> {
    Ok(PageRuntime::mount(Page::new(YEAR), Viewport::new(1280.0, 800.0), motion)?)
}

#[test]
fn static_render_shows_every_revealable_element() -> Result<()> {
    let page = Page::new(YEAR);
    let html = Html::parse_document(&render_document(&page, &StaticStyles)?);

    let revealable: Vec<_> = html.select(&selector("[data-reveal]")).collect();
    assert_eq!(revealable.len(), RevealManifest::from_page(&page).member_count());
    for element in revealable {
        assert!(
            element.value().attr("style").is_none(),
            "{:?} carries an inline style",
            element.value().attr("data-reveal")
        );
    }
    Ok(())
}

#[test]
fn missing_engine_never_hides_content() -> Result<()> {
    let mut runtime = mount(false)?;
    assert!(!runtime.orchestrator().engine_available());

    runtime.scroll_to(1500.0);
    runtime.run_for(500.0, 16.0);

    let html = Html::parse_document(&render_document(runtime.page(), &runtime)?);
    assert_eq!(html.select(&selector("[data-reveal][style]")).count(), 0);
    assert_eq!(
        runtime.orchestrator().visible_count(),
        runtime.orchestrator().bound_count()
    );
    Ok(())
}

#[test]
fn content_below_the_fold_starts_hidden() -> Result<()> {
    let runtime = mount(true)?;
    let html = Html::parse_document(&render_document(runtime.page(), &runtime)?);

    let card = html
        .select(&selector(r#"[data-reveal="products.card.joint-mortar"]"#))
        .next()
        .expect("joint mortar card rendered");
    let style = card.value().attr("style").unwrap_or_default();
    assert!(style.contains("opacity: 0"), "unexpected style {style:?}");
    Ok(())
}

#[test]
fn full_scroll_reveals_every_bound_member() -> Result<()> {
    let mut runtime = mount(true)?;
    let declared = RevealManifest::from_page(runtime.page()).member_count();

    let report = runtime.scroll_through(40.0, 16.0);
    assert_eq!(report.bound, declared);
    assert!(report.all_visible(), "{} of {} visible", report.visible, report.bound);
    assert_eq!(report.final_scroll, runtime.max_scroll());

    let html = Html::parse_document(&render_document(runtime.page(), &runtime)?);
    for element in html.select(&selector("[data-reveal]")) {
        let style = element.value().attr("style").unwrap_or_default();
        assert!(!style.contains("opacity"), "{style:?} left on a revealed element");
    }
    Ok(())
}

#[test]
fn scrolling_back_to_top_reverses_only_reversible_batches() -> Result<()> {
    let mut runtime = mount(true)?;
    runtime.scroll_through(40.0, 16.0);

    runtime.scroll_to(0.0);
    runtime.run_for(2000.0, 16.0);

    let orchestrator = runtime.orchestrator();
    assert_eq!(
        orchestrator.phase(&ElementId::new("products.card.concrete-mix")),
        Some(RevealPhase::Hidden)
    );
    assert_eq!(
        orchestrator.phase(&ElementId::new("products.highlight.thermal-stable")),
        Some(RevealPhase::Visible)
    );
    assert_eq!(
        orchestrator.phase(&ElementId::new("hero.stat.projects-delivered")),
        Some(RevealPhase::Visible)
    );

    // And they replay on the way back down.
    let report = runtime.scroll_through(40.0, 16.0);
    assert!(report.all_visible());
    Ok(())
}

#[test]
fn navigation_targets_exist() -> Result<()> {
    let html = Html::parse_document(&render_document(&Page::new(YEAR), &StaticStyles)?);

    let targets: Vec<String> = html
        .select(&selector(r##"a[href^="#"]"##))
        .filter_map(|link| link.value().attr("href"))
        .filter(|href| href.len() > 1)
        .map(|href| href[1..].to_string())
        .collect();
    assert!(targets.iter().any(|target| target == "contact"));

    for target in targets {
        let found = html.select(&selector(&format!("section#{target}"))).count();
        assert_eq!(found, 1, "no section for #{target}");
    }

    let footer = html.select(&selector("footer")).next().expect("footer");
    assert!(footer.text().collect::<String>().contains("© 2025"));
    Ok(())
}

#[test]
fn manifest_writes_and_reads_back() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let path = temp.path().join("reveal.json");

    let manifest = RevealManifest::from_page(&Page::new(YEAR));
    fs::write(&path, manifest.to_json_pretty()?)?;

    let loaded = RevealManifest::from_json(&fs::read_to_string(&path)?)?;
    assert_eq!(loaded.batches.len(), manifest.batches.len());
    assert_eq!(
        loaded.draggables,
        vec![
            ElementId::new("hero.accent.thermal"),
            ElementId::new("hero.accent.lightweight")
        ]
    );
    Ok(())
}
