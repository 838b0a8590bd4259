use std::fs;

use anyhow::Result;
use mns_config::SiteConfig;
use scraper::{Html, Selector};

fn config() -> SiteConfig {
    let mut config = SiteConfig::default();
    config.page.year = Some(2030);
    config
}

#[test]
fn build_writes_page_and_manifest() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let out = temp.path().join("dist");

    let summary = mns_site::build_site(&config(), &out)?;
    assert_eq!(summary.index, out.join(mns_site::INDEX_FILE));
    let manifest = summary.manifest.expect("manifest written");
    assert!(manifest.ends_with("reveal.json"));
    assert!(summary.members > 0);

    let html = Html::parse_document(&fs::read_to_string(&summary.index)?);
    let sections = Selector::parse("section[id]").expect("valid selector");
    assert_eq!(html.select(&sections).count(), 6);
    assert!(fs::read_to_string(manifest)?.contains("\"testimonials.stars\""));
    Ok(())
}

#[test]
fn build_without_motion_skips_manifest() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let mut config = config();
    config.motion.enabled = false;

    let summary = mns_site::build_site(&config, temp.path())?;
    assert!(summary.manifest.is_none());
    assert!(!temp.path().join("reveal.json").exists());
    Ok(())
}

#[test]
fn snapshot_without_motion_matches_static_visibility() -> Result<()> {
    let mut config = config();
    config.motion.enabled = false;

    let html = Html::parse_document(&mns_site::snapshot(&config, 2400.0, 100.0)?);
    let hidden = Selector::parse("[data-reveal][style]").expect("valid selector");
    assert_eq!(html.select(&hidden).count(), 0);
    assert!(html.root_element().text().collect::<String>().contains("© 2030"));
    Ok(())
}

#[test]
fn scroll_through_reveals_everything() -> Result<()> {
    let report = mns_site::scroll_through(&config())?;
    assert!(report.bound > 0);
    assert!(report.all_visible());
    Ok(())
}

#[test]
fn configured_year_wins() {
    assert_eq!(mns_site::footer_year(&config()), 2030);
}

#[test]
fn explicit_config_path_must_exist() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let missing = temp.path().join("nowhere.toml");

    let error = mns_site::load_config(Some(&missing)).expect_err("missing config accepted");
    let message = format!("{error:#}");
    assert!(message.contains("Failed to load configuration"), "{message}");
    assert!(message.contains("nowhere.toml"), "{message}");
    Ok(())
}

#[test]
fn broken_config_is_reported_not_replaced() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let path = temp.path().join("site.toml");
    fs::write(&path, "[viewport]\nheight = nan\n")?;

    assert!(mns_site::load_config(Some(&path)).is_err());
    Ok(())
}
