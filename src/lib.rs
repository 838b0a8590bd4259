//! Site build commands shared by the `mns-site` binary and its tests.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Datelike;
use log::info;
use mns_config::SiteConfig;
use mns_motion::Viewport;
use mns_page::{Page, PageRuntime, RevealManifest, ScrollReport, StaticStyles, render_document};

pub const INDEX_FILE: &str = "index.html";

/// What `build` wrote.
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub index: PathBuf,
    pub manifest: Option<PathBuf>,
    pub batches: usize,
    pub members: usize,
}

/// Configuration for the binary: `path` if given, else `./site.toml` when
/// present, then `MNS_*` overrides. Unreadable or invalid files are errors.
pub fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    SiteConfig::load(path).map_err(anyhow::Error::msg).with_context(|| match path {
        Some(path) => format!("Failed to load configuration from {}", path.display()),
        None => format!("Failed to load {}", mns_config::CONFIG_FILE),
    })
}

/// Footer year: configured, else the current local year.
pub fn footer_year(config: &SiteConfig) -> i32 {
    config.page.year.unwrap_or_else(|| chrono::Local::now().year())
}

fn viewport(config: &SiteConfig) -> Viewport {
    Viewport::new(config.viewport.width, config.viewport.height)
}

/// Write the static page, plus the reveal manifest when motion is enabled.
pub fn build_site(config: &SiteConfig, out_dir: &Path) -> Result<BuildSummary> {
    let page = Page::new(footer_year(config));
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let html = render_document(&page, &StaticStyles).context("Failed to render page")?;
    let index = out_dir.join(INDEX_FILE);
    fs::write(&index, html).with_context(|| format!("Failed to write {}", index.display()))?;

    let manifest = RevealManifest::from_page(&page);
    let manifest_path = if config.motion.enabled && config.output.write_manifest {
        let path = out_dir.join(&config.output.manifest);
        let json = manifest.to_json_pretty().context("Failed to serialize reveal manifest")?;
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        Some(path)
    } else {
        None
    };

    info!(
        "built {} ({} reveal batches, {} members)",
        index.display(),
        manifest.batches.len(),
        manifest.member_count()
    );
    Ok(BuildSummary {
        index,
        manifest: manifest_path,
        batches: manifest.batches.len(),
        members: manifest.member_count(),
    })
}

/// Render the page as it looks `elapsed_ms` after scrolling to `scroll_y`.
pub fn snapshot(config: &SiteConfig, scroll_y: f32, elapsed_ms: f32) -> Result<String> {
    let mut runtime = PageRuntime::mount(Page::new(footer_year(config)), viewport(config), config.motion.enabled)
        .context("Failed to lay out page")?;
    runtime.scroll_to(scroll_y);
    runtime.run_for(elapsed_ms, config.motion.frame_ms);
    info!(
        "snapshot at scroll {} after {}ms: {} of {} revealed",
        runtime.viewport().scroll_y,
        elapsed_ms,
        runtime.orchestrator().visible_count(),
        runtime.orchestrator().bound_count()
    );
    render_document(runtime.page(), &runtime).context("Failed to render snapshot")
}

/// Simulate scrolling the whole page top to bottom.
pub fn scroll_through(config: &SiteConfig) -> Result<ScrollReport> {
    let mut runtime = PageRuntime::mount(Page::new(footer_year(config)), viewport(config), config.motion.enabled)
        .context("Failed to lay out page")?;
    Ok(runtime.scroll_through(config.motion.scroll_step, config.motion.frame_ms))
}
