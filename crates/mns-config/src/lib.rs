//! MNS site configuration
//!
//! Settings are read from `site.toml` in the working directory; environment
//! variables override individual values.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default configuration file name.
pub const CONFIG_FILE: &str = "site.toml";

/// Main configuration structure for the site builder
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Where and what to write
    pub output: OutputConfig,
    /// Viewport used for layout, snapshots and scroll simulation
    pub viewport: ViewportConfig,
    /// Reveal animation settings
    pub motion: MotionConfig,
    /// Log filter settings
    pub logging: LoggingConfig,
    /// Page content settings
    pub page: PageConfig,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving `index.html` and the manifest
    pub dir: PathBuf,
    /// File name of the reveal manifest
    pub manifest: String,
    /// Write the reveal manifest next to the page
    pub write_manifest: bool,
}

/// Viewport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: f32,
    pub height: f32,
}

/// Motion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Run the animation engine. When off, every section renders fully visible.
    pub enabled: bool,
    /// Frame length used when simulating time
    pub frame_ms: f32,
    /// Scroll distance per simulated frame during a scroll-through
    pub scroll_step: f32,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `env_logger` filter used when `RUST_LOG` is not set
    pub filter: String,
}

/// Page content configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PageConfig {
    /// Fixed footer year; the current year is used when unset
    pub year: Option<i32>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("dist"),
            manifest: "reveal.json".to_string(),
            write_manifest: true,
        }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            frame_ms: 16.0,
            scroll_step: 40.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Read and validate a TOML file. Missing tables and keys take their
    /// defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
        let config: Self = toml::from_str(&text).map_err(|e| format!("Invalid config {}: {}", path.display(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `path`, falling back to defaults.
    ///
    /// A missing file is silent; a file that exists but cannot be used is
    /// reported before falling back.
    pub fn load_from_path_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(error) => {
                warn!(%error, path = %path.display(), "falling back to default configuration");
                Self::default()
            }
        }
    }

    /// `site.toml` in the working directory, or defaults.
    pub fn load_or_default() -> Self {
        Self::load_from_path_or_default(CONFIG_FILE)
    }

    /// Apply `MNS_*` environment overrides on top of file values.
    /// Unparsable or non-positive numbers are ignored.
    pub fn merge_with_env(&mut self) {
        if let Ok(dir) = std::env::var("MNS_OUTPUT_DIR") {
            self.output.dir = PathBuf::from(dir);
        }

        if let Some(width) = positive_env("MNS_VIEWPORT_WIDTH") {
            self.viewport.width = width;
        }
        if let Some(height) = positive_env("MNS_VIEWPORT_HEIGHT") {
            self.viewport.height = height;
        }

        if let Ok(val) = std::env::var("MNS_MOTION") {
            self.motion.enabled = val == "1" || val.eq_ignore_ascii_case("true");
        }

        if let Ok(filter) = std::env::var("MNS_LOG") {
            self.logging.filter = filter;
        }
    }

    /// File, then environment overrides.
    ///
    /// An explicit `path` must exist and be valid. Without one, `site.toml`
    /// is optional, but a `site.toml` that exists and is broken is still an
    /// error rather than a silent fallback.
    pub fn load(path: Option<&Path>) -> Result<Self, String> {
        let mut config = match path {
            Some(path) => Self::load_from_file(path)?,
            None if Path::new(CONFIG_FILE).exists() => Self::load_from_file(CONFIG_FILE)?,
            None => Self::default(),
        };
        config.merge_with_env();
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if !is_positive(self.viewport.width) || !is_positive(self.viewport.height) {
            return Err(format!(
                "Viewport must be positive and finite, got {}x{}",
                self.viewport.width, self.viewport.height
            ));
        }
        if !is_positive(self.motion.frame_ms) || !is_positive(self.motion.scroll_step) {
            return Err(format!(
                "Motion frame_ms and scroll_step must be positive and finite, got {} and {}",
                self.motion.frame_ms, self.motion.scroll_step
            ));
        }
        if self.output.manifest.trim().is_empty() {
            return Err("Manifest file name must not be empty".to_string());
        }
        Ok(())
    }
}

/// Rejects zero, negatives, NaN and infinities.
fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn positive_env(name: &str) -> Option<f32> {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<f32>().ok())
        .filter(|value| is_positive(*value))
}
