//! Guide configuration: optional YAML files plus an env fallback.
//!
//! User-level config: `~/.verifguide/config.yaml`
//! Project-level config: `.verifguide/config.yaml` (overrides user values)
//! Explicit `--config <path>`: layered on top of both.
//!
//! Resolution per field: explicit file → project → user → env var → default.
//! CLI flags are applied by the caller after loading.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::content::Tab;
use crate::error::{GuideError, GuideResult};

/// Env var consulted when no file sets `start_tab`.
pub const START_TAB_ENV: &str = "VERIFGUIDE_START_TAB";

const DEFAULT_RENDER_FPS: u32 = 30;
const MAX_RENDER_FPS: u32 = 120;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuideConfig {
    /// Tab shown at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_tab: Option<Tab>,
    /// Frame rate of the terminal UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_fps: Option<u32>,
    /// Where tracing output goes while the terminal UI owns the screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

/// Path to `~/.verifguide/config.yaml`.
fn user_config_path() -> Option<PathBuf> {
    #[cfg(windows)]
    let home = std::env::var("USERPROFILE").ok();
    #[cfg(not(windows))]
    let home = std::env::var("HOME").ok();
    home.map(|h| PathBuf::from(h).join(".verifguide").join("config.yaml"))
}

fn project_config_path() -> PathBuf {
    PathBuf::from(".verifguide").join("config.yaml")
}

impl GuideConfig {
    /// Load and merge all layers. Never fails: unreadable or malformed
    /// files are skipped with a warning.
    pub fn load(explicit: Option<&Path>) -> Self {
        let user = user_config_path();
        let project = project_config_path();
        let mut config = Self::load_layers(&[user.as_deref(), Some(project.as_path()), explicit]);
        config.apply_start_tab_env(std::env::var(START_TAB_ENV).ok().as_deref());
        config
    }

    /// Merge the given files in order; later layers win.
    pub fn load_layers(paths: &[Option<&Path>]) -> Self {
        let mut config = Self::default();
        for path in paths.iter().flatten() {
            match Self::read_file(path) {
                Ok(Some(layer)) => {
                    debug!(path = %path.display(), "loaded config layer");
                    config.merge(layer);
                }
                Ok(None) => {}
                Err(e) => warn!("{e}; ignoring"),
            }
        }
        config
    }

    /// Read one YAML file. `Ok(None)` when the file does not exist.
    pub fn read_file(path: &Path) -> GuideResult<Option<Self>> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(GuideError::Config {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })
            }
        };
        if content.trim().is_empty() {
            return Ok(Some(Self::default()));
        }
        serde_yaml::from_str(&content)
            .map(Some)
            .map_err(|e| GuideError::Config {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }

    /// Overlay `other`'s set fields onto `self`.
    pub fn merge(&mut self, other: GuideConfig) {
        if other.start_tab.is_some() {
            self.start_tab = other.start_tab;
        }
        if other.render_fps.is_some() {
            self.render_fps = other.render_fps;
        }
        if other.log_file.is_some() {
            self.log_file = other.log_file;
        }
    }

    /// Env fallback for `start_tab`, only when no file set it.
    pub fn apply_start_tab_env(&mut self, value: Option<&str>) {
        if self.start_tab.is_some() {
            return;
        }
        let Some(value) = value else { return };
        match value.parse::<Tab>() {
            Ok(tab) => self.start_tab = Some(tab),
            Err(e) => warn!("{START_TAB_ENV}: {e}"),
        }
    }

    pub fn start_tab(&self) -> Tab {
        self.start_tab.unwrap_or_default()
    }

    /// Frames per second, clamped to 1..=120.
    pub fn render_fps(&self) -> u32 {
        self.render_fps
            .unwrap_or(DEFAULT_RENDER_FPS)
            .clamp(1, MAX_RENDER_FPS)
    }

    /// Interval between frames.
    pub fn render_period(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.render_fps()))
    }
}
