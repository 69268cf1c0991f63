use crate::counter::DEFAULT_DURATION_SECS;
use crate::data::TEAM_QUERY;
use crate::error::Result;
use crate::theme::ThemeVariant;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.toml";
pub const ENV_PREFIX: &str = "AICLUB_";
/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_VAR: &str = "AICLUB_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemeVariant,
    /// Frames per second of the render loop.
    pub frame_rate: u32,
    pub counter_duration_secs: f64,
    pub scroll_duration_secs: f64,
    /// Data query key for the team roster.
    pub roster_query: String,
    /// Terminals narrower than this get the compact navigation menu.
    pub compact_width: u16,
    /// Rows below the top of the viewport used to decide the active section.
    pub scroll_spy_probe: u16,
    /// Scroll offset past which the navigation bar is drawn raised.
    pub scrolled_threshold: u16,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeVariant::default(),
            frame_rate: 60,
            counter_duration_secs: DEFAULT_DURATION_SECS,
            scroll_duration_secs: 0.4,
            roster_query: TEAM_QUERY.to_string(),
            compact_width: 100,
            scroll_spy_probe: 2,
            scrolled_threshold: 1,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Settings {
    /// Load from the config file (see [`Settings::config_path`]) and the
    /// `AICLUB_*` environment, on top of the defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let settings = Self::figment(path.as_ref()).extract()?;
        Ok(settings)
    }

    pub fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn config_path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(Self::config_path())
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(path, toml_string)?;
        Ok(())
    }

    /// Interval between frames.
    pub fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_nanos(1_000_000_000 / self.frame_rate.max(1) as u64)
    }
}
