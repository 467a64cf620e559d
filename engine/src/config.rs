use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

use vitrine_types::{Timings, UiOptions};

/// User configuration, read from `~/.vitrine/config.toml`.
///
/// Every table is optional; a missing file yields the defaults.
#[derive(Debug, Default, Deserialize)]
pub struct VitrineConfig {
    pub app: Option<AppConfig>,
    pub content: Option<ContentConfig>,
    pub motion: Option<MotionConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and spinners.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Collapse all animation durations to zero.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContentConfig {
    /// Portfolio document to load instead of the embedded demo.
    pub path: Option<PathBuf>,
}

/// Millisecond overrides for the externally tunable timings. Everything
/// else derives from the fixed defaults.
#[derive(Debug, Default, Deserialize)]
pub struct MotionConfig {
    pub loading_delay_ms: Option<u64>,
    pub transition_ms: Option<u64>,
    pub stagger_ms: Option<u64>,
    pub menu_fade_ms: Option<u64>,
}

impl VitrineConfig {
    /// `$VITRINE_CONFIG`, or `~/.vitrine/config.toml`.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        if let Some(path) = env::var_os("VITRINE_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|home| home.join(".vitrine").join("config.toml"))
    }

    /// Load the config, treating a missing file as defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let app = self.app.as_ref();
        UiOptions {
            ascii_only: app.is_some_and(|a| a.ascii_only),
            high_contrast: app.is_some_and(|a| a.high_contrast),
            reduced_motion: app.is_some_and(|a| a.reduced_motion),
        }
    }

    /// Resolved timings: defaults, then overrides, then reduced motion
    /// collapsing everything to zero.
    #[must_use]
    pub fn timings(&self) -> Timings {
        if self.ui_options().reduced_motion {
            return Timings::zeroed();
        }
        let mut timings = Timings::default();
        if let Some(motion) = &self.motion {
            if let Some(ms) = motion.loading_delay_ms {
                timings.loading_delay = Duration::from_millis(ms);
            }
            if let Some(ms) = motion.transition_ms {
                timings.transition_duration = Duration::from_millis(ms);
            }
            if let Some(ms) = motion.stagger_ms {
                timings.animation_stagger = Duration::from_millis(ms);
            }
            if let Some(ms) = motion.menu_fade_ms {
                timings.menu_fade_delay = Duration::from_millis(ms);
            }
        }
        timings
    }

    #[must_use]
    pub fn content_path(&self) -> Option<&Path> {
        self.content.as_ref()?.path.as_deref()
    }
}
