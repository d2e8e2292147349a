//! Engine configuration, loaded from `redraw.toml` with environment overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Color;
use crate::error::{Error, Result};

pub const DEFAULT_CONFIG_FILE: &str = "redraw.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub scrollbar: ScrollbarConfig,
    pub retention: RetentionConfig,
    /// Upper bound on immediate re-runs a host performs for one input event.
    pub max_reruns: u32,
    /// Color the painter clears the surface to before drawing ranges.
    pub clear_color: Color,
}

/// Scrollbar geometry and per-state colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollbarConfig {
    pub width: f32,
    pub min_thumb: f32,
    pub track: Color,
    pub thumb: Color,
    pub thumb_hovered: Color,
    pub thumb_pressed: Color,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionConfig {
    /// Evict containers not declared for this many frames. `None` keeps them
    /// for the lifetime of the engine.
    pub evict_after_frames: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scrollbar: ScrollbarConfig::default(),
            retention: RetentionConfig::default(),
            max_reruns: 4,
            clear_color: Color::WHITE,
        }
    }
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        Self {
            width: 16.0,
            min_thumb: 20.0,
            track: Color::gray(241),
            thumb: Color::gray(193),
            thumb_hovered: Color::gray(168),
            thumb_pressed: Color::gray(120),
        }
    }
}

impl EngineConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// `redraw.toml` from the working directory, or defaults when it is
    /// missing or malformed.
    pub fn load_or_default() -> Self {
        match Self::load_from_file(DEFAULT_CONFIG_FILE) {
            Ok(config) => config,
            Err(Error::ConfigRead { .. }) => Self::default(),
            Err(e) => {
                log::warn!("{e}; using default engine config");
                Self::default()
            }
        }
    }

    /// Environment variables win over file values.
    pub fn merge_with_env(&mut self) {
        self.merge_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `REDRAW_*` overrides from `lookup`. Unparseable values are
    /// ignored.
    pub fn merge_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(n) = lookup("REDRAW_MAX_RERUNS").and_then(|v| v.parse::<u32>().ok()) {
            self.max_reruns = n;
        }
        if let Some(val) = lookup("REDRAW_EVICT_AFTER") {
            if val.eq_ignore_ascii_case("never") {
                self.retention.evict_after_frames = None;
            } else if let Ok(n) = val.parse::<u64>() {
                self.retention.evict_after_frames = Some(n);
            }
        }
        if let Some(px) = lookup("REDRAW_MIN_THUMB").and_then(|v| v.parse::<f32>().ok()) {
            self.scrollbar.min_thumb = px;
        }
    }

    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
