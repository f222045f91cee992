//! Glide configuration file handling

use anyhow::{Context, Result};
use glide_animation::Easing;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "glide.toml";

/// Top-level Glide configuration (glide.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GlideConfig {
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Demo animation settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DemoConfig {
    #[serde(default = "default_easing")]
    pub easing: Easing,
    /// Seconds per sweep across the track
    #[serde(default = "default_duration")]
    pub duration: f32,
    #[serde(default = "default_fps")]
    pub fps: u32,
    /// Track width in columns
    #[serde(default = "default_width")]
    pub width: usize,
    /// Number of sweeps (forward and back count separately)
    #[serde(default = "default_cycles")]
    pub cycles: u32,
}

fn default_easing() -> Easing {
    Easing::EaseInOutCubic
}

fn default_duration() -> f32 {
    2.0
}

fn default_fps() -> u32 {
    60
}

fn default_width() -> usize {
    60
}

fn default_cycles() -> u32 {
    2
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            easing: default_easing(),
            duration: default_duration(),
            fps: default_fps(),
            width: default_width(),
            cycles: default_cycles(),
        }
    }
}

/// Command-line values that take precedence over the file
#[derive(Debug, Default, Clone)]
pub struct DemoOverrides {
    pub easing: Option<Easing>,
    pub duration: Option<f32>,
    pub fps: Option<u32>,
    pub width: Option<usize>,
    pub cycles: Option<u32>,
}

impl DemoConfig {
    /// Apply command-line overrides and validate the result
    pub fn merged(mut self, overrides: &DemoOverrides) -> Result<Self> {
        if let Some(easing) = overrides.easing {
            self.easing = easing;
        }
        if let Some(duration) = overrides.duration {
            self.duration = duration;
        }
        if let Some(fps) = overrides.fps {
            self.fps = fps;
        }
        if let Some(width) = overrides.width {
            self.width = width;
        }
        if let Some(cycles) = overrides.cycles {
            self.cycles = cycles;
        }

        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            anyhow::bail!("duration must be greater than 0 seconds, got {}", self.duration);
        }
        if self.fps == 0 {
            anyhow::bail!("fps must be at least 1");
        }
        if self.width < 2 {
            anyhow::bail!("width must be at least 2 columns, got {}", self.width);
        }
        Ok(())
    }

    /// Seconds per frame
    pub fn frame_delta(&self) -> f32 {
        1.0 / self.fps as f32
    }
}

impl GlideConfig {
    /// Load configuration from an explicit file, or from `glide.toml` in `dir`
    ///
    /// A missing explicit file is an error; a missing `glide.toml` yields the
    /// defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let config_path = match explicit {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file {} does not exist", path.display());
                }
                path.to_path_buf()
            }
            None => {
                let path = dir.join(DEFAULT_CONFIG_FILE);
                if !path.exists() {
                    tracing::debug!("No {} in {}, using defaults", DEFAULT_CONFIG_FILE, dir.display());
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        tracing::debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
