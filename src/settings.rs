//! Game settings
//!
//! Loaded from an optional JSON file; anything missing falls back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_TICK_RATE_HZ;
pub use crate::sim::input::ControlScheme;

/// Run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Input source the presentation layer forwards
    pub control: ControlScheme,
    /// Simulation ticks per second
    pub tick_rate_hz: f32,
    /// Fixed session seed; random when absent
    pub seed: Option<u64>,
    /// Frame cap for the headless demo
    pub max_frames: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            control: ControlScheme::Keyboard,
            tick_rate_hz: DEFAULT_TICK_RATE_HZ,
            seed: None,
            max_frames: 1000,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read {}: {}; using default settings", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Tick length in seconds (non-positive rates fall back to the default)
    pub fn tick_dt(&self) -> f32 {
        if self.tick_rate_hz.is_finite() && self.tick_rate_hz > 0.0 {
            1.0 / self.tick_rate_hz
        } else {
            1.0 / DEFAULT_TICK_RATE_HZ
        }
    }

    /// Configured seed, or one derived from the clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}
