//! Game settings
//!
//! Read as JSON from LocalStorage on the web, from a file on native.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GameError, Result};
use crate::sim::CatchZone;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    /// Canvas width (native only; the web reads it from the DOM)
    pub canvas_width: f32,
    /// Canvas height (native only; the web reads it from the DOM)
    pub canvas_height: f32,
    /// Falling entities past this y are missed
    pub ocean_level: f32,
    /// Ocean layer y offset from the canvas bottom
    pub ocean_layer_height: f32,

    // === Catcher ===
    pub catcher_step: f32,
    pub catcher_lift: f32,
    /// Catch zone geometry, tied to the catcher artwork
    pub catch_zone: CatchZone,

    // === Spawner ===
    pub sweep_speed: f32,
    pub falling_speed: f32,
    pub spawn_delay_min_ms: u32,
    pub spawn_delay_max_ms: u32,

    // === Session ===
    pub starting_lives: u8,
    /// Fallback frame timer interval
    pub frame_interval_ms: f64,
    /// Fixed RNG seed (random when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 300.0,
            ocean_level: OCEAN_LEVEL,
            ocean_layer_height: OCEAN_LAYER_HEIGHT,

            catcher_step: CATCHER_STEP,
            catcher_lift: CATCHER_LIFT,
            catch_zone: CatchZone::default(),

            sweep_speed: SPAWNER_SWEEP_SPEED,
            falling_speed: FALLING_SPEED,
            spawn_delay_min_ms: SPAWN_DELAY_MIN_MS,
            spawn_delay_max_ms: SPAWN_DELAY_MAX_MS,

            starting_lives: STARTING_LIVES,
            frame_interval_ms: FRAME_INTERVAL_MS,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.canvas_width <= 0.0 || self.canvas_height <= 0.0 {
            return Err(GameError::InvalidSettings("canvas must be non-empty".into()));
        }
        if self.spawn_delay_min_ms >= self.spawn_delay_max_ms {
            return Err(GameError::InvalidSettings(format!(
                "spawn delay range [{}, {}) is empty",
                self.spawn_delay_min_ms, self.spawn_delay_max_ms
            )));
        }
        if self.spawn_delay_max_ms > i32::MAX as u32 {
            return Err(GameError::InvalidSettings(format!(
                "spawn delay {}ms exceeds the browser timer range",
                self.spawn_delay_max_ms
            )));
        }
        if !(self.frame_interval_ms.is_finite() && self.frame_interval_ms > 0.0) {
            return Err(GameError::InvalidSettings(format!(
                "frame interval {}ms must be positive",
                self.frame_interval_ms
            )));
        }
        if self.falling_speed <= 0.0 || self.sweep_speed <= 0.0 || self.catcher_step <= 0.0 {
            return Err(GameError::InvalidSettings("speeds must be positive".into()));
        }
        if self.starting_lives == 0 {
            return Err(GameError::InvalidSettings("starting lives must be at least 1".into()));
        }
        if self.catch_zone.vertical_band <= 0.0 {
            return Err(GameError::InvalidSettings("catch zone band must be positive".into()));
        }
        Ok(())
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "parachute_catch_settings";

    /// Environment variable naming a native settings file
    #[allow(dead_code)]
    const SETTINGS_ENV: &'static str = "PARACHUTE_CATCH_SETTINGS";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from the file named by `PARACHUTE_CATCH_SETTINGS`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self> {
        match std::env::var(Self::SETTINGS_ENV) {
            Ok(path) => {
                let json = std::fs::read_to_string(&path)?;
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from {}", path);
                Ok(settings)
            }
            Err(_) => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }
}
