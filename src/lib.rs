//! Parachute Catch - a canvas arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, score, scheduling)
//! - `render`: Layered render surface abstraction and scene painter
//! - `assets`: Sprite identifiers, size catalog and load barrier
//! - `app`: Per-frame orchestration binding the simulation to a surface
//! - `platform`: Browser canvas front end and native headless runner
//! - `settings`: Data-driven game configuration

pub mod app;
pub mod assets;
pub mod error;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use app::App;
pub use error::{GameError, Result};
pub use settings::Settings;

/// Game configuration constants (defaults for `Settings`)
pub mod consts {
    /// Frame interval used when no vsync-aligned primitive exists (~60 Hz)
    pub const FRAME_INTERVAL_MS: f64 = 1000.0 / 60.0;

    /// Falling entities that pass this y fell into the ocean
    pub const OCEAN_LEVEL: f32 = 250.0;
    /// Ocean layer is drawn this far above the canvas bottom
    pub const OCEAN_LAYER_HEIGHT: f32 = 150.0;

    /// Catcher defaults
    pub const CATCHER_STEP: f32 = 30.0;
    /// Catcher sits this far below the ocean image midline
    pub const CATCHER_LIFT: f32 = 20.0;
    /// Catch zone starts this far below the catcher's top edge (boat artwork)
    pub const CATCH_ZONE_OFFSET: f32 = 70.0;
    /// Height of the catch zone band
    pub const CATCH_ZONE_BAND: f32 = 3.0;

    /// Spawner defaults
    pub const SPAWNER_SWEEP_SPEED: f32 = 3.0;
    pub const FALLING_SPEED: f32 = 1.5;
    /// Randomized drop delay range, milliseconds [min, max)
    pub const SPAWN_DELAY_MIN_MS: u32 = 500;
    pub const SPAWN_DELAY_MAX_MS: u32 = 2500;

    pub const STARTING_LIVES: u8 = 3;
}
