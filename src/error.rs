//! Error types
//!
//! Only startup can fail. Once the first frame is scheduled, the tick,
//! collision and pool code have no error paths.

use std::io;

/// Errors raised while bringing the game up
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// The environment cannot provide a 2D drawing context for a layer
    #[error("Render surface unsupported for layer '{0}'")]
    SurfaceUnsupported(&'static str),

    #[error("Required element not found: {0}")]
    MissingElement(String),

    #[error("Failed to load asset: {0}")]
    AssetLoad(&'static str),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Settings parse error: {0}")]
    SettingsParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
