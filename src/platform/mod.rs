//! Platform abstraction layer
//!
//! - `web`: stacked canvases, image loading, requestAnimationFrame and
//!   keyboard input (wasm32 only)
//! - `headless`: virtual-clock runner with an autopilot (native)

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;
