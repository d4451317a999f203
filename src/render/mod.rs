//! Rendering module
//!
//! The game draws onto stacked 2D layers. A `RenderSurface` is whatever can
//! draw images, rectangles and text on those layers (a set of canvases in the
//! browser, a command log when headless). The `Painter` turns simulation
//! state into surface calls.

pub mod painter;
pub mod recording;

pub use painter::Painter;
pub use recording::{DrawCommand, RecordingSurface};

use crate::assets::Asset;

/// Logical drawing layers, bottom to top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Background,
    Ocean,
    Spawner,
    Catcher,
    Falling,
    Stats,
}

impl Layer {
    pub const ALL: [Layer; 6] = [
        Layer::Background,
        Layer::Ocean,
        Layer::Spawner,
        Layer::Catcher,
        Layer::Falling,
        Layer::Stats,
    ];

    /// DOM id of the canvas backing this layer
    pub fn element_id(&self) -> &'static str {
        match self {
            Layer::Background => "background",
            Layer::Ocean => "ocean",
            Layer::Spawner => "airplane",
            Layer::Catcher => "boat",
            Layer::Falling => "parachutists",
            Layer::Stats => "stats",
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Fill styles; concrete colors and fonts belong to the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// Translucent panel behind overlay text
    Panel,
    /// Overlay text
    Ink,
}

/// Axis-aligned rectangle in layer pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Layered 2D drawing capability
pub trait RenderSurface {
    fn draw_image(&mut self, layer: Layer, asset: Asset, x: f32, y: f32);
    fn clear_rect(&mut self, layer: Layer, rect: Rect);
    fn fill_rect(&mut self, layer: Layer, rect: Rect, paint: Paint);
    fn fill_text(&mut self, layer: Layer, text: &str, x: f32, y: f32, paint: Paint);
}
