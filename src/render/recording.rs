//! Render surface that records draw calls instead of drawing

use super::{Layer, Paint, Rect, RenderSurface};
use crate::assets::Asset;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Image { layer: Layer, asset: Asset, x: f32, y: f32 },
    Clear { layer: Layer, rect: Rect },
    Fill { layer: Layer, rect: Rect, paint: Paint },
    Text { layer: Layer, text: String, x: f32, y: f32, paint: Paint },
}

impl DrawCommand {
    pub fn layer(&self) -> Layer {
        match self {
            DrawCommand::Image { layer, .. }
            | DrawCommand::Clear { layer, .. }
            | DrawCommand::Fill { layer, .. }
            | DrawCommand::Text { layer, .. } => *layer,
        }
    }
}

/// Keeps every draw call in order
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop recorded commands (the headless runner clears each frame)
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All text drawn so far, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Images drawn on one layer
    pub fn images_on(&self, layer: Layer) -> Vec<(Asset, f32, f32)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Image { layer: l, asset, x, y } if *l == layer => Some((*asset, *x, *y)),
                _ => None,
            })
            .collect()
    }
}

impl RenderSurface for RecordingSurface {
    fn draw_image(&mut self, layer: Layer, asset: Asset, x: f32, y: f32) {
        self.commands.push(DrawCommand::Image { layer, asset, x, y });
    }

    fn clear_rect(&mut self, layer: Layer, rect: Rect) {
        self.commands.push(DrawCommand::Clear { layer, rect });
    }

    fn fill_rect(&mut self, layer: Layer, rect: Rect, paint: Paint) {
        self.commands.push(DrawCommand::Fill { layer, rect, paint });
    }

    fn fill_text(&mut self, layer: Layer, text: &str, x: f32, y: f32, paint: Paint) {
        self.commands.push(DrawCommand::Text {
            layer,
            text: text.to_string(),
            x,
            y,
            paint,
        });
    }
}
