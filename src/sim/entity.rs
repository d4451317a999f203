//! Shared entity model
//!
//! Every visual object is positioned, sized and drawn from one asset. Rather
//! than a base type, each entity implements the `Sprite` capability.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::assets::Asset;

/// Width/height of an entity, fixed by the asset it shows
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn half(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Axis-aligned box for collision queries
///
/// Always derived from a live position, never stored on an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub fn new(pos: Vec2, size: Size) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            width: size.width,
            height: size.height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Positionable + renderable capability
pub trait Sprite {
    /// Image this entity is drawn with
    fn asset(&self) -> Asset;
    /// Top-left corner
    fn position(&self) -> Vec2;
    fn size(&self) -> Size;

    fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.position(), self.size())
    }
}

/// Static scenery (background, ocean), drawn once at start
#[derive(Debug, Clone)]
pub struct Backdrop {
    pub asset: Asset,
    pub pos: Vec2,
    pub size: Size,
}

impl Backdrop {
    pub fn new(asset: Asset, pos: Vec2, size: Size) -> Self {
        Self { asset, pos, size }
    }
}

impl Sprite for Backdrop {
    fn asset(&self) -> Asset {
        self.asset
    }

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> Size {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_track_position() {
        let mut backdrop = Backdrop::new(Asset::Ocean, Vec2::new(0.0, 150.0), Size::new(800.0, 150.0));
        assert_eq!(backdrop.bounds().bottom(), 300.0);

        backdrop.pos.x = 12.0;
        let bounds = backdrop.bounds();
        assert_eq!(bounds.x, 12.0);
        assert_eq!(bounds.right(), 812.0);
    }
}
