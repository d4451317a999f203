//! The player's catcher (the boat)

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::CatchZone;
use super::entity::{Size, Sprite};
use super::score::ScoreState;
use crate::assets::Asset;

/// Discrete horizontal input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Map a DOM key name (`KeyboardEvent.key`) to a direction
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(Direction::Left),
            "ArrowRight" | "Right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Map a legacy key code to a direction
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            37 => Some(Direction::Left),
            39 => Some(Direction::Right),
            _ => None,
        }
    }

    /// Map a keydown event, falling back to the key code for browsers that
    /// report no usable key name
    pub fn from_key_event(key: &str, key_code: u32) -> Option<Self> {
        Self::from_key(key).or_else(|| Self::from_key_code(key_code))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catcher {
    /// Only `handle_directional_input` moves it
    pos: Vec2,
    size: Size,
    /// Pixels moved per input
    step: f32,
    canvas_width: f32,
    /// Where falling entities land on the artwork
    catch_zone: CatchZone,
}

impl Catcher {
    pub fn new(pos: Vec2, size: Size, step: f32, canvas_width: f32, catch_zone: CatchZone) -> Self {
        Self {
            pos,
            size,
            step,
            canvas_width,
            catch_zone,
        }
    }

    /// Place the catcher centred horizontally, riding the ocean surface
    pub fn centred(
        canvas: Size,
        size: Size,
        ocean_height: f32,
        lift: f32,
        step: f32,
        catch_zone: CatchZone,
    ) -> Self {
        let pos = Vec2::new(
            canvas.width / 2.0 - size.width / 2.0,
            canvas.height - ocean_height / 2.0 + lift,
        );
        Self::new(pos, size, step, canvas.width, catch_zone)
    }

    pub fn catch_zone(&self) -> CatchZone {
        self.catch_zone
    }

    /// Rightmost x the catcher may occupy
    #[inline]
    fn max_x(&self) -> f32 {
        (self.canvas_width - self.size.width).max(0.0)
    }

    /// Move one step, clamped to the canvas. Ignored once the game is over.
    ///
    /// Returns true when the input was applied and the catcher needs redrawing.
    pub fn handle_directional_input(&mut self, direction: Direction, score: &ScoreState) -> bool {
        if !score.is_alive() {
            return false;
        }
        let dx = match direction {
            Direction::Left => -self.step,
            Direction::Right => self.step,
        };
        self.pos.x = (self.pos.x + dx).max(0.0).min(self.max_x());
        true
    }
}

impl Sprite for Catcher {
    fn asset(&self) -> Asset {
        Asset::Catcher
    }

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> Size {
        self.size
    }
}
