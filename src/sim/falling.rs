//! Falling entities (parachutists)

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::catcher::Catcher;
use super::collision::collides;
use super::entity::{Size, Sprite};
use super::score::ScoreState;
use crate::assets::Asset;

/// Result of advancing a falling entity by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Still descending
    Active,
    /// Landed on the catcher's deck
    Caught,
    /// Dropped into the ocean
    Missed,
}

impl Outcome {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Active)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallingEntity {
    pub pos: Vec2,
    size: Size,
    /// Pixels per tick
    speed: f32,
    /// Missed once y passes this line
    ocean_level: f32,
    state: Outcome,
}

impl FallingEntity {
    pub fn new(pos: Vec2, size: Size, speed: f32, ocean_level: f32) -> Self {
        Self {
            pos,
            size,
            speed,
            ocean_level,
            state: Outcome::Active,
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn state(&self) -> Outcome {
        self.state
    }

    /// Descend one step and report the outcome
    ///
    /// Falling past the ocean level costs a life; landing in the catcher's
    /// catch zone scores a point. Either is terminal and the caller must drop
    /// the entity.
    pub fn tick(&mut self, catcher: &Catcher, score: &mut ScoreState) -> Outcome {
        debug_assert!(!self.state.is_terminal(), "tick() on a finished entity");

        self.pos.y += self.speed;

        self.state = if self.pos.y > self.ocean_level {
            score.record_miss();
            Outcome::Missed
        } else if collides(self.bounds(), catcher.bounds(), catcher.catch_zone()) {
            score.record_catch();
            Outcome::Caught
        } else {
            Outcome::Active
        };
        self.state
    }
}

impl Sprite for FallingEntity {
    fn asset(&self) -> Asset {
        Asset::Falling
    }

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> Size {
        self.size
    }
}
