//! The spawner (the airplane)
//!
//! Sweeps right-to-left across the sky every frame and, on its own randomized
//! timer, drops a falling entity whenever it is over a catchable part of the
//! sky.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::entity::{Size, Sprite};
use super::pool::EntityPool;
use super::score::ScoreState;
use crate::assets::Asset;

/// What one spawn timer firing did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnTick {
    /// A falling entity was added to the pool
    pub dropped: bool,
    /// Delay before the timer should fire again; `None` stops it
    pub next_delay_ms: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct Spawner {
    pub pos: Vec2,
    size: Size,
    canvas_width: f32,
    /// Pixels moved left per frame
    sweep_speed: f32,
    /// Descent speed given to dropped entities
    drop_speed: f32,
    /// Width of a dropped entity, so it never starts past the right edge
    falling_width: f32,
    /// Drop delay range in ms, [min, max)
    delay_ms: (u32, u32),
    rng: Pcg32,
}

impl Spawner {
    /// Create a spawner parked just off the right edge of the canvas
    pub fn new(
        size: Size,
        canvas_width: f32,
        sweep_speed: f32,
        drop_speed: f32,
        falling_width: f32,
        delay_ms: (u32, u32),
        rng: Pcg32,
    ) -> Self {
        Self {
            pos: Vec2::new(canvas_width, 0.0),
            size,
            canvas_width,
            sweep_speed,
            drop_speed,
            falling_width,
            delay_ms,
            rng,
        }
    }

    /// Move left one frame, wrapping to the right edge once fully off-screen
    pub fn sweep(&mut self) {
        self.pos.x -= self.sweep_speed;
        if self.pos.x <= -self.size.width {
            self.pos.x = self.canvas_width;
        }
    }

    /// Whether a drop from the current position would be visible and catchable
    pub fn in_drop_window(&self) -> bool {
        let half = self.size.width / 2.0;
        self.pos.x >= -half && self.pos.x <= self.canvas_width - half - self.falling_width
    }

    /// Where a dropped entity starts: the spawner's centre
    pub fn drop_point(&self) -> Vec2 {
        self.pos + self.size.half()
    }

    /// Draw the next randomized drop delay
    pub fn next_delay_ms(&mut self) -> u32 {
        let (min, max) = self.delay_ms;
        self.rng.random_range(min..max)
    }

    /// Spawn timer callback
    ///
    /// Drops into the pool if over the drop window, then asks to be re-armed
    /// for as long as the game is alive.
    pub fn tick(&mut self, pool: &mut EntityPool, score: &ScoreState) -> SpawnTick {
        let dropped = score.is_alive() && self.in_drop_window();
        if dropped {
            let at = self.drop_point();
            pool.spawn(at.x, at.y, self.drop_speed);
            log::debug!("Dropped at ({:.1}, {:.1}), {} falling", at.x, at.y, pool.len());
        }

        let next_delay_ms = if score.is_alive() {
            Some(self.next_delay_ms())
        } else {
            log::debug!("Spawner stopped");
            None
        };

        SpawnTick {
            dropped,
            next_delay_ms,
        }
    }
}

impl Sprite for Spawner {
    fn asset(&self) -> Asset {
        Asset::Spawner
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
    use rand::SeedableRng;

    fn spawner() -> Spawner {
        Spawner::new(
            Size::new(90.0, 40.0),
            800.0,
            3.0,
            1.5,
            30.0,
            (500, 2500),
            Pcg32::seed_from_u64(42),
        )
    }

    fn pool() -> EntityPool {
        EntityPool::new(Size::new(30.0, 30.0), 250.0)
    }

    #[test]
    fn test_starts_off_right_edge() {
        let spawner = spawner();
        assert_eq!(spawner.pos, Vec2::new(800.0, 0.0));
        assert!(!spawner.in_drop_window());
    }

    #[test]
    fn test_sweep_wraps() {
        let mut spawner = spawner();
        spawner.pos.x = -87.0;
        spawner.sweep();
        assert_eq!(spawner.pos.x, 800.0);

        spawner.pos.x = -86.0;
        spawner.sweep();
        assert_eq!(spawner.pos.x, -89.0);
    }

    #[test]
    fn test_drop_window_bounds() {
        let mut spawner = spawner();
        // [-45, 800 - 45 - 30] = [-45, 725]
        for (x, expected) in [(-45.0, true), (-45.5, false), (725.0, true), (725.5, false), (300.0, true)] {
            spawner.pos.x = x;
            assert_eq!(spawner.in_drop_window(), expected, "x = {}", x);
        }
    }

    #[test]
    fn test_drops_from_centre() {
        let mut spawner = spawner();
        let mut pool = pool();
        let score = ScoreState::default();
        spawner.pos.x = 300.0;

        let result = spawner.tick(&mut pool, &score);
        assert!(result.dropped);
        let entity = pool.iter().next().unwrap();
        assert_eq!(entity.pos, Vec2::new(345.0, 20.0));
        assert_eq!(entity.speed(), 1.5);
    }

    #[test]
    fn test_no_drop_outside_window() {
        let mut spawner = spawner();
        let mut pool = pool();
        let score = ScoreState::default();

        for x in [800.0, 760.0, -60.0, -90.0] {
            spawner.pos.x = x;
            let result = spawner.tick(&mut pool, &score);
            assert!(!result.dropped);
            // Timer keeps running while alive
            assert!(result.next_delay_ms.is_some());
        }
        assert!(pool.is_empty());
    }

    #[test]
    fn test_delays_within_range() {
        let mut spawner = spawner();
        for _ in 0..1000 {
            let delay = spawner.next_delay_ms();
            assert!((500..2500).contains(&delay));
        }
    }

    #[test]
    fn test_same_seed_same_delays() {
        let mut a = spawner();
        let mut b = spawner();
        let da: Vec<u32> = (0..16).map(|_| a.next_delay_ms()).collect();
        let db: Vec<u32> = (0..16).map(|_| b.next_delay_ms()).collect();
        assert_eq!(da, db);
    }

    #[test]
    fn test_stops_when_dead() {
        let mut spawner = spawner();
        let mut pool = pool();
        let mut score = ScoreState::new(1);
        score.record_miss();
        spawner.pos.x = 300.0;

        let result = spawner.tick(&mut pool, &score);
        assert_eq!(
            result,
            SpawnTick {
                dropped: false,
                next_delay_ms: None
            }
        );
        assert!(pool.is_empty());
    }
}
