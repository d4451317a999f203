//! Game session and the per-frame state machine
//!
//! The session is the single owner of everything a frame touches. Components
//! that need a cross-entity lookup (a falling entity checking the catcher and
//! the score) get it by reference from here; there is no global registry.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::catcher::{Catcher, Direction};
use super::entity::{Backdrop, Size};
use super::pool::{AdvanceReport, EntityPool};
use super::score::ScoreState;
use super::spawner::{SpawnTick, Spawner};
use crate::assets::{Asset, AssetCatalog};
use crate::settings::Settings;

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    GameOver,
}

/// What a frame did, and whether another should be scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Entities advanced and the spawner swept; schedule the next frame
    Running(AdvanceReport),
    /// Lives just ran out: show the overlay once and stop scheduling
    GameOver,
    /// Already over, nothing happened
    Halted,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub score: ScoreState,
    catcher: Catcher,
    pub pool: EntityPool,
    pub spawner: Spawner,
    /// Background and ocean, bottom to top
    pub backdrops: Vec<Backdrop>,
    /// Playfield size
    pub canvas: Size,
    phase: GamePhase,
    seed: u64,
}

impl Session {
    /// Lay out a fresh session for a canvas, sized from the loaded assets
    pub fn new(settings: &Settings, canvas: Size, assets: &dyn AssetCatalog, seed: u64) -> Self {
        let ocean = assets.size(Asset::Ocean);
        let falling = assets.size(Asset::Falling);

        let backdrops = vec![
            Backdrop::new(Asset::Background, Vec2::ZERO, assets.size(Asset::Background)),
            Backdrop::new(
                Asset::Ocean,
                Vec2::new(0.0, canvas.height - settings.ocean_layer_height),
                ocean,
            ),
        ];

        let catcher = Catcher::centred(
            canvas,
            assets.size(Asset::Catcher),
            ocean.height,
            settings.catcher_lift,
            settings.catcher_step,
            settings.catch_zone,
        );

        let spawner = Spawner::new(
            assets.size(Asset::Spawner),
            canvas.width,
            settings.sweep_speed,
            settings.falling_speed,
            falling.width,
            (settings.spawn_delay_min_ms, settings.spawn_delay_max_ms),
            Pcg32::seed_from_u64(seed),
        );

        Self {
            score: ScoreState::new(settings.starting_lives),
            catcher,
            pool: EntityPool::new(falling, settings.ocean_level),
            spawner,
            backdrops,
            canvas,
            phase: GamePhase::Running,
            seed,
        }
    }

    /// Read-only; the catcher only moves through `handle_input`
    pub fn catcher(&self) -> &Catcher {
        &self.catcher
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// One render frame
    ///
    /// A miss that empties the last life during this frame is already in the
    /// score when the next frame runs its terminal check, so game over always
    /// reflects it.
    pub fn frame(&mut self) -> FrameOutcome {
        match self.phase {
            GamePhase::GameOver => FrameOutcome::Halted,
            GamePhase::Running if !self.score.is_alive() => {
                self.phase = GamePhase::GameOver;
                log::info!("Game over - final score {}", self.score.score());
                FrameOutcome::GameOver
            }
            GamePhase::Running => {
                let report = self.pool.advance_all(&self.catcher, &mut self.score);
                self.spawner.sweep();
                log::trace!(
                    "Frame: {} falling, spawner at {:.1}",
                    self.pool.len(),
                    self.spawner.pos.x
                );
                FrameOutcome::Running(report)
            }
        }
    }

    /// Spawn timer callback
    pub fn spawn_tick(&mut self) -> SpawnTick {
        self.spawner.tick(&mut self.pool, &self.score)
    }

    /// Keyboard input; returns true when the catcher moved
    pub fn handle_input(&mut self, direction: Direction) -> bool {
        self.catcher.handle_directional_input(direction, &self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetSizes;
    use crate::sim::{Outcome, Sprite};

    fn session() -> Session {
        let settings = Settings::default();
        let canvas = Size::new(settings.canvas_width, settings.canvas_height);
        Session::new(&settings, canvas, &AssetSizes::default(), 7)
    }

    #[test]
    fn test_new_session_layout() {
        let session = session();
        assert_eq!(session.phase(), GamePhase::Running);
        assert_eq!(session.score.lives(), 3);
        assert!(session.pool.is_empty());
        assert_eq!(session.spawner.pos, Vec2::new(800.0, 0.0));
        assert_eq!(session.backdrops[1].pos, Vec2::new(0.0, 150.0));
        assert_eq!(session.seed(), 7);
    }

    #[test]
    fn test_frame_advances_and_sweeps() {
        let mut session = session();
        session.pool.spawn(10.0, 0.0, 1.5);
        let outcome = session.frame();
        assert_eq!(outcome, FrameOutcome::Running(AdvanceReport::default()));
        assert_eq!(session.pool.iter().next().unwrap().pos.y, 1.5);
        assert_eq!(session.spawner.pos.x, 797.0);
    }

    #[test]
    fn test_game_over_transition_happens_once() {
        let mut session = session();
        for _ in 0..3 {
            session.score.record_miss();
        }

        assert_eq!(session.frame(), FrameOutcome::GameOver);
        assert_eq!(session.phase(), GamePhase::GameOver);
        assert_eq!(session.frame(), FrameOutcome::Halted);
        assert_eq!(session.frame(), FrameOutcome::Halted);
    }

    #[test]
    fn test_last_miss_reflected_before_game_over() {
        let mut session = session();
        session.score.record_miss();
        session.score.record_miss();
        session.pool.spawn(10.0, 249.5, 1.5);

        // The miss lands this frame; the loop keeps running until the next check
        let outcome = session.frame();
        assert_eq!(outcome, FrameOutcome::Running(AdvanceReport { caught: 0, missed: 1 }));
        assert_eq!(session.score.lives(), 0);

        assert_eq!(session.frame(), FrameOutcome::GameOver);
        assert_eq!(session.score.lives(), 0);
    }

    #[test]
    fn test_input_frozen_after_game_over() {
        let mut session = session();
        let start = session.catcher().position();
        assert!(session.handle_input(Direction::Left));
        assert_eq!(session.catcher().position().x, start.x - 30.0);

        for _ in 0..3 {
            session.score.record_miss();
        }
        assert!(!session.handle_input(Direction::Right));
        assert_eq!(session.catcher().position().x, start.x - 30.0);
    }

    #[test]
    fn test_spawner_sweep_fills_pool() {
        let mut session = session();
        // Sweep into the drop window, then fire the spawn timer
        for _ in 0..50 {
            session.frame();
        }
        let tick = session.spawn_tick();
        assert!(tick.dropped);
        assert_eq!(session.pool.len(), 1);
        assert!(session.pool.iter().all(|e| e.state() == Outcome::Active));
    }
}
