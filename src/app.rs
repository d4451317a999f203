//! Game orchestration
//!
//! Binds a `Session` to a render surface. Platform drivers call the three
//! entry points (`on_frame`, `on_spawn_timer`, `on_key`) from their timers and
//! input handlers and re-arm the timers based on what comes back.

use crate::render::{Layer, Painter, RenderSurface};
use crate::sim::{Direction, FrameOutcome, Session};

pub struct App<S: RenderSurface> {
    session: Session,
    painter: Painter,
    surface: S,
}

impl<S: RenderSurface> App<S> {
    pub fn new(session: Session, surface: S) -> Self {
        let painter = Painter::new(session.canvas);
        Self {
            session,
            painter,
            surface,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Draw the opening scene: catcher, scenery and stats
    pub fn start(&mut self) {
        let session = &self.session;
        self.painter
            .sprite(&mut self.surface, Layer::Catcher, session.catcher());
        self.painter.backdrops(&mut self.surface, &session.backdrops);
        self.painter.stats(&mut self.surface, &session.score);
        log::info!(
            "Session started (seed {}, {} lives)",
            session.seed(),
            session.score.lives()
        );
    }

    /// Frame callback. The driver schedules another frame only while this
    /// returns `FrameOutcome::Running`.
    pub fn on_frame(&mut self) -> FrameOutcome {
        let outcome = self.session.frame();
        match outcome {
            FrameOutcome::Running(report) => {
                self.painter.falling(&mut self.surface, &self.session.pool);
                self.painter
                    .sprite(&mut self.surface, Layer::Spawner, &self.session.spawner);
                if report.any() {
                    self.painter.stats(&mut self.surface, &self.session.score);
                }
            }
            FrameOutcome::GameOver => self.painter.game_over(&mut self.surface),
            FrameOutcome::Halted => {}
        }
        outcome
    }

    /// Spawn timer callback; returns the delay to re-arm with, or `None` to stop
    pub fn on_spawn_timer(&mut self) -> Option<u32> {
        self.session.spawn_tick().next_delay_ms
    }

    /// Directional key press
    pub fn on_key(&mut self, direction: Direction) {
        if self.session.handle_input(direction) {
            self.painter
                .sprite(&mut self.surface, Layer::Catcher, self.session.catcher());
        }
    }
}
