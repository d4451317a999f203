//! Headless native runner
//!
//! Drives a full session on a virtual clock, with an optional autopilot at
//! the helm, and records draw calls instead of drawing them.

use crate::App;
use crate::assets::AssetSizes;
use crate::render::RecordingSurface;
use crate::settings::Settings;
use crate::sim::{Direction, FrameOutcome, Schedule, Session, Size, Sprite, Task};

/// Steers the catcher toward the lowest falling entity
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Frames between inputs (a key press every frame would be superhuman)
    every_frames: u32,
    frames: u32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(4)
    }
}

impl Autopilot {
    pub fn new(every_frames: u32) -> Self {
        Self {
            every_frames: every_frames.max(1),
            frames: 0,
        }
    }

    /// Input for this frame, if any
    pub fn steer(&mut self, session: &Session, step: f32) -> Option<Direction> {
        self.frames += 1;
        if self.frames % self.every_frames != 0 {
            return None;
        }

        let target = session
            .pool
            .iter()
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))?;
        let target_x = target.pos.x + target.size().width / 2.0;
        let catcher = session.catcher();
        let catcher_x = catcher.position().x + catcher.size().width / 2.0;

        let delta = target_x - catcher_x;
        if delta > step / 2.0 {
            Some(Direction::Right)
        } else if delta < -step / 2.0 {
            Some(Direction::Left)
        } else {
            None
        }
    }
}

/// Outcome of a headless run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub spawn_ticks: u64,
    pub caught: u64,
    pub missed: u64,
    pub score: u64,
    pub lives: u8,
    pub game_over: bool,
    /// Both timers stopped on their own
    pub timers_stopped: bool,
    pub draw_calls: u64,
}

/// Run one session until it ends or `max_frames` frames have run
pub fn run(settings: &Settings, seed: u64, max_frames: u64, mut autopilot: Option<Autopilot>) -> RunSummary {
    let canvas = Size::new(settings.canvas_width, settings.canvas_height);
    let session = Session::new(settings, canvas, &AssetSizes::default(), seed);
    let mut app = App::new(session, RecordingSurface::new());
    let mut summary = RunSummary::default();

    app.start();

    let mut schedule = Schedule::new(settings.frame_interval_ms);
    schedule.spawn_now();
    schedule.request_frame();

    while let Some(task) = schedule.next() {
        match task {
            Task::Frame => {
                summary.frames += 1;
                if let Some(pilot) = autopilot.as_mut() {
                    if let Some(direction) = pilot.steer(app.session(), settings.catcher_step) {
                        app.on_key(direction);
                    }
                }
                match app.on_frame() {
                    FrameOutcome::Running(report) => {
                        summary.caught += u64::from(report.caught);
                        summary.missed += u64::from(report.missed);
                        schedule.request_frame();
                    }
                    FrameOutcome::GameOver => summary.game_over = true,
                    FrameOutcome::Halted => {}
                }
            }
            Task::Spawn => {
                summary.spawn_ticks += 1;
                if let Some(delay) = app.on_spawn_timer() {
                    schedule.spawn_after(delay);
                }
            }
        }

        summary.draw_calls += app.surface().commands.len() as u64;
        app.surface_mut().clear();

        if summary.frames >= max_frames {
            log::warn!("Frame cap {} reached, stopping", max_frames);
            break;
        }
    }

    let session = app.session();
    summary.score = session.score.score();
    summary.lives = session.score.lives();
    summary.timers_stopped = schedule.is_idle();
    log::info!(
        "Run finished after {} frames ({:.1}s): score {}, lives {}",
        summary.frames,
        schedule.now_ms() / 1000.0,
        summary.score,
        summary.lives
    );
    summary
}
