//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame / per spawn timer firing
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod catcher;
pub mod collision;
pub mod entity;
pub mod falling;
pub mod pool;
pub mod schedule;
pub mod score;
pub mod session;
pub mod spawner;

pub use catcher::{Catcher, Direction};
pub use collision::{CatchZone, collides};
pub use entity::{Backdrop, BoundingBox, Size, Sprite};
pub use falling::{FallingEntity, Outcome};
pub use pool::{AdvanceReport, EntityPool};
pub use schedule::{PeriodicTask, Schedule, Task};
pub use score::ScoreState;
pub use session::{FrameOutcome, GamePhase, Session};
pub use spawner::{SpawnTick, Spawner};
