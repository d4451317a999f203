//! Pool of active falling entities

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::catcher::Catcher;
use super::entity::Size;
use super::falling::{FallingEntity, Outcome};
use super::score::ScoreState;

/// Catches and misses produced by one `advance_all` pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdvanceReport {
    pub caught: u32,
    pub missed: u32,
}

impl AdvanceReport {
    /// Whether score or lives may have changed
    pub fn any(&self) -> bool {
        self.caught + self.missed > 0
    }
}

/// Owns every falling entity, in spawn order
///
/// Compaction keeps order and removes finished entities in the same pass. A
/// screen holds a handful of entities at most, so a `Vec` is all this needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityPool {
    entities: Vec<FallingEntity>,
    /// Size of every spawned entity (the parachutist sprite)
    entity_size: Size,
    ocean_level: f32,
}

impl EntityPool {
    pub fn new(entity_size: Size, ocean_level: f32) -> Self {
        Self {
            entities: Vec::new(),
            entity_size,
            ocean_level,
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FallingEntity> {
        self.entities.iter()
    }

    /// Add a new entity at the back of the pool
    pub fn spawn(&mut self, x: f32, y: f32, speed: f32) {
        self.entities.push(FallingEntity::new(
            Vec2::new(x, y),
            self.entity_size,
            speed,
            self.ocean_level,
        ));
    }

    /// Tick every entity once and drop the ones that finished
    pub fn advance_all(&mut self, catcher: &Catcher, score: &mut ScoreState) -> AdvanceReport {
        let mut report = AdvanceReport::default();
        self.entities.retain_mut(|entity| match entity.tick(catcher, score) {
            Outcome::Active => true,
            Outcome::Caught => {
                report.caught += 1;
                false
            }
            Outcome::Missed => {
                report.missed += 1;
                false
            }
        });
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::CatchZone;
    use proptest::prelude::*;

    fn far_catcher() -> Catcher {
        Catcher::new(
            Vec2::new(700.0, 110.0),
            Size::new(65.0, 20.0),
            30.0,
            800.0,
            CatchZone::default(),
        )
    }

    #[test]
    fn test_spawn_appends() {
        let mut pool = EntityPool::new(Size::new(30.0, 30.0), 250.0);
        assert!(pool.is_empty());
        pool.spawn(10.0, 0.0, 1.5);
        pool.spawn(20.0, 0.0, 1.5);
        let xs: Vec<f32> = pool.iter().map(|e| e.pos.x).collect();
        assert_eq!(xs, vec![10.0, 20.0]);
    }

    #[test]
    fn test_advance_removes_finished() {
        let catcher = Catcher::new(
            Vec2::new(180.0, 110.0),
            Size::new(65.0, 20.0),
            30.0,
            800.0,
            CatchZone::new(70.0, 3.0),
        );
        let mut score = ScoreState::default();
        let mut pool = EntityPool::new(Size::new(30.0, 30.0), 250.0);
        pool.spawn(10.0, 0.0, 1.5); // keeps falling
        pool.spawn(185.0, 178.5, 1.5); // caught
        pool.spawn(20.0, 249.0, 1.5); // missed
        pool.spawn(30.0, 100.0, 1.5); // keeps falling

        let report = pool.advance_all(&catcher, &mut score);
        assert_eq!(report, AdvanceReport { caught: 1, missed: 1 });
        assert!(report.any());
        let xs: Vec<f32> = pool.iter().map(|e| e.pos.x).collect();
        assert_eq!(xs, vec![10.0, 30.0]);
        assert_eq!(score.score(), 1);
        assert_eq!(score.lives(), 2);
    }

    proptest! {
        #[test]
        fn prop_advance_keeps_active_subset_in_order(
            starts in proptest::collection::vec(0.0f32..260.0, 0..12),
        ) {
            let catcher = far_catcher();
            let mut score = ScoreState::new(100);
            let mut pool = EntityPool::new(Size::new(30.0, 30.0), 250.0);
            for (i, y) in starts.iter().enumerate() {
                pool.spawn(i as f32, *y, 1.5);
            }

            let expected: Vec<f32> = starts
                .iter()
                .enumerate()
                .filter(|(_, y)| **y + 1.5 <= 250.0)
                .map(|(i, _)| i as f32)
                .collect();

            let report = pool.advance_all(&catcher, &mut score);
            let kept: Vec<f32> = pool.iter().map(|e| e.pos.x).collect();
            prop_assert_eq!(kept, expected);
            prop_assert_eq!(report.missed as usize, starts.len() - pool.len());
            prop_assert!(pool.iter().all(|e| e.state() == Outcome::Active));
        }
    }
}
