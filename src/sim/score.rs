//! Score and lives
//!
//! Both counters only move through `record_catch` / `record_miss`, and both
//! freeze the moment lives reach zero.

use serde::{Deserialize, Serialize};

use crate::consts::STARTING_LIVES;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    score: u64,
    lives: u8,
}

impl Default for ScoreState {
    fn default() -> Self {
        Self::new(STARTING_LIVES)
    }
}

impl ScoreState {
    pub fn new(lives: u8) -> Self {
        Self { score: 0, lives }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }

    /// Lose a life. Returns false (and changes nothing) once the game is over.
    pub fn record_miss(&mut self) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.lives -= 1;
        log::debug!("Miss: {} lives left", self.lives);
        true
    }

    /// Score a catch. Returns false (and changes nothing) once the game is over.
    pub fn record_catch(&mut self) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.score += 1;
        log::debug!("Catch: score {}", self.score);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_three_misses_end_the_game() {
        let mut score = ScoreState::default();
        assert_eq!(score.lives(), 3);

        for _ in 0..3 {
            assert!(score.is_alive());
            assert!(score.record_miss());
        }
        assert_eq!(score.lives(), 0);
        assert!(!score.is_alive());

        // Fourth miss is ignored
        assert!(!score.record_miss());
        assert_eq!(score.lives(), 0);
    }

    #[test]
    fn test_catch_frozen_after_game_over() {
        let mut score = ScoreState::new(1);
        assert!(score.record_catch());
        assert!(score.record_miss());
        assert!(!score.record_catch());
        assert_eq!(score.score(), 1);
    }

    proptest! {
        #[test]
        fn prop_counters_are_monotonic(ops in proptest::collection::vec(any::<bool>(), 0..64)) {
            let mut score = ScoreState::default();
            for catch in ops {
                let before = score.clone();
                if catch {
                    score.record_catch();
                } else {
                    score.record_miss();
                }
                prop_assert!(score.score() >= before.score());
                prop_assert!(score.lives() <= before.lives());
                if !before.is_alive() {
                    prop_assert_eq!(&score, &before);
                }
            }
        }
    }
}
