//! Bounding-box collision detection
//!
//! Horizontal overlap is a plain interval test. Vertically, a falling entity
//! only counts as caught inside a thin band below the catcher's top edge: the
//! deck of the boat, not its whole sprite.

use serde::{Deserialize, Serialize};

use super::entity::BoundingBox;
use crate::consts::{CATCH_ZONE_BAND, CATCH_ZONE_OFFSET};

/// Vertical catch band relative to the catcher's top edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatchZone {
    /// Distance from the catcher's top to the start of the band
    pub vertical_offset: f32,
    /// Height of the band
    pub vertical_band: f32,
}

impl Default for CatchZone {
    fn default() -> Self {
        Self {
            vertical_offset: CATCH_ZONE_OFFSET,
            vertical_band: CATCH_ZONE_BAND,
        }
    }
}

impl CatchZone {
    pub const fn new(vertical_offset: f32, vertical_band: f32) -> Self {
        Self {
            vertical_offset,
            vertical_band,
        }
    }
}

/// Check whether `a` overlaps the catch zone of `b`
#[inline]
pub fn collides(a: BoundingBox, b: BoundingBox, zone: CatchZone) -> bool {
    let zone_top = b.y + zone.vertical_offset;
    a.x < b.right()
        && a.right() > b.x
        && a.y < zone_top + zone.vertical_band
        && a.bottom() > zone_top
}
