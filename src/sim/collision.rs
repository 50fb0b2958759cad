//! Catch detection
//!
//! The hit test is a hybrid: a vertical band overlap against the basket's box
//! combined with a horizontal center-distance check. It is intentionally
//! looser than a true AABB test and is preserved exactly, since tightening it
//! changes how forgiving the basket feels.

use super::state::{FallingItem, Player};
use crate::consts::{CATCH_BAND, CATCH_RADIUS};

/// Has this item fallen into the basket?
pub fn item_caught(item: &FallingItem, player: &Player) -> bool {
    item.y + CATCH_BAND > player.y
        && item.y < player.y + player.height
        && (item.x - player.x).abs() < CATCH_RADIUS
}

/// Has this item fallen past the bottom edge (a silent miss)?
pub fn item_missed(item: &FallingItem, playfield_height: f32) -> bool {
    item.y > playfield_height
}
