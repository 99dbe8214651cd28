//! Hook-to-fish collision detection
//!
//! The hook is a point; a fish is caught when its centre is strictly closer
//! than [`CATCH_RADIUS`] to the hook.

use glam::Vec2;

use super::state::Fish;
use crate::consts::CATCH_RADIUS;

/// Whether a fish at `fish_pos` is on the hook
#[inline]
pub fn is_catch(hook: Vec2, fish_pos: Vec2) -> bool {
    hook.distance(fish_pos) < CATCH_RADIUS
}

/// Index of the caught fish, if any.
///
/// When several fish are in range on the same tick the first one in slice
/// order wins; the game ends on that catch so the others are never scored.
pub fn check_collisions(hook: Vec2, fish: &[Fish]) -> Option<usize> {
    fish.iter().position(|f| is_catch(hook, f.pos))
}
