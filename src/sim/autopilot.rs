//! Demo-mode steering
//!
//! Reads a snapshot like any other presentation client and decides which
//! directions to hold. Targets the closest fish, preferring the more valuable
//! one on a tie.

use glam::Vec2;

use super::input::InputIntent;
use super::state::{FishView, Snapshot};
use crate::consts::HOLD_STEP;

/// Offsets smaller than this are treated as aligned, to avoid jittering
const DEADZONE: f32 = HOLD_STEP / 2.0;

/// Pick the fish the autopilot is going after
pub fn target(snapshot: &Snapshot) -> Option<&FishView> {
    snapshot.fish.iter().min_by(|a, b| {
        let da = snapshot.hook.distance(Vec2::new(a.x, a.y));
        let db = snapshot.hook.distance(Vec2::new(b.x, b.y));
        da.partial_cmp(&db)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(b.value.cmp(&a.value))
    })
}

/// Directions to hold this frame; empty when nothing is running or in sight
pub fn steer(snapshot: &Snapshot) -> InputIntent {
    if !snapshot.phase.is_running() {
        return InputIntent::default();
    }
    let Some(fish) = target(snapshot) else {
        return InputIntent::default();
    };

    let dx = fish.x - snapshot.hook.x;
    let dy = fish.y - snapshot.hook.y;
    InputIntent {
        left: dx < -DEADZONE,
        right: dx > DEADZONE,
        up: dy < -DEADZONE,
        down: dy > DEADZONE,
    }
}
