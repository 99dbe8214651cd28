//! Fish movement
//!
//! Fish swim horizontally at constant speed and turn around at the lane
//! edges. No fish ever looks at another, so the update is order-independent.

use super::state::Fish;
use crate::consts::{FISH_MAX_X, FISH_MIN_X};

/// Advance a fish by one tick.
///
/// If the step would leave the lane, the heading flips and the step is taken
/// from the old position in the new direction instead. At most one reflection
/// per tick.
pub fn advance(fish: &Fish) -> Fish {
    let mut next = *fish;
    let mut x = fish.pos.x + fish.heading.sign() * fish.speed;

    if !(FISH_MIN_X..=FISH_MAX_X).contains(&x) {
        next.heading = fish.heading.flipped();
        // Clamp covers speeds wider than the lane
        x = (fish.pos.x + next.heading.sign() * fish.speed).clamp(FISH_MIN_X, FISH_MAX_X);
    }

    next.pos.x = x;
    next
}

/// Advance every fish in place
pub fn advance_all(fish: &mut [Fish]) {
    for f in fish.iter_mut() {
        *f = advance(f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Heading;
    use glam::Vec2;
    use proptest::prelude::*;

    fn fish_at(x: f32, heading: Heading, speed: f32) -> Fish {
        Fish {
            pos: Vec2::new(x, 250.0),
            value: 20,
            heading,
            speed,
        }
    }

    #[test]
    fn test_moves_along_heading() {
        let f = advance(&fish_at(100.0, Heading::Right, 0.5));
        assert_eq!(f.pos.x, 100.5);
        assert_eq!(f.heading, Heading::Right);

        let f = advance(&fish_at(100.0, Heading::Left, 0.5));
        assert_eq!(f.pos.x, 99.5);
    }

    #[test]
    fn test_reflects_at_left_edge() {
        let f = advance(&fish_at(10.2, Heading::Left, 0.5));
        assert_eq!(f.heading, Heading::Right);
        assert!((f.pos.x - 10.7).abs() < 1e-4);
    }

    #[test]
    fn test_reflects_at_right_edge() {
        let f = advance(&fish_at(589.9, Heading::Right, 0.3));
        assert_eq!(f.heading, Heading::Left);
        assert!((f.pos.x - 589.6).abs() < 1e-4);
    }

    #[test]
    fn test_exact_bound_is_inside() {
        let f = advance(&fish_at(10.5, Heading::Left, 0.5));
        assert_eq!(f.pos.x, 10.0);
        assert_eq!(f.heading, Heading::Left);
    }

    #[test]
    fn test_only_x_changes() {
        let before = fish_at(300.0, Heading::Right, 0.25);
        let after = advance(&before);
        assert_eq!(after.pos.y, before.pos.y);
        assert_eq!(after.value, before.value);
        assert_eq!(after.speed, before.speed);
    }

    #[test]
    fn test_huge_speed_stays_in_lane() {
        let f = advance(&fish_at(300.0, Heading::Right, 1000.0));
        assert!((FISH_MIN_X..=FISH_MAX_X).contains(&f.pos.x));
    }

    proptest! {
        #[test]
        fn prop_never_leaves_lane(
            x in FISH_MIN_X..=FISH_MAX_X,
            speed in 0.0f32..0.5,
            right in any::<bool>(),
            ticks in 1usize..5000,
        ) {
            let heading = if right { Heading::Right } else { Heading::Left };
            let mut f = fish_at(x, heading, speed);
            for _ in 0..ticks {
                f = advance(&f);
                prop_assert!((FISH_MIN_X..=FISH_MAX_X).contains(&f.pos.x));
            }
        }
    }
}
