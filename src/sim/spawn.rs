//! Fish population generation
//!
//! Three depth tiers: shallow water is crowded with cheap fast fish, the deep
//! end holds a few slow valuable ones.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Fish, Heading};
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Surface,
    Mid,
    Deep,
}

/// Generation parameters for one tier
#[derive(Debug, Clone, Copy)]
pub struct TierSpec {
    pub tier: Tier,
    pub count: usize,
    /// Top of the tier's band; fish land in [y_min, y_min + TIER_DEPTH_SPAN)
    pub y_min: f32,
    pub value_min: u32,
    /// Number of distinct values (max = value_min + value_span - 1)
    pub value_span: u32,
    pub speed_min: f32,
    pub speed_span: f32,
}

impl TierSpec {
    pub fn value_max(&self) -> u32 {
        self.value_min + self.value_span - 1
    }

    pub fn speed_max(&self) -> f32 {
        self.speed_min + self.speed_span
    }
}

pub const TIERS: [TierSpec; 3] = [
    TierSpec {
        tier: Tier::Surface,
        count: 8,
        y_min: 200.0,
        value_min: 10,
        value_span: 20,
        speed_min: 0.2,
        speed_span: 0.3,
    },
    TierSpec {
        tier: Tier::Mid,
        count: 6,
        y_min: 300.0,
        value_min: 31,
        value_span: 30,
        speed_min: 0.15,
        speed_span: 0.25,
    },
    TierSpec {
        tier: Tier::Deep,
        count: 4,
        y_min: 450.0,
        value_min: 61,
        value_span: 40,
        speed_min: 0.1,
        speed_span: 0.2,
    },
];

/// Total fish per population
pub const POPULATION_SIZE: usize = TIERS[0].count + TIERS[1].count + TIERS[2].count;

/// Draw a single fish for the given tier
pub fn spawn_fish<R: Rng>(spec: &TierSpec, rng: &mut R) -> Fish {
    let x = rng.random_range(FISH_MIN_X..FISH_MAX_X);
    let y = rng.random_range(spec.y_min..spec.y_min + TIER_DEPTH_SPAN);
    let value = rng.random_range(spec.value_min..spec.value_min + spec.value_span);
    let heading = if rng.random_bool(0.5) {
        Heading::Right
    } else {
        Heading::Left
    };
    let speed = rng.random_range(spec.speed_min..spec.speed_max());

    Fish {
        pos: Vec2::new(x, y),
        value,
        heading,
        speed,
    }
}

/// Generate a full population, Surface first, then Mid, then Deep
pub fn generate<R: Rng>(rng: &mut R) -> Vec<Fish> {
    let mut fish = Vec::with_capacity(POPULATION_SIZE);
    for spec in &TIERS {
        for _ in 0..spec.count {
            fish.push(spawn_fish(spec, rng));
        }
        log::debug!("Spawned {} {:?} fish", spec.count, spec.tier);
    }
    fish
}
