//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (generation order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod input;
pub mod kinematics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{check_collisions, is_catch};
pub use input::{Direction, InputIntent, apply_intent};
pub use kinematics::{advance, advance_all};
pub use spawn::{POPULATION_SIZE, TIERS, Tier, TierSpec, generate};
pub use state::{Fish, FishView, GamePhase, GameState, Heading, Snapshot};
pub use tick::{TickOutcome, tick};
