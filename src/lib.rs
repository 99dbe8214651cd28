//! Hook Drop - a one-catch fishing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (fish, hook, collisions, game state)
//! - `runner`: Fixed-timestep frame loop driving the simulation
//! - `settings`: Control scheme and run configuration

pub mod runner;
pub mod settings;
pub mod sim;

pub use runner::{FrameLoop, LoopStatus};
pub use settings::{ControlScheme, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Logical canvas size (square)
    pub const CANVAS_SIZE: f32 = 600.0;
    /// Water surface band spans y in [0, SURFACE_DEPTH]
    pub const SURFACE_DEPTH: f32 = 150.0;

    /// Player (and hook x) horizontal bounds
    pub const PLAYER_MIN_X: f32 = 20.0;
    pub const PLAYER_MAX_X: f32 = 580.0;
    pub const PLAYER_START_X: f32 = 300.0;

    /// Hook vertical bounds; the hook starts at the top
    pub const HOOK_MIN_Y: f32 = 100.0;
    pub const HOOK_MAX_Y: f32 = 550.0;

    /// Fish lane bounds (x only, fish never change depth)
    pub const FISH_MIN_X: f32 = 10.0;
    pub const FISH_MAX_X: f32 = 590.0;
    /// Vertical spread of a tier below its y_min
    pub const TIER_DEPTH_SPAN: f32 = 50.0;

    /// Hook-to-fish distance that counts as a catch (strict <)
    pub const CATCH_RADIUS: f32 = 15.0;

    /// Step per discrete key press
    pub const KEY_STEP: f32 = 8.0;
    /// Step per tick while a touch button is held
    pub const HOLD_STEP: f32 = 5.0;

    /// Default simulation rate (one tick per display frame)
    pub const DEFAULT_TICK_RATE_HZ: f32 = 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta the loop will accept (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Initial hook position for a given player anchor
#[inline]
pub fn hook_home(player_x: f32) -> Vec2 {
    Vec2::new(player_x, consts::HOOK_MIN_Y)
}

/// Clamp a horizontal position to the player bounds
#[inline]
pub fn clamp_player_x(x: f32) -> f32 {
    x.clamp(consts::PLAYER_MIN_X, consts::PLAYER_MAX_X)
}

/// Clamp a vertical hook position to the hook bounds
#[inline]
pub fn clamp_hook_y(y: f32) -> f32 {
    y.clamp(consts::HOOK_MIN_Y, consts::HOOK_MAX_Y)
}
