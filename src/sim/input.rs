//! Directional input for the hook
//!
//! Keyboard and touch controls both end up here: a set of directions plus the
//! step size of the [`ControlScheme`] that produced them. Keyboard presses
//! apply one [`KEY_STEP`] each, held touch buttons apply [`HOLD_STEP`] every
//! tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{HOLD_STEP, KEY_STEP};
use crate::{clamp_hook_y, clamp_player_x};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// How the player's input reaches the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ControlScheme {
    /// Arrow keys: one step per key press
    #[default]
    Keyboard,
    /// On-screen buttons: moves every tick while held
    Touch,
}

impl ControlScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlScheme::Keyboard => "Keyboard",
            ControlScheme::Touch => "Touch",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "keyboard" | "keys" => Some(ControlScheme::Keyboard),
            "touch" | "mobile" => Some(ControlScheme::Touch),
            _ => None,
        }
    }

    /// Distance moved per input application
    pub fn step(&self) -> f32 {
        match self {
            ControlScheme::Keyboard => KEY_STEP,
            ControlScheme::Touch => HOLD_STEP,
        }
    }

    /// Held sources repeat every tick; keyboard presses fire once
    pub fn is_held(&self) -> bool {
        matches!(self, ControlScheme::Touch)
    }
}

/// Active directional commands for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputIntent {
    /// A single-direction intent
    pub fn only(direction: Direction) -> Self {
        let mut intent = Self::default();
        intent.set(direction, true);
        intent
    }

    pub fn set(&mut self, direction: Direction, active: bool) {
        match direction {
            Direction::Up => self.up = active,
            Direction::Down => self.down = active,
            Direction::Left => self.left = active,
            Direction::Right => self.right = active,
        }
    }

    pub fn is_active(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }

    /// Active directions in a fixed order
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|d| self.is_active(*d))
    }
}

/// Apply an intent to the hook and player anchor.
///
/// Horizontal moves carry the player and hook together; vertical moves only
/// touch the hook. Opposing directions cancel out. Moves past a bound stop at
/// the bound.
pub fn apply_intent(hook: Vec2, player_x: f32, intent: &InputIntent, step: f32) -> (Vec2, f32) {
    let step = step.max(0.0);
    let mut player_x = player_x;
    let mut hook = hook;

    if intent.left {
        player_x = clamp_player_x(player_x - step);
    }
    if intent.right {
        player_x = clamp_player_x(player_x + step);
    }
    hook.x = player_x;

    if intent.up {
        hook.y = clamp_hook_y(hook.y - step);
    }
    if intent.down {
        hook.y = clamp_hook_y(hook.y + step);
    }

    (hook, player_x)
}
