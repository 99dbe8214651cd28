//! Per-frame simulation tick
//!
//! Order within a tick: input, fish movement, collision, phase transition.

use super::collision::check_collisions;
use super::input::{ControlScheme, InputIntent, apply_intent};
use super::kinematics::advance_all;
use super::state::{Fish, GamePhase, GameState};

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Not running; nothing changed
    Skipped,
    /// The world moved, nobody was caught
    Advanced,
    /// This fish took the hook and the game is over
    Caught(Fish),
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState) -> TickOutcome {
    let GamePhase::Running { score } = state.phase else {
        return TickOutcome::Skipped;
    };

    state.time_ticks += 1;

    // Held (touch) directions re-apply every tick, key presses apply once each
    let held = state.held;
    if !held.is_empty() {
        let step = ControlScheme::Touch.step();
        (state.hook, state.player_x) = apply_intent(state.hook, state.player_x, &held, step);
    }
    let key_step = ControlScheme::Keyboard.step();
    for direction in std::mem::take(&mut state.pulses) {
        let intent = InputIntent::only(direction);
        (state.hook, state.player_x) = apply_intent(state.hook, state.player_x, &intent, key_step);
    }

    advance_all(&mut state.fish);

    // Every fish is tested against the same hook position
    let Some(index) = check_collisions(state.hook, &state.fish) else {
        return TickOutcome::Advanced;
    };

    let caught = state.fish[index];
    let final_score = score.saturating_add(caught.value);
    state.phase = GamePhase::Over { final_score };
    state.clear_input();
    log::info!(
        "Caught a {}-point fish at ({:.1}, {:.1}) on tick {}; final score {}",
        caught.value,
        caught.pos.x,
        caught.pos.y,
        state.time_ticks,
        final_score
    );

    TickOutcome::Caught(caught)
}
