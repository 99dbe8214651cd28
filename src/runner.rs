//! Fixed-timestep frame loop
//!
//! Stands in for the display refresh callback: the host reports elapsed time
//! per frame and the loop turns it into whole simulation ticks. Ticking stops
//! the moment the game leaves Running, and nothing ticks after `shutdown`.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};
use crate::settings::{ControlScheme, Settings};
use crate::sim::{Direction, GamePhase, GameState, InputIntent, TickOutcome};

/// State of the loop after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopStatus {
    /// Waiting for Start; no ticks issued
    Idle,
    /// Game in progress
    Running,
    /// Game ended this frame or earlier
    Over { final_score: u32 },
    /// Torn down; will never tick again
    Shutdown,
}

pub struct FrameLoop {
    game: GameState,
    tick_dt: f32,
    accumulator: f32,
    shut_down: bool,
}

impl FrameLoop {
    pub fn new(game: GameState, tick_dt: f32) -> Self {
        Self {
            game,
            tick_dt,
            accumulator: 0.0,
            shut_down: false,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(GameState::new(settings.resolve_seed()), settings.tick_dt())
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn start(&mut self) {
        if !self.shut_down {
            self.game.start();
        }
    }

    pub fn restart(&mut self) {
        if !self.shut_down {
            self.game.restart();
        }
    }

    pub fn set_intent(&mut self, direction: Direction, active: bool) {
        if !self.shut_down {
            self.game.set_intent(direction, active);
        }
    }

    pub fn set_held(&mut self, intent: InputIntent) {
        if !self.shut_down {
            self.game.set_held(intent);
        }
    }

    pub fn move_once(&mut self, direction: Direction) {
        if !self.shut_down {
            self.game.move_once(direction);
        }
    }

    /// Forward a directional intent the way the given control source would
    ///
    /// Touch replaces the held set; keyboard turns each active direction into
    /// a single key press.
    pub fn forward_intent(&mut self, scheme: ControlScheme, intent: InputIntent) {
        if scheme.is_held() {
            self.set_held(intent);
        } else {
            for direction in intent.directions() {
                self.move_once(direction);
            }
        }
    }

    pub fn status(&self) -> LoopStatus {
        if self.shut_down {
            return LoopStatus::Shutdown;
        }
        match self.game.phase() {
            GamePhase::Idle => LoopStatus::Idle,
            GamePhase::Running { .. } => LoopStatus::Running,
            GamePhase::Over { final_score } => LoopStatus::Over { final_score },
        }
    }

    /// Run the ticks owed for `dt` seconds of wall-clock time
    pub fn frame(&mut self, dt: f32) -> LoopStatus {
        if self.shut_down {
            return LoopStatus::Shutdown;
        }
        if !self.game.is_running() {
            self.accumulator = 0.0;
            return self.status();
        }

        let dt = if dt.is_finite() { dt.clamp(0.0, MAX_FRAME_DT) } else { 0.0 };
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= self.tick_dt && substeps < MAX_SUBSTEPS {
            self.accumulator -= self.tick_dt;
            substeps += 1;

            if let TickOutcome::Caught(_) = self.game.tick() {
                self.accumulator = 0.0;
                break;
            }
        }

        self.status()
    }

    /// Stop for good; later frames are no-ops
    pub fn shutdown(&mut self) {
        self.shut_down = true;
        self.accumulator = 0.0;
        log::debug!("Frame loop shut down");
    }

    /// Consume the loop, handing back the final state
    pub fn into_game(self) -> GameState {
        self.game
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PLAYER_START_X;
    use crate::hook_home;
    use crate::sim::{Fish, Heading};

    const DT: f32 = 1.0 / 60.0;

    fn loop_with(fish: Vec<Fish>) -> FrameLoop {
        let mut game = GameState::new(11);
        game.start_with_population(fish);
        FrameLoop::new(game, DT)
    }

    fn running_loop() -> FrameLoop {
        loop_with(Vec::new())
    }

    #[test]
    fn test_idle_does_not_tick() {
        let mut frame_loop = FrameLoop::new(GameState::new(11), DT);
        assert_eq!(frame_loop.frame(DT * 3.0), LoopStatus::Idle);
        assert_eq!(frame_loop.game().time_ticks(), 0);
    }

    #[test]
    fn test_start_through_loop() {
        let mut frame_loop = FrameLoop::new(GameState::new(11), DT);
        frame_loop.start();
        assert_eq!(frame_loop.status(), LoopStatus::Running);
        assert_eq!(frame_loop.game().fish().len(), 18);
    }

    #[test]
    fn test_accumulates_whole_ticks() {
        let mut frame_loop = running_loop();
        frame_loop.frame(DT * 0.5);
        assert_eq!(frame_loop.game().time_ticks(), 0);
        frame_loop.frame(DT * 0.6);
        assert_eq!(frame_loop.game().time_ticks(), 1);
    }

    #[test]
    fn test_substeps_are_capped() {
        let mut frame_loop = running_loop();
        frame_loop.frame(10.0);
        assert!(frame_loop.game().time_ticks() <= MAX_SUBSTEPS as u64);
    }

    #[test]
    fn test_negative_dt_is_ignored() {
        let mut frame_loop = running_loop();
        frame_loop.frame(-1.0);
        frame_loop.frame(f32::NAN);
        assert_eq!(frame_loop.game().time_ticks(), 0);
    }

    #[test]
    fn test_stops_ticking_on_catch() {
        let mut frame_loop = loop_with(vec![Fish {
            pos: hook_home(PLAYER_START_X),
            value: 64,
            heading: Heading::Right,
            speed: 0.0,
        }]);

        let status = frame_loop.frame(DT * 5.0);
        assert_eq!(status, LoopStatus::Over { final_score: 64 });
        assert_eq!(frame_loop.game().time_ticks(), 1);

        frame_loop.frame(DT * 5.0);
        assert_eq!(frame_loop.game().time_ticks(), 1);

        frame_loop.restart();
        assert_eq!(frame_loop.status(), LoopStatus::Idle);
    }

    #[test]
    fn test_shutdown_is_final() {
        let mut frame_loop = running_loop();
        frame_loop.shutdown();
        frame_loop.move_once(Direction::Down);
        assert_eq!(frame_loop.frame(DT * 2.0), LoopStatus::Shutdown);
        assert_eq!(frame_loop.game().time_ticks(), 0);
        assert_eq!(frame_loop.game().hook(), hook_home(PLAYER_START_X));
    }

    #[test]
    fn test_set_intent_through_loop() {
        let mut frame_loop = running_loop();
        frame_loop.set_intent(Direction::Right, true);
        frame_loop.frame(DT);
        assert_eq!(frame_loop.game().player_x(), PLAYER_START_X + 5.0);

        frame_loop.set_intent(Direction::Right, false);
        frame_loop.frame(DT);
        assert_eq!(frame_loop.game().player_x(), PLAYER_START_X + 5.0);
    }

    #[test]
    fn test_forward_keyboard_queues_presses() {
        let mut frame_loop = running_loop();
        frame_loop.forward_intent(ControlScheme::Keyboard, InputIntent::only(Direction::Down));
        frame_loop.frame(DT);
        frame_loop.frame(DT);
        assert_eq!(frame_loop.game().hook().y, 108.0);
    }

    #[test]
    fn test_forward_touch_holds() {
        let mut frame_loop = running_loop();
        frame_loop.forward_intent(ControlScheme::Touch, InputIntent::only(Direction::Down));
        frame_loop.frame(DT);
        frame_loop.frame(DT);
        assert_eq!(frame_loop.game().hook().y, 110.0);
    }
}
